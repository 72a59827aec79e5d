//! PWM Driver
//!
//! Hobby-servo output for the countdown gauge: a 50 Hz frame whose pulse
//! width encodes the angle (see [`ServoAngle::pulse_us`]).

use embedded_hal::pwm::SetDutyCycle;

use crate::config::SERVO_FRAME_US;
use crate::game::io::Actuator;
use crate::types::ServoAngle;

/// Servo on one PWM channel running at `SERVO_PWM_HZ`
pub struct ServoPwm<P> {
    channel: P,
    angle: ServoAngle,
}

impl<P: SetDutyCycle> ServoPwm<P> {
    /// Attach the servo and park it at 0 degrees
    pub fn attach(channel: P) -> Self {
        let mut servo = Self {
            channel,
            angle: ServoAngle::ZERO,
        };
        servo.drive(ServoAngle::ZERO);
        servo
    }

    fn drive(&mut self, angle: ServoAngle) {
        // pulse_us <= 2400 and SERVO_FRAME_US == 20000, both fit in u16
        let pulse = angle.pulse_us() as u16;
        let _ = self
            .channel
            .set_duty_cycle_fraction(pulse, SERVO_FRAME_US as u16);
        self.angle = angle;
    }
}

impl<P: SetDutyCycle> Actuator for ServoPwm<P> {
    fn write(&mut self, angle: ServoAngle) {
        if angle != self.angle {
            self.drive(angle);
        }
    }
}
