//! Peripheral Drivers
//!
//! High-level drivers for external parts wired to the master unit.

pub mod lcd;
