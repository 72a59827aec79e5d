//! Game Logic
//!
//! Session bookkeeping, the master/peripheral link, and the controller
//! state machine that ties them together.

pub mod controller;
pub mod cue;
pub mod io;
pub mod link;
pub mod session;
