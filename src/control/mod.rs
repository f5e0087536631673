//! Discrete-time feedback control.
//!
//! Currently provides [`Pid`], a velocity-form PID controller suited to
//! fixed-rate control loops on embedded targets.

mod pid;

pub use pid::Pid;
