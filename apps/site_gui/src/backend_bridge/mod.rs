//! Backend worker: owns the tokio runtime, the lead client and reset timers.

pub mod commands;
pub mod runtime;
