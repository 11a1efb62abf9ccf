//! Library half of the `pacer` binary
//!
//! Holds the parts of the CLI that are worth testing without spawning a
//! process: call-schedule parsing, replay through a limiter, config lookup.

pub mod replay;
pub mod util;
