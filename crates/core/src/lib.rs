//! Timing primitives for Pacer
//!
//! This crate provides:
//! - `Clock` / `Scheduler` traits (the time source and timer collaborator)
//! - Tokio-backed implementations
//! - `Delay` normalization (absent or negative delays become zero)
//! - TOML configuration and the shared error type

pub mod clock;
pub mod config;
pub mod delay;
pub mod error;
pub mod scheduler;

// Re-exports
pub use clock::{Clock, TokioClock};
pub use config::{DebounceConfig, PacerConfig, ThrottleConfig};
pub use delay::Delay;
pub use error::{Error, Result};
pub use scheduler::{Scheduler, Task, TokioScheduler};
