//! CLI command implementations

pub mod click;
pub mod config;
pub mod replay;
