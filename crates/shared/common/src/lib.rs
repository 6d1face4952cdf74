//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Configuration structures loaded from the environment
//! - Tracing subscriber setup

pub mod config;
pub mod telemetry;

pub use config::*;
pub use telemetry::init_tracing;
