//! cratecheck - release-readiness checks for Rust crates
//!
//! This crate provides functionality to:
//! - Describe the release checklist as ordered phases of checks
//! - Execute each check with a timeout and classify its outcome
//! - Aggregate outcomes into run counters and a final verdict
pub mod command;
pub mod config;
pub mod error;
pub mod phases;
pub mod project;
pub mod runner;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::{CheckCommand, CommandType, Executor, ProcessExecutor};
pub use config::{Config, Settings};
pub use phases::{Check, CheckKind, Phase, PhaseKind, default_phases};
pub use project::ProjectInfo;
pub use runner::{CheckRunner, NullReporter, Reporter, RunReport};
