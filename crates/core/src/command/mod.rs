//! Check command description and execution

pub mod check_command;
pub mod executor;

// Re-export commonly used types
pub use check_command::{CheckCommand, CommandType};
pub use executor::{Executor, ProcessExecutor};
