pub mod cli;
pub mod commands;
pub mod display;

// Re-export commonly used items
pub use cli::{Args, Cargo, CargoCommand, parse_args, parse_args_from};
