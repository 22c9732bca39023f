pub mod check;
pub mod state;
pub mod verdict;

// Re-export commonly used types
pub use check::{CheckResult, Criticality, Outcome};
pub use state::RunState;
pub use verdict::Verdict;
