use std::time::Duration;

/// Where a failed check is routed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criticality {
    Critical,
    Warning,
}

impl Criticality {
    pub fn is_critical(self) -> bool {
        matches!(self, Criticality::Critical)
    }
}

/// What happened when a single check ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Zero exit status, with captured stdout
    Passed { stdout: String },
    /// Non-zero exit status, with captured stderr
    Failed { code: Option<i32>, stderr: String },
    /// Killed after exceeding the per-command timeout
    TimedOut { after: Duration },
    /// The command could not be run at all (not found, permission denied, ...)
    Error(String),
    /// A required file exists
    Present,
    /// A required file is absent
    Missing,
}

impl Outcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, Outcome::Passed { .. } | Outcome::Present)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Outcome::TimedOut { .. })
    }

    /// Captured text: stdout on success, stderr or an error description otherwise.
    pub fn output(&self) -> String {
        match self {
            Outcome::Passed { stdout } => stdout.clone(),
            Outcome::Failed { code, stderr } => {
                if stderr.trim().is_empty() {
                    match code {
                        Some(code) => format!("command exited with status {code}"),
                        None => "command terminated by signal".to_string(),
                    }
                } else {
                    stderr.clone()
                }
            }
            Outcome::TimedOut { after } => {
                format!("Command timed out after {} seconds", after.as_secs())
            }
            Outcome::Error(message) => message.clone(),
            Outcome::Present | Outcome::Missing => String::new(),
        }
    }
}

/// The immutable record of one executed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub description: String,
    pub criticality: Criticality,
    pub outcome: Outcome,
}

impl CheckResult {
    pub fn new(description: impl Into<String>, criticality: Criticality, outcome: Outcome) -> Self {
        Self {
            description: description.into(),
            criticality,
            outcome,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.outcome.succeeded()
    }

    /// The label shown in the report, e.g. `"Release build - TIMEOUT"`.
    pub fn label(&self) -> String {
        let description = &self.description;
        match &self.outcome {
            Outcome::Passed { .. } => format!("{description} - PASSED"),
            Outcome::Failed { .. } => format!("{description} - FAILED"),
            Outcome::TimedOut { .. } => format!("{description} - TIMEOUT"),
            Outcome::Error(message) => format!("{description} - ERROR: {message}"),
            Outcome::Present => format!("{description} - EXISTS"),
            Outcome::Missing => format!("{description} missing"),
        }
    }
}
