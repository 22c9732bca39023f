use super::check::CheckResult;

/// Counters and failure lists for one run.
///
/// Counters only increase and lists only grow. After every call to
/// [`RunState::record`] the following holds:
/// `total_checks == passed_checks + critical_failures.len() + warnings.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    total_checks: usize,
    passed_checks: usize,
    critical_failures: Vec<String>,
    warnings: Vec<String>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one check result into the run.
    pub fn record(&mut self, result: &CheckResult) {
        self.total_checks += 1;

        if result.succeeded() {
            self.passed_checks += 1;
        } else if result.criticality.is_critical() {
            self.critical_failures.push(result.label());
        } else {
            self.warnings.push(result.label());
        }
    }

    pub fn total_checks(&self) -> usize {
        self.total_checks
    }

    pub fn passed_checks(&self) -> usize {
        self.passed_checks
    }

    pub fn critical_failures(&self) -> &[String] {
        &self.critical_failures
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn failed_checks(&self) -> usize {
        self.critical_failures.len()
    }

    pub fn is_consistent(&self) -> bool {
        self.total_checks == self.passed_checks + self.critical_failures.len() + self.warnings.len()
    }
}
