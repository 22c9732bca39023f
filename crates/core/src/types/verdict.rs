use super::state::RunState;

/// Final release-readiness classification of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No critical failures and no warnings
    Ready,
    /// Critical checks all passed, but at least one advisory check failed
    WarningsMustBeFixed,
    /// At least one critical check failed
    NotReady,
}

impl Verdict {
    pub fn from_state(state: &RunState) -> Self {
        if !state.critical_failures().is_empty() {
            Verdict::NotReady
        } else if !state.warnings().is_empty() {
            Verdict::WarningsMustBeFixed
        } else {
            Verdict::Ready
        }
    }

    pub fn is_ready(self) -> bool {
        matches!(self, Verdict::Ready)
    }

    pub fn exit_code(self) -> i32 {
        if self.is_ready() { 0 } else { 1 }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Verdict::Ready => "CRATE IS READY FOR CRATES.IO RELEASE!",
            Verdict::WarningsMustBeFixed => "CRATE NOT READY - WARNINGS MUST BE FIXED",
            Verdict::NotReady => "CRATE NOT READY FOR RELEASE",
        }
    }

    pub fn guidance(self) -> &'static [&'static str] {
        match self {
            Verdict::Ready => &[
                "All checks passed with no failures or warnings. You can proceed with publishing.",
            ],
            Verdict::WarningsMustBeFixed => &[
                "All critical checks passed, but warnings must be addressed before release.",
                "Please fix the warnings above to proceed with publishing.",
            ],
            Verdict::NotReady => {
                &["Please fix the critical failures and warnings before publishing."]
            }
        }
    }
}
