//! Sequential execution of the release checklist

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::command::{Executor, ProcessExecutor};
use crate::config::Settings;
use crate::phases::{Check, CheckKind, Phase, default_phases};
use crate::types::{CheckResult, Outcome, RunState, Verdict};

/// Receives progress events while a run executes.
///
/// All methods default to no-ops so a reporter only implements what it shows.
pub trait Reporter {
    fn phase_started(&mut self, _phase: &Phase) {}

    /// `command_line` is set for command checks, after channel and env binding
    fn check_started(&mut self, _check: &Check, _command_line: Option<&str>) {}

    fn check_finished(&mut self, _check: &Check, _result: &CheckResult) {}

    fn phase_finished(&mut self, _phase: &Phase, _passed: bool) {}

    fn aborted(&mut self, _phase: &Phase) {}
}

/// Reporter that ignores every event
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Everything the summary needs once a run is over
#[derive(Debug, Clone)]
pub struct RunReport {
    pub state: RunState,
    pub elapsed: Duration,
    /// Prerequisites failed and later phases were skipped
    pub aborted: bool,
    /// Logical AND of every executed phase's result
    pub all_phases_passed: bool,
}

impl RunReport {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_state(&self.state)
    }

    pub fn exit_code(&self) -> i32 {
        if self.aborted {
            1
        } else {
            self.verdict().exit_code()
        }
    }
}

pub struct CheckRunner<E = ProcessExecutor> {
    settings: Settings,
    executor: E,
    phases: Vec<Phase>,
}

impl CheckRunner<ProcessExecutor> {
    pub fn new(settings: Settings) -> Self {
        Self::with_executor(settings, ProcessExecutor::new())
    }
}

impl<E: Executor> CheckRunner<E> {
    pub fn with_executor(settings: Settings, executor: E) -> Self {
        Self {
            settings,
            executor,
            phases: default_phases(),
        }
    }

    pub fn with_phases(mut self, phases: Vec<Phase>) -> Self {
        self.phases = phases;
        self
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Run every phase in order. Only a failing abort phase stops early.
    pub fn run(&self, reporter: &mut dyn Reporter) -> RunReport {
        let started = Instant::now();
        let mut state = RunState::new();
        let mut all_phases_passed = true;
        let mut aborted = false;

        for phase in &self.phases {
            info!("Starting phase {:?}", phase.kind);
            let passed = self.run_phase(phase, &mut state, reporter);
            all_phases_passed &= passed;

            if !passed && phase.aborts_on_failure() {
                info!("Phase {:?} failed, aborting run", phase.kind);
                reporter.aborted(phase);
                aborted = true;
                break;
            }
        }

        RunReport {
            state,
            elapsed: started.elapsed(),
            aborted,
            all_phases_passed,
        }
    }

    fn run_phase(&self, phase: &Phase, state: &mut RunState, reporter: &mut dyn Reporter) -> bool {
        reporter.phase_started(phase);

        let mut passed = true;
        for check in &phase.checks {
            let result = self.run_check(check, reporter);
            state.record(&result);
            debug_assert!(state.is_consistent());
            passed &= result.succeeded();
            reporter.check_finished(check, &result);
        }

        reporter.phase_finished(phase, passed);
        passed
    }

    fn run_check(&self, check: &Check, reporter: &mut dyn Reporter) -> CheckResult {
        let outcome = match &check.kind {
            CheckKind::Command(command) => {
                let prepared = self.settings.prepare(command);
                reporter.check_started(check, Some(prepared.to_shell_command().as_str()));
                self.executor.execute(&prepared, self.settings.timeout)
            }
            CheckKind::FileExists(file_name) => {
                reporter.check_started(check, None);
                let path = self.settings.project_path(file_name);
                debug!("Checking for {:?}", path);
                if path.exists() {
                    Outcome::Present
                } else {
                    Outcome::Missing
                }
            }
        };

        if outcome.is_timeout() {
            warn!("{} timed out after {:?}", check.description, self.settings.timeout);
        }

        CheckResult::new(check.description, check.criticality, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CheckCommand;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    /// Executor that answers from a script keyed by command line.
    /// Anything not scripted passes.
    #[derive(Default)]
    struct ScriptedExecutor {
        failures: Vec<(&'static str, Outcome)>,
        invoked: RefCell<Vec<String>>,
    }

    impl ScriptedExecutor {
        fn failing(mut self, command_line: &'static str, outcome: Outcome) -> Self {
            self.failures.push((command_line, outcome));
            self
        }

        fn invoked(&self) -> Vec<String> {
            self.invoked.borrow().clone()
        }
    }

    impl Executor for ScriptedExecutor {
        fn execute(&self, command: &CheckCommand, _timeout: Duration) -> Outcome {
            let line = command.to_shell_command();
            self.invoked.borrow_mut().push(line.clone());
            self.failures
                .iter()
                .find(|(scripted, _)| *scripted == line)
                .map(|(_, outcome)| outcome.clone())
                .unwrap_or(Outcome::Passed {
                    stdout: String::new(),
                })
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        events: Vec<String>,
    }

    impl Reporter for RecordingReporter {
        fn phase_started(&mut self, phase: &Phase) {
            self.events.push(format!("phase:{}", phase.title));
        }

        fn check_finished(&mut self, _check: &Check, result: &CheckResult) {
            self.events.push(result.label());
        }

        fn aborted(&mut self, phase: &Phase) {
            self.events.push(format!("abort:{}", phase.title));
        }
    }

    fn failed() -> Outcome {
        Outcome::Failed {
            code: Some(101),
            stderr: "error: could not compile".to_string(),
        }
    }

    fn compliant_project() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in ["Cargo.toml", "README.md", "LICENSE"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        dir
    }

    fn settings_for(dir: &TempDir) -> Settings {
        Settings {
            project_dir: dir.path().to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_run_is_ready() {
        let dir = compliant_project();
        let runner = CheckRunner::with_executor(settings_for(&dir), ScriptedExecutor::default());
        let report = runner.run(&mut NullReporter);

        assert_eq!(report.state.total_checks(), 18);
        assert_eq!(report.state.passed_checks(), 18);
        assert!(report.all_phases_passed);
        assert!(!report.aborted);
        assert_eq!(report.verdict(), Verdict::Ready);
        assert_eq!(report.exit_code(), 0);
        assert_eq!(runner.executor().invoked().len(), 15);
    }

    #[test]
    fn test_failed_git_check_aborts_everything_after_prerequisites() {
        let dir = compliant_project();
        let executor = ScriptedExecutor::default().failing(
            "git --version",
            Outcome::Error("No such file or directory (os error 2)".to_string()),
        );
        let runner = CheckRunner::with_executor(settings_for(&dir), executor);
        let mut reporter = RecordingReporter::default();
        let report = runner.run(&mut reporter);

        assert!(report.aborted);
        assert_eq!(report.exit_code(), 1);
        assert_eq!(
            runner.executor().invoked(),
            vec!["cargo --version", "rustc --version", "git --version"]
        );
        assert_eq!(report.state.total_checks(), 3);
        assert_eq!(
            report.state.critical_failures(),
            ["Git availability - ERROR: No such file or directory (os error 2)"]
        );
        assert_eq!(reporter.events.last().unwrap(), "abort:PREREQUISITE CHECKS");
    }

    #[test]
    fn test_critical_failures_do_not_stop_later_phases() {
        let dir = compliant_project();
        let executor = ScriptedExecutor::default()
            .failing("cargo build --release", failed())
            .failing("cargo fmt --all --check", failed());
        let runner = CheckRunner::with_executor(settings_for(&dir), executor);
        let report = runner.run(&mut NullReporter);

        assert!(!report.aborted);
        assert!(!report.all_phases_passed);
        assert_eq!(runner.executor().invoked().len(), 15);
        assert_eq!(
            report.state.critical_failures(),
            ["Release build - FAILED", "Code formatting - FAILED"]
        );
        assert!(report.state.warnings().is_empty());
        assert_eq!(report.verdict(), Verdict::NotReady);
    }

    #[test]
    fn test_advisory_failures_become_warnings() {
        let dir = compliant_project();
        let executor = ScriptedExecutor::default()
            .failing("cargo doc --no-deps", failed())
            .failing(
                "cargo package --allow-dirty",
                Outcome::TimedOut {
                    after: Duration::from_secs(300),
                },
            );
        let runner = CheckRunner::with_executor(settings_for(&dir), executor);
        let report = runner.run(&mut NullReporter);

        assert_eq!(
            report.state.warnings(),
            ["Basic documentation - FAILED", "Package creation - TIMEOUT"]
        );
        assert!(report.state.critical_failures().is_empty());
        assert_eq!(report.verdict(), Verdict::WarningsMustBeFixed);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_metadata_with_only_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Cargo.toml"), "[package]\nname = \"demo\"\n").unwrap();

        let metadata: Vec<Phase> = default_phases()
            .into_iter()
            .filter(|p| p.kind == crate::phases::PhaseKind::Metadata)
            .collect();
        let runner = CheckRunner::with_executor(settings_for(&dir), ScriptedExecutor::default())
            .with_phases(metadata);
        let report = runner.run(&mut NullReporter);

        assert_eq!(report.state.total_checks(), 3);
        assert_eq!(report.state.passed_checks(), 1);
        assert!(report.state.critical_failures().is_empty());
        assert_eq!(
            report.state.warnings(),
            ["README file missing", "License file missing"]
        );
        assert!(runner.executor().invoked().is_empty());
    }

    #[test]
    fn test_missing_manifest_is_critical() {
        let dir = TempDir::new().unwrap();
        let runner = CheckRunner::with_executor(settings_for(&dir), ScriptedExecutor::default());
        let report = runner.run(&mut NullReporter);

        assert_eq!(report.state.critical_failures(), ["Cargo manifest missing"]);
        assert_eq!(report.state.warnings().len(), 2);
        assert_eq!(report.verdict(), Verdict::NotReady);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let dir = compliant_project();
        let runner = CheckRunner::with_executor(
            settings_for(&dir),
            ScriptedExecutor::default().failing("cargo package --list", failed()),
        );

        let first = runner.run(&mut NullReporter);
        let second = runner.run(&mut NullReporter);

        assert_eq!(first.state, second.state);
        assert_eq!(first.verdict(), second.verdict());
    }

    #[test]
    fn test_channel_is_applied_to_toolchain_commands() {
        let dir = compliant_project();
        let settings = Settings {
            channel: Some("nightly".to_string()),
            ..settings_for(&dir)
        };
        let runner = CheckRunner::with_executor(settings, ScriptedExecutor::default());
        runner.run(&mut NullReporter);

        let invoked = runner.executor().invoked();
        assert_eq!(invoked[0], "cargo +nightly --version");
        assert_eq!(invoked[1], "rustc +nightly --version");
        assert_eq!(invoked[2], "git --version");
        assert!(invoked[3..].iter().all(|line| line.starts_with("cargo +nightly ")));
    }

    #[test]
    fn test_reporter_sees_every_phase_in_order() {
        let dir = compliant_project();
        let runner = CheckRunner::with_executor(settings_for(&dir), ScriptedExecutor::default());
        let mut reporter = RecordingReporter::default();
        runner.run(&mut reporter);

        let phases: Vec<_> = reporter
            .events
            .iter()
            .filter_map(|e| e.strip_prefix("phase:"))
            .collect();
        assert_eq!(
            phases,
            vec![
                "PREREQUISITE CHECKS",
                "CORE COMPILATION & TESTING",
                "CODE QUALITY CHECKS",
                "DOCUMENTATION CHECKS",
                "PACKAGE VALIDATION",
                "METADATA & FILES CHECK",
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_real_timeout_is_recorded_distinctly() {
        use crate::phases::PhaseKind;
        use crate::types::Criticality;

        let dir = compliant_project();
        let settings = Settings {
            timeout: Duration::from_millis(300),
            ..settings_for(&dir)
        };
        let phase = Phase::new(
            PhaseKind::CoreBuild,
            "SLOW",
            vec![
                Check::command(
                    "Hangs forever",
                    CheckCommand::tool("sleep", ["30"]),
                    Criticality::Critical,
                ),
                Check::command(
                    "Fails quickly",
                    CheckCommand::tool("sh", ["-c", "exit 1"]),
                    Criticality::Critical,
                ),
            ],
        );
        let runner = CheckRunner::new(settings).with_phases(vec![phase]);
        let report = runner.run(&mut NullReporter);

        assert_eq!(
            report.state.critical_failures(),
            ["Hangs forever - TIMEOUT", "Fails quickly - FAILED"]
        );
        assert!(report.elapsed < Duration::from_secs(10));
    }
}
