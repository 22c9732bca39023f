use cratecheck_core::{Check, CheckResult, Outcome, Phase, Reporter};

use super::{Tone, paint, print_header, print_step};

/// Prints progress to stdout as the run advances
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn phase_started(&mut self, phase: &Phase) {
        print_header(phase.title);
    }

    fn check_started(&mut self, check: &Check, command_line: Option<&str>) {
        print_step(&check.step_title());
        if let Some(cmd) = command_line {
            println!("   Running: {}", cmd);
        }
    }

    fn check_finished(&mut self, _check: &Check, result: &CheckResult) {
        for (tone, line) in result_lines(result, self.verbose) {
            println!("   {}", paint(tone, &line));
        }
    }

    fn aborted(&mut self, _phase: &Phase) {
        println!();
        println!(
            "{}",
            paint(Tone::Fail, "❌ Prerequisites failed. Cannot continue.")
        );
    }
}

/// Lines printed under a finished check, without indentation or color
pub fn result_lines(result: &CheckResult, verbose: bool) -> Vec<(Tone, String)> {
    let description = &result.description;
    let mut lines = Vec::new();

    match &result.outcome {
        Outcome::Passed { stdout } => {
            lines.push((Tone::Pass, format!("✅ {description} - PASSED")));
            if verbose {
                lines.extend(
                    stdout
                        .lines()
                        .filter(|l| !l.trim().is_empty())
                        .map(|l| (Tone::Plain, format!("   {l}"))),
                );
            }
        }
        Outcome::Failed { .. } => {
            lines.push((Tone::Fail, format!("❌ {}", result.label())));
            let detail = result.outcome.output();
            let detail = detail.trim();
            if !detail.is_empty() {
                lines.push((Tone::Fail, format!("Error: {detail}")));
            }
        }
        Outcome::TimedOut { .. } => {
            lines.push((Tone::Fail, format!("⏰ {}", result.label())));
        }
        Outcome::Error(_) => {
            lines.push((Tone::Fail, format!("💥 {}", result.label())));
        }
        Outcome::Present => {
            lines.push((Tone::Pass, format!("✅ {}", result.label())));
        }
        Outcome::Missing => {
            lines.push((Tone::Warn, format!("⚠️  {description} - MISSING")));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use cratecheck_core::Criticality;
    use std::time::Duration;

    fn texts(result: &CheckResult, verbose: bool) -> Vec<String> {
        result_lines(result, verbose)
            .into_iter()
            .map(|(_, line)| line)
            .collect()
    }

    #[test]
    fn test_failed_check_echoes_stderr() {
        let result = CheckResult::new(
            "Clippy linting",
            Criticality::Critical,
            Outcome::Failed {
                code: Some(101),
                stderr: "error: unused variable\n".to_string(),
            },
        );
        assert_eq!(
            texts(&result, false),
            vec!["❌ Clippy linting - FAILED", "Error: error: unused variable"]
        );
    }

    #[test]
    fn test_passed_output_only_when_verbose() {
        let result = CheckResult::new(
            "Cargo availability",
            Criticality::Critical,
            Outcome::Passed {
                stdout: "cargo 1.80.0\n".to_string(),
            },
        );
        assert_eq!(texts(&result, false), vec!["✅ Cargo availability - PASSED"]);
        assert_eq!(
            texts(&result, true),
            vec!["✅ Cargo availability - PASSED", "   cargo 1.80.0"]
        );
    }

    #[test]
    fn test_timeout_and_missing_lines() {
        let timed_out = CheckResult::new(
            "Release build",
            Criticality::Critical,
            Outcome::TimedOut {
                after: Duration::from_secs(300),
            },
        );
        let (tone, line) = &result_lines(&timed_out, false)[0];
        assert_eq!(*tone, Tone::Fail);
        assert_eq!(line, "⏰ Release build - TIMEOUT");

        let missing = CheckResult::new("License file", Criticality::Warning, Outcome::Missing);
        let (tone, line) = &result_lines(&missing, false)[0];
        assert_eq!(*tone, Tone::Warn);
        assert_eq!(line, "⚠️  License file - MISSING");
    }
}
