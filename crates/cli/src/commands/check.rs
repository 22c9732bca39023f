use anyhow::{Context, Result};
use cratecheck_core::{CheckRunner, ProjectInfo, Settings};
use tracing::{debug, info};

use crate::cli::Args;
use crate::display::{ConsoleReporter, print_banner, print_summary};

/// Run the full checklist and return the process exit code
pub fn check_command(args: &Args) -> Result<i32> {
    let settings = Settings::resolve(&args.dir, args.timeout)
        .with_context(|| format!("Failed to prepare checks for {}", args.dir.display()))?;
    debug!("Resolved settings: {:?}", settings);

    let project = ProjectInfo::detect(&settings.project_dir);
    print_banner(project.as_ref(), &settings);

    let runner = CheckRunner::new(settings);
    let mut reporter = ConsoleReporter::new(args.verbose);
    let report = runner.run(&mut reporter);

    info!(
        "Run finished: total={} passed={} failed={} warnings={} aborted={} all_phases_passed={}",
        report.state.total_checks(),
        report.state.passed_checks(),
        report.state.failed_checks(),
        report.state.warnings().len(),
        report.aborted,
        report.all_phases_passed
    );

    print_summary(&report);
    Ok(report.exit_code())
}
