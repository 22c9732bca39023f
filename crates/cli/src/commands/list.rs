use anyhow::{Context, Result};
use cratecheck_core::{CheckRunner, Settings};

use crate::cli::Args;
use crate::display::print_plan;

pub fn list_command(args: &Args) -> Result<()> {
    let settings = Settings::resolve(&args.dir, args.timeout)
        .with_context(|| format!("Failed to prepare checks for {}", args.dir.display()))?;
    let runner = CheckRunner::new(settings);

    println!(
        "Checks run against {} (timeout {}s per command):",
        runner.settings().project_dir.display(),
        runner.settings().timeout.as_secs()
    );
    println!();
    print_plan(runner.phases(), runner.settings());
    Ok(())
}
