use colored::Colorize;
use cratecheck_core::{CheckKind, Criticality, Phase, ProjectInfo, RunReport, Settings, Verdict};

use super::{Tone, paint, print_header};

pub fn print_banner(project: Option<&ProjectInfo>, settings: &Settings) {
    println!("{}", "🦀 RUST CRATE QUALITY CHECKER 🦀".magenta().bold());
    println!("{}", "Comprehensive validation for crates.io release".magenta());
    println!("{}", "=".repeat(50).magenta().bold());

    if let Some(project) = project {
        println!("📦 Crate: {}", project.display_name());
    }
    println!("📁 Directory: {}", settings.project_dir.display());
    if let Some(ref channel) = settings.channel {
        println!("🔧 Toolchain: {}", channel);
    }
    println!("⏱️  Timeout per command: {}s", settings.timeout.as_secs());
}

/// Print the checklist that a run would execute, bound to `settings`
pub fn print_plan(phases: &[Phase], settings: &Settings) {
    for (tone, line) in plan_lines(phases, settings) {
        println!("{}", paint(tone, &line));
    }
}

pub fn plan_lines(phases: &[Phase], settings: &Settings) -> Vec<(Tone, String)> {
    let mut lines = Vec::new();

    for (i, phase) in phases.iter().enumerate() {
        if i > 0 {
            lines.push((Tone::Plain, String::new()));
        }
        let suffix = if phase.aborts_on_failure() {
            " (stops the run on failure)"
        } else {
            ""
        };
        lines.push((Tone::Info, format!("{}. {}{}", i + 1, phase.title, suffix)));

        for check in &phase.checks {
            let target = match &check.kind {
                CheckKind::Command(command) => settings.prepare(command).to_shell_command(),
                CheckKind::FileExists(file_name) => format!("file exists: {file_name}"),
            };
            let (tone, marker) = match check.criticality {
                Criticality::Critical => (Tone::Plain, "critical"),
                Criticality::Warning => (Tone::Warn, "advisory"),
            };
            lines.push((
                tone,
                format!("   • {:<34} [{}] {}", check.description, marker, target),
            ));
        }
    }

    lines
}

pub fn print_summary(report: &RunReport) {
    println!();
    println!(
        "{}",
        format!(
            "⏱️  Total execution time: {:.2} seconds",
            report.elapsed.as_secs_f64()
        )
        .cyan()
    );

    print_header("FINAL SUMMARY");
    for (tone, line) in summary_lines(report) {
        println!("{}", paint(tone, &line));
    }
}

/// Counts, failure lists and verdict, without color
pub fn summary_lines(report: &RunReport) -> Vec<(Tone, String)> {
    let state = &report.state;
    let mut lines = vec![
        (Tone::Plain, String::new()),
        (Tone::Bold, "📊 RESULTS SUMMARY:".to_string()),
        (Tone::Plain, format!("   Total Checks: {}", state.total_checks())),
        (Tone::Pass, format!("   Passed: {}", state.passed_checks())),
        (Tone::Fail, format!("   Failed: {}", state.failed_checks())),
        (Tone::Warn, format!("   Warnings: {}", state.warnings().len())),
    ];

    if !state.critical_failures().is_empty() {
        lines.push((Tone::Plain, String::new()));
        lines.push((Tone::Fail, "❌ CRITICAL FAILURES:".to_string()));
        for failure in state.critical_failures() {
            lines.push((Tone::Fail, format!("   • {failure}")));
        }
    }

    if !state.warnings().is_empty() {
        lines.push((Tone::Plain, String::new()));
        lines.push((Tone::Warn, "⚠️  WARNINGS:".to_string()));
        for warning in state.warnings() {
            lines.push((Tone::Warn, format!("   • {warning}")));
        }
    }

    let verdict = report.verdict();
    let (tone, headline) = match verdict {
        Verdict::Ready => (Tone::Pass, format!("🎉 {} 🎉", verdict.headline())),
        Verdict::WarningsMustBeFixed => (Tone::Warn, format!("⚠️  {}", verdict.headline())),
        Verdict::NotReady => (Tone::Fail, format!("🚫 {}", verdict.headline())),
    };
    lines.push((Tone::Plain, String::new()));
    lines.push((tone, headline));
    for guidance in verdict.guidance() {
        lines.push((tone, guidance.to_string()));
    }

    lines
}
