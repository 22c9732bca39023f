use super::{Check, Phase, PhaseKind};
use crate::command::CheckCommand;
use crate::types::Criticality::{Critical, Warning};

/// The release checklist, in execution order.
pub fn default_phases() -> Vec<Phase> {
    vec![
        Phase::new(
            PhaseKind::Prerequisites,
            "PREREQUISITE CHECKS",
            vec![
                Check::command("Cargo availability", CheckCommand::cargo(["--version"]), Critical),
                Check::command(
                    "Rust compiler availability",
                    CheckCommand::rustc(["--version"]),
                    Critical,
                ),
                Check::command("Git availability", CheckCommand::tool("git", ["--version"]), Critical),
            ],
        ),
        Phase::new(
            PhaseKind::CoreBuild,
            "CORE COMPILATION & TESTING",
            vec![
                Check::command("Basic compilation check", CheckCommand::cargo(["check"]), Critical),
                Check::command("Full build", CheckCommand::cargo(["build"]), Critical),
                Check::command("Release build", CheckCommand::cargo(["build", "--release"]), Critical),
                Check::command("All tests", CheckCommand::cargo(["test"]), Critical),
                Check::command(
                    "All targets tests",
                    CheckCommand::cargo(["test", "--all-targets"]),
                    Critical,
                ),
            ],
        ),
        Phase::new(
            PhaseKind::CodeQuality,
            "CODE QUALITY CHECKS",
            vec![
                Check::command(
                    "Code formatting",
                    CheckCommand::cargo(["fmt", "--all", "--check"]),
                    Critical,
                ),
                Check::command(
                    "Clippy linting",
                    CheckCommand::cargo([
                        "clippy",
                        "--all-targets",
                        "--all-features",
                        "--",
                        "-D",
                        "warnings",
                    ]),
                    Critical,
                ),
                Check::command(
                    "All features check",
                    CheckCommand::cargo(["check", "--all-targets", "--all-features"]),
                    Critical,
                ),
            ],
        ),
        Phase::new(
            PhaseKind::Documentation,
            "DOCUMENTATION CHECKS",
            vec![
                Check::command("Basic documentation", CheckCommand::cargo(["doc", "--no-deps"]), Warning),
                Check::command(
                    "Documentation with all features",
                    CheckCommand::cargo(["doc", "--all-features", "--no-deps"]),
                    Warning,
                ),
            ],
        ),
        Phase::new(
            PhaseKind::Package,
            "PACKAGE VALIDATION",
            vec![
                Check::command("Package file list", CheckCommand::cargo(["package", "--list"]), Warning),
                Check::command(
                    "Package creation",
                    CheckCommand::cargo(["package", "--allow-dirty"]),
                    Warning,
                ),
            ],
        ),
        Phase::new(
            PhaseKind::Metadata,
            "METADATA & FILES CHECK",
            vec![
                Check::file("Cargo manifest", "Cargo.toml", Critical),
                Check::file("README file", "README.md", Warning),
                Check::file("License file", "LICENSE", Warning),
            ],
        ),
    ]
}
