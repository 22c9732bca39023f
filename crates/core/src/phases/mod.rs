//! Phases: ordered, named groups of checks

mod catalog;

pub use catalog::default_phases;

use crate::command::CheckCommand;
use crate::types::Criticality;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Prerequisites,
    CoreBuild,
    CodeQuality,
    Documentation,
    Package,
    Metadata,
}

/// What a check actually does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckKind {
    /// Run an external command; only its exit status matters
    Command(CheckCommand),
    /// Test that a file exists, relative to the project directory
    FileExists(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub description: &'static str,
    pub kind: CheckKind,
    pub criticality: Criticality,
}

impl Check {
    pub fn command(description: &'static str, command: CheckCommand, criticality: Criticality) -> Self {
        Self {
            description,
            kind: CheckKind::Command(command),
            criticality,
        }
    }

    pub fn file(description: &'static str, file_name: &'static str, criticality: Criticality) -> Self {
        Self {
            description,
            kind: CheckKind::FileExists(file_name),
            criticality,
        }
    }

    /// Step line shown before the check runs
    pub fn step_title(&self) -> String {
        match self.kind {
            CheckKind::Command(_) => self.description.to_string(),
            CheckKind::FileExists(_) => format!("Checking {}", self.description),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub kind: PhaseKind,
    pub title: &'static str,
    pub checks: Vec<Check>,
}

impl Phase {
    pub fn new(kind: PhaseKind, title: &'static str, checks: Vec<Check>) -> Self {
        Self {
            kind,
            title,
            checks,
        }
    }

    /// A failure in this phase stops the run
    pub fn aborts_on_failure(&self) -> bool {
        self.kind == PhaseKind::Prerequisites
    }
}
