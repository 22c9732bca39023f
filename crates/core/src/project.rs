//! Best-effort identification of the crate being checked

use std::path::Path;

use cargo_toml::Manifest;
use tracing::debug;

/// Name and version of the crate in the project directory, for display only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInfo {
    pub name: Option<String>,
    pub version: Option<String>,
    pub is_workspace: bool,
}

impl ProjectInfo {
    /// Read `Cargo.toml` from `project_dir`. Any failure yields `None`;
    /// presence of the manifest is judged by the metadata checks, not here.
    pub fn detect(project_dir: &Path) -> Option<Self> {
        let manifest_path = project_dir.join("Cargo.toml");
        let contents = match std::fs::read_to_string(&manifest_path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("No readable manifest at {:?}: {}", manifest_path, e);
                return None;
            }
        };

        let manifest = match Manifest::from_str(&contents) {
            Ok(manifest) => manifest,
            Err(e) => {
                debug!("Failed to parse {:?}: {}", manifest_path, e);
                return None;
            }
        };

        let (name, version) = match manifest.package {
            Some(ref package) => (
                Some(package.name.clone()),
                package.version.get().ok().cloned(),
            ),
            None => (None, None),
        };

        Some(Self {
            name,
            version,
            is_workspace: manifest.workspace.is_some(),
        })
    }

    pub fn display_name(&self) -> String {
        match (&self.name, &self.version) {
            (Some(name), Some(version)) => format!("{name} v{version}"),
            (Some(name), None) => name.clone(),
            (None, _) if self.is_workspace => "workspace".to_string(),
            (None, _) => "unnamed project".to_string(),
        }
    }
}
