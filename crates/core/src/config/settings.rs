use crate::{
    command::CheckCommand,
    error::{Error, Result},
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Per-command timeout used when nothing else is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Config file looked up in the project directory
pub const CONFIG_FILE_NAME: &str = ".cratecheck.json";

/// Optional on-disk configuration (`.cratecheck.json`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct Config {
    pub timeout_secs: Option<u64>,
    pub channel: Option<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn find_config_file(project_dir: &Path) -> Option<PathBuf> {
        let path = project_dir.join(CONFIG_FILE_NAME);
        path.is_file().then_some(path)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == Some(0) {
            return Err(Error::ConfigError(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if let Some(ref channel) = self.channel {
            if !is_valid_channel(channel) {
                return Err(Error::ConfigError(format!(
                    "Invalid toolchain channel '{channel}'"
                )));
            }
        }
        if let Some(key) = self.env.keys().find(|k| k.is_empty() || k.contains('=')) {
            return Err(Error::ConfigError(format!(
                "Invalid environment variable name '{key}'"
            )));
        }
        Ok(())
    }
}

/// Check if a rustup toolchain name is usable as `+<channel>`
pub fn is_valid_channel(channel: &str) -> bool {
    if channel.is_empty() || channel.chars().any(char::is_whitespace) {
        return false;
    }
    matches!(channel, "stable" | "beta" | "nightly")
        || ["stable-", "beta-", "nightly-", "1."]
            .iter()
            .any(|prefix| channel.starts_with(prefix))
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub project_dir: PathBuf,
    pub timeout: Duration,
    pub channel: Option<String>,
    pub env: Vec<(String, String)>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            channel: None,
            env: Vec::new(),
        }
    }
}

impl Settings {
    /// Layer defaults, the project's config file (if any) and the
    /// command-line timeout, in increasing precedence.
    pub fn resolve(project_dir: &Path, timeout_secs: Option<u64>) -> Result<Self> {
        if !project_dir.is_dir() {
            return Err(Error::ProjectError(project_dir.to_path_buf()));
        }

        let config = match Config::find_config_file(project_dir) {
            Some(path) => {
                debug!("Loading config from {:?}", path);
                Config::load_from_file(&path)?
            }
            None => Config::default(),
        };

        Self::from_config(project_dir, config, timeout_secs)
    }

    pub fn from_config(project_dir: &Path, config: Config, timeout_secs: Option<u64>) -> Result<Self> {
        if timeout_secs == Some(0) {
            return Err(Error::ConfigError(
                "timeout must be greater than zero".to_string(),
            ));
        }
        config.validate()?;

        let timeout = timeout_secs
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            timeout: Duration::from_secs(timeout),
            channel: config.channel,
            env: config.env.into_iter().collect(),
        })
    }

    /// Bind a catalog command to this run: project directory, channel, env.
    pub fn prepare(&self, command: &CheckCommand) -> CheckCommand {
        let mut prepared = command.clone().with_working_dir(&self.project_dir);
        if let Some(ref channel) = self.channel {
            prepared = prepared.with_channel(channel);
        }
        for (key, value) in &self.env {
            prepared = prepared.with_env(key, value);
        }
        prepared
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_dir.join(relative)
    }
}
