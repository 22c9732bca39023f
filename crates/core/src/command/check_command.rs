use std::fmt;
use std::path::PathBuf;
use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Cargo,
    Rustc,
    Tool, // git and any other binary that knows nothing about toolchains
}

impl CommandType {
    /// Whether a rustup `+<channel>` selector can be prepended
    pub fn accepts_channel(self) -> bool {
        matches!(self, CommandType::Cargo | CommandType::Rustc)
    }
}

/// An external command invoked by a check, described by its argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckCommand {
    pub command_type: CommandType,
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl CheckCommand {
    pub fn cargo<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_type(CommandType::Cargo, "cargo", args)
    }

    pub fn rustc<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_type(CommandType::Rustc, "rustc", args)
    }

    pub fn tool<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_type(CommandType::Tool, program, args)
    }

    fn with_type<I, S>(command_type: CommandType, program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command_type,
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: None,
            env: Vec::new(),
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Prepend `+<channel>` for cargo and rustc. Other tools are left untouched.
    pub fn with_channel(mut self, channel: &str) -> Self {
        if self.command_type.accepts_channel() {
            self.args.insert(0, format!("+{channel}"));
        }
        self
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = self.program.clone();
        for arg in &self.args {
            cmd.push(' ');
            if arg.contains(' ') {
                cmd.push_str(&format!("'{arg}'"));
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }

    /// Build the `std::process::Command` for this check. Stdio is left to the caller.
    pub fn to_process_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        cmd
    }
}

impl fmt::Display for CheckCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shell_command())
    }
}
