use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::ConfigError;

/// Substring that marks commands forwarding script arguments after a `--` separator.
const IPYTHON: &str = "ipython";

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    #[default]
    Batch,
    Interactive,
}

/// What to run and where to put the generated script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    mode: LaunchMode,
    env_name: String,
    command: String,
    script: String,
    temp_file: PathBuf,
}

impl RunOptions {
    pub fn new<E, C, S, T>(
        mode: LaunchMode,
        env_name: E,
        command: C,
        script: S,
        temp_file: T,
    ) -> Result<Self, ConfigError>
    where
        E: Into<String>,
        C: Into<String>,
        S: Into<String>,
        T: Into<PathBuf>,
    {
        let run_options = Self {
            mode,
            env_name: env_name.into(),
            command: command.into(),
            script: script.into(),
            temp_file: temp_file.into(),
        };
        run_options.validate()?;
        Ok(run_options)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.env_name.trim().is_empty() {
            return Err(ConfigError::EmptyField("env_name"));
        }
        if self.command.trim().is_empty() {
            return Err(ConfigError::EmptyField("command"));
        }
        if self.script.trim().is_empty() {
            return Err(ConfigError::EmptyField("script"));
        }
        if self.temp_file.as_os_str().is_empty() {
            return Err(ConfigError::EmptyField("temp_file"));
        }
        Ok(())
    }

    pub fn mode(&self) -> LaunchMode {
        self.mode
    }

    pub fn is_interactive(&self) -> bool {
        self.mode == LaunchMode::Interactive
    }

    pub fn env_name(&self) -> &str {
        &self.env_name
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    /// Desired script location; the file actually written may carry a `_<n>` suffix.
    pub fn temp_file(&self) -> &Path {
        &self.temp_file
    }

    /// IPython only hands arguments to the script when they follow a `--`.
    pub fn forwards_after_separator(&self) -> bool {
        self.command.contains(IPYTHON)
    }
}
