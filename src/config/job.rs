use std::path::PathBuf;

use serde::Deserialize;

use super::arguments::ArgumentsMap;
use super::error::ConfigError;
use super::run_options::{LaunchMode, RunOptions};
use super::scheduler::{SchedulerConfig, SchedulerOptions};

pub const DEFAULT_TEMP_FILE: &str = "sbatch_job.sh";

/// `run` section of a job file. Every field is optional so sections coming
/// from different sources can be layered before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSection {
    pub mode: Option<LaunchMode>,
    pub env_name: Option<String>,
    pub command: Option<String>,
    pub script: Option<String>,
    pub temp_file: Option<PathBuf>,
}

impl RunSection {
    /// Fields set in `other` win.
    pub fn overlay(self, other: RunSection) -> RunSection {
        RunSection {
            mode: other.mode.or(self.mode),
            env_name: other.env_name.or(self.env_name),
            command: other.command.or(self.command),
            script: other.script.or(self.script),
            temp_file: other.temp_file.or(self.temp_file),
        }
    }
}

impl TryFrom<RunSection> for RunOptions {
    type Error = ConfigError;

    fn try_from(section: RunSection) -> Result<Self, Self::Error> {
        RunOptions::new(
            section.mode.unwrap_or_default(),
            section.env_name.ok_or(ConfigError::MissingField("env_name"))?,
            section.command.ok_or(ConfigError::MissingField("command"))?,
            section.script.ok_or(ConfigError::MissingField("script"))?,
            section
                .temp_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMP_FILE)),
        )
    }
}

/// Unvalidated job description as read from YAML or assembled from the command line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobFile {
    #[serde(default)]
    pub run: RunSection,
    #[serde(default)]
    pub directives: SchedulerOptions,
    #[serde(default)]
    pub args: ArgumentsMap,
    #[serde(default)]
    pub scheduler: Option<SchedulerConfig>,
}

impl JobFile {
    /// Layers `other` on top of `self`: run fields and the scheduler section of
    /// `other` win, directives and arguments are appended.
    pub fn overlay(mut self, other: JobFile) -> JobFile {
        self.directives.extend(other.directives.iter());
        self.args.extend(other.args);
        JobFile {
            run: self.run.overlay(other.run),
            directives: self.directives,
            args: self.args,
            scheduler: other.scheduler.or(self.scheduler),
        }
    }
}

/// Validated job, ready to be launched.
#[derive(Debug, Clone, PartialEq)]
pub struct JobConfig {
    pub run: RunOptions,
    pub directives: SchedulerOptions,
    pub args: ArgumentsMap,
    pub scheduler: SchedulerConfig,
}

impl TryFrom<JobFile> for JobConfig {
    type Error = ConfigError;

    fn try_from(job: JobFile) -> Result<Self, Self::Error> {
        Ok(JobConfig {
            run: RunOptions::try_from(job.run)?,
            directives: job.directives,
            args: job.args,
            scheduler: job.scheduler.unwrap_or_default(),
        })
    }
}
