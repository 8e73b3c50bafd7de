mod running_mode;

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{
    ArgumentValue, ArgumentsMap, ConfigError, JobConfig, JobFile, JobFileLoader,
    JobFileLoaderFile, LaunchMode, RunSection, SchedulerOptions,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Cli {
    /// YAML job file; command line values override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How the job is launched
    #[arg(long, value_enum, conflicts_with = "interactive")]
    mode: Option<LaunchMode>,

    /// Shorthand for `--mode interactive`
    #[arg(short, long)]
    interactive: bool,

    /// Environment activated before running the command
    #[arg(short, long = "env")]
    env_name: Option<String>,

    /// Program that runs the script, e.g. `python`
    #[arg(long)]
    command: Option<String>,

    /// Script handed to the command
    #[arg(short, long)]
    script: Option<String>,

    /// Where to write the generated job script [default: sbatch_job.sh]
    #[arg(short, long)]
    temp_file: Option<PathBuf>,

    /// Scheduler directive, e.g. `--time=01:00:00` (repeatable)
    #[arg(short, long = "directive", allow_hyphen_values = true)]
    directives: Vec<String>,

    /// Script argument as NAME=VALUE, or NAME for a flag (repeatable)
    #[arg(short, long = "arg", value_parser = ArgumentsMap::parse_assignment)]
    args: Vec<(String, ArgumentValue)>,

    /// Write the script and print the scheduler command without running it
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Parses command line arguments
    pub fn init_launcher_cli() -> Self {
        Self::parse()
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    fn launch_mode(&self) -> Option<LaunchMode> {
        if self.interactive {
            Some(LaunchMode::Interactive)
        } else {
            self.mode
        }
    }

    /// Job description given on the command line alone.
    pub fn overrides(&self) -> JobFile {
        JobFile {
            run: RunSection {
                mode: self.launch_mode(),
                env_name: self.env_name.clone(),
                command: self.command.clone(),
                script: self.script.clone(),
                temp_file: self.temp_file.clone(),
            },
            directives: SchedulerOptions::from_iter(self.directives.iter().cloned()),
            args: ArgumentsMap::from_iter(self.args.iter().cloned()),
            scheduler: None,
        }
    }

    /// Loads the job file, if any, and layers the command line on top of it.
    pub fn job_config(&self) -> Result<JobConfig, ConfigError> {
        let job_file = match self.config_path() {
            Some(path) => JobFileLoaderFile::new(path).load()?,
            None => JobFile::default(),
        };
        JobConfig::try_from(job_file.overlay(self.overrides()))
    }
}
