//! Builds the job script and hands it to the scheduler.
//!
//! Batch jobs are submitted with the scheduler's submit command and its output
//! is relayed once it exits. Interactive jobs run the scheduler's interactive
//! command attached to the current terminal.

pub mod error;

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use tracing::{debug, info};

use crate::command::{CommandOutput, ProcessRunner};
use crate::config::{ArgumentsMap, RunOptions, SchedulerConfig, SchedulerOptions};
use crate::script::{BuiltScript, InteractiveLaunch, ScriptBuilder};

pub use error::LaunchError;

#[derive(Debug)]
pub enum LaunchOutcome {
    SubmittedBatch {
        script: PathBuf,
        output: CommandOutput,
    },
    RanInteractive {
        script: PathBuf,
        status: ExitStatus,
    },
}

impl LaunchOutcome {
    pub fn script(&self) -> &Path {
        match self {
            LaunchOutcome::SubmittedBatch { script, .. }
            | LaunchOutcome::RanInteractive { script, .. } => script,
        }
    }

    pub fn status(&self) -> ExitStatus {
        match self {
            LaunchOutcome::SubmittedBatch { output, .. } => output.status,
            LaunchOutcome::RanInteractive { status, .. } => *status,
        }
    }

    /// Exit code of the scheduler command, `1` when it was terminated by a signal.
    pub fn exit_code(&self) -> i32 {
        self.status().code().unwrap_or(1)
    }
}

/// A written script and the command line that would start it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedLaunch {
    pub script: PathBuf,
    pub command_line: String,
}

pub struct Launcher {
    builder: ScriptBuilder,
}

impl Launcher {
    pub fn new(scheduler: SchedulerConfig) -> Self {
        Self {
            builder: ScriptBuilder::new(scheduler),
        }
    }

    pub fn launch(
        &self,
        run: &RunOptions,
        directives: &SchedulerOptions,
        args: &ArgumentsMap,
    ) -> Result<LaunchOutcome, LaunchError> {
        match self.builder.build(run, directives, args)? {
            BuiltScript {
                path,
                launch: Some(launch),
            } => self.run_interactive(path, &launch),
            BuiltScript { path, launch: None } => self.submit_batch(path),
        }
    }

    /// Writes the script without starting anything.
    pub fn prepare(
        &self,
        run: &RunOptions,
        directives: &SchedulerOptions,
        args: &ArgumentsMap,
    ) -> Result<PreparedLaunch, LaunchError> {
        let built = self.builder.build(run, directives, args)?;
        let command_line = match &built.launch {
            Some(launch) => launch.command_line().to_string(),
            None => format!(
                "{} {}",
                self.builder.scheduler().submit_command,
                built.path.display()
            ),
        };
        Ok(PreparedLaunch {
            script: built.path,
            command_line,
        })
    }

    fn run_interactive(
        &self,
        script: PathBuf,
        launch: &InteractiveLaunch,
    ) -> Result<LaunchOutcome, LaunchError> {
        println!("Interactive job to launch: {}\n", script.display());
        info!(command = %launch, "starting interactive session");

        let status = ProcessRunner::from_command_line(launch.command_line())?.run()?;
        debug!(%status, "interactive session finished");

        Ok(LaunchOutcome::RanInteractive { script, status })
    }

    fn submit_batch(&self, script: PathBuf) -> Result<LaunchOutcome, LaunchError> {
        let submit_command = &self.builder.scheduler().submit_command;
        info!(command = %submit_command, script = %script.display(), "submitting batch job");

        let output = ProcessRunner::from_command_line(submit_command)?
            .arg(&script)
            .collect()?;
        if let Some(stdout) = &output.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = &output.stderr {
            eprintln!("{stderr}");
        }
        debug!(status = %output.status, "batch submission finished");

        Ok(LaunchOutcome::SubmittedBatch { script, output })
    }
}
