use std::{
    ffi::OsStr,
    io::ErrorKind,
    process::{Command, ExitStatus, Stdio},
};

use tracing::{debug, info};

use super::{CommandError, CommandOutput};

#[derive(Debug)]
pub struct ProcessRunner {
    program: String,
    cmd: Command,
}

impl ProcessRunner {
    pub fn new<I, S>(binary_path: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(binary_path);
        cmd.args(args);

        Self {
            program: binary_path.to_string(),
            cmd,
        }
    }

    /// Builds a runner from a whitespace separated command line. No quoting is supported.
    pub fn from_command_line(command_line: &str) -> Result<Self, CommandError> {
        let mut parts = command_line.split_whitespace();
        let binary_path = parts.next().ok_or(CommandError::EmptyCommandLine)?;
        Ok(Self::new(binary_path, parts))
    }

    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        self.cmd.arg(arg);
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn spawn_error(&self, err: std::io::Error) -> CommandError {
        match err.kind() {
            ErrorKind::NotFound => CommandError::CommandNotFound(self.program.clone()),
            _ => CommandError::IOError(err),
        }
    }

    /// Runs the command attached to the caller's terminal and waits for it to exit.
    pub fn run(mut self) -> Result<ExitStatus, CommandError> {
        info!(program = %self.program, "starting attached process");
        let mut child = self
            .cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|err| self.spawn_error(err))?;
        let status = child.wait()?;
        debug!(program = %self.program, %status, "attached process exited");
        Ok(status)
    }

    /// Runs the command with its streams captured and gathers them once it exits.
    pub fn collect(mut self) -> Result<CommandOutput, CommandError> {
        info!(program = %self.program, "starting process");
        let output = self
            .cmd
            .stdin(Stdio::null())
            .output()
            .map_err(|err| self.spawn_error(err))?;
        debug!(program = %self.program, status = %output.status, "process exited");
        Ok(CommandOutput::from(output))
    }
}
