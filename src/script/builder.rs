use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::ScriptError;
use super::unique_path;
use super::writer::{FileWriter, LocalFile};
use crate::config::{ArgumentsMap, RunOptions, SchedulerConfig, SchedulerOptions};

/// Scheduler command line that opens an interactive shell on the allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveLaunch {
    command_line: String,
}

impl InteractiveLaunch {
    pub fn command_line(&self) -> &str {
        &self.command_line
    }
}

impl fmt::Display for InteractiveLaunch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.command_line)
    }
}

/// A script written to disk, plus the command to start it when it is not meant
/// to be submitted as a batch job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltScript {
    pub path: PathBuf,
    pub launch: Option<InteractiveLaunch>,
}

pub struct ScriptBuilder<W = LocalFile> {
    scheduler: SchedulerConfig,
    writer: W,
}

impl ScriptBuilder {
    pub fn new(scheduler: SchedulerConfig) -> Self {
        Self::with_writer(scheduler, LocalFile)
    }
}

impl<W> ScriptBuilder<W>
where
    W: FileWriter,
{
    pub fn with_writer(scheduler: SchedulerConfig, writer: W) -> Self {
        Self { scheduler, writer }
    }

    pub fn scheduler(&self) -> &SchedulerConfig {
        &self.scheduler
    }

    /// Writes the script variant matching the launch mode of `run`.
    pub fn build(
        &self,
        run: &RunOptions,
        directives: &SchedulerOptions,
        args: &ArgumentsMap,
    ) -> Result<BuiltScript, ScriptError> {
        if run.is_interactive() {
            self.build_interactive(run, directives, args)
        } else {
            self.build_batch(run, directives, args)
        }
    }

    pub fn build_batch(
        &self,
        run: &RunOptions,
        directives: &SchedulerOptions,
        args: &ArgumentsMap,
    ) -> Result<BuiltScript, ScriptError> {
        let path = self.write(run.temp_file(), &self.render_batch(run, directives, args))?;
        Ok(BuiltScript { path, launch: None })
    }

    pub fn build_interactive(
        &self,
        run: &RunOptions,
        directives: &SchedulerOptions,
        args: &ArgumentsMap,
    ) -> Result<BuiltScript, ScriptError> {
        let launch = self.interactive_launch(directives);
        let path = self.write(run.temp_file(), &self.render_interactive(run, args))?;
        Ok(BuiltScript {
            path,
            launch: Some(launch),
        })
    }

    pub fn render_batch(
        &self,
        run: &RunOptions,
        directives: &SchedulerOptions,
        args: &ArgumentsMap,
    ) -> String {
        self.render(run, Some(directives), args)
    }

    /// Directives of interactive jobs go on the command line, not in the script.
    pub fn render_interactive(&self, run: &RunOptions, args: &ArgumentsMap) -> String {
        self.render(run, None, args)
    }

    pub fn interactive_launch(&self, directives: &SchedulerOptions) -> InteractiveLaunch {
        let mut command_line = self.scheduler.interactive_command.clone();
        directives.iter().for_each(|directive| {
            command_line.push(' ');
            command_line.push_str(directive);
        });
        command_line.push_str(" --pty ");
        command_line.push_str(&self.scheduler.shell);
        InteractiveLaunch { command_line }
    }

    fn render(
        &self,
        run: &RunOptions,
        directives: Option<&SchedulerOptions>,
        args: &ArgumentsMap,
    ) -> String {
        let scheduler = &self.scheduler;
        let mut script = format!("{}\n\n", scheduler.shebang);
        if let Some(directives) = directives {
            directives.iter().for_each(|directive| {
                script.push_str(&format!("{} {}\n", scheduler.directive_prefix, directive))
            });
            script.push('\n');
        }
        script.push_str(&format!(
            "{} {}\n",
            scheduler.activate_command,
            run.env_name()
        ));
        script.push_str(&invocation_line(run, args));
        script.push('\n');
        script.push_str(&format!(
            "{} {}\n",
            scheduler.deactivate_command,
            run.env_name()
        ));
        script
    }

    fn write(&self, desired: &Path, content: &str) -> Result<PathBuf, ScriptError> {
        let path = unique_path::resolve(desired);
        debug!(desired = %desired.display(), resolved = %path.display(), "script path resolved");
        self.writer.create(&path, content)?;
        info!(path = %path.display(), "script written");
        Ok(path)
    }
}

/// `<command> <script><args>`, with the extra `--` separator for IPython.
pub fn invocation_line(run: &RunOptions, args: &ArgumentsMap) -> String {
    let separator = if run.forwards_after_separator() {
        " --"
    } else {
        ""
    };
    format!("{} {}{}{}", run.command(), run.script(), separator, args)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::config::LaunchMode;
    use crate::script::writer::tests::MockFileWriterMock;

    fn run_options(mode: LaunchMode, command: &str, temp_file: &Path) -> RunOptions {
        RunOptions::new(mode, "env1", command, "train.py", temp_file).unwrap()
    }

    fn epochs() -> ArgumentsMap {
        let mut args = ArgumentsMap::new();
        args.insert("epochs", 10);
        args
    }

    fn one_hour() -> SchedulerOptions {
        SchedulerOptions::from_iter(["--time=01:00:00"])
    }

    #[test]
    fn batch_script_layout() {
        let builder = ScriptBuilder::new(SchedulerConfig::default());
        let run = run_options(LaunchMode::Batch, "python", Path::new("job.sh"));

        let expected = "#!/bin/bash\n\
                        \n\
                        #SBATCH --time=01:00:00\n\
                        \n\
                        source activate env1\n\
                        python train.py --epochs=10\n\
                        source deactivate env1\n";
        assert_eq!(expected, builder.render_batch(&run, &one_hour(), &epochs()));
    }

    #[test]
    fn batch_script_without_directives_keeps_separator() {
        let builder = ScriptBuilder::new(SchedulerConfig::default());
        let run = run_options(LaunchMode::Batch, "python", Path::new("job.sh"));

        let script = builder.render_batch(&run, &SchedulerOptions::new(), &ArgumentsMap::new());
        assert_eq!(
            "#!/bin/bash\n\n\nsource activate env1\npython train.py\nsource deactivate env1\n",
            script
        );
    }

    #[test]
    fn interactive_script_has_no_directives() {
        let builder = ScriptBuilder::new(SchedulerConfig::default());
        let run = run_options(LaunchMode::Interactive, "python", Path::new("job.sh"));

        assert_eq!(
            "#!/bin/bash\n\nsource activate env1\npython train.py --epochs=10\nsource deactivate env1\n",
            builder.render_interactive(&run, &epochs())
        );
    }

    #[test]
    fn ipython_gets_separator_once() {
        let run = run_options(LaunchMode::Batch, "ipython", Path::new("job.sh"));
        let args = ArgumentsMap::from_iter([("x", "1")]);

        assert_eq!("ipython train.py -- --x=1", invocation_line(&run, &args));
    }

    #[test]
    fn ipython_separator_without_arguments() {
        let run = run_options(LaunchMode::Batch, "ipython", Path::new("job.sh"));
        assert_eq!(
            "ipython train.py --",
            invocation_line(&run, &ArgumentsMap::new())
        );
    }

    #[test]
    fn interactive_launch_command_line() {
        let builder = ScriptBuilder::new(SchedulerConfig::default());
        let directives = SchedulerOptions::from_iter(["--time=01:00:00", "-N 1"]);

        let launch = builder.interactive_launch(&directives);
        assert_eq!("srun --time=01:00:00 -N 1 --pty bash", launch.command_line());
        assert_eq!(
            "srun --pty bash",
            builder.interactive_launch(&SchedulerOptions::new()).to_string()
        );
    }

    #[test]
    fn custom_scheduler_conventions() {
        let scheduler = SchedulerConfig {
            directive_prefix: "#PBS".to_string(),
            shebang: "#!/bin/sh".to_string(),
            activate_command: "conda activate".to_string(),
            deactivate_command: "conda deactivate".to_string(),
            ..Default::default()
        };
        let builder = ScriptBuilder::new(scheduler);
        let run = run_options(LaunchMode::Batch, "python", Path::new("job.sh"));

        let script = builder.render_batch(
            &run,
            &SchedulerOptions::from_iter(["-l walltime=1:00:00"]),
            &ArgumentsMap::new(),
        );
        assert!(script.starts_with("#!/bin/sh\n\n#PBS -l walltime=1:00:00\n"));
        assert!(script.ends_with("conda activate env1\npython train.py\nconda deactivate env1\n"));
    }

    #[test]
    fn build_batch_writes_to_unique_path() {
        let dir = tempfile::tempdir().unwrap();
        let desired = dir.path().join("job.sh");
        let builder = ScriptBuilder::new(SchedulerConfig::default());
        let run = run_options(LaunchMode::Batch, "python", &desired);

        let first = builder.build(&run, &one_hour(), &epochs()).unwrap();
        let second = builder.build(&run, &one_hour(), &epochs()).unwrap();

        assert_eq!(desired, first.path);
        assert_eq!(dir.path().join("job_1.sh"), second.path);
        assert_eq!(None, first.launch);

        let content = std::fs::read_to_string(&first.path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            vec![
                "#!/bin/bash",
                "",
                "#SBATCH --time=01:00:00",
                "",
                "source activate env1",
                "python train.py --epochs=10",
                "source deactivate env1",
            ],
            lines
        );
    }

    #[test]
    fn build_interactive_returns_launch_command() {
        let dir = tempfile::tempdir().unwrap();
        let desired = dir.path().join("job.sh");
        std::fs::write(&desired, "taken").unwrap();
        let builder = ScriptBuilder::new(SchedulerConfig::default());
        let run = run_options(LaunchMode::Interactive, "python", &desired);

        let built = builder.build(&run, &one_hour(), &epochs()).unwrap();

        assert_eq!(dir.path().join("job_1.sh"), built.path);
        assert_eq!(
            "srun --time=01:00:00 --pty bash",
            built.launch.unwrap().command_line()
        );
        let content = std::fs::read_to_string(&built.path).unwrap();
        assert!(!content.contains("#SBATCH"));
        assert!(content.contains("python train.py --epochs=10\n"));
    }

    #[test]
    fn build_hands_rendered_script_to_writer() {
        let builder_config = SchedulerConfig::default();
        let run = run_options(LaunchMode::Batch, "python", Path::new("/nonexistent/job.sh"));
        let expected = ScriptBuilder::new(builder_config.clone()).render_batch(
            &run,
            &one_hour(),
            &epochs(),
        );

        let mut writer = MockFileWriterMock::new();
        writer
            .expect_create()
            .withf(move |path, content| {
                path.as_os_str() == "/nonexistent/job.sh" && content.to_string() == expected
            })
            .once()
            .returning(|_, _| Ok(()));

        let builder = ScriptBuilder::with_writer(builder_config, writer);
        let built = builder.build(&run, &one_hour(), &epochs()).unwrap();
        assert_eq!(PathBuf::from("/nonexistent/job.sh"), built.path);
    }

    #[test]
    fn writer_errors_are_propagated() {
        let mut writer = MockFileWriterMock::new();
        writer.expect_create().once().returning(|_, _| {
            Err(ScriptError::IOError(std::io::Error::from(
                std::io::ErrorKind::PermissionDenied,
            )))
        });

        let builder = ScriptBuilder::with_writer(SchedulerConfig::default(), writer);
        let run = run_options(LaunchMode::Interactive, "python", Path::new("/nonexistent/job.sh"));

        assert_matches!(
            builder.build(&run, &one_hour(), &epochs()),
            Err(ScriptError::IOError(_))
        );
    }
}
