use std::error::Error;
use std::process;

use tracing::info;

use sbatch_launcher::{cli::Cli, launcher::Launcher, logging::Logging};

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}

/// Returns the exit code of the scheduler command, `0` for dry runs.
fn run() -> Result<i32, Box<dyn Error>> {
    // init logging singleton
    Logging::try_init()?;

    let cli = Cli::init_launcher_cli();
    let job = cli.job_config()?;
    let launcher = Launcher::new(job.scheduler.clone());

    if cli.dry_run() {
        let prepared = launcher.prepare(&job.run, &job.directives, &job.args)?;
        println!("Job script: {}", prepared.script.display());
        println!("{}", prepared.command_line);
        return Ok(0);
    }

    info!(mode = %job.run.mode(), "launching job");
    let outcome = launcher.launch(&job.run, &job.directives, &job.args)?;
    Ok(outcome.exit_code())
}
