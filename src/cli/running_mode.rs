use clap::builder::PossibleValue;
use clap::ValueEnum;
use std::fmt;

use crate::config::LaunchMode;

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.to_possible_value()
            .expect("to_possible_value should cover all launch modes")
            .get_name()
            .fmt(f)
    }
}

impl clap::ValueEnum for LaunchMode {
    fn value_variants<'a>() -> &'a [LaunchMode] {
        &[LaunchMode::Batch, LaunchMode::Interactive]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            LaunchMode::Batch => PossibleValue::new("batch").help("Submit with sbatch"),
            LaunchMode::Interactive => {
                PossibleValue::new("interactive").help("Open a shell with srun --pty")
            }
        })
    }
}
