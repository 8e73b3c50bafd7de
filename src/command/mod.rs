mod error;
mod output;
mod processrunner;

pub use error::CommandError;
pub use output::CommandOutput;
pub use processrunner::ProcessRunner;
