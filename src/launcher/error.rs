use thiserror::Error;

use crate::command::CommandError;
use crate::script::ScriptError;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("could not build job script: `{0}`")]
    ScriptError(#[from] ScriptError),

    #[error("could not run scheduler command: `{0}`")]
    CommandError(#[from] CommandError),
}
