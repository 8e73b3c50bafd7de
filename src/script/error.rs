use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("script `{}` appeared before it could be created", .0.display())]
    AlreadyExists(PathBuf),

    #[error("error writing script: `{0}`")]
    IOError(#[from] std::io::Error),
}
