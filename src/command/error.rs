use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("command not found: `{0}`")]
    CommandNotFound(String),

    #[error("empty command line")]
    EmptyCommandLine,

    #[error("io error: `{0}`")]
    IOError(#[source] std::io::Error),
}

impl From<std::io::Error> for CommandError {
    fn from(value: std::io::Error) -> CommandError {
        CommandError::IOError(value)
    }
}
