use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error reading job file: `{0}`")]
    IOError(#[from] std::io::Error),

    #[error("`{0}`")]
    InvalidYamlConfiguration(#[from] serde_yaml::Error),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("argument names must be strings, found `{0}`")]
    InvalidArgumentName(String),

    #[error("unsupported value for argument `{0}`: {1}")]
    UnsupportedArgument(String, String),

    #[error("invalid argument `{0}`, expected NAME or NAME=VALUE")]
    InvalidAssignment(String),
}
