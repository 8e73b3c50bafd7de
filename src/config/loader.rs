use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::job::JobFile;

pub trait JobFileLoader {
    fn load(&self) -> Result<JobFile, ConfigError>;
}

pub struct JobFileLoaderFile {
    path: PathBuf,
}

impl JobFileLoaderFile {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl JobFileLoader for JobFileLoaderFile {
    fn load(&self) -> Result<JobFile, ConfigError> {
        let file = std::fs::File::open(&self.path)?;
        Ok(serde_yaml::from_reader(file)?)
    }
}
