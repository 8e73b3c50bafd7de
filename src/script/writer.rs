use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::instrument;

use super::error::ScriptError;

/// Permissions of generated scripts on unix.
#[cfg(target_family = "unix")]
const SCRIPT_MODE: u32 = 0o755;

pub trait FileWriter {
    /// Creates `path` with `content`. Fails if the file already exists.
    fn create(&self, path: &Path, content: &str) -> Result<(), ScriptError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFile;

impl FileWriter for LocalFile {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn create(&self, path: &Path, content: &str) -> Result<(), ScriptError> {
        let mut file_options = fs::OpenOptions::new();
        file_options.write(true).create_new(true);

        #[cfg(target_family = "unix")]
        {
            use std::os::unix::fs::OpenOptionsExt;

            file_options.mode(SCRIPT_MODE);
        }

        let mut file = file_options.open(path).map_err(|err| match err.kind() {
            ErrorKind::AlreadyExists => ScriptError::AlreadyExists(path.to_path_buf()),
            _ => ScriptError::IOError(err),
        })?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        Ok(())
    }
}
