use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Returns the first of `path`, `<stem>_1<ext>`, `<stem>_2<ext>`, ... with nothing on disk.
///
/// The extension starts at the last `.` of the file name; a name without a dot is
/// all stem. Only existence checks are performed, nothing is created.
pub fn resolve(path: &Path) -> PathBuf {
    let mut candidate = path.to_path_buf();
    let mut suffix: u64 = 0;
    while candidate.exists() {
        suffix += 1;
        candidate = with_suffix(path, suffix);
    }
    candidate
}

fn with_suffix(path: &Path, suffix: u64) -> PathBuf {
    let marker = format!("_{suffix}");
    let Some(file_name) = path.file_name() else {
        let mut raw = path.as_os_str().to_os_string();
        raw.push(marker);
        return PathBuf::from(raw);
    };

    let mut name = OsString::new();
    match split_extension(file_name) {
        Some((stem, extension)) => {
            name.push(stem);
            name.push(marker);
            name.push(extension);
        }
        None => {
            name.push(file_name);
            name.push(marker);
        }
    }
    path.with_file_name(name)
}

/// Splits before the last `.`, the dot going to the extension.
#[cfg(target_family = "unix")]
fn split_extension(file_name: &OsStr) -> Option<(&OsStr, &OsStr)> {
    use std::os::unix::ffi::OsStrExt;

    let bytes = file_name.as_bytes();
    let dot = bytes.iter().rposition(|b| *b == b'.')?;
    let (stem, extension) = bytes.split_at(dot);
    Some((OsStr::from_bytes(stem), OsStr::from_bytes(extension)))
}

#[cfg(not(target_family = "unix"))]
fn split_extension(file_name: &OsStr) -> Option<(&OsStr, &OsStr)> {
    let raw = file_name.to_str()?;
    let (stem, extension) = raw.split_at(raw.rfind('.')?);
    Some((OsStr::new(stem), OsStr::new(extension)))
}
