//! Append-mode file destinations.

use crate::Error;
use crate::internal;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Opens `path` for appending, expanding a leading `~` and creating missing parent
/// directories.
///
/// # Errors
/// Returns `Error::Io` if the directories or the file cannot be created.
pub fn open_append(path: &Path) -> Result<File, Error> {
    let path = resolve(path);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            if let Err(e) = fs::create_dir_all(parent) {
                internal::warn(&format!(
                    "failed to create directory {}: {e}",
                    parent.display()
                ));
                return Err(e.into());
            }
            internal::debug(&format!("created directory {}", parent.display()));
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    internal::debug(&format!("appending to {}", path.display()));
    Ok(file)
}

fn resolve(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) if s.starts_with('~') => PathBuf::from(shellexpand::tilde(s).into_owned()),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(resolve(Path::new("logs/a.log")), PathBuf::from("logs/a.log"));
    }

    #[test]
    fn tilde_is_expanded() {
        let resolved = resolve(Path::new("~/a.log"));
        assert!(!resolved.starts_with("~"));
        assert!(resolved.ends_with("a.log"));
    }
}
