use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Path helpers for config and snapshot locations.
pub trait FsExt: AsRef<Path> {
    /// Resolves a relative path against the working directory. Absolute paths are returned as is.
    fn relative_to_cwd(&self) -> Result<PathBuf> {
        let path = self.as_ref();

        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }

        let cwd = std::env::current_dir().context("Failed to read the working directory")?;
        Ok(cwd.join(path))
    }
}

impl<T: AsRef<Path> + ?Sized> FsExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_is_joined_to_cwd() {
        let resolved = "client.conf".relative_to_cwd().unwrap();

        assert_eq!(resolved, std::env::current_dir().unwrap().join("client.conf"));
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let absolute = std::env::temp_dir().join("cases");

        assert_eq!(absolute.relative_to_cwd().unwrap(), absolute);
    }
}
