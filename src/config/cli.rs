use crate::core::Storage;
use crate::utils::error::{Result, WurError};
use std::path::PathBuf;

/// Report directory on the local disk. Created on first write; existing
/// files are overwritten.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);
        let output_error = |source| WurError::OutputError {
            path: full_path.display().to_string(),
            source,
        };

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(output_error)?;
        }

        tokio::fs::write(&full_path, data)
            .await
            .map_err(output_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_missing_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("reports"));

        tokio_test::block_on(storage.write_file("a.com.csv", b"domain;id\n")).unwrap();

        let written = std::fs::read(temp_dir.path().join("reports").join("a.com.csv")).unwrap();
        assert_eq!(written, b"domain;id\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        tokio_test::block_on(storage.write_file("r.csv", b"first run, longer")).unwrap();
        tokio_test::block_on(storage.write_file("r.csv", b"second")).unwrap();

        let data = std::fs::read(temp_dir.path().join("r.csv")).unwrap();
        assert_eq!(data, b"second");
    }

    #[test]
    fn test_write_failure_is_output_error() {
        let temp_dir = TempDir::new().unwrap();
        // a regular file where the output directory should be
        let blocker = temp_dir.path().join("reports");
        std::fs::write(&blocker, b"not a dir").unwrap();
        let storage = LocalStorage::new(&blocker);

        let err = tokio_test::block_on(storage.write_file("a.csv", b"x")).unwrap_err();

        assert!(matches!(err, WurError::OutputError { .. }));
        assert_eq!(err.exit_code(), 3);
    }
}
