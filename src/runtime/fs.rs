//! File system operations used by the CSV ledger.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn open_append_impl(&self, path: &Path) -> io::Result<Box<dyn io::Write + Send>> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_open_append_creates_then_appends() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("downloads.csv");

        assert!(!runtime.exists(&file_path));

        {
            let mut writer = runtime.open_append(&file_path).unwrap();
            writer.write_all(b"first\n").unwrap();
        }
        assert!(runtime.exists(&file_path));

        {
            let mut writer = runtime.open_append(&file_path).unwrap();
            writer.write_all(b"second\n").unwrap();
        }

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_real_runtime_open_append_errors() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();

        // Missing parent directory
        let result = runtime.open_append(&dir.path().join("missing/downloads.csv"));
        assert!(result.is_err());

        // A directory cannot be opened for append
        let result = runtime.open_append(dir.path());
        assert!(result.is_err());
    }
}
