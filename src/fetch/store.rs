//! Persistence of downloaded book content.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::FetchError;

/// Default destination directory for downloaded books.
pub const DEFAULT_BOOKS_DIR: &str = "books";

/// Writes downloaded book bytes under a destination directory.
///
/// The directory is created on first use; an existing file of the same name
/// is overwritten (the id-suffixed naming makes the name stable per book).
#[derive(Debug, Clone)]
pub struct ContentStore {
    destination_dir: PathBuf,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new(DEFAULT_BOOKS_DIR)
    }
}

impl ContentStore {
    /// Creates a store rooted at `destination_dir`.
    pub fn new(destination_dir: impl Into<PathBuf>) -> Self {
        Self {
            destination_dir: destination_dir.into(),
        }
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn destination_dir(&self) -> &Path {
        &self.destination_dir
    }

    /// Persists `bytes` as `destination_dir/file_name`, creating the
    /// directory (and parents) if absent, and returns the written path.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Io` on any filesystem failure.
    pub async fn persist(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, FetchError> {
        tokio::fs::create_dir_all(&self.destination_dir)
            .await
            .map_err(|e| FetchError::io(self.destination_dir.clone(), e))?;

        let path = self.destination_dir.join(file_name);
        debug!(path = %path.display(), bytes = bytes.len(), "persisting content");

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| FetchError::io(path.clone(), e))?;

        info!(path = %path.display(), "book saved");
        Ok(path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_persist_creates_missing_directory_tree() {
        let temp_dir = TempDir::new().unwrap();
        let store = ContentStore::new(temp_dir.path().join("nested").join("books"));

        let path = store.persist("dracula-345.txt", b"content").await.unwrap();

        assert!(path.exists());
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "dracula-345.txt");
    }

    #[tokio::test]
    async fn test_persist_roundtrips_bytes_exactly() {
        let temp_dir = TempDir::new().unwrap();
        let store = ContentStore::new(temp_dir.path());
        let payload = b"CHAPTER I.\r\n\x00binary-safe\xff";

        let path = store.persist("book-1.txt", payload).await.unwrap();

        assert_eq!(std::fs::read(path).unwrap(), payload);
    }

    #[tokio::test]
    async fn test_persist_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = ContentStore::new(temp_dir.path());

        store.persist("book-1.txt", b"first").await.unwrap();
        let path = store.persist("book-1.txt", b"second").await.unwrap();

        assert_eq!(std::fs::read(path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_persist_is_idempotent_about_directory_creation() {
        let temp_dir = TempDir::new().unwrap();
        let store = ContentStore::new(temp_dir.path().join("books"));

        store.persist("a-1.txt", b"a").await.unwrap();
        let result = store.persist("b-2.txt", b"b").await;

        assert!(result.is_ok(), "existing directory must not be an error");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_persist_reports_io_error_with_path() {
        let store = ContentStore::new("/proc/no-such-writable-place/books");

        let result = store.persist("a-1.txt", b"a").await;

        match result {
            Err(FetchError::Io { path, .. }) => {
                assert!(path.to_string_lossy().contains("no-such-writable-place"));
            }
            other => panic!("expected Io error, got: {other:?}"),
        }
    }
}
