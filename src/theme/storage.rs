//! Where the selected theme mode is persisted.

use anyhow::{Context, Result};
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

/// Fixed key the mode is stored under.
pub const STORAGE_KEY: &str = "theme-mode";

/// Backing store for the persisted theme mode.
///
/// The stored value is a bare string (`"light"` or `"dark"`); interpreting
/// it is the store's job, not the storage's.
pub trait ThemeStorage {
    /// Reads the stored value, `None` if nothing was ever stored.
    fn load(&self) -> Result<Option<String>>;

    /// Replaces the stored value.
    fn save(&self, value: &str) -> Result<()>;
}

/// Stores the mode in a file named [`STORAGE_KEY`] inside a state directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Uses `dir` as the state directory. It is created on first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the state file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(STORAGE_KEY)
    }
}

impl ThemeStorage for FileStorage {
    fn load(&self) -> Result<Option<String>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .context(format!("Failed to read theme state: {}", path.display()))?;
        Ok(Some(content.trim().to_string()))
    }

    fn save(&self, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).context(format!(
            "Failed to create state directory: {}",
            self.dir.display()
        ))?;

        let path = self.path();
        let temp_path = path.with_extension("tmp");

        fs::write(&temp_path, value).context(format!(
            "Failed to write temp theme state: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &path).context(format!(
            "Failed to rename temp theme state to: {}",
            path.display()
        ))?;

        Ok(())
    }
}

/// In-process storage. Clones share the same slot.
///
/// Reads and writes can be switched to fail, which is how the store's
/// error path is exercised.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    value: RefCell<Option<String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `value`.
    #[must_use]
    pub fn with_value(value: &str) -> Self {
        let storage = Self::default();
        *storage.inner.value.borrow_mut() = Some(value.to_string());
        storage
    }

    /// Current raw value.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.inner.value.borrow().clone()
    }

    /// Makes subsequent reads fail (or succeed again).
    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.fail_reads.set(fail);
    }

    /// Makes subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.fail_writes.set(fail);
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        if self.inner.fail_reads.get() {
            anyhow::bail!("storage unavailable");
        }
        Ok(self.value())
    }

    fn save(&self, value: &str) -> Result<()> {
        if self.inner.fail_writes.get() {
            anyhow::bail!("storage quota exceeded");
        }
        *self.inner.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("state"));

        assert_eq!(storage.load().unwrap(), None);

        storage.save("dark").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("dark"));
        assert_eq!(fs::read_to_string(storage.path()).unwrap(), "dark");
        assert!(!storage.path().with_extension("tmp").exists());
    }

    #[test]
    fn test_file_storage_trims_whitespace() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        fs::write(storage.path(), "light\n").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_storage_save_fails_when_dir_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let storage = FileStorage::new(&blocker);
        assert!(storage.save("dark").is_err());
    }

    #[test]
    fn test_memory_storage_shares_state_between_clones() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.save("dark").unwrap();
        assert_eq!(handle.value().as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_storage_failures() {
        let storage = MemoryStorage::with_value("light");
        storage.set_fail_reads(true);
        assert!(storage.load().is_err());
        storage.set_fail_writes(true);
        assert!(storage.save("dark").is_err());
        assert_eq!(storage.value().as_deref(), Some("light"));
    }
}
