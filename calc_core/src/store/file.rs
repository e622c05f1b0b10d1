//! # File-Backed Storage
//!
//! Persists each key as its own file under a directory, with the same
//! safety features used for any on-disk state:
//! - **Atomic writes**: write to `<key>.tmp`, fsync, rename over `<key>`
//! - **Write locking**: an exclusive OS lock on `<key>.lock` while writing,
//!   so two processes sharing the directory cannot interleave writes. The
//!   lock file stays in place between writes; only the lock is released.
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::store::{FileStorage, Storage};
//!
//! let storage = FileStorage::new("/tmp/kceva")?;
//! storage.set_item("kceva-theme", "dark")?;
//! assert_eq!(storage.get_item("kceva-theme")?.as_deref(), Some("dark"));
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::Storage;
use crate::errors::{CalcError, CalcResult};

/// Directory-backed [`Storage`]
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a storage directory.
    pub fn new(dir: impl Into<PathBuf>) -> CalcResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            CalcError::storage("create directory", dir.display().to_string(), e.to_string())
        })?;
        Ok(FileStorage { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> CalcResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(key))
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> CalcResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(CalcError::storage("validate key", key, "key must be a plain file name"))
    }
}

/// Exclusive write lock on `<key>.lock`, released on drop.
/// The lock file itself is never removed.
struct WriteLock {
    file: File,
}

impl WriteLock {
    fn acquire(path: PathBuf) -> CalcResult<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| CalcError::storage("create lock", path.display().to_string(), e.to_string()))?;

        file.try_lock_exclusive().map_err(|_| CalcError::StorageLocked {
            path: path.display().to_string(),
        })?;

        Ok(WriteLock { file })
    }
}

impl Drop for WriteLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> CalcResult<Option<String>> {
        let path = self.path_for(key)?;
        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CalcError::storage("open", key, e.to_string())),
        };

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| CalcError::storage("read", key, e.to_string()))?;
        Ok(Some(contents))
    }

    fn set_item(&self, key: &str, value: &str) -> CalcResult<()> {
        let path = self.path_for(key)?;
        let _lock = WriteLock::acquire(with_suffix(&path, ".lock"))?;
        let tmp_path = with_suffix(&path, ".tmp");

        let mut tmp_file = File::create(&tmp_path)
            .map_err(|e| CalcError::storage("create temp file", key, e.to_string()))?;
        tmp_file
            .write_all(value.as_bytes())
            .map_err(|e| CalcError::storage("write temp file", key, e.to_string()))?;
        tmp_file
            .sync_all()
            .map_err(|e| CalcError::storage("sync temp file", key, e.to_string()))?;

        fs::rename(&tmp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            CalcError::storage("rename to final", key, e.to_string())
        })?;

        tracing::debug!(key, bytes = value.len(), "persisted storage item");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> CalcResult<()> {
        let path = self.path_for(key)?;
        let _lock = WriteLock::acquire(with_suffix(&path, ".lock"))?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CalcError::storage("remove", key, e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_get_remove() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        assert_eq!(storage.get_item("kceva-theme").unwrap(), None);
        storage.set_item("kceva-theme", "dark").unwrap();
        assert_eq!(storage.get_item("kceva-theme").unwrap().as_deref(), Some("dark"));

        storage.remove_item("kceva-theme").unwrap();
        assert_eq!(storage.get_item("kceva-theme").unwrap(), None);
        storage.remove_item("kceva-theme").unwrap();
    }

    #[test]
    fn test_write_leaves_no_temp_file_and_keeps_lock_file() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.set_item("kceva-user-preferences", "{}").unwrap();

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "kceva-user-preferences".to_string(),
                "kceva-user-preferences.lock".to_string(),
            ]
        );
    }

    #[test]
    fn test_lock_file_survives_release() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        let lock_path = with_suffix(&storage.path_for("k").unwrap(), ".lock");

        drop(WriteLock::acquire(lock_path.clone()).unwrap());
        assert!(lock_path.exists());

        // a holder of the surviving file still blocks writers
        let held = WriteLock::acquire(lock_path.clone()).unwrap();
        assert!(matches!(storage.set_item("k", "v"), Err(CalcError::StorageLocked { .. })));
        drop(held);
        storage.set_item("k", "v").unwrap();
        assert!(lock_path.exists());
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempdir().unwrap();
        FileStorage::new(dir.path())
            .unwrap()
            .set_item("k", "persisted")
            .unwrap();
        let reopened = FileStorage::new(dir.path()).unwrap();
        assert_eq!(reopened.get_item("k").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_creates_nested_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::new(&nested).unwrap();
        storage.set_item("k", "v").unwrap();
        assert!(nested.join("k").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        for key in ["../escape", "a/b", "", ".hidden"] {
            let err = storage.set_item(key, "x").unwrap_err();
            assert_eq!(err.error_code(), "STORAGE_ERROR");
        }
    }

    #[test]
    fn test_held_lock_reports_locked() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        let path = storage.path_for("k").unwrap();
        let held = WriteLock::acquire(with_suffix(&path, ".lock")).unwrap();

        let err = storage.set_item("k", "v").unwrap_err();
        assert!(matches!(err, CalcError::StorageLocked { .. }));
        assert!(err.is_recoverable());

        drop(held);
        storage.set_item("k", "v").unwrap();
    }
}
