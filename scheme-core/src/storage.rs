use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::Scheme;
use crate::store::SchemeStore;

/// On-disk document. Only user-defined rows are persisted; built-ins are
/// reconstructed on load so a stale file can never shadow them.
#[derive(Debug, Serialize, Deserialize)]
struct SchemeFile {
    schemes: Vec<Scheme>,
}

/// Saves and loads the scheme table, with advisory file locking so two
/// frontends editing the same file don't clobber each other.
pub struct Storage {
    file_path: PathBuf,
    lock_file_path: PathBuf,
}

impl Storage {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        let lock_file_path = file_path.with_extension("yaml.lock");
        Self {
            file_path,
            lock_file_path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Acquire an exclusive lock for writing. The returned handle must be
    /// held for the duration of the operation.
    fn acquire_write_lock(&self) -> Result<File> {
        if let Some(parent) = self.lock_file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.lock_file_path)
            .with_context(|| format!("Failed to create lock file: {:?}", self.lock_file_path))?;

        let start = std::time::Instant::now();
        let timeout = Duration::from_secs(5);

        loop {
            match lock_file.try_lock_exclusive() {
                Ok(()) => return Ok(lock_file),
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    if start.elapsed() > timeout {
                        anyhow::bail!(
                            "Timeout waiting for file lock - another frontend may be editing: {:?}",
                            self.file_path
                        );
                    }
                    std::thread::sleep(Duration::from_millis(100));
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Failed to acquire lock on {:?}", self.lock_file_path)
                    })
                }
            }
        }
    }

    /// Loads the store: built-ins first, then the persisted user rows.
    /// A missing file yields a store with only the built-ins.
    pub fn load(&self) -> Result<SchemeStore> {
        if !self.file_path.exists() {
            return Ok(SchemeStore::with_defaults());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read schemes file: {:?}", self.file_path))?;
        let file: SchemeFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse schemes file: {:?}", self.file_path))?;

        Ok(SchemeStore::with_user_rows(file.schemes))
    }

    /// Persists the user rows of `store`.
    pub fn save(&self, store: &SchemeStore) -> Result<()> {
        let _lock = self.acquire_write_lock()?;

        let file = SchemeFile {
            schemes: store.user_rows().to_vec(),
        };
        let content = serde_yaml::to_string(&file)?;

        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write schemes file: {:?}", self.file_path))?;

        Ok(())
    }
}

/// Path of the schemes file: `SCHEMES_PATH` env override, else a dotfile
/// in the home directory.
pub fn default_schemes_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("SCHEMES_PATH") {
        return Ok(PathBuf::from(path));
    }

    let home_dir = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home_dir.join(".game_schemes.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_gives_defaults_only() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("schemes.yaml"));
        let store = storage.load().unwrap();
        assert_eq!(store.row_count(), store.default_count());
    }

    #[test]
    fn test_save_load_round_trip_preserves_user_rows() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("schemes.yaml"));

        let mut store = SchemeStore::with_defaults();
        let idx = store.add_new("MyScheme");
        store.get_mut(idx).unwrap().settings.damage_modifier = 150;
        store.get_mut(idx).unwrap().modifiers.low_gravity = true;
        storage.save(&store).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_built_ins_are_not_written_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("schemes.yaml"));

        let store = SchemeStore::with_defaults();
        storage.save(&store).unwrap();

        let content = fs::read_to_string(storage.path()).unwrap();
        assert!(!content.contains("Pro Mode"));
    }

    #[test]
    fn test_stale_built_in_rows_cannot_shadow_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schemes.yaml");
        // A hand-edited file naming a built-in still loads as a user row
        // after the real built-ins.
        fs::write(&path, "schemes:\n- name: Default\n  settings:\n    turn_time: 1\n").unwrap();

        let storage = Storage::new(path);
        let store = storage.load().unwrap();
        assert_eq!(store.row_count(), store.default_count() + 1);
        assert_eq!(store.get(0).unwrap().settings.turn_time, 45);
    }

    #[test]
    fn test_default_schemes_path_env_override() {
        std::env::set_var("SCHEMES_PATH", "/tmp/custom-schemes.yaml");
        let path = default_schemes_path().unwrap();
        std::env::remove_var("SCHEMES_PATH");
        assert_eq!(path, PathBuf::from("/tmp/custom-schemes.yaml"));
    }
}
