use super::{validate_key, StorageBackend};
use crate::error::{NotesError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed storage: each key lives in `<root>/<key>.json`.
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotesError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(NotesError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        self.ensure_dir()?;

        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, value).map_err(NotesError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(NotesError::Io(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let storage = FsStorage::new(dir.path());
        assert_eq!(storage.read("notes").unwrap(), None);
    }

    #[test]
    fn write_creates_the_data_dir_and_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("data");
        let storage = FsStorage::new(&root);

        storage.write("notes", "[]").unwrap();
        storage.write("notes", "[1]").unwrap();

        assert_eq!(storage.read("notes").unwrap().as_deref(), Some("[1]"));
        let names: Vec<_> = fs::read_dir(&root)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["notes.json".to_string()]);
    }

    #[test]
    fn failed_replace_cleans_up_its_temp_file() {
        let dir = TempDir::new().unwrap();
        // A directory where the value file should go makes the rename fail.
        fs::create_dir_all(dir.path().join("notes.json").join("blocker")).unwrap();
        let storage = FsStorage::new(dir.path());

        let err = storage.write("notes", "[]").unwrap_err();

        assert!(matches!(err, NotesError::Io(_)));
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "temp files left: {:?}", leftovers);
    }

    #[test]
    fn invalid_keys_are_refused() {
        let dir = TempDir::new().unwrap();
        let storage = FsStorage::new(dir.path());
        assert!(matches!(
            storage.write("../escape", "[]"),
            Err(NotesError::Store(_))
        ));
    }
}
