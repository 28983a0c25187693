use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::levels::LoadError;

/// Where level text comes from. The engine only ever asks by index.
pub trait LevelSource {
    fn read_level(&self, index: usize) -> Result<String, LoadError>;
}

/// Levels stored as `<dir>/<prefix><index>.<extension>`, e.g. `levels/warehouse0.txt`.
#[derive(Debug, Clone)]
pub struct FileLevelSource {
    dir: PathBuf,
    prefix: String,
    extension: String,
}

impl FileLevelSource {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        FileLevelSource {
            dir: dir.into(),
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir
            .join(format!("{}{}.{}", self.prefix, index, self.extension))
    }
}

impl LevelSource for FileLevelSource {
    fn read_level(&self, index: usize) -> Result<String, LoadError> {
        let path = self.path_for(index);
        std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LoadError::Missing { path },
            _ => LoadError::Unreadable { path, source },
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_numbered_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("warehouse2.txt"), "#A#\n").unwrap();
        let source = FileLevelSource::new(dir.path(), "warehouse", "txt");

        assert_eq!("#A#\n", source.read_level(2).unwrap());
        assert_eq!(dir.path().join("warehouse0.txt"), source.path_for(0));
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileLevelSource::new(dir.path(), "warehouse", "txt");

        let err = source.read_level(3).unwrap_err();
        assert!(
            matches!(&err, LoadError::Missing { path } if path.ends_with("warehouse3.txt")),
            "unexpected error {:?}",
            err
        );
    }

    #[test]
    fn directory_in_place_of_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("warehouse1.txt")).unwrap();
        let source = FileLevelSource::new(dir.path(), "warehouse", "txt");

        let err = source.read_level(1).unwrap_err();
        assert!(matches!(err, LoadError::Unreadable { .. }), "unexpected error {:?}", err);
    }
}
