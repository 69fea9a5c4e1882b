use std::path::{Path, PathBuf};
use studynotes_common::{Result, StudyNotesError};

/// Note bodies stored as files in the upload directory
#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        let candidate = Path::new(name);
        let is_plain_name = candidate.components().count() == 1
            && candidate.file_name().map(|f| f == candidate.as_os_str()).unwrap_or(false);
        if !is_plain_name {
            return Err(StudyNotesError::invalid_input(format!("Invalid blob name: {}", name)));
        }
        Ok(self.root.join(name))
    }

    pub async fn write(&self, name: &str, data: &[u8]) -> Result<()> {
        let path = self.path_for(name)?;
        tokio::fs::write(&path, data).await.map_err(|e| {
            StudyNotesError::file_system(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    pub async fn read_to_string(&self, name: &str) -> Result<String> {
        let path = self.path_for(name)?;
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            StudyNotesError::file_system(format!("Failed to read {}: {}", path.display(), e))
        })
    }

    /// Remove a blob; a missing file is not an error
    pub async fn remove(&self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StudyNotesError::file_system(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_read_remove() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = BlobStore::new(dir.path());

        blobs.write("a.md", "# 제목".as_bytes()).await.unwrap();
        assert_eq!(blobs.read_to_string("a.md").await.unwrap(), "# 제목");

        blobs.remove("a.md").await.unwrap();
        assert!(blobs.read_to_string("a.md").await.is_err());
        blobs.remove("a.md").await.unwrap();
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = BlobStore::new(dir.path());

        assert!(blobs.read_to_string("../secret").await.is_err());
        assert!(blobs.write("nested/a.md", b"x").await.is_err());
    }
}
