use crate::types::Note;
use std::fs;
use std::path::{Path, PathBuf};
use studynotes_common::{Result, StudyNotesError};
use tracing::debug;

/// Note records persisted as a JSON array
pub struct NoteStore {
    notes: Vec<Note>,
    file_path: PathBuf,
}

impl NoteStore {
    pub fn load(path: &Path) -> Result<Self> {
        let notes: Vec<Note> = if path.exists() {
            let data = fs::read_to_string(path)?;
            serde_json::from_str(&data).map_err(|e| {
                StudyNotesError::config(format!(
                    "Note store {} is corrupted: {}",
                    path.display(),
                    e
                ))
            })?
        } else {
            Vec::new()
        };

        debug!("Loaded {} notes from {}", notes.len(), path.display());

        Ok(Self {
            notes,
            file_path: path.to_path_buf(),
        })
    }

    pub fn add(&mut self, note: Note) -> Result<()> {
        let mut notes = self.notes.clone();
        notes.push(note);
        self.commit(notes)
    }

    /// Apply `update_fn` and persist; returns the updated note
    pub fn update(&mut self, id: &str, update_fn: impl FnOnce(&mut Note)) -> Result<Option<Note>> {
        let Some(index) = self.notes.iter().position(|n| n.id == id) else {
            return Ok(None);
        };
        let mut notes = self.notes.clone();
        update_fn(&mut notes[index]);
        let updated = notes[index].clone();
        self.commit(notes)?;
        Ok(Some(updated))
    }

    pub fn remove(&mut self, id: &str) -> Result<Option<Note>> {
        let Some(index) = self.notes.iter().position(|n| n.id == id) else {
            return Ok(None);
        };
        let mut notes = self.notes.clone();
        let removed = notes.remove(index);
        self.commit(notes)?;
        Ok(Some(removed))
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn find_by_file_path(&self, file_path: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.file_path == file_path)
    }

    /// All notes, newest first
    pub fn list(&self) -> Vec<Note> {
        let mut notes = self.notes.clone();
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notes
    }

    /// Write `notes` to disk, then make them current; memory is untouched on failure
    fn commit(&mut self, notes: Vec<Note>) -> Result<()> {
        let data = serde_json::to_string_pretty(&notes)?;
        fs::write(&self.file_path, data)?;
        self.notes = notes;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NoteStatus;
    use chrono::Duration;

    fn note(id: &str) -> Note {
        Note::new(id.to_string(), format!("{}.md", id), format!("{}.md", id))
    }

    #[test]
    fn test_add_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let mut store = NoteStore::load(&path).unwrap();
        store.add(note("a")).unwrap();

        let reloaded = NoteStore::load(&path).unwrap();
        assert_eq!(reloaded.get("a").unwrap().title, "a");
        assert!(reloaded.find_by_file_path("a.md").is_some());
    }

    #[test]
    fn test_update_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let mut store = NoteStore::load(&path).unwrap();
        store.add(note("a")).unwrap();

        let updated = store
            .update("a", |n| {
                n.set_status(NoteStatus::Completed);
                n.summary = Some("## 1. 개요".to_string());
            })
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, NoteStatus::Completed);

        let reloaded = NoteStore::load(&path).unwrap();
        assert_eq!(reloaded.get("a").unwrap().summary.as_deref(), Some("## 1. 개요"));
        assert!(store.update("missing", |_| {}).unwrap().is_none());
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = NoteStore::load(&dir.path().join("notes.json")).unwrap();
        store.add(note("a")).unwrap();

        assert!(store.remove("a").unwrap().is_some());
        assert!(store.remove("a").unwrap().is_none());
        assert!(store.get("a").is_none());
    }

    #[test]
    fn test_list_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = NoteStore::load(&dir.path().join("notes.json")).unwrap();
        let mut old = note("old");
        old.created_at = old.created_at - Duration::days(1);
        store.add(old).unwrap();
        store.add(note("new")).unwrap();

        let ids: Vec<String> = store.list().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[test]
    fn test_corrupted_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, "not json").unwrap();
        assert!(NoteStore::load(&path).is_err());
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let mut store = NoteStore::load(&path).unwrap();
        store.add(note("a")).unwrap();

        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(store.add(note("b")).is_err());
        assert!(store.get("b").is_none());

        assert!(store.update("a", |n| n.set_status(NoteStatus::Failed)).is_err());
        assert_eq!(store.get("a").unwrap().status, NoteStatus::Pending);

        assert!(store.remove("a").is_err());
        assert!(store.get("a").is_some());
        assert_eq!(store.list().len(), 1);
    }
}
