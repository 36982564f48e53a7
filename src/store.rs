//! Persistence of the task list as a single JSON document.
//!
//! The file is a pretty-printed JSON array with single-space indentation,
//! the exact format older versions of the tool wrote. Saves go through a
//! temp file in the same directory followed by a rename, so a reader never
//! observes a half-written file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::debug_log;
use crate::model::Task;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid task file: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

pub struct Store {
    path: PathBuf,
    tasks: Vec<Task>,
    next_id: u64,
}

impl Store {
    /// Reads the task list from `path`. An absent file is created empty on
    /// first run; an empty file is an empty list. Malformed content is an
    /// error, never silently replaced by an empty list.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            fs::write(&path, b"").map_err(|e| StoreError::io(&path, e))?;
        }
        let data = fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))?;
        let tasks: Vec<Task> = if data.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&data)?
        };
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        debug_log::log(&format!(
            "loaded {} tasks from {}",
            tasks.len(),
            path.display()
        ));
        Ok(Self {
            path,
            tasks,
            next_id,
        })
    }

    /// Serializes the full list and atomically replaces the backing file.
    pub fn save(&self) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
        self.tasks.serialize(&mut ser)?;

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        tmp.write_all(&buf)
            .map_err(|e| StoreError::io(tmp.path().to_path_buf(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;
        debug_log::log(&format!(
            "saved {} tasks to {}",
            self.tasks.len(),
            self.path.display()
        ));
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }

    /// Hands out the next task id and advances the watermark. The watermark
    /// seeds from max(id)+1 at load and only grows within a session, so a
    /// delete followed by an add never hands out an id that is still live
    /// or was live earlier in the session.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[cfg(test)]
    pub fn open_temp() -> (tempfile::TempDir, Self) {
        let dir = tempfile::tempdir().unwrap();
        let store = Self::load(dir.path().join("data.json")).unwrap();
        (dir, store)
    }
}
