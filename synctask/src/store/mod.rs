//! Durable snapshot storage for the two board records.
//!
//! [`SnapshotStore`] is the persistence seam. [`FileStore`] keeps the
//! records as two JSON files in the data directory; [`MemoryStore`] backs
//! tests and the degraded mode used when no data directory is available.
//! The records are written independently, matching the original two
//! storage keys; there is no cross-record transaction.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use synctask_model::snapshot::{self, SnapshotError};
use synctask_model::task::Task;
use synctask_model::user::User;

/// File name of the persisted user record.
const USER_FILE: &str = "user.json";
/// File name of the persisted task collection record.
const TASKS_FILE: &str = "tasks.json";

/// Errors that can occur reading or writing snapshot records.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to read a record file.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Failed to write a record file.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Failed to remove a record file.
    #[error("failed to remove {path}: {source}")]
    Remove {
        /// Path that could not be removed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A record existed but could not be encoded or decoded.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Persistence seam for the two board records.
///
/// Loads return `Ok(None)` when a record has never been written. Writes
/// replace the whole record; there is no partial update.
pub trait SnapshotStore {
    /// Loads the user record, if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the record exists but cannot be read or
    /// decoded.
    fn load_user(&self) -> Result<Option<User>, StoreError>;

    /// Writes the user record, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the record cannot be encoded or written.
    fn save_user(&mut self, user: &User) -> Result<(), StoreError>;

    /// Removes the user record. Succeeds if none exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if an existing record cannot be removed.
    fn clear_user(&mut self) -> Result<(), StoreError>;

    /// Loads the task collection record, if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the record exists but cannot be read or
    /// decoded.
    fn load_tasks(&self) -> Result<Option<Vec<Task>>, StoreError>;

    /// Writes the full task collection, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the record cannot be encoded or written.
    fn save_tasks(&mut self, tasks: &[Task]) -> Result<(), StoreError>;
}

/// Persistence side effect requested by the shell after a board mutation.
///
/// The event loop executes these through [`persist`]; the shell itself
/// performs no I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistRequest {
    /// Rewrite both records (the user record only while signed in).
    Snapshot,
    /// Remove the user record, then rewrite the task collection.
    RemoveUser,
}

/// Executes a persist request against a store.
///
/// # Errors
///
/// Returns the first [`StoreError`] hit; a failed user write skips the
/// task write so the records are retried together next time.
pub fn persist(
    store: &mut dyn SnapshotStore,
    user: Option<&User>,
    tasks: &[Task],
    request: PersistRequest,
) -> Result<(), StoreError> {
    match request {
        PersistRequest::Snapshot => {
            if let Some(user) = user {
                store.save_user(user)?;
            }
            store.save_tasks(tasks)
        }
        PersistRequest::RemoveUser => {
            store.clear_user()?;
            store.save_tasks(tasks)
        }
    }
}

/// File-backed snapshot store: `user.json` and `tasks.json` in one directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Write {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Path of the user record file.
    #[must_use]
    pub fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }

    /// Path of the task collection record file.
    #[must_use]
    pub fn tasks_path(&self) -> PathBuf {
        self.dir.join(TASKS_FILE)
    }

    fn read_record(path: &Path) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn write_record(path: &Path, contents: &str) -> Result<(), StoreError> {
        fs::write(path, contents).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl SnapshotStore for FileStore {
    fn load_user(&self) -> Result<Option<User>, StoreError> {
        match Self::read_record(&self.user_path())? {
            Some(contents) => Ok(Some(snapshot::decode_user(&contents)?)),
            None => Ok(None),
        }
    }

    fn save_user(&mut self, user: &User) -> Result<(), StoreError> {
        let json = snapshot::encode_user(user)?;
        Self::write_record(&self.user_path(), &json)
    }

    fn clear_user(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(self.user_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Remove {
                path: self.user_path(),
                source,
            }),
        }
    }

    fn load_tasks(&self) -> Result<Option<Vec<Task>>, StoreError> {
        match Self::read_record(&self.tasks_path())? {
            Some(contents) => Ok(Some(snapshot::decode_tasks(&contents)?)),
            None => Ok(None),
        }
    }

    fn save_tasks(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        let json = snapshot::encode_tasks(tasks)?;
        Self::write_record(&self.tasks_path(), &json)
    }
}

/// In-memory snapshot store for tests and persistence-less sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    user: Option<User>,
    tasks: Option<Vec<Task>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            user: None,
            tasks: None,
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load_user(&self) -> Result<Option<User>, StoreError> {
        Ok(self.user.clone())
    }

    fn save_user(&mut self, user: &User) -> Result<(), StoreError> {
        self.user = Some(user.clone());
        Ok(())
    }

    fn clear_user(&mut self) -> Result<(), StoreError> {
        self.user = None;
        Ok(())
    }

    fn load_tasks(&self) -> Result<Option<Vec<Task>>, StoreError> {
        Ok(self.tasks.clone())
    }

    fn save_tasks(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        self.tasks = Some(tasks.to_vec());
        Ok(())
    }
}
