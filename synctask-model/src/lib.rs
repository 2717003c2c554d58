//! Shared data model and snapshot format for `SyncTask`.

pub mod snapshot;
pub mod task;
pub mod user;
