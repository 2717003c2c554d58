//! `SyncTask`: terminal group task board library.

pub mod app;
pub mod board;
pub mod config;
pub mod store;
pub mod ui;
