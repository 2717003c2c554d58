//! Integration tests for the interactive shell: key-driven sessions wired
//! to a snapshot store the way the event loop wires them.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use synctask::app::{App, Overlay};
use synctask::board::{TaskBoard, ViewTab};
use synctask::store::{FileStore, MemoryStore, SnapshotStore, persist};
use synctask_model::task::{TaskId, TaskStatus};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Feeds one key to the app and executes any persistence it requests,
/// mirroring the event loop.
fn press(app: &mut App, store: &mut dyn SnapshotStore, code: KeyCode) {
    if let Some(request) = app.handle_key_event(key(code)) {
        persist(store, app.board.current_user(), app.board.tasks(), request).expect("persist");
    }
}

fn type_text(app: &mut App, store: &mut dyn SnapshotStore, text: &str) {
    for c in text.chars() {
        press(app, store, KeyCode::Char(c));
    }
}

/// Drives the sign-in form to completion.
fn sign_in(app: &mut App, store: &mut dyn SnapshotStore, name: &str, email: &str) {
    type_text(app, store, name);
    press(app, store, KeyCode::Tab);
    type_text(app, store, email);
    press(app, store, KeyCode::Enter);
}

/// Boots an app from whatever the store holds, as the binary does.
fn boot(store: &dyn SnapshotStore) -> App {
    App::new(TaskBoard::restore(store))
}

// --- session flow tests ---

#[test]
fn key_driven_session_claims_and_completes_a_task() {
    let mut store = MemoryStore::new();
    let mut app = boot(&store);
    assert!(app.is_signin_open());

    sign_in(&mut app, &mut store, "Alex Rivera", "alex@example.com");
    assert!(!app.is_signin_open());

    // Claim the selected seed task, then complete it.
    press(&mut app, &mut store, KeyCode::Char('c'));
    assert_eq!(app.board.active_tab(), ViewTab::MyTasks);
    press(&mut app, &mut store, KeyCode::Char(' '));

    assert_eq!(app.board.current_user().unwrap().points, 1);

    // Every mutation was written through: the store already holds the
    // completed task and the updated score.
    let saved_user = store.load_user().unwrap().expect("user record");
    assert_eq!(saved_user.points, 1);
    let saved_tasks = store.load_tasks().unwrap().expect("task record");
    assert_eq!(saved_tasks[0].status, TaskStatus::Completed);
}

#[test]
fn sign_out_key_clears_the_stored_session() {
    let mut store = MemoryStore::new();
    let mut app = boot(&store);
    sign_in(&mut app, &mut store, "Alex Rivera", "alex@example.com");
    assert!(store.load_user().unwrap().is_some());

    press(&mut app, &mut store, KeyCode::Char('s'));
    assert!(app.is_signin_open());
    assert!(store.load_user().unwrap().is_none());
    // The task record is untouched by the sign-out.
    assert_eq!(store.load_tasks().unwrap().expect("task record").len(), 2);
}

#[test]
fn refused_operations_write_nothing() {
    let mut store = MemoryStore::new();
    let mut app = boot(&store);
    sign_in(&mut app, &mut store, "Alex Rivera", "alex@example.com");
    let tasks_before = store.load_tasks().unwrap();

    // Completing an unclaimed task is refused, so no write happens.
    press(&mut app, &mut store, KeyCode::Char(' '));
    assert_eq!(app.board.current_user().unwrap().points, 0);
    assert_eq!(store.load_tasks().unwrap(), tasks_before);
}

// --- relaunch tests ---

#[test]
fn key_driven_session_survives_a_relaunch() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = FileStore::open(dir.path()).unwrap();
        let mut app = boot(&store);
        sign_in(&mut app, &mut store, "Alex Rivera", "alex@example.com");
        press(&mut app, &mut store, KeyCode::Char('c'));
    }

    let store = FileStore::open(dir.path()).unwrap();
    let app = boot(&store);
    // The gate stays closed and the claim is still in place.
    assert!(!app.is_signin_open());
    let user_id = app.board.current_user().unwrap().id.clone();
    let task = app
        .board
        .tasks()
        .iter()
        .find(|t| t.id == TaskId::from("1"))
        .expect("seed task");
    assert!(task.is_claimed_by(&user_id));
}

// --- create modal tests ---

#[test]
fn create_modal_key_flow_persists_the_new_task() {
    let mut store = MemoryStore::new();
    let mut app = boot(&store);
    sign_in(&mut app, &mut store, "Alex Rivera", "alex@example.com");

    press(&mut app, &mut store, KeyCode::Char('n'));
    assert_eq!(app.overlay, Overlay::CreateTask);
    type_text(&mut app, &mut store, "Water the plants");
    press(&mut app, &mut store, KeyCode::Enter);

    assert_eq!(app.overlay, Overlay::None);
    let saved_tasks = store.load_tasks().unwrap().expect("task record");
    assert_eq!(saved_tasks.len(), 3);
    assert_eq!(saved_tasks[0].title, "Water the plants");
    assert_eq!(saved_tasks[0].status, TaskStatus::Available);
}

#[test]
fn create_modal_cancel_leaves_the_store_alone() {
    let mut store = MemoryStore::new();
    let mut app = boot(&store);
    sign_in(&mut app, &mut store, "Alex Rivera", "alex@example.com");

    press(&mut app, &mut store, KeyCode::Char('n'));
    type_text(&mut app, &mut store, "Half-typed");
    press(&mut app, &mut store, KeyCode::Esc);

    assert_eq!(app.overlay, Overlay::None);
    assert!(!app.should_quit);
    assert_eq!(store.load_tasks().unwrap().expect("task record").len(), 2);
}

#[test]
fn title_input_respects_the_configured_cap() {
    let mut store = MemoryStore::new();
    let mut app = boot(&store).with_max_title_len(8);
    sign_in(&mut app, &mut store, "Alex Rivera", "alex@example.com");

    press(&mut app, &mut store, KeyCode::Char('n'));
    type_text(&mut app, &mut store, "A much longer title than allowed");
    assert_eq!(app.title_input.value(), "A much l");
}

// --- gate tests ---

#[test]
fn incomplete_form_keeps_the_gate_closed_to_the_board() {
    let mut store = MemoryStore::new();
    let mut app = boot(&store);

    // Submitting without an email is refused; board keys stay inert.
    type_text(&mut app, &mut store, "Alex Rivera");
    press(&mut app, &mut store, KeyCode::Enter);
    assert!(app.is_signin_open());
    assert!(store.load_user().unwrap().is_none());

    press(&mut app, &mut store, KeyCode::Char('1'));
    assert!(app.is_signin_open());
}

#[test]
fn each_gate_pass_creates_a_distinct_identity() {
    let mut store = MemoryStore::new();
    let mut app = boot(&store);

    sign_in(&mut app, &mut store, "Alex Rivera", "alex@example.com");
    let first_id = app.board.current_user().unwrap().id.clone();

    press(&mut app, &mut store, KeyCode::Char('s'));
    sign_in(&mut app, &mut store, "Alex Rivera", "alex@example.com");
    let second_id = app.board.current_user().unwrap().id.clone();

    assert_ne!(first_id, second_id);
    assert_eq!(store.load_user().unwrap().expect("user record").id, second_id);
}
