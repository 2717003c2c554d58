//! Integration tests for persistence across launches: restoring the board
//! from disk records, fallback on unreadable records, and the write-back
//! after every mutation.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use synctask::board::TaskBoard;
use synctask::store::{FileStore, PersistRequest, persist};
use synctask_model::task::{TaskId, TaskStatus};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Opens the file store for a data directory, as the binary does at launch.
fn open_store(dir: &Path) -> FileStore {
    FileStore::open(dir).expect("open store")
}

/// Persists the board state, as the event loop does after a mutation.
fn write_back(store: &mut FileStore, board: &TaskBoard, request: PersistRequest) {
    persist(store, board.current_user(), board.tasks(), request).expect("persist");
}

// --- first launch tests ---

#[test]
fn first_launch_seeds_and_persists_the_board() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path());

    let board = TaskBoard::restore(&store);
    assert!(board.current_user().is_none());
    assert_eq!(board.tasks().len(), 2);
    assert_eq!(board.tasks()[0].id, TaskId::from("1"));
    assert_eq!(board.tasks()[1].id, TaskId::from("2"));

    write_back(&mut store, &board, PersistRequest::Snapshot);
    assert!(dir.path().join("tasks.json").is_file());
    // No session, so no user record is written.
    assert!(!dir.path().join("user.json").exists());
}

#[test]
fn seeded_timestamps_survive_a_relaunch() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path());
    let board = TaskBoard::restore(&store);
    let first_created_at: Vec<u64> = board.tasks().iter().map(|t| t.created_at).collect();
    write_back(&mut store, &board, PersistRequest::Snapshot);

    // Relaunch: the persisted record wins over re-seeding.
    let store = open_store(dir.path());
    let board = TaskBoard::restore(&store);
    let second_created_at: Vec<u64> = board.tasks().iter().map(|t| t.created_at).collect();
    assert_eq!(first_created_at, second_created_at);
}

// --- session round-trip tests ---

#[test]
fn session_and_claim_survive_a_relaunch() {
    let dir = tempfile::tempdir().unwrap();

    let user_id = {
        let mut store = open_store(dir.path());
        let mut board = TaskBoard::restore(&store);
        board.sign_in("Alex Rivera", "alex@example.com");
        board.claim_task(&TaskId::from("1")).expect("claim");
        write_back(&mut store, &board, PersistRequest::Snapshot);
        board.current_user().unwrap().id.clone()
    };

    let mut store = open_store(dir.path());
    let mut board = TaskBoard::restore(&store);

    let user = board.current_user().expect("session restored");
    assert_eq!(user.id, user_id);
    assert_eq!(user.name, "Alex Rivera");

    let task = &board.tasks()[0];
    assert_eq!(task.status, TaskStatus::Claimed);
    assert!(task.is_claimed_by(&user_id));

    // The restored identity still owns its claim.
    board.complete_task(&TaskId::from("1")).expect("complete");
    assert_eq!(board.current_user().unwrap().points, 1);
    write_back(&mut store, &board, PersistRequest::Snapshot);
}

#[test]
fn points_survive_a_relaunch() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = open_store(dir.path());
        let mut board = TaskBoard::restore(&store);
        board.sign_in("Alex Rivera", "alex@example.com");
        board.claim_task(&TaskId::from("2")).expect("claim");
        board.complete_task(&TaskId::from("2")).expect("complete");
        write_back(&mut store, &board, PersistRequest::Snapshot);
    }

    let store = open_store(dir.path());
    let board = TaskBoard::restore(&store);
    assert_eq!(board.current_user().unwrap().points, 1);

    let entries = board.leaderboard();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[3].name, "Alex Rivera (You)");
    assert_eq!(entries[3].points, 1);
}

#[test]
fn sign_out_removes_the_session_but_not_the_tasks() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = open_store(dir.path());
        let mut board = TaskBoard::restore(&store);
        board.sign_in("Alex Rivera", "alex@example.com");
        board.claim_task(&TaskId::from("1")).expect("claim");
        write_back(&mut store, &board, PersistRequest::Snapshot);

        board.sign_out();
        write_back(&mut store, &board, PersistRequest::RemoveUser);
    }

    assert!(!dir.path().join("user.json").exists());
    assert!(dir.path().join("tasks.json").is_file());

    let store = open_store(dir.path());
    let board = TaskBoard::restore(&store);
    assert!(board.current_user().is_none());
    // The claim from the ended session is still on the task.
    assert_eq!(board.tasks()[0].status, TaskStatus::Claimed);
}

// --- unreadable record tests ---

#[test]
fn corrupted_user_record_falls_back_to_signed_out() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = open_store(dir.path());
        let mut board = TaskBoard::restore(&store);
        board.sign_in("Alex Rivera", "alex@example.com");
        board.claim_task(&TaskId::from("1")).expect("claim");
        write_back(&mut store, &board, PersistRequest::Snapshot);
    }
    fs::write(dir.path().join("user.json"), "{definitely not json").unwrap();

    let store = open_store(dir.path());
    let board = TaskBoard::restore(&store);
    assert!(board.current_user().is_none());
    // The intact task record is still honored.
    assert_eq!(board.tasks().len(), 2);
    assert_eq!(board.tasks()[0].status, TaskStatus::Claimed);
}

#[test]
fn corrupted_tasks_record_reseeds_the_board() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = open_store(dir.path());
        let mut board = TaskBoard::restore(&store);
        board.sign_in("Alex Rivera", "alex@example.com");
        write_back(&mut store, &board, PersistRequest::Snapshot);
    }
    fs::write(dir.path().join("tasks.json"), "[{\"id\":").unwrap();

    let store = open_store(dir.path());
    let board = TaskBoard::restore(&store);
    // The session is kept; the task record starts over from the seeds.
    assert_eq!(board.current_user().unwrap().name, "Alex Rivera");
    assert_eq!(board.tasks().len(), 2);
    assert!(
        board
            .tasks()
            .iter()
            .all(|t| t.status == TaskStatus::Available)
    );
}

#[test]
fn empty_task_record_is_respected_not_reseeded() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("tasks.json"), "[]").unwrap();

    let store = open_store(dir.path());
    let board = TaskBoard::restore(&store);
    // An existing record with zero tasks is a valid board state.
    assert!(board.tasks().is_empty());
}

// --- write-back shape tests ---

#[test]
fn persisted_records_match_the_snapshot_layout() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path());
    let mut board = TaskBoard::restore(&store);
    board.sign_in("Alex Rivera", "alex@example.com");
    board.claim_task(&TaskId::from("1")).expect("claim");
    write_back(&mut store, &board, PersistRequest::Snapshot);

    let user_raw = fs::read_to_string(dir.path().join("user.json")).unwrap();
    assert!(user_raw.contains("\"canCreateTasks\": true"));
    assert!(user_raw.contains("\"points\": 0"));

    let tasks_raw = fs::read_to_string(dir.path().join("tasks.json")).unwrap();
    assert!(tasks_raw.contains("\"claimedByName\": \"Alex Rivera\""));
    assert!(tasks_raw.contains("\"status\": \"claimed\""));
    // Records are pretty-printed for hand inspection.
    assert!(tasks_raw.contains('\n'));

    let tasks_value: serde_json::Value = serde_json::from_str(&tasks_raw).unwrap();
    let entries = tasks_value.as_array().expect("task record is an array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], "1");
    assert_eq!(entries[1]["id"], "2");
}

#[test]
fn mutations_after_write_back_are_not_durable_until_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path());
    let mut board = TaskBoard::restore(&store);
    board.sign_in("Alex Rivera", "alex@example.com");
    write_back(&mut store, &board, PersistRequest::Snapshot);

    // A claim without a following persist is lost on relaunch.
    board.claim_task(&TaskId::from("1")).expect("claim");

    let reopened = open_store(dir.path());
    let restored = TaskBoard::restore(&reopened);
    assert_eq!(restored.tasks()[0].status, TaskStatus::Available);
}
