//! Property-based snapshot round-trip tests.
//!
//! Uses proptest to verify:
//! 1. Any valid `User` survives encode → decode round-trip.
//! 2. Any valid `Task` collection survives encode → decode round-trip,
//!    preserving order.
//! 3. Claim fields appear in the encoded record exactly when the task is
//!    claimed.
//! 4. Arbitrary text never causes a panic in decode (returns `Err`
//!    gracefully).

use proptest::prelude::*;
use synctask_model::snapshot;
use synctask_model::task::{Task, TaskId, TaskStatus};
use synctask_model::user::{User, UserId};
use uuid::Uuid;

// --- Arbitrary implementations for record types ---

/// Strategy for generating arbitrary `UserId` values.
///
/// Mixes UUID-shaped ids with short numeric ids, which older records used.
fn arb_user_id() -> impl Strategy<Value = UserId> {
    prop_oneof![
        any::<u128>().prop_map(|n| UserId::from(Uuid::from_u128(n).to_string())),
        "[0-9]{1,4}".prop_map(UserId::from),
    ]
}

/// Strategy for generating arbitrary `TaskId` values.
fn arb_task_id() -> impl Strategy<Value = TaskId> {
    prop_oneof![
        any::<u128>().prop_map(|n| TaskId::from(Uuid::from_u128(n).to_string())),
        "[0-9]{1,4}".prop_map(TaskId::from),
    ]
}

/// Strategy for generating arbitrary `TaskStatus` values.
fn arb_task_status() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Available),
        Just(TaskStatus::Claimed),
        Just(TaskStatus::Completed),
    ]
}

/// Strategy for generating arbitrary `User` values.
fn arb_user() -> impl Strategy<Value = User> {
    (
        arb_user_id(),
        "[^\x00]{1,64}",
        "[^\x00]{1,64}",
        any::<u32>(),
        any::<bool>(),
    )
        .prop_map(|(id, name, email, points, can_create_tasks)| User {
            id,
            name,
            email,
            points,
            can_create_tasks,
        })
}

/// Strategy for generating arbitrary `Task` values.
///
/// The claim fields are populated exactly when the generated status is
/// `Claimed`, matching the record invariant.
fn arb_task() -> impl Strategy<Value = Task> {
    (
        arb_task_id(),
        "[^\x00]{1,128}",
        "[^\x00]{0,256}",
        arb_user_id(),
        any::<u64>(),
        arb_task_status(),
        arb_user_id(),
        "[^\x00]{1,64}",
    )
        .prop_map(
            |(id, title, description, created_by, created_at, status, claimer, claimer_name)| {
                let (claimed_by, claimed_by_name) = if status == TaskStatus::Claimed {
                    (Some(claimer), Some(claimer_name))
                } else {
                    (None, None)
                };
                Task {
                    id,
                    title,
                    description,
                    status,
                    created_by,
                    claimed_by,
                    claimed_by_name,
                    created_at,
                }
            },
        )
}

// --- Property tests ---

proptest! {
    /// Any valid User survives an encode → decode round-trip.
    #[test]
    fn user_record_round_trip(user in arb_user()) {
        let json = snapshot::encode_user(&user).expect("encode should succeed");
        let decoded = snapshot::decode_user(&json).expect("decode should succeed");
        prop_assert_eq!(user, decoded);
    }

    /// Any valid Task survives an encode → decode round-trip.
    #[test]
    fn task_record_round_trip(task in arb_task()) {
        let json = snapshot::encode_tasks(std::slice::from_ref(&task))
            .expect("encode should succeed");
        let decoded = snapshot::decode_tasks(&json).expect("decode should succeed");
        prop_assert_eq!(vec![task], decoded);
    }

    /// Any valid task collection round-trips with its order preserved.
    #[test]
    fn task_collection_round_trip_preserves_order(
        tasks in prop::collection::vec(arb_task(), 0..8)
    ) {
        let json = snapshot::encode_tasks(&tasks).expect("encode should succeed");
        let decoded = snapshot::decode_tasks(&json).expect("decode should succeed");
        prop_assert_eq!(tasks, decoded);
    }

    /// Claim keys appear in the encoded record exactly for claimed tasks.
    #[test]
    fn claim_keys_present_iff_claimed(task in arb_task()) {
        let claimed = task.status == TaskStatus::Claimed;
        let json = snapshot::encode_tasks(std::slice::from_ref(&task))
            .expect("encode should succeed");
        let value: serde_json::Value =
            serde_json::from_str(&json).expect("encoded record should be valid JSON");
        let object = value[0].as_object().expect("task should encode as an object");
        prop_assert_eq!(object.contains_key("claimedBy"), claimed);
        prop_assert_eq!(object.contains_key("claimedByName"), claimed);
    }

    /// Arbitrary text never causes a panic when decoded as a user record.
    #[test]
    fn arbitrary_text_decode_user_no_panic(text in "\\PC*") {
        // We don't care if it returns Ok or Err, just that it doesn't panic.
        let _ = snapshot::decode_user(&text);
    }

    /// Arbitrary text never causes a panic when decoded as a task record.
    #[test]
    fn arbitrary_text_decode_tasks_no_panic(text in "\\PC*") {
        let _ = snapshot::decode_tasks(&text);
    }
}
