//! QA tests for profile persistence across sessions.
//!
//! A session's architect state is saved as versioned JSON and restored
//! into a fresh session, which must pick up where the old one left off.
//!
//! Run with: `cargo test -p solace-core --test qa_persistence`

use solace_core::store::profile_path;
use solace_core::{ArchitectState, ChatSession, SavedProfile, SessionConfig, StoreError, UserId};
use tempfile::TempDir;

fn populated_session() -> ChatSession {
    let mut session = ChatSession::new(SessionConfig::new().with_seed(42));
    session.handle_turn("Add walk the coast path to my bucket list");
    session.handle_turn("Save idea tiny herb garden");
    session.handle_turn("Book dentist at 9am");
    session
}

#[tokio::test]
async fn test_session_survives_a_save_load_cycle() {
    let temp_dir = TempDir::new().expect("temp dir");
    let user = UserId::new();
    let path = profile_path(temp_dir.path(), user);

    let session = populated_session();
    let profile = SavedProfile::new(user, Some("Asha".to_string()), session.architect().clone());
    profile.save_json(&path).await.expect("save");

    let loaded = SavedProfile::load_json(&path).await.expect("load");
    let mut resumed = ChatSession::with_state(
        SessionConfig::new().with_seed(42),
        Default::default(),
        loaded.architect,
    );

    // The restored lists are visible to the command router.
    let reply = resumed.handle_turn("show tasks");
    assert!(reply.text.contains("walk the coast path"));
    let reply = resumed.handle_turn("idea vault");
    assert!(reply.text.contains("tiny herb garden"));
    let reply = resumed.handle_turn("dashboard");
    assert!(reply.text.contains("dentist at 9am"));
}

#[tokio::test]
async fn test_peek_metadata_without_full_load() {
    let temp_dir = TempDir::new().expect("temp dir");
    let user = UserId::new();
    let path = profile_path(temp_dir.path(), user);

    let session = populated_session();
    SavedProfile::new(user, Some("Ravi".to_string()), session.architect().clone())
        .save_json(&path)
        .await
        .expect("save");

    let metadata = SavedProfile::peek_metadata(&path).await.expect("peek");
    assert_eq!(metadata.user, user);
    assert_eq!(metadata.user_name.as_deref(), Some("Ravi"));
    assert_eq!(metadata.task_count, 1);
    assert!(metadata.history_len > 0);
}

#[tokio::test]
async fn test_missing_profile_degrades_to_fresh_state() {
    let temp_dir = TempDir::new().expect("temp dir");
    let user = UserId::new();
    let path = profile_path(temp_dir.path(), user);

    let profile = SavedProfile::load_or_default(&path, user).await;
    assert_eq!(profile.metadata.user, user);
    assert_eq!(profile.architect, ArchitectState::default());
}

#[tokio::test]
async fn test_corrupt_profile_degrades_to_fresh_state() {
    let temp_dir = TempDir::new().expect("temp dir");
    let user = UserId::new();
    let path = profile_path(temp_dir.path(), user);
    tokio::fs::write(&path, "{\"version\": \"not even close\"")
        .await
        .expect("write");

    let profile = SavedProfile::load_or_default(&path, user).await;
    assert_eq!(profile.architect, ArchitectState::default());
}

#[tokio::test]
async fn test_future_version_is_refused_on_strict_load() {
    let temp_dir = TempDir::new().expect("temp dir");
    let user = UserId::new();
    let path = profile_path(temp_dir.path(), user);

    let mut profile = SavedProfile::new(user, None, ArchitectState::default());
    profile.version = 2;
    let raw = serde_json::to_string(&profile).expect("serialize");
    tokio::fs::write(&path, raw).await.expect("write");

    match SavedProfile::load_json(&path).await {
        Err(StoreError::VersionMismatch { found, .. }) => assert_eq!(found, 2),
        other => panic!("expected a version mismatch, got {other:?}"),
    }
}
