//! Navigator end-to-end scenarios.

mod common;

use std::sync::Arc;

use dochub_core::error::ErrorKind;
use dochub_core::types::NodeId;
use dochub_entity::repository::DocumentRepository;
use dochub_navigator::{Navigator, NavigatorStatus};

use common::{FakeRepository, build_standard_tree, test_config};

fn make_navigator(repo: &Arc<FakeRepository>) -> Navigator {
    Navigator::new(
        Arc::clone(repo) as Arc<dyn DocumentRepository>,
        &test_config(),
    )
}

fn path_ids(navigator: &Navigator) -> Vec<Option<String>> {
    navigator
        .path()
        .entries
        .iter()
        .map(|e| e.id.as_ref().map(|id| id.to_string()))
        .collect()
}

#[tokio::test]
async fn test_initialize_builds_full_path() {
    // Scenario A.
    let repo = Arc::new(FakeRepository::new());
    let doc = build_standard_tree(&repo);
    let mut navigator = make_navigator(&repo);

    navigator.initialize(doc).await;

    assert!(navigator.status().is_ready());
    assert_eq!(
        path_ids(&navigator),
        vec![
            None,
            Some("eng".to_string()),
            Some("pol".to_string()),
            Some("doc".to_string())
        ]
    );
    assert_eq!(navigator.path().entries[3].title, "Welding Procedure");

    // The browsed location is the document's parent, and its listing
    // holds containers only.
    assert_eq!(navigator.location().unwrap().id, NodeId::new("pol"));
    let titles: Vec<&str> = navigator.children().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Archive", "Yearly Audits"]);
}

#[tokio::test]
async fn test_breadcrumb_jump_truncates_path() {
    // Scenario B: clicking "Engineering" from scenario A's path.
    let repo = Arc::new(FakeRepository::new());
    let doc = build_standard_tree(&repo);
    let eng = repo.get_by_id(&NodeId::new("eng")).await.unwrap();
    let mut navigator = make_navigator(&repo);
    navigator.initialize(doc).await;

    navigator.navigate_into(eng).await;

    assert!(navigator.status().is_ready());
    assert_eq!(
        path_ids(&navigator),
        vec![None, Some("eng".to_string())]
    );
    let titles: Vec<&str> = navigator.children().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Policies"]);
}

#[tokio::test]
async fn test_descend_extends_path_from_location() {
    let repo = Arc::new(FakeRepository::new());
    let doc = build_standard_tree(&repo);
    let arch = repo.get_by_id(&NodeId::new("arch")).await.unwrap();
    let mut navigator = make_navigator(&repo);
    navigator.initialize(doc).await;

    // Descending from Policies into Archive must drop the document tail
    // entry before appending.
    navigator.navigate_into(arch).await;

    assert_eq!(
        path_ids(&navigator),
        vec![
            None,
            Some("eng".to_string()),
            Some("pol".to_string()),
            Some("arch".to_string())
        ]
    );
}

#[tokio::test]
async fn test_navigate_into_current_location_is_noop() {
    let repo = Arc::new(FakeRepository::new());
    let doc = build_standard_tree(&repo);
    let pol = repo.get_by_id(&NodeId::new("pol")).await.unwrap();
    let mut navigator = make_navigator(&repo);
    navigator.initialize(doc).await;

    let path_before = navigator.path().clone();
    let children_before = Arc::clone(navigator.children());
    let list_calls_before = repo.list_call_count();

    navigator.navigate_into(pol).await;

    assert!(navigator.status().is_ready());
    assert_eq!(*navigator.path(), path_before);
    assert!(Arc::ptr_eq(navigator.children(), &children_before));
    assert_eq!(repo.list_call_count(), list_calls_before);
}

#[tokio::test]
async fn test_navigate_to_root() {
    let repo = Arc::new(FakeRepository::new());
    let doc = build_standard_tree(&repo);
    let mut navigator = make_navigator(&repo);
    navigator.initialize(doc).await;

    navigator.navigate_to_root().await;

    assert!(navigator.status().is_ready());
    assert!(navigator.location().is_none());
    assert_eq!(path_ids(&navigator), vec![None]);
    let titles: Vec<&str> = navigator.children().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Engineering", "Operations"]);
}

#[tokio::test]
async fn test_create_folder_refreshes_listing() {
    let repo = Arc::new(FakeRepository::new());
    let doc = build_standard_tree(&repo);
    let mut navigator = make_navigator(&repo);
    navigator.initialize(doc).await;

    let created = navigator.create_folder_here("Templates").await.unwrap();

    assert_eq!(created.parent_id, Some(NodeId::new("pol")));
    assert!(
        navigator
            .children()
            .iter()
            .any(|c| c.title == "Templates"),
        "new folder must appear after cache invalidation"
    );
    // Location and path are untouched.
    assert_eq!(navigator.location().unwrap().id, NodeId::new("pol"));
    assert_eq!(navigator.path().len(), 4);
}

#[tokio::test]
async fn test_create_folder_rejects_blank_title() {
    let repo = Arc::new(FakeRepository::new());
    let doc = build_standard_tree(&repo);
    let mut navigator = make_navigator(&repo);
    navigator.initialize(doc).await;

    let err = navigator.create_folder_here("   ").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_confirm_move_to_selected_destination() {
    let repo = Arc::new(FakeRepository::new());
    let doc = build_standard_tree(&repo);
    let ops = repo.get_by_id(&NodeId::new("ops")).await.unwrap();
    let mut navigator = make_navigator(&repo);
    navigator.initialize(doc).await;

    navigator.select_destination(ops);
    let moved = navigator.confirm_move().await.unwrap();

    assert_eq!(moved.parent_id, Some(NodeId::new("ops")));
    let stored = repo.get_by_id(&NodeId::new("doc")).await.unwrap();
    assert_eq!(stored.parent_id, Some(NodeId::new("ops")));
}

#[tokio::test]
async fn test_confirm_move_into_own_child_fails() {
    // Scenario C, end to end: moving Engineering into a folder fetched
    // as its own child.
    let repo = Arc::new(FakeRepository::new());
    build_standard_tree(&repo);
    let eng = repo.get_by_id(&NodeId::new("eng")).await.unwrap();
    let pol = repo.get_by_id(&NodeId::new("pol")).await.unwrap();
    let mut navigator = make_navigator(&repo);
    navigator.initialize(eng).await;

    assert!(!navigator.is_valid_destination(&pol).await);

    navigator.select_destination(pol);
    let err = navigator.confirm_move().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    // The move never reached the backend.
    let stored = repo.get_by_id(&NodeId::new("eng")).await.unwrap();
    assert_eq!(stored.parent_id, None);
}

#[tokio::test]
async fn test_confirm_move_defaults_to_current_location() {
    let repo = Arc::new(FakeRepository::new());
    let doc = build_standard_tree(&repo);
    let ops = repo.get_by_id(&NodeId::new("ops")).await.unwrap();
    let mut navigator = make_navigator(&repo);
    navigator.initialize(doc).await;

    // Browse to Operations without selecting anything.
    navigator.navigate_to_root().await;
    navigator.navigate_into(ops).await;
    let moved = navigator.confirm_move().await.unwrap();

    assert_eq!(moved.parent_id, Some(NodeId::new("ops")));
}

#[tokio::test]
async fn test_move_invalidates_both_listings() {
    let repo = Arc::new(FakeRepository::new());
    build_standard_tree(&repo);
    let arch = repo.get_by_id(&NodeId::new("arch")).await.unwrap();
    let eng = repo.get_by_id(&NodeId::new("eng")).await.unwrap();
    let mut navigator = make_navigator(&repo);
    navigator.initialize(arch).await;

    navigator.select_destination(eng.clone());
    navigator.confirm_move().await.unwrap();

    // Destination listing was invalidated: a fresh navigation sees the
    // moved folder.
    navigator.navigate_into(eng).await;
    let titles: Vec<&str> = navigator.children().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Archive", "Policies"]);
}

#[tokio::test]
async fn test_listing_failure_surfaces_retryable_error() {
    let repo = Arc::new(FakeRepository::new());
    let doc = build_standard_tree(&repo);
    let eng = repo.get_by_id(&NodeId::new("eng")).await.unwrap();
    let mut navigator = make_navigator(&repo);
    navigator.initialize(doc).await;

    repo.break_listing(Some("eng"));
    navigator.navigate_into(eng).await;

    match navigator.status() {
        NavigatorStatus::Error { failed_location, .. } => {
            assert_eq!(failed_location.as_ref(), Some(&NodeId::new("eng")));
        }
        other => panic!("expected error status, got {other:?}"),
    }
    // The previous location is still displayed behind the error.
    assert_eq!(navigator.location().unwrap().id, NodeId::new("pol"));

    repo.fix_listing(Some("eng"));
    navigator.retry().await;

    assert!(navigator.status().is_ready());
    assert_eq!(navigator.location().unwrap().id, NodeId::new("eng"));
}

#[tokio::test]
async fn test_initialize_with_missing_parent_falls_back_to_root() {
    let repo = Arc::new(FakeRepository::new());
    let doc = build_standard_tree(&repo);
    repo.mark_missing("pol");
    let mut navigator = make_navigator(&repo);

    navigator.initialize(doc).await;

    // The dialog is not stuck: root is browsable even though the
    // document's own parent could not be resolved.
    assert!(navigator.status().is_ready());
    assert!(navigator.location().is_none());
    assert!(!navigator.path().complete);
    let titles: Vec<&str> = navigator.children().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Engineering", "Operations"]);
}

#[tokio::test]
async fn test_closed_session_refuses_mutations() {
    let repo = Arc::new(FakeRepository::new());
    let doc = build_standard_tree(&repo);
    let mut navigator = make_navigator(&repo);
    navigator.initialize(doc).await;

    navigator.close();

    assert_eq!(*navigator.status(), NavigatorStatus::Idle);
    let err = navigator.create_folder_here("New").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Cancelled);
    let err = navigator.confirm_move().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Cancelled);
}

#[tokio::test]
async fn test_snapshot_mirrors_state() {
    let repo = Arc::new(FakeRepository::new());
    let doc = build_standard_tree(&repo);
    let mut navigator = make_navigator(&repo);
    navigator.initialize(doc).await;

    let snapshot = navigator.snapshot();

    assert!(snapshot.status.is_ready());
    assert_eq!(snapshot.location.unwrap().id, NodeId::new("pol"));
    assert_eq!(snapshot.path.len(), 4);
    assert!(snapshot.selected_destination.is_none());
    assert!(Arc::ptr_eq(&snapshot.children, navigator.children()));
}
