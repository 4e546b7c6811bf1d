//! Store Integration Tests
//!
//! Drives `LibraryStore` against the mock backend (no delay) and against
//! failing doubles.

use async_trait::async_trait;
use proptest::prelude::*;

use super::*;
use crate::backend::{Ack, DeleteAck, FolderRecord, LibraryItem, MockBackend};
use crate::domain::{ContentItem, Location};

const USER: &str = "mock-user-123";

/// Backend whose every call fails
struct FailingBackend;

#[async_trait(?Send)]
impl LibraryBackend for FailingBackend {
    async fn create_folder(&self, _: &UserId, _: FolderRequest) -> LibraryResult<FolderRecord> {
        Err(LibraryError::Backend("offline".into()))
    }

    async fn rename_folder(&self, _: &UserId, _: &FolderId, _: FolderRequest) -> LibraryResult<Ack> {
        Err(LibraryError::Backend("offline".into()))
    }

    async fn delete_folder(&self, _: &UserId, _: &FolderId, _: bool) -> LibraryResult<DeleteAck> {
        Err(LibraryError::Backend("offline".into()))
    }

    async fn get_library_items(&self, _: Option<&str>) -> LibraryResult<Vec<LibraryItem>> {
        Err(LibraryError::Backend("offline".into()))
    }

    async fn assign_content_to_folder(&self, _: &UserId, _: &ContentId, _: AssignRequest) -> LibraryResult<Ack> {
        Err(LibraryError::Backend("offline".into()))
    }
}

/// Backend that answers but refuses mutations
struct RefusingBackend;

#[async_trait(?Send)]
impl LibraryBackend for RefusingBackend {
    async fn create_folder(&self, _: &UserId, request: FolderRequest) -> LibraryResult<FolderRecord> {
        Ok(FolderRecord {
            id: "never".into(),
            name: request.name,
            ..Default::default()
        })
    }

    async fn rename_folder(&self, _: &UserId, _: &FolderId, _: FolderRequest) -> LibraryResult<Ack> {
        Ok(Ack { success: false })
    }

    async fn delete_folder(&self, _: &UserId, _: &FolderId, delete_contents: bool) -> LibraryResult<DeleteAck> {
        Ok(DeleteAck {
            success: false,
            delete_contents,
        })
    }

    async fn get_library_items(&self, _: Option<&str>) -> LibraryResult<Vec<LibraryItem>> {
        Ok(Vec::new())
    }

    async fn assign_content_to_folder(&self, _: &UserId, _: &ContentId, _: AssignRequest) -> LibraryResult<Ack> {
        Ok(Ack { success: false })
    }
}

fn content(id: &str, folder: Option<&str>) -> ContentItem {
    let mut item = ContentItem::new(id, format!("Content {}", id));
    item.folder_id = folder.map(FolderId::from);
    item
}

fn folder(id: &str, contents: &[&str]) -> Folder {
    let mut folder = Folder::new(id, format!("Folder {}", id));
    folder.contents = contents.iter().map(|c| content(c, Some(id))).collect();
    folder
}

fn store_with(table: TableState) -> LibraryStore<MockBackend> {
    LibraryStore::with_table(MockBackend::instant(), UserId::new(USER), table)
}

fn failing_store(table: TableState) -> LibraryStore<FailingBackend> {
    LibraryStore::with_table(FailingBackend, UserId::new(USER), table)
}

#[tokio::test]
async fn test_initial_load_from_mock() {
    let mut store = LibraryStore::new(MockBackend::instant(), UserId::new(USER));
    assert!(store.state().is_loading);

    assert!(store.load(None).await);

    let state = store.state();
    assert!(!state.is_loading);
    assert!(!state.is_error);
    assert_eq!(state.table.folders.len(), 2);
    assert_eq!(state.table.unassigned_contents.len(), 6);
    assert!(state.has_content());
}

#[tokio::test]
async fn test_load_with_search() {
    let mut store = LibraryStore::new(MockBackend::instant(), UserId::new(USER));
    store.load(Some("excursión")).await;

    let table = store.table();
    assert!(table.folders.is_empty());
    assert_eq!(table.unassigned_contents.len(), 2);
}

#[tokio::test]
async fn test_create_folder_trims_and_appends() {
    let mut store = store_with(TableState::new(vec![folder("f1", &[])], vec![]));

    assert!(store.create_folder("  Matemáticas  ").await);

    let folders = &store.table().folders;
    assert_eq!(folders.len(), 2);
    assert_eq!(folders[1].name, "Matemáticas");
    assert!(folders[1].is_empty());
}

#[tokio::test]
async fn test_blank_name_skips_backend() {
    let mut store = failing_store(TableState::new(vec![folder("f1", &[])], vec![]));

    assert!(!store.create_folder("   ").await);
    assert!(!store.rename_folder(&"f1".into(), "").await);

    // The failing backend was never reached
    assert!(!store.state().is_error);
    assert_eq!(store.state().revision, 0);
}

#[tokio::test]
async fn test_rename_folder() {
    let mut store = store_with(TableState::new(vec![folder("f1", &["a"])], vec![]));

    assert!(store.rename_folder(&"f1".into(), " Nuevo ").await);

    let f1 = store.table().folder(&"f1".into()).unwrap();
    assert_eq!(f1.name, "Nuevo");
    assert_eq!(f1.len(), 1);
}

#[tokio::test]
async fn test_delete_keeping_contents() {
    let mut store = store_with(TableState::new(
        vec![folder("f1", &["a", "b", "c"]), folder("f2", &[])],
        vec![content("d", None)],
    ));
    store.toggle_folder_expansion(&"f1".into());
    let before = store.table().unassigned_contents.len();

    assert!(store.delete_folder(&"f1".into(), false).await);

    let state = store.state();
    assert_eq!(state.table.folders.len(), 1);
    assert_eq!(state.table.unassigned_contents.len(), before + 3);
    assert!(state.table.unassigned_contents.iter().all(ContentItem::is_unassigned));
    assert!(!state.expanded.is_expanded(&"f1".into()));
    state.table.verify().unwrap();
}

#[tokio::test]
async fn test_delete_with_contents() {
    let mut store = store_with(TableState::new(
        vec![folder("f1", &["a", "b"]), folder("f2", &["c"])],
        vec![content("d", None)],
    ));
    let total = store.table().content_count();

    assert!(store.delete_folder(&"f1".into(), true).await);

    let table = store.table();
    assert_eq!(table.content_count(), total - 2);
    assert_eq!(table.unassigned_contents.len(), 1);
    assert!(table.locate(&"a".into()).is_none());
}

#[tokio::test]
async fn test_move_between_folders() {
    let mut store = store_with(TableState::new(vec![folder("a", &["x", "y"]), folder("b", &["z"])], vec![]));

    assert!(store.move_content(&"x".into(), Some(&"b".into())).await);

    let table = store.table();
    assert_eq!(table.folder(&"a".into()).unwrap().len(), 1);
    let b = table.folder(&"b".into()).unwrap();
    assert_eq!(b.len(), 2);
    assert_eq!(b.contents.last().unwrap().folder_id, Some("b".into()));
}

#[tokio::test]
async fn test_direct_move_to_current_folder_still_reinserts() {
    let mut store = store_with(TableState::new(vec![folder("f1", &["a", "b"])], vec![]));

    assert!(store.move_content(&"a".into(), Some(&"f1".into())).await);

    let ids: Vec<_> = store.table().folders[0].contents.iter().map(|c| c.id.to_string()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[tokio::test]
async fn test_move_then_delete_scenario() {
    let mut store = store_with(TableState::new(
        vec![folder("F1", &[]), folder("F2", &[])],
        vec![content("C1", None)],
    ));

    store.move_content(&"C1".into(), Some(&"F1".into())).await;
    {
        let table = store.table();
        assert_eq!(table.folder(&"F1".into()).unwrap().contents[0].id.as_str(), "C1");
        assert!(table.unassigned_contents.is_empty());
    }

    store.delete_folder(&"F1".into(), false).await;
    let table = store.table();
    let folder_ids: Vec<_> = table.folders.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(folder_ids, vec!["F2"]);
    assert_eq!(table.unassigned_contents.len(), 1);
    assert_eq!(table.unassigned_contents[0].id.as_str(), "C1");
    assert_eq!(table.unassigned_contents[0].folder_id, None);
}

#[tokio::test]
async fn test_failure_sets_flag_and_keeps_state() {
    let initial = TableState::new(vec![folder("f1", &["a"])], vec![content("b", None)]);
    let mut store = failing_store(initial.clone());
    store.toggle_folder_expansion(&"f1".into());

    assert!(!store.move_content(&"b".into(), Some(&"f1".into())).await);
    assert!(store.state().is_error);
    assert!(!store.state().is_loading);

    assert!(!store.delete_folder(&"f1".into(), false).await);
    assert!(!store.create_folder("Otra").await);
    assert!(!store.rename_folder(&"f1".into(), "Otra").await);

    assert_eq!(store.table(), &initial);
    assert_eq!(store.state().revision, 0);
    assert!(store.state().expanded.is_expanded(&"f1".into()));
}

#[tokio::test]
async fn test_load_failure_sets_flag() {
    let mut store = LibraryStore::new(FailingBackend, UserId::new(USER));
    assert!(!store.load(None).await);
    assert!(store.state().is_error);
    assert!(!store.state().is_loading);
    assert!(!store.state().has_content());
}

#[tokio::test]
async fn test_refused_ack_is_an_error() {
    let initial = TableState::new(vec![folder("f1", &[])], vec![content("a", None)]);
    let mut store = LibraryStore::with_table(RefusingBackend, UserId::new(USER), initial.clone());

    assert!(!store.move_content(&"a".into(), Some(&"f1".into())).await);
    assert!(store.state().is_error);
    assert_eq!(store.table(), &initial);
}

#[tokio::test]
async fn test_next_operation_clears_error() {
    let mut store = LibraryStore::new(FailingBackend, UserId::new(USER));
    store.load(None).await;
    assert!(store.state().is_error);

    // Settle a success by hand through the shared state halves
    let mut state = store.state().clone();
    let op = Operation::Load { search: None };
    state.begin();
    assert!(!state.is_error);
    assert!(state.settle(&op, Ok(Outcome::Loaded(TableState::default()))));
    assert!(!state.is_error);
}

#[tokio::test]
async fn test_move_to_missing_folder_leaves_table() {
    let initial = TableState::new(vec![folder("f1", &[])], vec![content("a", None)]);
    let mut store = store_with(initial.clone());

    assert!(store.move_content(&"a".into(), Some(&"ghost".into())).await);
    assert_eq!(store.table(), &initial);
    assert_eq!(store.state().revision, 0);
}

#[tokio::test]
async fn test_operation_sequence_preserves_partition() {
    let mut store = LibraryStore::new(MockBackend::instant(), UserId::new(USER));
    store.load(None).await;
    let total = store.table().content_count();

    store.create_folder("Extra").await;
    let extra = store.table().folders.last().unwrap().id.clone();
    let f1 = FolderId::new("folder-1");
    let f2 = FolderId::new("folder-2");

    let steps: Vec<(&str, Option<&FolderId>)> = vec![
        ("content-1", Some(&f1)),
        ("content-2", Some(&f1)),
        ("content-3", Some(&extra)),
        ("content-1", Some(&f2)),
        ("content-2", None),
        ("content-4", Some(&extra)),
        ("content-3", Some(&f1)),
    ];
    for (id, target) in steps {
        store.move_content(&id.into(), target).await;
        store.table().verify().unwrap();
        assert_eq!(store.table().content_count(), total);
    }

    store.rename_folder(&extra, "Renombrada").await;
    store.delete_folder(&extra, false).await;
    store.table().verify().unwrap();
    assert_eq!(store.table().content_count(), total);
    assert_eq!(store.table().locate(&"content-4".into()), Some(Location::Unassigned));

    let in_f1 = store.table().folder(&f1).unwrap().len();
    store.delete_folder(&f1, true).await;
    store.table().verify().unwrap();
    assert_eq!(store.table().content_count(), total - in_f1);
}

/// One confirmed change, with folders and items picked by index into
/// whatever the table holds at that point
#[derive(Debug, Clone)]
enum Step {
    Create(String),
    Rename(usize, String),
    Delete(usize, bool),
    Move(usize, Option<usize>),
    MoveToMissing(usize),
    Toggle(usize),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(Step::Create),
        (any::<usize>(), "[a-z]{1,8}").prop_map(|(f, name)| Step::Rename(f, name)),
        (any::<usize>(), any::<bool>()).prop_map(|(f, all)| Step::Delete(f, all)),
        (any::<usize>(), proptest::option::of(any::<usize>())).prop_map(|(c, f)| Step::Move(c, f)),
        any::<usize>().prop_map(Step::MoveToMissing),
        any::<usize>().prop_map(Step::Toggle),
    ]
}

fn seeded_state() -> LibraryState {
    let table = TableState::new(
        vec![folder("f1", &["c1", "c2"]), folder("f2", &["c3"]), folder("f3", &[])],
        vec![content("c4", None), content("c5", None), content("c6", None)],
    );
    LibraryState::with_table(table, false)
}

fn content_ids(table: &TableState) -> Vec<ContentId> {
    table
        .folders
        .iter()
        .flat_map(|f| f.contents.iter())
        .chain(table.unassigned_contents.iter())
        .map(|c| c.id.clone())
        .collect()
}

fn pick_folder(table: &TableState, i: usize) -> Option<FolderId> {
    if table.folders.is_empty() {
        return None;
    }
    Some(table.folders[i % table.folders.len()].id.clone())
}

proptest! {
    #[test]
    fn test_any_sequence_preserves_partition(steps in prop::collection::vec(step(), 0..40)) {
        let mut state = seeded_state();
        let mut expected = state.table.content_count();
        let mut created = 0;

        for step in steps {
            match step {
                Step::Create(name) => {
                    created += 1;
                    state.apply(Outcome::FolderCreated(Folder::new(format!("new-{}", created), name)));
                }
                Step::Rename(f, name) => {
                    if let Some(id) = pick_folder(&state.table, f) {
                        state.apply(Outcome::FolderRenamed { id, name });
                    }
                }
                Step::Delete(f, delete_contents) => {
                    let Some(id) = pick_folder(&state.table, f) else { continue };
                    let held = state.table.folder(&id).map_or(0, |f| f.len());
                    let unassigned = state.table.unassigned_contents.len();
                    state.apply(Outcome::FolderDeleted { id: id.clone(), delete_contents });

                    prop_assert!(state.table.folder(&id).is_none());
                    prop_assert!(!state.expanded.is_expanded(&id));
                    if delete_contents {
                        expected -= held;
                        prop_assert_eq!(state.table.unassigned_contents.len(), unassigned);
                    } else {
                        prop_assert_eq!(state.table.unassigned_contents.len(), unassigned + held);
                    }
                }
                Step::Move(c, f) => {
                    let ids = content_ids(&state.table);
                    if ids.is_empty() {
                        continue;
                    }
                    let content_id = ids[c % ids.len()].clone();
                    let target = f.and_then(|f| pick_folder(&state.table, f));
                    state.apply(Outcome::ContentMoved { content_id: content_id.clone(), target: target.clone() });
                    prop_assert_eq!(state.table.locate(&content_id), Some(Location::from_folder_id(target)));
                }
                Step::MoveToMissing(c) => {
                    let ids = content_ids(&state.table);
                    if ids.is_empty() {
                        continue;
                    }
                    let content_id = ids[c % ids.len()].clone();
                    let before = state.table.locate(&content_id);
                    state.apply(Outcome::ContentMoved { content_id: content_id.clone(), target: Some("gone".into()) });
                    prop_assert_eq!(state.table.locate(&content_id), before);
                }
                Step::Toggle(f) => {
                    if let Some(id) = pick_folder(&state.table, f) {
                        state.toggle_folder_expansion(&id);
                    }
                }
            }

            prop_assert!(state.table.verify().is_ok());
            prop_assert_eq!(state.table.content_count(), expected);
        }
    }
}
