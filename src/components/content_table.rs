//! Content Table Component
//!
//! Folders (with their contents when expanded), the unassigned section, the
//! unassigned drop zone and the drag preview. Drag handlers are bound once in
//! `App`; this component only renders targets and reads drag signals.

use leptos::prelude::*;
use library_core::dnd::{resolve_drag_start, DropTarget, UNASSIGNED_ZONE_KEY};
use library_core::{ContentItem, Folder, LibraryState, TableRow};

use super::content_row::ContentRow;
use super::folder_row::FolderRow;
use crate::context::LibraryDnd;
use crate::store::{use_app_store, AppStateStoreFields};

/// Owned copy of a [`TableRow`] for rendering
#[derive(Clone, Debug, PartialEq)]
struct RowModel {
    /// [`TableRow::key`]
    key: String,
    kind: RowKind,
}

#[derive(Clone, Debug, PartialEq)]
enum RowKind {
    Folder { folder: Folder, expanded: bool },
    Content { content: ContentItem, in_folder: bool, can_drag: bool },
    Separator,
}

impl RowModel {
    /// Unassigned rows are only draggable when there is a folder to drop on
    fn from_row(row: TableRow<'_>, has_folders: bool) -> Self {
        let key = row.key();
        let kind = match row {
            TableRow::Folder { folder, expanded } => RowKind::Folder {
                folder: folder.clone(),
                expanded,
            },
            TableRow::Content {
                content,
                parent_folder_id,
            } => RowKind::Content {
                content: content.clone(),
                in_folder: parent_folder_id.is_some(),
                can_drag: parent_folder_id.is_some() || has_folders,
            },
            TableRow::Separator => RowKind::Separator,
        };
        Self { key, kind }
    }

    /// Row identity plus every field the row renders, so an edited row is
    /// rebuilt and an untouched one is kept
    fn render_key(&self) -> String {
        match &self.kind {
            RowKind::Folder { folder, expanded } => {
                format!("{}|{}|{}|{}", self.key, folder.name, folder.len(), expanded)
            }
            RowKind::Content {
                content,
                in_folder,
                can_drag,
            } => format!("{}|{}|{}|{}", self.key, content.title, in_folder, can_drag),
            RowKind::Separator => self.key.clone(),
        }
    }

    fn into_view(self) -> AnyView {
        match self.kind {
            RowKind::Folder { folder, expanded } => view! { <FolderRow folder=folder expanded=expanded /> }.into_any(),
            RowKind::Content {
                content,
                in_folder,
                can_drag,
            } => view! { <ContentRow content=content in_folder=in_folder can_drag=can_drag /> }.into_any(),
            RowKind::Separator => view! {
                <tr class="section-divider">
                    <td colspan="4">
                        <div class="section-divider-line"></div>
                    </td>
                </tr>
            }
            .into_any(),
        }
    }
}

/// Rows for the current table and expansion set
fn table_rows(state: &LibraryState) -> Vec<RowModel> {
    let has_folders = !state.table.folders.is_empty();
    state
        .rows()
        .into_iter()
        .map(|row| RowModel::from_row(row, has_folders))
        .collect()
}

#[component]
pub fn ContentTable() -> impl IntoView {
    let store = use_app_store();
    let dnd = use_context::<LibraryDnd>().expect("LibraryDnd should be provided");

    // Loading/error flag flips recompute to an equal list and stop here
    let rows = Memo::new(move |_| store.library().with(table_rows));
    let has_folders = Memo::new(move |_| store.library().with(|state| !state.table.folders.is_empty()));

    let zone_active = move || dnd.drop_target.get() == Some(DropTarget::Unassigned);
    let zone_row_class = move || {
        if zone_active() {
            "drop-padding-row drop-padding-row--drag-over"
        } else {
            "drop-padding-row"
        }
    };
    let zone_area_class = move || {
        if zone_active() {
            "drop-zone-area drop-zone-area--drag-over"
        } else {
            "drop-zone-area"
        }
    };

    view! {
        <div class="content-table-container">
            <div class="content-table-wrapper">
                <table class="content-table">
                    <thead>
                        <tr>
                            <th class="content-table__header content-table__header--first">"Título del recurso"</th>
                            <th class="content-table__header content-table__header--middle">"Disponibilidad"</th>
                            <th class="content-table__header content-table__header--middle">"Propietario"</th>
                            <th class="content-table__header content-table__header--last"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=RowModel::render_key
                            children=RowModel::into_view
                        />

                        <Show when=move || has_folders.get()>
                            <tr class=zone_row_class data-dnd-target=UNASSIGNED_ZONE_KEY>
                                <td colspan="4">
                                    <div class=zone_area_class>
                                        <div class="drop-zone-area__hint">
                                            "Arrastra aquí elementos de carpetas para desasignarlos"
                                        </div>
                                    </div>
                                </td>
                            </tr>
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>

        <DragPreview />
    }
}

/// Copy of the dragged row following the pointer. It ignores pointer events,
/// so hit-testing sees whatever is underneath it.
#[component]
fn DragPreview() -> impl IntoView {
    let store = use_app_store();
    let dnd = use_context::<LibraryDnd>().expect("LibraryDnd should be provided");

    let dragged = Memo::new(move |_| {
        let id = dnd.dragging_id.get()?;
        store
            .library()
            .with(|state| resolve_drag_start(&state.table, &id).cloned())
    });

    let style = move || match dnd.pointer.get() {
        Some(at) => format!("left: {}px; top: {}px;", at.x, at.y),
        None => "display: none;".to_string(),
    };

    move || {
        dragged.get().map(|content| {
            view! {
                <div class="drag-preview" style=style>
                    <table class="drag-preview__table">
                        <tbody>
                            <ContentRow content=content preview=true />
                        </tbody>
                    </table>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use library_core::{Availability, ContentKind, FolderId, TableState};

    fn item(id: &str, folder: Option<&str>) -> ContentItem {
        ContentItem {
            id: id.into(),
            title: format!("Item {}", id),
            kind: ContentKind::Document,
            availability: Availability::Students,
            owner: "Yo".into(),
            date: String::new(),
            folder_id: folder.map(FolderId::from),
        }
    }

    fn state() -> LibraryState {
        let mut f1 = Folder::new("f1", "Ciencias");
        f1.contents.push(item("c1", Some("f1")));
        LibraryState::with_table(TableState::new(vec![f1], vec![item("c2", None)]), false)
    }

    fn keys(state: &LibraryState) -> Vec<String> {
        table_rows(state).iter().map(RowModel::render_key).collect()
    }

    #[test]
    fn test_flag_changes_keep_rows() {
        let mut state = state();
        let before = table_rows(&state);
        state.begin();
        assert_eq!(table_rows(&state), before);
        state.is_loading = false;
        state.is_error = true;
        assert_eq!(table_rows(&state), before);
    }

    #[test]
    fn test_row_keys_follow_table_rows() {
        let state = state();
        let base: Vec<String> = table_rows(&state).into_iter().map(|row| row.key).collect();
        let expected: Vec<String> = state.rows().iter().map(TableRow::key).collect();
        assert_eq!(base, expected);
        assert_eq!(base, vec!["folder:f1", "separator", "content:c2"]);
    }

    #[test]
    fn test_render_key_changes_only_for_touched_rows() {
        let mut state = state();
        let collapsed = keys(&state);

        state.toggle_folder_expansion(&"f1".into());
        let expanded = keys(&state);
        assert_ne!(expanded[0], collapsed[0]);
        // Unassigned row untouched by the toggle
        assert_eq!(expanded.last(), collapsed.last());

        // Moving c2 into the folder rebuilds it as an in-folder row
        state.table.move_content(&"c2".into(), Some(&"f1".into()));
        let moved = keys(&state);
        assert!(!moved.contains(&expanded[expanded.len() - 1]));
        assert!(moved.iter().any(|k| k.starts_with("content:c2|")));

        state.table.rename_folder(&"f1".into(), "Historia");
        assert_ne!(keys(&state)[0], moved[0]);
    }
}
