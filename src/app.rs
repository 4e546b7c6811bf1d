//! Library Organizer App
//!
//! Root component: builds the store, the backend and the drag state, binds the
//! document-level drag handlers once, and lays out header, table and modals.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{bind_global_handlers, create_dnd_signals, Dropped};
use library_core::backend::MockBackend;
use library_core::dnd::{resolve_drop, DropTarget};
use library_core::{ContentId, LibraryConfig};
use reactive_stores::Store;

use crate::components::{CreateFolderModal, DeleteFolderModal, Header, LibraryView, RenameFolderModal};
use crate::config;
use crate::context::{AppContext, LibraryDnd, ModalKind};
use crate::store::{AppState, AppStateStoreFields, LibraryActions, SharedBackend};

#[component]
pub fn App(config: LibraryConfig) -> impl IntoView {
    let store = Store::new(AppState::new());
    let backend: SharedBackend = Arc::new(MockBackend::new(config.mock_delay()));
    let actions = LibraryActions::new(store, backend, config.user());
    let ctx = AppContext::new(config.folder_name_max_len);
    let dnd: LibraryDnd = create_dnd_signals(config::activation(&config.drag));

    provide_context(store);
    provide_context(actions);
    provide_context(ctx);
    provide_context(dnd);

    // Drops are resolved against the table as it is when the pointer lifts
    bind_global_handlers(
        dnd,
        |key: &str| DropTarget::from_key(key),
        move || {
            store.library().with_untracked(|state| {
                let mut targets: Vec<DropTarget> = state
                    .table
                    .folders
                    .iter()
                    .map(|folder| DropTarget::Folder(folder.id.clone()))
                    .collect();
                if !targets.is_empty() {
                    targets.push(DropTarget::Unassigned);
                }
                targets
            })
        },
        move |dropped: Dropped<ContentId, DropTarget>| {
            let request = store
                .library()
                .with_untracked(|state| resolve_drop(&state.table, &dropped.id, dropped.target.as_ref()));
            match request {
                Some(request) => {
                    log::info!("[DND] Drop {} on {:?}", request.content_id, dropped.target);
                    spawn_local(async move {
                        actions.move_content(request.content_id, request.target).await;
                    });
                }
                None => log::debug!("[DND] Drop of {} cancelled", dropped.id),
            }
        },
    );

    // Initial load
    Effect::new(move |_| {
        log::info!("[APP] Loading library");
        spawn_local(async move {
            actions.load(None).await;
        });
    });

    view! {
        <div class="library-page">
            <Header />

            <main class="library-main">
                <LibraryView />
            </main>

            <Show when=move || ctx.is_open(ModalKind::CreateFolder)>
                <CreateFolderModal />
            </Show>
            <Show when=move || ctx.is_open(ModalKind::RenameFolder)>
                <RenameFolderModal />
            </Show>
            <Show when=move || ctx.is_open(ModalKind::DeleteFolder)>
                <DeleteFolderModal />
            </Show>
        </div>
    }
}
