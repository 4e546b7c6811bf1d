//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Library operations go through [`LibraryActions`], which wraps the shared
//! `LibraryState::begin` / `settle` reconciliation around the backend call.

use std::sync::Arc;

use leptos::prelude::*;
use library_core::backend::{LibraryBackend, UserId};
use library_core::{ContentId, FolderId, LibraryState, Operation};
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Table, expansion set and loading/error flags
    pub library: LibraryState,
    /// Current search box text
    pub search: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

pub type SharedBackend = Arc<dyn LibraryBackend + Send + Sync>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

pub fn use_library_actions() -> LibraryActions {
    expect_context::<LibraryActions>()
}

/// Library operations bound to the store and the backend
#[derive(Clone, Copy)]
pub struct LibraryActions {
    store: AppStore,
    backend: StoredValue<SharedBackend>,
    user: StoredValue<UserId>,
}

impl LibraryActions {
    pub fn new(store: AppStore, backend: SharedBackend, user: UserId) -> Self {
        Self {
            store,
            backend: StoredValue::new(backend),
            user: StoredValue::new(user),
        }
    }

    /// Run one operation to completion; true when confirmed and applied
    async fn run(self, operation: Operation) -> bool {
        let Some(operation) = operation.prepare() else {
            log::debug!("[LIBRARY] Ignoring blank input");
            return false;
        };
        self.store.library().write().begin();

        let backend = self.backend.get_value();
        let user = self.user.get_value();
        let result = operation.commit(backend.as_ref(), &user).await;

        self.store.library().write().settle(&operation, result)
    }

    /// Fetch the library, optionally filtered
    pub async fn load(self, search: Option<String>) -> bool {
        self.run(Operation::Load { search }).await
    }

    /// Reload with whatever is in the search box
    pub async fn reload(self) -> bool {
        let search = self.store.search().get_untracked();
        self.load(Some(search)).await
    }

    pub async fn create_folder(self, name: String) -> bool {
        self.run(Operation::CreateFolder { name }).await
    }

    pub async fn rename_folder(self, id: FolderId, name: String) -> bool {
        self.run(Operation::RenameFolder { id, name }).await
    }

    pub async fn delete_folder(self, id: FolderId, delete_contents: bool) -> bool {
        self.run(Operation::DeleteFolder { id, delete_contents }).await
    }

    pub async fn move_content(self, content_id: ContentId, target: Option<FolderId>) -> bool {
        self.run(Operation::MoveContent { content_id, target }).await
    }

    pub fn toggle_folder_expansion(self, id: &FolderId) {
        let expanded = self.store.library().write().toggle_folder_expansion(id);
        log::debug!("[LIBRARY] Folder {} expanded: {}", id, expanded);
    }
}
