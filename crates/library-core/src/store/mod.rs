//! Library State Store
//!
//! Owns the table, the expansion set and the loading/error flags. Every
//! operation runs optimistic-after-confirm: flags are raised, the backend is
//! awaited, and only a confirmed outcome touches the table. A failure sets the
//! error flag and leaves the table as it was.
//!
//! The reconciliation lives on [`LibraryState`] (`begin` / `settle`) so a UI
//! can keep the state inside its own reactive container and still share it.

#[cfg(test)]
mod tests;

use crate::backend::{AssignRequest, FolderRequest, LibraryBackend, UserId};
use crate::domain::{
    ContentId, ExpansionSet, Folder, FolderId, LibraryError, LibraryResult, TableRow, TableState,
};
use crate::transform::{folder_from_record, transform_backend_data};

/// A request against the library
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Fetch everything, optionally filtered
    Load { search: Option<String> },
    CreateFolder { name: String },
    RenameFolder { id: FolderId, name: String },
    DeleteFolder { id: FolderId, delete_contents: bool },
    /// `target: None` = unassigned
    MoveContent { content_id: ContentId, target: Option<FolderId> },
}

/// A backend-confirmed effect, ready to apply locally
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Loaded(TableState),
    FolderCreated(Folder),
    FolderRenamed { id: FolderId, name: String },
    FolderDeleted { id: FolderId, delete_contents: bool },
    ContentMoved { content_id: ContentId, target: Option<FolderId> },
}

impl Operation {
    /// Normalise user input. Names are trimmed; a blank name turns the
    /// operation into a no-op (`None`) before anything reaches the backend.
    pub fn prepare(self) -> Option<Self> {
        match self {
            Operation::CreateFolder { name } => {
                let name = name.trim();
                (!name.is_empty()).then(|| Operation::CreateFolder { name: name.to_string() })
            }
            Operation::RenameFolder { id, name } => {
                let name = name.trim();
                (!name.is_empty()).then(|| Operation::RenameFolder {
                    id,
                    name: name.to_string(),
                })
            }
            Operation::Load { search } => Some(Operation::Load {
                search: search.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            }),
            other => Some(other),
        }
    }

    /// Short description for log lines
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Load { .. } => "loading data",
            Operation::CreateFolder { .. } => "creating folder",
            Operation::RenameFolder { .. } => "renaming folder",
            Operation::DeleteFolder { .. } => "deleting folder",
            Operation::MoveContent { .. } => "moving content",
        }
    }

    /// Send the operation to the backend. A `success: false` answer is a
    /// rejection.
    pub async fn commit<B>(&self, backend: &B, user: &UserId) -> LibraryResult<Outcome>
    where
        B: LibraryBackend + ?Sized,
    {
        match self {
            Operation::Load { search } => {
                let items = backend.get_library_items(search.as_deref()).await?;
                Ok(Outcome::Loaded(transform_backend_data(&items)))
            }
            Operation::CreateFolder { name } => {
                let record = backend
                    .create_folder(user, FolderRequest { name: name.clone() })
                    .await?;
                Ok(Outcome::FolderCreated(folder_from_record(&record)))
            }
            Operation::RenameFolder { id, name } => {
                let ack = backend
                    .rename_folder(user, id, FolderRequest { name: name.clone() })
                    .await?;
                ensure_success(ack.success, self)?;
                Ok(Outcome::FolderRenamed {
                    id: id.clone(),
                    name: name.clone(),
                })
            }
            Operation::DeleteFolder { id, delete_contents } => {
                let ack = backend.delete_folder(user, id, *delete_contents).await?;
                ensure_success(ack.success, self)?;
                Ok(Outcome::FolderDeleted {
                    id: id.clone(),
                    delete_contents: *delete_contents,
                })
            }
            Operation::MoveContent { content_id, target } => {
                let ack = backend
                    .assign_content_to_folder(
                        user,
                        content_id,
                        AssignRequest {
                            folder_id: target.clone(),
                        },
                    )
                    .await?;
                ensure_success(ack.success, self)?;
                Ok(Outcome::ContentMoved {
                    content_id: content_id.clone(),
                    target: target.clone(),
                })
            }
        }
    }
}

fn ensure_success(success: bool, operation: &Operation) -> LibraryResult<()> {
    if success {
        Ok(())
    } else {
        Err(LibraryError::Rejected(operation.label().to_string()))
    }
}

/// Table model plus view flags
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryState {
    pub table: TableState,
    pub expanded: ExpansionSet,
    pub is_loading: bool,
    pub is_error: bool,
    /// Bumped on every change to `table`
    pub revision: u64,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryState {
    /// Empty state waiting for its first load
    pub fn new() -> Self {
        Self::with_table(TableState::default(), true)
    }

    pub fn with_table(table: TableState, is_loading: bool) -> Self {
        Self {
            table,
            expanded: ExpansionSet::new(),
            is_loading,
            is_error: false,
            revision: 0,
        }
    }

    /// An operation is in flight
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.is_error = false;
    }

    /// Settle an in-flight operation. Returns true when it succeeded.
    pub fn settle(&mut self, operation: &Operation, result: LibraryResult<Outcome>) -> bool {
        self.is_loading = false;
        match result {
            Ok(outcome) => {
                self.apply(outcome);
                log::info!("[LIBRARY] Done {}", operation.label());
                true
            }
            Err(err) => {
                self.is_error = true;
                log::error!("[LIBRARY] Error {}: {}", operation.label(), err);
                false
            }
        }
    }

    /// Apply a confirmed outcome. Returns true when the table changed.
    pub fn apply(&mut self, outcome: Outcome) -> bool {
        let changed = match outcome {
            Outcome::Loaded(table) => {
                self.table = table;
                true
            }
            Outcome::FolderCreated(folder) => {
                self.table.add_folder(folder);
                true
            }
            Outcome::FolderRenamed { id, name } => self.table.rename_folder(&id, &name),
            Outcome::FolderDeleted { id, delete_contents } => {
                self.expanded.remove(&id);
                self.table.remove_folder(&id, delete_contents).is_some()
            }
            Outcome::ContentMoved { content_id, target } => {
                let moved = self.table.move_content(&content_id, target.as_ref());
                if !moved {
                    log::debug!("[LIBRARY] {} could not be moved to {:?}", content_id, target);
                }
                moved
            }
        };
        if changed {
            self.revision += 1;
        }
        changed
    }

    /// Flip a folder's expanded state, returns the new state
    pub fn toggle_folder_expansion(&mut self, id: &FolderId) -> bool {
        self.expanded.toggle(id)
    }

    pub fn rows(&self) -> Vec<TableRow<'_>> {
        self.table.rows(&self.expanded)
    }

    pub fn has_content(&self) -> bool {
        self.table.has_content()
    }
}

/// Toolkit-independent store driving a backend directly
pub struct LibraryStore<B> {
    backend: B,
    user: UserId,
    state: LibraryState,
}

impl<B: LibraryBackend> LibraryStore<B> {
    pub fn new(backend: B, user: UserId) -> Self {
        Self {
            backend,
            user,
            state: LibraryState::new(),
        }
    }

    /// Start from an already loaded table
    pub fn with_table(backend: B, user: UserId, table: TableState) -> Self {
        Self {
            backend,
            user,
            state: LibraryState::with_table(table, false),
        }
    }

    pub fn state(&self) -> &LibraryState {
        &self.state
    }

    pub fn table(&self) -> &TableState {
        &self.state.table
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run one operation to completion. Returns true when it was confirmed
    /// and applied; false for failures and input-level no-ops.
    pub async fn run(&mut self, operation: Operation) -> bool {
        let Some(operation) = operation.prepare() else {
            log::debug!("[LIBRARY] Ignoring blank input");
            return false;
        };
        self.state.begin();
        let result = operation.commit(&self.backend, &self.user).await;
        self.state.settle(&operation, result)
    }

    pub async fn load(&mut self, search: Option<&str>) -> bool {
        self.run(Operation::Load {
            search: search.map(str::to_string),
        })
        .await
    }

    pub async fn create_folder(&mut self, name: &str) -> bool {
        self.run(Operation::CreateFolder { name: name.to_string() }).await
    }

    pub async fn rename_folder(&mut self, id: &FolderId, new_name: &str) -> bool {
        self.run(Operation::RenameFolder {
            id: id.clone(),
            name: new_name.to_string(),
        })
        .await
    }

    pub async fn delete_folder(&mut self, id: &FolderId, delete_contents: bool) -> bool {
        self.run(Operation::DeleteFolder {
            id: id.clone(),
            delete_contents,
        })
        .await
    }

    pub async fn move_content(&mut self, content_id: &ContentId, target: Option<&FolderId>) -> bool {
        self.run(Operation::MoveContent {
            content_id: content_id.clone(),
            target: target.cloned(),
        })
        .await
    }

    pub fn toggle_folder_expansion(&mut self, id: &FolderId) -> bool {
        self.state.toggle_folder_expansion(id)
    }
}
