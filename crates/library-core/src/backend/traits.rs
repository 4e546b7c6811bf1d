//! Backend Contract
//!
//! Abstract interface to the library service. The store only ever talks to
//! this trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::records::{FolderRecord, LibraryItem};
use crate::domain::{ContentId, FolderId, LibraryResult};

/// Acting user, sent along with every mutation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    /// Destination folder, `None` = unassigned
    pub folder_id: Option<FolderId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub success: bool,
    pub delete_contents: bool,
}

/// Library service operations
///
/// Futures are not required to be `Send`: the browser implementation awaits
/// JS timers on a single thread.
#[async_trait(?Send)]
pub trait LibraryBackend {
    async fn create_folder(&self, user_id: &UserId, request: FolderRequest) -> LibraryResult<FolderRecord>;

    async fn rename_folder(
        &self,
        user_id: &UserId,
        folder_id: &FolderId,
        request: FolderRequest,
    ) -> LibraryResult<Ack>;

    async fn delete_folder(
        &self,
        user_id: &UserId,
        folder_id: &FolderId,
        delete_contents: bool,
    ) -> LibraryResult<DeleteAck>;

    /// List folders and files, optionally filtered by a case-insensitive search
    async fn get_library_items(&self, search: Option<&str>) -> LibraryResult<Vec<LibraryItem>>;

    async fn assign_content_to_folder(
        &self,
        user_id: &UserId,
        content_id: &ContentId,
        request: AssignRequest,
    ) -> LibraryResult<Ack>;
}
