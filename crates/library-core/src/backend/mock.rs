//! Mock Backend
//!
//! Simulates network latency and always succeeds. Nothing is persisted:
//! `get_library_items` always answers from the seed set.

use async_trait::async_trait;
use std::time::Duration;

use super::records::{
    filter_items, AccessRecord, ContentRecord, FileRecord, FolderRecord, LibraryItem, OwnerRecord,
};
use super::traits::{Ack, AssignRequest, DeleteAck, FolderRequest, LibraryBackend, UserId};
use crate::domain::{ContentId, FolderId, LibraryResult};

/// Simulated network delay
pub const MOCK_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct MockBackend {
    delay: Duration,
    items: Vec<LibraryItem>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(MOCK_DELAY)
    }
}

impl MockBackend {
    /// Mock answering from the built-in seed library
    pub fn new(delay: Duration) -> Self {
        Self::with_items(delay, seed_items())
    }

    pub fn with_items(delay: Duration, items: Vec<LibraryItem>) -> Self {
        Self { delay, items }
    }

    /// No artificial latency
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    async fn wait(&self) {
        if self.delay.is_zero() {
            return;
        }
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(self.delay).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(self.delay).await;
    }
}

#[async_trait(?Send)]
impl LibraryBackend for MockBackend {
    async fn create_folder(&self, user_id: &UserId, request: FolderRequest) -> LibraryResult<FolderRecord> {
        self.wait().await;
        let folder = FolderRecord {
            id: uuid::Uuid::new_v4().to_string(),
            name: request.name,
            created_by: Some(OwnerRecord {
                name: Some(user_id.to_string()),
            }),
            items: Vec::new(),
        };
        log::info!("[MOCK] Created folder {} ({:?}) for {}", folder.id, folder.name, user_id);
        Ok(folder)
    }

    async fn rename_folder(
        &self,
        user_id: &UserId,
        folder_id: &FolderId,
        request: FolderRequest,
    ) -> LibraryResult<Ack> {
        self.wait().await;
        log::info!("[MOCK] Renaming folder {} to {:?} for {}", folder_id, request.name, user_id);
        Ok(Ack { success: true })
    }

    async fn delete_folder(
        &self,
        user_id: &UserId,
        folder_id: &FolderId,
        delete_contents: bool,
    ) -> LibraryResult<DeleteAck> {
        self.wait().await;
        log::info!(
            "[MOCK] Deleting folder {} for {}, delete_contents: {}",
            folder_id,
            user_id,
            delete_contents
        );
        Ok(DeleteAck {
            success: true,
            delete_contents,
        })
    }

    async fn get_library_items(&self, search: Option<&str>) -> LibraryResult<Vec<LibraryItem>> {
        self.wait().await;
        let items = filter_items(self.items.clone(), search);
        log::debug!("[MOCK] Listing {} library items (search: {:?})", items.len(), search);
        Ok(items)
    }

    async fn assign_content_to_folder(
        &self,
        user_id: &UserId,
        content_id: &ContentId,
        request: AssignRequest,
    ) -> LibraryResult<Ack> {
        self.wait().await;
        log::info!(
            "[MOCK] Moving content {} to folder {:?} for {}",
            content_id,
            request.folder_id.as_ref().map(FolderId::as_str),
            user_id
        );
        Ok(Ack { success: true })
    }
}

fn seed_file(id: &str, name: &str, kind: &str, teacher_only: bool, owner: &str, created_at: &str) -> FileRecord {
    FileRecord {
        id: id.to_string(),
        created_by: Some(OwnerRecord {
            name: Some(owner.to_string()),
        }),
        created_at: Some(created_at.to_string()),
        content: ContentRecord {
            name: Some(name.to_string()),
            kind: Some(kind.to_string()),
            only_teachers: None,
            access: Some(AccessRecord {
                only_teachers: Some(teacher_only),
            }),
        },
    }
}

/// Initial library: two empty folders and six unassigned resources
pub fn seed_items() -> Vec<LibraryItem> {
    let folder = |id: &str, name: &str| {
        LibraryItem::Folder(FolderRecord {
            id: id.to_string(),
            name: name.to_string(),
            created_by: None,
            items: Vec::new(),
        })
    };
    const JAN: &str = "2025-01-08T09:00:00Z";

    vec![
        folder("folder-1", "Docs importantes"),
        folder("folder-2", "Materiales de ciencias"),
        LibraryItem::File(seed_file("content-1", "Ficha educativa emociones", "document", true, "Editorial", JAN)),
        LibraryItem::File(seed_file(
            "content-2",
            "Cambios físicos y químicos de la materia",
            "science",
            true,
            "Editorial",
            JAN,
        )),
        LibraryItem::File(seed_file("content-3", "Diario de una planta", "document", false, "Editorial", JAN)),
        LibraryItem::File(seed_file("content-4", "Mapamundi en blanco", "map", true, "Editorial", JAN)),
        LibraryItem::File(seed_file(
            "content-5",
            "Autorización escolar excursión",
            "document",
            false,
            "Admin. Escuela",
            JAN,
        )),
        LibraryItem::File(seed_file(
            "content-6",
            "Video preparación excursión",
            "video",
            false,
            "Yo",
            "2025-02-10T09:00:00Z",
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_folder_mints_unique_ids() {
        let backend = MockBackend::instant();
        let user = UserId::new("mock-user-123");

        let a = backend.create_folder(&user, FolderRequest { name: "A".into() }).await.unwrap();
        let b = backend.create_folder(&user, FolderRequest { name: "B".into() }).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "A");
        assert!(a.items.is_empty());
    }

    #[tokio::test]
    async fn test_delete_echoes_strategy() {
        let backend = MockBackend::instant();
        let ack = backend
            .delete_folder(&UserId::new("u"), &FolderId::new("folder-1"), true)
            .await
            .unwrap();
        assert_eq!(
            ack,
            DeleteAck {
                success: true,
                delete_contents: true
            }
        );
    }

    #[tokio::test]
    async fn test_listing_is_not_persisted() {
        let backend = MockBackend::instant();
        let user = UserId::new("u");
        backend.create_folder(&user, FolderRequest { name: "New".into() }).await.unwrap();

        let items = backend.get_library_items(None).await.unwrap();
        assert_eq!(items.len(), 8);
    }

    #[tokio::test]
    async fn test_delay_is_applied() {
        let backend = MockBackend::new(Duration::from_millis(20));
        let started = std::time::Instant::now();
        backend.get_library_items(Some("mapa")).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
