//! Backend Layer
//!
//! The collaborator contract consumed by the store, the record shapes it
//! speaks, and a delay-based mock that persists nothing.

mod mock;
mod records;
mod traits;

pub use mock::{seed_items, MockBackend, MOCK_DELAY};
pub use records::{filter_items, AccessRecord, ContentRecord, FileRecord, FolderRecord, LibraryItem, OwnerRecord};
pub use traits::{Ack, AssignRequest, DeleteAck, FolderRequest, LibraryBackend, UserId};
