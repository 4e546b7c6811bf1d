//! Library Organizer Core
//!
//! Layered like the app's backend:
//! - domain: content items, folders, the two-bucket table and its invariants
//! - backend: the collaborator contract and the delay-based mock
//! - transform: backend records -> table state
//! - store: loading/error flags and the optimistic-after-confirm operations
//! - dnd: drop-target recognition for content drags

pub mod backend;
pub mod config;
pub mod dnd;
pub mod domain;
pub mod store;
pub mod transform;

pub use config::{DragSettings, LibraryConfig};
pub use domain::{
    Availability, ContentId, ContentItem, ContentKind, ExpansionSet, Folder, FolderId,
    LibraryError, LibraryResult, Location, TableRow, TableState,
};
pub use store::{LibraryState, LibraryStore, Operation, Outcome};
