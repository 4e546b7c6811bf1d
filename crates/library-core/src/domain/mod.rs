//! Domain Layer
//!
//! Entities and business rules, independent of any UI toolkit.

mod content;
mod error;
mod expansion;
mod folder;
mod table;

pub use content::{Availability, ContentId, ContentItem, ContentKind};
pub use error::{LibraryError, LibraryResult};
pub use expansion::ExpansionSet;
pub use folder::{validate_folder_name, Folder, FolderId, DEFAULT_FOLDER_NAME_MAX_LEN};
pub use table::{Location, TableRow, TableState};
