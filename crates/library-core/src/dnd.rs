//! Drop Resolution
//!
//! Maps a finished content drag onto a move request. Only folder rows and the
//! single unassigned zone accept drops; everything else cancels.

use crate::domain::{ContentId, ContentItem, FolderId, Location, TableState};

/// DOM key of the unassigned drop zone
pub const UNASSIGNED_ZONE_KEY: &str = "unassigned-zone";
const FOLDER_KEY_PREFIX: &str = "folder:";

/// Registered drop targets
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropTarget {
    Folder(FolderId),
    Unassigned,
}

impl DropTarget {
    /// Key written to `data-dnd-target`
    pub fn key(&self) -> String {
        match self {
            DropTarget::Folder(id) => format!("{}{}", FOLDER_KEY_PREFIX, id),
            DropTarget::Unassigned => UNASSIGNED_ZONE_KEY.to_string(),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        if key == UNASSIGNED_ZONE_KEY {
            return Some(DropTarget::Unassigned);
        }
        key.strip_prefix(FOLDER_KEY_PREFIX)
            .filter(|id| !id.is_empty())
            .map(|id| DropTarget::Folder(FolderId::new(id)))
    }
}

/// A move the hook should perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub content_id: ContentId,
    /// `None` = unassigned
    pub target: Option<FolderId>,
}

/// Identify the dragged item across both buckets
pub fn resolve_drag_start<'a>(table: &'a TableState, id: &ContentId) -> Option<&'a ContentItem> {
    table.find_content(id).map(|(content, _)| content)
}

/// Decide what a drop does.
///
/// Returns `None` (cancel) when there is no target, the dragged item is gone,
/// the folder no longer exists, or the item already sits in the target bucket.
pub fn resolve_drop(table: &TableState, dragged: &ContentId, target: Option<&DropTarget>) -> Option<MoveRequest> {
    let target = target?;
    let (_, current) = table.find_content(dragged)?;

    let destination = match target {
        DropTarget::Folder(folder_id) => {
            table.folder(folder_id)?;
            Location::Folder(folder_id.clone())
        }
        DropTarget::Unassigned => Location::Unassigned,
    };

    if destination == current {
        log::debug!("[DND] {} already in {:?}, ignoring drop", dragged, current);
        return None;
    }

    Some(MoveRequest {
        content_id: dragged.clone(),
        target: destination.folder_id().cloned(),
    })
}
