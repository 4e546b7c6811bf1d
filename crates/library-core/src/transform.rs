//! Backend Data Transform
//!
//! Maps backend records into the two-bucket table shape. Never fails:
//! missing fields fall back to defaults.

use chrono::DateTime;

use crate::backend::{FileRecord, FolderRecord, LibraryItem};
use crate::domain::{Availability, ContentId, ContentItem, ContentKind, Folder, FolderId, TableState};

pub const FALLBACK_TITLE: &str = "Sin título";
pub const FALLBACK_OWNER: &str = "Desconocido";

/// Convert a backend listing into table state.
///
/// Folder records keep their nested files (with `folder_id` set), top-level
/// files become unassigned, unknown records are dropped.
pub fn transform_backend_data(items: &[LibraryItem]) -> TableState {
    let mut table = TableState::default();
    for item in items {
        match item {
            LibraryItem::Folder(record) => table.folders.push(folder_from_record(record)),
            LibraryItem::File(record) => table.unassigned_contents.push(content_from_record(record, None)),
            LibraryItem::Unknown => {}
        }
    }
    table
}

pub fn folder_from_record(record: &FolderRecord) -> Folder {
    let id = FolderId::new(record.id.clone());
    let contents = record
        .items
        .iter()
        .map(|file| content_from_record(file, Some(&id)))
        .collect();
    Folder {
        id,
        name: record.name.clone(),
        contents,
    }
}

pub fn content_from_record(record: &FileRecord, folder_id: Option<&FolderId>) -> ContentItem {
    let title = record
        .name()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_TITLE);
    let owner = record
        .owner_name()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_OWNER);

    ContentItem {
        id: ContentId::new(record.id.clone()),
        title: title.to_string(),
        kind: record
            .content
            .kind
            .as_deref()
            .map(ContentKind::from_str)
            .unwrap_or_default(),
        availability: Availability::from_teacher_only(record.teacher_only()),
        owner: owner.to_string(),
        date: record.created_at.as_deref().map(format_date).unwrap_or_default(),
        folder_id: folder_id.cloned(),
    }
}

/// Render an RFC 3339 timestamp as `dd/mm/yyyy`; anything else passes through
pub fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(ts) => ts.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{seed_items, ContentRecord, OwnerRecord};

    #[test]
    fn test_seed_transform() {
        let table = transform_backend_data(&seed_items());

        assert_eq!(table.folders.len(), 2);
        assert_eq!(table.unassigned_contents.len(), 6);
        table.verify().unwrap();

        let first = &table.unassigned_contents[0];
        assert_eq!(first.title, "Ficha educativa emociones");
        assert_eq!(first.availability, Availability::Teacher);
        assert_eq!(first.owner, "Editorial");
        assert_eq!(first.date, "08/01/2025");
        assert!(first.is_unassigned());
    }

    #[test]
    fn test_nested_items_belong_to_folder() {
        let items = vec![LibraryItem::Folder(FolderRecord {
            id: "f1".into(),
            name: "Docs".into(),
            created_by: None,
            items: vec![FileRecord {
                id: "c1".into(),
                ..Default::default()
            }],
        })];
        let table = transform_backend_data(&items);

        let folder = &table.folders[0];
        assert_eq!(folder.contents[0].folder_id, Some(FolderId::new("f1")));
        table.verify().unwrap();
    }

    #[test]
    fn test_malformed_record_gets_defaults() {
        let record = FileRecord {
            id: "c9".into(),
            created_by: Some(OwnerRecord { name: Some("  ".into()) }),
            created_at: Some("yesterday".into()),
            content: ContentRecord::default(),
        };
        let item = content_from_record(&record, None);

        assert_eq!(item.title, FALLBACK_TITLE);
        assert_eq!(item.owner, FALLBACK_OWNER);
        assert_eq!(item.kind, ContentKind::Document);
        assert_eq!(item.availability, Availability::Students);
        assert_eq!(item.date, "yesterday");
    }

    #[test]
    fn test_unknown_records_are_skipped() {
        let table = transform_backend_data(&[LibraryItem::Unknown]);
        assert!(!table.has_content());
    }
}
