//! Table State
//!
//! The two-bucket model: folders (each owning its contents) and the
//! unassigned contents. Every item lives in exactly one bucket and its
//! `folder_id` names that bucket.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::content::{ContentId, ContentItem};
use super::error::{LibraryError, LibraryResult};
use super::expansion::ExpansionSet;
use super::folder::{Folder, FolderId};

/// Which bucket currently holds an item
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    Unassigned,
    Folder(FolderId),
}

impl Location {
    pub fn from_folder_id(folder_id: Option<FolderId>) -> Self {
        match folder_id {
            Some(id) => Location::Folder(id),
            None => Location::Unassigned,
        }
    }

    pub fn folder_id(&self) -> Option<&FolderId> {
        match self {
            Location::Folder(id) => Some(id),
            Location::Unassigned => None,
        }
    }
}

/// One rendered row of the content table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableRow<'a> {
    Folder {
        folder: &'a Folder,
        expanded: bool,
    },
    Content {
        content: &'a ContentItem,
        parent_folder_id: Option<&'a FolderId>,
    },
    /// Divider between the folder section and the unassigned section
    Separator,
}

impl TableRow<'_> {
    /// Stable key for keyed list rendering
    pub fn key(&self) -> String {
        match self {
            TableRow::Folder { folder, .. } => format!("folder:{}", folder.id),
            TableRow::Content { content, .. } => format!("content:{}", content.id),
            TableRow::Separator => "separator".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableState {
    pub folders: Vec<Folder>,
    pub unassigned_contents: Vec<ContentItem>,
}

impl TableState {
    pub fn new(folders: Vec<Folder>, unassigned_contents: Vec<ContentItem>) -> Self {
        Self {
            folders,
            unassigned_contents,
        }
    }

    pub fn folder(&self, id: &FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| &f.id == id)
    }

    /// Find an item, scanning the unassigned bucket first and then each folder
    pub fn find_content(&self, id: &ContentId) -> Option<(&ContentItem, Location)> {
        if let Some(content) = self.unassigned_contents.iter().find(|c| &c.id == id) {
            return Some((content, Location::Unassigned));
        }
        self.folders.iter().find_map(|folder| {
            folder
                .contents
                .iter()
                .find(|c| &c.id == id)
                .map(|c| (c, Location::Folder(folder.id.clone())))
        })
    }

    pub fn locate(&self, id: &ContentId) -> Option<Location> {
        self.find_content(id).map(|(_, location)| location)
    }

    /// Total items across both buckets
    pub fn content_count(&self) -> usize {
        self.unassigned_contents.len() + self.folders.iter().map(Folder::len).sum::<usize>()
    }

    pub fn has_content(&self) -> bool {
        !self.folders.is_empty() || !self.unassigned_contents.is_empty()
    }

    /// Append a newly created folder
    pub fn add_folder(&mut self, folder: Folder) {
        self.folders.push(folder);
    }

    /// Returns false when the folder does not exist
    pub fn rename_folder(&mut self, id: &FolderId, name: &str) -> bool {
        match self.folders.iter_mut().find(|f| &f.id == id) {
            Some(folder) => {
                folder.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove a folder. Its contents are discarded when `delete_contents` is
    /// set, otherwise appended to the unassigned bucket with `folder_id` reset.
    ///
    /// Returns the removed folder as it was before removal.
    pub fn remove_folder(&mut self, id: &FolderId, delete_contents: bool) -> Option<Folder> {
        let index = self.folders.iter().position(|f| &f.id == id)?;
        let folder = self.folders.remove(index);
        if !delete_contents {
            self.unassigned_contents
                .extend(folder.contents.iter().cloned().map(|mut content| {
                    content.folder_id = None;
                    content
                }));
        }
        Some(folder)
    }

    /// Move an item to the end of the target bucket (`None` = unassigned).
    ///
    /// Returns false, leaving the table untouched, when the item or the target
    /// folder does not exist.
    pub fn move_content(&mut self, id: &ContentId, target: Option<&FolderId>) -> bool {
        if let Some(folder_id) = target {
            if self.folder(folder_id).is_none() {
                return false;
            }
        }
        let Some(mut content) = self.take_content(id) else {
            return false;
        };
        content.folder_id = target.cloned();
        match target {
            None => self.unassigned_contents.push(content),
            Some(folder_id) => {
                if let Some(folder) = self.folders.iter_mut().find(|f| &f.id == folder_id) {
                    folder.contents.push(content);
                }
            }
        }
        true
    }

    fn take_content(&mut self, id: &ContentId) -> Option<ContentItem> {
        if let Some(index) = self.unassigned_contents.iter().position(|c| &c.id == id) {
            return Some(self.unassigned_contents.remove(index));
        }
        self.folders.iter_mut().find_map(|folder| {
            folder
                .contents
                .iter()
                .position(|c| &c.id == id)
                .map(|index| folder.contents.remove(index))
        })
    }

    /// Flatten into display rows: each folder followed by its contents when
    /// expanded, a separator when both sections are populated, then the
    /// unassigned contents.
    pub fn rows(&self, expanded: &ExpansionSet) -> Vec<TableRow<'_>> {
        let mut rows = Vec::with_capacity(self.folders.len() + self.unassigned_contents.len() + 1);

        for folder in &self.folders {
            let is_expanded = expanded.is_expanded(&folder.id);
            rows.push(TableRow::Folder {
                folder,
                expanded: is_expanded,
            });
            if is_expanded {
                rows.extend(folder.contents.iter().map(|content| TableRow::Content {
                    content,
                    parent_folder_id: Some(&folder.id),
                }));
            }
        }

        if !self.folders.is_empty() && !self.unassigned_contents.is_empty() {
            rows.push(TableRow::Separator);
        }

        rows.extend(self.unassigned_contents.iter().map(|content| TableRow::Content {
            content,
            parent_folder_id: None,
        }));

        rows
    }

    /// Check the partition invariants: no duplicate item or folder ids, and
    /// every item's `folder_id` matches the bucket holding it.
    pub fn verify(&self) -> LibraryResult<()> {
        let mut seen_folders = HashSet::new();
        let mut seen_contents = HashSet::new();

        for content in &self.unassigned_contents {
            if content.folder_id.is_some() {
                return Err(LibraryError::InvalidInput(format!(
                    "unassigned item {} points at a folder",
                    content.id
                )));
            }
            if !seen_contents.insert(&content.id) {
                return Err(LibraryError::InvalidInput(format!("item {} is duplicated", content.id)));
            }
        }

        for folder in &self.folders {
            if !seen_folders.insert(&folder.id) {
                return Err(LibraryError::InvalidInput(format!("folder {} is duplicated", folder.id)));
            }
            for content in &folder.contents {
                if content.folder_id.as_ref() != Some(&folder.id) {
                    return Err(LibraryError::InvalidInput(format!(
                        "item {} sits in folder {} but points elsewhere",
                        content.id, folder.id
                    )));
                }
                if !seen_contents.insert(&content.id) {
                    return Err(LibraryError::InvalidInput(format!("item {} is duplicated", content.id)));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, folder: Option<&str>) -> ContentItem {
        let mut item = ContentItem::new(id, format!("Item {}", id));
        item.folder_id = folder.map(FolderId::from);
        item
    }

    fn folder(id: &str, contents: &[&str]) -> Folder {
        let mut folder = Folder::new(id, format!("Folder {}", id));
        folder.contents = contents.iter().map(|c| item(c, Some(id))).collect();
        folder
    }

    fn sample() -> TableState {
        TableState::new(
            vec![folder("f1", &["a", "b"]), folder("f2", &[])],
            vec![item("c", None), item("d", None)],
        )
    }

    #[test]
    fn test_find_content_scans_both_buckets() {
        let table = sample();
        assert_eq!(table.locate(&"c".into()), Some(Location::Unassigned));
        assert_eq!(table.locate(&"b".into()), Some(Location::Folder("f1".into())));
        assert_eq!(table.locate(&"zzz".into()), None);
    }

    #[test]
    fn test_move_between_folders() {
        let mut table = sample();
        assert!(table.move_content(&"a".into(), Some(&"f2".into())));

        assert_eq!(table.folder(&"f1".into()).unwrap().len(), 1);
        let f2 = table.folder(&"f2".into()).unwrap();
        assert_eq!(f2.len(), 1);
        assert_eq!(f2.contents[0].folder_id, Some("f2".into()));
        table.verify().unwrap();
    }

    #[test]
    fn test_move_appends_to_end() {
        let mut table = sample();
        table.move_content(&"c".into(), Some(&"f1".into()));
        let ids: Vec<_> = table.folder(&"f1".into()).unwrap().contents.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_to_missing_folder_keeps_item() {
        let mut table = sample();
        let before = table.clone();
        assert!(!table.move_content(&"c".into(), Some(&"gone".into())));
        assert_eq!(table, before);
    }

    #[test]
    fn test_remove_folder_reparents_contents() {
        let mut table = sample();
        let removed = table.remove_folder(&"f1".into(), false).unwrap();

        assert_eq!(removed.len(), 2);
        assert_eq!(table.folders.len(), 1);
        assert_eq!(table.unassigned_contents.len(), 4);
        assert!(table.unassigned_contents.iter().all(ContentItem::is_unassigned));
        assert_eq!(table.content_count(), 4);
        table.verify().unwrap();
    }

    #[test]
    fn test_remove_folder_cascades() {
        let mut table = sample();
        table.remove_folder(&"f1".into(), true).unwrap();
        assert_eq!(table.unassigned_contents.len(), 2);
        assert_eq!(table.content_count(), 2);
    }

    #[test]
    fn test_rows_follow_expansion() {
        let table = sample();
        let mut expanded = ExpansionSet::new();

        let keys: Vec<_> = table.rows(&expanded).iter().map(TableRow::key).collect();
        assert_eq!(
            keys,
            vec!["folder:f1", "folder:f2", "separator", "content:c", "content:d"]
        );

        expanded.toggle(&"f1".into());
        let rows = table.rows(&expanded);
        assert_eq!(rows.len(), 7);
        assert!(matches!(
            rows[1],
            TableRow::Content { parent_folder_id: Some(id), .. } if id.as_str() == "f1"
        ));
    }

    #[test]
    fn test_rows_without_folders_have_no_separator() {
        let table = TableState::new(vec![], vec![item("c", None)]);
        let rows = table.rows(&ExpansionSet::new());
        assert_eq!(rows.len(), 1);
        assert!(table.has_content());
        assert!(!TableState::default().has_content());
    }

    #[test]
    fn test_verify_detects_duplicates() {
        let mut table = sample();
        table.unassigned_contents.push(item("a", None));
        assert!(table.verify().is_err());
    }
}
