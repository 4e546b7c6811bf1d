//! Backend Records
//!
//! Wire shapes returned by `get_library_items`. Every field is optional on
//! the way in; the transform fills in defaults.

use serde::{Deserialize, Serialize};

/// A top-level library entry, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LibraryItem {
    Folder(FolderRecord),
    File(FileRecord),
    /// Any tag this client does not understand
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolderRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<OwnerRecord>,
    #[serde(default)]
    pub items: Vec<FileRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<OwnerRecord>,
    /// RFC 3339 timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub content: ContentRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnerRecord {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_teachers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<AccessRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessRecord {
    #[serde(default)]
    pub only_teachers: Option<bool>,
}

impl FileRecord {
    pub fn name(&self) -> Option<&str> {
        self.content.name.as_deref()
    }

    /// Teacher-only flag, top-level boolean first, nested `access` second
    pub fn teacher_only(&self) -> bool {
        self.content
            .only_teachers
            .or_else(|| self.content.access.as_ref().and_then(|a| a.only_teachers))
            .unwrap_or(false)
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.created_by.as_ref().and_then(|o| o.name.as_deref())
    }

    fn matches(&self, needle: &str) -> bool {
        self.name().is_some_and(|name| name.to_lowercase().contains(needle))
    }
}

/// Case-insensitive substring filter over folder names, nested item names and
/// top-level file names.
///
/// A folder matching by name keeps all of its items; a folder matching only
/// through nested items keeps just those. A blank search returns everything.
pub fn filter_items(items: Vec<LibraryItem>, search: Option<&str>) -> Vec<LibraryItem> {
    let needle = match search.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_lowercase(),
        _ => return items,
    };

    items
        .into_iter()
        .filter_map(|item| match item {
            LibraryItem::Folder(mut folder) => {
                if folder.name.to_lowercase().contains(&needle) {
                    return Some(LibraryItem::Folder(folder));
                }
                folder.items.retain(|file| file.matches(&needle));
                (!folder.items.is_empty()).then_some(LibraryItem::Folder(folder))
            }
            LibraryItem::File(file) => file.matches(&needle).then_some(LibraryItem::File(file)),
            LibraryItem::Unknown => None,
        })
        .collect()
}
