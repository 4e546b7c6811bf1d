//! Folder Entity
//!
//! A flat, user-created container. Folders own their contents by composition
//! and never nest.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::content::ContentItem;
use super::error::{LibraryError, LibraryResult};

/// Length ceiling applied by the folder forms
pub const DEFAULT_FOLDER_NAME_MAX_LEN: usize = 50;

/// Folder identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(pub String);

impl FolderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FolderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub contents: Vec<ContentItem>,
}

impl Folder {
    /// Create an empty folder
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: FolderId::new(id),
            name: name.into(),
            contents: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn contains(&self, content_id: &super::ContentId) -> bool {
        self.contents.iter().any(|c| &c.id == content_id)
    }
}

/// Trim and check a folder name typed by the user.
///
/// Returns the trimmed name, or `InvalidInput` when it is blank or longer
/// than `max_len` characters.
pub fn validate_folder_name(name: &str, max_len: usize) -> LibraryResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(LibraryError::InvalidInput("folder name is empty".to_string()));
    }
    let len = trimmed.chars().count();
    if len > max_len {
        return Err(LibraryError::InvalidInput(format!(
            "folder name has {} characters, the limit is {}",
            len, max_len
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims() {
        assert_eq!(
            validate_folder_name("  Ciencias  ", DEFAULT_FOLDER_NAME_MAX_LEN).unwrap(),
            "Ciencias"
        );
    }

    #[test]
    fn test_validate_rejects_blank() {
        let err = validate_folder_name("   ", DEFAULT_FOLDER_NAME_MAX_LEN).unwrap_err();
        assert!(matches!(err, LibraryError::InvalidInput(_)));
    }

    #[test]
    fn test_validate_length_counts_chars() {
        // 50 multi-byte characters are still within the limit
        let name = "á".repeat(50);
        assert!(validate_folder_name(&name, 50).is_ok());
        assert!(validate_folder_name(&format!("{}a", name), 50).is_err());
    }
}
