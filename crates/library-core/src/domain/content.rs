//! Content Item Entity
//!
//! A resource (document, video, map...) owned by exactly one container:
//! a folder, or the unassigned bucket.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::folder::FolderId;

/// Content item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub String);

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Resource type, drives the icon shown in the row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentKind {
    #[default]
    Document,
    Video,
    Map,
    Science,
    Other(String),
}

impl ContentKind {
    pub fn as_str(&self) -> &str {
        match self {
            ContentKind::Document => "document",
            ContentKind::Video => "video",
            ContentKind::Map => "map",
            ContentKind::Science => "science",
            ContentKind::Other(s) => s,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "" | "document" => ContentKind::Document,
            "video" => ContentKind::Video,
            "map" => ContentKind::Map,
            "science" => ContentKind::Science,
            _ => ContentKind::Other(s.trim().to_string()),
        }
    }
}

impl From<String> for ContentKind {
    fn from(s: String) -> Self {
        ContentKind::from_str(&s)
    }
}

impl From<ContentKind> for String {
    fn from(kind: ContentKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Who can see the resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// Visible to teachers only
    Teacher,
    #[default]
    Students,
}

impl Availability {
    pub fn from_teacher_only(teacher_only: bool) -> Self {
        if teacher_only {
            Availability::Teacher
        } else {
            Availability::Students
        }
    }

    /// Label shown in the availability column
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Teacher => "Docente",
            Availability::Students => "Estudiantes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: ContentId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub availability: Availability,
    pub owner: String,
    /// Display date, `dd/mm/yyyy`
    pub date: String,
    /// Current container, `None` = unassigned
    pub folder_id: Option<FolderId>,
}

impl ContentItem {
    /// Create an unassigned item with default metadata
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ContentId::new(id),
            title: title.into(),
            kind: ContentKind::default(),
            availability: Availability::default(),
            owner: String::new(),
            date: String::new(),
            folder_id: None,
        }
    }

    pub fn is_unassigned(&self) -> bool {
        self.folder_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!(ContentKind::from_str("video"), ContentKind::Video);
        assert_eq!(ContentKind::from_str("Science"), ContentKind::Science);
        assert_eq!(ContentKind::from_str(""), ContentKind::Document);
        assert_eq!(
            ContentKind::from_str("podcast"),
            ContentKind::Other("podcast".to_string())
        );
    }

    #[test]
    fn test_item_json_shape() {
        let mut item = ContentItem::new("content-1", "Mapamundi");
        item.kind = ContentKind::Map;
        item.folder_id = Some(FolderId::new("folder-1"));

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "map");
        assert_eq!(json["folderId"], "folder-1");
        assert_eq!(json["availability"], "students");
    }

    #[test]
    fn test_availability_labels() {
        assert_eq!(Availability::from_teacher_only(true).label(), "Docente");
        assert_eq!(Availability::from_teacher_only(false).label(), "Estudiantes");
    }
}
