//! Library Configuration
//!
//! Every field has a default, so an empty or partial JSON object is valid.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::backend::UserId;
use crate::domain::{LibraryResult, DEFAULT_FOLDER_NAME_MAX_LEN};

/// Gesture activation thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSettings {
    /// Mouse travel before a press becomes a drag
    pub mouse_distance_px: f64,
    /// Touch hold before a press becomes a drag
    pub touch_delay_ms: f64,
    /// Touch travel allowed during the hold
    pub touch_tolerance_px: f64,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            mouse_distance_px: 8.0,
            touch_delay_ms: 200.0,
            touch_tolerance_px: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    pub user_id: String,
    pub mock_delay_ms: u64,
    pub folder_name_max_len: usize,
    /// Records kept by the in-memory log buffer
    pub log_capacity: usize,
    pub log_level: String,
    pub drag: DragSettings,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            user_id: "mock-user-123".to_string(),
            mock_delay_ms: 500,
            folder_name_max_len: DEFAULT_FOLDER_NAME_MAX_LEN,
            log_capacity: 200,
            log_level: "info".to_string(),
            drag: DragSettings::default(),
        }
    }
}

impl LibraryConfig {
    pub fn from_json(json: &str) -> LibraryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn user(&self) -> UserId {
        UserId::new(self.user_id.clone())
    }

    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }

    /// Parsed `log_level`, `Info` when unrecognised
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
