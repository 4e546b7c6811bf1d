//! Runtime Configuration
//!
//! Optional JSON block in index.html:
//! `<script id="library-config" type="application/json">{ ... }</script>`

use leptos_dragdrop::ActivationConfig;
use library_core::{DragSettings, LibraryConfig, LibraryResult};

pub const CONFIG_ELEMENT_ID: &str = "library-config";

/// Parse the config block. `Ok(None)` when the page has none.
pub fn read_config() -> LibraryResult<Option<LibraryConfig>> {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(text) if !text.trim().is_empty() => LibraryConfig::from_json(&text).map(Some),
        _ => Ok(None),
    }
}

pub fn activation(settings: &DragSettings) -> ActivationConfig {
    ActivationConfig {
        mouse_distance: settings.mouse_distance_px,
        touch_delay_ms: settings.touch_delay_ms,
        touch_tolerance: settings.touch_tolerance_px,
    }
}
