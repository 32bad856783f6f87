//! Bootstrap data embedded in the host page.
//!
//! The server renders the initial view state (and optionally configuration
//! overrides) as `<script type="application/json">` blocks so the first
//! render needs no extra request.

use crate::browser::document;
use boxview_core::{ElementIds, ViewState, ViewerConfig};

/// Text content of the element with `id`, if present and non-blank.
pub fn read_embedded_json(id: &str) -> Option<String> {
    let element = document().ok()?.get_element_by_id(id)?;
    let text = element.text_content()?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Configuration overrides from the page, or defaults.
pub fn load_config() -> ViewerConfig {
    let id = ElementIds::default().config_data;
    ViewerConfig::from_json_or_default(read_embedded_json(&id).as_deref())
}

/// Initial view state from the page. Missing or unparsable data yields an
/// empty state.
pub fn load_view_state(ids: &ElementIds) -> ViewState {
    let Some(json) = read_embedded_json(&ids.view_state_data) else {
        log::debug!("No embedded view state (#{})", ids.view_state_data);
        return ViewState::default();
    };

    // `null` is how the server says "nothing uploaded yet"
    if json.trim() == "null" {
        return ViewState::default();
    }

    match ViewState::from_json(&json) {
        Ok(state) => {
            log::info!(
                "Loaded embedded view state: {} boxes, {} gallery entries",
                state.boxes.as_ref().map_or(0, |b| b.len()),
                state.gallery.len()
            );
            state
        }
        Err(e) => {
            log::warn!("Ignoring embedded view state: {}", e);
            ViewState::default()
        }
    }
}
