//! Viewer configuration.
//!
//! Endpoints, DOM ids, class names and user-facing messages. Every field has
//! a default, so a page may embed a partial JSON override (or none at all).

use serde::{Deserialize, Serialize};

/// Ids of the elements the viewer renders and reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    /// Focusable region that receives paste events
    pub paste_area: String,
    /// Image element the annotated image is loaded into
    pub image: String,
    /// Positioned container holding the image and its overlays
    pub container: String,
    /// Embedded JSON with the initial view state
    pub view_state_data: String,
    /// Embedded JSON with configuration overrides
    pub config_data: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            paste_area: "paste-area".to_string(),
            image: "uploaded-image".to_string(),
            container: "image-container".to_string(),
            view_state_data: "view-state-data".to_string(),
            config_data: "viewer-config".to_string(),
        }
    }
}

/// CSS classes applied to overlay elements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayClasses {
    pub overlay: String,
    pub hidden: String,
}

impl Default for OverlayClasses {
    fn default() -> Self {
        Self {
            overlay: "bounding-box".to_string(),
            hidden: "hidden".to_string(),
        }
    }
}

/// Text shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerMessages {
    /// Delete confirmation. `{filename}` is replaced with the file name.
    pub confirm_delete: String,
    pub delete_failed: String,
    /// Label of each gallery item's delete button
    pub delete_button: String,
    pub paste_hint: String,
}

impl Default for ViewerMessages {
    fn default() -> Self {
        Self {
            confirm_delete: "Are you sure you want to delete {filename}?".to_string(),
            delete_failed: "An error occurred while deleting the file.".to_string(),
            delete_button: "Delete".to_string(),
            paste_hint: "Click here and paste an image (Ctrl+V)".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub upload_endpoint: String,
    /// Prefix for delete requests; the file name is appended as a path segment.
    pub delete_endpoint: String,
    /// Prefix for per-image pages linked from the gallery.
    pub image_page_prefix: String,
    /// Caption sent with every pasted image.
    pub default_caption: String,
    pub ids: ElementIds,
    pub classes: OverlayClasses,
    pub messages: ViewerMessages,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            upload_endpoint: "/upload".to_string(),
            delete_endpoint: "/delete".to_string(),
            image_page_prefix: "/image".to_string(),
            default_caption: "Pasted Image".to_string(),
            ids: ElementIds::default(),
            classes: OverlayClasses::default(),
            messages: ViewerMessages::default(),
        }
    }
}

impl ViewerConfig {
    /// Parse embedded overrides, falling back to defaults when absent or invalid.
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        let Some(json) = json.map(str::trim).filter(|j| !j.is_empty()) else {
            return Self::default();
        };

        match serde_json::from_str::<ViewerConfig>(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring invalid viewer config: {}", e);
                Self::default()
            }
        }
    }

    /// Delete URL for an already path-encoded file name.
    pub fn delete_url(&self, encoded_filename: &str) -> String {
        join_path(&self.delete_endpoint, encoded_filename)
    }

    /// Gallery link for an already path-encoded file name.
    pub fn image_page_url(&self, encoded_filename: &str) -> String {
        join_path(&self.image_page_prefix, encoded_filename)
    }

    pub fn confirm_delete_message(&self, filename: &str) -> String {
        self.messages.confirm_delete.replace("{filename}", filename)
    }
}

fn join_path(prefix: &str, segment: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), segment)
}
