use crate::error::ViewerError;
use crate::geometry::BoxSet;
use serde::{Deserialize, Serialize};

/// One previously uploaded image listed in the gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub filename: String,
    #[serde(default)]
    pub caption: String,
}

impl GalleryEntry {
    pub fn new(filename: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            caption: caption.into(),
        }
    }
}

/// Everything the viewer renders from.
///
/// Supplied once as page-embedded JSON and replaced wholesale whenever the
/// server answers an upload or delete with fresh state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// URL of the image currently shown, if any.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Annotation boxes for `image_url`. `None` means no annotation set.
    #[serde(default, alias = "grouped_boxes")]
    pub boxes: Option<BoxSet>,
    /// Uploaded images, in upload order.
    #[serde(default)]
    pub gallery: Vec<GalleryEntry>,
}

impl ViewState {
    pub fn new(image_url: impl Into<String>, boxes: BoxSet) -> Self {
        Self {
            image_url: Some(image_url.into()),
            boxes: Some(boxes),
            gallery: Vec::new(),
        }
    }

    pub fn with_gallery(mut self, gallery: Vec<GalleryEntry>) -> Self {
        self.gallery = gallery;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ViewerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Image and boxes to render, when both are present.
    pub fn annotated_image(&self) -> Option<(&str, &BoxSet)> {
        match (&self.image_url, &self.boxes) {
            (Some(url), Some(boxes)) => Some((url.as_str(), boxes)),
            _ => None,
        }
    }
}
