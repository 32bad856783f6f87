pub mod clipboard;
pub mod config;
pub mod delete;
pub mod error;
pub mod geometry;
pub mod messages;
pub mod upload;
pub mod view_state;

pub use clipboard::is_image_media_type;
pub use config::{ElementIds, OverlayClasses, ViewerConfig, ViewerMessages};
pub use delete::{run_delete, DeleteOutcome, DeletePrompt};
pub use error::ViewerError;
pub use geometry::{
    layout_overlays, AnnotationBox, BoxSet, ImageSize, OverlayPlacement, OverlayRect, Point,
    ScaleFactors,
};
pub use messages::{DeleteResponse, CAPTION_FIELD, FILE_FIELD};
pub use upload::{upload_each_image, ClipboardEntry};
pub use view_state::{GalleryEntry, ViewState};
