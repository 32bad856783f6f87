pub mod annotated_image;
pub mod gallery;
pub mod paste_area;

pub use annotated_image::AnnotatedImage;
pub use gallery::{delete_with_confirmation, Gallery};
pub use paste_area::{pasted_items, PasteArea, PastedItem};
