pub mod image_load;
pub mod overlay_renderer;

pub use image_load::{
    displayed_and_intrinsic_size, displayed_size, has_loaded_current_src, intrinsic_size,
    wait_for_load,
};
pub use overlay_renderer::{BoxOverlayRenderer, OverlayTarget};
