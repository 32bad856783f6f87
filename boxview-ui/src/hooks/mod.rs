mod page_data;
mod use_box_overlays;

pub use page_data::{load_config, load_view_state, read_embedded_json};
pub use use_box_overlays::use_box_overlays;
