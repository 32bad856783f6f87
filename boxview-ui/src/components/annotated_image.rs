use crate::hooks::use_box_overlays;
use boxview_core::{ViewState, ViewerConfig};
use leptos::*;

/// The current image with its annotation overlays.
///
/// Overlays are positioned absolutely inside the container, so the image
/// sits at the container's top-left corner.
#[component]
pub fn AnnotatedImage(
    /// Current view state (read-only)
    state: Signal<ViewState>,
    config: StoredValue<ViewerConfig>,
) -> impl IntoView {
    let image_ref = create_node_ref::<html::Img>();
    let container_ref = create_node_ref::<html::Div>();

    let (ids, classes) = config.with_value(|c| (c.ids.clone(), c.classes.clone()));
    use_box_overlays(image_ref, container_ref, state, classes);

    let has_image = move || state.with(|s| s.image_url.is_some());
    // Shown even when there is no box set to draw
    let image_url = move || state.with(|s| s.image_url.clone());

    view! {
        <Show when=has_image>
            <div
                id=ids.container.clone()
                node_ref=container_ref
                class="image-container"
                style="position: relative; display: inline-block;"
            >
                <img
                    id=ids.image.clone()
                    node_ref=image_ref
                    src=image_url
                    alt="Uploaded image"
                    style="display: block; max-width: 100%; height: auto;"
                />
            </div>
        </Show>
    }
}
