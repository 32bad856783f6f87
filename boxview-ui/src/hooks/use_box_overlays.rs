use crate::rendering::{BoxOverlayRenderer, OverlayTarget};
use boxview_core::{OverlayClasses, ViewState};
use leptos::html::{Div, Img};
use leptos::*;
use leptos_use::use_window_size;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlImageElement};

/// Keep the overlays over `image_ref` in sync with `state`.
///
/// Re-renders whenever the view state changes, the image/container mount,
/// or the window is resized. Without both elements mounted nothing is drawn.
pub fn use_box_overlays(
    image_ref: NodeRef<Img>,
    container_ref: NodeRef<Div>,
    state: Signal<ViewState>,
    classes: OverlayClasses,
) {
    let renderer = store_value(None::<BoxOverlayRenderer>);
    let window_size = use_window_size();

    create_effect(move |_| {
        // Track viewport size so a resize recomputes the display scale
        let _ = (window_size.width.get(), window_size.height.get());

        let (Some(image_el), Some(container_el)) = (image_ref.get(), container_ref.get()) else {
            renderer.update_value(|r| {
                if let Some(r) = r.take() {
                    r.clear();
                }
            });
            return;
        };

        let target = OverlayTarget::new(
            image_el.unchecked_ref::<HtmlImageElement>().clone(),
            container_el.unchecked_ref::<HtmlElement>().clone(),
        );

        renderer.update_value(|r| {
            if r.as_ref().and_then(|r| r.target()) != Some(&target) {
                *r = Some(BoxOverlayRenderer::new(Some(target), classes.clone()));
            }
        });

        state.with(|s| {
            renderer.with_value(|r| {
                let Some(r) = r else { return };
                match s.annotated_image() {
                    Some((url, boxes)) => r.render(url, boxes),
                    None => r.clear(),
                }
            });
        });
    });
}
