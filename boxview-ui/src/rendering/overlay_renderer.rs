use crate::browser::{document, js_error};
use crate::rendering::image_load::displayed_and_intrinsic_size;
use boxview_core::{
    layout_overlays, BoxSet, OverlayClasses, OverlayPlacement, ScaleFactors, ViewerError,
};
use leptos::spawn_local;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlImageElement, MouseEvent};

/// The image to measure and the positioned container overlays are appended to.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayTarget {
    pub image: HtmlImageElement,
    pub container: HtmlElement,
}

impl OverlayTarget {
    pub fn new(image: HtmlImageElement, container: HtmlElement) -> Self {
        Self { image, container }
    }
}

/// A rendered overlay and the click listener that toggles it.
struct OverlayElement {
    element: HtmlElement,
    _on_click: Closure<dyn FnMut(MouseEvent)>,
}

/// Draws one clickable rectangle per annotation box over the target image.
///
/// Every pass tears down all overlays from the previous pass before adding
/// new ones, so the overlay count always equals the latest box count.
/// Starting a new pass supersedes any pass still waiting for the image.
#[derive(Clone)]
pub struct BoxOverlayRenderer {
    target: Option<OverlayTarget>,
    classes: Rc<OverlayClasses>,
    overlays: Rc<RefCell<Vec<OverlayElement>>>,
    render_id: Rc<Cell<u32>>,
}

impl BoxOverlayRenderer {
    pub fn new(target: Option<OverlayTarget>, classes: OverlayClasses) -> Self {
        Self {
            target,
            classes: Rc::new(classes),
            overlays: Rc::new(RefCell::new(Vec::new())),
            render_id: Rc::new(Cell::new(0)),
        }
    }

    pub fn target(&self) -> Option<&OverlayTarget> {
        self.target.as_ref()
    }

    /// Number of overlays currently on screen.
    pub fn overlay_count(&self) -> usize {
        self.overlays.borrow().len()
    }

    /// Start a render pass.
    ///
    /// Returns immediately; the overlays appear once the image has loaded.
    pub fn render(&self, image_source: &str, boxes: &BoxSet) {
        let renderer = self.clone();
        let image_source = image_source.to_string();
        let boxes = boxes.clone();

        spawn_local(async move {
            if let Err(e) = renderer.render_pass(&image_source, &boxes).await {
                log::error!("Failed to render annotations for {}: {}", image_source, e);
            }
        });
    }

    /// Run a render pass to completion.
    ///
    /// Returns the number of overlays created: zero when there is no target
    /// or when a newer pass started while this one was waiting.
    pub async fn render_pass(&self, image_source: &str, boxes: &BoxSet) -> Result<usize, ViewerError> {
        let Some(target) = self.target.clone() else {
            log::debug!("No image element to render annotations into");
            return Ok(0);
        };

        let render_id = self.render_id.get().wrapping_add(1);
        self.render_id.set(render_id);

        target.image.set_src(image_source);
        let (displayed, intrinsic) = displayed_and_intrinsic_size(&target.image, image_source).await?;

        if self.render_id.get() != render_id {
            log::debug!("Render pass {} superseded", render_id);
            return Ok(0);
        }

        let scale = ScaleFactors::between(displayed, intrinsic);
        if !scale.is_finite() {
            log::warn!(
                "Degenerate image size {}x{} for {}",
                intrinsic.width,
                intrinsic.height,
                image_source
            );
        }

        let malformed = boxes.malformed_count();
        if malformed > 0 {
            log::debug!("{} of {} boxes have inverted corners", malformed, boxes.len());
        }

        self.teardown(&target.container);

        let placements = layout_overlays(boxes, scale);
        let mut overlays = Vec::with_capacity(placements.len());
        for placement in &placements {
            match self.create_overlay(&target.container, placement) {
                Ok(overlay) => overlays.push(overlay),
                Err(e) => {
                    for overlay in overlays {
                        overlay.element.remove();
                    }
                    return Err(e);
                }
            }
        }

        log::debug!(
            "Rendered {} boxes at scale {:.3}x{:.3}",
            overlays.len(),
            scale.x,
            scale.y
        );

        let count = overlays.len();
        *self.overlays.borrow_mut() = overlays;
        Ok(count)
    }

    /// Remove every overlay and cancel any pending pass.
    pub fn clear(&self) {
        self.render_id.set(self.render_id.get().wrapping_add(1));
        if let Some(target) = &self.target {
            self.teardown(&target.container);
        }
    }

    /// Remove our overlays plus any stray overlay-classed element in the container.
    fn teardown(&self, container: &HtmlElement) {
        for overlay in self.overlays.borrow_mut().drain(..) {
            overlay.element.remove();
        }

        let stray = container.get_elements_by_class_name(&self.classes.overlay);
        while let Some(element) = stray.item(0) {
            element.remove();
        }
    }

    fn create_overlay(
        &self,
        container: &HtmlElement,
        placement: &OverlayPlacement,
    ) -> Result<OverlayElement, ViewerError> {
        let element: HtmlElement = document()?
            .create_element("div")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| ViewerError::Js("created element is not an HtmlElement".to_string()))?;

        element.set_class_name(&self.classes.overlay);
        element
            .set_attribute("data-index", &placement.index.to_string())
            .map_err(js_error)?;

        let rect = placement.rect;
        let style = element.style();
        for (property, value) in [
            ("position", "absolute".to_string()),
            ("left", format!("{}px", rect.left)),
            ("top", format!("{}px", rect.top)),
            ("width", format!("{}px", rect.width)),
            ("height", format!("{}px", rect.height)),
        ] {
            style.set_property(property, &value).map_err(js_error)?;
        }

        let toggled = element.clone();
        let hidden_class = self.classes.hidden.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
            if let Err(e) = toggled.class_list().toggle(&hidden_class) {
                log::warn!("Failed to toggle overlay: {:?}", e);
            }
        });
        element
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(js_error)?;

        container.append_child(&element).map_err(js_error)?;

        Ok(OverlayElement {
            element,
            _on_click: on_click,
        })
    }
}
