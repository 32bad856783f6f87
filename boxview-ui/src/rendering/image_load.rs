//! Awaitable image loading.
//!
//! The displayed size of the page image is only meaningful after it has been
//! decoded and laid out, and the intrinsic size needs a separate detached
//! probe. Both are exposed as futures so the renderer can join them.

use crate::browser::js_error;
use boxview_core::{ImageSize, ViewerError};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlImageElement};

type LoadSender = Rc<RefCell<Option<oneshot::Sender<Result<(), ViewerError>>>>>;

/// `load`/`error` listeners attached for the duration of one wait.
/// Removed on drop so an abandoned wait leaves no dangling callbacks.
struct LoadListeners<'a> {
    image: &'a HtmlImageElement,
    on_load: Closure<dyn FnMut(Event)>,
    on_error: Closure<dyn FnMut(Event)>,
}

impl<'a> LoadListeners<'a> {
    fn attach(image: &'a HtmlImageElement, sender: LoadSender) -> Result<Self, ViewerError> {
        let load_sender = sender.clone();
        let on_load = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            if let Some(tx) = load_sender.borrow_mut().take() {
                let _ = tx.send(Ok(()));
            }
        });

        let src = image.src();
        let on_error = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            if let Some(tx) = sender.borrow_mut().take() {
                let _ = tx.send(Err(ViewerError::ImageLoad(src.clone())));
            }
        });

        image
            .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
            .map_err(js_error)?;
        image
            .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
            .map_err(js_error)?;

        Ok(Self {
            image,
            on_load,
            on_error,
        })
    }
}

impl Drop for LoadListeners<'_> {
    fn drop(&mut self) {
        let _ = self
            .image
            .remove_event_listener_with_callback("load", self.on_load.as_ref().unchecked_ref());
        let _ = self
            .image
            .remove_event_listener_with_callback("error", self.on_error.as_ref().unchecked_ref());
    }
}

/// True when the decoded image is the one `src` currently asks for.
///
/// Right after `src` changes, `complete()` still describes the previous
/// image until the new request is created, so `current_src` must match too.
pub fn has_loaded_current_src(image: &HtmlImageElement) -> bool {
    image.complete() && image.natural_width() > 0 && image.current_src() == image.src()
}

/// Resolve once `image` has finished loading its current source.
///
/// Resolves immediately for an image that already shows that source (e.g. cached).
pub async fn wait_for_load(image: &HtmlImageElement) -> Result<(), ViewerError> {
    if has_loaded_current_src(image) {
        return Ok(());
    }

    let (sender, receiver) = oneshot::channel();
    let _listeners = LoadListeners::attach(image, Rc::new(RefCell::new(Some(sender))))?;

    receiver
        .await
        .unwrap_or_else(|_| Err(ViewerError::ImageLoad(image.src())))
}

/// Post-layout size of an image element in CSS pixels.
pub fn displayed_size(image: &HtmlImageElement) -> ImageSize {
    ImageSize::new(image.client_width() as f64, image.client_height() as f64)
}

/// Natural size of the image at `src`, measured with a detached probe element.
pub async fn intrinsic_size(src: &str) -> Result<ImageSize, ViewerError> {
    let probe = HtmlImageElement::new().map_err(js_error)?;
    probe.set_src(src);
    wait_for_load(&probe).await?;

    Ok(ImageSize::new(
        probe.natural_width() as f64,
        probe.natural_height() as f64,
    ))
}

/// Wait for the page image and the probe together; neither size is returned
/// until both are known.
pub async fn displayed_and_intrinsic_size(
    image: &HtmlImageElement,
    src: &str,
) -> Result<(ImageSize, ImageSize), ViewerError> {
    let displayed = async {
        wait_for_load(image).await?;
        Ok::<_, ViewerError>(displayed_size(image))
    };

    let (displayed, intrinsic) = futures::future::join(displayed, intrinsic_size(src)).await;
    Ok((displayed?, intrinsic?))
}
