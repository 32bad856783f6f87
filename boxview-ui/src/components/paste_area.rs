//! Paste-to-upload region.

use crate::api::upload_image;
use boxview_core::{upload_each_image, ClipboardEntry, ViewState, ViewerConfig};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, File};

/// Clipboard item captured while the paste event is still being dispatched.
/// The browser revokes access to clipboard data once the handler returns.
#[derive(Clone, Debug)]
pub struct PastedItem {
    pub media_type: String,
    pub file: Option<File>,
}

impl ClipboardEntry for PastedItem {
    type File = File;

    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    fn file(&self) -> Option<File> {
        self.file.clone()
    }
}

/// Snapshot the clipboard items of a paste event.
pub fn pasted_items(event: &ClipboardEvent) -> Vec<PastedItem> {
    let Some(items) = event.clipboard_data().map(|data| data.items()) else {
        return Vec::new();
    };

    (0..items.length())
        .filter_map(|i| items.get(i))
        .map(|item| PastedItem {
            media_type: item.type_(),
            file: item.get_as_file().ok().flatten(),
        })
        .collect()
}

/// Focusable region that uploads pasted images.
///
/// Each image in the paste is uploaded in turn; every successful upload
/// hands the server's fresh view state to `on_state`.
#[component]
pub fn PasteArea(
    config: StoredValue<ViewerConfig>,
    /// Called with the view state returned for each successful upload
    on_state: Callback<ViewState>,
) -> impl IntoView {
    let area_ref = create_node_ref::<html::Div>();
    let (uploading, set_uploading) = create_signal(false);

    let on_click = move |_| {
        if let Some(area) = area_ref.get() {
            let _ = area.focus();
        }
    };

    // leptos 0.6 types `on:paste` as a plain `Event`; the browser delivers a ClipboardEvent.
    let on_paste = move |event: web_sys::Event| {
        let event: ClipboardEvent = event.unchecked_into();
        let items = pasted_items(&event);
        let config = config.get_value();

        spawn_local(async move {
            set_uploading.set(true);
            let results = upload_each_image(items, |file| {
                let config = config.clone();
                async move {
                    let state = upload_image(&config, &file).await?;
                    on_state.call(state);
                    Ok(())
                }
            })
            .await;
            set_uploading.set(false);

            if results.is_empty() {
                log::debug!("Paste contained no images");
            }
        });
    };

    let (id, hint) = config.with_value(|c| (c.ids.paste_area.clone(), c.messages.paste_hint.clone()));

    view! {
        <div
            id=id
            node_ref=area_ref
            tabindex="0"
            class="paste-area"
            class:uploading=move || uploading.get()
            on:click=on_click
            on:paste=on_paste
        >
            {hint}
        </div>
    }
}
