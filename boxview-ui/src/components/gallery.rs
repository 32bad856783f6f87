//! Uploaded image list with per-image delete buttons.

use crate::api::delete_image;
use crate::browser::{encode_path_segment, reload_page, BrowserPrompt};
use boxview_core::{run_delete, DeleteOutcome, GalleryEntry, ViewState, ViewerConfig};
use leptos::*;

/// Confirm, delete `filename` on the server and apply the outcome.
///
/// The view only changes once the server has answered: either the returned
/// state is applied through `on_state` or the page is reloaded.
pub fn delete_with_confirmation(
    filename: String,
    config: StoredValue<ViewerConfig>,
    on_state: Callback<ViewState>,
) {
    let config = config.get_value();

    spawn_local(async move {
        let outcome = run_delete(&filename, &config, &BrowserPrompt, |name| {
            let config = config.clone();
            async move { delete_image(&config, &name).await }
        })
        .await;

        match outcome {
            DeleteOutcome::Refreshed(state) => {
                log::info!("Deleted {}", filename);
                on_state.call(state);
            }
            DeleteOutcome::ReloadRequired => {
                log::info!("Deleted {}, reloading", filename);
                reload_page();
            }
            DeleteOutcome::Declined | DeleteOutcome::Rejected | DeleteOutcome::Failed(_) => {}
        }
    });
}

#[component]
fn GalleryItem(
    entry: GalleryEntry,
    config: StoredValue<ViewerConfig>,
    on_state: Callback<ViewState>,
) -> impl IntoView {
    let GalleryEntry { filename, caption } = entry;
    let (href, delete_label) = config.with_value(|c| {
        (
            c.image_page_url(&encode_path_segment(&filename)),
            c.messages.delete_button.clone(),
        )
    });
    let label = filename.clone();
    let data_filename = filename.clone();

    view! {
        <li class="gallery-item">
            <a href=href>{label}</a>
            <span class="caption">{caption}</span>
            <button
                class="delete-btn"
                data-filename=data_filename
                on:click=move |_| delete_with_confirmation(filename.clone(), config, on_state)
            >
                {delete_label}
            </button>
        </li>
    }
}

/// List of uploaded images.
#[component]
pub fn Gallery(
    state: Signal<ViewState>,
    config: StoredValue<ViewerConfig>,
    /// Called with the state returned by a successful delete
    on_state: Callback<ViewState>,
) -> impl IntoView {
    view! {
        <ul class="gallery">
            <For
                each=move || state.with(|s| s.gallery.clone())
                key=|entry| entry.filename.clone()
                children=move |entry| view! { <GalleryItem entry=entry config=config on_state=on_state /> }
            />
        </ul>
    }
}
