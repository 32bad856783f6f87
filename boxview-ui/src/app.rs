use crate::components::{AnnotatedImage, Gallery, PasteArea};
use crate::hooks::{load_config, load_view_state};
use boxview_core::ViewState;
use leptos::*;

#[component]
pub fn App() -> impl IntoView {
    // ========== Load config and initial state from the page ==========
    let config = store_value(load_config());
    let initial_state = config.with_value(|c| load_view_state(&c.ids));

    let (view_state, set_view_state) = create_signal(initial_state);

    // ========== Server refresh: replace the whole view state ==========
    let on_state = Callback::new(move |state: ViewState| {
        log::info!(
            "View state refreshed: image={:?}, {} gallery entries",
            state.image_url,
            state.gallery.len()
        );
        set_view_state.set(state);
    });

    view! {
        <main class="boxview">
            <PasteArea config=config on_state=on_state />
            <AnnotatedImage state=view_state.into() config=config />
            <Gallery state=view_state.into() config=config on_state=on_state />
        </main>
    }
}
