//! Floating "back to top" button.

#[cfg(test)]
#[path = "back_to_top_test.rs"]
mod back_to_top_test;

use leptos::prelude::*;

use crate::util::browser;

/// Scroll offset past which the button appears.
pub const SHOW_AFTER_PX: f64 = 400.0;

pub fn should_show(scroll_y: f64) -> bool {
    scroll_y > SHOW_AFTER_PX
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let show = should_show(browser::scroll_y());
            if visible.get_untracked() != show {
                visible.set(show);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <button
            type="button"
            class="back-to-top"
            class:back-to-top--visible=move || visible.get()
            aria-label="Back to top"
            on:click=move |_| browser::scroll_to_top()
        >
            "↑"
        </button>
    }
}
