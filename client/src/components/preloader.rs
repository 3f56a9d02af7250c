//! Full-screen preloader shown until the app has hydrated.
//!
//! The overlay stays up for at least [`MIN_DISPLAY_MS`] after navigation
//! start so fast loads do not flash, then fades for [`FADE_MS`] and is
//! removed from the DOM.

#[cfg(test)]
#[path = "preloader_test.rs"]
mod preloader_test;

use leptos::prelude::*;

pub const MIN_DISPLAY_MS: u32 = 600;
pub const FADE_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreloaderPhase {
    #[default]
    Showing,
    Fading,
    Gone,
}

impl PreloaderPhase {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Showing => "preloader",
            Self::Fading => "preloader preloader--fading",
            Self::Gone => "preloader preloader--gone",
        }
    }
}

/// How much longer to hold the overlay once hydration is done.
pub fn remaining_display_ms(elapsed_ms: Option<f64>) -> u32 {
    let Some(elapsed) = elapsed_ms.filter(|ms| ms.is_finite() && *ms >= 0.0) else {
        return MIN_DISPLAY_MS;
    };
    let left = f64::from(MIN_DISPLAY_MS) - elapsed;
    if left <= 0.0 {
        0
    } else {
        // Bounded by MIN_DISPLAY_MS above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ms = left.ceil() as u32;
        ms
    }
}

#[component]
pub fn Preloader() -> impl IntoView {
    let phase = RwSignal::new(PreloaderPhase::Showing);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use gloo_timers::future::TimeoutFuture;

        let wait = remaining_display_ms(crate::util::browser::ms_since_page_start());
        if wait > 0 {
            TimeoutFuture::new(wait).await;
        }
        phase.set(PreloaderPhase::Fading);
        TimeoutFuture::new(FADE_MS).await;
        phase.set(PreloaderPhase::Gone);
        log::debug!("preloader dismissed");
    });

    view! {
        <Show when=move || phase.get() != PreloaderPhase::Gone>
            <div class=move || phase.get().css_class() aria-hidden="true">
                <div class="preloader__mark"></div>
            </div>
        </Show>
    }
}
