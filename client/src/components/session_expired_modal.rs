//! Prompt shown after an authenticated request came back 401.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::session::{SessionState, login_redirect};
use crate::util::browser;
use crate::util::storage::SessionStore;

/// Modal with "Log in again" and "Go home". Both clear the stored session
/// before leaving the page.
#[component]
pub fn SessionExpiredModal() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SessionStore>();
    let location = use_location();

    let end_session = move |target: String| {
        store.clear();
        auth.set(AuthState::default());
        session.set(SessionState::default());
        log::info!("session cleared, redirecting to {target}");
        browser::redirect(&target);
    };
    let on_login_again = move |_| end_session(login_redirect(&location.pathname.get_untracked()));
    let on_go_home = move |_| end_session("/".to_owned());

    view! {
        <Show when=move || session.get().expired>
            <div class="session-modal__backdrop">
                <div
                    class="session-modal"
                    role="alertdialog"
                    aria-modal="true"
                    aria-labelledby="session-modal-title"
                >
                    <h2 id="session-modal-title">"Your session has expired"</h2>
                    <p class="session-modal__body">
                        "For your security you were signed out. Log in again to pick up where you left off."
                    </p>
                    <div class="session-modal__actions">
                        <button type="button" class="button button--primary" on:click=on_login_again>
                            "Log in again"
                        </button>
                        <button type="button" class="button button--ghost" on:click=on_go_home>
                            "Go home"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
