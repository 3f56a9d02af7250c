//! "Forgot password" form: request a reset link by email.

use leptos::prelude::*;
use leptos_meta::Title;

use super::validate::validate_email;
use crate::net::api::ApiClient;

/// Shown on success whether or not the account exists.
pub const RESET_LINK_SENT: &str = "If an account exists for that email, a reset link is on its way.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_email(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Sending...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                match api.request_password_reset(&email_value).await {
                    Ok(()) => {
                        sent.set(true);
                        info.set(RESET_LINK_SENT.to_owned());
                    }
                    Err(e) => {
                        log::warn!("password reset request failed: {e}");
                        info.set(e.to_string());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, email_value);
        }
    };

    view! {
        <Title text="Reset your password · Staylane"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Forgot your password?"</h1>
                <p class="auth-card__subtitle">"We'll email you a link to choose a new one."</p>
                <Show when=move || !sent.get()>
                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__field">
                            <span>"Email"</span>
                            <input
                                type="email"
                                autocomplete="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="button button--primary" type="submit" disabled=move || busy.get()>
                            "Send reset link"
                        </button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    <a href="/login">"Back to log in"</a>
                </p>
            </div>
        </div>
    }
}
