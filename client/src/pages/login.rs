//! Email + password login.
//!
//! On success the token and user are written to the injected
//! `SessionStore` and the browser goes to the sanitized `next` target.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use super::validate::validate_login;
use crate::net::api::ApiClient;
use crate::state::auth::AuthState;
use crate::state::session::sanitize_next;

/// Where to go after signing in, from the raw `next` query value.
pub(crate) fn post_login_target(next: Option<&str>) -> String {
    let target = sanitize_next(next);
    if target.starts_with("/login") { "/".to_owned() } else { target }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let target = post_login_target(query.with_untracked(|q| q.get("next")).as_deref());
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.login(&email_value, &password_value).await {
                    Ok(resp) => {
                        api.store().save(&resp.token, &resp.user);
                        log::info!("signed in as {}", resp.user.email);
                        auth.set(AuthState::signed_in(resp.user));
                        crate::util::browser::redirect(&target);
                    }
                    Err(e) => {
                        info.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, auth, email_value, password_value, target);
        }
    };

    view! {
        <Title text="Log in · Staylane"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Log in to manage your stays and listings."</p>
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
                    <label class="auth-form__field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        "Log in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    <a href="/forgot-password">"Forgot your password?"</a>
                </p>
            </div>
        </div>
    }
}
