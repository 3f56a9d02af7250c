//! Choose a new password using the token from the emailed link
//! (`/reset-password?token=...`).

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use super::validate::validate_reset;
use crate::net::api::ApiClient;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let query = use_query_map();
    let token = Memo::new(move |_| query.with(|q| q.get("token")));

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (token_value, password_value) =
            match validate_reset(token.get().as_deref(), &password.get(), &confirm.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Updating password...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                match api.reset_password(&token_value, &password_value).await {
                    Ok(()) => {
                        done.set(true);
                        info.set("Your password has been updated.".to_owned());
                        password.set(String::new());
                        confirm.set(String::new());
                    }
                    Err(e) => info.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, token_value, password_value);
        }
    };

    view! {
        <Title text="Choose a new password · Staylane"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Choose a new password"</h1>
                <Show
                    when=move || token.with(Option::is_some)
                    fallback=|| {
                        view! {
                            <p class="auth-card__message">
                                "This reset link is incomplete. "
                                <a href="/forgot-password">"Request a new one."</a>
                            </p>
                        }
                    }
                >
                    <Show when=move || !done.get()>
                        <form class="auth-form" on:submit=on_submit>
                            <label class="auth-form__field">
                                <span>"New password"</span>
                                <input
                                    type="password"
                                    autocomplete="new-password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="auth-form__field">
                                <span>"Confirm password"</span>
                                <input
                                    type="password"
                                    autocomplete="new-password"
                                    prop:value=move || confirm.get()
                                    on:input=move |ev| confirm.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="button button--primary" type="submit" disabled=move || busy.get()>
                                "Update password"
                            </button>
                        </form>
                    </Show>
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
