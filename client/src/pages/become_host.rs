//! Become-a-host application form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts to `/hosts/applications`. The call carries the bearer token when
//! the visitor is signed in, so a 401 here is the one place a page can raise
//! the session-expired signal. `available_from` comes from the date picker
//! with `min` set to today.

use calendar::format_canonical;
use leptos::prelude::*;
use leptos_meta::Title;

use super::validate::{HostForm, validate_host_application};
use crate::components::date_picker::DatePicker;
use crate::net::api::ApiClient;
use crate::net::types::PropertyType;
use crate::state::session::SessionState;
use crate::util::dates::today_local;

#[component]
pub fn BecomeHostPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let session = expect_context::<RwSignal<SessionState>>();

    let form = RwSignal::new(HostForm {
        property_type: PropertyType::default().as_str().to_owned(),
        listing_count: "1".to_owned(),
        ..HostForm::default()
    });
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let submitted = RwSignal::new(false);
    let min_date = format_canonical(today_local());

    let available_from = Signal::derive(move || form.with(|f| f.available_from.clone()));
    let on_date = Callback::new(move |value: String| form.update(|f| f.available_from = value));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let application = match form.with(|f| validate_host_application(f, today_local())) {
            Ok(application) => application,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Sending your application...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                match api.submit_host_application(&application).await {
                    Ok(()) => {
                        log::info!("host application submitted for {}", application.city);
                        submitted.set(true);
                        info.set(String::new());
                    }
                    Err(e) => {
                        if session.try_update(|s| s.observe(&e)).unwrap_or(false) {
                            log::info!("host application hit an expired session");
                        }
                        info.set(e.to_string());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, session, submitted, application);
        }
    };

    view! {
        <Title text="Become a host · Staylane"/>
        <section class="host-page">
            <header class="host-page__intro">
                <h1>"Host with Staylane"</h1>
                <p>
                    "Tell us about your property. Our onboarding team reviews every application "
                    "and gets back to you within two business days."
                </p>
            </header>
            <Show
                when=move || !submitted.get()
                fallback=|| {
                    view! {
                        <div class="host-page__done">
                            <h2>"Thanks, we've got your application"</h2>
                            <p>"We'll be in touch by email soon."</p>
                            <a class="button" href="/">"Back to home"</a>
                        </div>
                    }
                }
            >
                <form class="host-form" on:submit=on_submit>
                    <label class="host-form__field">
                        <span>"Full name"</span>
                        <input
                            type="text"
                            autocomplete="name"
                            prop:value=move || form.with(|f| f.full_name.clone())
                            on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                        />
                    </label>
                    <label class="host-form__field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            autocomplete="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="host-form__field">
                        <span>"Phone"</span>
                        <input
                            type="tel"
                            autocomplete="tel"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        />
                    </label>
                    <label class="host-form__field">
                        <span>"City"</span>
                        <input
                            type="text"
                            autocomplete="address-level2"
                            prop:value=move || form.with(|f| f.city.clone())
                            on:input=move |ev| form.update(|f| f.city = event_target_value(&ev))
                        />
                    </label>
                    <label class="host-form__field">
                        <span>"Property type"</span>
                        <select
                            prop:value=move || form.with(|f| f.property_type.clone())
                            on:change=move |ev| form.update(|f| f.property_type = event_target_value(&ev))
                        >
                            {PropertyType::ALL
                                .into_iter()
                                .map(|kind| {
                                    view! {
                                        <option
                                            value=kind.as_str()
                                            selected=move || form.with(|f| f.property_type == kind.as_str())
                                        >
                                            {kind.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="host-form__field">
                        <span>"Number of listings"</span>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || form.with(|f| f.listing_count.clone())
                            on:input=move |ev| form.update(|f| f.listing_count = event_target_value(&ev))
                        />
                    </label>
                    <div class="host-form__field">
                        <DatePicker
                            label="Available from"
                            placeholder="Pick a start date"
                            value=available_from
                            on_change=on_date
                            min=min_date.clone()
                            disabled=Signal::derive(move || busy.get())
                        />
                    </div>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        "Submit application"
                    </button>
                </form>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="host-page__message">{move || info.get()}</p>
            </Show>
        </section>
    }
}
