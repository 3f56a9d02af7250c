//! Top navigation bar with the account corner.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::storage::SessionStore;

#[derive(Clone, Copy)]
struct NavLink {
    href: &'static str,
    label: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/about", label: "About" },
    NavLink { href: "/case-studies", label: "Case studies" },
    NavLink { href: "/become-host", label: "Become a host" },
];

#[component]
pub fn SiteNav() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SessionStore>();
    let menu_open = RwSignal::new(false);

    let on_logout = move |_| {
        store.clear();
        auth.set(AuthState::default());
        log::info!("signed out");
    };

    let account = move || {
        let state = auth.get();
        if state.loading {
            return ().into_any();
        }
        match state.greeting_name() {
            Some(name) => view! {
                <span class="site-nav__greeting">"Hi, " {name}</span>
                <button type="button" class="site-nav__logout" on:click=on_logout>
                    "Log out"
                </button>
            }
            .into_any(),
            None => view! { <a class="site-nav__login" href="/login">"Log in"</a> }.into_any(),
        }
    };

    view! {
        <header class="site-nav">
            <a class="site-nav__brand" href="/">"Staylane"</a>
            <button
                type="button"
                class="site-nav__toggle"
                aria-label="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav class="site-nav__links" class:site-nav__links--open=move || menu_open.get()>
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a href=link.href on:click=move |_| menu_open.set(false)>
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="site-nav__account">{account}</div>
        </header>
    }
}
