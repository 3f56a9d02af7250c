//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    back_to_top::BackToTop, preloader::Preloader, session_expired_modal::SessionExpiredModal,
    site_footer::SiteFooter, site_nav::SiteNav, whatsapp_bubble::WhatsAppBubble,
};
use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::net::api::ApiClient;
use crate::pages::{
    about::AboutPage,
    become_host::BecomeHostPage,
    case_studies::{CaseStudiesPage, CaseStudyPage},
    forgot_password::ForgotPasswordPage,
    home::HomePage,
    legal::{PrivacyPage, TermsPage},
    login::LoginPage,
    not_found::NotFoundPage,
    reset_password::ResetPasswordPage,
};
use crate::state::{auth::AuthState, session::SessionState};
use crate::tracking::beacon::install_visit_tracker;
use crate::util::storage::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is provided as context for the server render and embedded in
/// the page so the browser hydrates with the same values.
pub fn shell(options: LeptosOptions, config: SiteConfig) -> impl IntoView {
    let config_json = config.to_script_json();
    provide_context(config);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script id=CONFIG_ELEMENT_ID type="application/json" inner_html=config_json></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session store and API client once and provides them, with
/// the auth and session-expiry signals, to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::current();
    let store = SessionStore::default();
    let api = ApiClient::new(config.api_base.clone(), config.geo_url.clone(), store);
    let auth = RwSignal::new(AuthState::pending());
    let session = RwSignal::new(SessionState::default());

    provide_context(config.clone());
    provide_context(store);
    provide_context(api.clone());
    provide_context(auth);
    provide_context(session);

    // Effects only run in the browser, where storage is readable.
    Effect::new(move || {
        auth.set(AuthState::restored(store.token(), store.user()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/staylane.css"/>
        <Title text="Staylane"/>
        <Preloader/>

        <Router>
            <SiteNav/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("privacy") view=PrivacyPage/>
                    <Route path=StaticSegment("terms") view=TermsPage/>
                    <Route path=StaticSegment("case-studies") view=CaseStudiesPage/>
                    <Route path=(StaticSegment("case-studies"), ParamSegment("slug")) view=CaseStudyPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                    <Route path=StaticSegment("become-host") view=BecomeHostPage/>
                </Routes>
            </main>
            <SiteFooter/>
            <VisitTracking api=api config=config/>
            <SessionExpiredModal/>
            <BackToTop/>
            <WhatsAppBubble/>
        </Router>
    }
}

/// Hooks the visitor tracker to route changes; needs the router context.
#[component]
fn VisitTracking(api: ApiClient, config: SiteConfig) -> impl IntoView {
    install_visit_tracker(api, &config);
}
