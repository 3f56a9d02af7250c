//! Landing page.

use leptos::prelude::*;
use leptos_meta::Title;

use super::case_studies::{CASE_STUDIES, case_study_href};

const FEATURES: &[(&str, &str)] = &[
    ("One calendar", "Blocked and booked dates sync to every channel, so guests only see days that are really free."),
    ("Vetted guests", "Verified profiles and reviews before anyone gets the keys."),
    ("Local support", "A real team in your city for check-ins, cleaning and the unexpected."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Staylane · Short stays, handled"/>
        <section class="hero">
            <h1>"Short stays, handled."</h1>
            <p class="hero__lead">
                "Staylane lists, prices and looks after your property so you can earn from it without the admin."
            </p>
            <div class="hero__actions">
                <a class="button button--primary" href="/become-host">"Become a host"</a>
                <a class="button button--ghost" href="/case-studies">"See host stories"</a>
            </div>
        </section>
        <section class="features">
            {FEATURES
                .iter()
                .map(|(title, text)| {
                    view! {
                        <div class="features__item">
                            <h2>{*title}</h2>
                            <p>{*text}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
        <section class="home-stories">
            <h2>"From our hosts"</h2>
            <ul>
                {CASE_STUDIES
                    .iter()
                    .take(2)
                    .map(|study| {
                        view! {
                            <li>
                                <a href=case_study_href(study)>{study.title}</a>
                                <span class="home-stories__where">{study.location}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
