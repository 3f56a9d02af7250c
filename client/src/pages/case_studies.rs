//! Host case studies: list page and `/case-studies/:slug` detail.

#[cfg(test)]
#[path = "case_studies_test.rs"]
mod case_studies_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub slug: &'static str,
    pub title: &'static str,
    pub host: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
    pub body: &'static [&'static str],
    pub metrics: &'static [Metric],
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        slug: "porto-riverside-loft",
        title: "A riverside loft that books itself",
        host: "Marta R.",
        location: "Porto, Portugal",
        summary: "How one loft went from 40% to 86% occupancy in its first season.",
        body: &[
            "Marta listed her Ribeira loft on three platforms and spent her evenings reconciling calendars. \
             Double bookings cost her two five-star reviews in a single month.",
            "After moving to Staylane she kept one calendar. Blocked dates sync to every channel, \
             and guests only ever see days that are genuinely free.",
            "With the admin time back she rewrote the listing, added a self check-in lockbox and \
             opened weekday stays to remote workers.",
        ],
        metrics: &[
            Metric { label: "Occupancy", value: "86%" },
            Metric { label: "Average rating", value: "4.9" },
            Metric { label: "Hours saved per month", value: "12" },
        ],
    },
    CaseStudy {
        slug: "lisbon-family-townhouse",
        title: "Family townhouse, year-round demand",
        host: "João and Inês P.",
        location: "Lisbon, Portugal",
        summary: "Longer stays and fewer turnovers for a four-bedroom family home.",
        body: &[
            "The Pereiras rent their townhouse while working abroad each winter. \
             Short stays meant a cleaning crew every other day.",
            "Staylane's minimum-stay rules and a start date picked in advance let them open the \
             house only from the day they leave, and only for week-long bookings.",
        ],
        metrics: &[
            Metric { label: "Average stay", value: "9 nights" },
            Metric { label: "Turnovers per month", value: "3" },
        ],
    },
    CaseStudy {
        slug: "sintra-hillside-cabin",
        title: "A hillside cabin with a waitlist",
        host: "Rui M.",
        location: "Sintra, Portugal",
        summary: "From an unlisted family cabin to a waitlist in eight months.",
        body: &[
            "Rui's cabin had no reviews, no photos and no pricing history. Our onboarding team \
             shot the listing and set launch pricing from comparable stays nearby.",
            "Eight months later the cabin is booked out every weekend and guests join a waitlist \
             for cancellations.",
        ],
        metrics: &[
            Metric { label: "Weekend occupancy", value: "100%" },
            Metric { label: "Reviews", value: "57" },
        ],
    },
];

pub fn find_case_study(slug: &str) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|study| study.slug == slug)
}

pub fn case_study_href(study: &CaseStudy) -> String {
    format!("/case-studies/{}", study.slug)
}

#[component]
pub fn CaseStudiesPage() -> impl IntoView {
    view! {
        <Title text="Case studies · Staylane"/>
        <section class="case-studies">
            <h1>"Hosts who made the switch"</h1>
            <ul class="case-studies__list">
                {CASE_STUDIES
                    .iter()
                    .map(|study| {
                        view! {
                            <li class="case-studies__item">
                                <a href=case_study_href(study)>
                                    <h2>{study.title}</h2>
                                    <p class="case-studies__meta">{study.host} " · " {study.location}</p>
                                    <p>{study.summary}</p>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
pub fn CaseStudyPage() -> impl IntoView {
    let params = use_params_map();
    let study = move || params.with(|p| p.get("slug")).and_then(|slug| find_case_study(&slug));

    move || match study() {
        Some(study) => view! {
            <Title text=format!("{} · Staylane", study.title)/>
            <article class="case-study">
                <p class="case-study__meta">{study.host} " · " {study.location}</p>
                <h1>{study.title}</h1>
                <dl class="case-study__metrics">
                    {study
                        .metrics
                        .iter()
                        .map(|metric| {
                            view! {
                                <div>
                                    <dt>{metric.label}</dt>
                                    <dd>{metric.value}</dd>
                                </div>
                            }
                        })
                        .collect_view()}
                </dl>
                {study.body.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
                <a class="button button--primary" href="/become-host">"Become a host"</a>
            </article>
        }
        .into_any(),
        None => view! {
            <section class="case-study case-study--missing">
                <h1>"Case study not found"</h1>
                <a href="/case-studies">"See all case studies"</a>
            </section>
        }
        .into_any(),
    }
}
