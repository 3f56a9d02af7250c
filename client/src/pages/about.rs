//! About page.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About · Staylane"/>
        <section class="about-page">
            <h1>"About Staylane"</h1>
            <p>
                "Staylane started in 2021 when two former hotel operators in Porto got tired of watching "
                "good homes sit empty between long lets. We built the tools we wished hosts had: one "
                "calendar, honest pricing and a local team that answers the phone."
            </p>
            <p>
                "Today we look after homes across Portugal and Spain, from studio flats to hillside "
                "cabins. Hosts keep control of their calendar; we handle listing, guest screening, "
                "cleaning and check-in."
            </p>
            <h2>"What we believe"</h2>
            <ul>
                <li>"Guests should only ever be offered dates that are actually free."</li>
                <li>"Hosts should see every fee before they sign."</li>
                <li>"Neighbours matter as much as guests."</li>
            </ul>
            <a class="button button--primary" href="/become-host">"List your property"</a>
        </section>
    }
}
