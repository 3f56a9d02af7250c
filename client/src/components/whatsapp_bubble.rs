//! WhatsApp contact bubble pinned to the corner of every page.

#[cfg(test)]
#[path = "whatsapp_bubble_test.rs"]
mod whatsapp_bubble_test;

use leptos::prelude::*;

use crate::config::SiteConfig;

/// `https://wa.me/<digits>?text=<message>`, or `None` when the number has
/// no digits.
pub fn whatsapp_link(number: &str, message: &str) -> Option<String> {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let message = message.trim();
    if message.is_empty() {
        return Some(format!("https://wa.me/{digits}"));
    }
    Some(format!("https://wa.me/{digits}?text={}", urlencoding::encode(message)))
}

#[component]
pub fn WhatsAppBubble() -> impl IntoView {
    let config = SiteConfig::current();
    whatsapp_link(&config.whatsapp_number, &config.whatsapp_message).map(|href| {
        view! {
            <a
                class="whatsapp-bubble"
                href=href
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Chat with us on WhatsApp"
            >
                <span class="whatsapp-bubble__icon" aria-hidden="true"></span>
            </a>
        }
    })
}
