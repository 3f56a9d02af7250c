//! Input checks for the account and host forms.
//!
//! Each validator returns the cleaned values or one fixed message for the
//! first problem found; the page shows it inline and sends nothing.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use calendar::{NaiveDate, parse_canonical};

use crate::net::types::{HostApplication, PropertyType};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_PHONE_DIGITS: usize = 7;

pub const EMAIL_REQUIRED: &str = "Enter your email address.";
pub const EMAIL_INVALID: &str = "Enter a valid email address.";
pub const PASSWORD_REQUIRED: &str = "Enter your password.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const TOKEN_MISSING: &str = "This reset link is incomplete. Request a new one.";
pub const NAME_REQUIRED: &str = "Enter your full name.";
pub const PHONE_INVALID: &str = "Enter a phone number with at least 7 digits.";
pub const CITY_REQUIRED: &str = "Enter the city your property is in.";
pub const PROPERTY_TYPE_INVALID: &str = "Choose a property type.";
pub const LISTING_COUNT_INVALID: &str = "Enter how many listings you have (at least 1).";
pub const AVAILABLE_FROM_REQUIRED: &str = "Choose the date your property is available from.";
pub const AVAILABLE_FROM_PAST: &str = "The available-from date cannot be in the past.";

/// Trimmed email with exactly one `@` between non-empty parts.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    let mut parts = email.split('@');
    let shaped = matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty()
    );
    if !shaped || email.chars().any(char::is_whitespace) {
        return Err(EMAIL_INVALID);
    }
    Ok(email.to_owned())
}

/// Email and password for `POST /auth/login`. The password is sent as typed.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = validate_email(email)?;
    if password.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    Ok((email, password.to_owned()))
}

/// Token and new password for `POST /auth/reset-password`.
pub fn validate_reset(token: Option<&str>, password: &str, confirm: &str) -> Result<(String, String), &'static str> {
    let token = token.map(str::trim).filter(|t| !t.is_empty()).ok_or(TOKEN_MISSING)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok((token.to_owned(), password.to_owned()))
}

/// Raw field values of the become-host form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub property_type: String,
    pub listing_count: String,
    pub available_from: String,
}

fn required(raw: &str, message: &'static str) -> Result<String, &'static str> {
    let value = raw.trim();
    if value.is_empty() { Err(message) } else { Ok(value.to_owned()) }
}

/// Checks the form against `today` and builds the request body.
pub fn validate_host_application(form: &HostForm, today: NaiveDate) -> Result<HostApplication, &'static str> {
    let full_name = required(&form.full_name, NAME_REQUIRED)?;
    let email = validate_email(&form.email)?;
    let phone = form.phone.trim();
    if phone.chars().filter(char::is_ascii_digit).count() < MIN_PHONE_DIGITS {
        return Err(PHONE_INVALID);
    }
    let city = required(&form.city, CITY_REQUIRED)?;
    let property_type = PropertyType::parse(form.property_type.trim()).ok_or(PROPERTY_TYPE_INVALID)?;
    let listing_count = form
        .listing_count
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n >= 1)
        .ok_or(LISTING_COUNT_INVALID)?;
    let available = parse_canonical(&form.available_from).map_err(|_| AVAILABLE_FROM_REQUIRED)?;
    if available < today {
        return Err(AVAILABLE_FROM_PAST);
    }

    Ok(HostApplication {
        full_name,
        email,
        phone: phone.to_owned(),
        city,
        property_type,
        listing_count,
        available_from: calendar::format_canonical(available),
    })
}
