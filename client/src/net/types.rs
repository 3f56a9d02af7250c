//! Request/response DTOs for the booking backend.
//!
//! DESIGN
//! ======
//! Field names match the backend's JSON exactly so serde needs no renames
//! beyond enum casing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account as returned by the backend after login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// `guest`, `host`, or `admin`.
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "guest".to_owned()
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

/// Kind of property offered in a host application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    #[default]
    Apartment,
    House,
    Villa,
    Cabin,
    GuestRoom,
}

impl PropertyType {
    pub const ALL: [Self; 5] = [Self::Apartment, Self::House, Self::Villa, Self::Cabin, Self::GuestRoom];

    /// Wire value, also used as the `<option>` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
            Self::Villa => "villa",
            Self::Cabin => "cabin",
            Self::GuestRoom => "guest_room",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Villa => "Villa",
            Self::Cabin => "Cabin",
            Self::GuestRoom => "Guest room",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

/// `POST /hosts/applications` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HostApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub property_type: PropertyType,
    pub listing_count: u32,
    /// Canonical `YYYY-MM-DD`.
    pub available_from: String,
}

/// Coarse visitor location forwarded with each visit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GeoLocation {
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
}

/// Geo-IP lookup response (ipapi.co layout). `country` there is the ISO
/// code, so the readable `country_name` is what gets forwarded.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GeoLookup {
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl From<GeoLookup> for GeoLocation {
    fn from(lookup: GeoLookup) -> Self {
        Self { country: lookup.country_name, region: lookup.region, city: lookup.city }
    }
}

/// `POST /analytics/visits` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VisitPayload {
    pub path: String,
    pub referrer: Option<String>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    /// `WIDTHxHEIGHT` in CSS pixels.
    pub screen: Option<String>,
    #[serde(flatten)]
    pub location: GeoLocation,
}
