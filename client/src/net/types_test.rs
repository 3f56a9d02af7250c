use super::*;
use serde_json::json;

#[test]
fn user_role_defaults_to_guest() {
    let user: User = serde_json::from_value(json!({ "id": "u1", "name": "Ana", "email": "ana@example.com" })).unwrap();
    assert_eq!(user.role, "guest");
}

#[test]
fn login_response_reads_token_and_user() {
    let resp: LoginResponse = serde_json::from_value(json!({
        "token": "tok-1",
        "user": { "id": "u1", "name": "Ana", "email": "ana@example.com", "role": "host" }
    }))
    .unwrap();
    assert_eq!(resp.token, "tok-1");
    assert_eq!(resp.user.role, "host");
}

#[test]
fn property_type_serializes_snake_case() {
    assert_eq!(serde_json::to_value(PropertyType::GuestRoom).unwrap(), json!("guest_room"));
}

#[test]
fn property_type_parse_matches_as_str() {
    for kind in PropertyType::ALL {
        assert_eq!(PropertyType::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(PropertyType::parse("castle"), None);
}

#[test]
fn host_application_wire_shape() {
    let app = HostApplication {
        full_name: "Ana Lima".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: "+55 11 5555 0100".to_owned(),
        city: "Lisbon".to_owned(),
        property_type: PropertyType::Villa,
        listing_count: 2,
        available_from: "2025-04-01".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&app).unwrap(),
        json!({
            "full_name": "Ana Lima",
            "email": "ana@example.com",
            "phone": "+55 11 5555 0100",
            "city": "Lisbon",
            "property_type": "villa",
            "listing_count": 2,
            "available_from": "2025-04-01"
        })
    );
}

#[test]
fn geo_lookup_forwards_readable_country_name() {
    let lookup: GeoLookup = serde_json::from_value(json!({
        "ip": "203.0.113.9",
        "country": "PT",
        "country_name": "Portugal",
        "region": "Lisbon",
        "city": "Lisbon"
    }))
    .unwrap();
    let geo = GeoLocation::from(lookup);
    assert_eq!(geo.country.as_deref(), Some("Portugal"));
    assert_eq!(geo.city.as_deref(), Some("Lisbon"));
}

#[test]
fn visit_payload_flattens_location() {
    let payload = VisitPayload {
        path: "/about".to_owned(),
        referrer: None,
        language: Some("en-US".to_owned()),
        timezone: Some("Europe/Lisbon".to_owned()),
        screen: Some("1440x900".to_owned()),
        location: GeoLocation { country: Some("Portugal".to_owned()), region: None, city: None },
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["path"], "/about");
    assert_eq!(value["country"], "Portugal");
    assert!(value.get("location").is_none());
}
