use super::*;

#[test]
fn number_is_reduced_to_digits() {
    assert_eq!(
        whatsapp_link("+351 912-345-678", ""),
        Some("https://wa.me/351912345678".to_owned())
    );
}

#[test]
fn message_is_url_encoded() {
    assert_eq!(
        whatsapp_link("351912345678", "Hi! Can I list 2 flats?"),
        Some("https://wa.me/351912345678?text=Hi%21%20Can%20I%20list%202%20flats%3F".to_owned())
    );
}

#[test]
fn no_digits_hides_the_bubble() {
    assert_eq!(whatsapp_link("", "hello"), None);
    assert_eq!(whatsapp_link("call us", "hello"), None);
}
