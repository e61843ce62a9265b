use log::{debug, warn};
use web_sys::window;

use crate::config;

/// Deep link into the messaging service with the greeting pre-filled.
pub fn chat_url(phone: &str, message: &str) -> String {
    format!(
        "https://{}/{}?text={}",
        config::MESSAGING_DOMAIN,
        phone,
        urlencoding::encode(message)
    )
}

pub fn contact_url() -> String {
    chat_url(config::CONTACT_PHONE, config::CONTACT_GREETING)
}

/// Opens the contact chat in a new tab. Blocked pop-ups are logged and otherwise ignored.
pub fn open_contact() {
    let url = contact_url();
    let Some(window) = window() else {
        warn!("No window available, cannot open {}", url);
        return;
    };
    match window.open_with_url_and_target(&url, "_blank") {
        Ok(Some(_)) => debug!("Opened contact chat"),
        Ok(None) => warn!("Contact chat pop-up was blocked"),
        Err(e) => warn!("Failed to open contact chat: {:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_url_targets_fixed_number() {
        let url = contact_url();
        assert!(url.starts_with("https://wa.me/9896225019?text="));
    }

    #[test]
    fn greeting_survives_round_trip_through_query() {
        let url = contact_url();
        let (_, query) = url.split_once("?text=").unwrap();
        assert!(!query.contains(' '));
        assert!(!query.contains('\''));
        let decoded = urlencoding::decode(query).unwrap();
        assert_eq!(decoded, "Hello, I'm interested in ComplySphere's services.");
    }

    #[test]
    fn chat_url_escapes_reserved_characters() {
        let url = chat_url("123", "a&b=c?");
        assert_eq!(url, "https://wa.me/123?text=a%26b%3Dc%3F");
    }
}
