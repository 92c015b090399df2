use log::Level;

pub const BRAND: &str = "Aqqrue";
pub const CONTACT_EMAIL: &str = "hello@aqqrue.com";
pub const RESPONSE_TIME: &str = "5 minutes";

/// Elements count as seen once they are this far inside the viewport.
pub const REVEAL_MARGIN: &str = "-100px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn consultation_link() -> String {
    format!(
        "mailto:{}?subject={}",
        CONTACT_EMAIL,
        urlencoding::encode("Book a consultation")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consultation_link_is_encoded() {
        assert_eq!(
            consultation_link(),
            "mailto:hello@aqqrue.com?subject=Book%20a%20consultation"
        );
    }
}
