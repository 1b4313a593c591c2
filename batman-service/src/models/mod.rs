pub mod batmobile;
pub mod gadget;

pub use batmobile::{Batmobile, BATMOBILE_COLLECTION};
pub use gadget::{Gadget, GADGET_COLLECTION};

use url::Url;
use validator::ValidationError;

/// Accepts absolute `http`/`https` URLs that name a host.
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    let valid = Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
        .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        let mut error = ValidationError::new("http_url");
        error.message = Some("image_url must be an http or https URL with a host".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_urls() {
        assert!(validate_http_url("http://example.com/batarang.jpg").is_ok());
        assert!(validate_http_url("https://img.example.com:8443/a.png?size=2").is_ok());
    }

    #[test]
    fn rejects_other_schemes_and_relative_urls() {
        for value in [
            "not-a-url",
            "ftp://example.com/x.png",
            "javascript:alert(1)",
            "mailto:bruce@wayne.com",
            "foo:bar",
            "/images/tumbler.png",
        ] {
            assert!(validate_http_url(value).is_err(), "{} was accepted", value);
        }
    }
}
