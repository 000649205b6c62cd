//! Custom rules used by the request DTOs in [`crate::models`].
//!
//! Every rule reports through `validator`, so a request collects all of its
//! failures in one pass instead of stopping at the first.

use std::borrow::Cow;
use url::Url;
use validator::ValidationError;

/// Present and not just whitespace
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank")
            .with_message(Cow::Borrowed("'Name' must not be empty.")));
    }
    Ok(())
}

/// Absolute URL whose scheme is http or https
pub fn absolute_http_url(value: &str) -> Result<(), ValidationError> {
    let valid = Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false);

    if !valid {
        return Err(ValidationError::new("absolute_http_url").with_message(Cow::Borrowed(
            "'Image Url' must be a valid absolute http or https URL.",
        )));
    }
    Ok(())
}
