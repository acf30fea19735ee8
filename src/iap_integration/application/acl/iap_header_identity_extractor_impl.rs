use axum::http::HeaderMap;

use crate::iap_integration::{
    domain::model::value_objects::request_identity::RequestIdentity,
    interfaces::acl::identity_extractor::{IdentityExtractor, IdentitySource},
};

pub const IAP_USER_EMAIL_HEADER: &str = "x-goog-authenticated-user-email";
pub const TEST_EMAIL_HEADER: &str = "x-test-email";
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

pub struct IapHeaderIdentityExtractorImpl {
    fallback_email: String,
}

impl IapHeaderIdentityExtractorImpl {
    pub fn new(fallback_email: String) -> Self {
        Self { fallback_email }
    }

    /// `accounts.google.com:alice@example.com` -> `alice@example.com`.
    /// Only the second `:` segment is used; a header without a separator
    /// counts as absent.
    fn email_from_iap_header(headers: &HeaderMap) -> Option<String> {
        let raw = header_value(headers, IAP_USER_EMAIL_HEADER)?;
        raw.split(':')
            .nth(1)
            .filter(|email| !email.is_empty())
            .map(str::to_string)
    }

    fn resolve_email(&self, source: &IdentitySource<'_>) -> String {
        Self::email_from_iap_header(source.headers)
            .or_else(|| {
                source
                    .form_email
                    .filter(|email| !email.is_empty())
                    .map(str::to_string)
            })
            .or_else(|| header_value(source.headers, TEST_EMAIL_HEADER).map(str::to_string))
            .unwrap_or_else(|| self.fallback_email.clone())
    }

    fn resolve_ip(source: &IdentitySource<'_>) -> String {
        header_value(source.headers, FORWARDED_FOR_HEADER)
            .and_then(|forwarded| forwarded.split(',').next())
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| source.peer_addr.ip().to_string())
    }
}

impl IdentityExtractor for IapHeaderIdentityExtractorImpl {
    fn extract(&self, source: IdentitySource<'_>) -> RequestIdentity {
        RequestIdentity::new(self.resolve_email(&source), Self::resolve_ip(&source))
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}
