use std::net::SocketAddr;

use axum::http::HeaderMap;

use crate::iap_integration::domain::model::value_objects::request_identity::RequestIdentity;

/// Raw request metadata an identity is resolved from.
#[derive(Clone, Copy, Debug)]
pub struct IdentitySource<'a> {
    pub headers: &'a HeaderMap,
    pub form_email: Option<&'a str>,
    pub peer_addr: SocketAddr,
}

/// Resolves the claimed caller identity for a request.
///
/// Trust boundary: implementations take the identity header injected by the
/// authenticating proxy at face value. No signature or JWT assertion is
/// checked here, so the service must only be reachable through that proxy.
/// Extraction never fails; when nothing usable is present the configured
/// fallback identity is returned.
pub trait IdentityExtractor: Send + Sync {
    fn extract(&self, source: IdentitySource<'_>) -> RequestIdentity;
}
