//! Security response headers.
//!
//! # Responsibilities
//! - Hold the fixed set of hardening headers sent by the secure variant
//! - Apply the set to a response header map, overwriting prior values
//!
//! # Design Decisions
//! - Built once at startup and shared read-only (`Arc`) with the middleware
//! - Values are static literals; nothing here is configurable at runtime
//! - `Strict-Transport-Security` is omitted: the servers speak plain HTTP

use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};

/// Resource origins allowed by the page. No inline script.
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    script-src 'self'; \
    style-src 'self'; \
    img-src 'self' data:; \
    frame-ancestors 'none'; \
    base-uri 'self'; \
    object-src 'none'; \
    form-action 'self'";

/// Browser capabilities the page never needs.
pub const PERMISSIONS_POLICY: &str = "camera=(), microphone=(), geolocation=(self), \
    fullscreen=(self), clipboard-read=(), clipboard-write=()";

/// Replaces the framework banner.
pub const SERVER_BANNER: &str = "secure";

const PERMISSIONS_POLICY_NAME: HeaderName = HeaderName::from_static("permissions-policy");
const CROSS_ORIGIN_RESOURCE_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-resource-policy");
const CROSS_ORIGIN_OPENER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-opener-policy");
const CROSS_ORIGIN_EMBEDDER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-embedder-policy");

/// Immutable table of headers stamped onto every secure response.
#[derive(Debug, Clone)]
pub struct SecurityHeaders {
    entries: Vec<(HeaderName, HeaderValue)>,
}

impl SecurityHeaders {
    /// The hardened header set.
    pub fn hardened() -> Self {
        let entries = vec![
            (
                header::CONTENT_SECURITY_POLICY,
                HeaderValue::from_static(CONTENT_SECURITY_POLICY),
            ),
            // Legacy clickjacking defense; frame-ancestors covers modern browsers.
            (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
            (
                PERMISSIONS_POLICY_NAME,
                HeaderValue::from_static(PERMISSIONS_POLICY),
            ),
            (
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ),
            (
                header::REFERRER_POLICY,
                HeaderValue::from_static("no-referrer"),
            ),
            (
                CROSS_ORIGIN_RESOURCE_POLICY,
                HeaderValue::from_static("same-origin"),
            ),
            (
                CROSS_ORIGIN_OPENER_POLICY,
                HeaderValue::from_static("same-origin"),
            ),
            (
                CROSS_ORIGIN_EMBEDDER_POLICY,
                HeaderValue::from_static("require-corp"),
            ),
            (header::SERVER, HeaderValue::from_static(SERVER_BANNER)),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
            (header::PRAGMA, HeaderValue::from_static("no-cache")),
        ];
        Self { entries }
    }

    /// Insert every header into `headers`, replacing any existing value.
    pub fn apply(&self, headers: &mut HeaderMap) {
        for (name, value) in &self.entries {
            headers.insert(name.clone(), value.clone());
        }
    }

    /// Iterate over the table in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.entries.iter().map(|(name, value)| (name, value))
    }
}
