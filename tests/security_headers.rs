//! Header behaviour of the secure variant, and its absence in the insecure one.

use reqwest::header::HeaderMap;
use xss_demo::Variant;

mod common;

use common::{client, TestServer};

const EXPECTED: [(&str, &str); 11] = [
    (
        "content-security-policy",
        "default-src 'self'; script-src 'self'; style-src 'self'; img-src 'self' data:; \
         frame-ancestors 'none'; base-uri 'self'; object-src 'none'; form-action 'self'",
    ),
    ("x-frame-options", "DENY"),
    (
        "permissions-policy",
        "camera=(), microphone=(), geolocation=(self), fullscreen=(self), \
         clipboard-read=(), clipboard-write=()",
    ),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "no-referrer"),
    ("cross-origin-resource-policy", "same-origin"),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-embedder-policy", "require-corp"),
    ("server", "secure"),
    ("cache-control", "no-store"),
    ("pragma", "no-cache"),
];

fn assert_hardened(headers: &HeaderMap, context: &str) {
    for (name, value) in EXPECTED {
        let actual: Vec<_> = headers.get_all(name).iter().collect();
        assert_eq!(actual.len(), 1, "{context}: {name} should appear once");
        assert_eq!(actual[0], value, "{context}: {name}");
    }
}

#[tokio::test]
async fn every_secure_route_is_hardened() {
    let server = TestServer::start(Variant::Secure).await;

    for path in ["/", "/greet", "/greet?name=%3Cb%3E", "/health", "/does-not-exist"] {
        let res = client().get(server.url(path)).send().await.unwrap();
        assert_hardened(res.headers(), path);
    }

    server.stop().await;
}

#[tokio::test]
async fn non_get_requests_are_hardened_too() {
    let server = TestServer::start(Variant::Secure).await;

    let res = client().post(server.url("/greet")).send().await.unwrap();
    assert_eq!(res.status(), 405);
    assert_hardened(res.headers(), "POST /greet");

    server.stop().await;
}

#[tokio::test]
async fn health_returns_ok() {
    let server = TestServer::start(Variant::Secure).await;

    let res = client().get(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "ok");

    server.stop().await;
}

#[tokio::test]
async fn insecure_variant_sends_no_security_headers() {
    let server = TestServer::start(Variant::Insecure).await;

    for path in ["/", "/greet?name=x"] {
        let res = client().get(server.url(path)).send().await.unwrap();
        for (name, _) in EXPECTED {
            assert!(
                res.headers().get(name).is_none(),
                "{path}: unexpected {name}"
            );
        }
    }

    let res = client().get(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    server.stop().await;
}
