//! Access guards: the admin Basic-Auth check and the player token
//! extractor.
//!
//! Two very different trust models share this module. Players carry an
//! unguessable 128-bit token in the URL path; possession is proof, so
//! a plain map lookup suffices. The admin secret is operator-chosen and
//! possibly short, so its comparison must not leak anything through
//! timing: not where the first wrong byte sits, and not the secret's
//! length.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::RequestPartsExt;
use base64::prelude::*;
use flotilla_registry::{GameCode, PlayerToken, RegistryError, Slot};
use rand::Rng;
use subtle::ConstantTimeEq;

use crate::{AppError, AppState};

// ---------------------------------------------------------------------------
// AdminGuard
// ---------------------------------------------------------------------------

/// Validates `Authorization: Basic` credentials for the /admin routes.
///
/// The expected value is precomputed as `base64("admin:<secret>")` so
/// that incoming headers are compared in their encoded form: the
/// comparison never touches the raw password, and the encoding step
/// can't leak the secret's length into the request path.
pub struct AdminGuard {
    expected: Vec<u8>,
}

impl AdminGuard {
    /// Builds a guard for the given secret. The admin username is
    /// fixed to `admin`.
    pub fn new(secret: &str) -> Self {
        let expected = BASE64_STANDARD
            .encode(format!("admin:{secret}"))
            .into_bytes();
        Self { expected }
    }

    /// Generates a fresh secret for operators who didn't supply one.
    /// The caller prints it exactly once; it is never stored anywhere
    /// else.
    pub fn generate_secret() -> String {
        let bytes: [u8; 12] = rand::rng().random();
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Checks a raw `Authorization` header value.
    ///
    /// A missing header, a non-Basic scheme, and a wrong credential all
    /// take the same comparison path: the supplied portion (possibly
    /// empty) is padded against the expected value and compared in
    /// fixed time.
    pub fn verify(&self, authorization: Option<&str>) -> bool {
        let supplied = authorization
            .and_then(|value| value.strip_prefix("Basic "))
            .unwrap_or("");
        fixed_time_eq(supplied.as_bytes(), &self.expected)
    }
}

/// Equality over byte strings whose cost depends only on the longer
/// length, never on content.
///
/// Both inputs are copied into zero-padded buffers of equal size before
/// the constant-time comparison, and the length check is folded in with
/// `&` rather than `&&` so it can't short-circuit.
fn fixed_time_eq(a: &[u8], b: &[u8]) -> bool {
    let len = a.len().max(b.len()).max(1);
    let mut padded_a = vec![0u8; len];
    let mut padded_b = vec![0u8; len];
    padded_a[..a.len()].copy_from_slice(a);
    padded_b[..b.len()].copy_from_slice(b);

    let bytes_equal = padded_a.ct_eq(&padded_b);
    let lengths_equal = (a.len() as u64).ct_eq(&(b.len() as u64));
    bool::from(bytes_equal & lengths_equal)
}

// ---------------------------------------------------------------------------
// RequireAdmin extractor
// ---------------------------------------------------------------------------

/// Extractor that rejects the request with a Basic-Auth challenge
/// unless valid admin credentials are present.
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        if state.admin.verify(header) {
            return Ok(Self);
        }

        // The two failure modes may differ in message text, but both
        // have already gone through the same fixed-cost comparison.
        let message = if header.is_none() {
            "credentials required"
        } else {
            "bad credentials"
        };
        Err((
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Basic realm=\"flotilla\"")],
            message,
        )
            .into_response())
    }
}

// ---------------------------------------------------------------------------
// AuthedPlayer extractor
// ---------------------------------------------------------------------------

/// Extractor for the `/api/{token}/...` routes: resolves the path
/// token to the caller's game and slot, refreshing the game's activity
/// timestamp on the way.
///
/// Any request with a token the registry doesn't know gets a 401
/// before the handler runs.
#[derive(Debug, Clone)]
pub struct AuthedPlayer {
    pub code: GameCode,
    pub slot: Slot,
}

impl FromRequestParts<AppState> for AuthedPlayer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(params) = parts
            .extract::<Path<HashMap<String, String>>>()
            .await
            .map_err(|_| RegistryError::Unauthorized)?;
        let token = params
            .get("token")
            .cloned()
            .ok_or(RegistryError::Unauthorized)?;

        let (code, slot) = state
            .registry
            .lock()
            .await
            .resolve_token(&PlayerToken(token))?;

        Ok(Self { code, slot })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic(user: &str, pass: &str) -> String {
        format!("Basic {}", BASE64_STANDARD.encode(format!("{user}:{pass}")))
    }

    #[test]
    fn test_verify_accepts_correct_credentials() {
        let guard = AdminGuard::new("hunter2");
        assert!(guard.verify(Some(&basic("admin", "hunter2"))));
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let guard = AdminGuard::new("hunter2");
        assert!(!guard.verify(Some(&basic("admin", "hunter3"))));
    }

    #[test]
    fn test_verify_rejects_wrong_user() {
        let guard = AdminGuard::new("hunter2");
        assert!(!guard.verify(Some(&basic("root", "hunter2"))));
    }

    #[test]
    fn test_verify_rejects_missing_header_and_wrong_scheme() {
        let guard = AdminGuard::new("hunter2");
        assert!(!guard.verify(None));
        assert!(!guard.verify(Some("Bearer hunter2")));
        assert!(!guard.verify(Some("")));
    }

    #[test]
    fn test_verify_rejects_length_mismatch() {
        let guard = AdminGuard::new("hunter2");
        assert!(!guard.verify(Some(&basic("admin", "hunter2hunter2"))));
        assert!(!guard.verify(Some(&basic("admin", ""))));
    }

    #[test]
    fn test_fixed_time_eq_matches_plain_equality() {
        // The fixed-cost path must agree with == on every combination,
        // including empty inputs and differing lengths.
        let cases: &[&[u8]] = &[b"", b"a", b"ab", b"abc", b"abd", b"abcd"];
        for a in cases {
            for b in cases {
                assert_eq!(fixed_time_eq(a, b), a == b, "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_fixed_time_eq_ignores_mismatch_position() {
        // Structural property: the comparison always walks padded
        // buffers of the same length, so inputs differing at the first
        // byte and at the last byte take the identical code path. Here
        // we just pin the verdicts.
        let secret = b"0123456789abcdef";
        assert!(!fixed_time_eq(b"X123456789abcdef", secret));
        assert!(!fixed_time_eq(b"0123456789abcdeX", secret));
        assert!(fixed_time_eq(secret, secret));
    }

    #[test]
    fn test_generate_secret_is_24_hex_chars() {
        let secret = AdminGuard::generate_secret();
        assert_eq!(secret.len(), 24);
        assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(secret, AdminGuard::generate_secret());
    }
}
