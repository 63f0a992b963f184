//! Razorpay webhook signature verification.
//!
//! Razorpay signs the exact raw request body with HMAC-SHA256 keyed by the
//! webhook secret and sends the lowercase hex digest in the
//! `X-Razorpay-Signature` header.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::WebhookError;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the body signature.
pub const SIGNATURE_HEADER: &str = "X-Razorpay-Signature";

/// Computes the lowercase hex HMAC-SHA256 of `body` keyed by `secret`.
pub fn compute_signature(secret: &[u8], body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key");
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

/// Returns true when `signature` is the HMAC-SHA256 of `body` under `secret`.
///
/// The comparison runs in constant time with respect to the signature content.
pub fn verify_signature(body: &[u8], signature: &str, secret: &str) -> bool {
    let expected = compute_signature(secret.as_bytes(), body);
    constant_time_compare(expected.as_bytes(), signature.as_bytes())
}

/// Verifier bound to a configured webhook secret.
///
/// Cannot be built from an empty secret: a missing secret is a
/// configuration error, not a failed verification.
#[derive(Clone)]
pub struct WebhookSignatureVerifier {
    secret: SecretString,
}

impl WebhookSignatureVerifier {
    /// Creates a verifier, rejecting an empty secret.
    pub fn new(secret: SecretString) -> Result<Self, WebhookError> {
        if secret.expose_secret().is_empty() {
            return Err(WebhookError::SecretNotConfigured);
        }
        Ok(Self { secret })
    }

    /// Creates a verifier from an optional configured secret.
    pub fn from_config(secret: Option<&SecretString>) -> Result<Self, WebhookError> {
        secret
            .cloned()
            .ok_or(WebhookError::SecretNotConfigured)
            .and_then(Self::new)
    }

    /// Signature this service expects for `body`.
    pub fn expected_signature(&self, body: &[u8]) -> String {
        compute_signature(self.secret.expose_secret().as_bytes(), body)
    }

    /// Checks a provided signature against the body.
    pub fn verify(&self, body: &[u8], signature: &str) -> bool {
        let expected = self.expected_signature(body);
        constant_time_compare(expected.as_bytes(), signature.as_bytes())
    }

    /// Like [`verify`](Self::verify), but a missing header counts as a mismatch.
    pub fn verify_header(&self, body: &[u8], signature: Option<&str>) -> Result<(), WebhookError> {
        match signature {
            Some(sig) if self.verify(body, sig) => Ok(()),
            _ => Err(WebhookError::InvalidSignature),
        }
    }
}

/// Performs constant-time comparison of two byte slices.
///
/// Length mismatch returns early; the length of a hex HMAC is public.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEST_SECRET: &str = "whsec_test_secret_12345";

    fn verifier() -> WebhookSignatureVerifier {
        WebhookSignatureVerifier::new(SecretString::new(TEST_SECRET.to_string())).unwrap()
    }

    // ══════════════════════════════════════════════════════════════
    // Signature Computation Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn computes_known_hmac_vector() {
        // RFC 4231 test case 2
        let sig = compute_signature(b"Jefe", b"what do ya want for nothing?");
        assert_eq!(
            sig,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn signature_is_lowercase_hex_of_32_bytes() {
        let sig = compute_signature(TEST_SECRET.as_bytes(), b"{}");
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    // ══════════════════════════════════════════════════════════════
    // Verification Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn verify_valid_signature() {
        let body = br#"{"event":"subscription.activated","payload":{}}"#;
        let sig = compute_signature(TEST_SECRET.as_bytes(), body);

        assert!(verifier().verify(body, &sig));
        assert!(verify_signature(body, &sig, TEST_SECRET));
    }

    #[test]
    fn verify_wrong_secret_fails() {
        let body = br#"{"event":"subscription.activated"}"#;
        let sig = compute_signature(b"another_secret", body);

        assert!(!verifier().verify(body, &sig));
    }

    #[test]
    fn verify_tampered_body_fails() {
        let original = br#"{"event":"subscription.activated"}"#;
        let tampered = br#"{"event":"subscription.cancelled"}"#;
        let sig = compute_signature(TEST_SECRET.as_bytes(), original);

        assert!(!verifier().verify(tampered, &sig));
    }

    #[test]
    fn verify_short_signature_fails() {
        assert!(!verifier().verify(b"{}", "deadbeef"));
    }

    #[test]
    fn verify_uppercase_hex_fails() {
        let body = b"{}";
        let sig = compute_signature(TEST_SECRET.as_bytes(), body).to_uppercase();
        assert!(!verifier().verify(body, &sig));
    }

    #[test]
    fn missing_header_is_invalid_signature() {
        let result = verifier().verify_header(b"{}", None);
        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn present_valid_header_passes() {
        let body = b"{}";
        let sig = verifier().expected_signature(body);
        assert!(verifier().verify_header(body, Some(&sig)).is_ok());
    }

    // ══════════════════════════════════════════════════════════════
    // Configuration Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn empty_secret_is_configuration_error() {
        let result = WebhookSignatureVerifier::new(SecretString::new(String::new()));
        assert!(matches!(result, Err(WebhookError::SecretNotConfigured)));
    }

    #[test]
    fn absent_secret_is_configuration_error() {
        let result = WebhookSignatureVerifier::from_config(None);
        assert!(matches!(result, Err(WebhookError::SecretNotConfigured)));
    }

    #[test]
    fn configured_secret_builds_verifier() {
        let secret = SecretString::new(TEST_SECRET.to_string());
        assert!(WebhookSignatureVerifier::from_config(Some(&secret)).is_ok());
    }

    // ══════════════════════════════════════════════════════════════
    // Constant Time Comparison Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn constant_time_compare_equal_values() {
        assert!(constant_time_compare(b"abc123", b"abc123"));
    }

    #[test]
    fn constant_time_compare_different_values() {
        assert!(!constant_time_compare(b"abc123", b"abc124"));
    }

    #[test]
    fn constant_time_compare_different_lengths() {
        assert!(!constant_time_compare(b"abc", b"abcd"));
    }

    // ══════════════════════════════════════════════════════════════
    // Properties
    // ══════════════════════════════════════════════════════════════

    proptest! {
        #[test]
        fn own_signature_always_verifies(
            body in proptest::collection::vec(any::<u8>(), 0..512),
            secret in "[a-zA-Z0-9_]{1,64}",
        ) {
            let sig = compute_signature(secret.as_bytes(), &body);
            prop_assert!(verify_signature(&body, &sig, &secret));
        }

        #[test]
        fn any_other_signature_is_rejected(
            body in proptest::collection::vec(any::<u8>(), 0..512),
            secret in "[a-zA-Z0-9_]{1,64}",
            tampered in "[0-9a-f]{0,64}",
        ) {
            let sig = compute_signature(secret.as_bytes(), &body);
            prop_assume!(tampered != sig);
            prop_assert!(!verify_signature(&body, &tampered, &secret));
        }
    }
}
