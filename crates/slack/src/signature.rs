//! Slack request-signature verification.
//!
//! Slack signs each webhook call with HMAC-SHA256 over
//! `v0:<timestamp>:<raw body>` and sends the result in
//! `X-Slack-Signature` next to `X-Slack-Request-Timestamp`. Requests whose
//! timestamp falls outside the tolerance window are rejected before any
//! MAC computation.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_VERSION: &str = "v0";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("request timestamp is not a unix epoch value: `{0}`")]
    MalformedTimestamp(String),
    #[error("request timestamp outside tolerance window ({age_secs}s old, allowed {tolerance_secs}s)")]
    StaleTimestamp { age_secs: i64, tolerance_secs: i64 },
    #[error("signature header is not a `v0=<hex>` value")]
    MalformedSignature,
    #[error("signature does not match request body")]
    Mismatch,
}

#[derive(Clone)]
pub struct SignatureVerifier {
    signing_secret: SecretString,
    tolerance_secs: i64,
}

impl SignatureVerifier {
    pub fn new(signing_secret: SecretString, tolerance_secs: u64) -> Self {
        Self { signing_secret, tolerance_secs: tolerance_secs as i64 }
    }

    /// Compute the `v0=<hex>` signature for a timestamp/body pair. Used by
    /// tests and by clients that need to call a verifying endpoint.
    pub fn sign(&self, timestamp: i64, body: &str) -> String {
        let mut mac = match self.keyed_mac() {
            Ok(mac) => mac,
            // HMAC accepts keys of any length; unreachable in practice.
            Err(_) => return format!("{SIGNATURE_VERSION}="),
        };
        mac.update(base_string(timestamp, body).as_bytes());
        format!("{SIGNATURE_VERSION}={}", encode_hex(mac.finalize().into_bytes().as_slice()))
    }

    /// Verify one request. `now_epoch_secs` is passed in so the freshness
    /// window is testable without clock control.
    pub fn verify(
        &self,
        timestamp_header: &str,
        signature_header: &str,
        body: &str,
        now_epoch_secs: i64,
    ) -> Result<(), SignatureError> {
        let timestamp = timestamp_header
            .trim()
            .parse::<i64>()
            .map_err(|_| SignatureError::MalformedTimestamp(timestamp_header.to_string()))?;

        let age_secs = (now_epoch_secs - timestamp).abs();
        if age_secs > self.tolerance_secs {
            return Err(SignatureError::StaleTimestamp {
                age_secs,
                tolerance_secs: self.tolerance_secs,
            });
        }

        let encoded = signature_header
            .strip_prefix("v0=")
            .ok_or(SignatureError::MalformedSignature)?;
        let claimed = decode_hex(encoded).ok_or(SignatureError::MalformedSignature)?;

        let mut mac = self.keyed_mac().map_err(|_| SignatureError::Mismatch)?;
        mac.update(base_string(timestamp, body).as_bytes());
        // verify_slice is a constant-time comparison.
        mac.verify_slice(&claimed).map_err(|_| SignatureError::Mismatch)
    }

    fn keyed_mac(&self) -> Result<HmacSha256, hmac::digest::InvalidLength> {
        HmacSha256::new_from_slice(self.signing_secret.expose_secret().as_bytes())
    }
}

fn base_string(timestamp: i64, body: &str) -> String {
    format!("{SIGNATURE_VERSION}:{timestamp}:{body}")
}

fn encode_hex(bytes: &[u8]) -> String {
    let mut output = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        output.push_str(&format!("{byte:02x}"));
    }
    output
}

fn decode_hex(value: &str) -> Option<Vec<u8>> {
    let bytes = value.as_bytes();
    if bytes.len() % 2 != 0 {
        return None;
    }

    let mut decoded = Vec::with_capacity(bytes.len() / 2);
    for pair in bytes.chunks_exact(2) {
        let high = hex_nibble(pair[0])?;
        let low = hex_nibble(pair[1])?;
        decoded.push((high << 4) | low);
    }
    Some(decoded)
}

fn hex_nibble(value: u8) -> Option<u8> {
    match value {
        b'0'..=b'9' => Some(value - b'0'),
        b'a'..=b'f' => Some(value - b'a' + 10),
        b'A'..=b'F' => Some(value - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{SignatureError, SignatureVerifier};

    const BODY: &str = "token=abc&team_id=T1&text=%22Acme%20Co%22";
    const NOW: i64 = 1_700_000_000;

    fn verifier() -> SignatureVerifier {
        SignatureVerifier::new("8f742231b10e8888abcd99yyyzzz85a5".to_string().into(), 300)
    }

    #[test]
    fn round_trip_signature_verifies() {
        let verifier = verifier();
        let signature = verifier.sign(NOW, BODY);

        assert!(verifier.verify(&NOW.to_string(), &signature, BODY, NOW).is_ok());
    }

    #[test]
    fn tampered_body_is_rejected() {
        let verifier = verifier();
        let signature = verifier.sign(NOW, BODY);

        let result = verifier.verify(&NOW.to_string(), &signature, "text=tampered", NOW);
        assert_eq!(result, Err(SignatureError::Mismatch));
    }

    #[test]
    fn stale_timestamp_is_rejected_even_with_valid_signature() {
        let verifier = verifier();
        let stale = NOW - 301;
        let signature = verifier.sign(stale, BODY);

        let result = verifier.verify(&stale.to_string(), &signature, BODY, NOW);
        assert!(matches!(result, Err(SignatureError::StaleTimestamp { age_secs: 301, .. })));
    }

    #[test]
    fn timestamp_at_window_edge_is_accepted() {
        let verifier = verifier();
        let edge = NOW - 300;
        let signature = verifier.sign(edge, BODY);

        assert!(verifier.verify(&edge.to_string(), &signature, BODY, NOW).is_ok());
    }

    #[test]
    fn future_timestamps_are_held_to_the_same_window() {
        let verifier = verifier();
        let future = NOW + 400;
        let signature = verifier.sign(future, BODY);

        assert!(matches!(
            verifier.verify(&future.to_string(), &signature, BODY, NOW),
            Err(SignatureError::StaleTimestamp { .. })
        ));
    }

    #[test]
    fn malformed_headers_are_rejected() {
        let verifier = verifier();

        assert!(matches!(
            verifier.verify("not-a-number", "v0=00", BODY, NOW),
            Err(SignatureError::MalformedTimestamp(_))
        ));
        assert_eq!(
            verifier.verify(&NOW.to_string(), "sha256=deadbeef", BODY, NOW),
            Err(SignatureError::MalformedSignature)
        );
        assert_eq!(
            verifier.verify(&NOW.to_string(), "v0=not-hex!", BODY, NOW),
            Err(SignatureError::MalformedSignature)
        );
    }

    #[test]
    fn signature_from_wrong_secret_is_rejected() {
        let verifier = verifier();
        let other = SignatureVerifier::new("different-secret".to_string().into(), 300);
        let signature = other.sign(NOW, BODY);

        assert_eq!(
            verifier.verify(&NOW.to_string(), &signature, BODY, NOW),
            Err(SignatureError::Mismatch)
        );
    }
}
