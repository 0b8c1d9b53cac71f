//! Shared-secret request signing.
//!
//! Each call is authorized by a millisecond timestamp plus an HMAC-SHA256
//! signature over `"{timestamp}\n{secret}"`, keyed with the same secret and
//! base64-encoded. The endpoint rejects timestamps outside its tolerance
//! window, so a signature is computed fresh right before the request goes
//! out and never reused.

use base64::{Engine as _, engine::general_purpose::STANDARD as B64};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use time::OffsetDateTime;

type HmacSha256 = Hmac<Sha256>;

/// A per-request authorization pair. Ephemeral: built, sent, dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Milliseconds since the Unix epoch, rendered base-10.
    pub timestamp: String,
    /// Base64 of HMAC-SHA256 over `"{timestamp}\n{secret}"`.
    pub sign: String,
}

/// Signs with the current wall clock.
pub fn sign(secret: &str) -> Signature {
    let now_ms = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    sign_at(secret, now_ms as i64)
}

/// Signs for a fixed timestamp. Deterministic for a fixed
/// `(secret, timestamp_ms)` pair.
pub fn sign_at(secret: &str, timestamp_ms: i64) -> Signature {
    let timestamp = timestamp_ms.to_string();
    let base_string = format!("{timestamp}\n{secret}");
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(base_string.as_bytes());
    let sign = B64.encode(mac.finalize().into_bytes());
    Signature { timestamp, sign }
}
