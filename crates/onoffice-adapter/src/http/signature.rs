/*
[INPUT]:  Timestamp, token, resource type, action id and API secret
[OUTPUT]: Base64-encoded HMAC2 signature for an action
[POS]:    HTTP layer - request signing for every API action
[UPDATE]: When changing signing algorithm or message layout
*/

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::client::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// Compute the HMAC2 signature of a single action.
///
/// Message: "{timestamp}{token}{resource_type}{action_id}" with no
/// delimiter, keyed with the API secret. Returns the standard base64
/// encoding of the raw digest.
pub fn create_hmac2(
    timestamp: i64,
    token: &str,
    resource_type: &str,
    action_id: &str,
    secret: &str,
) -> String {
    let message = format!("{timestamp}{token}{resource_type}{action_id}");
    // HMAC takes keys of any length, including empty ones.
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(message.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// Signs actions with a fixed set of credentials
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    /// Create a new request signer for the given credentials
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn token(&self) -> &str {
        self.credentials.token()
    }

    /// Sign one action at the given timestamp
    pub fn sign(&self, timestamp: i64, resource_type: &str, action_id: &str) -> String {
        create_hmac2(
            timestamp,
            self.credentials.token(),
            resource_type,
            action_id,
            self.credentials.secret(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const READ: &str = "urn:onoffice-de-ns:smart:2.5:smartml:action:read";

    #[test]
    fn test_matches_reference_digest() {
        // Reference values computed independently with HMAC-SHA256 + base64.
        let sig = create_hmac2(1_700_000_000, "test_token", "estate", READ, "test_secret");
        assert_eq!(sig, "PEJkIzZy7LGX7LZZ/ETsvNDRuGXRKe6lkfomG6hVCS4=");

        let sig = create_hmac2(1_700_000_000, "test_token", "address", READ, "test_secret");
        assert_eq!(sig, "qpvE6mYhpkq6zzx3q7y+vF8ZMqRr38/jYCx5AhI+Lo8=");
    }

    #[test]
    fn test_empty_key_is_accepted() {
        let sig = create_hmac2(1, "", "", "", "");
        assert_eq!(sig, "QeCpRI+R7bpLBcbC/A7bHWQYqikrWylCY3vsQ6KblSM=");
    }

    #[test]
    fn test_sign_is_deterministic() {
        let signer = RequestSigner::new(Credentials::new("test_token", "test_secret").unwrap());
        let first = signer.sign(1_700_000_000, "estate", READ);
        let second = signer.sign(1_700_000_000, "estate", READ);
        assert_eq!(first, second);

        let decoded = BASE64.decode(&first).unwrap();
        assert_eq!(decoded.len(), 32);
    }

    #[rstest]
    #[case(1_700_000_001, "test_token", "estate", READ, "test_secret")]
    #[case(1_700_000_000, "other_token", "estate", READ, "test_secret")]
    #[case(1_700_000_000, "test_token", "address", READ, "test_secret")]
    #[case(
        1_700_000_000,
        "test_token",
        "estate",
        "urn:onoffice-de-ns:smart:2.5:smartml:action:create",
        "test_secret"
    )]
    #[case(1_700_000_000, "test_token", "estate", READ, "other_secret")]
    fn test_any_field_changes_signature(
        #[case] timestamp: i64,
        #[case] token: &str,
        #[case] resource_type: &str,
        #[case] action_id: &str,
        #[case] secret: &str,
    ) {
        let baseline = create_hmac2(1_700_000_000, "test_token", "estate", READ, "test_secret");
        let changed = create_hmac2(timestamp, token, resource_type, action_id, secret);
        assert_ne!(baseline, changed);
    }
}
