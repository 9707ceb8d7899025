use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::json;
use time::OffsetDateTime;
use tracing::debug;

use crate::auth::claims::Claims;
use crate::config::TokenConfig;

/// Outcome of decoding a session token.
///
/// A sum type rather than an error so callers (and tests) can tell "decoded
/// fine, signature never looked at" apart from "structurally broken".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenOutcome {
    Valid(Claims),
    Expired,
    Malformed,
}

impl TokenOutcome {
    pub fn valid(self) -> Option<Claims> {
        match self {
            TokenOutcome::Valid(claims) => Some(claims),
            _ => None,
        }
    }
}

/// Builds and decodes the three-segment session tokens.
///
/// The signature segment is a fixed label wrapped around the shared secret,
/// not a MAC over the other two segments, and `parse` never reads it back.
/// Holding any structurally complete token is as good as holding an issued
/// one; the training exercises depend on exactly that.
#[derive(Clone)]
pub struct TokenCodec {
    secret: String,
    ttl_secs: i64,
}

impl TokenCodec {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            ttl_secs: config.ttl_hours * 3600,
        }
    }

    /// The shared secret, as leaked by the system-info payload.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Issue a token for an identity, valid for the configured window from
    /// now. Never fails.
    pub fn issue(&self, id: u64, username: &str, role: &str) -> String {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            id,
            username: username.to_string(),
            role: role.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        self.issue_claims(&claims)
    }

    /// Issue a token carrying exactly `claims`, trusted as given. This is
    /// also the fake-token factory the demos use.
    pub fn issue_claims(&self, claims: &Claims) -> String {
        let header = BASE64.encode(json!({ "alg": "HS256", "typ": "JWT" }).to_string());
        let payload = BASE64.encode(
            json!({
                "id": claims.id,
                "username": claims.username,
                "role": claims.role,
                "iat": claims.iat,
                "exp": claims.exp,
            })
            .to_string(),
        );
        let signature = BASE64.encode(format!("signature_with_{}", self.secret));
        debug!(id = claims.id, role = %claims.role, "token issued");
        format!("{header}.{payload}.{signature}")
    }

    /// Decode a token. Checks segment shape and expiry, nothing else: the
    /// signature segment is accepted as-is without being recomputed.
    pub fn parse(&self, token: &str) -> TokenOutcome {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return TokenOutcome::Malformed;
        }
        let payload = match BASE64.decode(parts[1]) {
            Ok(bytes) => bytes,
            Err(_) => return TokenOutcome::Malformed,
        };
        let claims: Claims = match serde_json::from_slice(&payload) {
            Ok(claims) => claims,
            Err(_) => return TokenOutcome::Malformed,
        };
        if claims.exp <= OffsetDateTime::now_utc().unix_timestamp() {
            return TokenOutcome::Expired;
        }
        debug!(id = claims.id, role = %claims.role, "token decoded");
        TokenOutcome::Valid(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenConfig;

    fn codec() -> TokenCodec {
        TokenCodec::new(&TokenConfig {
            secret: "vulnerable-secret-key".into(),
            ttl_hours: 24,
        })
    }

    #[test]
    fn issue_then_parse_round_trips_the_claims() {
        let codec = codec();
        let token = codec.issue(2, "john", "user");
        let claims = codec.parse(&token).valid().expect("token should decode");
        assert_eq!(claims.id, 2);
        assert_eq!(claims.username, "john");
        assert_eq!(claims.role, "user");
        assert_eq!(claims.exp, claims.iat + 24 * 3600);
    }

    #[test]
    fn parse_rejects_wrong_segment_counts() {
        let codec = codec();
        assert_eq!(codec.parse("justone"), TokenOutcome::Malformed);
        assert_eq!(codec.parse("two.segments"), TokenOutcome::Malformed);
        assert_eq!(codec.parse("a.b.c.d"), TokenOutcome::Malformed);
        assert_eq!(codec.parse(""), TokenOutcome::Malformed);
    }

    #[test]
    fn parse_rejects_undecodable_payloads() {
        let codec = codec();
        let token = codec.issue(1, "admin", "admin");
        let parts: Vec<&str> = token.split('.').collect();

        let not_base64 = format!("{}.!!not-base64!!.{}", parts[0], parts[2]);
        assert_eq!(codec.parse(&not_base64), TokenOutcome::Malformed);

        let not_claims = format!(
            "{}.{}.{}",
            parts[0],
            BASE64.encode("{\"hello\":\"world\"}"),
            parts[2]
        );
        assert_eq!(codec.parse(&not_claims), TokenOutcome::Malformed);
    }

    #[test]
    fn parse_rejects_expired_tokens_regardless_of_shape() {
        let codec = codec();
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let token = codec.issue_claims(&Claims {
            id: 1,
            username: "admin".into(),
            role: "admin".into(),
            iat: now - 7200,
            exp: now - 3600,
        });
        assert_eq!(codec.parse(&token), TokenOutcome::Expired);
    }

    #[test]
    fn tampered_payload_is_accepted_with_the_original_signature() {
        let codec = codec();
        let token = codec.issue(2, "john", "user");
        let parts: Vec<&str> = token.split('.').collect();

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let forged_payload = BASE64.encode(
            json!({
                "id": 1,
                "username": "john",
                "role": "admin",
                "iat": now,
                "exp": now + 3600,
            })
            .to_string(),
        );
        let tampered = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        let claims = codec.parse(&tampered).valid().expect("tampered token decodes");
        assert_eq!(claims.id, 1);
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn signature_segment_contents_are_never_checked() {
        let codec = codec();
        let token = codec.issue(3, "jane", "user");
        let parts: Vec<&str> = token.split('.').collect();

        let garbage_sig = format!("{}.{}.{}", parts[0], parts[1], BASE64.encode("whatever"));
        assert!(codec.parse(&garbage_sig).valid().is_some());

        // Even a non-base64 third segment passes; only its presence counts.
        let raw_sig = format!("{}.{}.not-even-base64", parts[0], parts[1]);
        assert!(codec.parse(&raw_sig).valid().is_some());
    }

    #[test]
    fn secret_is_recoverable_from_the_signature_segment() {
        let codec = codec();
        let token = codec.issue(1, "admin", "admin");
        let sig = token.split('.').nth(2).unwrap();
        let decoded = String::from_utf8(BASE64.decode(sig).unwrap()).unwrap();
        assert_eq!(decoded, "signature_with_vulnerable-secret-key");
    }
}
