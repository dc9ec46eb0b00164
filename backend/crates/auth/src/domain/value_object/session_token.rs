//! Session Token Value Object
//!
//! Stateless, signed, time-boxed proof of authentication:
//!
//! ```text
//! base64url(claims JSON) "." base64url(HMAC-SHA256(secret, claims segment))
//! ```
//!
//! The token is verifiable without any storage lookup. Callers must
//! still re-resolve the account from storage before trusting role or
//! status; the claims only identify the account.

use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use kernel::id::AccountId;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::value_object::account_role::AccountRole;

type HmacSha256 = Hmac<Sha256>;

/// Token decoding errors
///
/// Expired and malformed are distinct for caller-side messaging; both
/// map to 401.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionTokenError {
    #[error("Session token has expired")]
    Expired,

    #[error("Session token is malformed or badly signed")]
    Malformed,
}

/// Claims embedded in a session token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account identifier
    pub sub: Uuid,
    /// Role code at issue time (display only; storage is authoritative)
    pub role: String,
    /// Issued-at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds)
    pub exp: i64,
}

impl SessionClaims {
    /// Account ID from the subject claim
    pub fn account_id(&self) -> AccountId {
        AccountId::from_uuid(self.sub)
    }

    /// Expiry as a timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Signed session token codec
pub struct SessionToken;

impl SessionToken {
    /// Issue a signed token for an account
    ///
    /// `ttl` is fixed per deployment (config), not per request.
    pub fn issue(
        account_id: &AccountId,
        role: AccountRole,
        ttl: Duration,
        secret: &[u8; 32],
    ) -> String {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: *account_id.as_uuid(),
            role: role.code().to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        // Claims are a plain struct; serialization cannot fail
        let payload = serde_json::to_vec(&claims).expect("claims serialize");
        let payload_b64 = platform::crypto::to_base64url(&payload);

        let mut mac =
            HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!(
            "{}.{}",
            payload_b64,
            platform::crypto::to_base64url(&signature)
        )
    }

    /// Decode and verify a token
    ///
    /// Signature is checked before the claims are parsed; expiry is
    /// checked last so a tampered token never reports "expired".
    pub fn decode(token: &str, secret: &[u8; 32]) -> Result<SessionClaims, SessionTokenError> {
        let (payload_b64, signature_b64) =
            token.split_once('.').ok_or(SessionTokenError::Malformed)?;
        if payload_b64.is_empty() || signature_b64.contains('.') {
            return Err(SessionTokenError::Malformed);
        }

        let signature = platform::crypto::from_base64url(signature_b64)
            .map_err(|_| SessionTokenError::Malformed)?;

        let mut mac =
            HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| SessionTokenError::Malformed)?;

        let payload = platform::crypto::from_base64url(payload_b64)
            .map_err(|_| SessionTokenError::Malformed)?;
        let claims: SessionClaims =
            serde_json::from_slice(&payload).map_err(|_| SessionTokenError::Malformed)?;

        if claims.exp <= Utc::now().timestamp() {
            return Err(SessionTokenError::Expired);
        }

        Ok(claims)
    }
}
