//! Stateless session tokens
//!
//! A session is never stored server-side: it is a signed claims payload
//! carried by the client as a bearer token and re-verified on every
//! request. The only server state is the signing secret.
//!
//! Token layout: `base64url(claims json) . base64url(hmac-sha256)`.

use crate::error::{CorkboardError, Result};
use crate::types::{OrgId, User, UserId};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Verified caller identity derived from a bearer token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user: UserId,
    pub username: String,
    pub email: String,
    /// Organization memberships at token issue time. Authorization always
    /// re-checks against the stored user record; these are a hint for
    /// clients, not the predicate.
    pub organizations: Vec<OrgId>,
}

/// Signs and verifies session tokens
pub struct TokenSigner {
    secret: Vec<u8>,
}

impl TokenSigner {
    /// Create a signer with the given secret
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Issue a signed token for a user
    pub fn issue(&self, user: &User) -> Result<String> {
        let session = Session {
            user: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            organizations: user.joined_organizations.clone(),
        };
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&session)?);
        let signature = URL_SAFE_NO_PAD.encode(self.mac(payload.as_bytes())?);
        Ok(format!("{payload}.{signature}"))
    }

    /// Verify a token and return the session it carries.
    ///
    /// Any failure - malformed token, bad signature, undecodable claims -
    /// surfaces as `Unauthorized`.
    pub fn verify(&self, token: &str) -> Result<Session> {
        let (payload, signature) = token
            .split_once('.')
            .ok_or(CorkboardError::Unauthorized)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| CorkboardError::Unauthorized)?;

        let mut mac = self.keyed_mac()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| CorkboardError::Unauthorized)?;

        let claims = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| CorkboardError::Unauthorized)?;
        serde_json::from_slice(&claims).map_err(|_| CorkboardError::Unauthorized)
    }

    fn keyed_mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret).map_err(|_| CorkboardError::Unauthorized)
    }

    fn mac(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut mac = self.keyed_mac()?;
        mac.update(data);
        Ok(mac.finalize().into_bytes().to_vec())
    }
}
