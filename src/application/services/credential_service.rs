//! Credential issuance and verification (HS256 JSON Web Tokens).

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Account;
use crate::error::AppError;

/// Decoded payload of a verified credential.
///
/// Carries a full snapshot of the account as it was at issuance, so balance
/// and other fields may be stale by the time the token is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountClaims {
    pub account: Account,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Issues and verifies bearer credentials signed with a shared secret.
///
/// There is no revocation list: a token stays valid until it expires or the
/// secret is rotated.
pub struct CredentialService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl CredentialService {
    /// Creates a credential service.
    ///
    /// # Arguments
    ///
    /// - `secret` - HMAC key shared by issuance and verification
    /// - `ttl` - lifetime of every issued token
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Lifetime applied to newly issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a token for `account`, valid for the configured TTL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the expiry overflows the calendar
    /// or signing fails.
    pub fn issue_token(&self, account: &Account) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| {
            tracing::error!(ttl = %self.ttl, "credential lifetime out of range");
            AppError::internal("credential lifetime out of range")
        })?;

        self.issue_token_at(account, now, expires_at)
    }

    fn issue_token_at(
        &self,
        account: &Account,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = AccountClaims {
            account: account.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| {
                tracing::error!(error = %e, "failed to sign credential");
                AppError::internal("failed to sign credential")
            },
        )
    }

    /// Verifies a token's algorithm, signature and expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, signed
    /// with another algorithm or key, or expired.
    pub fn verify_token(&self, token: &str) -> Result<AccountClaims, AppError> {
        jsonwebtoken::decode::<AccountClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!(reason = %e, "credential rejected");
                AppError::unauthorized("invalid token")
            })
    }
}
