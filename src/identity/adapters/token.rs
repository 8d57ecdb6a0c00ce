//! JWT-based session token issuer.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identity::domain::{EmailAddress, Role, User, UserId};
use crate::identity::ports::{AccessToken, TokenClaims, TokenIssuer, TokenIssuerError};

/// HS256-signed JWT session token issuer.
///
/// Tokens carry the account identifier as the subject claim plus the email
/// and role at issuance time. Expiry is enforced during decoding.
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

/// Serialised claim set embedded in issued tokens.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Account identifier the token was issued to.
    sub: String,
    /// Email address at issuance time.
    email: String,
    /// Access role at issuance time.
    role: String,
    /// Issuance instant as a Unix timestamp.
    iat: i64,
    /// Expiry instant as a Unix timestamp.
    exp: i64,
}

impl JwtTokenIssuer {
    /// Creates an issuer signing with the given secret.
    ///
    /// Every issued token expires `lifetime` after its issuance instant.
    #[must_use]
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
            lifetime,
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(
        &self,
        user: &User,
        issued_at: DateTime<Utc>,
    ) -> Result<AccessToken, TokenIssuerError> {
        let expires_at = issued_at
            .checked_add_signed(self.lifetime)
            .ok_or(TokenIssuerError::ExpiryOutOfRange)?;

        let claims = Claims {
            sub: user.id().to_string(),
            email: user.email().as_str().to_owned(),
            role: user.role().as_str().to_owned(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|err| TokenIssuerError::Encoding(err.to_string()))?;

        Ok(AccessToken { token, expires_at })
    }

    fn decode(&self, token: &str) -> Result<TokenClaims, TokenIssuerError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |err| match err.kind() {
                ErrorKind::ExpiredSignature => TokenIssuerError::Expired,
                _ => TokenIssuerError::InvalidToken(err.to_string()),
            },
        )?;

        claims_to_token_claims(&data.claims)
    }
}

fn claims_to_token_claims(claims: &Claims) -> Result<TokenClaims, TokenIssuerError> {
    let subject = Uuid::parse_str(&claims.sub)
        .map_err(|err| TokenIssuerError::InvalidToken(err.to_string()))?;
    let email = EmailAddress::new(claims.email.as_str())
        .map_err(|err| TokenIssuerError::InvalidToken(err.to_string()))?;
    let role = Role::try_from(claims.role.as_str())
        .map_err(|err| TokenIssuerError::InvalidToken(err.to_string()))?;
    let issued_at = DateTime::from_timestamp(claims.iat, 0)
        .ok_or_else(|| TokenIssuerError::InvalidToken("iat out of range".to_owned()))?;
    let expires_at = DateTime::from_timestamp(claims.exp, 0)
        .ok_or_else(|| TokenIssuerError::InvalidToken("exp out of range".to_owned()))?;

    Ok(TokenClaims {
        user_id: UserId::from_uuid(subject),
        email,
        role,
        issued_at,
        expires_at,
    })
}
