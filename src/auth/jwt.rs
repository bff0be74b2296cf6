use crate::constants::SESSION_TTL_MINUTES;
use crate::core::errors::SplitsheetError;
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Session claims carried by the bearer token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Id of the signed-in user.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and checks HS256 session tokens for signed-in users.
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: TimeDelta,
}

impl JwtService {
    pub fn new(secret: String) -> Self {
        JwtService {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: TimeDelta::minutes(SESSION_TTL_MINUTES),
        }
    }

    pub fn generate_token(&self, user_id: &str) -> Result<String, SplitsheetError> {
        let issued_at = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| SplitsheetError::InternalServerError(format!("Failed to sign session token: {}", e)))
    }

    /// Decodes `token`, rejecting bad signatures and expired sessions as `Unauthorized`.
    pub fn validate_token(&self, token: &str) -> Result<Claims, SplitsheetError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| SplitsheetError::Unauthorized(format!("Invalid session token: {}", e)))
    }
}
