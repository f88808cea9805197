use crate::{AuthError, Claims, Result as AuthErrorResult, bearer_token};

use clarity_core::UserId;

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

/// Clock skew tolerated on `exp` and `nbf`, in seconds
const LEEWAY_SECS: u64 = 30;

/// Issues and verifies HS256 session tokens. Holds only immutable keys.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    #[track_caller]
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> AuthErrorResult<Self> {
        if secret.is_empty() {
            return Err(AuthError::InvalidSecret {
                message: "signing secret must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if ttl <= Duration::zero() {
            return Err(AuthError::InvalidSecret {
                message: format!("token lifetime must be positive, got {ttl}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = LEEWAY_SECS;
        validation.set_required_spec_claims(&["exp", "nbf", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, user_id: UserId) -> AuthErrorResult<String> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if the current time were `issued_at`
    #[track_caller]
    pub fn issue_at(&self, user_id: UserId, issued_at: DateTime<Utc>) -> AuthErrorResult<String> {
        let iat = issued_at.timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat,
            nbf: iat,
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::Signing {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify a token and return the user it was issued to
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<UserId> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::Expired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::MalformedOrForged {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.user_id()
    }

    /// `validate` applied to a raw `Authorization` header value
    #[track_caller]
    pub fn validate_header(&self, header: Option<&str>) -> AuthErrorResult<UserId> {
        self.validate(bearer_token(header)?)
    }
}
