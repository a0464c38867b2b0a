use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::models::auth::{AuthIdentity, TokenClaims};
use crate::services::errors::auth_service_errors::AuthServiceError;

#[cfg(test)]
use mockall::automock;

/// Verification of bearer tokens minted by the external identity provider.
/// This service never issues tokens; it only checks them and pulls out the
/// caller's identity.
#[cfg_attr(test, automock)]
pub trait AuthServiceTrait: Send + Sync {
    fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthServiceError>;
    fn extract_identity_from_token(&self, token: &str) -> Result<AuthIdentity, AuthServiceError>;
}

pub struct AuthService {
    jwt_secret: String,
}

impl AuthService {
    pub fn new() -> Self {
        let jwt_secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET environment variable must be set");
        AuthService { jwt_secret }
    }

    pub fn with_jwt_secret(jwt_secret: String) -> Self {
        AuthService { jwt_secret }
    }
}

impl AuthServiceTrait for AuthService {
    fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let validation = Validation::default();

        match decode::<TokenClaims>(token, &decoding_key, &validation) {
            Ok(token_data) => Ok(token_data.claims),
            Err(err) => match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    Err(AuthServiceError::ExpiredToken)
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    Err(AuthServiceError::InvalidToken)
                }
                _ => Err(AuthServiceError::JwtError(format!("{:#?}", err))),
            },
        }
    }

    fn extract_identity_from_token(&self, token: &str) -> Result<AuthIdentity, AuthServiceError> {
        let claims = self.verify_token(token)?;
        Ok(AuthIdentity {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}
