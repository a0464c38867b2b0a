use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{error::ApiError, state::AppState};
use shared::services::auth_service::AuthServiceTrait;
use shared::services::errors::auth_service_errors::AuthServiceError;

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: Option<String>,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Authorization header
        let auth_header = parts
            .headers
            .get("Authorization")
            .ok_or_else(|| ApiError::AuthService(AuthServiceError::InvalidCredentials))?
            .to_str()
            .map_err(|_| {
                ApiError::AuthService(AuthServiceError::ValidationError(
                    "Invalid header format".to_string(),
                ))
            })?;

        // Check if it starts with "Bearer "
        if !auth_header.starts_with("Bearer ") {
            return Err(ApiError::AuthService(AuthServiceError::InvalidCredentials));
        }

        // Extract the token (remove "Bearer " prefix)
        let token = &auth_header[7..];

        // Verify the token and pull out the caller's identity
        let identity = state
            .auth_service
            .extract_identity_from_token(token)
            .map_err(ApiError::from)?;

        Ok(AuthenticatedUser {
            user_id: identity.user_id,
            email: identity.email,
        })
    }
}
