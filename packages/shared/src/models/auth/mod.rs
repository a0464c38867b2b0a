use serde::{Deserialize, Serialize};

/// Claims carried by the identity provider's bearer tokens.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenClaims {
    pub sub: String, // subject (user ID)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: usize, // expiration time
    pub iat: usize, // issued at
}

/// The caller's identity as established from a verified token.
#[derive(Debug, Clone)]
pub struct AuthIdentity {
    pub user_id: String,
    pub email: Option<String>,
}
