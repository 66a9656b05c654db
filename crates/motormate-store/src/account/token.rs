//! Bearer token claims and the user derived from them
//!
//! Signatures are not checked: the server validates every request, the
//! client only reads the identity claims and the expiry.

use jsonwebtoken::dangerous::insecure_decode;
use motormate_client::UserDetail;
use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// Claim names carried by the bearer token
pub mod claims {
    pub const USERNAME: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier";
    pub const NAME: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name";
    pub const EMAIL: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress";
    pub const ROLE: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";
    pub const AVATAR: &str = "Avatar";
}

/// A role claim is a single string or, for users with several roles, a list
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum RoleClaim {
    One(String),
    Many(Vec<String>),
}

impl RoleClaim {
    fn first(self) -> String {
        match self {
            RoleClaim::One(role) => role,
            RoleClaim::Many(roles) => roles.into_iter().next().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenClaims {
    #[serde(rename = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier", default)]
    username: String,
    #[serde(rename = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name", default)]
    name: String,
    #[serde(rename = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress", default)]
    email: String,
    #[serde(rename = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role", default)]
    role: Option<RoleClaim>,
    #[serde(rename = "Avatar", default)]
    avatar: String,
    /// Seconds since the epoch
    exp: Option<i64>,
}

/// The signed-in user as the front ends see it
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: String,
    pub token: String,
}

impl AuthUser {
    /// Decode the claims of `token`, rejecting it if it expired before `now_ms`
    pub fn from_token(token: &str, now_ms: i64) -> Result<Self, TokenError> {
        let claims = insecure_decode::<TokenClaims>(token)
            .map_err(|e| TokenError::Invalid(e.to_string()))?
            .claims;

        if claims
            .exp
            .is_some_and(|exp| exp.saturating_mul(1000) < now_ms)
        {
            return Err(TokenError::Expired);
        }

        Ok(Self {
            username: claims.username,
            name: claims.name,
            email: claims.email,
            role: claims.role.map(RoleClaim::first).unwrap_or_default(),
            avatar: claims.avatar,
            token: token.to_string(),
        })
    }

    /// Rebuild from a fetched profile, keeping the current token
    pub fn from_detail(detail: &UserDetail, token: String) -> Self {
        Self {
            username: detail.username.clone(),
            name: detail.full_name.clone(),
            email: detail.email.clone(),
            role: detail.roles.first().cloned().unwrap_or_default(),
            avatar: detail.image.image_url.clone(),
            token,
        }
    }
}
