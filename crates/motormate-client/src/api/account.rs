//! Account endpoints: login, sign-up, profile and user locking

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::constants::api_path;
use crate::error::Result;
use crate::http::MotormateHttpClient;
use crate::model::{GoogleLoginRequest, LoginRequest, UserDetail};

#[derive(Clone)]
pub struct AccountApi {
    http: Arc<MotormateHttpClient>,
}

impl AccountApi {
    pub fn new(http: Arc<MotormateHttpClient>) -> Self {
        Self { http }
    }

    /// Profile of the signed-in user
    pub async fn user_detail(&self) -> Result<UserDetail> {
        self.http.get_json(api_path::USER_DETAILS, None).await
    }

    /// Returns the raw login payload (`{ token, ... }`)
    pub async fn login(&self, request: &LoginRequest) -> Result<Value> {
        self.http.post_json(api_path::AUTH_LOGIN, request).await
    }

    pub async fn login_google(&self, request: &GoogleLoginRequest) -> Result<Value> {
        self.http.post_json(api_path::AUTH_LOGIN_GOOGLE, request).await
    }

    pub async fn register<B: Serialize + Sync + ?Sized>(&self, values: &B) -> Result<Value> {
        self.http.post_json(api_path::AUTH_SIGN_UP, values).await
    }

    pub async fn update_is_lock_user<B: Serialize + Sync + ?Sized>(
        &self,
        user_id: &str,
        values: &B,
    ) -> Result<Value> {
        self.http
            .post_json(&format!("{}/{}/lock", api_path::AUTH, user_id), values)
            .await
    }
}
