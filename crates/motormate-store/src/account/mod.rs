//! Account slice: sign-in, token restore, sign-out and the signed-in profile

pub mod token;

use std::sync::Arc;

use chrono::Utc;
use motormate_client::api::AccountApi;
use motormate_client::{GoogleLoginRequest, LoginRequest, Notifier, TokenProvider, UserDetail};
use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, info, warn};

pub use token::AuthUser;

use crate::error::{Result, StoreError, TokenError};
use crate::storage::{Storage, USER_KEY};

/// Shown whenever a stored token cannot be restored
pub const INVALID_TOKEN_MESSAGE: &str = "No valid token found, please login again!";
pub const SIGN_OUT_MESSAGE: &str = "Log out success!";

/// The signed-in user, shared with the HTTP client as its token source
#[derive(Debug, Default)]
pub struct AuthSession {
    user: RwLock<Option<AuthUser>>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.user.read().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.read().is_some()
    }

    pub(crate) fn set(&self, user: Option<AuthUser>) {
        *self.user.write() = user;
    }
}

impl TokenProvider for AuthSession {
    fn bearer_token(&self) -> Option<String> {
        self.user.read().as_ref().map(|user| user.token.clone())
    }
}

#[derive(Debug, Default)]
struct ProfileState {
    detail: Option<UserDetail>,
    loading: bool,
}

/// Account state for one front end
pub struct AccountSlice {
    api: AccountApi,
    session: Arc<AuthSession>,
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
    profile: RwLock<ProfileState>,
}

impl AccountSlice {
    pub fn new(
        api: AccountApi,
        session: Arc<AuthSession>,
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            session,
            storage,
            notifier,
            profile: RwLock::new(ProfileState::default()),
        }
    }

    pub fn session(&self) -> &Arc<AuthSession> {
        &self.session
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.session.user()
    }

    pub fn user_detail(&self) -> Option<UserDetail> {
        self.profile.read().detail.clone()
    }

    pub fn is_user_loading(&self) -> bool {
        self.profile.read().loading
    }

    /// Sign in with username and password
    pub async fn sign_in(&self, request: &LoginRequest) -> Result<AuthUser> {
        let payload = self.api.login(request).await?;
        self.accept_login(payload)
    }

    /// Sign in with a Google credential
    pub async fn sign_in_google(&self, token_credential: impl Into<String>) -> Result<AuthUser> {
        let request = GoogleLoginRequest {
            token_credential: token_credential.into(),
        };
        let payload = self.api.login_google(&request).await?;
        self.accept_login(payload)
    }

    /// Create an account; does not sign in
    pub async fn register(&self, values: &Value) -> Result<Value> {
        Ok(self.api.register(values).await?)
    }

    /// Decode and persist a login payload, then publish the user
    fn accept_login(&self, payload: Value) -> Result<AuthUser> {
        let token = payload
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| TokenError::Invalid("login response carries no token".to_string()))?;
        let user = AuthUser::from_token(token, Utc::now().timestamp_millis())?;

        self.storage.set(USER_KEY, &payload.to_string())?;
        self.session.set(Some(user.clone()));
        info!(username = %user.username, "signed in");
        Ok(user)
    }

    /// Restore the user from storage.
    ///
    /// Returns `Ok(None)` when nothing is stored. An unreadable or expired
    /// token is removed from storage and reported.
    pub fn restore(&self) -> Result<Option<AuthUser>> {
        let Some(stored) = self.storage.get(USER_KEY)? else {
            debug!("no stored user");
            return Ok(None);
        };

        match Self::decode_stored(&stored) {
            Ok(user) => {
                self.session.set(Some(user.clone()));
                info!(username = %user.username, "restored session");
                Ok(Some(user))
            }
            Err(e) => {
                warn!("discarding stored user: {}", e);
                self.session.set(None);
                self.storage.remove(USER_KEY)?;
                self.notifier.error(INVALID_TOKEN_MESSAGE);
                Err(e.into())
            }
        }
    }

    fn decode_stored(stored: &str) -> std::result::Result<AuthUser, TokenError> {
        let payload: Value =
            serde_json::from_str(stored).map_err(|e| TokenError::Invalid(e.to_string()))?;
        let token = payload
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| TokenError::Invalid("stored user carries no token".to_string()))?;
        AuthUser::from_token(token, Utc::now().timestamp_millis())
    }

    /// Forget the user and the stored payload
    pub fn sign_out(&self) -> Result<()> {
        self.session.set(None);
        self.profile.write().detail = None;
        self.storage.remove(USER_KEY)?;
        self.notifier.success(SIGN_OUT_MESSAGE);
        info!("signed out");
        Ok(())
    }

    /// Fetch the profile of the signed-in user.
    ///
    /// Returns `Ok(None)` without a request when nothing is stored.
    pub async fn fetch_user_details(&self) -> Result<Option<UserDetail>> {
        if self.storage.get(USER_KEY)?.is_none() {
            return Ok(None);
        }

        self.profile.write().loading = true;
        let result = self.api.user_detail().await;
        let mut profile = self.profile.write();
        profile.loading = false;
        match result {
            Ok(detail) => {
                profile.detail = Some(detail.clone());
                Ok(Some(detail))
            }
            Err(e) => {
                warn!("failed to fetch user details: {}", e);
                Err(e.into())
            }
        }
    }

    /// Replace the profile and rebuild the user from it, keeping the token
    pub fn update_user(&self, detail: UserDetail) -> Result<AuthUser> {
        let token = self
            .session
            .user()
            .map(|user| user.token)
            .ok_or(StoreError::NotSignedIn)?;
        let user = AuthUser::from_detail(&detail, token);
        self.profile.write().detail = Some(detail);
        self.session.set(Some(user.clone()));
        Ok(user)
    }
}
