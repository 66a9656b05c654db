//! User slice: list, roles and the lock toggle

use std::ops::Deref;

use motormate_client::api::{AccountApi, UserApi};
use motormate_client::{Role, RoleUpdate};
use serde_json::json;
use tracing::warn;

use crate::error::Result;
use crate::slice::ResourceSlice;

/// Users keyed by id, routed by username
pub struct UserSlice {
    slice: ResourceSlice<UserApi>,
    account: AccountApi,
}

impl UserSlice {
    pub fn new(slice: ResourceSlice<UserApi>, account: AccountApi) -> Self {
        Self { slice, account }
    }

    /// Every role a user can be given
    pub async fn all_roles(&self) -> Result<Vec<Role>> {
        Ok(self.api().all_roles().await?)
    }

    /// Flip the lock flag locally, then persist it; the flag is restored if
    /// the request fails
    pub async fn toggle_lock(&self, user_id: &str) -> Result<bool> {
        let mut locked = false;
        if !self.modify(user_id, |user| {
            user.is_locked = !user.is_locked;
            locked = user.is_locked;
        }) {
            warn!(user_id, "toggling lock of a user that is not loaded");
        }

        if let Err(e) = self
            .account
            .update_is_lock_user(user_id, &json!({}))
            .await
        {
            self.modify(user_id, |user| user.is_locked = !user.is_locked);
            return Err(e.into());
        }
        Ok(locked)
    }

    /// Replace the roles of one user
    pub async fn update_role(&self, update: &RoleUpdate) -> Result<()> {
        self.api().update_role(update).await?;
        if let Some(user) = self.find(|user| user.username == update.username) {
            self.modify(&user.id, |user| user.roles = update.roles.clone());
        }
        self.notifier().success("Role updated successfully");
        Ok(())
    }
}

impl Deref for UserSlice {
    type Target = ResourceSlice<UserApi>;

    fn deref(&self) -> &Self::Target {
        &self.slice
    }
}
