//! Storefront cart of the signed-in user

use motormate_client::CartItem;
use motormate_client::api::CartSource;

use crate::error::{Result, StoreError};
use crate::slice::ResourceSlice;

pub type CartSlice = ResourceSlice<CartSource>;

impl ResourceSlice<CartSource> {
    fn owner(&self) -> Result<String> {
        self.scope().ok_or_else(|| {
            self.notifier().error("Please login to add to cart");
            StoreError::NotSignedIn
        })
    }

    pub fn in_cart(&self, vehicle_id: &str) -> bool {
        self.contains(vehicle_id)
    }

    pub async fn add(&self, vehicle_id: &str) -> Result<CartItem> {
        let user_id = self.owner()?;
        let item = self.api().api().add(&user_id, vehicle_id).await?;
        self.upsert(item.clone());
        self.notifier().success("Add to cart successfully");
        Ok(item)
    }

    pub async fn remove(&self, vehicle_id: &str) -> Result<()> {
        let user_id = self.owner()?;
        self.api().api().remove(&user_id, vehicle_id).await?;
        self.remove_local(vehicle_id);
        self.notifier()
            .success("Remove vehicle from cart successfully!");
        Ok(())
    }

    /// Add when absent, remove when present; returns whether the vehicle is
    /// in the cart afterwards
    pub async fn toggle(&self, vehicle_id: &str) -> Result<bool> {
        if self.in_cart(vehicle_id) {
            self.remove(vehicle_id).await?;
            Ok(false)
        } else {
            self.add(vehicle_id).await?;
            Ok(true)
        }
    }
}
