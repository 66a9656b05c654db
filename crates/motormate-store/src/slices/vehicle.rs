//! Vehicle slices: every vehicle, one moderation state, or one owner's listings

use motormate_client::VehicleStatus;
use motormate_client::api::{UserVehicleSource, VehicleApi, VehicleStatusSource};
use tracing::debug;

use crate::error::Result;
use crate::slice::ResourceSlice;

pub type VehicleSlice = ResourceSlice<VehicleApi>;
pub type VehicleStatusSlice = ResourceSlice<VehicleStatusSource>;
/// Storefront "my products"
pub type ProductSlice = ResourceSlice<UserVehicleSource>;

impl ResourceSlice<VehicleApi> {
    /// Toggle the lock flag of a vehicle
    pub async fn lock(&self, vehicle_id: &str) -> Result<()> {
        self.api().lock(vehicle_id).await?;
        let mut locked = false;
        self.modify(vehicle_id, |vehicle| {
            vehicle.is_lock = !vehicle.is_lock;
            locked = vehicle.is_lock;
        });
        debug!(vehicle_id, locked, "vehicle lock toggled");
        let message = if locked {
            "Vehicle locked successfully"
        } else {
            "Vehicle unlocked successfully"
        };
        self.notifier().success(message);
        Ok(())
    }
}

impl ResourceSlice<VehicleStatusSource> {
    /// Move a vehicle to another moderation state.
    ///
    /// A vehicle that leaves the state this slice lists is removed from it.
    pub async fn update_status(&self, vehicle_id: &str, status: VehicleStatus) -> Result<()> {
        self.api().api().update_status(vehicle_id, status).await?;
        if status == self.api().status() {
            self.modify(vehicle_id, |vehicle| {
                vehicle.status = status.label().to_string();
            });
        } else {
            self.remove_local(vehicle_id);
        }
        let message = match status {
            VehicleStatus::Pending => "Vehicle moved back to pending",
            VehicleStatus::Approved => "Vehicle approved successfully",
            VehicleStatus::Denied => "Vehicle denied successfully",
        };
        self.notifier().success(message);
        Ok(())
    }
}
