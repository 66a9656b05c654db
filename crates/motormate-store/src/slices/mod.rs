//! Resource-specific slices built on [`ResourceSlice`](crate::slice::ResourceSlice)

pub mod cart;
pub mod user;
pub mod vehicle;

use motormate_client::api::{
    BlogApi, BrandApi, CategoryApi, CollectionApi, ColorApi, ModelVehicleApi, OrderApi,
    ShopOrderSource, UserOrderSource,
};

use crate::slice::ResourceSlice;

pub use cart::CartSlice;
pub use user::UserSlice;
pub use vehicle::{ProductSlice, VehicleSlice, VehicleStatusSlice};

pub type BrandSlice = ResourceSlice<BrandApi>;
pub type CollectionSlice = ResourceSlice<CollectionApi>;
pub type ModelVehicleSlice = ResourceSlice<ModelVehicleApi>;
pub type ColorSlice = ResourceSlice<ColorApi>;
pub type BlogSlice = ResourceSlice<BlogApi>;
pub type BlogCategorySlice = ResourceSlice<CategoryApi>;
pub type TransactionSlice = ResourceSlice<OrderApi>;
pub type ShopOrderSlice = ResourceSlice<ShopOrderSource>;
pub type UserOrderSlice = ResourceSlice<UserOrderSource>;
