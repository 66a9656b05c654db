// Model types for API payloads

pub mod blog;
pub mod catalog;
pub mod chart;
pub mod common;
pub mod order;
pub mod user;
pub mod vehicle;

pub use blog::{Blog, Category};
pub use catalog::{Brand, Collection, Color, ModelVehicle};
pub use chart::{ChartTotal, DailyViews, MonthlyRevenue, TopUser};
pub use common::{Entity, Image, MetaData, PaginatedResponse, SearchParams};
pub use order::{
    CartItem, DateRent, OrderShop, OrderVehicle, ParentOrder, TripRequest, VehicleReview,
};
pub use user::{GoogleLoginRequest, LoginRequest, Role, RoleUpdate, UserDetail};
pub use vehicle::{Specifications, Vehicle, VehicleImage, VehicleStatus};
