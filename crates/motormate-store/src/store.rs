//! Root stores of the two front ends
//!
//! Each store owns one HTTP client whose bearer token comes from the account
//! session, and one slice per list the front end shows.

use std::sync::Arc;

use motormate_client::api::{
    CartSource, ShopOrderSource, UserOrderSource, UserVehicleSource, VehicleStatusSource,
};
use motormate_client::{
    ChartTotal, HttpClientConfig, MotormateApi, MotormateHttpClient, Navigator, NoopNavigator,
    Notifier, ResourceApi, TopUser, TracingNotifier, UserDetail, VehicleStatus,
};
use tracing::{debug, info};

use crate::account::{AccountSlice, AuthSession};
use crate::error::Result;
use crate::query::DEFAULT_PAGE_SIZE;
use crate::settings::{App, Settings};
use crate::slice::{FetchOrdering, ResourceSlice};
use crate::slices::{
    BlogCategorySlice, BlogSlice, BrandSlice, CartSlice, CollectionSlice, ColorSlice,
    ModelVehicleSlice, ProductSlice, ShopOrderSlice, TransactionSlice, UserOrderSlice, UserSlice,
    VehicleSlice, VehicleStatusSlice,
};
use crate::storage::{FileStorage, MemoryStorage, Storage};

/// Side-effect seams shared by a store
#[derive(Clone)]
pub struct StoreDeps {
    pub storage: Arc<dyn Storage>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
}

impl StoreDeps {
    pub fn new(
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            storage,
            notifier,
            navigator,
        }
    }

    /// Memory storage, log-only notifications, no navigation
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(TracingNotifier),
            Arc::new(NoopNavigator),
        )
    }
}

/// List defaults applied to every slice of a store
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub page_size: u32,
    pub ordering: FetchOrdering,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            ordering: FetchOrdering::default(),
        }
    }
}

impl From<&Settings> for StoreOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            page_size: settings.store.page_size,
            ordering: settings.store.fetch_ordering,
        }
    }
}

/// Everything a store needs before its slices are built
struct Parts {
    api: MotormateApi,
    account: AccountSlice,
    options: StoreOptions,
    notifier: Arc<dyn Notifier>,
}

impl Parts {
    fn build(config: HttpClientConfig, options: StoreOptions, deps: StoreDeps) -> Result<Self> {
        let session = Arc::new(AuthSession::new());
        let http = MotormateHttpClient::new(config)?
            .with_token_provider(session.clone())
            .with_notifier(deps.notifier.clone())
            .with_navigator(deps.navigator);
        let api = MotormateApi::new(Arc::new(http));
        let account = AccountSlice::new(api.account(), session, deps.storage, deps.notifier.clone());

        Ok(Self {
            api,
            account,
            options,
            notifier: deps.notifier,
        })
    }

    fn slice<A: ResourceApi>(&self, name: &'static str, api: A) -> ResourceSlice<A> {
        ResourceSlice::new(name, api)
            .with_page_size(self.options.page_size)
            .with_ordering(self.options.ordering)
            .with_notifier(self.notifier.clone())
    }
}

/// Headline numbers of the admin dashboard
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dashboard {
    pub total_vehicles: ChartTotal,
    pub total_views: ChartTotal,
    pub total_users: ChartTotal,
    pub total_profit: ChartTotal,
    pub top_lessees: Vec<TopUser>,
    pub top_lessors: Vec<TopUser>,
}

/// State of the admin panel
pub struct AdminStore {
    pub api: MotormateApi,
    pub account: AccountSlice,
    pub brand: BrandSlice,
    pub collection: CollectionSlice,
    pub model_vehicle: ModelVehicleSlice,
    pub color: ColorSlice,
    pub vehicle: VehicleSlice,
    pub vehicle_pending: VehicleStatusSlice,
    pub vehicle_denied: VehicleStatusSlice,
    pub user: UserSlice,
    pub blog: BlogSlice,
    pub blog_category: BlogCategorySlice,
    pub transaction: TransactionSlice,
}

impl AdminStore {
    pub fn new(config: HttpClientConfig, options: StoreOptions, deps: StoreDeps) -> Result<Arc<Self>> {
        let parts = Parts::build(config, options, deps)?;
        let api = &parts.api;

        let store = Self {
            brand: parts.slice("Brand", api.brand()),
            collection: parts.slice("Collection", api.collection()),
            model_vehicle: parts.slice("Model", api.model_vehicle()),
            color: parts.slice("Color", api.color()),
            vehicle: parts.slice("Vehicle", api.vehicle()),
            vehicle_pending: parts.slice(
                "Vehicle",
                VehicleStatusSource::new(api.vehicle(), VehicleStatus::Pending),
            ),
            vehicle_denied: parts.slice(
                "Vehicle",
                VehicleStatusSource::new(api.vehicle(), VehicleStatus::Denied),
            ),
            user: UserSlice::new(parts.slice("User", api.user()), api.account()),
            blog: parts.slice("Blog", api.blog()),
            blog_category: parts.slice("Category", api.category()),
            transaction: parts.slice("Transaction", api.order()),
            api: parts.api.clone(),
            account: parts.account,
        };
        info!(base_url = %store.api.http_client().config().base_url, "admin store ready");
        Ok(Arc::new(store))
    }

    /// Build from loaded settings, persisting the user under the configured directory
    pub fn from_settings(
        settings: &Settings,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Arc<Self>> {
        let storage = Arc::new(FileStorage::open(&settings.store.storage_dir)?);
        Self::new(
            settings.http_config(App::Admin),
            StoreOptions::from(settings),
            StoreDeps::new(storage, notifier, navigator),
        )
    }

    /// Fetch every dashboard counter concurrently; fails on the first error
    pub async fn dashboard(&self) -> Result<Dashboard> {
        let chart = self.api.chart();
        let (total_vehicles, total_views, total_users, total_profit, top_lessees, top_lessors) = tokio::try_join!(
            chart.total_vehicles(),
            chart.total_views(),
            chart.total_users(),
            chart.total_profit(),
            chart.top_lessees(),
            chart.top_lessors(),
        )?;
        debug!("dashboard loaded");

        Ok(Dashboard {
            total_vehicles,
            total_views,
            total_users,
            total_profit,
            top_lessees,
            top_lessors,
        })
    }
}

/// State of the storefront
pub struct StorefrontStore {
    pub api: MotormateApi,
    pub account: AccountSlice,
    pub my_products: ProductSlice,
    pub shop_orders: ShopOrderSlice,
    pub user_orders: UserOrderSlice,
    pub cart: CartSlice,
}

impl StorefrontStore {
    pub fn new(config: HttpClientConfig, options: StoreOptions, deps: StoreDeps) -> Result<Arc<Self>> {
        let parts = Parts::build(config, options, deps)?;
        let api = &parts.api;

        let store = Self {
            my_products: parts.slice("Vehicle", UserVehicleSource::new(api.vehicle())),
            shop_orders: parts.slice("Order", ShopOrderSource::new(api.order())),
            user_orders: parts.slice("Order", UserOrderSource::new(api.order())),
            cart: parts.slice("Cart", CartSource::new(api.cart())),
            api: parts.api.clone(),
            account: parts.account,
        };
        info!(base_url = %store.api.http_client().config().base_url, "storefront store ready");
        Ok(Arc::new(store))
    }

    pub fn from_settings(
        settings: &Settings,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Arc<Self>> {
        let storage = Arc::new(FileStorage::open(&settings.store.storage_dir)?);
        Self::new(
            settings.http_config(App::Storefront),
            StoreOptions::from(settings),
            StoreDeps::new(storage, notifier, navigator),
        )
    }

    /// Point every per-user list at `user_id`; `None` empties them
    pub fn bind_user(&self, user_id: Option<String>) {
        self.my_products.set_scope(user_id.clone());
        self.shop_orders.set_scope(user_id.clone());
        self.user_orders.set_scope(user_id.clone());
        self.cart.set_scope(user_id);
    }

    /// Fetch the signed-in profile and bind the per-user lists to it
    pub async fn refresh_profile(&self) -> Result<Option<UserDetail>> {
        let detail = self.account.fetch_user_details().await?;
        self.bind_user(detail.as_ref().map(|detail| detail.id.clone()));
        Ok(detail)
    }

    /// Sign out and empty every per-user list
    pub fn sign_out(&self) -> Result<()> {
        self.account.sign_out()?;
        self.bind_user(None);
        Ok(())
    }
}
