//! Command execution against the admin and storefront stores

use std::sync::Arc;

use anyhow::{Context as _, bail};
use motormate_client::{Level, LoginRequest, Navigator, NotificationQueue, ResourceApi};
use motormate_store::query::keys;
use motormate_store::{
    AccountSlice, AdminStore, App, PageSync, PageUrl, ResourceSlice, Settings, StorefrontStore,
};
use tracing::{debug, info, warn};

use crate::cli::{Command, ListArgs, Resource};

/// Logs requested route changes; a terminal has nowhere to navigate
#[derive(Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) {
        warn!(route, "navigation requested");
    }
}

pub struct Runner {
    settings: Settings,
    notifications: Arc<NotificationQueue>,
}

enum SliceOp<'a> {
    List(&'a ListArgs),
    Delete(&'a str),
}

impl Runner {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            notifications: Arc::new(NotificationQueue::new()),
        }
    }

    /// Print and clear the pending notifications
    pub fn flush_notifications(&self) {
        for notification in self.notifications.drain() {
            let tag = match notification.level {
                Level::Success => "ok",
                Level::Info => "info",
                Level::Error => "error",
            };
            eprintln!("[{}] {}", tag, notification.message);
        }
    }

    fn admin(&self) -> anyhow::Result<Arc<AdminStore>> {
        let store = AdminStore::from_settings(
            &self.settings,
            self.notifications.clone(),
            Arc::new(LogNavigator),
        )?;
        restore(&store.account);
        Ok(store)
    }

    async fn storefront(&self) -> anyhow::Result<Arc<StorefrontStore>> {
        let store = StorefrontStore::from_settings(
            &self.settings,
            self.notifications.clone(),
            Arc::new(LogNavigator),
        )?;
        if restore(&store.account) {
            store.refresh_profile().await?;
        }
        Ok(store)
    }

    pub async fn run(&self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Login {
                app,
                username,
                password,
            } => {
                let request = LoginRequest { username, password };
                let user = match App::from(app) {
                    App::Admin => self.admin()?.account.sign_in(&request).await?,
                    App::Storefront => self.storefront().await?.account.sign_in(&request).await?,
                };
                info!(username = %user.username, role = %user.role, "signed in");
                println!("signed in as {} ({})", user.username, user.role);
            }
            Command::Logout => {
                let store = self.admin()?;
                if store.account.user().is_none() {
                    println!("not signed in");
                } else {
                    store.account.sign_out()?;
                }
            }
            Command::Whoami { app } => {
                let account = match App::from(app) {
                    App::Admin => {
                        let store = self.admin()?;
                        store.account.fetch_user_details().await?;
                        Whoami::from(&store.account)
                    }
                    App::Storefront => Whoami::from(&self.storefront().await?.account),
                };
                account.print()?;
            }
            Command::List(args) => self.resource(args.resource, SliceOp::List(&args)).await?,
            Command::Delete { resource, key } => {
                self.resource(resource, SliceOp::Delete(&key)).await?
            }
            Command::Dashboard => {
                let dashboard = self.admin()?.dashboard().await?;
                println!("vehicles: {}", dashboard.total_vehicles.total);
                println!("views:    {}", dashboard.total_views.total);
                println!("users:    {}", dashboard.total_users.total);
                println!("profit:   {}", dashboard.total_profit.total);
                for (label, users) in [
                    ("top lessees", &dashboard.top_lessees),
                    ("top lessors", &dashboard.top_lessors),
                ] {
                    println!("{}:", label);
                    for user in users {
                        println!("  {} ({}) {}", user.full_name, user.username, user.total);
                    }
                }
            }
        }
        Ok(())
    }

    async fn resource(&self, resource: Resource, op: SliceOp<'_>) -> anyhow::Result<()> {
        if resource.app() == App::Storefront {
            let store = self.storefront().await?;
            return match resource {
                Resource::Products => apply(&store.my_products, op).await,
                Resource::Orders => apply(&store.user_orders, op).await,
                Resource::ShopOrders => apply(&store.shop_orders, op).await,
                Resource::Cart => apply(&store.cart, op).await,
                _ => bail!("{:?} is not a storefront resource", resource),
            };
        }

        let store = self.admin()?;
        match resource {
            Resource::Brand => apply(&store.brand, op).await,
            Resource::Collection => apply(&store.collection, op).await,
            Resource::Model => apply(&store.model_vehicle, op).await,
            Resource::Color => apply(&store.color, op).await,
            Resource::Vehicle => apply(&store.vehicle, op).await,
            Resource::Pending => apply(&store.vehicle_pending, op).await,
            Resource::Denied => apply(&store.vehicle_denied, op).await,
            Resource::User => apply(&*store.user, op).await,
            Resource::Blog => apply(&store.blog, op).await,
            Resource::Category => apply(&store.blog_category, op).await,
            Resource::Transaction => apply(&store.transaction, op).await,
            _ => bail!("{:?} is not an admin resource", resource),
        }
    }
}

/// Restore the persisted user; returns whether one is signed in
fn restore(account: &AccountSlice) -> bool {
    match account.restore() {
        Ok(user) => user.is_some(),
        Err(e) => {
            debug!("continuing without a session: {}", e);
            false
        }
    }
}

async fn apply<A: ResourceApi>(slice: &ResourceSlice<A>, op: SliceOp<'_>) -> anyhow::Result<()> {
    match op {
        SliceOp::List(args) => {
            let mut url = PageUrl::new();
            let mut sync = PageSync::with_query();
            if let Some(query) = &args.query {
                sync.submit_search(&mut url, keys::QUERY, query);
            }
            sync.change_page(&mut url, args.page);
            if let Some(page_size) = args.page_size {
                sync.change_page_size(&mut url, page_size);
            }

            sync.drive(&mut url, slice)
                .await
                .with_context(|| format!("listing {}", slice.name()))?;

            for item in slice.page() {
                println!("{}", serde_json::to_string(&item)?);
            }
            match slice.meta_data() {
                Some(meta) => eprintln!(
                    "page {}/{} of {} ({} per page) {}",
                    meta.current_page, meta.total_pages, meta.total_count, meta.page_size, url
                ),
                None => eprintln!("{} records {}", slice.page().len(), url),
            }
        }
        SliceOp::Delete(key) => {
            slice
                .delete(key)
                .await
                .with_context(|| format!("deleting {} {}", slice.name(), key))?;
        }
    }
    Ok(())
}

/// Identity printed by `whoami`
struct Whoami {
    user: Option<motormate_store::AuthUser>,
    detail: Option<motormate_client::UserDetail>,
}

impl From<&AccountSlice> for Whoami {
    fn from(account: &AccountSlice) -> Self {
        Self {
            user: account.user(),
            detail: account.user_detail(),
        }
    }
}

impl Whoami {
    fn print(&self) -> anyhow::Result<()> {
        let Some(user) = &self.user else {
            println!("not signed in");
            return Ok(());
        };
        println!("{} <{}> role={}", user.name, user.email, user.role);
        if let Some(detail) = &self.detail {
            println!("{}", serde_json::to_string_pretty(detail)?);
        }
        Ok(())
    }
}
