//! Command line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use motormate_store::App;

#[derive(Debug, Parser)]
#[command(name = "motormate", version, about = "MotorMate marketplace client")]
pub struct Cli {
    /// TOML settings file; environment variables override it
    #[arg(short = 'c', long = "config", env = "MOTORMATE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and persist the token
    Login {
        #[arg(long, value_enum, default_value_t = AppArg::Admin)]
        app: AppArg,
        #[arg(short = 'u', long)]
        username: String,
        #[arg(short = 'p', long, env = "MOTORMATE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the persisted token
    Logout,
    /// Show the signed-in user and profile
    Whoami {
        #[arg(long, value_enum, default_value_t = AppArg::Admin)]
        app: AppArg,
    },
    /// Print one page of a resource
    List(ListArgs),
    /// Delete one record of a resource
    Delete {
        #[arg(value_enum)]
        resource: Resource,
        /// Id, or username for users
        key: String,
    },
    /// Print the admin dashboard counters
    Dashboard,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(value_enum)]
    pub resource: Resource,
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long)]
    pub page_size: Option<u32>,
    /// Free-text search
    #[arg(short = 'q', long)]
    pub query: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AppArg {
    Admin,
    Storefront,
}

impl From<AppArg> for App {
    fn from(app: AppArg) -> Self {
        match app {
            AppArg::Admin => App::Admin,
            AppArg::Storefront => App::Storefront,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    Brand,
    Collection,
    Model,
    Color,
    Vehicle,
    Pending,
    Denied,
    User,
    Blog,
    Category,
    Transaction,
    Products,
    Orders,
    ShopOrders,
    Cart,
}

impl Resource {
    /// Front end whose store holds this resource
    pub fn app(&self) -> App {
        match self {
            Resource::Products | Resource::Orders | Resource::ShopOrders | Resource::Cart => {
                App::Storefront
            }
            _ => App::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from([
            "motormate", "list", "shop-orders", "--page", "2", "-q", "honda",
        ])
        .unwrap();
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.resource, Resource::ShopOrders);
                assert_eq!(args.resource.app(), App::Storefront);
                assert_eq!(args.page, 2);
                assert_eq!(args.query.as_deref(), Some("honda"));
                assert!(args.page_size.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_login_defaults_to_admin() {
        let cli = Cli::try_parse_from(["motormate", "login", "-u", "alice", "-p", "secret"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Login {
                app: AppArg::Admin,
                ..
            }
        ));
    }
}
