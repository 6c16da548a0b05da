//! Maison Bonheur CLI - drive the storefront stores from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Put a product in the cart and check out
//! mb-cli cart add --id p1 --name "Rose Absolue" --price 120 -q 2
//! mb-cli checkout summary --shipping express
//! mb-cli checkout place --shipping express --payment card --city Tunis
//!
//! # Accounts
//! MB_PASSWORD=secret1 mb-cli account register --first-name Leila --last-name Ben \
//!     -e leila@example.com --address "12 rue de Carthage"
//! MB_PASSWORD=secret1 mb-cli account login -e leila@example.com
//!
//! # Compose a custom perfume
//! mb-cli creator compose Rose Santal --add-to-cart
//! ```
//!
//! # Commands
//!
//! - `cart` - List and edit the cart
//! - `wishlist` - List and edit favorites
//! - `orders` - Order history
//! - `checkout` - Totals and order placement
//! - `account` - Register, log in, edit profile
//! - `creator` - Compose custom perfumes
//! - `catalog` - Print catalog API listing URLs
//!
//! Configuration is read from the environment (and `.env`); see
//! `maison_bonheur_storefront::config`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use maison_bonheur_storefront::config::StorefrontConfig;
use maison_bonheur_storefront::{AppError, Storefront};

mod commands;

use commands::account::AccountAction;
use commands::cart::CartAction;
use commands::catalog::CatalogArgs;
use commands::checkout::CheckoutAction;
use commands::creator::CreatorAction;
use commands::orders::OrdersAction;
use commands::wishlist::WishlistAction;

const DEFAULT_LOG_FILTER: &str = "maison_bonheur_storefront=info,mb_cli=info";

#[derive(Parser)]
#[command(name = "mb-cli")]
#[command(author, version, about = "Maison Bonheur storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Favorites
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Placed orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Checkout
    Checkout {
        #[command(subcommand)]
        action: CheckoutAction,
    },
    /// Customer account
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// Perfume creator
    Creator {
        #[command(subcommand)]
        action: CreatorAction,
    },
    /// Catalog listing URLs
    Catalog(CatalogArgs),
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = StorefrontConfig::from_env()?;

    if let Commands::Catalog(args) = cli.command {
        return commands::catalog::urls(&config, args);
    }

    let mut shop = Storefront::open(&config)?;
    match cli.command {
        Commands::Cart { action } => commands::cart::run(&mut shop, action),
        Commands::Wishlist { action } => commands::wishlist::run(&mut shop, action),
        Commands::Orders { action } => commands::orders::run(&shop, action)?,
        Commands::Checkout { action } => commands::checkout::run(&mut shop, action)?,
        Commands::Account { action } => commands::account::run(&mut shop, action)?,
        Commands::Creator { action } => commands::creator::run(&mut shop, action)?,
        Commands::Catalog(_) => {}
    }
    Ok(())
}
