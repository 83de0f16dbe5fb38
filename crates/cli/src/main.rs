//! Cartwheel CLI - drive the cart from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add one unit of product 1 to the cart
//! cartwheel add 1
//!
//! # Set product 1's quantity to 3
//! cartwheel update 1 3
//!
//! # Remove product 1 from the cart
//! cartwheel remove 1
//!
//! # Print the current cart
//! cartwheel show
//! ```
//!
//! # Environment Variables
//!
//! - `CARTWHEEL_API_URL` - Storefront backend base URL (default
//!   `http://localhost:3333`)
//! - `CARTWHEEL_STORE_PATH` - Cart store file (default `cartwheel.json`)

#![cfg_attr(not(test), forbid(unsafe_code))]
// User-facing CLI output goes to stdout/stderr by design of a terminal tool
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use std::sync::Arc;

use clap::{Parser, Subcommand};

use cartwheel_cart::CartStore;
use cartwheel_cart::api::ApiClient;
use cartwheel_cart::config::CartConfig;
use cartwheel_cart::notify::Notifier;
use cartwheel_cart::storage::FileStore;
use cartwheel_core::ProductId;

#[derive(Parser)]
#[command(name = "cartwheel")]
#[command(author, version, about = "Cartwheel shopping cart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a product to the cart
    Add {
        /// Product ID
        product_id: i64,
    },
    /// Remove a product from the cart entirely
    Remove {
        /// Product ID
        product_id: i64,
    },
    /// Set the quantity of a product already in the cart
    Update {
        /// Product ID
        product_id: i64,
        /// New quantity (must be >= 1)
        amount: i64,
    },
    /// Print the current cart
    Show,
}

/// Notifier that prints failure messages to stderr, toast-style.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing; default to warnings only so notifications stay
    // the primary output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cartwheel_cart=warn".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;

    let api = Arc::new(ApiClient::new(&config));
    let storage = Arc::new(FileStore::new(&config.store_path));
    let notifier = Arc::new(StderrNotifier);

    let mut store = CartStore::load(api.clone(), api, storage, notifier);

    match cli.command {
        Commands::Add { product_id } => store.add_product(ProductId::new(product_id)).await,
        Commands::Remove { product_id } => store.remove_product(ProductId::new(product_id)),
        Commands::Update { product_id, amount } => {
            store
                .update_product_amount(ProductId::new(product_id), amount)
                .await;
        }
        Commands::Show => {}
    }

    print_cart(store.cart());
    Ok(())
}

/// Render the cart as a plain-text table.
fn print_cart(cart: &cartwheel_core::Cart) {
    if cart.is_empty() {
        println!("cart is empty");
        return;
    }

    for entry in cart.entries() {
        println!(
            "{:>6}  {:<30} x{:<4} @ {:>10}  = {:>10}",
            entry.product_id,
            entry.title,
            entry.amount,
            entry.price,
            entry.subtotal()
        );
    }
    println!("total: {} ({} items)", cart.total(), cart.item_count());
}
