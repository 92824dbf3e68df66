//! Hik Café CLI - drive the cart engine from a terminal.
//!
//! Each invocation is one session event; cart state persists between runs
//! in a JSON blob under the configured cart directory.
//!
//! # Usage
//!
//! ```bash
//! # Browse the menu
//! hik-cafe menu
//! hik-cafe menu --category coffee
//! hik-cafe menu --search latte
//!
//! # Build a cart
//! hik-cafe add Latte
//! hik-cafe add Latte
//! hik-cafe add "Avocado Toast"
//! hik-cafe show
//!
//! # Adjust it (indexes come from `show`)
//! hik-cafe inc 0
//! hik-cafe dec 0
//! hik-cafe remove 1
//!
//! # Check out
//! hik-cafe checkout --name Ada
//! ```
//!
//! # Environment
//!
//! - `HIK_CAFE_CART_DIR` - directory holding the persisted cart
//!   (default: `.hik-cafe`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "hik-cafe")]
#[command(author, version, about = "Hik Café cart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the menu
    Menu {
        /// Only show one category (e.g., coffee, tea, pastry, food)
        #[arg(short, long)]
        category: Option<String>,

        /// Text search over name, category, and description
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Add one unit of a menu item to the cart
    Add {
        /// Menu item name (e.g., "Latte")
        name: String,

        /// Off-menu price override; validated before it touches the cart
        #[arg(short, long)]
        price: Option<String>,
    },
    /// Show the cart panel
    Show,
    /// Increase the quantity of the line item at INDEX
    Inc {
        /// Line item index from `show`
        index: usize,
    },
    /// Decrease the quantity of the line item at INDEX (floors at 1)
    Dec {
        /// Line item index from `show`
        index: usize,
    },
    /// Remove the line item at INDEX
    Remove {
        /// Line item index from `show`
        index: usize,
    },
    /// Empty the cart
    Clear,
    /// Place the order (clears the cart on confirmation)
    Checkout {
        /// Name for the order confirmation
        #[arg(short, long)]
        name: Option<String>,

        /// Free-text notes for the order
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Print the badge count (total units in the cart)
    Badge,
}

fn main() {
    // Load .env if present, then initialize tracing
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::CliConfig::from_env()?;

    match cli.command {
        Commands::Menu { category, search } => {
            commands::menu::list(category.as_deref(), search.as_deref())?;
        }
        Commands::Add { name, price } => commands::cart::add(&config, &name, price.as_deref())?,
        Commands::Show => commands::cart::show(&config),
        Commands::Inc { index } => commands::cart::change(&config, index, 1)?,
        Commands::Dec { index } => commands::cart::change(&config, index, -1)?,
        Commands::Remove { index } => commands::cart::remove(&config, index)?,
        Commands::Clear => commands::cart::clear(&config),
        Commands::Checkout { name, notes } => commands::cart::checkout(&config, name, notes),
        Commands::Badge => commands::cart::badge(&config),
    }

    Ok(())
}
