use clap::{Args, Parser, Subcommand};
use chrono::NaiveDate;
use rental_scout::models::{ContractStatus, Coordinates, Party};
use rental_scout::search::{CategoryFilter, SortMode, TypeFilter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rental-scout", version, about = "Search rental listings")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter and sort the catalog
    Search(SearchArgs),

    /// Manage saved listings
    #[command(subcommand)]
    Favorites(FavoritesCommand),

    /// Browse, draw up and sign leases
    #[command(subcommand)]
    Contracts(ContractsCommand),

    /// Read the activity feed
    #[command(subcommand)]
    Notifications(NotificationsCommand),
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text matched against title and location
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Property type, or "all"
    #[arg(short = 't', long = "type", default_value = "all")]
    pub property_type: TypeFilter,

    /// Lowest price
    #[arg(long, default_value_t = 0.0)]
    pub min: f64,

    /// Highest price (defaults to the configured maximum)
    #[arg(long)]
    pub max: Option<f64>,

    /// student or family
    #[arg(short, long)]
    pub category: Option<CategoryFilter>,

    /// price, price-desc, rating or distance
    #[arg(short, long)]
    pub sort: Option<SortMode>,

    /// Required amenity; repeat to require several
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,

    /// Hide unavailable listings
    #[arg(long)]
    pub available: bool,

    /// Your position as LAT,LNG; limits results to the configured radius
    #[arg(long)]
    pub near: Option<Coordinates>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum FavoritesCommand {
    /// Show saved listings
    List,
    /// Save a listing
    Add { id: u32 },
    /// Forget a listing
    Remove { id: u32 },
}

#[derive(Subcommand, Debug)]
pub enum ContractsCommand {
    /// Show contracts with dashboard figures
    List(ContractListArgs),
    /// Draw up a lease awaiting signature
    Create(ContractCreateArgs),
    /// Sign a lease awaiting signature
    Sign {
        id: u32,
        /// Full name used as the signature
        #[arg(long)]
        name: String,
        /// owner or tenant
        #[arg(long = "as", default_value = "tenant")]
        party: Party,
    },
}

#[derive(Args, Debug)]
pub struct ContractListArgs {
    /// Text matched against property, location and the other party
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// active, pending-signature, negotiating, expired or terminated
    #[arg(short, long)]
    pub status: Option<ContractStatus>,

    /// owner or tenant
    #[arg(long = "as", default_value = "tenant")]
    pub viewer: Party,
}

#[derive(Args, Debug)]
pub struct ContractCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub location: String,
    #[arg(long)]
    pub tenant: String,
    #[arg(long)]
    pub landlord: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub start: NaiveDate,
    /// YYYY-MM-DD
    #[arg(long)]
    pub end: NaiveDate,
    #[arg(long)]
    pub rent: f64,
    /// Defaults to one month of rent
    #[arg(long)]
    pub deposit: Option<f64>,
    #[arg(long)]
    pub terms: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum NotificationsCommand {
    /// Show the feed, newest first
    List,
    /// Mark one notification read
    Read { id: u32 },
    /// Mark everything read
    ReadAll,
    Delete { id: u32 },
}
