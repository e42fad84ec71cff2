mod cli;
mod logging;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::Parser;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

use cli::{
    Cli, Command, ContractCreateArgs, ContractListArgs, ContractsCommand, FavoritesCommand,
    NotificationsCommand, SearchArgs,
};
use rental_scout::config::{CatalogSource, Config};
use rental_scout::geo::{FixedLocation, LocationLookup, Proximity};
use rental_scout::models::{ContractDraft, ContractStats, Listing};
use rental_scout::providers::{HttpProvider, JsonFileProvider, ListingProvider, MockCatalog};
use rental_scout::search::{ContractQuery, Criteria, PriceRange, SearchOutcome};
use rental_scout::store::{
    favorite_listings, ContractStore, FavoritesStore, JsonContractStore, JsonFileStore,
    JsonNotificationStore, NotificationStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let logging = logging::init(cli.debug)?;
    let config = Config::load_or_default(cli.config.as_deref()).context("Failed to load config")?;
    logging.apply_config_level(&config.log_level)?;

    match cli.command {
        Command::Search(args) => {
            let listings = load_listings(&config).await?;
            run_search(&config, &listings, args).await
        }
        Command::Favorites(command) => {
            let listings = load_listings(&config).await?;
            run_favorites(&config, &listings, command).await
        }
        Command::Contracts(command) => run_contracts(&config, command).await,
        Command::Notifications(command) => run_notifications(&config, command).await,
    }
}

async fn load_listings(config: &Config) -> Result<Vec<Listing>> {
    let provider = build_provider(config)?;
    info!("🏠 Rental Scout - {} catalog", provider.source_name());
    provider
        .listings()
        .await
        .context("Failed to load listings")
}

fn build_provider(config: &Config) -> Result<Box<dyn ListingProvider>> {
    let provider: Box<dyn ListingProvider> = match config.catalog.source {
        CatalogSource::Mock => Box::new(MockCatalog),
        CatalogSource::File => {
            let path = config
                .catalog
                .path
                .clone()
                .context("catalog.path is not set")?;
            Box::new(JsonFileProvider::new(path))
        }
        CatalogSource::Http => {
            let url = config.catalog.url.clone().context("catalog.url is not set")?;
            Box::new(HttpProvider::new(url).context("Failed to create HTTP client")?)
        }
    };
    Ok(provider)
}

async fn run_search(config: &Config, listings: &[Listing], args: SearchArgs) -> Result<()> {
    // The position arrives on its own task so the catalog work is not held up
    let lookup = args
        .near
        .map(|here| LocationLookup::spawn(Arc::new(FixedLocation(here))));

    let max = args.max.unwrap_or(config.search.default_max_price);
    let mut criteria = Criteria {
        query: args.query,
        property_type: args.property_type,
        price_range: PriceRange::new(args.min, max),
        category: args.category,
        amenities: BTreeSet::new(),
        sort: args.sort,
        only_available: args.available || config.search.only_available,
        origin: None,
    };
    for amenity in &args.amenities {
        criteria = criteria.with_amenity(amenity);
    }

    let candidates: Vec<Listing> = match lookup {
        Some(lookup) => {
            let outcome = lookup.outcome().await;
            criteria.origin = outcome.position();
            let proximity = Proximity::new(config.geo.radius_km, config.geo.fallback_regions.clone());
            proximity
                .nearby(listings, &outcome)
                .into_iter()
                .cloned()
                .collect()
        }
        None => listings.to_vec(),
    };
    debug!("Searching {} candidate listings", candidates.len());

    let outcome = SearchOutcome::run(&candidates, &criteria);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.listings)?);
        return Ok(());
    }

    info!("{}", outcome.summary());
    print_listings(&outcome.listings);
    Ok(())
}

async fn run_favorites(
    config: &Config,
    listings: &[Listing],
    command: FavoritesCommand,
) -> Result<()> {
    let store = JsonFileStore::new(&config.store.favorites_path);

    match command {
        FavoritesCommand::List => {
            let favorites = store.list().await.context("Failed to read favorites")?;
            let saved = favorite_listings(listings, &favorites);
            if saved.is_empty() {
                println!("No favorites yet");
            } else {
                print_listings(&saved);
            }
        }
        FavoritesCommand::Add { id } => {
            if !listings.iter().any(|l| l.id == id) {
                anyhow::bail!("No listing with id {}", id);
            }
            let today = Local::now().date_naive();
            if store.add(id, today).await.context("Failed to save favorite")? {
                info!("💾 Added listing {} to favorites", id);
            } else {
                info!("Listing {} is already a favorite", id);
            }
        }
        FavoritesCommand::Remove { id } => {
            if store.remove(id).await.context("Failed to save favorites")? {
                info!("Removed listing {} from favorites", id);
            } else {
                info!("Listing {} was not a favorite", id);
            }
        }
    }
    Ok(())
}

async fn run_contracts(config: &Config, command: ContractsCommand) -> Result<()> {
    let store = JsonContractStore::new(&config.store.contracts_path);
    if store
        .seed(&MockCatalog::contracts())
        .await
        .context("Failed to create contracts file")?
    {
        info!("Seeded demo contracts into {:?}", config.store.contracts_path);
    }

    match command {
        ContractsCommand::List(args) => list_contracts(&store, args).await?,
        ContractsCommand::Create(args) => {
            let contract = store
                .create(contract_draft(args))
                .await
                .context("Failed to create contract")?;
            println!(
                "Contract {} created for {}, awaiting signature",
                contract.id, contract.property_title
            );
        }
        ContractsCommand::Sign { id, name, party } => {
            let today = Local::now().date_naive();
            let contract = store
                .sign(id, party, &name, today)
                .await
                .with_context(|| format!("Failed to sign contract {}", id))?;
            println!("Contract {} is now {}", contract.id, contract.status);
        }
    }
    Ok(())
}

async fn list_contracts(store: &JsonContractStore, args: ContractListArgs) -> Result<()> {
    let contracts = store.list().await.context("Failed to read contracts")?;
    let stats = ContractStats::compute(&contracts, args.viewer);
    println!(
        "{} contracts · {} active · {} pending · {} TND/month",
        stats.total, stats.active, stats.pending, stats.monthly_payments
    );
    if stats.total_revenue > 0.0 {
        println!("Total revenue: {} TND", stats.total_revenue);
    }
    println!();

    let query = ContractQuery::new(args.viewer)
        .with_query(args.query)
        .with_status(args.status);
    let matching = query.apply(&contracts);
    if matching.is_empty() {
        println!("No contracts match your criteria");
        return Ok(());
    }

    for contract in matching {
        println!("#{} {} [{}]", contract.id, contract.property_title, contract.status);
        println!("   {}", contract.property_location);
        if let Some(other) = contract.counterparty(args.viewer) {
            println!("   With: {}", other);
        }
        println!(
            "   {} → {} · {} TND/month · deposit {} TND",
            contract.start_date.format("%d/%m/%Y"),
            contract.end_date.format("%d/%m/%Y"),
            contract.monthly_rent,
            contract.deposit
        );
        println!();
    }
    Ok(())
}

fn contract_draft(args: ContractCreateArgs) -> ContractDraft {
    ContractDraft {
        property_title: args.title,
        property_location: args.location,
        landlord: args.landlord,
        tenant: args.tenant,
        start_date: Some(args.start),
        end_date: Some(args.end),
        monthly_rent: args.rent,
        deposit: args.deposit,
        special_terms: args.terms,
    }
}

async fn run_notifications(config: &Config, command: NotificationsCommand) -> Result<()> {
    let store = JsonNotificationStore::new(&config.store.notifications_path);
    store
        .seed(&MockCatalog::notifications())
        .await
        .context("Failed to create notifications file")?;

    match command {
        NotificationsCommand::List => {
            let mut notifications = store.list().await.context("Failed to read notifications")?;
            notifications.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            let unread = notifications.iter().filter(|n| !n.read).count();
            println!("{} notifications, {} unread", notifications.len(), unread);
            println!();

            let now = Utc::now();
            for notification in &notifications {
                let marker = if notification.read { " " } else { "●" };
                println!(
                    "{} #{} {} ({})",
                    marker,
                    notification.id,
                    notification.title,
                    notification.age_label(now)
                );
                println!("   {}", notification.description);
            }
        }
        NotificationsCommand::Read { id } => {
            store.mark_read(id).await.context("Failed to update notifications")?;
            debug!("Marked notification {} read", id);
        }
        NotificationsCommand::ReadAll => {
            let changed = store
                .mark_all_read()
                .await
                .context("Failed to update notifications")?;
            info!("Marked {} notifications read", changed);
        }
        NotificationsCommand::Delete { id } => {
            store.delete(id).await.context("Failed to update notifications")?;
            info!("Deleted notification {}", id);
        }
    }
    Ok(())
}

fn print_listings(listings: &[&Listing]) {
    for (i, listing) in listings.iter().enumerate() {
        println!(
            "{}. {} ({} TND/{})",
            i + 1,
            listing.title,
            listing.price,
            listing.price_type
        );
        println!("   {} · {}", listing.property_type, listing.location);
        if let Some(distance) = &listing.distance {
            println!("   📍 {}", distance);
        }
        println!("   ★ {} ({} reviews)", listing.rating, listing.reviews);
        if !listing.amenities.is_empty() {
            let amenities: Vec<&str> = listing.amenities.iter().map(String::as_str).collect();
            println!("   Amenities: {}", amenities.join(", "));
        }
        if !listing.available {
            println!("   Unavailable");
        }
        println!("   ID: {}", listing.id);
        println!();
    }
}
