//! End-to-end flows over the demo catalog

use chrono::NaiveDate;
use rental_scout::geo::{DeniedLocation, FixedLocation, LocationLookup, LookupOutcome, Proximity};
use rental_scout::models::{ContractStatus, Coordinates, Party};
use rental_scout::providers::{JsonFileProvider, ListingProvider, MockCatalog};
use rental_scout::search::{
    CategoryFilter, ContractQuery, Criteria, SearchOutcome, SortMode, TypeFilter,
};
use rental_scout::store::{
    favorite_listings, ContractStore, FavoritesStore, JsonContractStore, JsonFileStore,
    JsonNotificationStore, MemoryStore, NotificationStore,
};
use rental_scout::PropertyType;
use std::sync::Arc;

fn ids(outcome: &SearchOutcome<'_>) -> Vec<u32> {
    outcome.listings.iter().map(|l| l.id).collect()
}

#[tokio::test]
async fn test_student_studios_by_price() {
    let listings = MockCatalog.listings().await.unwrap();
    let criteria = Criteria::default()
        .with_type(TypeFilter::Only(PropertyType::Studio))
        .with_category(Some(CategoryFilter::Student))
        .with_sort(SortMode::PriceAsc);

    let outcome = SearchOutcome::run(&listings, &criteria);
    assert_eq!(ids(&outcome), vec![4, 1]);
    assert_eq!(outcome.summary(), "2 listing(s) found");

    let outcome = SearchOutcome::run(&listings, &criteria.clone().only_available(true));
    assert_eq!(ids(&outcome), vec![1]);
}

#[tokio::test]
async fn test_default_slider_hides_nothing_below_2000() {
    let listings = MockCatalog.listings().await.unwrap();
    let outcome = SearchOutcome::run(&listings, &Criteria::default());
    assert_eq!(ids(&outcome), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_distance_sort_by_description() {
    let listings = MockCatalog.listings().await.unwrap();
    let criteria = Criteria::default().with_sort(SortMode::DistanceAsc);

    // 5 min, 10 min, 200m, 300m: units are not reconciled
    let outcome = SearchOutcome::run(&listings, &criteria);
    assert_eq!(ids(&outcome), vec![2, 3, 1, 4]);
}

#[tokio::test]
async fn test_located_user_sees_nearby_sorted_by_distance() {
    let listings = MockCatalog.listings().await.unwrap();
    let bardo = Coordinates::new(36.8092, 10.1406);

    let lookup = LocationLookup::spawn(Arc::new(FixedLocation(bardo)));
    let outcome = lookup.outcome().await;
    let proximity = Proximity::new(10.0, Vec::new());
    let near: Vec<_> = proximity.nearby(&listings, &outcome).into_iter().cloned().collect();

    let criteria = Criteria::default()
        .with_sort(SortMode::DistanceAsc)
        .with_origin(outcome.position());
    let results = SearchOutcome::run(&near, &criteria);
    assert_eq!(ids(&results), vec![2, 4, 1]);
}

#[tokio::test]
async fn test_denied_location_shows_everything() {
    let listings = MockCatalog.listings().await.unwrap();

    let outcome = LocationLookup::spawn(Arc::new(DeniedLocation)).outcome().await;
    assert!(matches!(outcome, LookupOutcome::Failed(_)));

    let visible = Proximity::default().nearby(&listings, &outcome);
    assert_eq!(visible.len(), listings.len());
}

#[tokio::test]
async fn test_saved_catalog_and_favorites_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("listings.json");
    let json = serde_json::to_string_pretty(&MockCatalog::catalog()).unwrap();
    tokio::fs::write(&catalog_path, json).await.unwrap();

    let listings = JsonFileProvider::new(&catalog_path).listings().await.unwrap();
    let store = JsonFileStore::new(dir.path().join("favorites.json"));
    let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

    store.add(3, day).await.unwrap();
    store.add(1, day).await.unwrap();

    let saved = favorite_listings(&listings, &store.list().await.unwrap());
    let titles: Vec<&str> = saved.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Villa avec jardin sécurisé", "Studio moderne près INSAT"]
    );
}

#[tokio::test]
async fn test_stores_are_interchangeable() {
    let dir = tempfile::tempdir().unwrap();
    let stores: Vec<Box<dyn FavoritesStore>> = vec![
        Box::new(MemoryStore::new()),
        Box::new(JsonFileStore::new(dir.path().join("favorites.json"))),
    ];
    let day = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();

    for store in stores {
        assert!(store.add(2, day).await.unwrap());
        assert!(!store.add(2, day).await.unwrap());
        assert!(store.contains(2).await.unwrap());
        store.clear().await.unwrap();
        assert!(!store.contains(2).await.unwrap());
    }
}

#[tokio::test]
async fn test_tenant_signs_pending_lease() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonContractStore::new(dir.path().join("contracts.json"));
    store.seed(&MockCatalog::contracts()).await.unwrap();

    let pending = ContractQuery::new(Party::Tenant)
        .with_query("manouba")
        .with_status(Some(ContractStatus::PendingSignature));
    let contracts = store.list().await.unwrap();
    let ids: Vec<u32> = pending.apply(&contracts).iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2]);

    let signed_on = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
    store
        .sign(2, Party::Tenant, "Amira Ben Said", signed_on)
        .await
        .unwrap();

    let contracts = store.list().await.unwrap();
    assert!(pending.apply(&contracts).is_empty());
    let active = ContractQuery::new(Party::Tenant)
        .with_query("manouba")
        .with_status(Some(ContractStatus::Active));
    let ids: Vec<u32> = active.apply(&contracts).iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2]);

    // A second signature is not a valid transition
    assert!(store
        .sign(2, Party::Owner, "Leila Mansouri", signed_on)
        .await
        .is_err());
}

#[tokio::test]
async fn test_notification_feed_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notifications.json");

    let store = JsonNotificationStore::new(&path);
    store.seed(&MockCatalog::notifications()).await.unwrap();
    store.mark_read(1).await.unwrap();
    store.delete(6).await.unwrap();

    let reopened = JsonNotificationStore::new(&path);
    assert_eq!(reopened.unread_count().await.unwrap(), 1);
    assert_eq!(reopened.list().await.unwrap().len(), 5);
}
