use crate::error::Result;
use crate::models::{
    Contract, ContractStatus, Coordinates, Listing, Notification, NotificationKind, PaymentStatus,
    PriceType, PropertyType,
};
use chrono::{DateTime, NaiveDate, Utc};
use crate::providers::traits::ListingProvider;
use async_trait::async_trait;
use std::collections::BTreeSet;
use tracing::info;

/// The built-in demo catalog around Tunis
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCatalog;

fn tags(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn lease(
    id: u32,
    property: (&str, &str),
    landlord: Option<&str>,
    tenant: Option<&str>,
    term: (NaiveDate, NaiveDate),
    rent: f64,
    status: ContractStatus,
    signed: Option<NaiveDate>,
    total_revenue: f64,
) -> Contract {
    Contract {
        id,
        property_title: property.0.to_string(),
        property_location: property.1.to_string(),
        landlord: landlord.map(str::to_string),
        tenant: tenant.map(str::to_string),
        start_date: term.0,
        end_date: term.1,
        monthly_rent: rent,
        deposit: rent,
        status,
        signed_date: signed,
        payment_status: if status == ContractStatus::Active {
            PaymentStatus::UpToDate
        } else {
            PaymentStatus::Pending
        },
        owner_signature: None,
        tenant_signature: None,
        special_terms: None,
        total_revenue,
    }
}

fn notice(
    id: u32,
    kind: NotificationKind,
    title: &str,
    description: &str,
    timestamp: &str,
    read: bool,
    action: &str,
) -> Notification {
    Notification {
        id,
        kind,
        title: title.to_string(),
        description: description.to_string(),
        timestamp: at(timestamp),
        read,
        action: Some(action.to_string()),
    }
}

impl MockCatalog {
    pub fn catalog() -> Vec<Listing> {
        vec![
            Listing {
                id: 1,
                title: "Studio moderne près INSAT".to_string(),
                price: 450.0,
                price_type: PriceType::Month,
                location: "Ariana, Raoued".to_string(),
                distance: Some("200m de l'INSAT".to_string()),
                property_type: PropertyType::Studio,
                amenities: tags(&["wifi", "furnished", "parking"]),
                rating: 4.8,
                reviews: 24,
                available: true,
                is_student_friendly: Some(true),
                is_family_friendly: None,
                owner: Some("Ahmed Karim".to_string()),
                coordinates: Some(Coordinates::new(36.8622, 10.1958)),
            },
            Listing {
                id: 2,
                title: "Appartement 2 pièces famille".to_string(),
                price: 680.0,
                price_type: PriceType::Month,
                location: "Tunis, Bardo".to_string(),
                distance: Some("5 min de l'école primaire".to_string()),
                property_type: PropertyType::Apartment,
                amenities: tags(&["wifi", "garden", "security"]),
                rating: 4.6,
                reviews: 18,
                available: true,
                is_student_friendly: None,
                is_family_friendly: Some(true),
                owner: Some("Fatma Ben Ali".to_string()),
                coordinates: Some(Coordinates::new(36.8092, 10.1406)),
            },
            Listing {
                id: 3,
                title: "Villa avec jardin sécurisé".to_string(),
                price: 1200.0,
                price_type: PriceType::Month,
                location: "Sidi Bou Saïd".to_string(),
                distance: Some("10 min du centre".to_string()),
                property_type: PropertyType::Villa,
                amenities: tags(&["wifi", "garden", "parking", "security"]),
                rating: 4.9,
                reviews: 32,
                available: true,
                is_student_friendly: None,
                is_family_friendly: Some(true),
                owner: Some("Mohamed Trabelsi".to_string()),
                coordinates: Some(Coordinates::new(36.8704, 10.3472)),
            },
            Listing {
                id: 4,
                title: "Studio étudiant meublé".to_string(),
                price: 380.0,
                price_type: PriceType::Month,
                location: "Tunis, Manouba".to_string(),
                distance: Some("300m de l'Université Manouba".to_string()),
                property_type: PropertyType::Studio,
                amenities: tags(&["wifi", "furnished"]),
                rating: 4.3,
                reviews: 15,
                available: false,
                is_student_friendly: Some(true),
                is_family_friendly: None,
                owner: Some("Leila Mansouri".to_string()),
                coordinates: Some(Coordinates::new(36.8083, 10.0963)),
            },
        ]
    }
}

impl MockCatalog {
    /// Demo leases, seen from both sides
    pub fn contracts() -> Vec<Contract> {
        vec![
            lease(
                1,
                ("Studio moderne près INSAT", "Ariana, Raoued"),
                Some("Ahmed Karim"),
                None,
                (day(2024, 2, 1), day(2024, 8, 1)),
                450.0,
                ContractStatus::Active,
                Some(day(2024, 1, 15)),
                0.0,
            ),
            lease(
                2,
                ("Chambre étudiante", "Tunis, Manouba"),
                Some("Leila Mansouri"),
                None,
                (day(2023, 9, 1), day(2024, 6, 30)),
                380.0,
                ContractStatus::PendingSignature,
                None,
                0.0,
            ),
            lease(
                3,
                ("Villa familiale avec jardin", "Sidi Bou Saïd"),
                None,
                Some("Famille Gharbi"),
                (day(2023, 1, 1), day(2024, 12, 31)),
                1200.0,
                ContractStatus::Active,
                Some(day(2022, 12, 15)),
                14400.0,
            ),
            lease(
                4,
                ("Studio étudiant meublé", "Tunis, Manouba"),
                None,
                Some("Amira Ben Said"),
                (day(2024, 1, 15), day(2024, 7, 15)),
                480.0,
                ContractStatus::Negotiating,
                None,
                960.0,
            ),
        ]
    }

    /// Demo activity feed
    pub fn notifications() -> Vec<Notification> {
        vec![
            notice(
                1,
                NotificationKind::Message,
                "Nouveau message",
                "Ahmed Karim a répondu à votre demande de visite",
                "2024-01-15T14:30:00Z",
                false,
                "/messages?contact=Ahmed Karim",
            ),
            notice(
                2,
                NotificationKind::Favorite,
                "Nouveau bien favori",
                "Un nouveau studio près de votre université est disponible",
                "2024-01-15T10:15:00Z",
                false,
                "/search?near=university",
            ),
            notice(
                3,
                NotificationKind::Contract,
                "Contrat à signer",
                "Votre contrat pour le studio INSAT est prêt pour signature",
                "2024-01-14T16:45:00Z",
                true,
                "/contracts",
            ),
            notice(
                4,
                NotificationKind::Payment,
                "Rappel de paiement",
                "Votre loyer de février est dû dans 5 jours",
                "2024-01-13T09:00:00Z",
                true,
                "/contracts",
            ),
            notice(
                5,
                NotificationKind::Property,
                "Bien ajouté",
                "Votre studio a été publié avec succès",
                "2024-01-12T11:20:00Z",
                true,
                "/dashboard",
            ),
            notice(
                6,
                NotificationKind::Visit,
                "Demande de visite",
                "Amira Ben Said souhaite visiter votre villa",
                "2024-01-11T15:30:00Z",
                true,
                "/messages?contact=Amira Ben Said",
            ),
        ]
    }
}

#[async_trait]
impl ListingProvider for MockCatalog {
    async fn listings(&self) -> Result<Vec<Listing>> {
        info!("📋 Loading built-in demo catalog");
        Ok(Self::catalog())
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validate_all;

    #[test]
    fn test_catalog_is_valid() {
        let listings = MockCatalog::catalog();
        assert_eq!(listings.len(), 4);
        assert!(validate_all(&listings).is_ok());
    }

    #[test]
    fn test_demo_contracts_are_valid() {
        for contract in MockCatalog::contracts() {
            assert!(contract.validate().is_ok(), "contract {}", contract.id);
        }
    }

    #[test]
    fn test_demo_feed_has_unread_entries() {
        let feed = MockCatalog::notifications();
        assert_eq!(crate::models::notification::unread_count(&feed), 2);
        assert_eq!(feed[0].timestamp.to_rfc3339(), "2024-01-15T14:30:00+00:00");
    }
}
