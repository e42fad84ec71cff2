use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScoutError};

/// Lifecycle state of a lease
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ContractStatus {
    #[serde(alias = "En cours de négociation")]
    Negotiating,
    #[serde(alias = "En attente de signature")]
    PendingSignature,
    #[serde(alias = "Actif")]
    Active,
    #[serde(alias = "Expiré")]
    Expired,
    #[serde(alias = "Résilié")]
    Terminated,
}

impl ContractStatus {
    /// Still waiting on someone: negotiating or awaiting a signature
    pub fn is_pending(self) -> bool {
        matches!(
            self,
            ContractStatus::Negotiating | ContractStatus::PendingSignature
        )
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContractStatus::Negotiating => "negotiating",
            ContractStatus::PendingSignature => "pending-signature",
            ContractStatus::Active => "active",
            ContractStatus::Expired => "expired",
            ContractStatus::Terminated => "terminated",
        };
        f.write_str(label)
    }
}

impl FromStr for ContractStatus {
    type Err = String;

    /// Accepts the English labels and the status filter values of the
    /// contracts page (`actif`, `en-attente`, `negociation`, ...)
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "negotiating" | "negociation" => Ok(ContractStatus::Negotiating),
            "pending-signature" | "pending" | "en-attente" => Ok(ContractStatus::PendingSignature),
            "active" | "actif" => Ok(ContractStatus::Active),
            "expired" | "expire" => Ok(ContractStatus::Expired),
            "terminated" | "resilie" => Ok(ContractStatus::Terminated),
            other => Err(format!("unknown contract status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    #[serde(alias = "À jour")]
    UpToDate,
    #[default]
    #[serde(alias = "En attente")]
    Pending,
    #[serde(alias = "En retard")]
    Late,
}

/// Which side of a lease is acting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    Owner,
    #[default]
    Tenant,
}

impl FromStr for Party {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "owner" => Ok(Party::Owner),
            "tenant" => Ok(Party::Tenant),
            other => Err(format!("unknown party '{}'", other)),
        }
    }
}

/// A lease between a landlord and a tenant for one property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: u32,
    pub property_title: String,
    pub property_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landlord: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_rent: f64,
    pub deposit: f64,
    pub status: ContractStatus,
    #[serde(default)]
    pub signed_date: Option<NaiveDate>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_terms: Option<String>,
    #[serde(default)]
    pub total_revenue: f64,
}

/// Fields an owner fills in to draw up a new lease
#[derive(Debug, Clone, Default)]
pub struct ContractDraft {
    pub property_title: String,
    pub property_location: String,
    pub landlord: Option<String>,
    pub tenant: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub monthly_rent: f64,
    /// Defaults to one month of rent
    pub deposit: Option<f64>,
    pub special_terms: Option<String>,
}

impl Contract {
    /// Turn a draft into a contract awaiting signature
    pub fn from_draft(id: u32, draft: ContractDraft) -> Result<Self> {
        if draft.tenant.trim().is_empty() {
            return Err(ScoutError::invalid_contract(id, "tenant is required"));
        }
        let (Some(start_date), Some(end_date)) = (draft.start_date, draft.end_date) else {
            return Err(ScoutError::invalid_contract(id, "start and end dates are required"));
        };

        let contract = Contract {
            id,
            property_title: draft.property_title,
            property_location: draft.property_location,
            landlord: draft.landlord,
            tenant: Some(draft.tenant),
            start_date,
            end_date,
            monthly_rent: draft.monthly_rent,
            deposit: draft.deposit.unwrap_or(draft.monthly_rent),
            status: ContractStatus::PendingSignature,
            signed_date: None,
            payment_status: PaymentStatus::Pending,
            owner_signature: None,
            tenant_signature: None,
            special_terms: draft.special_terms.filter(|t| !t.trim().is_empty()),
            total_revenue: 0.0,
        };
        contract.validate()?;
        Ok(contract)
    }

    pub fn validate(&self) -> Result<()> {
        if self.property_title.trim().is_empty() {
            return Err(ScoutError::invalid_contract(self.id, "property title is empty"));
        }
        if self.end_date <= self.start_date {
            return Err(ScoutError::invalid_contract(
                self.id,
                format!("ends {} before it starts {}", self.end_date, self.start_date),
            ));
        }
        if !(self.monthly_rent.is_finite() && self.monthly_rent > 0.0) {
            return Err(ScoutError::invalid_contract(self.id, "monthly rent must be positive"));
        }
        if !(self.deposit.is_finite() && self.deposit >= 0.0) {
            return Err(ScoutError::invalid_contract(self.id, "deposit must not be negative"));
        }
        if self.status == ContractStatus::Active && self.signed_date.is_none() {
            return Err(ScoutError::invalid_contract(self.id, "active without a signing date"));
        }
        Ok(())
    }

    /// Sign a contract awaiting signature, making it active.
    ///
    /// `signer` is the full name typed by the signing party. Any other
    /// source state is rejected and the contract is left unchanged.
    pub fn sign(&mut self, party: Party, signer: &str, on: NaiveDate) -> Result<()> {
        if self.status != ContractStatus::PendingSignature {
            return Err(ScoutError::invalid_transition(
                self.id,
                self.status,
                ContractStatus::Active,
            ));
        }
        let signer = signer.trim();
        if signer.is_empty() {
            return Err(ScoutError::invalid_contract(self.id, "a signature is required"));
        }

        let signature = format!("{} - signed {}", signer, on.format("%d/%m/%Y"));
        match party {
            Party::Owner => self.owner_signature = Some(signature),
            Party::Tenant => self.tenant_signature = Some(signature),
        }
        self.status = ContractStatus::Active;
        self.signed_date = Some(on);
        Ok(())
    }

    /// The other side of the lease as seen by `viewer`
    pub fn counterparty(&self, viewer: Party) -> Option<&str> {
        match viewer {
            Party::Owner => self.tenant.as_deref(),
            Party::Tenant => self.landlord.as_deref(),
        }
    }
}

/// Dashboard figures over a set of contracts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    /// Sum of rent over active contracts
    pub monthly_payments: f64,
    /// Only meaningful for owners
    pub total_revenue: f64,
}

impl ContractStats {
    pub fn compute(contracts: &[Contract], viewer: Party) -> Self {
        let active = contracts.iter().filter(|c| c.status == ContractStatus::Active);
        Self {
            total: contracts.len(),
            active: active.clone().count(),
            pending: contracts.iter().filter(|c| c.status.is_pending()).count(),
            monthly_payments: active.map(|c| c.monthly_rent).sum(),
            total_revenue: match viewer {
                Party::Owner => contracts.iter().map(|c| c.total_revenue).sum(),
                Party::Tenant => 0.0,
            },
        }
    }
}
