use crate::error::{Result, ScoutError};
use crate::models::{Contract, ContractDraft, Party};
use crate::store::records::JsonRecords;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::info;

/// Read/write contract for leases.
///
/// `create` assigns the next free id. `sign` only succeeds on a contract
/// awaiting signature; a failed sign leaves the stored contract untouched.
#[async_trait]
pub trait ContractStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Contract>>;

    async fn get(&self, id: u32) -> Result<Contract> {
        self.list()
            .await?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| ScoutError::not_found("contract", id))
    }

    async fn create(&self, draft: ContractDraft) -> Result<Contract>;

    async fn sign(&self, id: u32, party: Party, signer: &str, on: NaiveDate) -> Result<Contract>;
}

fn create_contract(contracts: &mut Vec<Contract>, draft: ContractDraft) -> Result<Contract> {
    let id = contracts.iter().map(|c| c.id).max().unwrap_or(0) + 1;
    let contract = Contract::from_draft(id, draft)?;
    contracts.push(contract.clone());
    info!("📝 Drew up contract {} for {}", id, contract.property_title);
    Ok(contract)
}

fn sign_contract(
    contracts: &mut [Contract],
    id: u32,
    party: Party,
    signer: &str,
    on: NaiveDate,
) -> Result<Contract> {
    let contract = contracts
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| ScoutError::not_found("contract", id))?;
    contract.sign(party, signer, on)?;
    info!("✍️  Contract {} signed by {}", id, signer.trim());
    Ok(contract.clone())
}

/// Leases that live for the session only
#[derive(Debug, Default)]
pub struct MemoryContractStore {
    contracts: RwLock<Vec<Contract>>,
}

impl MemoryContractStore {
    pub fn new(contracts: Vec<Contract>) -> Self {
        Self {
            contracts: RwLock::new(contracts),
        }
    }
}

#[async_trait]
impl ContractStore for MemoryContractStore {
    async fn list(&self) -> Result<Vec<Contract>> {
        Ok(self.contracts.read().await.clone())
    }

    async fn create(&self, draft: ContractDraft) -> Result<Contract> {
        create_contract(&mut *self.contracts.write().await, draft)
    }

    async fn sign(&self, id: u32, party: Party, signer: &str, on: NaiveDate) -> Result<Contract> {
        sign_contract(&mut self.contracts.write().await, id, party, signer, on)
    }
}

/// Leases persisted as a JSON array
#[derive(Debug)]
pub struct JsonContractStore {
    records: JsonRecords<Contract>,
}

impl JsonContractStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            records: JsonRecords::new(path),
        }
    }

    /// Write `contracts` if the file does not exist yet
    pub async fn seed(&self, contracts: &[Contract]) -> Result<bool> {
        self.records.seed(contracts).await
    }
}

#[async_trait]
impl ContractStore for JsonContractStore {
    async fn list(&self) -> Result<Vec<Contract>> {
        let contracts = self.records.read().await?;
        for contract in &contracts {
            contract.validate()?;
        }
        Ok(contracts)
    }

    async fn create(&self, draft: ContractDraft) -> Result<Contract> {
        self.records
            .update(|contracts| {
                let created = create_contract(contracts, draft);
                (created.is_ok(), created)
            })
            .await?
    }

    async fn sign(&self, id: u32, party: Party, signer: &str, on: NaiveDate) -> Result<Contract> {
        self.records
            .update(|contracts| {
                let signed = sign_contract(contracts, id, party, signer, on);
                (signed.is_ok(), signed)
            })
            .await?
    }
}
