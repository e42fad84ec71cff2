use crate::models::{Contract, ContractStatus, Party};

/// Filter for the contracts list: a text query over the property and the
/// other party, plus an optional status
#[derive(Debug, Clone, Default)]
pub struct ContractQuery {
    pub query: String,
    /// `None` shows every status
    pub status: Option<ContractStatus>,
    /// Decides whose name the query is matched against
    pub viewer: Party,
}

impl ContractQuery {
    pub fn new(viewer: Party) -> Self {
        Self {
            viewer,
            ..Self::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_status(mut self, status: Option<ContractStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn matches(&self, contract: &Contract) -> bool {
        let status_ok = self.status.map_or(true, |s| s == contract.status);
        status_ok && self.matches_text(contract)
    }

    fn matches_text(&self, contract: &Contract) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let hit = |field: &str| field.to_lowercase().contains(&needle);
        hit(&contract.property_title)
            || hit(&contract.property_location)
            || contract.counterparty(self.viewer).is_some_and(hit)
    }

    /// Matching contracts in source order
    pub fn apply<'a>(&self, contracts: &'a [Contract]) -> Vec<&'a Contract> {
        contracts.iter().filter(|c| self.matches(c)).collect()
    }
}
