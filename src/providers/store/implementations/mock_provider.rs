use async_trait::async_trait;
use dashmap::DashMap;

use crate::data::PatientRecord;
use crate::errors::ProviderError;
use crate::providers::store::trait_store::RecordStoreProvider;

/// Store off-chain en memoria para tests y demos. A diferencia del ledger,
/// es mutable: sobreescribir un registro simula exactamente la adulteración
/// post-hoc que la verificación debe detectar.
pub struct InMemoryRecordStore {
    records: DashMap<String, PatientRecord>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self { records: DashMap::new() }
    }

    pub fn seed(&self, identifier: impl Into<String>, record: PatientRecord) {
        self.records.insert(identifier.into(), record);
    }

    pub fn remove(&self, identifier: &str) -> Option<PatientRecord> {
        self.records.remove(identifier).map(|(_, r)| r)
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStoreProvider for InMemoryRecordStore {
    fn get_name(&self) -> &str {
        "in-memory-store"
    }

    fn get_description(&self) -> &str {
        "In-memory mutable record store for testing purposes"
    }

    async fn fetch_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<PatientRecord>, ProviderError> {
        Ok(self.records.get(identifier).map(|r| r.value().clone()))
    }
}
