use async_trait::async_trait;
use dashmap::DashMap;

use crate::data::Commitment;
use crate::errors::ProviderError;
use crate::providers::ledger::trait_ledger::LedgerProvider;

/// Ledger en memoria para tests y demos. Conserva el historial completo por
/// identifier y resuelve las consultas con la entrada más reciente, igual
/// que un registry real con múltiples anclajes.
pub struct InMemoryLedgerProvider {
    entries: DashMap<String, Vec<Commitment>>,
}

impl InMemoryLedgerProvider {
    pub fn new() -> Self {
        Self { entries: DashMap::new() }
    }

    /// Ancla un commitment; si ya había uno para el identifier, el nuevo
    /// pasa a ser el vigente (append-only, nunca se borra el historial).
    pub fn anchor(&self, commitment: Commitment) {
        self.entries
            .entry(commitment.identifier.clone())
            .or_default()
            .push(commitment);
    }

    pub fn history_len(&self, identifier: &str) -> usize {
        self.entries.get(identifier).map(|h| h.len()).unwrap_or(0)
    }
}

impl Default for InMemoryLedgerProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerProvider for InMemoryLedgerProvider {
    fn get_name(&self) -> &str {
        "in-memory-ledger"
    }

    fn get_description(&self) -> &str {
        "In-memory commitment ledger for testing purposes"
    }

    async fn get_commitment(&self, identifier: &str) -> Result<Option<Commitment>, ProviderError> {
        Ok(self
            .entries
            .get(identifier)
            .and_then(|history| history.last().cloned()))
    }
}
