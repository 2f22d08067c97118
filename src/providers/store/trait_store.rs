use async_trait::async_trait;

use crate::data::PatientRecord;
use crate::errors::ProviderError;

/// Colaborador de store off-chain: recuperación de registros por identifier.
/// Se asume eventualmente consistente; el core no le impone requisitos de
/// consistencia, solo lo consume.
#[async_trait]
pub trait RecordStoreProvider: Send + Sync {
    fn get_name(&self) -> &str;
    fn get_description(&self) -> &str;

    /// `Ok(None)` cuando no existe registro para el identifier.
    async fn fetch_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<PatientRecord>, ProviderError>;
}
