use async_trait::async_trait;

use crate::data::Commitment;
use crate::errors::ProviderError;

/// Colaborador de ledger: consulta de commitments, solo lectura.
///
/// El ledger concreto (contrato en una chain, RPC, etc.) se ata en el borde
/// de la aplicación; el core solo depende de este trait. Si existe historial
/// de commitments para un identifier, la implementación debe devolver el más
/// reciente.
#[async_trait]
pub trait LedgerProvider: Send + Sync {
    fn get_name(&self) -> &str;
    fn get_description(&self) -> &str;

    /// `Ok(None)` significa "sin commitment anclado", que NO es una falla
    /// del provider; los errores se reservan para indisponibilidad o datos
    /// corruptos del backend.
    async fn get_commitment(&self, identifier: &str) -> Result<Option<Commitment>, ProviderError>;
}
