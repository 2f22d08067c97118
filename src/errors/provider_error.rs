use thiserror::Error;

/// Errores de los colaboradores externos (ledger y store de registros).
/// El verificador los mapea a variantes semánticas de `VerifyError` en el
/// borde; nunca los silencia.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ProviderError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    #[error("backend error: {0}")]
    Backend(String),
}
