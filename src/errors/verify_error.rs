use thiserror::Error;

/// Errores del flujo de verificación de integridad.
///
/// Un `Mismatch` NO es un error: es un `Verdict` normal. Acá solo viven los
/// estados de infraestructura y de registro malformado, que el caller debe
/// distinguir de un hallazgo de integridad.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum VerifyError {
    #[error("identifier must not be empty")]
    EmptyIdentifier,
    #[error("invalid record field `{field}`: {reason}")]
    InvalidRecord { field: String, reason: String },
    #[error("no commitment anchored for identifier {identifier}")]
    CommitmentNotFound { identifier: String },
    #[error("no record stored for identifier {identifier}")]
    RecordNotFound { identifier: String },
    #[error("ledger unavailable: {0}")]
    LedgerUnavailable(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("verification cancelled by caller")]
    Cancelled,
}
