//! Verificador: decide si la copia off-chain de un registro coincide con su
//! commitment anclado en el ledger.
//!
//! Sin estado entre llamadas: los colaboradores entran como dependencias
//! explícitas y cada `verify` es atómico. La única operación suspensiva es
//! la consulta al ledger (y al store en `fetch_and_verify`).

use crate::data::{PatientRecord, Verdict};
use crate::errors::{ProviderError, VerifyError};
use crate::integrity::canonicalizer::canonical_digest;
use crate::providers::ledger::LedgerProvider;
use crate::providers::store::RecordStoreProvider;
use log::{debug, warn};
use std::future::Future;
use std::sync::Arc;

pub struct Verifier {
    ledger: Arc<dyn LedgerProvider>,
    store: Arc<dyn RecordStoreProvider>,
}

impl Verifier {
    pub fn new(ledger: Arc<dyn LedgerProvider>, store: Arc<dyn RecordStoreProvider>) -> Self {
        Self { ledger, store }
    }

    /// Verifica un registro ya en mano contra el commitment de `identifier`.
    ///
    /// La ausencia de commitment es `CommitmentNotFound`, nunca `Mismatch`:
    /// no tener línea base no es evidencia de adulteración. Una falla
    /// transitoria del ledger sale como `LedgerUnavailable` sin reintentos
    /// automáticos; la política de retry es del caller.
    pub async fn verify(
        &self,
        record: &PatientRecord,
        identifier: &str,
    ) -> Result<Verdict, VerifyError> {
        if identifier.is_empty() {
            return Err(VerifyError::EmptyIdentifier);
        }

        let computed = canonical_digest(record)?;
        debug!("computed digest for {}: {}", identifier, computed);

        let commitment = self
            .ledger
            .get_commitment(identifier)
            .await
            .map_err(|e| map_ledger_error(identifier, e))?
            .ok_or_else(|| VerifyError::CommitmentNotFound { identifier: identifier.to_string() })?;

        let verdict = Verdict::new(identifier, computed, commitment.digest);
        if verdict.is_match() {
            debug!("integrity verified for {}", identifier);
        } else {
            // evento relevante de seguridad, no un error genérico
            warn!(
                "integrity mismatch for {}: anchored={} computed={}",
                identifier, verdict.committed, verdict.computed
            );
        }
        Ok(verdict)
    }

    /// Igual que `verify`, pero abortable: si `cancel` se completa antes que
    /// la consulta al ledger, devuelve `Cancelled` sin producir veredicto.
    pub async fn verify_with_cancel<F>(
        &self,
        record: &PatientRecord,
        identifier: &str,
        cancel: F,
    ) -> Result<Verdict, VerifyError>
    where
        F: Future<Output = ()> + Send,
    {
        tokio::select! {
            _ = cancel => Err(VerifyError::Cancelled),
            verdict = self.verify(record, identifier) => verdict,
        }
    }

    /// Flujo completo de consulta: trae el registro del store off-chain y lo
    /// verifica contra su commitment. Devuelve el registro junto al
    /// veredicto para que la capa de presentación lo muestre.
    pub async fn fetch_and_verify(
        &self,
        identifier: &str,
    ) -> Result<(PatientRecord, Verdict), VerifyError> {
        if identifier.is_empty() {
            return Err(VerifyError::EmptyIdentifier);
        }
        let record = self
            .store
            .fetch_by_identifier(identifier)
            .await
            .map_err(|e| VerifyError::StoreUnavailable(e.to_string()))?
            .ok_or_else(|| VerifyError::RecordNotFound { identifier: identifier.to_string() })?;
        let verdict = self.verify(&record, identifier).await?;
        Ok((record, verdict))
    }
}

fn map_ledger_error(identifier: &str, err: ProviderError) -> VerifyError {
    warn!("ledger lookup failed for {}: {}", identifier, err);
    VerifyError::LedgerUnavailable(err.to_string())
}
