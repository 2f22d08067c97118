//! Veredicto de una verificación: el resultado de comparar el digest
//! computado contra el digest anclado. Se construye por llamada y no se
//! persiste; no tiene identidad más allá de la invocación que lo produjo.

use crate::data::commitment::Digest;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerdictOutcome {
    Match,
    Mismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub identifier: String,
    pub outcome: VerdictOutcome,
    /// Digest computado sobre la copia off-chain.
    pub computed: Digest,
    /// Digest anclado en el ledger al momento del commitment.
    pub committed: Digest,
}

impl Verdict {
    pub fn new(
        identifier: impl Into<String>,
        computed: Digest,
        committed: Digest,
    ) -> Self {
        let outcome = if computed == committed {
            VerdictOutcome::Match
        } else {
            VerdictOutcome::Mismatch
        };
        Self { identifier: identifier.into(), outcome, computed, committed }
    }

    pub fn is_match(&self) -> bool {
        self.outcome == VerdictOutcome::Match
    }

    /// Texto para la capa de presentación, con ambos digests en hex
    /// minúscula. Un mismatch es un evento relevante de seguridad y debe
    /// mostrarse de forma prominente, no como error genérico.
    pub fn summary(&self) -> String {
        let headline = match self.outcome {
            VerdictOutcome::Match => "Data integrity verified: no alterations detected.",
            VerdictOutcome::Mismatch => "Data integrity compromised: alterations detected.",
        };
        format!(
            "{}\nAnchored digest: {}\nComputed digest: {}",
            headline, self.committed, self.computed
        )
    }
}
