//! MedLedger Rust Library
//!
//! Librería de verificación de integridad de registros: recupera la copia
//! off-chain de un registro y la contrasta contra el commitment inmutable
//! anclado en un ledger append-only, para detectar adulteración post-hoc.
//!
//! - `data` expone los tipos (registro, digest, commitment, veredicto).
//! - `hashing` serializa JSON en forma canónica y hashea con SHA-256.
//! - `integrity` contiene el canonicalizador y el verificador.
//! - `providers` define los colaboradores (ledger y store) como traits.
//! - `errors` agrupa las taxonomías de error.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod data;
pub mod errors;
pub mod hashing;
pub mod integrity;
pub mod providers;

pub use data::{Commitment, Digest, PatientRecord, Verdict, VerdictOutcome};
pub use errors::{ProviderError, VerifyError};
pub use integrity::{canonical_digest, canonicalize, Verifier};
pub use providers::ledger::{InMemoryLedgerProvider, LedgerProvider};
pub use providers::store::{InMemoryRecordStore, RecordStoreProvider};
