pub mod commitment;
pub mod record;
pub mod verdict;

pub use commitment::{Commitment, Digest, DigestParseError};
pub use record::PatientRecord;
pub use verdict::{Verdict, VerdictOutcome};
