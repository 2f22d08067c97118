pub mod canonicalizer;
pub mod verifier;

pub use canonicalizer::{canonical_digest, canonicalize};
pub use verifier::Verifier;
