pub mod canonical_json;
pub mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::{sha256_bytes, sha256_hex};
