//! Helpers de hash sobre SHA-256.
//! El algoritmo está fijado por compatibilidad con los commitments ya
//! anclados en el ledger; cambiarlo exige versionar los commitments.

use sha2::{Digest as _, Sha256};

/// Hashea bytes y devuelve los 32 bytes crudos del digest.
pub fn sha256_bytes(input: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hasher.finalize().into()
}

/// Hashea bytes y devuelve el digest en hex minúscula (64 caracteres).
pub fn sha256_hex(input: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // SHA-256("") — vector público
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hex_matches_raw_bytes() {
        let raw = sha256_bytes(b"medledger");
        let hex = sha256_hex(b"medledger");
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        let rendered: String = raw.iter().map(|b| format!("{:02x}", b)).collect();
        assert_eq!(rendered, hex);
    }
}
