//! Digest y commitment: la evidencia inmutable anclada en el ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Digest SHA-256 de 32 bytes. Se compara solo como bytes opacos; la forma
/// hex minúscula existe únicamente para mostrar y transportar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digest([u8; 32]);

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DigestParseError {
    #[error("digest hex must be 64 chars, got {0}")]
    BadLength(usize),
    #[error("digest hex contains non-hex character")]
    BadCharacter,
}

impl Digest {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parsea la forma hex (64 caracteres, case-insensitive al leer).
    pub fn from_hex(hex: &str) -> Result<Self, DigestParseError> {
        if hex.len() != 64 {
            return Err(DigestParseError::BadLength(hex.len()));
        }
        let mut bytes = [0u8; 32];
        for (i, chunk) in hex.as_bytes().chunks_exact(2).enumerate() {
            let hi = hex_nibble(chunk[0]).ok_or(DigestParseError::BadCharacter)?;
            let lo = hex_nibble(chunk[1]).ok_or(DigestParseError::BadCharacter)?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Representación canónica para display: hex minúscula.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Digest {
    type Error = DigestParseError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Digest::from_hex(&value)
    }
}

impl From<Digest> for String {
    fn from(d: Digest) -> Self {
        d.to_hex()
    }
}

/// Entrada inmutable del ledger: (identifier, digest, timestamp).
/// Si el ledger guarda historial, la consulta siempre devuelve la más
/// reciente; este tipo representa una sola entrada ya resuelta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    pub identifier: String,
    pub digest: Digest,
    /// Segundos desde epoch en que se ancló el commitment.
    pub timestamp: i64,
}

impl Commitment {
    pub fn new(identifier: impl Into<String>, digest: Digest, timestamp: i64) -> Self {
        Self { identifier: identifier.into(), digest, timestamp }
    }

    /// Momento del anclaje como datetime UTC (None si el timestamp está
    /// fuera de rango representable).
    pub fn committed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}
