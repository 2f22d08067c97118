//! Canonicalizador: proyecta un registro sobre el subconjunto de campos
//! comprometido y lo serializa a bytes deterministas, listos para hashear.
//!
//! Invariante central: dos registros con los mismos valores lógicos en el
//! subconjunto canónico producen bytes idénticos, sin importar el orden de
//! inserción ni los campos extra. Función pura, sin efectos.

use crate::data::{Digest, PatientRecord};
use crate::errors::VerifyError;
use crate::hashing::{sha256_bytes, to_canonical_json};
use serde_json::{Map, Value};

/// Campos de texto del subconjunto canónico.
/// No se recortan ni se normaliza mayúscula/minúscula: "Jane" y "jane" son
/// commitments distintos; quien necesite normalizar lo hace al momento de
/// anclar, nunca al verificar.
const STRING_FIELDS: [&str; 7] = [
    "category",
    "contactNumber",
    "email",
    "externalIdentifier",
    "firstName",
    "gender",
    "lastName",
];

/// Campos numéricos: solo enteros no negativos. Serializan sin parte
/// fraccionaria (`34`, jamás `34.0`) para no divergir entre lenguajes.
const INTEGER_FIELDS: [&str; 2] = ["age", "timestamp"];

/// Proyecta y serializa el registro a su forma canónica.
///
/// Un campo ausente (o `null` explícito) se serializa como `null`; eso
/// tolera registros legacy sin falsificar jamás un Match, porque `null` no
/// colisiona con ningún string ni entero. Un campo con tipo equivocado es
/// `InvalidRecord`: la canonicalización nunca es parcial.
pub fn canonicalize(record: &PatientRecord) -> Result<Vec<u8>, VerifyError> {
    let mut projected = Map::new();
    for field in STRING_FIELDS {
        projected.insert(field.to_string(), project_string(record, field)?);
    }
    for field in INTEGER_FIELDS {
        projected.insert(field.to_string(), project_integer(record, field)?);
    }
    Ok(to_canonical_json(&Value::Object(projected)).into_bytes())
}

/// Forma canónica ya hasheada: SHA-256 de `canonicalize`.
pub fn canonical_digest(record: &PatientRecord) -> Result<Digest, VerifyError> {
    let bytes = canonicalize(record)?;
    Ok(Digest::from_bytes(sha256_bytes(&bytes)))
}

fn project_string(record: &PatientRecord, field: &str) -> Result<Value, VerifyError> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(Value::Null),
        Some(Value::String(s)) => Ok(Value::String(s.clone())),
        Some(other) => Err(VerifyError::InvalidRecord {
            field: field.to_string(),
            reason: format!("expected string, got {}", json_type_name(other)),
        }),
    }
}

fn project_integer(record: &PatientRecord, field: &str) -> Result<Value, VerifyError> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(Value::Null),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(v) => Ok(Value::Number(v.into())),
            // negativo o con parte fraccionaria
            None => Err(VerifyError::InvalidRecord {
                field: field.to_string(),
                reason: format!("expected non-negative integer, got {}", n),
            }),
        },
        Some(other) => Err(VerifyError::InvalidRecord {
            field: field.to_string(),
            reason: format!("expected non-negative integer, got {}", json_type_name(other)),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
