//! Registro de paciente tal como llega del store off-chain.
//!
//! El store es mutable y sin esquema estricto, así que el registro se modela
//! como un objeto JSON plano. Los campos del subconjunto canónico se validan
//! recién al canonicalizar; los campos extra (dirección para mostrar, notas,
//! `transactionHash`, etc.) viajan con el registro pero no afectan el digest.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientRecord(Map<String, Value>);

impl PatientRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Construye un registro desde un `Value`; solo se aceptan objetos JSON.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Builder ergonómico para armar registros en tests y seeds.
    pub fn with_field(mut self, field: impl Into<String>, value: Value) -> Self {
        self.0.insert(field.into(), value);
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for PatientRecord {
    fn default() -> Self {
        Self::new()
    }
}
