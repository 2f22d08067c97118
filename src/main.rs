//! Demo end-to-end del flujo de verificación de integridad con los
//! providers en memoria: ancla un commitment, verifica la copia intacta,
//! adultera el store y muestra el mismatch.

use medledger_rust::config::AppConfig;
use medledger_rust::data::{Commitment, PatientRecord};
use medledger_rust::errors::VerifyError;
use medledger_rust::integrity::{canonical_digest, Verifier};
use medledger_rust::providers::ledger::{InMemoryLedgerProvider, LedgerProvider};
use medledger_rust::providers::store::InMemoryRecordStore;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

fn sample_patient(timestamp: i64) -> PatientRecord {
    PatientRecord::new()
        .with_field("firstName", json!("Jane"))
        .with_field("lastName", json!("Doe"))
        .with_field("contactNumber", json!("5551234567"))
        .with_field("gender", json!("F"))
        .with_field("category", json!("TypeA"))
        .with_field("age", json!(34))
        .with_field("email", json!("jane@x.com"))
        .with_field("timestamp", json!(timestamp))
        // campos extra: viajan con el registro pero no entran al digest
        .with_field("address", json!("123 Main St"))
        .with_field("notes", json!("seguimiento trimestral"))
}

#[tokio::main]
async fn main() -> Result<(), VerifyError> {
    let config = AppConfig::from_env();
    println!("ledger rpc: {}", config.ledger.rpc_url);
    if let Some(addr) = &config.ledger.registry_address {
        println!("registry: {}", addr);
    }

    let ledger = Arc::new(InMemoryLedgerProvider::new());
    let store = Arc::new(InMemoryRecordStore::new());

    // Seed: un registro en el store y su commitment anclado en el ledger.
    let record_id = Uuid::new_v4().to_string();
    let committed_ts = 1_700_000_000i64;
    let record = sample_patient(committed_ts);
    let digest = canonical_digest(&record)?;
    ledger.anchor(Commitment::new(record_id.clone(), digest, committed_ts));
    store.seed(record_id.clone(), record);

    let verifier = Verifier::new(ledger.clone(), store.clone());

    // 1) Copia intacta: Match.
    let (fetched, verdict) = verifier.fetch_and_verify(&record_id).await?;
    println!("\n== record {} ==", record_id);
    if let Some(commitment) = ledger.get_commitment(&record_id).await.ok().flatten() {
        if let Some(at) = commitment.committed_at() {
            println!("anchored at: {}", at);
        }
    }
    println!("{}", verdict.summary());

    // 2) Adulteración post-hoc: se pisa la copia off-chain con otra edad.
    let mut tampered = fetched;
    tampered.insert("age", json!(35));
    store.seed(record_id.clone(), tampered);
    let (_, verdict) = verifier.fetch_and_verify(&record_id).await?;
    println!("\n== after tampering the off-chain copy ==");
    println!("{}", verdict.summary());

    // 3) Identifier sin commitment: estado de infraestructura, no hallazgo.
    let unknown = Uuid::new_v4().to_string();
    store.seed(unknown.clone(), sample_patient(committed_ts));
    match verifier.fetch_and_verify(&unknown).await {
        Err(VerifyError::CommitmentNotFound { identifier }) => {
            println!("\nno baseline for {}: cannot verify", identifier);
        }
        other => println!("\nunexpected outcome: {:?}", other.map(|(_, v)| v)),
    }

    Ok(())
}
