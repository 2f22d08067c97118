//! Escenarios end-to-end de verificación: registro intacto, registro
//! adulterado, identifier sin commitment y campo ausente.

use medledger_rust::data::{Commitment, PatientRecord, VerdictOutcome};
use medledger_rust::errors::VerifyError;
use medledger_rust::integrity::{canonical_digest, canonicalize, Verifier};
use medledger_rust::providers::ledger::InMemoryLedgerProvider;
use medledger_rust::providers::store::InMemoryRecordStore;
use serde_json::json;
use std::sync::Arc;

const COMMITTED_TS: i64 = 1_700_000_000;

/// Digest de referencia del escenario A, calculado externamente sobre la
/// forma canónica pineada. Si esto cambia, se rompió la compatibilidad de
/// commitments ya anclados.
const SCENARIO_A_DIGEST: &str =
    "9d543cc967954d880c29d76325cef70da0dcf6b186997755b4982c886761bff0";

fn scenario_a_record() -> PatientRecord {
    PatientRecord::from_value(json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "contactNumber": "5551234567",
        "gender": "F",
        "category": "TypeA",
        "age": 34,
        "email": "jane@x.com",
        "timestamp": 1_700_000_000u64
    }))
    .unwrap()
}

fn build_verifier() -> (Arc<InMemoryLedgerProvider>, Arc<InMemoryRecordStore>, Verifier) {
    let ledger = Arc::new(InMemoryLedgerProvider::new());
    let store = Arc::new(InMemoryRecordStore::new());
    let verifier = Verifier::new(ledger.clone(), store.clone());
    (ledger, store, verifier)
}

#[tokio::test]
async fn scenario_a_untouched_record_matches() {
    let (ledger, _, verifier) = build_verifier();
    let record = scenario_a_record();
    let digest = canonical_digest(&record).unwrap();
    assert_eq!(digest.to_hex(), SCENARIO_A_DIGEST);

    ledger.anchor(Commitment::new("rec-a", digest, COMMITTED_TS));
    let verdict = verifier.verify(&record, "rec-a").await.unwrap();
    assert_eq!(verdict.outcome, VerdictOutcome::Match);
    assert_eq!(verdict.computed.to_hex(), SCENARIO_A_DIGEST);
    assert_eq!(verdict.committed.to_hex(), SCENARIO_A_DIGEST);
}

#[tokio::test]
async fn scenario_b_tampered_age_mismatches_with_both_digests() {
    let (ledger, _, verifier) = build_verifier();
    let original = scenario_a_record();
    ledger.anchor(Commitment::new(
        "rec-b",
        canonical_digest(&original).unwrap(),
        COMMITTED_TS,
    ));

    let mut tampered = original;
    tampered.insert("age", json!(35));
    let verdict = verifier.verify(&tampered, "rec-b").await.unwrap();
    assert_eq!(verdict.outcome, VerdictOutcome::Mismatch);
    assert_ne!(verdict.computed, verdict.committed);
    assert_eq!(verdict.committed.to_hex(), SCENARIO_A_DIGEST);
    // ambos digests presentes, en hex minúscula de 64 caracteres
    assert_eq!(verdict.computed.to_hex().len(), 64);
    assert!(verdict
        .computed
        .to_hex()
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[tokio::test]
async fn scenario_c_missing_commitment_is_not_a_finding() {
    let (_, _, verifier) = build_verifier();
    let err = verifier
        .verify(&scenario_a_record(), "rec-without-baseline")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        VerifyError::CommitmentNotFound { identifier: "rec-without-baseline".into() }
    );
}

#[tokio::test]
async fn scenario_d_absent_field_uses_empty_value_convention() {
    let mut without_contact = scenario_a_record();
    without_contact.remove("contactNumber");

    // canonicaliza sin error y con el valor vacío explícito
    let bytes = canonicalize(&without_contact).unwrap();
    assert!(String::from_utf8(bytes).unwrap().contains("\"contactNumber\":null"));

    // la ausencia no equivale a ningún valor no vacío
    let digest = canonical_digest(&without_contact).unwrap();
    assert_ne!(digest.to_hex(), SCENARIO_A_DIGEST);

    let mut empty_contact = scenario_a_record();
    empty_contact.insert("contactNumber", json!(""));
    assert_ne!(canonical_digest(&empty_contact).unwrap(), digest);
}

#[tokio::test]
async fn verify_is_stable_across_repeated_calls() {
    let (ledger, _, verifier) = build_verifier();
    let record = scenario_a_record();
    ledger.anchor(Commitment::new(
        "rec-stable",
        canonical_digest(&record).unwrap(),
        COMMITTED_TS,
    ));

    let first = verifier.verify(&record, "rec-stable").await.unwrap();
    let second = verifier.verify(&record, "rec-stable").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn latest_commitment_wins_when_history_exists() {
    let (ledger, _, verifier) = build_verifier();
    let old = scenario_a_record();
    let mut current = scenario_a_record();
    current.insert("contactNumber", json!("5559999999"));

    ledger.anchor(Commitment::new("rec-h", canonical_digest(&old).unwrap(), 100));
    ledger.anchor(Commitment::new("rec-h", canonical_digest(&current).unwrap(), 200));

    // la copia vigente debe contrastarse contra el anclaje más reciente
    let verdict = verifier.verify(&current, "rec-h").await.unwrap();
    assert!(verdict.is_match());
    let verdict = verifier.verify(&old, "rec-h").await.unwrap();
    assert!(!verdict.is_match());
}

#[tokio::test]
async fn fetch_and_verify_detects_post_hoc_tampering() {
    let (ledger, store, verifier) = build_verifier();
    let record = scenario_a_record();
    ledger.anchor(Commitment::new(
        "rec-f",
        canonical_digest(&record).unwrap(),
        COMMITTED_TS,
    ));
    store.seed("rec-f", record.clone());

    let (fetched, verdict) = verifier.fetch_and_verify("rec-f").await.unwrap();
    assert_eq!(fetched, record);
    assert!(verdict.is_match());

    // se pisa la copia off-chain; el commitment queda igual
    let mut tampered = record;
    tampered.insert("email", json!("attacker@evil.com"));
    store.seed("rec-f", tampered);

    let (_, verdict) = verifier.fetch_and_verify("rec-f").await.unwrap();
    assert_eq!(verdict.outcome, VerdictOutcome::Mismatch);
}

#[tokio::test]
async fn concurrent_verifications_are_independent() {
    let (ledger, _, verifier) = build_verifier();
    let verifier = Arc::new(verifier);
    let mut handles = Vec::new();
    for i in 0..8 {
        let id = format!("rec-{}", i);
        let mut record = scenario_a_record();
        record.insert("externalIdentifier", json!(format!("0x{:04x}", i)));
        ledger.anchor(Commitment::new(
            id.clone(),
            canonical_digest(&record).unwrap(),
            COMMITTED_TS,
        ));
        let v = verifier.clone();
        handles.push(tokio::spawn(async move { v.verify(&record, &id).await }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_match());
    }
}
