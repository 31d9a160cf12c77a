//! RelayClient against a local HTTP responder

use std::time::Duration;

use alloy::primitives::U256;
use alloy::signers::local::PrivateKeySigner;
use safe_propose::{Error, ProposalOutcome, Proposer, RelayClient, RelayService};

use crate::common::{offline_safe, spawn_responder, SAFE, TARGET_A};

const SAFE_PATH: &str = "/api/v1/safes/0x52967DA31f243Eb9F35f151643Ab9D30e445B1C6/";
const TXS_PATH: &str = "/api/v1/safes/0x52967DA31f243Eb9F35f151643Ab9D30e445B1C6/multisig-transactions/";

fn client(url: url::Url) -> RelayClient {
    RelayClient::new(url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_next_nonce_skips_pending_proposals() {
    let (url, recorded) = spawn_responder(|_, path| match path {
        SAFE_PATH => (200, r#"{"address": "0x", "nonce": 4, "threshold": 2}"#.into()),
        TXS_PATH => (
            200,
            r#"{"count": 2, "results": [{"nonce": 5}, {"nonce": "4"}]}"#.into(),
        ),
        _ => (404, "{}".into()),
    })
    .await;

    let nonce = client(url).next_nonce(SAFE).await.unwrap();
    assert_eq!(nonce, U256::from(6));

    let requests = recorded.lock().unwrap().clone();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.method == "GET"));
    let info = requests.iter().find(|r| r.path == SAFE_PATH).unwrap();
    assert!(info.query.is_none());

    let pending = requests.iter().find(|r| r.path == TXS_PATH).unwrap();
    let query = pending.query.as_deref().unwrap();
    assert!(query.split('&').any(|pair| pair == "executed=false"));
    assert!(query.split('&').any(|pair| pair == "nonce__gte=4"));
    assert!(pending.body.is_empty());
}

#[tokio::test]
async fn test_next_nonce_without_pending_is_safe_nonce() {
    let (url, _) = spawn_responder(|_, path| match path {
        SAFE_PATH => (200, r#"{"nonce": "11"}"#.into()),
        TXS_PATH => (200, r#"{"count": 0, "results": []}"#.into()),
        _ => (404, "{}".into()),
    })
    .await;

    assert_eq!(client(url).next_nonce(SAFE).await.unwrap(), U256::from(11));
}

#[tokio::test]
async fn test_unknown_safe_is_a_relay_error() {
    let (url, _) = spawn_responder(|_, _| (404, r#"{"detail": "Not found."}"#.into())).await;

    let err = client(url).next_nonce(SAFE).await.unwrap_err();
    match err {
        Error::Relay { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("Not found"));
        }
        other => panic!("expected relay error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_proposal_is_posted_as_camel_case_json() {
    let (url, recorded) = spawn_responder(|method, path| match (method, path) {
        ("GET", SAFE_PATH) => (200, r#"{"nonce": 2}"#.into()),
        ("GET", TXS_PATH) => (200, r#"{"results": []}"#.into()),
        ("POST", TXS_PATH) => (201, String::new()),
        _ => (404, "{}".into()),
    })
    .await;

    let signer = PrivateKeySigner::random();
    let safe = offline_safe(signer.clone());
    let batch = safe_propose::TransactionInput::single(TARGET_A, "1000", "0xabcd")
        .into_batch()
        .unwrap();

    let outcome = Proposer::new(client(url))
        .with_origin(Some("cli".into()))
        .propose(&safe, &batch)
        .await
        .unwrap();
    assert!(outcome.is_submitted());
    assert_eq!(outcome.nonce(), U256::from(2));

    let requests = recorded.lock().unwrap().clone();
    let post = requests.iter().find(|r| r.method == "POST").unwrap();
    assert_eq!(post.path, TXS_PATH);
    assert!(post.query.is_none());

    let body: serde_json::Value = serde_json::from_str(&post.body).unwrap();
    assert_eq!(body["to"], "0x1111111111111111111111111111111111111111");
    assert_eq!(body["value"], "1000");
    assert_eq!(body["data"], "0xabcd");
    assert_eq!(body["operation"], 0);
    assert_eq!(body["nonce"], "2");
    assert_eq!(body["sender"], signer.address().to_checksum(None));
    assert_eq!(body["contractTransactionHash"], outcome.safe_tx_hash().to_string());
    assert_eq!(body["origin"], "cli");
    assert_eq!(body["signature"].as_str().unwrap().len(), 132);
}

#[tokio::test]
async fn test_rejected_post_is_reported() {
    let (url, _) = spawn_responder(|method, path| match (method, path) {
        ("GET", SAFE_PATH) => (200, r#"{"nonce": 0}"#.into()),
        ("GET", TXS_PATH) => (200, r#"{"results": []}"#.into()),
        ("POST", TXS_PATH) => (422, r#"{"nonce": ["Nonce=0 too low"]}"#.into()),
        _ => (404, "{}".into()),
    })
    .await;

    let safe = offline_safe(PrivateKeySigner::random());
    let batch = safe_propose::TransactionInput::single(TARGET_A, "0", "0x")
        .into_batch()
        .unwrap();

    let outcome = Proposer::new(client(url)).propose(&safe, &batch).await.unwrap();
    match outcome {
        ProposalOutcome::Failed { reason, .. } => {
            assert!(reason.contains("422"));
            assert!(reason.contains("too low"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}
