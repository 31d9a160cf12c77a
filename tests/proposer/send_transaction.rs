//! send_transaction end to end: a Safe deployed on a mainnet fork, proposed to a local relay

use std::time::{SystemTime, UNIX_EPOCH};

use alloy::network::{AnyNetwork, EthereumWallet};
use alloy::node_bindings::{Anvil, AnvilInstance};
use alloy::primitives::{address, Address, Bytes, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::sol;
use alloy::sol_types::SolCall;
use safe_propose::{
    send_transaction, ChainAddresses, Error, ProposalOutcome, ProposerConfig, Safe, SafeVersion,
    SubmissionPolicy, SupportedChain, TransactionInput,
};

use crate::common::{spawn_responder, TARGET_A, TARGET_B};
use crate::{skip_if_no_anvil, skip_if_no_rpc};

const PROXY_FACTORY: Address = address!("0x4e1DCf7AD4e460CfD30791CCC4F9c8a4f820ec67");
const FALLBACK_HANDLER: Address = address!("0xfd0732Dc9E303f09fCEf3a7388Ad10A83459Ec99");

sol! {
    #[sol(rpc)]
    interface ISafeProxyFactory {
        function createProxyWithNonce(address singleton, bytes memory initializer, uint256 saltNonce) external returns (address proxy);
    }

    interface ISafeSetup {
        function setup(
            address[] calldata _owners,
            uint256 _threshold,
            address to,
            bytes calldata data,
            address fallbackHandler,
            address paymentToken,
            uint256 payment,
            address paymentReceiver
        ) external;
    }
}

/// Relay that knows every Safe, has nothing pending and accepts every proposal
fn accepting_relay(method: &str, path: &str) -> (u16, String) {
    let txs = path.ends_with("/multisig-transactions/");
    match (method, txs) {
        ("GET", false) => (200, r#"{"nonce": "0"}"#.into()),
        ("GET", true) => (200, r#"{"count": 0, "results": []}"#.into()),
        ("POST", true) => (201, String::new()),
        _ => (404, "{}".into()),
    }
}

/// Forks mainnet and deploys a v1.4.1 Safe owned by anvil account 0 with threshold 1
async fn deploy_safe() -> (AnvilInstance, PrivateKeySigner, Address) {
    let rpc_url = std::env::var("ETH_RPC_URL").unwrap();
    let anvil = Anvil::new().fork(rpc_url).spawn();
    let owner: PrivateKeySigner = anvil.keys()[0].clone().into();

    let provider = ProviderBuilder::new()
        .network::<AnyNetwork>()
        .wallet(EthereumWallet::from(owner.clone()))
        .connect_http(anvil.endpoint_url());

    let initializer = ISafeSetup::setupCall {
        _owners: vec![owner.address()],
        _threshold: U256::from(1),
        to: Address::ZERO,
        data: Bytes::new(),
        fallbackHandler: FALLBACK_HANDLER,
        paymentToken: Address::ZERO,
        payment: U256::ZERO,
        paymentReceiver: Address::ZERO,
    }
    .abi_encode();
    let salt = U256::from(SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos());

    let factory = ISafeProxyFactory::new(PROXY_FACTORY, &provider);
    let create = factory.createProxyWithNonce(
        ChainAddresses::v1_4_1().safe_singleton,
        initializer.into(),
        salt,
    );
    let safe = create.call().await.unwrap();
    create.send().await.unwrap().get_receipt().await.unwrap();

    assert!(!provider.get_code_at(safe).await.unwrap().is_empty());
    (anvil, owner, safe)
}

fn config_for(anvil: &AnvilInstance, key: &PrivateKeySigner, relay: url::Url) -> ProposerConfig {
    ProposerConfig::new(1)
        .with_private_key(key.to_bytes().to_string())
        .with_rpc_url(anvil.endpoint_url())
        .with_relay_url(relay)
        .with_policy(SubmissionPolicy::Strict)
}

#[tokio::test]
async fn test_owner_proposal_reaches_relay() {
    skip_if_no_rpc!();
    skip_if_no_anvil!();

    let (anvil, owner, safe) = deploy_safe().await;
    let (relay, recorded) = spawn_responder(accepting_relay).await;
    let config = config_for(&anvil, &owner, relay);

    let outcome = send_transaction(
        &config,
        &safe.to_string(),
        TransactionInput::single(TARGET_A, "0", "0x"),
    )
    .await
    .unwrap();
    assert!(matches!(outcome, ProposalOutcome::Submitted { nonce, .. } if nonce == U256::ZERO));

    let requests = recorded.lock().unwrap().clone();
    assert_eq!(requests.iter().filter(|r| r.method == "GET").count(), 2);
    assert_eq!(requests.iter().filter(|r| r.method == "POST").count(), 1);

    let post = requests.iter().find(|r| r.method == "POST").unwrap();
    assert!(post.path.contains(&safe.to_checksum(None)));
    let body: serde_json::Value = serde_json::from_str(&post.body).unwrap();
    assert_eq!(body["sender"], owner.address().to_checksum(None));
    assert_eq!(body["to"], TARGET_A);
    assert_eq!(body["operation"], 0);
    assert_eq!(body["contractTransactionHash"], outcome.safe_tx_hash().to_string());
}

#[tokio::test]
async fn test_batch_uses_detected_multisend() {
    skip_if_no_rpc!();
    skip_if_no_anvil!();

    let (anvil, owner, safe) = deploy_safe().await;
    let (relay, recorded) = spawn_responder(accepting_relay).await;
    let config = config_for(&anvil, &owner, relay);

    let input = TransactionInput::Parallel {
        targets: vec![TARGET_A.into(), TARGET_B.into()],
        values: vec!["0".into(), "0".into()],
        data: vec!["0x".into(), "0x".into()],
    };
    let outcome = send_transaction(&config, &safe.to_string(), input).await.unwrap();
    assert!(outcome.is_submitted());

    let requests = recorded.lock().unwrap().clone();
    let post = requests.iter().find(|r| r.method == "POST").unwrap();
    let body: serde_json::Value = serde_json::from_str(&post.body).unwrap();
    assert_eq!(body["to"], ChainAddresses::v1_4_1().multi_send.to_checksum(None));
    assert_eq!(body["operation"], 1);

    let provider = ProviderBuilder::new()
        .network::<AnyNetwork>()
        .connect_http(anvil.endpoint_url())
        .erased();
    let connected = Safe::connect(provider, owner, safe, SupportedChain::Mainnet).await.unwrap();
    assert_eq!(connected.version(), SafeVersion::V1_4_1);
    assert_eq!(connected.addresses(), &ChainAddresses::v1_4_1());
}

#[tokio::test]
async fn test_non_owner_never_reaches_relay() {
    skip_if_no_rpc!();
    skip_if_no_anvil!();

    let (anvil, _owner, safe) = deploy_safe().await;
    let (relay, recorded) = spawn_responder(accepting_relay).await;
    let stranger = PrivateKeySigner::random();
    let config = config_for(&anvil, &stranger, relay);

    let err = send_transaction(
        &config,
        &safe.to_string(),
        TransactionInput::single(TARGET_A, "0", "0x"),
    )
    .await
    .unwrap_err();

    match err {
        Error::NotOwner { signer, safe: target } => {
            assert_eq!(signer, stranger.address());
            assert_eq!(target, safe);
        }
        other => panic!("expected NotOwner, got {other:?}"),
    }
    assert!(recorded.lock().unwrap().is_empty());
}
