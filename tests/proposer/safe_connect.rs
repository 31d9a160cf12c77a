//! Safe::connect pre-flight checks against a local Anvil node

use alloy::network::AnyNetwork;
use alloy::node_bindings::Anvil;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use safe_propose::{Error, Safe, SupportedChain};

use crate::common::SAFE;
use crate::skip_if_no_anvil;

#[tokio::test]
async fn test_connect_rejects_wrong_chain() {
    skip_if_no_anvil!();

    let anvil = Anvil::new().chain_id(5).spawn();
    let provider = ProviderBuilder::new()
        .network::<AnyNetwork>()
        .connect_http(anvil.endpoint_url())
        .erased();

    let result = Safe::connect(provider, PrivateKeySigner::random(), SAFE, SupportedChain::Mainnet).await;
    assert!(matches!(
        result,
        Err(Error::ChainMismatch {
            expected: 1,
            actual: 5
        })
    ));
}

#[tokio::test]
async fn test_connect_rejects_address_without_code() {
    skip_if_no_anvil!();

    let anvil = Anvil::new().chain_id(5).spawn();
    let provider = ProviderBuilder::new()
        .network::<AnyNetwork>()
        .connect_http(anvil.endpoint_url())
        .erased();

    let result = Safe::connect(provider, PrivateKeySigner::random(), SAFE, SupportedChain::Goerli).await;
    assert!(matches!(result, Err(Error::SafeNotDeployed(addr)) if addr == SAFE));
}
