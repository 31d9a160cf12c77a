//! Common test utilities: a recording relay, an offline Safe and a local HTTP responder

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy::network::AnyNetwork;
use alloy::primitives::{address, Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use safe_propose::{ChainConfig, Error, RelayService, Result, Safe, SignedProposal, SupportedChain};
use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;
use url::Url;

pub const SAFE: Address = address!("0x52967DA31f243Eb9F35f151643Ab9D30e445B1C6");
pub const TARGET_A: &str = "0x1111111111111111111111111111111111111111";
pub const TARGET_B: &str = "0x2222222222222222222222222222222222222222";

/// Macro to skip tests when ETH_RPC_URL is not set
#[macro_export]
macro_rules! skip_if_no_rpc {
    () => {
        if std::env::var("ETH_RPC_URL").is_err() {
            eprintln!("Skipping test: ETH_RPC_URL not set");
            return;
        }
    };
}

/// Macro to skip tests when the anvil binary is not installed
#[macro_export]
macro_rules! skip_if_no_anvil {
    () => {
        if std::process::Command::new("anvil").arg("--version").output().is_err() {
            eprintln!("Skipping test: anvil not installed");
            return;
        }
    };
}

/// Relay double that records every call.
///
/// The next nonce is `base_nonce` plus the number of proposals it accepted, like
/// a relay that counts pending transactions.
pub struct MockRelay {
    base_nonce: U256,
    failure: Option<(u16, String)>,
    nonce_delay: Option<Duration>,
    nonce_calls: AtomicUsize,
    proposals: Mutex<Vec<SignedProposal>>,
}

impl MockRelay {
    pub fn new(base_nonce: u64) -> Self {
        Self {
            base_nonce: U256::from(base_nonce),
            failure: None,
            nonce_delay: None,
            nonce_calls: AtomicUsize::new(0),
            proposals: Mutex::new(Vec::new()),
        }
    }

    /// Every proposal is rejected with the given status
    pub fn rejecting(mut self, status: u16, body: &str) -> Self {
        self.failure = Some((status, body.to_string()));
        self
    }

    /// Nonce lookups stall for `delay`
    pub fn slow(mut self, delay: Duration) -> Self {
        self.nonce_delay = Some(delay);
        self
    }

    pub fn nonce_calls(&self) -> usize {
        self.nonce_calls.load(Ordering::SeqCst)
    }

    pub fn proposals(&self) -> Vec<SignedProposal> {
        self.proposals.lock().unwrap().clone()
    }
}

impl RelayService for MockRelay {
    async fn next_nonce(&self, _safe: Address) -> Result<U256> {
        self.nonce_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.nonce_delay {
            tokio::time::sleep(delay).await;
        }
        let accepted = self.proposals.lock().unwrap().len();
        Ok(self.base_nonce + U256::from(accepted))
    }

    async fn propose_transaction(&self, proposal: &SignedProposal) -> Result<()> {
        if let Some((status, body)) = &self.failure {
            return Err(Error::Relay {
                status: *status,
                body: body.clone(),
            });
        }
        self.proposals.lock().unwrap().push(proposal.clone());
        Ok(())
    }
}

/// Provider pointing at a closed port; any RPC call through it fails
pub fn offline_provider() -> DynProvider<AnyNetwork> {
    ProviderBuilder::new()
        .network::<AnyNetwork>()
        .connect_http("http://127.0.0.1:1".parse().unwrap())
        .erased()
}

/// A Goerli Safe that never needs the network to build and sign
pub fn offline_safe(signer: PrivateKeySigner) -> Safe<DynProvider<AnyNetwork>> {
    Safe::new(
        offline_provider(),
        signer,
        SAFE,
        ChainConfig::new(SupportedChain::Goerli),
    )
}

/// One request seen by [`spawn_responder`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub body: String,
}

pub type Route = fn(&str, &str) -> (u16, String);

#[derive(Clone)]
struct ResponderState {
    route: Route,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn respond(
    State(state): State<ResponderState>,
    method: Method,
    uri: Uri,
    body: String,
) -> impl IntoResponse {
    let (status, reply) = (state.route)(method.as_str(), uri.path());
    state.recorded.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        body,
    });

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], reply)
}

/// Serves `route(method, path)` on a local port, recording every request
pub async fn spawn_responder(route: Route) -> (Url, Arc<Mutex<Vec<RecordedRequest>>>) {
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().fallback(respond).with_state(ResponderState {
        route,
        recorded: recorded.clone(),
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let url = format!("http://{addr}").parse().unwrap();
    (url, recorded)
}
