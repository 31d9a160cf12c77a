//! Proposer configuration and signer resolution

use std::time::Duration;

use alloy::network::AnyNetwork;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use tracing::debug;
use url::Url;

use crate::chain::SupportedChain;
use crate::error::{Error, Result};
use crate::proposer::SubmissionPolicy;
use crate::signing::SignatureScheme;

/// Default chain when none is given (Ethereum mainnet)
pub const DEFAULT_CHAIN_ID: u64 = 1;

/// Default bound on each network step
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";
pub const RPC_API_KEY_ENV: &str = "ALCHEMY_KEY";
pub const RPC_URL_ENV: &str = "ETH_RPC_URL";
pub const RELAY_URL_ENV: &str = "SAFE_RELAY_URL";

/// Everything a proposal run needs, passed in explicitly
#[derive(Clone)]
pub struct ProposerConfig {
    pub chain_id: u64,
    pub private_key: Option<String>,
    /// Full RPC endpoint; takes precedence over `rpc_api_key`
    pub rpc_url: Option<Url>,
    /// Alchemy API key used to derive the RPC endpoint
    pub rpc_api_key: Option<String>,
    /// Overrides the relay deployment derived from `chain_id`
    pub relay_url: Option<Url>,
    pub timeout: Duration,
    pub policy: SubmissionPolicy,
    pub signature_scheme: SignatureScheme,
    pub call_only: bool,
    pub origin: Option<String>,
}

impl Default for ProposerConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            private_key: None,
            rpc_url: None,
            rpc_api_key: None,
            relay_url: None,
            timeout: DEFAULT_TIMEOUT,
            policy: SubmissionPolicy::default(),
            signature_scheme: SignatureScheme::default(),
            call_only: false,
            origin: None,
        }
    }
}

// Keeps secrets out of logs
impl std::fmt::Debug for ProposerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProposerConfig")
            .field("chain_id", &self.chain_id)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("rpc_url", &self.rpc_url.as_ref().map(Url::as_str))
            .field("rpc_api_key", &self.rpc_api_key.as_ref().map(|_| "<redacted>"))
            .field("relay_url", &self.relay_url.as_ref().map(Url::as_str))
            .field("timeout", &self.timeout)
            .field("policy", &self.policy)
            .field("signature_scheme", &self.signature_scheme)
            .field("call_only", &self.call_only)
            .field("origin", &self.origin)
            .finish()
    }
}

impl ProposerConfig {
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            ..Self::default()
        }
    }

    pub fn with_private_key(mut self, key: impl Into<String>) -> Self {
        self.private_key = Some(key.into());
        self
    }

    pub fn with_rpc_url(mut self, url: Url) -> Self {
        self.rpc_url = Some(url);
        self
    }

    pub fn with_rpc_api_key(mut self, key: impl Into<String>) -> Self {
        self.rpc_api_key = Some(key.into());
        self
    }

    pub fn with_relay_url(mut self, url: Url) -> Self {
        self.relay_url = Some(url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_policy(mut self, policy: SubmissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_signature_scheme(mut self, scheme: SignatureScheme) -> Self {
        self.signature_scheme = scheme;
        self
    }

    pub fn with_call_only(mut self, enabled: bool) -> Self {
        self.call_only = enabled;
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Fills fields that are still unset from the process environment.
    ///
    /// Explicit values always win. Malformed URLs in the environment are ignored.
    pub fn with_env_fallback(self) -> Self {
        self.with_fallback(|name| std::env::var(name).ok())
    }

    fn with_fallback(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if self.private_key.is_none() {
            self.private_key = lookup(PRIVATE_KEY_ENV);
        }
        if self.rpc_api_key.is_none() {
            self.rpc_api_key = lookup(RPC_API_KEY_ENV);
        }
        if self.rpc_url.is_none() {
            self.rpc_url = lookup(RPC_URL_ENV).and_then(|v| v.parse().ok());
        }
        if self.relay_url.is_none() {
            self.relay_url = lookup(RELAY_URL_ENV).and_then(|v| v.parse().ok());
        }
        self
    }

    /// The configured chain, if supported
    pub fn chain(&self) -> Result<SupportedChain> {
        SupportedChain::try_from(self.chain_id)
    }
}

/// Parses a hex private key, with or without `0x`
pub fn parse_private_key(key: &str) -> Result<PrivateKeySigner> {
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::MissingCredential(PRIVATE_KEY_ENV));
    }
    let stripped = key.strip_prefix("0x").unwrap_or(key);
    stripped
        .parse::<PrivateKeySigner>()
        .map_err(|e| Error::InvalidPrivateKey(e.to_string()))
}

/// RPC endpoint for the configured chain
pub fn resolve_rpc_url(config: &ProposerConfig) -> Result<Url> {
    let chain = config.chain()?;
    if let Some(url) = &config.rpc_url {
        return Ok(url.clone());
    }
    match config.rpc_api_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => chain.alchemy_url(key),
        _ => Err(Error::MissingCredential(RPC_API_KEY_ENV)),
    }
}

/// Builds the provider and the owner signer. No network call is made.
pub fn resolve_signer(config: &ProposerConfig) -> Result<(DynProvider<AnyNetwork>, PrivateKeySigner)> {
    let chain = config.chain()?;
    let key = config
        .private_key
        .as_deref()
        .ok_or(Error::MissingCredential(PRIVATE_KEY_ENV))?;
    let signer = parse_private_key(key)?;
    let rpc_url = resolve_rpc_url(config)?;

    debug!(%chain, signer = %signer.address(), "Resolved signer");

    let provider = ProviderBuilder::new()
        .network::<AnyNetwork>()
        .connect_http(rpc_url)
        .erased();

    Ok((provider, signer))
}
