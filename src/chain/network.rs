//! The closed set of chains the relay is deployed on

use std::fmt;

use url::Url;

use crate::error::{Error, Result};

/// Chains with a Safe Transaction Service deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedChain {
    Mainnet,
    Rinkeby,
    Goerli,
    Optimism,
    Polygon,
    ArbitrumRinkeby,
}

impl SupportedChain {
    /// Every supported chain, in chain id order
    pub const ALL: [SupportedChain; 6] = [
        SupportedChain::Mainnet,
        SupportedChain::Rinkeby,
        SupportedChain::Goerli,
        SupportedChain::Optimism,
        SupportedChain::Polygon,
        SupportedChain::ArbitrumRinkeby,
    ];

    /// Numeric chain id
    pub fn id(&self) -> u64 {
        match self {
            SupportedChain::Mainnet => 1,
            SupportedChain::Rinkeby => 4,
            SupportedChain::Goerli => 5,
            SupportedChain::Optimism => 10,
            SupportedChain::Polygon => 137,
            SupportedChain::ArbitrumRinkeby => 421611,
        }
    }

    /// Network label used in the relay deployment hostname
    pub fn network_name(&self) -> &'static str {
        match self {
            SupportedChain::Mainnet => "mainnet",
            SupportedChain::Rinkeby => "rinkeby",
            SupportedChain::Goerli => "goerli",
            SupportedChain::Optimism => "optimism",
            SupportedChain::Polygon => "polygon",
            SupportedChain::ArbitrumRinkeby => "arbitrum",
        }
    }

    /// Base URL of the Safe Transaction Service for this chain
    pub fn relay_url(&self) -> Result<Url> {
        Url::parse(&format!(
            "https://safe-transaction.{}.gnosis.io",
            self.network_name()
        ))
        .map_err(|e| Error::Encoding(format!("relay url for chain {}: {e}", self.id())))
    }

    /// Hosted RPC endpoint for this chain, authenticated by an API key
    pub fn alchemy_url(&self, api_key: &str) -> Result<Url> {
        let host = match self {
            SupportedChain::Mainnet => "eth-mainnet",
            SupportedChain::Rinkeby => "eth-rinkeby",
            SupportedChain::Goerli => "eth-goerli",
            SupportedChain::Optimism => "opt-mainnet",
            SupportedChain::Polygon => "polygon-mainnet",
            SupportedChain::ArbitrumRinkeby => "arb-rinkeby",
        };

        Url::parse(&format!("https://{host}.g.alchemy.com/v2/{api_key}"))
            .map_err(|e| Error::Provider(format!("invalid RPC url for chain {}: {e}", self.id())))
    }
}

impl TryFrom<u64> for SupportedChain {
    type Error = Error;

    fn try_from(chain_id: u64) -> Result<Self> {
        SupportedChain::ALL
            .into_iter()
            .find(|c| c.id() == chain_id)
            .ok_or(Error::UnsupportedChain(chain_id))
    }
}

impl fmt::Display for SupportedChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.network_name(), self.id())
    }
}

/// Maps a chain id to the relay base URL, failing for unknown chains
pub fn resolve_relay_url(chain_id: u64) -> Result<Url> {
    SupportedChain::try_from(chain_id)?.relay_url()
}
