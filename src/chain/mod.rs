//! Supported chains, Safe contract addresses and service endpoints

mod config;
mod network;
mod version;

pub use config::{ChainAddresses, ChainConfig};
pub use network::{resolve_relay_url, SupportedChain};
pub use version::SafeVersion;
