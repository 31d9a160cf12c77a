//! Safe contract addresses per deployment version

use alloy::primitives::{address, Address};

use super::SupportedChain;

/// Canonical Safe contract addresses for one deployment version.
/// These are the same on every supported chain (CREATE2 deployment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainAddresses {
    /// Safe singleton (L1) address
    pub safe_singleton: Address,
    /// Safe singleton (L2, event-emitting) address
    pub safe_singleton_l2: Address,
    /// MultiSend contract address
    pub multi_send: Address,
    /// MultiSendCallOnly contract address
    pub multi_send_call_only: Address,
}

impl Default for ChainAddresses {
    fn default() -> Self {
        Self::v1_3_0()
    }
}

impl ChainAddresses {
    /// Returns the canonical Safe v1.4.1 addresses
    pub fn v1_4_1() -> Self {
        Self {
            safe_singleton: address!("41675C099F32341bf84BFc5382aF534df5C7461a"),
            safe_singleton_l2: address!("29fcB43b46531BcA003ddC8FCB67FFE91900C762"),
            multi_send: address!("38869bf66a61cF6bDB996A6aE40D5853Fd43B526"),
            multi_send_call_only: address!("9641d764fc13c8B624c04430C7356C1C7C8102e2"),
        }
    }

    /// Returns the canonical Safe v1.3.0 addresses
    pub fn v1_3_0() -> Self {
        Self {
            safe_singleton: address!("d9Db270c1B5E3Bd161E8c8503c55cEABeE709552"),
            safe_singleton_l2: address!("3E5c63644E683549055b9Be8653de26E0B4CD36E"),
            multi_send: address!("A238CBeb142c10Ef7Ad8442C6D1f9E89e07e7761"),
            multi_send_call_only: address!("40A2aCCbd92BCA938b02010E17A5b8929b49130D"),
        }
    }

    /// Picks the deployment a proxy belongs to from its singleton address
    pub fn for_singleton(singleton: Address) -> Option<Self> {
        [Self::v1_4_1(), Self::v1_3_0()]
            .into_iter()
            .find(|a| a.safe_singleton == singleton || a.safe_singleton_l2 == singleton)
    }
}

/// Chain configuration including addresses and chain ID
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Chain ID
    pub chain_id: u64,
    /// Contract addresses
    pub addresses: ChainAddresses,
}

impl ChainConfig {
    /// Creates a configuration with the default (v1.3.0) addresses
    pub fn new(chain: SupportedChain) -> Self {
        Self {
            chain_id: chain.id(),
            addresses: ChainAddresses::default(),
        }
    }

    /// Creates a chain configuration with explicit addresses
    pub fn with_addresses(chain: SupportedChain, addresses: ChainAddresses) -> Self {
        Self {
            chain_id: chain.id(),
            addresses,
        }
    }
}
