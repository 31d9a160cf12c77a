//! The off-chain relay (Safe Transaction Service) that stores proposals
//!
//! The relay is the single source of truth for the next free Safe nonce; nothing
//! here caches it.

mod client;
mod types;

use std::future::Future;

use alloy::primitives::{Address, U256};

use crate::error::Result;

pub use client::RelayClient;
pub use types::{ProposeTransactionBody, SafeInfoResponse, SignedProposal};

/// Operations the proposer needs from a relay deployment
pub trait RelayService {
    /// Returns the next nonce not taken by an executed or pending transaction.
    fn next_nonce(&self, safe: Address) -> impl Future<Output = Result<U256>> + Send;

    /// Stores a signed proposal so the other owners can confirm it.
    fn propose_transaction(
        &self,
        proposal: &SignedProposal,
    ) -> impl Future<Output = Result<()>> + Send;
}
