//! The account seam used by the proposer

use std::future::Future;

use alloy::primitives::{Address, Bytes, B256, U256};

use crate::encoding::SafeTransaction;
use crate::error::Result;
use crate::types::TransactionBatch;

/// A Safe as seen by one of its owners: it turns a batch into the aggregate
/// transaction, hashes it, and signs it.
///
/// Implementations must not perform network calls in `create_transaction` or
/// `transaction_hash`; the nonce comes from the caller.
pub trait SafeAccount {
    /// Returns the Safe contract address.
    fn address(&self) -> Address;

    /// Returns the owner address that signs proposals.
    fn signer_address(&self) -> Address;

    /// Returns the chain the Safe lives on.
    fn chain_id(&self) -> u64;

    /// Builds the aggregate transaction for `batch` at `nonce`.
    fn create_transaction(&self, batch: &TransactionBatch, nonce: U256) -> Result<SafeTransaction>;

    /// Returns the canonical safeTxHash of `tx`.
    fn transaction_hash(&self, tx: &SafeTransaction) -> B256;

    /// Produces the owner's signature over the safeTxHash of `tx`.
    fn sign_transaction(&self, tx: &SafeTransaction) -> impl Future<Output = Result<Bytes>> + Send;
}
