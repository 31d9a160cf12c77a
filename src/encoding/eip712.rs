//! EIP-712 hashing of Safe transactions

use alloy::primitives::{keccak256, Address, Bytes, B256, U256};
use alloy::sol_types::{sol_data, SolType, SolValue};

use crate::chain::SafeVersion;
use crate::contracts::{DOMAIN_SEPARATOR_TYPEHASH, LEGACY_DOMAIN_SEPARATOR_TYPEHASH, SAFE_TX_TYPEHASH};
use crate::types::Operation;

/// The aggregate transaction a Safe executes, as hashed and signed by its owners
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeTransaction {
    /// Target address (the call target, or MultiSend for batches)
    pub to: Address,
    /// Value to send
    pub value: U256,
    /// Calldata
    pub data: Bytes,
    /// Operation type
    pub operation: Operation,
    /// Gas limit for the Safe transaction
    pub safe_tx_gas: U256,
    /// Base gas (overhead)
    pub base_gas: U256,
    /// Gas price for refund calculation
    pub gas_price: U256,
    /// Token used for gas refund (address(0) for ETH)
    pub gas_token: Address,
    /// Address to receive gas refund
    pub refund_receiver: Address,
    /// Safe nonce
    pub nonce: U256,
}

impl SafeTransaction {
    /// Creates a transaction with zeroed gas and refund parameters
    pub fn new(
        to: Address,
        value: U256,
        data: impl Into<Bytes>,
        operation: Operation,
        nonce: U256,
    ) -> Self {
        Self {
            to,
            value,
            data: data.into(),
            operation,
            safe_tx_gas: U256::ZERO,
            base_gas: U256::ZERO,
            gas_price: U256::ZERO,
            gas_token: Address::ZERO,
            refund_receiver: Address::ZERO,
            nonce,
        }
    }
}

/// keccak256(abi.encode(DOMAIN_SEPARATOR_TYPEHASH, chainId, safe))
pub fn compute_domain_separator(chain_id: u64, safe_address: Address) -> B256 {
    let encoded = (
        B256::from(DOMAIN_SEPARATOR_TYPEHASH),
        U256::from(chain_id),
        safe_address,
    )
        .abi_encode();
    keccak256(encoded)
}

/// keccak256(abi.encode(LEGACY_DOMAIN_SEPARATOR_TYPEHASH, safe)) for Safes before v1.3.0
pub fn compute_legacy_domain_separator(safe_address: Address) -> B256 {
    let encoded = (B256::from(LEGACY_DOMAIN_SEPARATOR_TYPEHASH), safe_address).abi_encode();
    keccak256(encoded)
}

/// Domain separator in the layout `version` uses
pub fn compute_versioned_domain_separator(
    version: SafeVersion,
    chain_id: u64,
    safe_address: Address,
) -> B256 {
    if version.domain_includes_chain_id() {
        compute_domain_separator(chain_id, safe_address)
    } else {
        compute_legacy_domain_separator(safe_address)
    }
}

/// Struct hash of a SafeTx; dynamic `data` enters as its keccak256
pub fn compute_safe_tx_hash(tx: &SafeTransaction) -> B256 {
    let encoded = <(
        sol_data::FixedBytes<32>,
        sol_data::Address,
        sol_data::Uint<256>,
        sol_data::FixedBytes<32>,
        sol_data::Uint<8>,
        sol_data::Uint<256>,
        sol_data::Uint<256>,
        sol_data::Uint<256>,
        sol_data::Address,
        sol_data::Address,
        sol_data::Uint<256>,
    ) as SolType>::abi_encode(&(
        B256::from(SAFE_TX_TYPEHASH),
        tx.to,
        tx.value,
        keccak256(&tx.data),
        tx.operation.as_u8(),
        tx.safe_tx_gas,
        tx.base_gas,
        tx.gas_price,
        tx.gas_token,
        tx.refund_receiver,
        tx.nonce,
    ));
    keccak256(encoded)
}

/// keccak256("\x19\x01" || domainSeparator || safeTxHash)
pub fn compute_transaction_hash(domain_separator: B256, safe_tx_hash: B256) -> B256 {
    let mut preimage = [0u8; 66];
    preimage[..2].copy_from_slice(&[0x19, 0x01]);
    preimage[2..34].copy_from_slice(domain_separator.as_slice());
    preimage[34..].copy_from_slice(safe_tx_hash.as_slice());
    keccak256(preimage)
}

/// Computes the safeTxHash owners sign and the relay indexes proposals by
pub fn compute_safe_transaction_hash(
    chain_id: u64,
    safe_address: Address,
    tx: &SafeTransaction,
) -> B256 {
    compute_transaction_hash(
        compute_domain_separator(chain_id, safe_address),
        compute_safe_tx_hash(tx),
    )
}

/// safeTxHash as computed on-chain by a Safe of the given version
pub fn compute_versioned_transaction_hash(
    version: SafeVersion,
    chain_id: u64,
    safe_address: Address,
    tx: &SafeTransaction,
) -> B256 {
    compute_transaction_hash(
        compute_versioned_domain_separator(version, chain_id, safe_address),
        compute_safe_tx_hash(tx),
    )
}
