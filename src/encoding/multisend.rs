//! MultiSend transaction encoding
//!
//! Each transaction is packed as
//! `operation (1) | to (20) | value (32) | data length (32) | data`
//! and the packed entries are concatenated.

use alloy::primitives::{Bytes, U256};
use alloy::sol_types::{sol_data, SolType};

use crate::types::{Operation, TransactionDescriptor};

/// Packs one transaction for MultiSend. Inner transactions are always plain calls.
pub fn encode_transaction(tx: &TransactionDescriptor) -> Vec<u8> {
    <(
        sol_data::Uint<8>,
        sol_data::Address,
        sol_data::Uint<256>,
        sol_data::Uint<256>,
        sol_data::Bytes,
    ) as SolType>::abi_encode_packed(&(
        Operation::Call.as_u8(),
        tx.to,
        tx.value,
        U256::from(tx.data.len()),
        tx.data.clone(),
    ))
}

/// Packs a batch for `multiSend(bytes)`
pub fn encode_multisend_data(txs: &[TransactionDescriptor]) -> Bytes {
    txs.iter().flat_map(encode_transaction).collect::<Vec<u8>>().into()
}
