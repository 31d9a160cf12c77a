//! Wire types of the Safe Transaction Service API

use alloy::primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Deserializer, Serialize};

use crate::encoding::SafeTransaction;

/// A signed aggregate transaction ready to be proposed
#[derive(Debug, Clone)]
pub struct SignedProposal {
    /// Safe the proposal targets
    pub safe: Address,
    /// The aggregate transaction, nonce included
    pub transaction: SafeTransaction,
    /// Canonical safeTxHash of `transaction`
    pub safe_tx_hash: B256,
    /// Owner that signed the proposal
    pub sender: Address,
    /// 65-byte owner signature
    pub signature: Bytes,
    /// Free-form tag shown by Safe frontends
    pub origin: Option<String>,
}

/// Body of `POST /v1/safes/{safe}/multisig-transactions/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposeTransactionBody {
    pub to: String,
    pub value: String,
    pub data: String,
    pub operation: u8,
    pub safe_tx_gas: String,
    pub base_gas: String,
    pub gas_price: String,
    pub gas_token: String,
    pub refund_receiver: String,
    pub nonce: String,
    pub contract_transaction_hash: String,
    pub sender: String,
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl From<&SignedProposal> for ProposeTransactionBody {
    fn from(proposal: &SignedProposal) -> Self {
        let tx = &proposal.transaction;
        Self {
            to: tx.to.to_checksum(None),
            value: tx.value.to_string(),
            data: tx.data.to_string(),
            operation: tx.operation.as_u8(),
            safe_tx_gas: tx.safe_tx_gas.to_string(),
            base_gas: tx.base_gas.to_string(),
            gas_price: tx.gas_price.to_string(),
            gas_token: tx.gas_token.to_checksum(None),
            refund_receiver: tx.refund_receiver.to_checksum(None),
            nonce: tx.nonce.to_string(),
            contract_transaction_hash: proposal.safe_tx_hash.to_string(),
            sender: proposal.sender.to_checksum(None),
            signature: proposal.signature.to_string(),
            origin: proposal.origin.clone(),
        }
    }
}

/// The part of `GET /v1/safes/{safe}/` the proposer uses
#[derive(Debug, Clone, Deserialize)]
pub struct SafeInfoResponse {
    #[serde(deserialize_with = "deserialize_nonce")]
    pub nonce: U256,
}

/// Page of `GET /v1/safes/{safe}/multisig-transactions/`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MultisigTransactionsPage {
    #[serde(default)]
    pub results: Vec<MultisigTransactionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MultisigTransactionEntry {
    #[serde(deserialize_with = "deserialize_nonce")]
    pub nonce: U256,
}

// Service versions disagree on whether nonces are JSON numbers or strings
fn deserialize_nonce<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(U256::from(n)),
        Raw::Text(s) => s.trim().parse::<U256>().map_err(serde::de::Error::custom),
    }
}
