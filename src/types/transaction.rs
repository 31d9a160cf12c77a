//! Transaction descriptors and the batch builder
//!
//! Both input shapes (a list of records, or three parallel arrays) end up as the
//! same [`TransactionBatch`], so a batch of one is just a batch.

use alloy::primitives::{hex, Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One on-chain call made by the Safe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDescriptor {
    /// Target address
    pub to: Address,
    /// Value in wei
    pub value: U256,
    /// Calldata
    pub data: Bytes,
}

impl TransactionDescriptor {
    /// Creates a new descriptor
    pub fn new(to: Address, value: U256, data: impl Into<Bytes>) -> Self {
        Self {
            to,
            value,
            data: data.into(),
        }
    }

    /// Parses a descriptor from its string form.
    ///
    /// `index` is the position in the batch and only used for error reporting.
    pub fn parse(index: usize, to: &str, value: &str, data: &str) -> Result<Self> {
        let to = to.trim().parse::<Address>().map_err(|e| Error::InvalidField {
            index,
            field: "target address",
            reason: e.to_string(),
        })?;

        Ok(Self {
            to,
            value: parse_value(index, value)?,
            data: parse_data(index, data)?,
        })
    }
}

/// Structured, unparsed form of a transaction, as found in bundle files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Target address
    #[serde(alias = "target", alias = "targetAddress")]
    pub to: String,
    /// Value in wei, decimal or 0x-hex
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
    /// Hex calldata
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: String,
}

// Transaction Builder exports write `null` for absent calldata
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl TransactionRecord {
    pub fn new(to: impl Into<String>, value: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            value: value.into(),
            data: data.into(),
        }
    }
}

/// The two accepted input shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionInput {
    /// A list of `{to, value, data}` records
    Records(Vec<TransactionRecord>),
    /// Three parallel arrays that must have the same length
    Parallel {
        targets: Vec<String>,
        values: Vec<String>,
        data: Vec<String>,
    },
}

impl TransactionInput {
    /// Input holding a single transaction
    pub fn single(to: impl Into<String>, value: impl Into<String>, data: impl Into<String>) -> Self {
        TransactionInput::Records(vec![TransactionRecord::new(to, value, data)])
    }

    /// Validates the input shape and builds the batch
    pub fn into_batch(self) -> Result<TransactionBatch> {
        match self {
            TransactionInput::Records(records) => TransactionBatch::from_records(&records),
            TransactionInput::Parallel {
                targets,
                values,
                data,
            } => TransactionBatch::from_parallel(&targets, &values, &data),
        }
    }
}

/// Ordered, non-empty list of transactions, in on-chain execution order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionBatch {
    transactions: Vec<TransactionDescriptor>,
}

impl TransactionBatch {
    /// Creates a batch from already parsed descriptors
    pub fn new(transactions: Vec<TransactionDescriptor>) -> Result<Self> {
        if transactions.is_empty() {
            return Err(Error::EmptyBatch);
        }
        Ok(Self { transactions })
    }

    /// Builds a batch from structured records
    pub fn from_records(records: &[TransactionRecord]) -> Result<Self> {
        let transactions = records
            .iter()
            .enumerate()
            .map(|(i, r)| TransactionDescriptor::parse(i, &r.to, &r.value, &r.data))
            .collect::<Result<Vec<_>>>()?;
        Self::new(transactions)
    }

    /// Builds a batch from parallel arrays.
    ///
    /// Fails with [`Error::InputShape`] before parsing anything if the lengths differ.
    pub fn from_parallel<S: AsRef<str>>(targets: &[S], values: &[S], data: &[S]) -> Result<Self> {
        let len = targets.len();
        if values.len() != len || data.len() != len {
            return Err(Error::InputShape {
                targets: len,
                values: values.len(),
                data: data.len(),
            });
        }

        let transactions = (0..len)
            .map(|i| {
                TransactionDescriptor::parse(
                    i,
                    targets[i].as_ref(),
                    values[i].as_ref(),
                    data[i].as_ref(),
                )
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(transactions)
    }

    /// Returns the transactions in order
    pub fn transactions(&self) -> &[TransactionDescriptor] {
        &self.transactions
    }

    /// Number of transactions in the batch (always at least one)
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

fn parse_value(index: usize, s: &str) -> Result<U256> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(U256::ZERO);
    }

    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => U256::from_str_radix(digits, 16),
        None => U256::from_str_radix(s, 10),
    };

    parsed.map_err(|e| Error::InvalidField {
        index,
        field: "value",
        reason: e.to_string(),
    })
}

fn parse_data(index: usize, s: &str) -> Result<Bytes> {
    let s = s.trim();
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if s.is_empty() {
        return Ok(Bytes::new());
    }

    hex::decode(s)
        .map(Bytes::from)
        .map_err(|e| Error::InvalidField {
            index,
            field: "data",
            reason: e.to_string(),
        })
}
