//! # safe-propose
//!
//! Propose Safe multisig transactions to the Safe Transaction Service with a
//! single owner key.
//!
//! ## Features
//!
//! - One transaction type for single calls and batches (batches go through MultiSend)
//! - Fixed chain id to relay deployment mapping
//! - Nonce fetched fresh from the relay on every proposal
//! - Configurable handling of relay rejections (report or fail)
//! - Timeouts around every network step
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use safe_propose::{send_transaction, ProposerConfig, TransactionInput};
//!
//! let config = ProposerConfig::new(5)
//!     .with_private_key(key)
//!     .with_rpc_api_key(alchemy_key);
//!
//! let input = TransactionInput::Parallel {
//!     targets: vec![token.into(), token.into()],
//!     values: vec!["0".into(), "0".into()],
//!     data: vec![approve_calldata, transfer_calldata],
//! };
//!
//! let outcome = send_transaction(&config, safe_address, input).await?;
//! println!("{:?}", outcome);
//! ```
//!
//! ## Lower-level API
//!
//! [`Proposer`] drives any [`SafeAccount`] against any [`RelayService`]:
//!
//! ```rust,ignore
//! let safe = Safe::connect(provider, signer, safe_address, SupportedChain::Goerli).await?;
//! let relay = RelayClient::new(resolve_relay_url(5)?, Duration::from_secs(30))?;
//!
//! let outcome = Proposer::new(relay)
//!     .with_policy(SubmissionPolicy::Strict)
//!     .propose(&safe, &batch)
//!     .await?;
//! ```

pub mod account;
pub mod chain;
pub mod config;
pub mod contracts;
pub mod encoding;
pub mod error;
pub mod proposer;
pub mod relay;
pub mod safe;
pub mod signing;
pub mod types;

// Re-export main types at crate root
pub use account::SafeAccount;
pub use chain::{resolve_relay_url, ChainAddresses, ChainConfig, SafeVersion, SupportedChain};
pub use config::{resolve_signer, ProposerConfig};
pub use encoding::{compute_safe_transaction_hash, SafeTransaction};
pub use error::{Error, Result};
pub use proposer::{send_transaction, ProposalOutcome, Proposer, SubmissionPolicy};
pub use relay::{RelayClient, RelayService, SignedProposal};
pub use safe::{Safe, SAFE_SINGLETON_SLOT};
pub use signing::SignatureScheme;
pub use types::{Operation, TransactionBatch, TransactionDescriptor, TransactionInput, TransactionRecord};

// Re-export alloy types that are commonly used
pub use alloy::network::AnyNetwork;
pub use alloy::primitives::{Address, Bytes, B256, U256};
pub use alloy::providers::Provider;
