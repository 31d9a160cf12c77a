//! Error types for safe-propose

use std::time::Duration;

use alloy::primitives::Address;
use thiserror::Error;

/// Result type alias for safe-propose operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, signing or proposing a Safe transaction
#[derive(Debug, Error)]
pub enum Error {
    /// Parallel transaction arrays have different lengths
    #[error("Mismatch array length: {targets} targets, {values} values, {data} data")]
    InputShape {
        targets: usize,
        values: usize,
        data: usize,
    },

    /// No transactions were supplied
    #[error("Invalid empty array of transactions")]
    EmptyBatch,

    /// A transaction field could not be parsed
    #[error("Invalid {field} for transaction {index}: {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: String,
    },

    /// The Safe address could not be parsed
    #[error("Invalid Safe address '{0}'")]
    InvalidAddress(String),

    /// Chain ID outside the supported set
    #[error("Unsupported chain ID: {0}")]
    UnsupportedChain(u64),

    /// A required secret was absent or empty
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// The private key could not be parsed
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Failed to connect to the RPC provider
    #[error("Provider error: {0}")]
    Provider(String),

    /// Failed to fetch data from the blockchain
    #[error("Failed to fetch {what}: {reason}")]
    Fetch { what: &'static str, reason: String },

    /// The provider is connected to a different chain than configured
    #[error("Provider is on chain {actual}, expected {expected}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// Safe contract not deployed at the given address
    #[error("Safe not deployed at {0}")]
    SafeNotDeployed(Address),

    /// The Safe reports a version whose transaction hash layout is not supported
    #[error("Unsupported Safe version: {0}")]
    UnsupportedSafeVersion(String),

    /// The signer is not an owner of the Safe
    #[error("Signer {signer} is not an owner of Safe {safe}")]
    NotOwner { signer: Address, safe: Address },

    /// Signature generation failed
    #[error("Failed to sign: {0}")]
    Signing(String),

    /// Encoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The relay answered with a non-success status
    #[error("Relay responded with {status}: {body}")]
    Relay { status: u16, body: String },

    /// Transport failure talking to the relay
    #[error("HTTP error: {0}")]
    Http(String),

    /// A network step did not complete in time
    #[error("Timed out after {after:?} waiting for {what}")]
    Timeout { what: &'static str, after: Duration },

    /// The relay did not accept the signed proposal
    #[error("Failed to propose transaction: {0}")]
    ProposalSubmission(String),
}

impl From<alloy::transports::RpcError<alloy::transports::TransportErrorKind>> for Error {
    fn from(err: alloy::transports::RpcError<alloy::transports::TransportErrorKind>) -> Self {
        Error::Provider(err.to_string())
    }
}

impl From<alloy::contract::Error> for Error {
    fn from(err: alloy::contract::Error) -> Self {
        Error::Provider(err.to_string())
    }
}

impl From<alloy::signers::Error> for Error {
    fn from(err: alloy::signers::Error) -> Self {
        Error::Signing(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}
