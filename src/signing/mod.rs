//! Owner signatures over Safe transaction hashes

mod ecdsa;

pub use ecdsa::{eth_sign_hash, sign_hash, validate_signature, SignatureScheme};
