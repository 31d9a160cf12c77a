//! ECDSA owner signatures in the layout Safe expects

use alloy::primitives::{Bytes, B256};
use alloy::signers::{Signature, Signer};

use crate::error::{Error, Result};

/// How the owner signs the safeTxHash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureScheme {
    /// Sign the EIP-712 hash directly (v = 27/28)
    #[default]
    Eip712,
    /// Sign through `eth_sign` / EIP-191 prefixing (v = 31/32)
    EthSign,
}

impl SignatureScheme {
    /// Signs `hash` with the given scheme
    pub async fn sign<S: Signer + Sync>(&self, signer: &S, hash: B256) -> Result<Bytes> {
        match self {
            SignatureScheme::Eip712 => sign_hash(signer, hash).await,
            SignatureScheme::EthSign => eth_sign_hash(signer, hash).await,
        }
    }
}

/// Signs the hash as-is. Output is `r (32) || s (32) || v (1)` with v in {27, 28}.
pub async fn sign_hash<S: Signer + Sync>(signer: &S, hash: B256) -> Result<Bytes> {
    let signature = signer.sign_hash(&hash).await?;
    Ok(pack(&signature, 27))
}

/// Signs the hash as an EIP-191 message. Safe marks these with v in {31, 32}.
pub async fn eth_sign_hash<S: Signer + Sync>(signer: &S, hash: B256) -> Result<Bytes> {
    let signature = signer.sign_message(hash.as_slice()).await?;
    Ok(pack(&signature, 31))
}

fn pack(signature: &Signature, v_base: u8) -> Bytes {
    let mut out = Vec::with_capacity(65);
    out.extend_from_slice(&signature.r().to_be_bytes::<32>());
    out.extend_from_slice(&signature.s().to_be_bytes::<32>());
    out.push(v_base + u8::from(signature.v()));
    Bytes::from(out)
}

/// Checks length and that v is one of the ECDSA encodings this crate produces
pub fn validate_signature(signature: &[u8]) -> Result<()> {
    if signature.len() != 65 {
        return Err(Error::Signing(format!(
            "Invalid signature length: expected 65, got {}",
            signature.len()
        )));
    }

    let v = signature[64];
    if !matches!(v, 27 | 28 | 31 | 32) {
        return Err(Error::Signing(format!("Invalid signature v value: {}", v)));
    }

    Ok(())
}
