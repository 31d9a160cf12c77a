//! Provider-backed Safe account

use alloy::network::AnyNetwork;
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::providers::Provider;
use alloy::signers::local::PrivateKeySigner;
use alloy::sol_types::SolCall;
use tracing::{debug, info, warn};

use crate::account::SafeAccount;
use crate::chain::{ChainAddresses, ChainConfig, SafeVersion, SupportedChain};
use crate::contracts::{IMultiSend, ISafe};
use crate::encoding::{compute_versioned_transaction_hash, encode_multisend_data, SafeTransaction};
use crate::error::{Error, Result};
use crate::signing::SignatureScheme;
use crate::types::{Operation, TransactionBatch};

/// Safe proxies keep the singleton address in storage slot 0
pub const SAFE_SINGLETON_SLOT: U256 = U256::ZERO;

/// A Safe owned by the local signer
pub struct Safe<P> {
    /// The provider for RPC reads
    provider: P,
    /// The owner key
    signer: PrivateKeySigner,
    /// The Safe contract address
    address: Address,
    /// Chain configuration
    config: ChainConfig,
    /// Singleton version; decides the EIP-712 domain layout
    version: SafeVersion,
    scheme: SignatureScheme,
    use_call_only: bool,
}

impl<P> Safe<P>
where
    P: Provider<AnyNetwork>,
{
    /// Creates a Safe account without touching the network
    pub fn new(provider: P, signer: PrivateKeySigner, address: Address, config: ChainConfig) -> Self {
        Self {
            provider,
            signer,
            address,
            config,
            version: SafeVersion::default(),
            scheme: SignatureScheme::default(),
            use_call_only: false,
        }
    }

    /// Connects to a deployed Safe on `chain` and checks the signer owns it.
    ///
    /// The singleton version comes from `VERSION()`; versions older than 1.1.0 are
    /// rejected. Contract addresses (v1.3.0 or v1.4.1) are picked from the proxy's
    /// singleton.
    pub async fn connect(
        provider: P,
        signer: PrivateKeySigner,
        address: Address,
        chain: SupportedChain,
    ) -> Result<Self> {
        let actual = provider
            .get_chain_id()
            .await
            .map_err(|e| Error::Provider(e.to_string()))?;
        if actual != chain.id() {
            return Err(Error::ChainMismatch {
                expected: chain.id(),
                actual,
            });
        }

        let code = provider
            .get_code_at(address)
            .await
            .map_err(|e| Error::Fetch {
                what: "code",
                reason: e.to_string(),
            })?;
        if code.is_empty() {
            return Err(Error::SafeNotDeployed(address));
        }

        let version = Self::fetch_version(&provider, address).await?;
        if !version.is_supported() {
            return Err(Error::UnsupportedSafeVersion(version.to_string()));
        }

        let slot = provider
            .get_storage_at(address, SAFE_SINGLETON_SLOT)
            .await
            .map_err(|e| Error::Fetch {
                what: "singleton slot",
                reason: e.to_string(),
            })?;
        let singleton = Address::from_slice(&slot.to_be_bytes::<32>()[12..]);
        let addresses = ChainAddresses::for_singleton(singleton).unwrap_or_else(|| {
            warn!(%singleton, %version, "Unknown Safe singleton, using v1.3.0 MultiSend addresses");
            ChainAddresses::default()
        });

        let safe = Self::new(
            provider,
            signer,
            address,
            ChainConfig::with_addresses(chain, addresses),
        )
        .with_version(version);
        safe.verify_owner().await?;

        let threshold = safe.threshold().await?;
        info!(safe = %address, %chain, %version, threshold, "Connected to Safe");

        Ok(safe)
    }

    async fn fetch_version(provider: &P, address: Address) -> Result<SafeVersion> {
        let reported = ISafe::new(address, provider)
            .VERSION()
            .call()
            .await
            .map_err(|e| Error::Fetch {
                what: "version",
                reason: e.to_string(),
            })?;
        reported.parse()
    }

    /// Overrides the singleton version used for hashing
    pub fn with_version(mut self, version: SafeVersion) -> Self {
        self.version = version;
        self
    }

    pub fn version(&self) -> SafeVersion {
        self.version
    }

    /// Selects how the owner signs
    pub fn with_signature_scheme(mut self, scheme: SignatureScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Use MultiSendCallOnly instead of MultiSend for batches
    pub fn call_only(mut self, enabled: bool) -> Self {
        self.use_call_only = enabled;
        self
    }

    /// Returns the contract addresses in use
    pub fn addresses(&self) -> &ChainAddresses {
        &self.config.addresses
    }

    /// Gets the threshold of the Safe
    pub async fn threshold(&self) -> Result<u64> {
        let safe = ISafe::new(self.address, &self.provider);
        let threshold = safe
            .getThreshold()
            .call()
            .await
            .map_err(|e| Error::Fetch {
                what: "threshold",
                reason: e.to_string(),
            })?;
        Ok(threshold.saturating_to::<u64>())
    }

    /// Checks if an address is an owner of the Safe
    pub async fn is_owner(&self, address: Address) -> Result<bool> {
        let safe = ISafe::new(self.address, &self.provider);
        let is_owner = safe
            .isOwner(address)
            .call()
            .await
            .map_err(|e| Error::Fetch {
                what: "is_owner",
                reason: e.to_string(),
            })?;
        Ok(is_owner)
    }

    /// Only owners may sign proposals
    pub async fn verify_owner(&self) -> Result<()> {
        if !self.is_owner(self.signer.address()).await? {
            return Err(Error::NotOwner {
                signer: self.signer.address(),
                safe: self.address,
            });
        }
        Ok(())
    }

    fn multisend_address(&self) -> Address {
        if self.use_call_only {
            self.config.addresses.multi_send_call_only
        } else {
            self.config.addresses.multi_send
        }
    }
}

impl<P> SafeAccount for Safe<P>
where
    P: Provider<AnyNetwork>,
{
    fn address(&self) -> Address {
        self.address
    }

    fn signer_address(&self) -> Address {
        self.signer.address()
    }

    fn chain_id(&self) -> u64 {
        self.config.chain_id
    }

    fn create_transaction(&self, batch: &TransactionBatch, nonce: U256) -> Result<SafeTransaction> {
        let tx = match batch.transactions() {
            [single] => SafeTransaction::new(
                single.to,
                single.value,
                single.data.clone(),
                Operation::Call,
                nonce,
            ),
            txs => {
                let call = IMultiSend::multiSendCall {
                    transactions: encode_multisend_data(txs),
                };
                // Inner values travel in the packed data; the outer call carries none
                SafeTransaction::new(
                    self.multisend_address(),
                    U256::ZERO,
                    Bytes::from(call.abi_encode()),
                    Operation::DelegateCall,
                    nonce,
                )
            }
        };

        debug!(to = %tx.to, operation = %tx.operation, %nonce, "Built Safe transaction");
        Ok(tx)
    }

    fn transaction_hash(&self, tx: &SafeTransaction) -> B256 {
        compute_versioned_transaction_hash(self.version, self.config.chain_id, self.address, tx)
    }

    async fn sign_transaction(&self, tx: &SafeTransaction) -> Result<Bytes> {
        let hash = self.transaction_hash(tx);
        self.scheme.sign(&self.signer, hash).await
    }
}
