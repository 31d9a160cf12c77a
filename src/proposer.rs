//! Submission orchestration: nonce, build, sign, propose

use std::future::Future;
use std::time::Duration;

use alloy::primitives::{Address, B256, U256};
use tracing::{debug, error, info};

use crate::account::SafeAccount;
use crate::chain::resolve_relay_url;
use crate::config::{resolve_signer, ProposerConfig, DEFAULT_TIMEOUT};
use crate::error::{Error, Result};
use crate::relay::{RelayClient, RelayService, SignedProposal};
use crate::safe::Safe;
use crate::signing::validate_signature;
use crate::types::{TransactionBatch, TransactionInput};

/// What happens when the relay rejects a signed proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPolicy {
    /// Log the failure and return [`ProposalOutcome::Failed`]
    #[default]
    Report,
    /// Return [`Error::ProposalSubmission`]
    Strict,
}

/// Result of a proposal run that got as far as the relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProposalOutcome {
    /// The relay stored the proposal
    Submitted { safe_tx_hash: B256, nonce: U256 },
    /// The relay did not accept the proposal
    Failed {
        safe_tx_hash: B256,
        nonce: U256,
        reason: String,
    },
}

impl ProposalOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, ProposalOutcome::Submitted { .. })
    }

    pub fn safe_tx_hash(&self) -> B256 {
        match self {
            ProposalOutcome::Submitted { safe_tx_hash, .. }
            | ProposalOutcome::Failed { safe_tx_hash, .. } => *safe_tx_hash,
        }
    }

    pub fn nonce(&self) -> U256 {
        match self {
            ProposalOutcome::Submitted { nonce, .. } | ProposalOutcome::Failed { nonce, .. } => {
                *nonce
            }
        }
    }
}

/// Runs a future, failing with [`Error::Timeout`] once `after` elapses
pub async fn with_timeout<T, F>(what: &'static str, after: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::time::timeout(after, fut)
        .await
        .map_err(|_| Error::Timeout { what, after })?
}

/// Proposes batches to a relay on behalf of one Safe owner
pub struct Proposer<R> {
    relay: R,
    policy: SubmissionPolicy,
    timeout: Duration,
    origin: Option<String>,
}

impl<R: RelayService> Proposer<R> {
    pub fn new(relay: R) -> Self {
        Self {
            relay,
            policy: SubmissionPolicy::default(),
            timeout: DEFAULT_TIMEOUT,
            origin: None,
        }
    }

    pub fn with_policy(mut self, policy: SubmissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_origin(mut self, origin: Option<String>) -> Self {
        self.origin = origin;
        self
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    /// Builds, signs and proposes `batch` as one Safe transaction.
    ///
    /// The nonce is fetched from the relay on every call and embedded before
    /// hashing. Errors before the relay POST always propagate; a rejected POST
    /// is handled according to the [`SubmissionPolicy`].
    pub async fn propose<A>(&self, account: &A, batch: &TransactionBatch) -> Result<ProposalOutcome>
    where
        A: SafeAccount + Sync,
    {
        let safe = account.address();
        info!(%safe, transactions = batch.len(), "Creating transaction");

        let nonce = with_timeout("next nonce", self.timeout, self.relay.next_nonce(safe)).await?;
        debug!(%safe, %nonce, "Fetched nonce");

        let transaction = account.create_transaction(batch, nonce)?;
        let signature =
            with_timeout("signature", self.timeout, account.sign_transaction(&transaction)).await?;
        validate_signature(&signature)?;
        let safe_tx_hash = account.transaction_hash(&transaction);

        let proposal = SignedProposal {
            safe,
            transaction,
            safe_tx_hash,
            sender: account.signer_address(),
            signature,
            origin: self.origin.clone(),
        };

        let submitted = with_timeout(
            "proposal",
            self.timeout,
            self.relay.propose_transaction(&proposal),
        )
        .await;

        match submitted {
            Ok(()) => {
                info!(%safe, %safe_tx_hash, %nonce, "Transaction sent!");
                Ok(ProposalOutcome::Submitted {
                    safe_tx_hash,
                    nonce,
                })
            }
            Err(err) => {
                let reason = err.to_string();
                match self.policy {
                    SubmissionPolicy::Report => {
                        error!(%safe, %safe_tx_hash, %nonce, error = %reason, "Transaction failed!");
                        Ok(ProposalOutcome::Failed {
                            safe_tx_hash,
                            nonce,
                            reason,
                        })
                    }
                    SubmissionPolicy::Strict => Err(Error::ProposalSubmission(reason)),
                }
            }
        }
    }
}

/// Proposes `input` to the Safe at `safe_address` with a single owner key.
///
/// Input shape and chain support are checked before any network call.
pub async fn send_transaction(
    config: &ProposerConfig,
    safe_address: &str,
    input: TransactionInput,
) -> Result<ProposalOutcome> {
    let batch = input.into_batch()?;
    info!(
        "Transaction array totaling {} transactions created",
        batch.len()
    );
    let chain = config.chain()?;
    let relay_url = match &config.relay_url {
        Some(url) => url.clone(),
        None => resolve_relay_url(chain.id())?,
    };
    let safe_address: Address = safe_address
        .trim()
        .parse()
        .map_err(|_| Error::InvalidAddress(safe_address.to_string()))?;

    let (provider, signer) = resolve_signer(config)?;
    let relay = RelayClient::new(relay_url, config.timeout)?;
    debug!(relay = %relay.base_url(), "Using relay");

    let safe = with_timeout(
        "safe connection",
        config.timeout,
        Safe::connect(provider, signer, safe_address, chain),
    )
    .await?
    .with_signature_scheme(config.signature_scheme)
    .call_only(config.call_only);

    Proposer::new(relay)
        .with_policy(config.policy)
        .with_timeout(config.timeout)
        .with_origin(config.origin.clone())
        .propose(&safe, &batch)
        .await
}
