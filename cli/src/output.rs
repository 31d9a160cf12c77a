use alloy::primitives::{Address, B256, U256};
use safe_propose::{ProposalOutcome, TransactionBatch};
use serde::Serialize;

#[derive(Serialize)]
pub struct ProposalOutput {
    pub safe: Address,
    pub sender: Address,
    pub chain_id: u64,
    pub submitted: bool,
    pub safe_tx_hash: B256,
    #[serde(serialize_with = "as_decimal")]
    pub nonce: U256,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProposalOutput {
    pub fn new(safe: Address, sender: Address, chain_id: u64, outcome: &ProposalOutcome) -> Self {
        let error = match outcome {
            ProposalOutcome::Submitted { .. } => None,
            ProposalOutcome::Failed { reason, .. } => Some(reason.clone()),
        };
        Self {
            safe,
            sender,
            chain_id,
            submitted: outcome.is_submitted(),
            safe_tx_hash: outcome.safe_tx_hash(),
            nonce: outcome.nonce(),
            error,
        }
    }

    pub fn print(&self, json: bool) {
        if json {
            print_json(self);
        } else {
            if self.submitted {
                println!("Transaction Proposed:");
            } else {
                println!("Proposal Failed:");
            }
            println!("  Safe: {}", self.safe);
            println!("  Sender: {}", self.sender);
            println!("  Chain ID: {}", self.chain_id);
            println!("  Safe Tx Hash: {}", self.safe_tx_hash);
            println!("  Nonce: {}", self.nonce);
            if let Some(error) = &self.error {
                println!("  Error: {}", error);
            }
        }
    }
}

#[derive(Serialize)]
pub struct NonceOutput {
    pub safe: Address,
    pub chain_id: u64,
    #[serde(serialize_with = "as_decimal")]
    pub next_nonce: U256,
}

impl NonceOutput {
    pub fn print(&self, json: bool) {
        if json {
            print_json(self);
        } else {
            println!("Safe: {}", self.safe);
            println!("Next Nonce: {}", self.next_nonce);
        }
    }
}

#[derive(Serialize)]
pub struct RelayUrlOutput {
    pub chain_id: u64,
    pub network: String,
    pub relay_url: String,
}

impl RelayUrlOutput {
    pub fn print(&self, json: bool) {
        if json {
            print_json(self);
        } else {
            println!("{}", self.relay_url);
        }
    }
}

pub fn print_batch_summary(batch: &TransactionBatch) {
    println!("Transactions ({}):", batch.len());
    for (i, tx) in batch.transactions().iter().enumerate() {
        println!("  {}. To: {}", i + 1, tx.to);
        if !tx.value.is_zero() {
            println!("     Value: {} wei", tx.value);
        }
        println!("     Data: {} bytes", tx.data.len());
    }
}

pub fn confirm_prompt(message: &str) -> bool {
    use dialoguer::Confirm;

    Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .unwrap_or(false)
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => eprintln!("Failed to render JSON: {}", e),
    }
}

fn as_decimal<S: serde::Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}
