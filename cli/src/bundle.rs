use color_eyre::eyre::{eyre, Result};
use safe_propose::TransactionRecord;
use std::fs;
use std::path::Path;

/// Loads a Safe Transaction Builder JSON file (`[{to, value, data}]`)
pub fn load_bundle(path: &str) -> Result<Vec<TransactionRecord>> {
    let path = Path::new(path);
    if !path.exists() {
        return Err(eyre!("Bundle file not found: {}", path.display()));
    }

    let content = fs::read_to_string(path)?;
    parse_bundle(&content)
}

/// Parses bundle JSON content.
///
/// Accepts either a bare array or the Transaction Builder export object with a
/// `transactions` field.
pub fn parse_bundle(content: &str) -> Result<Vec<TransactionRecord>> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Bundle {
        List(Vec<TransactionRecord>),
        Export { transactions: Vec<TransactionRecord> },
    }

    let bundle: Bundle =
        serde_json::from_str(content).map_err(|e| eyre!("Invalid bundle JSON: {}", e))?;
    let records = match bundle {
        Bundle::List(records) | Bundle::Export { transactions: records } => records,
    };

    if records.is_empty() {
        return Err(eyre!("Bundle contains no transactions"));
    }
    Ok(records)
}
