use std::time::Duration;

use alloy::primitives::Address;
use color_eyre::eyre::{eyre, Result};
use safe_propose::config::parse_private_key;
use safe_propose::{
    send_transaction, ProposerConfig, SignatureScheme, SubmissionPolicy, TransactionInput,
};
use tracing::{info, warn};

use crate::bundle::load_bundle;
use crate::cli::ProposeArgs;
use crate::output::{confirm_prompt, print_batch_summary, ProposalOutput};
use crate::wallet::private_key;

pub async fn run(args: ProposeArgs, json: bool) -> Result<()> {
    let input = build_input(&args)?;
    let config = build_config(&args)?;

    if !args.no_confirm && !json {
        // Preview only; the library validates again before doing anything
        let batch = input.clone().into_batch()?;
        println!("Safe: {}", args.safe);
        println!("Chain ID: {}", args.chain_id);
        println!();
        print_batch_summary(&batch);
        println!();

        if !confirm_prompt("Sign and propose transaction?") {
            info!("Proposal aborted at confirmation");
            println!("Aborted");
            return Ok(());
        }
    }

    let outcome = send_transaction(&config, &args.safe, input).await?;
    if outcome.is_submitted() {
        info!(safe = %args.safe, safe_tx_hash = %outcome.safe_tx_hash(), "Proposal accepted");
    } else {
        warn!(safe = %args.safe, safe_tx_hash = %outcome.safe_tx_hash(), "Proposal not accepted");
    }

    let safe: Address = args.safe.trim().parse()?;
    let sender = match config.private_key.as_deref() {
        Some(key) => parse_private_key(key)?.address(),
        None => Address::ZERO,
    };
    ProposalOutput::new(safe, sender, args.chain_id, &outcome).print(json);

    Ok(())
}

fn build_input(args: &ProposeArgs) -> Result<TransactionInput> {
    // Mode 1: Bundle file
    if let Some(bundle_path) = &args.bundle {
        return Ok(TransactionInput::Records(load_bundle(bundle_path)?));
    }

    // Mode 2: parallel --target/--value/--data
    if args.targets.is_empty() && args.values.is_empty() && args.data.is_empty() {
        return Err(eyre!("No transactions specified. Use --target/--value/--data or --bundle"));
    }
    Ok(TransactionInput::Parallel {
        targets: args.targets.clone(),
        values: args.values.clone(),
        data: args.data.clone(),
    })
}

fn build_config(args: &ProposeArgs) -> Result<ProposerConfig> {
    let mut config = ProposerConfig::new(args.chain_id)
        .with_timeout(Duration::from_secs(args.timeout_secs))
        .with_call_only(args.call_only);

    if let Some(key) = private_key(&args.wallet)? {
        config = config.with_private_key(key);
    }
    if let Some(url) = &args.rpc.rpc_url {
        config = config.with_rpc_url(url.parse()?);
    }
    if let Some(key) = &args.rpc.rpc_api_key {
        config = config.with_rpc_api_key(key.clone());
    }
    if let Some(url) = &args.relay_url {
        config = config.with_relay_url(url.parse()?);
    }
    if args.strict {
        config = config.with_policy(SubmissionPolicy::Strict);
    }
    if args.eth_sign {
        config = config.with_signature_scheme(SignatureScheme::EthSign);
    }
    if let Some(origin) = &args.origin {
        config = config.with_origin(origin.clone());
    }

    Ok(config.with_env_fallback())
}
