use std::time::Duration;

use alloy::primitives::Address;
use color_eyre::eyre::Result;
use safe_propose::proposer::with_timeout;
use safe_propose::{resolve_relay_url, RelayClient, RelayService};
use tracing::{debug, info};
use url::Url;

use crate::cli::NextNonceArgs;
use crate::output::NonceOutput;

pub async fn run(args: NextNonceArgs, json: bool) -> Result<()> {
    let safe: Address = args.safe.trim().parse()?;
    let relay_url: Url = match &args.relay_url {
        Some(url) => url.parse()?,
        None => resolve_relay_url(args.chain_id)?,
    };

    let timeout = Duration::from_secs(args.timeout_secs);
    let relay = RelayClient::new(relay_url, timeout)?;
    debug!(relay = %relay.base_url(), "Using relay");
    let next_nonce = with_timeout("next nonce", timeout, relay.next_nonce(safe)).await?;
    info!(%safe, %next_nonce, "Fetched next nonce");

    NonceOutput {
        safe,
        chain_id: args.chain_id,
        next_nonce,
    }
    .print(json);

    Ok(())
}
