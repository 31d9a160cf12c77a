use color_eyre::eyre::Result;
use safe_propose::SupportedChain;
use tracing::info;

use crate::cli::RelayUrlArgs;
use crate::output::RelayUrlOutput;

pub fn run(args: RelayUrlArgs, json: bool) -> Result<()> {
    let chain = SupportedChain::try_from(args.chain_id)?;
    let relay_url = chain.relay_url()?;
    info!(%chain, %relay_url, "Resolved relay URL");

    RelayUrlOutput {
        chain_id: chain.id(),
        network: chain.network_name().to_string(),
        relay_url: relay_url.to_string(),
    }
    .print(json);

    Ok(())
}
