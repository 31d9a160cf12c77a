use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "safe-propose")]
#[command(about = "Propose Safe multisig transactions to the Safe Transaction Service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign transaction(s) and propose them to the Safe's relay
    Propose(ProposeArgs),

    /// Show the next free nonce according to the relay
    NextNonce(NextNonceArgs),

    /// Show the relay deployment for a chain
    RelayUrl(RelayUrlArgs),
}

#[derive(Parser, Clone)]
pub struct ProposeArgs {
    /// Safe contract address
    #[arg(long, env = "SAFE_ADDRESS")]
    pub safe: String,

    /// Chain ID
    #[arg(long, default_value_t = 1)]
    pub chain_id: u64,

    /// Target address (repeatable, paired with --value and --data by position)
    #[arg(long = "target", value_name = "ADDR", conflicts_with = "bundle")]
    pub targets: Vec<String>,

    /// Value in wei, decimal or 0x-hex (repeatable)
    #[arg(long = "value", value_name = "WEI", conflicts_with = "bundle")]
    pub values: Vec<String>,

    /// Calldata as hex (repeatable)
    #[arg(long = "data", value_name = "HEX", conflicts_with = "bundle")]
    pub data: Vec<String>,

    /// Path to Safe Transaction Builder JSON file
    #[arg(long)]
    pub bundle: Option<String>,

    #[command(flatten)]
    pub rpc: RpcArgs,

    /// Relay base URL (defaults to the deployment for the chain)
    #[arg(long, env = "SAFE_RELAY_URL")]
    pub relay_url: Option<String>,

    /// Timeout for each network step, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Fail when the relay rejects the proposal
    #[arg(long)]
    pub strict: bool,

    /// Use MultiSendCallOnly for batches
    #[arg(long)]
    pub call_only: bool,

    /// Sign with eth_sign (EIP-191) instead of EIP-712
    #[arg(long)]
    pub eth_sign: bool,

    /// Origin tag stored with the proposal
    #[arg(long)]
    pub origin: Option<String>,

    /// Skip confirmation prompt
    #[arg(long)]
    pub no_confirm: bool,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

#[derive(Parser, Clone)]
pub struct NextNonceArgs {
    /// Safe contract address
    #[arg(long, env = "SAFE_ADDRESS")]
    pub safe: String,

    /// Chain ID
    #[arg(long, default_value_t = 1)]
    pub chain_id: u64,

    /// Relay base URL (defaults to the deployment for the chain)
    #[arg(long, env = "SAFE_RELAY_URL")]
    pub relay_url: Option<String>,

    /// Request timeout, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Parser, Clone)]
pub struct RelayUrlArgs {
    /// Chain ID
    #[arg(long)]
    pub chain_id: u64,
}

#[derive(Args, Clone)]
pub struct RpcArgs {
    /// RPC endpoint URL
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: Option<String>,

    /// Alchemy API key, used when no RPC URL is given
    #[arg(long, env = "ALCHEMY_KEY", hide_env_values = true)]
    pub rpc_api_key: Option<String>,
}

#[derive(Args, Clone)]
pub struct WalletArgs {
    /// Raw private key
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Prompt for private key interactively
    #[arg(short, long)]
    pub interactive: bool,
}
