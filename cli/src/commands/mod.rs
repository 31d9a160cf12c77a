pub mod next_nonce;
pub mod propose;
pub mod relay_url;
