use color_eyre::eyre::{eyre, Result};

use crate::cli::WalletArgs;

/// Returns the owner key to sign with, if any was given
pub fn private_key(args: &WalletArgs) -> Result<Option<String>> {
    // Priority: interactive > private_key
    if args.interactive {
        let key = rpassword::prompt_password("Enter private key: ")?;
        if key.trim().is_empty() {
            return Err(eyre!("No private key entered"));
        }
        Ok(Some(key.trim().to_string()))
    } else {
        Ok(args.private_key.clone())
    }
}
