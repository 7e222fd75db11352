//! Constants shared between the on-chain journal program and clients.
//!
//! Keep these stable because they affect address derivation and the
//! instruction wire format.

use solana_program::pubkey::Pubkey;

/// Journal program id (devnet deployment).
pub const DEFAULT_PROGRAM_ID: &str = "7ye3d3zdux6TAnMrrzW3PeKCXc5FeG7kqcTvJNUwTr6E";

pub fn default_program_id() -> Pubkey {
    DEFAULT_PROGRAM_ID.parse().unwrap_or_else(|_| Pubkey::default())
}

/// Account type name; input to the persisted account discriminator.
pub const ENTRY_ACCOUNT_NAME: &str = "JournalEntryState";

/// Method names of the program's instruction interface.
pub const METHOD_CREATE_ENTRY: &str = "create_journal_entry";
pub const METHOD_UPDATE_ENTRY: &str = "update_journal_entry";
pub const METHOD_DELETE_ENTRY: &str = "delete_journal_entry";

/// Default RPC endpoints.
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";
pub const LOCALNET_RPC_URL: &str = "http://127.0.0.1:8899";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_program_id_parses() {
        assert_ne!(default_program_id(), Pubkey::default());
    }
}
