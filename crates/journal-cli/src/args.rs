use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "journal", version, about = "Journal dapp CLI")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// RPC endpoint of the cluster to talk to.
    #[arg(long, global = true, default_value = journal_solana_client::DEVNET_RPC_URL)]
    pub url: String,

    /// Journal program id (defaults to the devnet deployment).
    #[arg(long, global = true)]
    pub program_id: Option<String>,

    /// Path to the signing keypair file (default: ~/.config/solana/id.json).
    #[arg(long, global = true)]
    pub keypair: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a new journal entry.
    Create {
        title: String,
        message: String,
    },

    /// Replace the message of one of your entries.
    Update {
        title: String,
        message: String,
    },

    /// Delete one of your entries.
    Delete {
        title: String,
    },

    /// Fetch a single entry by title.
    Show {
        title: String,
        /// Owner pubkey; defaults to the signing keypair.
        #[arg(long)]
        owner: Option<String>,
    },

    /// List all entries of an owner.
    List {
        /// Owner pubkey; defaults to the signing keypair.
        #[arg(long)]
        owner: Option<String>,
    },

    /// Run environment checks against the cluster.
    Doctor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn create_parses_positionals() {
        let cli = Cli::parse_from(["journal", "create", "My Entry", "hello"]);
        match cli.command {
            Command::Create { title, message } => {
                assert_eq!(title, "My Entry");
                assert_eq!(message, "hello");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
