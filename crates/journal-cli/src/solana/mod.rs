//! Cluster wiring for the CLI: program id, keypair, and owner resolution.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair, Signer};

use journal_solana_client::{default_program_id, parse_owner, JournalClient};

use crate::args::Cli;

pub struct Context {
    pub client: JournalClient,
    pub url: String,
    keypair_path: Option<String>,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let program_id: Pubkey = match &cli.program_id {
            Some(s) => s
                .parse()
                .map_err(|_| anyhow!("invalid program id: {s}"))?,
            None => default_program_id(),
        };
        tracing::debug!(%program_id, url = %cli.url, "connecting journal client");
        Ok(Self {
            client: JournalClient::with_rpc(program_id, &cli.url),
            url: cli.url.clone(),
            keypair_path: cli.keypair.clone(),
        })
    }

    /// Load the signing keypair from --keypair or the standard CLI location.
    pub fn signer(&self) -> Result<Keypair> {
        let path = match &self.keypair_path {
            Some(p) => PathBuf::from(p),
            None => default_keypair_path()?,
        };
        read_keypair_file(&path)
            .map_err(|e| anyhow!("failed to read keypair {}: {e}", path.display()))
    }

    /// Resolve the owner for a query: an explicit pubkey, or the signer's.
    pub fn owner(&self, flag: Option<&str>) -> Result<Pubkey> {
        match flag {
            Some(s) => Ok(parse_owner(s)?),
            None => Ok(self.signer()?.pubkey()),
        }
    }
}

fn default_keypair_path() -> Result<PathBuf> {
    let home = std::env::var_os("HOME")
        .ok_or_else(|| anyhow!("HOME not set; pass --keypair"))?;
    Ok(PathBuf::from(home).join(".config/solana/id.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signer_reads_keypair_file() {
        let keypair = Keypair::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id.json");
        let bytes: Vec<u8> = keypair.to_bytes().to_vec();
        std::fs::write(&path, serde_json::to_string(&bytes).unwrap()).unwrap();

        let ctx = Context {
            client: JournalClient::new(default_program_id()),
            url: String::new(),
            keypair_path: Some(path.to_string_lossy().into_owned()),
        };
        assert_eq!(ctx.signer().unwrap().pubkey(), keypair.pubkey());
    }

    #[test]
    fn owner_flag_overrides_signer() {
        let owner = Pubkey::new_unique();
        let ctx = Context {
            client: JournalClient::new(default_program_id()),
            url: String::new(),
            keypair_path: None,
        };
        assert_eq!(ctx.owner(Some(&owner.to_string())).unwrap(), owner);
    }
}
