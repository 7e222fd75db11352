//! Client for the on-chain journal program.
//!
//! This client can:
//! - derive entry addresses
//! - build instructions (create/update/delete entry)
//! - submit and confirm transactions via RPC
//! - fetch one entry or all entries of an owner
//!
//! Every operation follows the same shape: validate inputs locally, derive
//! the target address, submit the signed request, await confirmation, and
//! map any remote rejection into the closed error taxonomy. Successful
//! writes drop the owner's cached query results so subsequent reads are
//! consistent.

use borsh::BorshSerialize;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use solana_account_decoder::UiAccountEncoding;
use solana_client::client_error::ClientError;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::instruction::InstructionError;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::{Transaction, TransactionError};

use journal_core::errors::{JournalError, JournalResult};
use journal_core::limits::OWNER_FIELD_OFFSET;
use journal_core::validate;

use crate::cache::OwnerCache;
use crate::constants::{METHOD_CREATE_ENTRY, METHOD_DELETE_ENTRY, METHOD_UPDATE_ENTRY};
use crate::pda;
use crate::state::JournalEntry;

pub struct JournalClient {
    pub program_id: Pubkey,
    commitment: CommitmentConfig,
    rpc: Option<RpcClient>,
    cache: OwnerCache,
}

impl JournalClient {
    /// Offline client: derivation and instruction building only. Any
    /// operation that needs the store fails with a transport error.
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            commitment: CommitmentConfig::confirmed(),
            rpc: None,
            cache: OwnerCache::default(),
        }
    }

    pub fn with_rpc(program_id: Pubkey, rpc_url: &str) -> Self {
        Self::with_rpc_and_commitment(program_id, rpc_url, CommitmentConfig::confirmed())
    }

    pub fn with_rpc_and_commitment(
        program_id: Pubkey,
        rpc_url: &str,
        commitment: CommitmentConfig,
    ) -> Self {
        Self {
            program_id,
            commitment,
            rpc: Some(RpcClient::new_with_commitment(rpc_url.to_string(), commitment)),
            cache: OwnerCache::default(),
        }
    }

    pub fn derive_entry(&self, title: &str, owner: &Pubkey) -> JournalResult<(Pubkey, u8)> {
        pda::derive_entry(&self.program_id, title, owner)
    }

    fn rpc(&self) -> JournalResult<&RpcClient> {
        self.rpc
            .as_ref()
            .ok_or_else(|| JournalError::transport("rpc client not configured"))
    }

    // ---- instruction builders -------------------------------------------

    /// Build the create instruction. Callers using this directly bypass the
    /// operation-level pre-flight checks; the program still enforces bounds
    /// and uniqueness authoritatively.
    pub fn ix_create_entry(
        &self,
        owner: Pubkey,
        title: &str,
        message: &str,
    ) -> JournalResult<Instruction> {
        self.entry_instruction(
            owner,
            title,
            JournalIx::CreateEntry { title: title.to_string(), message: message.to_string() },
        )
    }

    pub fn ix_update_entry(
        &self,
        owner: Pubkey,
        title: &str,
        message: &str,
    ) -> JournalResult<Instruction> {
        self.entry_instruction(
            owner,
            title,
            JournalIx::UpdateEntry { title: title.to_string(), message: message.to_string() },
        )
    }

    pub fn ix_delete_entry(&self, owner: Pubkey, title: &str) -> JournalResult<Instruction> {
        self.entry_instruction(owner, title, JournalIx::DeleteEntry { title: title.to_string() })
    }

    fn entry_instruction(
        &self,
        owner: Pubkey,
        title: &str,
        ix: JournalIx,
    ) -> JournalResult<Instruction> {
        let (entry, _bump) = self.derive_entry(title, &owner)?;
        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![
                AccountMeta::new(entry, false),
                AccountMeta::new(owner, true),
                AccountMeta::new_readonly(solana_program::system_program::id(), false),
            ],
            data: ix.to_bytes()?,
        })
    }

    // ---- operations ------------------------------------------------------

    /// Create a new entry for the signing owner.
    ///
    /// Fails fast on bad input before any network call, and with a conflict
    /// error when an entry already exists at the derived address. The
    /// existence pre-check produces the clearer error; the store's own
    /// uniqueness check remains authoritative for concurrent creates, and a
    /// lost race maps to the same conflict error.
    pub async fn create_entry(
        &self,
        owner: &Keypair,
        title: &str,
        message: &str,
    ) -> JournalResult<Signature> {
        validate::validate_new_entry(title, message)?;
        let (address, _bump) = self.derive_entry(title, &owner.pubkey())?;
        let rpc = self.rpc()?;

        if account_exists(rpc, &address, self.commitment).await? {
            return Err(JournalError::conflict(address));
        }

        let ix = self.ix_create_entry(owner.pubkey(), title, message)?;
        debug!(%address, title, "submitting create");
        let signature = send(rpc, owner, ix)
            .await
            .map_err(|e| map_send_error(e, &address, WriteKind::Create))?;

        self.cache.invalidate(&owner.pubkey());
        Ok(signature)
    }

    /// Replace the message of an existing entry. Only the original owner's
    /// signature is accepted by the store.
    pub async fn update_entry(
        &self,
        owner: &Keypair,
        title: &str,
        message: &str,
    ) -> JournalResult<Signature> {
        validate::validate_message(message)?;
        let (address, _bump) = self.derive_entry(title, &owner.pubkey())?;
        let rpc = self.rpc()?;

        if !account_exists(rpc, &address, self.commitment).await? {
            return Err(JournalError::not_found(address));
        }

        let ix = self.ix_update_entry(owner.pubkey(), title, message)?;
        debug!(%address, title, "submitting update");
        let signature = send(rpc, owner, ix)
            .await
            .map_err(|e| map_send_error(e, &address, WriteKind::Mutate))?;

        self.cache.invalidate(&owner.pubkey());
        Ok(signature)
    }

    /// Delete an entry. The store closes the account and reclaims its space;
    /// subsequent fetches report not-found.
    pub async fn delete_entry(&self, owner: &Keypair, title: &str) -> JournalResult<Signature> {
        let (address, _bump) = self.derive_entry(title, &owner.pubkey())?;
        let rpc = self.rpc()?;

        if !account_exists(rpc, &address, self.commitment).await? {
            return Err(JournalError::not_found(address));
        }

        let ix = self.ix_delete_entry(owner.pubkey(), title)?;
        debug!(%address, title, "submitting delete");
        let signature = send(rpc, owner, ix)
            .await
            .map_err(|e| map_send_error(e, &address, WriteKind::Mutate))?;

        self.cache.invalidate(&owner.pubkey());
        Ok(signature)
    }

    // ---- queries ---------------------------------------------------------

    /// Fetch the entry stored at `address`.
    pub async fn fetch_entry(&self, address: &Pubkey) -> JournalResult<JournalEntry> {
        let rpc = self.rpc()?;
        let account = rpc
            .get_account_with_commitment(address, self.commitment)
            .await
            .map_err(|e| JournalError::transport(e.to_string()))?
            .value
            .ok_or_else(|| JournalError::not_found(address))?;
        JournalEntry::decode(&account.data)
    }

    /// Fetch the entry keyed by `(title, owner)`.
    pub async fn fetch_entry_by_title(
        &self,
        title: &str,
        owner: &Pubkey,
    ) -> JournalResult<JournalEntry> {
        let (address, _bump) = self.derive_entry(title, owner)?;
        self.fetch_entry(&address).await
    }

    /// Fetch all entries owned by `owner`, in store order (not guaranteed
    /// stable). Returns an empty vec when nothing matches. Served from the
    /// owner cache when warm; the cache is dropped on every write.
    pub async fn fetch_entries_by_owner(&self, owner: &Pubkey) -> JournalResult<Vec<JournalEntry>> {
        if let Some(entries) = self.cache.get(owner) {
            debug!(%owner, entries = entries.len(), "serving entries from cache");
            return Ok(entries);
        }
        let rpc = self.rpc()?;

        let config = RpcProgramAccountsConfig {
            filters: Some(vec![RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
                OWNER_FIELD_OFFSET,
                owner.as_ref(),
            ))]),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                commitment: Some(self.commitment),
                ..RpcAccountInfoConfig::default()
            },
            ..RpcProgramAccountsConfig::default()
        };
        let accounts = rpc
            .get_program_accounts_with_config(&self.program_id, config)
            .await
            .map_err(|e| JournalError::transport(e.to_string()))?;

        let mut entries = Vec::with_capacity(accounts.len());
        for (address, account) in accounts {
            match JournalEntry::decode(&account.data) {
                Ok(entry) => entries.push(entry),
                // Owner-filter matches on a foreign account shape are not
                // this owner's entries; skip them instead of failing the
                // whole query.
                Err(err) => warn!(%address, %err, "skipping undecodable program account"),
            }
        }

        self.cache.store(owner, entries.clone());
        Ok(entries)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteKind {
    Create,
    Mutate,
}

async fn account_exists(
    rpc: &RpcClient,
    address: &Pubkey,
    commitment: CommitmentConfig,
) -> JournalResult<bool> {
    let resp = rpc
        .get_account_with_commitment(address, commitment)
        .await
        .map_err(|e| JournalError::transport(e.to_string()))?;
    Ok(resp.value.is_some())
}

async fn send(rpc: &RpcClient, signer: &Keypair, ix: Instruction) -> Result<Signature, ClientError> {
    let blockhash = rpc.get_latest_blockhash().await?;
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&signer.pubkey()),
        &[signer],
        blockhash,
    );
    rpc.send_and_confirm_transaction(&tx).await
}

/// Map a failed submission into the error taxonomy.
///
/// Custom program codes are extracted from the transaction error (including
/// pre-flight simulation failures). A create that loses the uniqueness race
/// at the store fails inside the account-allocation CPI with custom code 0;
/// that is the store's conflict signal. Anything unrecognized is a transport
/// error with the remote message preserved verbatim.
fn map_send_error(err: ClientError, address: &Pubkey, kind: WriteKind) -> JournalError {
    if let Some(TransactionError::InstructionError(_, InstructionError::Custom(code))) =
        err.get_transaction_error()
    {
        if kind == WriteKind::Create && code == 0 {
            return JournalError::conflict(address);
        }
        if let Some(mapped) = JournalError::from_program_code(code, &address.to_string()) {
            return mapped;
        }
        return JournalError::transport(format!("program rejected request (code {code}): {err}"));
    }
    JournalError::transport(err.to_string())
}

/// Journal program instruction encoding: an 8-byte method discriminator
/// (`sha256("global:<method>")[..8]`) followed by the borsh-encoded
/// arguments, matching the program's interface.
#[derive(Debug, Clone)]
enum JournalIx {
    CreateEntry { title: String, message: String },
    UpdateEntry { title: String, message: String },
    DeleteEntry { title: String },
}

impl JournalIx {
    fn method(&self) -> &'static str {
        match self {
            JournalIx::CreateEntry { .. } => METHOD_CREATE_ENTRY,
            JournalIx::UpdateEntry { .. } => METHOD_UPDATE_ENTRY,
            JournalIx::DeleteEntry { .. } => METHOD_DELETE_ENTRY,
        }
    }

    fn to_bytes(&self) -> JournalResult<Vec<u8>> {
        let mut out = method_discriminator(self.method()).to_vec();
        let args = match self {
            JournalIx::CreateEntry { title, message }
            | JournalIx::UpdateEntry { title, message } => encode_args(&(title, message)),
            JournalIx::DeleteEntry { title } => encode_args(title),
        }?;
        out.extend_from_slice(&args);
        Ok(out)
    }
}

fn encode_args<T: BorshSerialize>(args: &T) -> JournalResult<Vec<u8>> {
    borsh::to_vec(args).map_err(|e| JournalError::transport(format!("encode instruction: {e}")))
}

pub fn method_discriminator(method: &str) -> [u8; 8] {
    let hash = Sha256::digest(format!("global:{method}").as_bytes());
    let mut out = [0u8; 8];
    out.copy_from_slice(&hash[..8]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use borsh::BorshDeserialize;
    use journal_core::errors::ValidationError;
    use solana_client::client_error::ClientErrorKind;

    fn offline_client() -> JournalClient {
        JournalClient::new(crate::constants::default_program_id())
    }

    #[tokio::test]
    async fn create_rejects_empty_title_before_any_rpc() {
        let client = offline_client();
        let owner = Keypair::new();
        // The offline client has no RPC at all, so a validation error here
        // proves no round trip was attempted.
        let err = client.create_entry(&owner, "", "x").await.unwrap_err();
        assert_matches!(
            err,
            JournalError::Validation(ValidationError::EmptyTitle)
        );
    }

    #[tokio::test]
    async fn create_rejects_oversized_title_before_any_rpc() {
        let client = offline_client();
        let owner = Keypair::new();
        let err = client
            .create_entry(&owner, &"x".repeat(51), "y")
            .await
            .unwrap_err();
        assert_matches!(
            err,
            JournalError::Validation(ValidationError::TitleTooLong { len: 51, max: 50 })
        );
    }

    #[tokio::test]
    async fn create_rejects_oversized_message_before_any_rpc() {
        let client = offline_client();
        let owner = Keypair::new();
        let err = client
            .create_entry(&owner, "t", &"x".repeat(1001))
            .await
            .unwrap_err();
        assert_matches!(
            err,
            JournalError::Validation(ValidationError::MessageTooLong { len: 1001, max: 1000 })
        );
    }

    #[tokio::test]
    async fn valid_create_without_rpc_is_a_transport_error() {
        let client = offline_client();
        let owner = Keypair::new();
        let err = client.create_entry(&owner, "t", "m").await.unwrap_err();
        assert_matches!(err, JournalError::Transport(_));
    }

    #[test]
    fn create_instruction_layout() {
        let client = offline_client();
        let owner = Pubkey::new_unique();
        let ix = client.ix_create_entry(owner, "My First Entry", "hello").unwrap();

        assert_eq!(ix.program_id, client.program_id);
        assert_eq!(&ix.data[..8], method_discriminator(METHOD_CREATE_ENTRY));
        let args = <(String, String)>::try_from_slice(&ix.data[8..]).unwrap();
        assert_eq!(args, ("My First Entry".to_string(), "hello".to_string()));

        let (entry, _bump) = client.derive_entry("My First Entry", &owner).unwrap();
        assert_eq!(ix.accounts[0].pubkey, entry);
        assert!(ix.accounts[0].is_writable && !ix.accounts[0].is_signer);
        assert_eq!(ix.accounts[1].pubkey, owner);
        assert!(ix.accounts[1].is_writable && ix.accounts[1].is_signer);
        assert_eq!(ix.accounts[2].pubkey, solana_program::system_program::id());
        assert!(!ix.accounts[2].is_writable && !ix.accounts[2].is_signer);
    }

    #[test]
    fn delete_instruction_carries_title_only() {
        let client = offline_client();
        let owner = Pubkey::new_unique();
        let ix = client.ix_delete_entry(owner, "t").unwrap();
        assert_eq!(&ix.data[..8], method_discriminator(METHOD_DELETE_ENTRY));
        let title = String::try_from_slice(&ix.data[8..]).unwrap();
        assert_eq!(title, "t");
    }

    #[test]
    fn method_discriminators_are_distinct() {
        let create = method_discriminator(METHOD_CREATE_ENTRY);
        let update = method_discriminator(METHOD_UPDATE_ENTRY);
        let delete = method_discriminator(METHOD_DELETE_ENTRY);
        assert_ne!(create, update);
        assert_ne!(update, delete);
        assert_ne!(create, delete);
    }

    fn custom_code_error(code: u32) -> ClientError {
        ClientError::from(ClientErrorKind::TransactionError(
            TransactionError::InstructionError(0, InstructionError::Custom(code)),
        ))
    }

    #[test]
    fn remote_unauthorized_maps_to_unauthorized() {
        let address = Pubkey::new_unique();
        let mapped = map_send_error(custom_code_error(6002), &address, WriteKind::Mutate);
        assert_matches!(mapped, JournalError::Unauthorized { .. });
    }

    #[test]
    fn remote_uninitialized_maps_to_not_found() {
        let address = Pubkey::new_unique();
        let mapped = map_send_error(custom_code_error(3012), &address, WriteKind::Mutate);
        assert_matches!(mapped, JournalError::NotFound { .. });
    }

    #[test]
    fn lost_create_race_maps_to_conflict() {
        let address = Pubkey::new_unique();
        let mapped = map_send_error(custom_code_error(0), &address, WriteKind::Create);
        assert_matches!(mapped, JournalError::Conflict { .. });
    }

    #[test]
    fn unknown_code_preserves_remote_message() {
        let address = Pubkey::new_unique();
        let mapped = map_send_error(custom_code_error(999), &address, WriteKind::Mutate);
        assert_matches!(mapped, JournalError::Transport(msg) if msg.contains("999"));
    }
}
