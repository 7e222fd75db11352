//! Persisted entry account codec.
//!
//! The layout is fixed by the on-chain program: an 8-byte account
//! discriminator reserved by the store, then the borsh-encoded fields
//! `{ owner, title, message }`. Accounts are allocated at a fixed size, so
//! decoded data may be followed by zero padding.

use borsh::{BorshDeserialize, BorshSerialize};
use sha2::{Digest, Sha256};
use solana_program::pubkey::Pubkey;

use journal_core::errors::{JournalError, JournalResult};
use journal_core::limits::{entry_space, ACCOUNT_PREFIX_LEN};

use crate::constants::ENTRY_ACCOUNT_NAME;

/// A journal entry as persisted by the program.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct JournalEntry {
    pub owner: Pubkey,
    pub title: String,
    pub message: String,
}

/// The 8-byte prefix the store writes in front of every entry account.
pub fn account_discriminator() -> [u8; ACCOUNT_PREFIX_LEN] {
    let hash = Sha256::digest(format!("account:{ENTRY_ACCOUNT_NAME}").as_bytes());
    let mut out = [0u8; ACCOUNT_PREFIX_LEN];
    out.copy_from_slice(&hash[..ACCOUNT_PREFIX_LEN]);
    out
}

impl JournalEntry {
    /// Decode raw account data fetched from the store.
    pub fn decode(data: &[u8]) -> JournalResult<Self> {
        if data.len() < ACCOUNT_PREFIX_LEN {
            return Err(JournalError::transport(format!(
                "entry account data too short: {} bytes",
                data.len()
            )));
        }
        let (prefix, mut rest) = data.split_at(ACCOUNT_PREFIX_LEN);
        if prefix != account_discriminator().as_slice() {
            return Err(JournalError::transport(format!(
                "unexpected account prefix {}",
                hex::encode(prefix)
            )));
        }
        JournalEntry::deserialize(&mut rest)
            .map_err(|e| JournalError::transport(format!("invalid entry account data: {e}")))
    }

    /// Encode to the persisted layout, padded to the fixed account size.
    pub fn encode(&self) -> JournalResult<Vec<u8>> {
        let mut out = Vec::with_capacity(entry_space());
        out.extend_from_slice(&account_discriminator());
        let fields = borsh::to_vec(self)
            .map_err(|e| JournalError::transport(format!("encode entry: {e}")))?;
        out.extend_from_slice(&fields);
        if out.len() > entry_space() {
            return Err(JournalError::transport(format!(
                "entry exceeds account space: {} > {}",
                out.len(),
                entry_space()
            )));
        }
        out.resize(entry_space(), 0);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn sample() -> JournalEntry {
        JournalEntry {
            owner: Pubkey::new_unique(),
            title: "My First Entry".to_string(),
            message: "hello".to_string(),
        }
    }

    #[test]
    fn codec_roundtrip_through_padded_layout() {
        let entry = sample();
        let data = entry.encode().unwrap();
        assert_eq!(data.len(), entry_space());
        assert_eq!(JournalEntry::decode(&data).unwrap(), entry);
    }

    #[test]
    fn owner_sits_right_after_prefix() {
        let entry = sample();
        let data = entry.encode().unwrap();
        assert_eq!(&data[8..40], entry.owner.as_ref());
    }

    #[test]
    fn wrong_prefix_rejected() {
        let mut data = sample().encode().unwrap();
        data[0] ^= 0xff;
        assert_matches!(JournalEntry::decode(&data), Err(JournalError::Transport(_)));
    }

    #[test]
    fn truncated_data_rejected() {
        let data = sample().encode().unwrap();
        assert_matches!(JournalEntry::decode(&data[..5]), Err(JournalError::Transport(_)));
        assert_matches!(JournalEntry::decode(&data[..20]), Err(JournalError::Transport(_)));
    }

    #[test]
    fn oversized_fields_do_not_fit_account_space() {
        let entry = JournalEntry {
            owner: Pubkey::new_unique(),
            title: "t".repeat(40),
            message: "m".repeat(1060),
        };
        assert_matches!(entry.encode(), Err(JournalError::Transport(_)));
    }
}
