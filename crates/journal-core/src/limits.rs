//! Record length bounds and account sizing.
//!
//! These values are fixed by the deployed journal program. Keep them stable;
//! they participate in validation, account sizing, and field offsets.

/// Maximum title length in bytes. The program rejects longer titles, and the
/// account layout reserves exactly this much space for the field.
pub const MAX_TITLE_LEN: usize = 50;

/// Maximum message length in bytes.
pub const MAX_MESSAGE_LEN: usize = 1000;

/// Hard per-seed bound of the platform's address derivation. A title longer
/// than this cannot be used as a derivation seed at all, independent of the
/// program's own title bound.
pub const MAX_TITLE_SEED_LEN: usize = 32;

/// Size of the account discriminator prefix reserved by the store.
pub const ACCOUNT_PREFIX_LEN: usize = 8;

/// Byte length of an owner identity (a 32-byte public key).
pub const OWNER_LEN: usize = 32;

/// Byte length of a string length prefix in the persisted layout.
const STRING_PREFIX_LEN: usize = 4;

/// Total on-chain space of a journal entry account:
/// prefix + owner + (len + title) + (len + message).
pub const fn entry_space() -> usize {
    ACCOUNT_PREFIX_LEN
        + OWNER_LEN
        + STRING_PREFIX_LEN
        + MAX_TITLE_LEN
        + STRING_PREFIX_LEN
        + MAX_MESSAGE_LEN
}

/// Offset of the owner field inside the account data, used by owner-equality
/// filters on program account queries.
pub const OWNER_FIELD_OFFSET: usize = ACCOUNT_PREFIX_LEN;
