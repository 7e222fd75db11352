//! Error taxonomy for journal client operations.
//!
//! Remote responses are dynamic (error strings, numeric custom codes); this
//! module is the single place where they are mapped into a closed set of
//! error kinds. Nothing outside this taxonomy is exposed to callers.

use thiserror::Error;

use crate::limits::{MAX_MESSAGE_LEN, MAX_TITLE_LEN, MAX_TITLE_SEED_LEN};

pub type JournalResult<T> = Result<T, JournalError>;

/// Stable custom error codes surfaced by the journal program.
/// These are part of the program's interface; do not renumber.
pub mod program_code {
    pub const TITLE_TOO_LONG: u32 = 6000;
    pub const MESSAGE_TOO_LONG: u32 = 6001;
    pub const UNAUTHORIZED: u32 = 6002;
    /// Framework-level "account not initialized" code, observed when an
    /// update or delete targets an address with no record.
    pub const ACCOUNT_NOT_INITIALIZED: u32 = 3012;
}

/// Local input validation failures. Raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("title length {len} exceeds {max} bytes")]
    TitleTooLong { len: usize, max: usize },

    #[error("title length {len} exceeds the {max}-byte derivation seed bound")]
    TitleSeedTooLong { len: usize, max: usize },

    #[error("message length {len} exceeds {max} bytes")]
    MessageTooLong { len: usize, max: usize },

    #[error("invalid owner: {reason}")]
    InvalidOwner { reason: String },
}

impl ValidationError {
    pub fn title_too_long(len: usize) -> Self {
        Self::TitleTooLong { len, max: MAX_TITLE_LEN }
    }

    pub fn title_seed_too_long(len: usize) -> Self {
        Self::TitleSeedTooLong { len, max: MAX_TITLE_SEED_LEN }
    }

    pub fn message_too_long(len: usize) -> Self {
        Self::MessageTooLong { len, max: MAX_MESSAGE_LEN }
    }

    pub fn invalid_owner(reason: impl Into<String>) -> Self {
        Self::InvalidOwner { reason: reason.into() }
    }
}

/// Top-level error type for every client operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    /// Bad input, caught locally. No round trip was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record already exists at the derived address.
    #[error("a journal entry with this title already exists at {address}")]
    Conflict { address: String },

    /// The signer does not match the record's owner.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// No record exists at the address.
    #[error("journal entry not found at {address}")]
    NotFound { address: String },

    /// Network or remote failure. The remote message is preserved verbatim.
    #[error("transport: {0}")]
    Transport(String),
}

impl JournalError {
    pub fn conflict(address: impl ToString) -> Self {
        Self::Conflict { address: address.to_string() }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized { message: message.into() }
    }

    pub fn not_found(address: impl ToString) -> Self {
        Self::NotFound { address: address.to_string() }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Map a custom program error code into the taxonomy.
    ///
    /// `address` is the record address the failed operation targeted; it is
    /// carried into the not-found variant. Bound violations (6000/6001) are
    /// enforced locally before submission, so they are not mapped here; a
    /// remote occurrence falls through as `None` and must be surfaced as a
    /// transport error with the remote code and message preserved verbatim.
    pub fn from_program_code(code: u32, address: &str) -> Option<Self> {
        match code {
            program_code::UNAUTHORIZED => {
                Some(Self::unauthorized("signer does not match the entry owner"))
            }
            program_code::ACCOUNT_NOT_INITIALIZED => Some(Self::not_found(address)),
            _ => None,
        }
    }

    /// True for errors raised locally, before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
