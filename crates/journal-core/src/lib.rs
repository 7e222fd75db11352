//! journal-core
//!
//! Core primitives for the journal dapp client:
//! - Record length bounds fixed by the on-chain program
//! - Local input validation (fail fast, before any network round trip)
//! - The closed error taxonomy shared by the Solana client and the CLI
//!
//! This crate is Solana-free on purpose. Everything here is a pure domain
//! rule; the wire and RPC concerns live in `journal-solana-client`.

pub mod errors;
pub mod limits;
pub mod validate;

pub use crate::errors::{JournalError, JournalResult, ValidationError};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::errors::{JournalError, JournalResult, ValidationError};
    pub use crate::limits::{entry_space, MAX_MESSAGE_LEN, MAX_TITLE_LEN, MAX_TITLE_SEED_LEN};
    pub use crate::validate::{validate_message, validate_new_entry, validate_title};
}
