//! journal-solana-client
//!
//! A small, focused Rust client for the on-chain journal program.
//!
//! It includes:
//! - deterministic entry address derivation from (title, owner)
//! - the persisted account codec and instruction wire format
//! - an async client that validates, submits, and confirms
//!   create/update/delete requests and runs owner-filtered queries
//!
//! Note: The on-chain program id is expected to be provided by the consumer.
//! The default here is the devnet deployment used during development.

pub mod constants;
pub mod journal_client;
pub mod pda;
pub mod state;

mod cache;

pub use constants::*;
pub use journal_client::*;
pub use pda::*;
pub use state::*;
