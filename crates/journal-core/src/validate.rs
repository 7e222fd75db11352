//! Local input validation.
//!
//! All bounds are checked here, before any derivation or network call. The
//! platform's own seed-length check is a hard failure, not a recoverable one,
//! so callers must never reach it with oversized input.

use crate::errors::ValidationError;
use crate::limits::{MAX_MESSAGE_LEN, MAX_TITLE_LEN, MAX_TITLE_SEED_LEN};

/// Validate a title for use as a record key.
///
/// Rejects empty titles and titles over the program bound. The tighter seed
/// bound is checked separately by [`validate_title_seed`], since derivation
/// is also performed for update/delete where the program bound is moot.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    let len = title.len();
    if len > MAX_TITLE_LEN {
        return Err(ValidationError::title_too_long(len));
    }
    Ok(())
}

/// Validate that a title fits the platform's per-seed derivation bound.
pub fn validate_title_seed(title: &str) -> Result<(), ValidationError> {
    let len = title.len();
    if len > MAX_TITLE_SEED_LEN {
        return Err(ValidationError::title_seed_too_long(len));
    }
    Ok(())
}

/// Validate a message payload.
pub fn validate_message(message: &str) -> Result<(), ValidationError> {
    let len = message.len();
    if len > MAX_MESSAGE_LEN {
        return Err(ValidationError::message_too_long(len));
    }
    Ok(())
}

/// Full validation for a create request: title bounds and message bound.
pub fn validate_new_entry(title: &str, message: &str) -> Result<(), ValidationError> {
    validate_title(title)?;
    validate_title_seed(title)?;
    validate_message(message)
}
