//! Diagram name validation.
//!
//! Names double as storage keys and as download filenames, so characters
//! that are illegal in common filesystems are rejected up front.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Longest accepted name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Characters that may not appear in a diagram name.
pub const FORBIDDEN_NAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Why a diagram name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The name is empty or only whitespace.
    #[error("Diagram name cannot be empty")]
    Empty,
    /// The name is longer than [`MAX_NAME_LEN`].
    #[error("Diagram name is too long (max {max} characters)")]
    TooLong { len: usize, max: usize },
    /// The name contains one of [`FORBIDDEN_NAME_CHARS`].
    #[error("Diagram name contains invalid characters")]
    ForbiddenChar(char),
}

/// Check that `name` is usable as a diagram key.
///
/// # Errors
///
/// Returns the first rule the name breaks, checked in the order empty, too
/// long, forbidden character.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ValidationError::TooLong { len, max: MAX_NAME_LEN });
    }
    if let Some(ch) = name.chars().find(|c| FORBIDDEN_NAME_CHARS.contains(c)) {
        return Err(ValidationError::ForbiddenChar(ch));
    }
    Ok(())
}
