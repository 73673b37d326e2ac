//! Validated name newtypes for players and games
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for name fields (PlayerName, GameName)
const MAX_NAME_LENGTH: usize = 200;

fn validated_name(name: String, label: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!(
            "{} name cannot be empty",
            label
        )));
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "{} name cannot exceed {} characters",
            label, MAX_NAME_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// PlayerName
// ============================================================================

/// A validated player display name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a new validated player name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validated_name(name.into(), "Player").map(Self)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> String {
        name.0
    }
}

// ============================================================================
// GameName
// ============================================================================

/// A validated game name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GameName(String);

impl GameName {
    /// Create a new validated game name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` on empty or over-long names.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validated_name(name.into(), "Game").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for GameName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<GameName> for String {
    fn from(name: GameName) -> String {
        name.0
    }
}
