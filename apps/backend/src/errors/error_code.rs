//! Error codes for the Gameshelf backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Gameshelf backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// General validation error (malformed or missing request body)
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource not found
    /// Console not found
    ConsoleNotFound,
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Console name already taken
    ConsoleNameTaken,
    /// Game title already taken
    GameTitleTaken,
    /// Referenced console does not exist
    ConsoleMissing,
    /// General conflict error
    Conflict,

    // Infrastructure
    /// Database error
    DbError,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE string as it appears in HTTP responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::ConsoleNotFound => "CONSOLE_NOT_FOUND",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ConsoleNameTaken => "CONSOLE_NAME_TAKEN",
            ErrorCode::GameTitleTaken => "GAME_TITLE_TAKEN",
            ErrorCode::ConsoleMissing => "CONSOLE_MISSING",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::Internal => "INTERNAL",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::ErrorCode;

    const ALL: &[ErrorCode] = &[
        ErrorCode::ValidationError,
        ErrorCode::BadRequest,
        ErrorCode::ConsoleNotFound,
        ErrorCode::GameNotFound,
        ErrorCode::NotFound,
        ErrorCode::ConsoleNameTaken,
        ErrorCode::GameTitleTaken,
        ErrorCode::ConsoleMissing,
        ErrorCode::Conflict,
        ErrorCode::DbError,
        ErrorCode::Internal,
        ErrorCode::ConfigError,
    ];

    #[test]
    fn codes_are_unique_and_screaming_snake() {
        let mut seen = HashSet::new();
        for code in ALL {
            let s = code.as_str();
            assert!(seen.insert(s), "duplicate error code string: {s}");
            assert!(
                s.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "not SCREAMING_SNAKE_CASE: {s}"
            );
        }
    }
}
