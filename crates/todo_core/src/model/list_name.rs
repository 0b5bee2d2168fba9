//! List name normalization and identifier validation.
//!
//! # Responsibility
//! - Map user-typed list names to the table identifier used in storage.
//! - Reject names that cannot be used as a safe SQLite identifier.
//!
//! # Invariants
//! - Normalization replaces every space with `_` and nothing else, so
//!   lookups are case-sensitive but space/underscore-insensitive.
//! - A validated identifier only contains letters, digits and `_`.
//! - The SQLite-reserved `sqlite_` prefix is never accepted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}_]+$").expect("valid identifier regex"));

const RESERVED_PREFIX: &str = "sqlite_";

/// Validated, normalized list identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ListName(String);

/// Reasons a raw list name cannot become a [`ListName`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListNameError {
    /// Name is empty or whitespace only.
    Blank,
    /// Name contains characters outside the identifier allow-list.
    InvalidCharacters(String),
    /// Name collides with SQLite internal tables.
    Reserved(String),
}

impl Display for ListNameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "list name cannot be blank"),
            Self::InvalidCharacters(raw) => write!(
                f,
                "list name `{raw}` may only contain letters, digits, spaces and `_`"
            ),
            Self::Reserved(raw) => {
                write!(f, "list name `{raw}` uses the reserved `{RESERVED_PREFIX}` prefix")
            }
        }
    }
}

impl Error for ListNameError {}

/// Applies the whitespace-to-separator mapping without validating.
///
/// Used wherever a raw string is compared against stored identifiers.
pub fn normalize(raw: &str) -> String {
    raw.replace(' ', "_")
}

impl ListName {
    /// Normalizes and validates a user-typed list name.
    pub fn parse(raw: &str) -> Result<Self, ListNameError> {
        if raw.trim().is_empty() {
            return Err(ListNameError::Blank);
        }

        let normalized = normalize(raw);
        if !IDENTIFIER_RE.is_match(&normalized) {
            return Err(ListNameError::InvalidCharacters(raw.to_string()));
        }
        if normalized
            .get(..RESERVED_PREFIX.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(RESERVED_PREFIX))
        {
            return Err(ListNameError::Reserved(raw.to_string()));
        }

        Ok(Self(normalized))
    }

    /// Storage identifier (spaces already mapped to `_`).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-facing form with `_` rendered back as spaces.
    pub fn display(&self) -> String {
        self.0.replace('_', " ")
    }

    /// Identifier wrapped in double quotes for direct use in SQL text.
    ///
    /// Safe because the allow-list excludes `"`.
    pub(crate) fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl Display for ListName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize, ListName, ListNameError};

    #[test]
    fn parse_replaces_spaces_with_underscores() {
        let name = ListName::parse("Weekend chores").unwrap();
        assert_eq!(name.as_str(), "Weekend_chores");
        assert_eq!(name.display(), "Weekend chores");
        assert_eq!(name.quoted(), "\"Weekend_chores\"");
    }

    #[test]
    fn spaced_and_underscored_forms_are_the_same_list() {
        assert_eq!(
            ListName::parse("big list").unwrap(),
            ListName::parse("big_list").unwrap()
        );
        assert_ne!(
            ListName::parse("Groceries").unwrap(),
            ListName::parse("groceries").unwrap()
        );
    }

    #[test]
    fn parse_accepts_unicode_letters_and_digits() {
        assert!(ListName::parse("Einkäufe 2024").is_ok());
    }

    #[test]
    fn parse_rejects_blank_and_unsafe_names() {
        assert_eq!(ListName::parse("   ").unwrap_err(), ListNameError::Blank);
        assert!(matches!(
            ListName::parse("x\"; DROP TABLE y").unwrap_err(),
            ListNameError::InvalidCharacters(_)
        ));
        assert!(matches!(
            ListName::parse("SQLite_master").unwrap_err(),
            ListNameError::Reserved(_)
        ));
    }

    #[test]
    fn normalize_does_not_validate() {
        assert_eq!(normalize("a b.c"), "a_b.c");
    }
}
