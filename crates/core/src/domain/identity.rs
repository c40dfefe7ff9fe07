// Identity Key - how a returning person is recognized

use crate::domain::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The `(first_name, last_initial)` pair used to recognize a member.
///
/// Comparison is exact and case-sensitive: `"john"` and `"John"` are different people.
/// Two people sharing a first name and last initial collapse into one identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityKey {
    pub first_name: String,
    pub last_initial: Option<char>,
}

impl IdentityKey {
    pub fn new(first_name: impl Into<String>, last_initial: Option<char>) -> Self {
        Self {
            first_name: first_name.into(),
            last_initial,
        }
    }

    /// True when `parse_name` could have produced this key: a single non-empty first-name
    /// token and, if present, an initial that is already in its uppercase form.
    pub fn is_canonical(&self) -> bool {
        let first_name_ok =
            !self.first_name.is_empty() && !self.first_name.chars().any(char::is_whitespace);

        let initial_ok = match self.last_initial {
            None => true,
            Some(c) => !c.is_whitespace() && c.to_uppercase().next() == Some(c),
        };

        first_name_ok && initial_ok
    }

    /// Last initial as a zero-or-one character string
    pub fn last_initial_str(&self) -> String {
        self.last_initial.map(String::from).unwrap_or_default()
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last_initial {
            Some(initial) => write!(f, "{} {}.", self.first_name, initial),
            None => write!(f, "{}", self.first_name),
        }
    }
}

/// Derive an identity key from a raw full-name input.
///
/// - the first whitespace-separated token is the first name, kept as typed
/// - with two or more tokens, the last initial is the uppercased first character of the *last* token
/// - a single token has no last initial
///
/// Fails with [`DomainError::EmptyName`] when the input is empty or whitespace only.
pub fn parse_name(raw: &str) -> Result<IdentityKey> {
    let mut tokens = raw.split_whitespace();

    let first_name = tokens.next().ok_or(DomainError::EmptyName)?;

    let last_initial = tokens
        .last()
        .and_then(|last| last.chars().next())
        .and_then(|c| c.to_uppercase().next());

    Ok(IdentityKey::new(first_name, last_initial))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_and_last() {
        let key = parse_name("Alice Brown").unwrap();
        assert_eq!(key, IdentityKey::new("Alice", Some('B')));
    }

    #[test]
    fn test_parse_uses_last_token_for_initial() {
        let key = parse_name("Mary Ann Evans").unwrap();
        assert_eq!(key.first_name, "Mary");
        assert_eq!(key.last_initial, Some('E'));
    }

    #[test]
    fn test_parse_single_token() {
        let key = parse_name("Madonna").unwrap();
        assert_eq!(key, IdentityKey::new("Madonna", None));
        assert_eq!(key.last_initial_str(), "");
    }

    #[test]
    fn test_parse_uppercases_initial_only() {
        let key = parse_name("  john   doe ").unwrap();
        assert_eq!(key.first_name, "john");
        assert_eq!(key.last_initial, Some('D'));
    }

    #[test]
    fn test_parse_rejects_blank_input() {
        assert_eq!(parse_name(""), Err(DomainError::EmptyName));
        assert_eq!(parse_name(" \t\n "), Err(DomainError::EmptyName));
    }

    #[test]
    fn test_parsed_keys_are_canonical() {
        for raw in ["Alice Brown", "Madonna", "john doe", "Jean-Luc 3rd", "Anna ßmith"] {
            assert!(parse_name(raw).unwrap().is_canonical(), "{raw}");
        }
    }

    #[test]
    fn test_non_canonical_keys() {
        assert!(!IdentityKey::new("", None).is_canonical());
        assert!(!IdentityKey::new("Mary Ann", None).is_canonical());
        assert!(!IdentityKey::new("John", Some('d')).is_canonical());
        assert!(!IdentityKey::new("John", Some(' ')).is_canonical());
    }

    #[test]
    fn test_display() {
        assert_eq!(IdentityKey::new("John", Some('D')).to_string(), "John D.");
        assert_eq!(IdentityKey::new("Madonna", None).to_string(), "Madonna");
    }
}
