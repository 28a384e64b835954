//! Validated tag labels for address-book records.
//!
//! A [`Tag`] holds one or more alphanumeric words separated by whitespace,
//! trimmed at construction. Every reachable value satisfies that rule, so
//! collaborators can treat tags as trusted, freely shareable labels.

use std::{fmt::Display, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Constraint text shown to users when a candidate name is rejected.
pub const TAG_NAME_CONSTRAINTS: &str =
    "Tag names should be alphanumeric words separated by whitespace";

/// One or more ASCII-alphanumeric words separated by whitespace runs.
pub static TAG_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Za-z]+(?:\s+[0-9A-Za-z]+)*$").expect("Tag regex is invalid!")
});

/// A candidate tag name failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", TAG_NAME_CONSTRAINTS)]
pub struct InvalidTagName;

/// A validated label attached to address-book records.
///
/// Immutable once constructed. Equality, hashing, and serialization all
/// operate on the stored name exactly as written, so records may keep tags
/// in deduplicated sets and look them up by value.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, PartialEq, Eq)]
#[serde(try_from = "String")]
pub struct Tag(String);

impl Tag {
    /// Validates the given name and stores its trimmed form.
    pub fn new(raw: &str) -> Result<Self, InvalidTagName> {
        let trimmed = raw.trim();
        if !is_valid_name(trimmed) {
            return Err(InvalidTagName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The trimmed, validated name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Every word of the name, in order.
    ///
    /// Splits on whitespace runs, so the result never contains empty
    /// entries. Single-word tags yield themselves.
    pub fn words(&self) -> Vec<&str> {
        self.0.split_whitespace().collect()
    }
}

/// Returns true if the given string is a valid tag name.
///
/// Leading and trailing whitespace is ignored, matching what construction
/// would store. This predicate and [`Tag::new`] accept exactly the same
/// inputs, so callers can pre-check user input without a failure path.
pub fn is_valid_name(candidate: &str) -> bool {
    TAG_NAME_RE.is_match(candidate.trim())
}

impl TryFrom<&str> for Tag {
    type Error = InvalidTagName;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl TryFrom<String> for Tag {
    type Error = InvalidTagName;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl FromStr for Tag {
    type Err = InvalidTagName;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
