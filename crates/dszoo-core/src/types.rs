//! Core types for dszoo-core.
//!
//! This module defines the [`Descriptor`] record shared by every layer: the
//! catalogue produces them, the search cache indexes them by borrowing, and the
//! front end renders them.

use serde::{Deserialize, Serialize};

/// A described data-structure entry.
///
/// Every field is optional except `id`, `name` and `description`. The name
/// must be non-empty; [`crate::catalog`] rejects loaded descriptors that
/// violate this, the search layer assumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    /// Stable identifier, e.g. `"linked-list"`.
    pub id: String,
    /// Display name in the catalogue's primary language.
    pub name: String,
    /// One-line description shown under the name.
    pub description: String,
    /// Translated name, shown in parentheses after `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    /// Other names the structure is known by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub also_known_as: Option<Vec<String>>,
    /// Extra search terms that are not names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_keywords: Option<Vec<String>>,
}

impl Descriptor {
    /// Create a descriptor with only the mandatory fields set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            alternate_name: None,
            also_known_as: None,
            search_keywords: None,
        }
    }

    pub fn with_alternate_name(mut self, alternate_name: impl Into<String>) -> Self {
        self.alternate_name = Some(alternate_name.into());
        self
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.also_known_as = Some(aliases.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_search_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Card heading: `"Arranjo (Array)"`, or just the name when there is no
    /// alternate name.
    pub fn display_name(&self) -> String {
        match &self.alternate_name {
            Some(alt) => format!("{} ({})", self.name, alt),
            None => self.name.clone(),
        }
    }
}

impl std::fmt::Display for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
