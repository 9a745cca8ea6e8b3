//! Search layer — keyword index over a descriptor catalogue.
//!
//! [`SearchCache`] is built once from a slice of descriptors and is read-only
//! afterwards. A query scans the distinct keywords for substring matches and
//! unions the descriptor sets of every matching keyword.
//!
//! Descriptor identity is the position in the borrowed slice, so two entries
//! with equal fields are still distinct descriptors.

use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use serde::Deserialize;

use crate::normalizer::{fold_case, keywords_for};
use crate::Descriptor;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// `[search]` section of `config.toml`, and the matching knobs of a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SearchOptions {
    /// When `true` the query text is compared as typed against the lowercased
    /// keywords, so `"Lista"` finds nothing. When `false` the query is folded
    /// with [`fold_case`] first.
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
}

fn default_case_sensitive() -> bool { true }

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: default_case_sensitive(),
        }
    }
}

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

/// Positions into the borrowed descriptor slice.
type DescriptorSet = BTreeSet<usize>;

/// Inverted keyword index plus the flat list of its keys.
///
/// `keys` and `index` always hold the same keywords; every set is non-empty.
#[derive(Debug, Clone)]
pub struct SearchCache<'a> {
    descriptors: &'a [Descriptor],
    index: HashMap<String, DescriptorSet>,
    /// Distinct keywords in first-insertion order.
    keys: Vec<String>,
    options: SearchOptions,
}

impl<'a> SearchCache<'a> {
    /// Build a cache with the default (case-sensitive) options.
    pub fn build(descriptors: &'a [Descriptor]) -> Self {
        Self::with_options(descriptors, SearchOptions::default())
    }

    /// Build a cache over `descriptors`.
    ///
    /// Never fails. A descriptor whose name lowercases to `""` contributes an
    /// empty-string keyword, which only the empty query matches.
    pub fn with_options(descriptors: &'a [Descriptor], options: SearchOptions) -> Self {
        let mut index: HashMap<String, DescriptorSet> = HashMap::new();
        let mut keys = Vec::new();

        for (pos, descriptor) in descriptors.iter().enumerate() {
            for keyword in keywords_for(descriptor) {
                match index.entry(keyword) {
                    Entry::Occupied(mut slot) => {
                        slot.get_mut().insert(pos);
                    }
                    Entry::Vacant(slot) => {
                        keys.push(slot.key().clone());
                        slot.insert(DescriptorSet::from([pos]));
                    }
                }
            }
        }

        tracing::debug!(
            descriptors = descriptors.len(),
            keywords = keys.len(),
            case_sensitive = options.case_sensitive,
            "search cache built"
        );

        Self {
            descriptors,
            index,
            keys,
            options,
        }
    }

    /// Every descriptor with at least one keyword containing `text`.
    ///
    /// Results are deduplicated and returned in catalogue order. An empty
    /// `text` matches every keyword and therefore every descriptor.
    pub fn query(&self, text: &str) -> Vec<&'a Descriptor> {
        let needle: Cow<'_, str> = if self.options.case_sensitive {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(fold_case(text))
        };

        let mut hits = DescriptorSet::new();
        for set in self
            .keys
            .iter()
            .filter(|key| key.contains(needle.as_ref()))
            .filter_map(|key| self.index.get(key))
        {
            hits.extend(set);
        }

        tracing::trace!(query = %text, hits = hits.len(), "search: query resolved");
        self.resolve(&hits)
    }

    /// Descriptors indexed under exactly `keyword` (no substring matching).
    pub fn descriptors_for(&self, keyword: &str) -> Vec<&'a Descriptor> {
        self.index
            .get(keyword)
            .map(|set| self.resolve(set))
            .unwrap_or_default()
    }

    /// Distinct keywords in first-insertion order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of descriptors the cache was built from.
    pub fn descriptor_count(&self) -> usize {
        self.descriptors.len()
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    fn resolve(&self, set: &DescriptorSet) -> Vec<&'a Descriptor> {
        let descriptors = self.descriptors;
        set.iter().map(|&pos| &descriptors[pos]).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
