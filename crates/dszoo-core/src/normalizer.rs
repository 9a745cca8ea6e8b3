//! Normalizer — derives the lowercase search keywords of a [`Descriptor`].
//!
//! Keywords come from, in order: the name, the alternate name, each alias, and
//! each explicit search keyword. Duplicates are kept; the search cache stores
//! descriptors in per-keyword sets, so repeated keywords collapse there.

use crate::Descriptor;

/// Case folding shared by index keys and case-insensitive queries.
///
/// Both sides must go through this function or matches stop being symmetric.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Every search keyword of `descriptor`, lowercased, in source-field order.
pub fn keywords_for(descriptor: &Descriptor) -> Vec<String> {
    let aliases = descriptor.also_known_as.as_deref().unwrap_or_default();
    let extra = descriptor.search_keywords.as_deref().unwrap_or_default();

    let mut keywords = Vec::with_capacity(2 + aliases.len() + extra.len());
    keywords.push(fold_case(&descriptor.name));
    keywords.extend(descriptor.alternate_name.as_deref().map(fold_case));
    keywords.extend(aliases.iter().map(|alias| fold_case(alias)));
    keywords.extend(extra.iter().map(|kw| fold_case(kw)));
    keywords
}
