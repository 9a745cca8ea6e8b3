//! Domain-specific assertion macros for dszoo harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! query and the offending descriptor ids.

use dszoo_core::{Descriptor, SearchCache};

/// Assert that a query returns exactly the given ids, ignoring order.
///
/// ```rust
/// assert_query_ids!(cache, "lista", ["array", "linked-list"]);
/// ```
#[macro_export]
macro_rules! assert_query_ids {
    ($cache:expr, $query:expr, [$($id:expr),* $(,)?]) => {{
        let query: &str = $query;
        let actual = $crate::common::id_set(&$cache.query(query));
        let expected: std::collections::BTreeSet<String> =
            [$($id.to_string()),*].into_iter().collect();
        pretty_assertions::assert_eq!(actual, expected, "query {:?}", query);
    }};
}

/// Assert that a result list contains no descriptor twice (by position).
pub fn assert_no_duplicates(results: &[&Descriptor]) {
    for (i, a) in results.iter().enumerate() {
        for b in &results[i + 1..] {
            assert!(
                !std::ptr::eq(*a, *b),
                "descriptor {:?} returned more than once",
                a.id
            );
        }
    }
}

/// Assert the two views of a cache agree: every flat keyword resolves to a
/// non-empty set without duplicates, and keywords are distinct.
pub fn assert_cache_consistent(cache: &SearchCache<'_>) {
    let keys: Vec<&str> = cache.keywords().collect();
    let distinct: std::collections::HashSet<&str> = keys.iter().copied().collect();
    assert_eq!(keys.len(), distinct.len(), "flat keyword list has repeats");
    assert_eq!(keys.len(), cache.len());

    for key in keys {
        let set = cache.descriptors_for(key);
        assert!(!set.is_empty(), "keyword {key:?} has an empty descriptor set");
        assert_no_duplicates(&set);
    }
}
