//! Merge policies: reconcile a raw topological order with a container's
//! actual contents.
//!
//! Every policy walks the raw order first, emitting matched container
//! entries, then appends unmatched entries in the container's natural
//! order. Keys named only in constraints (dangling references) match
//! nothing and are silently skipped; keys absent from the constraint
//! graph land after all constrained keys. Each call borrows its inputs
//! and returns a freshly owned result.

use std::collections::{BTreeMap, BTreeSet};

use toposort_core::{Key, SortError, SortResult};

/// Merge a raw order with a keyed snapshot.
///
/// `entries` is the container's contents in its natural iteration order,
/// one entry per key. The result holds every entry exactly once:
/// constraint-ordered entries first (in `order` order), the rest appended
/// in natural order.
pub fn merge_keyed<K: Key, V: Clone>(order: &[K], entries: &[(K, V)]) -> Vec<(K, V)> {
    let index: BTreeMap<&K, &V> = entries.iter().map(|(k, v)| (k, v)).collect();
    let mut copied: BTreeSet<&K> = BTreeSet::new();
    let mut result = Vec::with_capacity(entries.len());

    for key in order {
        if let Some(value) = index.get(key) {
            if copied.insert(key) {
                result.push((key.clone(), (*value).clone()));
            }
        }
    }

    for (key, value) in entries {
        if copied.insert(key) {
            result.push((key.clone(), value.clone()));
        }
    }

    result
}

/// Merge a raw order with a duplicate-laden sequence snapshot.
///
/// If a key occurs `n` times in `items`, all `n` copies are emitted
/// together at the key's first qualifying position; a key occurring zero
/// times contributes nothing even though it still orders other keys.
/// The result has exactly the length and multiset of `items`.
pub fn merge_counted<'a, K: Key>(order: &'a [K], items: &'a [K]) -> Vec<K> {
    let counts = occurrence_counts(items);
    let mut copied: BTreeSet<&K> = BTreeSet::new();
    let mut result = Vec::with_capacity(items.len());

    for key in order {
        if copied.insert(key) {
            emit(key, &counts, &mut result);
        }
    }

    for key in items {
        if copied.insert(key) {
            emit(key, &counts, &mut result);
        }
    }

    result
}

/// Merge a raw order with a fixed-capacity sequence snapshot.
///
/// Identical emission algorithm to [`merge_counted`], with positional
/// accounting against `capacity`: emitting past it is reported as
/// [`SortError::CapacityExceeded`] instead of written out of bounds.
pub fn merge_bounded<'a, K: Key>(
    order: &'a [K],
    items: &'a [K],
    capacity: usize,
) -> SortResult<Vec<K>> {
    let counts = occurrence_counts(items);
    let mut copied: BTreeSet<&K> = BTreeSet::new();
    let mut result = Vec::with_capacity(capacity);

    for key in order {
        if copied.insert(key) {
            emit_bounded(key, &counts, &mut result, capacity)?;
        }
    }

    for key in items {
        if copied.insert(key) {
            emit_bounded(key, &counts, &mut result, capacity)?;
        }
    }

    Ok(result)
}

/// Occurrences of each distinct key in `items`.
fn occurrence_counts<K: Key>(items: &[K]) -> BTreeMap<&K, usize> {
    let mut counts: BTreeMap<&K, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Emit every occurrence of `key` together.
fn emit<K: Key>(key: &K, counts: &BTreeMap<&K, usize>, result: &mut Vec<K>) {
    let n = counts.get(key).copied().unwrap_or(0);
    for _ in 0..n {
        result.push(key.clone());
    }
}

/// Emit every occurrence of `key`, failing rather than passing `capacity`.
fn emit_bounded<K: Key>(
    key: &K,
    counts: &BTreeMap<&K, usize>,
    result: &mut Vec<K>,
    capacity: usize,
) -> SortResult<()> {
    let n = counts.get(key).copied().unwrap_or(0);
    if result.len() + n > capacity {
        return Err(SortError::CapacityExceeded { capacity });
    }
    for _ in 0..n {
        result.push(key.clone());
    }
    Ok(())
}
