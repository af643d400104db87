//! Assertions over computed orders.

/// Position of `key` in `order`, if present.
pub fn index_of<K: PartialEq>(order: &[K], key: &K) -> Option<usize> {
    order.iter().position(|k| k == key)
}

/// True when `order` places `before` ahead of `after`, or when either key
/// is absent (a constraint endpoint missing from the output constrains
/// nothing there).
pub fn respects<K: PartialEq>(order: &[K], before: &K, after: &K) -> bool {
    match (index_of(order, before), index_of(order, after)) {
        (Some(b), Some(a)) => b < a,
        _ => true,
    }
}

/// True when `order` respects every edge `(v, w)`.
pub fn is_topological<K: PartialEq>(order: &[K], edges: &[(K, K)]) -> bool {
    edges.iter().all(|(v, w)| respects(order, v, w))
}

/// True when `left` and `right` hold the same elements with the same
/// multiplicities, regardless of order.
pub fn same_multiset<K: Ord + Clone>(left: &[K], right: &[K]) -> bool {
    let mut left = left.to_vec();
    let mut right = right.to_vec();
    left.sort();
    right.sort();
    left == right
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respects_tolerates_absent_keys() {
        let order = vec![1, 2, 3];
        assert!(respects(&order, &1, &3));
        assert!(!respects(&order, &3, &1));
        assert!(respects(&order, &9, &1));
        assert!(respects(&order, &1, &9));
    }

    #[test]
    fn test_same_multiset_ignores_order_not_counts() {
        assert!(same_multiset(&[1, 2, 2], &[2, 1, 2]));
        assert!(!same_multiset(&[1, 2], &[1, 2, 2]));
    }
}
