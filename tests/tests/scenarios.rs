//! End-to-end scenarios: the same constraint set driven through every
//! facade, mirroring the demo program.

use toposort_containers::{TopoArray, TopoHashMap, TopoMap, TopoVec};
use toposort_core::SortError;
use toposort_graph::PrecedenceGraph;
use toposort_tests::{index_of, is_topological, same_multiset};

fn canonical_edges() -> Vec<(&'static str, &'static str)> {
    vec![
        ("F", "C"),
        ("F", "A"),
        ("E", "A"),
        ("E", "B"),
        ("C", "D"),
        ("D", "B"),
    ]
}

#[test]
fn bare_graph_linearizes_canonically() {
    let mut graph = PrecedenceGraph::new();
    for (v, w) in canonical_edges() {
        graph.precede(v, w);
    }

    let order = graph.linearize().unwrap();
    assert_eq!(order, vec!["F", "E", "A", "C", "D", "B"]);
    assert!(is_topological(&order, &canonical_edges()));
}

#[test]
fn map_sort_is_ordered_and_complete() {
    let mut map = TopoMap::new();
    for (v, w) in canonical_edges() {
        map.precede(v, w);
    }
    for (key, value) in [
        ("A", 0),
        ("B", 1),
        ("C", 2),
        ("D", 3),
        ("E", 4),
        ("F", 5),
        ("X", 100),
        ("Y", 101),
        ("Z", 102),
    ] {
        map.insert(key, value);
    }

    let sorted = map.sort().unwrap();
    assert_eq!(sorted.len(), 9);

    let keys: Vec<&str> = sorted.iter().map(|(k, _)| *k).collect();
    assert!(is_topological(&keys, &canonical_edges()));
    // The six constrained keys lead, X Y Z trail in natural order.
    assert_eq!(&keys[6..], &["X", "Y", "Z"]);
    // Values travel with their keys.
    for (key, value) in &sorted {
        assert_eq!(map.get(key), Some(value));
    }
}

#[test]
fn hash_map_sort_matches_btree_map_on_constrained_keys() {
    let entries = [("A", 0), ("B", 1), ("C", 2), ("D", 3), ("E", 4), ("F", 5)];

    let mut map = TopoMap::new();
    let mut hash_map = TopoHashMap::new();
    for (v, w) in canonical_edges() {
        map.precede(v, w);
        hash_map.precede(v, w);
    }
    for (key, value) in entries {
        map.insert(key, value);
        hash_map.insert(key, value);
    }

    // Every key is constrained, so the hash map's unspecified natural
    // order never comes into play.
    assert_eq!(map.sort().unwrap(), hash_map.sort().unwrap());
}

#[test]
fn vec_sort_preserves_multiset_with_dangling_key() {
    let mut vec = TopoVec::new();
    for (v, w) in canonical_edges() {
        vec.precede(v, w);
    }
    vec.precede("Z", "F");

    let items = [
        "A", "A", "A", "B", "B", "C", "C", "D", "D", "E", "E", "F", "F", "F",
    ];
    for item in items {
        vec.push(item);
    }

    let sorted = vec.sort().unwrap();
    assert_eq!(sorted.len(), 14);
    assert!(same_multiset(&sorted, &items));
    assert!(is_topological(&sorted, &canonical_edges()));

    // F's three copies sit together, ahead of C's two.
    assert_eq!(index_of(&sorted, &"F"), Some(0));
    assert_eq!(&sorted[0..3], &["F", "F", "F"]);
    assert!(index_of(&sorted, &"C").unwrap() > 2);
}

#[test]
fn array_sort_round_trips_through_fixed_capacity() {
    let mut array = TopoArray::new(["A", "B", "C", "D", "E", "F", "X", "Y", "Z"]);
    for (v, w) in canonical_edges() {
        array.precede(v, w);
    }

    let sorted = array.sort().unwrap();
    assert_eq!(sorted, ["F", "E", "A", "C", "D", "B", "X", "Y", "Z"]);
}

#[test]
fn cycles_surface_as_errors_everywhere() {
    let mut graph = PrecedenceGraph::new();
    graph.precede("A", "B");
    graph.precede("B", "A");
    assert_eq!(graph.linearize(), Err(SortError::CycleDetected));

    let mut vec = TopoVec::from(vec!["A", "B"]);
    vec.precede("A", "B");
    vec.precede("B", "A");
    assert_eq!(vec.sort(), Err(SortError::CycleDetected));

    let mut map: TopoMap<&str, ()> = TopoMap::new();
    map.insert("A", ());
    map.precede("A", "A");
    assert_eq!(map.sort(), Err(SortError::CycleDetected));
}
