//! toposort demo - walks each container facade through the same set of
//! precedence constraints and prints the resulting orders.

use std::process;

use toposort_containers::{TopoArray, TopoHashMap, TopoMap, TopoVec};
use toposort_core::SortResult;
use toposort_graph::PrecedenceGraph;

/// The shared constraint set: F before C, F before A, E before A,
/// E before B, C before D, D before B.
fn canonical_edges() -> [(&'static str, &'static str); 6] {
    [
        ("F", "C"),
        ("F", "A"),
        ("E", "A"),
        ("E", "B"),
        ("C", "D"),
        ("D", "B"),
    ]
}

fn bare_graph_example() -> SortResult<()> {
    let mut graph = PrecedenceGraph::new();
    for (v, w) in canonical_edges() {
        graph.precede(v, w);
    }

    // F E A C D B
    println!("linearize: {:?}", graph.linearize()?);
    Ok(())
}

fn map_example() -> SortResult<()> {
    let mut map = TopoMap::new();
    for (v, w) in canonical_edges() {
        map.precede(v, w);
    }

    for (key, value) in [("A", 0), ("B", 1), ("C", 2), ("D", 3), ("E", 4), ("F", 5)] {
        map.insert(key, value);
    }
    map.insert("X", 100);
    map.insert("Y", 101);
    map.insert("Z", 102);

    // [(F, 5), (E, 4), (A, 0), (C, 2), (D, 3), (B, 1), (X, 100), (Y, 101), (Z, 102)]
    println!("map sort: {:?}", map.sort()?);
    Ok(())
}

fn hash_map_example() -> SortResult<()> {
    let mut map = TopoHashMap::new();
    for (v, w) in canonical_edges() {
        map.precede(v, w);
    }
    map.precede("Z", "F");

    for (key, value) in [("A", 0), ("B", 1), ("C", 2), ("D", 3), ("E", 4), ("F", 5)] {
        map.insert(key, value);
    }
    map.insert("X", 100);
    map.insert("Y", 101);
    map.insert("Z", 102);

    // Starts with (Z, 102), (F, 5), ...; X and Y trail in hash order.
    println!("hash map sort: {:?}", map.sort()?);
    Ok(())
}

fn vec_example() -> SortResult<()> {
    let mut vec = TopoVec::new();
    for (v, w) in canonical_edges() {
        vec.precede(v, w);
    }

    for item in [
        "A", "A", "A", "B", "B", "C", "C", "D", "D", "E", "E", "F", "F", "F",
    ] {
        vec.push(item);
    }

    // Z is not in the container, so the constraint orders nothing extra.
    vec.precede("Z", "F");

    // [F, F, F, E, E, A, A, A, C, C, D, D, B, B]
    println!("vec sort: {:?}", vec.sort()?);

    // Now push Z and watch it take the lead.
    vec.push("Z");
    // [Z, F, F, F, E, E, A, A, A, C, C, D, D, B, B]
    println!("vec sort with Z: {:?}", vec.sort()?);

    let mut digits = TopoVec::from(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    digits.precede(9, 0);
    digits.precede(8, 1);
    digits.precede(7, 2);
    digits.precede(6, 3);
    digits.precede(5, 4);

    // [9, 0, 8, 1, 7, 2, 6, 3, 5, 4]
    println!("digits sort: {:?}", digits.sort()?);
    Ok(())
}

fn array_example() -> SortResult<()> {
    let mut array = TopoArray::new(["A", "B", "C", "D", "E", "F", "X", "Y", "Z"]);
    for (v, w) in canonical_edges() {
        array.precede(v, w);
    }

    // [F, E, A, C, D, B, X, Y, Z]
    println!("array sort: {:?}", array.sort()?);
    Ok(())
}

fn run() -> SortResult<()> {
    bare_graph_example()?;
    map_example()?;
    hash_map_example()?;
    vec_example()?;
    array_example()?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
