//! Bundled example graphs.
//!
//! Adjacency is directed and listed in expansion order, so a few edges only
//! exist one way (F -> H in the twelve-node graph, for instance).

use crate::graph::Graph;

/// Names accepted by [`by_name`].
pub const NAMES: &[&str] = &["twelve-node", "seven-node", "eight-node"];

pub fn by_name(name: &str) -> Option<Graph> {
    match name {
        "twelve-node" => Some(twelve_node()),
        "seven-node" => Some(seven_node()),
        "eight-node" => Some(eight_node()),
        _ => None,
    }
}

struct Table<'a> {
    nodes: &'a [(&'a str, Option<f64>)],
    edges: &'a [(&'a str, &'a [(&'a str, f64)])],
    start: &'a str,
    goal: &'a str,
}

// Sample tables are static and known-valid.
fn build(table: Table<'_>) -> Graph {
    let mut g = Graph::with_capacity(table.nodes.len());
    for &(label, h) in table.nodes {
        let id = g.add_node(label).expect("sample labels are unique");
        if let Some(h) = h {
            g.set_heuristic(id, h).expect("sample heuristics are non-negative");
        }
    }
    for &(from, edges) in table.edges {
        let from = g.require(from).expect("sample node exists");
        let edges: Vec<_> = edges
            .iter()
            .map(|&(to, w)| (g.require(to).expect("sample node exists"), w))
            .collect();
        g.set_neighbors(from, edges).expect("sample weights are non-negative");
    }
    let start = g.require(table.start).expect("sample start exists");
    let goal = g.require(table.goal).expect("sample goal exists");
    g.mark_start(start).expect("sample start exists");
    g.mark_goal(goal).expect("sample goal exists");
    g
}

/// Start `S`, goal `E`, no heuristics. Shortest path `S - B - H - G - E`, cost 7.
pub fn twelve_node() -> Graph {
    let nodes: Vec<(&str, Option<f64>)> =
        ["S", "A", "B", "C", "D", "F", "G", "H", "I", "J", "K", "L", "E"].iter().map(|&l| (l, None)).collect();
    build(Table {
        nodes: &nodes,
        edges: &[
            ("S", &[("A", 7.0), ("B", 2.0), ("C", 3.0)]),
            ("A", &[("S", 7.0), ("B", 3.0), ("D", 4.0)]),
            ("B", &[("S", 2.0), ("D", 4.0), ("H", 1.0)]),
            ("C", &[("S", 3.0), ("L", 2.0)]),
            ("F", &[("D", 5.0), ("H", 3.0)]),
            ("D", &[("A", 4.0), ("B", 4.0), ("F", 5.0)]),
            ("G", &[("H", 2.0), ("E", 2.0)]),
            ("H", &[("B", 1.0), ("G", 2.0)]),
            ("I", &[("L", 4.0), ("K", 4.0), ("J", 6.0)]),
            ("J", &[("L", 4.0), ("I", 6.0), ("K", 4.0)]),
            ("K", &[("I", 4.0), ("J", 4.0), ("E", 5.0)]),
            ("L", &[("C", 2.0), ("I", 4.0), ("J", 4.0)]),
            ("E", &[("G", 2.0), ("K", 5.0)]),
        ],
        start: "S",
        goal: "E",
    })
}

/// Start `n0`, goal `n6`, with heuristics. `n2` stays off the A* path `n0 - n3 - n4 - n6`.
pub fn seven_node() -> Graph {
    build(Table {
        nodes: &[
            ("n0", Some(9.0)),
            ("n1", Some(2.0)),
            ("n2", Some(2.0)),
            ("n3", Some(5.0)),
            ("n4", Some(3.0)),
            ("n5", Some(2.0)),
            ("n6", Some(0.0)),
        ],
        edges: &[
            ("n0", &[("n3", 2.0), ("n2", 4.0), ("n1", 3.0)]),
            ("n1", &[("n0", 3.0), ("n5", 7.0)]),
            ("n2", &[("n0", 4.0), ("n3", 1.0)]),
            ("n3", &[("n0", 2.0), ("n2", 1.0), ("n4", 1.0)]),
            ("n4", &[("n3", 1.0), ("n2", 2.0), ("n6", 4.0)]),
            ("n5", &[("n1", 7.0), ("n6", 4.0)]),
            ("n6", &[("n4", 4.0), ("n5", 4.0)]),
        ],
        start: "n0",
        goal: "n6",
    })
}

/// Start `n0`, goal `n7`, with heuristics. `n3` is only linked to `n7` through a
/// 12-weight edge and A* never finalizes it.
pub fn eight_node() -> Graph {
    build(Table {
        nodes: &[
            ("n0", Some(9.0)),
            ("n1", Some(8.0)),
            ("n2", Some(12.0)),
            ("n3", Some(15.0)),
            ("n4", Some(7.0)),
            ("n5", Some(5.0)),
            ("n6", Some(3.0)),
            ("n7", Some(0.0)),
        ],
        edges: &[
            ("n0", &[("n1", 1.0)]),
            ("n1", &[("n0", 1.0), ("n2", 2.0), ("n4", 6.0)]),
            ("n2", &[("n1", 2.0), ("n3", 3.0)]),
            ("n3", &[("n2", 3.0), ("n7", 12.0)]),
            ("n4", &[("n1", 6.0), ("n5", 2.0)]),
            ("n5", &[("n4", 2.0), ("n6", 3.0)]),
            ("n6", &[("n5", 3.0), ("n7", 1.0)]),
            ("n7", &[("n6", 1.0), ("n3", 12.0)]),
        ],
        start: "n0",
        goal: "n7",
    })
}
