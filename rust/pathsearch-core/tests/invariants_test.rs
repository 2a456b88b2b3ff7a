use std::collections::HashSet;

use pathsearch_core::{
    path_cost, search, Graph, NodeId, SearchError, SearchMode, SearchOptions, SearchState, Step,
};
use rand::prelude::*;

fn random_graph(rng: &mut StdRng) -> Graph {
    let n = rng.gen_range(2..9);
    let mut g = Graph::new();
    let ids: Vec<NodeId> = (0..n).map(|i| g.add_node(format!("v{i}")).unwrap()).collect();
    for &a in &ids {
        for &b in &ids {
            if a != b && rng.gen_bool(0.35) {
                g.add_edge(a, b, rng.gen_range(0..10) as f64).unwrap();
            }
        }
    }
    g.mark_start(ids[0]).unwrap();
    for &id in &ids[1..] {
        if rng.gen_bool(0.3) {
            g.mark_goal(id).unwrap();
        }
    }
    if g.goals().is_empty() {
        g.mark_goal(ids[n - 1]).unwrap();
    }
    g
}

/// Bellman-Ford style relaxation; `reverse` measures distance *to* `sources`.
fn distances(g: &Graph, sources: &[NodeId], reverse: bool) -> Vec<f64> {
    let mut dist = vec![f64::INFINITY; g.len()];
    for s in sources {
        dist[s.index()] = 0.0;
    }
    for _ in 0..g.len() {
        for n in g.iter() {
            for (&m, &w) in &n.neighbors {
                let (from, to) = if reverse { (m, n.id) } else { (n.id, m) };
                if dist[from.index()] + w < dist[to.index()] {
                    dist[to.index()] = dist[from.index()] + w;
                }
            }
        }
    }
    dist
}

fn with_half_distance_heuristic(mut g: Graph) -> Graph {
    let to_goal = distances(&g, &g.goals(), true);
    for i in 0..g.len() {
        let h = if to_goal[i].is_finite() { to_goal[i] / 2.0 } else { 0.0 };
        g.set_heuristic(NodeId(i), h).unwrap();
    }
    g
}

#[test]
fn cost_matches_brute_force_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for round in 0..300 {
        let g = with_half_distance_heuristic(random_graph(&mut rng));
        let start = g.start().unwrap();
        let from_start = distances(&g, &[start], false);
        let best = g.goals().iter().map(|id| from_start[id.index()]).fold(f64::INFINITY, f64::min);

        for mode in [SearchMode::UniformCost, SearchMode::Heuristic] {
            let opts = SearchOptions { mode, ..SearchOptions::default() };
            let mut state = SearchState::from_graph(&g).unwrap();
            match state.solve(&opts) {
                Ok(goal) => {
                    let path = state.reconstruct_path(goal).unwrap();
                    assert_eq!(path.first(), Some(&start));
                    assert!(g.node(*path.last().unwrap()).is_goal);
                    let cost = path_cost(&g, &path).unwrap();
                    assert_eq!(cost, best, "round {round} mode {mode}");
                    assert_eq!(state.record(goal).unwrap().g, cost);
                }
                Err(SearchError::EmptyFrontier) => {
                    assert!(best.is_infinite(), "round {round} mode {mode}: reachable goal missed");
                }
                Err(e) => panic!("round {round}: unexpected {e}"),
            }
        }
    }
}

#[test]
fn frontier_and_visited_stay_disjoint_every_step() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let g = with_half_distance_heuristic(random_graph(&mut rng));
        for mode in [SearchMode::UniformCost, SearchMode::Heuristic] {
            let mut state = SearchState::from_graph(&g).unwrap();
            state.set_mode(mode).unwrap();
            loop {
                let mut seen = HashSet::new();
                for e in state.frontier().iter() {
                    assert!(!state.is_visited(e.node), "node in both frontier and visited");
                    assert!(seen.insert(e.node), "duplicate identity in frontier");
                }
                match state.step() {
                    Ok(Step::Expanded(_)) => continue,
                    Ok(Step::Goal(_)) | Err(SearchError::EmptyFrontier) => break,
                    Err(e) => panic!("unexpected {e}"),
                }
            }
            let popped: Vec<NodeId> = state.expansions().iter().map(|e| e.node).collect();
            let unique: HashSet<NodeId> = popped.iter().copied().collect();
            assert_eq!(unique.len(), popped.len(), "a node was finalized twice");
        }
    }
}

#[test]
fn uniform_cost_pops_in_non_decreasing_priority() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let g = random_graph(&mut rng);
        let mut state = SearchState::from_graph(&g).unwrap();
        let _ = state.solve(&SearchOptions::uniform_cost());
        let priorities: Vec<f64> = state.expansions().iter().map(|e| e.priority).collect();
        assert!(priorities.windows(2).all(|w| w[0] <= w[1]), "{priorities:?}");
    }
}

#[test]
fn unreachable_goal_is_empty_frontier() {
    let mut g = Graph::new();
    let s = g.add_node("S").unwrap();
    let a = g.add_node("A").unwrap();
    let e = g.add_node("E").unwrap();
    g.connect(s, a, 1.0).unwrap();
    // Only an outbound edge from the goal.
    g.add_edge(e, a, 1.0).unwrap();
    g.mark_start(s).unwrap();
    g.mark_goal(e).unwrap();

    let mut state = SearchState::from_graph(&g).unwrap();
    assert_eq!(state.solve(&SearchOptions::uniform_cost()), Err(SearchError::EmptyFrontier));
    assert_eq!(state.visited_len(), 2);
    assert!(state.frontier().is_empty());

    let report = search(&g, &SearchOptions::heuristic()).unwrap();
    assert!(!report.is_found());
    assert_eq!(report.reason.as_deref(), Some("empty-frontier"));
    assert_eq!(report.expanded, 2);
}

#[test]
fn search_without_start_is_an_error() {
    let mut g = Graph::new();
    g.add_node("lonely").unwrap();
    assert_eq!(search(&g, &SearchOptions::default()).unwrap_err(), SearchError::MissingStart);
}

#[test]
fn cycles_terminate() {
    let mut g = Graph::new();
    let a = g.add_node("a").unwrap();
    let b = g.add_node("b").unwrap();
    let c = g.add_node("c").unwrap();
    g.connect(a, b, 0.0).unwrap();
    g.connect(b, c, 0.0).unwrap();
    g.connect(c, a, 0.0).unwrap();
    g.mark_start(a).unwrap();
    let report = search(&g, &SearchOptions::uniform_cost()).unwrap();
    assert_eq!(report.reason.as_deref(), Some("empty-frontier"));
    assert_eq!(report.expanded, 3);
}
