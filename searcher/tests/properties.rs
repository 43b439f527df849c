use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use searcher::{
    astar, bidirectional, breadth_first, depth_first, greedy_best_first, iterative_deepening_astar,
    iterative_deepening_depth_first, uniform_cost, Graph, Path, SearchResult, Zero,
};

type G = Graph<usize, i64>;

/// Vertices `0..n`, each with the edges whose source it is.
fn build(n: usize, edges: &[(usize, usize, i64)]) -> G {
    (0..n)
        .map(|v| {
            let neighbors: Vec<(usize, i64)> = edges
                .iter()
                .filter(|(source, _, _)| *source == v)
                .map(|(_, destination, weight)| (*destination, *weight))
                .collect();
            (v, neighbors)
        })
        .collect()
}

fn graphs(max_vertices: usize, min_weight: i64, max_weight: i64) -> impl Strategy<Value = G> {
    (1..=max_vertices).prop_flat_map(move |n| {
        let edge = (0..n, 0..n, min_weight..=max_weight);
        proptest::collection::vec(edge, 0..=n * n).prop_map(move |edges| build(n, &edges))
    })
}

fn endpoints(graph: &G) -> impl Strategy<Value = (usize, usize)> {
    let n = graph.vertex_count();
    (0..n, 0..n)
}

fn graph_and_endpoints() -> impl Strategy<Value = (G, usize, usize)> {
    graphs(6, 0, 9).prop_flat_map(|graph| {
        let pair = endpoints(&graph);
        (Just(graph), pair).prop_map(|(graph, (start, goal))| (graph, start, goal))
    })
}

/// All-pairs shortest distances, treating every edge as `weight(w)`.
fn distances<F>(graph: &G, weight: F) -> Vec<Vec<Option<i64>>>
where
    F: Fn(i64) -> i64,
{
    let n = graph.vertex_count();
    let mut dist = vec![vec![None; n]; n];
    for (v, row) in dist.iter_mut().enumerate() {
        row[v] = Some(0);
    }
    for (v, u) in graph.edges() {
        if v != u {
            let w = weight(graph.edge_weight(v, u).unwrap());
            dist[*v][*u] = Some(dist[*v][*u].map_or(w, |d: i64| d.min(w)));
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    dist
}

fn check_path(
    graph: &G,
    start: usize,
    goal: usize,
    result: SearchResult<Path<usize, i64>>,
) -> Path<usize, i64> {
    let path = result.unwrap();
    assert_eq!(path.origin(), &start);
    assert_eq!(path.destination(), &goal);

    let summed = Path::along(graph, path.vertices().to_vec()).unwrap().cost();
    assert_eq!(summed, path.cost());
    path
}

proptest! {
    #[test]
    fn every_strategy_finds_reachable_goals((graph, start, goal) in graph_and_endpoints()) {
        let reachable = distances(&graph, |w| w)[start][goal].is_some();

        let results = vec![
            breadth_first(&graph, &start, &goal),
            depth_first(&graph, &start, &goal, None),
            uniform_cost(&graph, &start, &goal),
            greedy_best_first(&graph, &start, &goal, &Zero),
            astar(&graph, &start, &goal, &Zero, None),
            iterative_deepening_depth_first(&graph, &start, &goal),
            iterative_deepening_astar(&graph, &start, &goal, &Zero),
        ];

        for result in results {
            if reachable {
                check_path(&graph, start, goal, result);
            } else {
                prop_assert!(result.unwrap_err().is_exhausted());
            }
        }
    }

    #[test]
    fn cost_searches_are_optimal((graph, start, goal) in graph_and_endpoints()) {
        let best = distances(&graph, |w| w)[start][goal];
        prop_assume!(best.is_some());

        let path = check_path(&graph, start, goal, uniform_cost(&graph, &start, &goal));
        prop_assert_eq!(Some(path.cost()), best);

        let path = check_path(&graph, start, goal, astar(&graph, &start, &goal, &Zero, None));
        prop_assert_eq!(Some(path.cost()), best);

        let result = iterative_deepening_astar(&graph, &start, &goal, &Zero);
        let path = check_path(&graph, start, goal, result);
        prop_assert_eq!(Some(path.cost()), best);
    }

    #[test]
    fn breadth_first_is_fewest_edges((graph, start, goal) in graph_and_endpoints()) {
        let hops = distances(&graph, |_| 1)[start][goal];
        prop_assume!(hops.is_some());

        let path = check_path(&graph, start, goal, breadth_first(&graph, &start, &goal));
        prop_assert_eq!(Some(path.len() as i64), hops);
    }

    #[test]
    fn bidirectional_search((graph, start, goal) in graph_and_endpoints()) {
        let mut graph = graph;
        graph.transform_into_bidirectional();
        let reachable = distances(&graph, |w| w)[start][goal].is_some();

        let result = bidirectional(&graph, &start, &goal);
        if reachable {
            check_path(&graph, start, goal, result);
        } else {
            prop_assert!(result.unwrap_err().is_exhausted());
        }
    }

    #[test]
    fn bidirectional_iff_every_edge_reversed(graph in graphs(5, 1, 3)) {
        let expected = graph
            .edges()
            .iter()
            .all(|(v, u)| graph.edge_weight(u, v).is_ok());
        prop_assert_eq!(graph.is_bidirectional(), expected);
    }

    #[test]
    fn transform_is_idempotent(graph in graphs(5, 1, 3)) {
        let mut graph = graph;
        graph.transform_into_bidirectional();
        prop_assert!(graph.is_bidirectional());

        let edges = graph.edges().to_vec();
        let weigh = |graph: &G| -> Vec<i64> {
            edges.iter().map(|(v, u)| graph.edge_weight(v, u).unwrap()).collect()
        };
        let weights = weigh(&graph);

        graph.transform_into_bidirectional();
        prop_assert_eq!(graph.edges(), edges.as_slice());
        prop_assert_eq!(weigh(&graph), weights);
    }

    #[test]
    fn random_bidirectional_counts(
        (n, edges) in (1usize..6).prop_flat_map(|n| (Just(n), 0..=n * n)),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);

        let graph = G::random_generate_with(&mut rng, n, edges, 1, 9, true).unwrap();
        prop_assert!(graph.is_bidirectional());
        prop_assert_eq!(graph.edge_count(), edges);
        prop_assert_eq!(graph.vertex_count(), n);
    }

    #[test]
    fn random_rejects_too_many_edges(n in 1usize..6, extra in 1usize..4) {
        let result = G::random_generate(n, n * n + extra, 1, 1, false);
        prop_assert!(result.unwrap_err().is_invalid_construction());
    }

    #[test]
    fn removed_vertex_disappears((graph, victim, _) in graph_and_endpoints()) {
        let mut graph = graph;
        graph.remove_vertex(&victim).unwrap();

        prop_assert!(!graph.contains(&victim));
        for vertex in graph.vertices() {
            prop_assert!(graph.edges_of(vertex).unwrap().all(|n| *n != victim));
        }
        prop_assert!(graph.edges().iter().all(|(v, u)| *v != victim && *u != victim));
    }

    #[test]
    fn serialization_round_trip(graph in graphs(6, -5, 9)) {
        let text = serde_json::to_string(&graph).unwrap();
        let copy: G = serde_json::from_str(&text).unwrap();

        prop_assert_eq!(copy.edges(), graph.edges());
        prop_assert_eq!(copy.vertices().collect::<Vec<_>>(), graph.vertices().collect::<Vec<_>>());
        prop_assert_eq!(copy.is_bidirectional(), graph.is_bidirectional());
    }
}
