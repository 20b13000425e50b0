use std::collections::HashSet;

use trailgraph::{edge_from, EdgeSet, Graph, GraphError, Payload};

fn keys<const N: usize>(items: [&'static str; N]) -> HashSet<&'static str> {
    items.into_iter().collect()
}

#[test]
fn chain_roots_leafs_isolated() {
    let graph: Graph<&str> =
        Graph::from_keys(["p", "q", "r"], [("p", "q"), ("q", "r")]).unwrap();

    assert_eq!(graph.roots(), keys(["p"]));
    assert_eq!(graph.leafs(), keys(["r"]));
    assert!(graph.isolated().is_empty());
}

#[test]
fn known_isolated_node_versus_unknown_node() {
    let graph: Graph<&str> = Graph::from_keys(["p"], Vec::new()).unwrap();

    assert!(graph.successors(&"p").unwrap().is_empty());
    assert!(graph.predecessors(&"p").unwrap().is_empty());
    assert!(graph.neighbors(&"p").unwrap().is_empty());
    assert!(matches!(
        graph.successors(&"x"),
        Err(GraphError::NotFound { .. })
    ));
    assert!(graph.predecessors(&"x").unwrap_err().is_not_found());
    assert!(graph.neighbors(&"x").unwrap_err().is_not_found());

    assert!(graph.outward(&"p").unwrap().is_empty());
    assert!(graph.inward(&"p").unwrap().is_empty());
    assert!(graph.incident(&"p").unwrap().is_empty());
    assert!(graph.outward(&"x").unwrap_err().is_not_found());
    assert!(graph.inward(&"x").unwrap_err().is_not_found());
    assert!(graph.incident(&"x").unwrap_err().is_not_found());
}

#[test]
fn edge_set_cannot_tell_isolated_from_unknown() {
    let mut edges: EdgeSet<&str, ()> = EdgeSet::new();
    edges.add(("p", "q"), Payload::Keep);
    edges.del_incident(&"p");

    // Once its last edge is gone, p is unknown to the edge set.
    assert!(edges.successors(&"p").unwrap_err().is_not_found());
    assert!(!edges.has_successors(&"p"));
    assert!(edges.successor_index().is_empty());
    assert!(edges.predecessor_index().is_empty());
}

#[test]
fn adding_an_edge_twice_matches_adding_it_once() {
    let mut once: Graph<&str, (), &str> = Graph::new();
    once.add_edge(("p", "q"), Payload::value("second"));

    let mut twice: Graph<&str, (), &str> = Graph::new();
    twice.add_edge(("p", "q"), Payload::value("first"));
    twice.add_edge(("p", "q"), Payload::value("second"));

    assert_eq!(twice.edge(&("p", "q")).unwrap(), Some(&"second"));
    assert_eq!(
        once.edge_set().successor_index(),
        twice.edge_set().successor_index()
    );
    assert_eq!(
        once.edge_set().predecessor_index(),
        twice.edge_set().predecessor_index()
    );
    assert_eq!(twice.edge_count(), 1);

    // Re-adding without a payload leaves the stored one alone.
    twice.add_edge(("p", "q"), Payload::Keep);
    assert_eq!(twice.edge(&("p", "q")).unwrap(), Some(&"second"));
}

#[test]
fn construction_validates_endpoints() {
    let nodes = [("sda", Some(1u64)), ("sda1", None)];
    let edges = [(("sda", "sda1"), Some("partition")), (("sda1", "md0"), None)];

    let err = Graph::from_elements(nodes, edges).unwrap_err();
    assert_eq!(
        err,
        GraphError::Inconsistent {
            edge: "(\"sda1\", \"md0\")".to_string(),
            endpoint: "\"md0\"".to_string(),
        }
    );

    let trusted = Graph::from_elements_unchecked(nodes, edges);
    assert_eq!(trusted.edge_count(), 2);
    assert_eq!(trusted.node(&"sda").unwrap(), Some(&1));
    assert_eq!(trusted.edge(&("sda", "sda1")).unwrap(), Some(&"partition"));
}

#[test]
fn construction_reports_the_first_bad_edge_in_input_order() {
    let edges = [("a", "m1"), ("b", "m2"), ("m3", "c"), ("d", "m4")];

    // Hash order must not leak into which endpoint is reported.
    for _ in 0..50 {
        let err = Graph::<&str>::from_keys(["a", "b", "c", "d"], edges).unwrap_err();
        assert_eq!(
            err,
            GraphError::Inconsistent {
                edge: "(\"a\", \"m1\")".to_string(),
                endpoint: "\"m1\"".to_string(),
            }
        );
    }

    let err = Graph::<&str>::from_keys(["a", "b", "c", "d"], edges[2..].iter().copied()).unwrap_err();
    assert_eq!(
        err,
        GraphError::Inconsistent {
            edge: "(\"m3\", \"c\")".to_string(),
            endpoint: "\"m3\"".to_string(),
        }
    );
}

#[test]
fn deleting_a_node_cascades_to_its_edges() {
    let mut graph: Graph<&str> = Graph::from_keys(
        ["p", "q", "r", "s"],
        [("p", "q"), ("q", "r"), ("s", "q"), ("p", "s")],
    )
    .unwrap();

    graph.del_node(&"q").unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_edge(&("p", "s")));
    assert_eq!(graph.successors(&"p").unwrap(), keys(["s"]));
    assert!(graph.predecessors(&"r").unwrap().is_empty());
    assert!(!graph.edge_set().predecessor_index().contains_key("q"));
    assert!(!graph.edge_set().successor_index().contains_key("q"));
}

#[test]
fn edges_from_untyped_sequences() {
    let raw: Vec<Vec<&str>> = vec![vec!["sda", "sda1"], vec!["sdb"]];
    let mut graph: Graph<&str> = Graph::new();

    let mut failures = Vec::new();
    for endpoints in raw {
        match edge_from(endpoints) {
            Ok(edge) => {
                graph.add_edge(edge, Payload::Keep);
            }
            Err(err) => failures.push(err),
        }
    }

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(failures, vec![GraphError::Shape { len: 1 }]);
}

#[test]
fn adjacent_is_a_passthrough() {
    let edge = ("p", "q");
    assert_eq!(Graph::<&str>::adjacent(&"q", &edge).unwrap(), &"p");
    assert!(Graph::<&str>::adjacent(&"r", &edge)
        .unwrap_err()
        .is_not_found());
}
