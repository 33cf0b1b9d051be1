//! Graph store tests: labels, edges, adjacency, removal and duplication.

use std::rc::Rc;

use graphkit::{Duplicate, EdgeFactory, Graph, GraphBuilder, GraphError, GraphResult};

fn cycle3() -> Graph<String> {
    GraphBuilder::directed()
        .node(0, "a".to_string())
        .node(1, "b".to_string())
        .node(2, "c".to_string())
        .edge(0, 1)
        .edge(1, 2)
        .edge(2, 0)
        .build()
        .unwrap()
}

// ==================== Nodes and Labels ====================

#[test]
fn test_add_and_find() {
    let mut graph: Graph<&str> = Graph::new(true, false);
    assert!(graph.is_empty());

    let a = graph.add("alpha").unwrap();
    let b = graph.add("beta").unwrap();
    assert_eq!((a, b), (0, 1));
    assert_eq!(graph.size(), 2);
    assert_eq!(graph.find(a), Some(&"alpha"));
    assert_eq!(graph.find(b), Some(&"beta"));
    assert_eq!(graph.find(7), None);
}

#[test]
fn test_add_at_rejects_taken_label() {
    let mut graph: Graph<u32> = Graph::new(true, false);
    assert!(graph.add_at(5, 50));
    assert!(!graph.add_at(5, 99));
    assert_eq!(graph.find(5), Some(&50));
    assert_eq!(graph.size(), 1);
}

#[test]
fn test_add_skips_explicit_labels() {
    let mut graph: Graph<u32> = Graph::new(true, false);
    assert!(graph.add_at(0, 0));
    assert!(graph.add_at(1, 1));
    assert_eq!(graph.add(2).unwrap(), 2);
    assert!(graph.add_at(3, 3));
    assert_eq!(graph.add(4).unwrap(), 4);
}

#[test]
fn test_removed_label_is_reused() {
    let mut graph: Graph<u32> = Graph::new(true, false);
    for i in 0..4 {
        graph.add(i).unwrap();
    }
    assert_eq!(graph.remove_at(1).unwrap(), 1);
    assert!(!graph.contains(1));

    let reused = graph.add(100).unwrap();
    assert_eq!(reused, 1);
    assert_eq!(graph.find(1), Some(&100));
    assert_eq!(graph.add(200).unwrap(), 4);
}

#[test]
fn test_find_mut_updates_payload() {
    let mut graph: Graph<String> = Graph::new(false, false);
    let label = graph.add("draft".to_string()).unwrap();
    graph.find_mut(label).unwrap().push_str("-final");
    assert_eq!(graph.find(label).map(String::as_str), Some("draft-final"));
}

// ==================== Edges ====================

#[test]
fn test_connect_unknown_label() {
    let mut graph: Graph<u32> = Graph::new(true, false);
    graph.add_at(0, 0);
    assert!(matches!(
        graph.connect(0, 9),
        Err(GraphError::UnknownLabel(9))
    ));
    assert!(matches!(
        graph.connect(9, 0),
        Err(GraphError::UnknownLabel(9))
    ));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_weight_required_on_weighted_graph() {
    let mut graph: Graph<u32> = Graph::new(true, true);
    graph.add_at(0, 0);
    graph.add_at(1, 1);
    assert!(matches!(
        graph.connect(0, 1),
        Err(GraphError::InvalidArgument(_))
    ));
    assert!(graph.connect_weighted(0, 1, 2.5).unwrap());
    assert_eq!(graph.edge_between(0, 1).unwrap().unwrap().weight().unwrap().value(), 2.5);
}

#[test]
fn test_weight_rejected_on_unweighted_graph() {
    let mut graph: Graph<u32> = Graph::new(true, false);
    graph.add_at(0, 0);
    graph.add_at(1, 1);
    assert!(matches!(
        graph.connect_weighted(0, 1, 1.0),
        Err(GraphError::InvalidArgument(_))
    ));
}

#[test]
fn test_connect_existing_edge_is_noop() {
    let mut graph: Graph<u32> = Graph::new(true, false);
    graph.add_at(0, 0);
    graph.add_at(1, 1);
    assert!(graph.connect(0, 1).unwrap());
    assert!(!graph.connect(0, 1).unwrap());
    assert_eq!(graph.edge_count(), 1);

    // Reverse direction is a distinct edge in a directed graph
    assert!(graph.connect(1, 0).unwrap());
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_undirected_adjacency_is_symmetric() {
    let mut graph: Graph<u32> = Graph::new(false, false);
    graph.add_at(0, 0);
    graph.add_at(1, 1);
    graph.connect(0, 1).unwrap();

    assert!(graph.is_vertex_adjacent(0, 1).unwrap());
    assert!(graph.is_vertex_adjacent(1, 0).unwrap());
    assert_eq!(graph.neighbors(0).unwrap(), vec![1]);
    assert_eq!(graph.neighbors(1).unwrap(), vec![0]);

    // The reverse connect finds the same edge
    assert!(!graph.connect(1, 0).unwrap());
    assert_eq!(graph.edge_count(), 1);

    let e01 = graph.edge_between(0, 1).unwrap().unwrap();
    let e10 = graph.edge_between(1, 0).unwrap().unwrap();
    assert_eq!(e01.id(), e10.id());
    assert!(!e01.is_directed());
}

#[test]
fn test_directed_adjacency_views() {
    let graph = cycle3();
    assert_eq!(graph.edge_factory(), EdgeFactory::Directed);

    let departing: Vec<_> = graph.edges_departing(0).unwrap();
    assert_eq!(departing.len(), 1);
    assert!(departing[0].leads(0, 1));

    let arriving = graph.edges_arriving(0).unwrap();
    assert_eq!(arriving.len(), 1);
    assert!(arriving[0].leads(2, 0));

    assert_eq!(graph.adjacent_edges(0).unwrap().len(), 2);
    assert!(graph.is_vertex_adjacent(1, 0).unwrap());
    assert!(!graph.is_vertex_adjacent(0, 0).unwrap());
    assert_eq!(graph.out_degree(1).unwrap(), 1);
    assert_eq!(graph.in_degree(1).unwrap(), 1);
}

#[test]
fn test_disconnect_returns_edge() {
    let mut graph = cycle3();
    let edge = graph.disconnect(0, 1).unwrap().unwrap();
    assert!(edge.leads(0, 1));
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.disconnect(0, 1).unwrap().is_none());
    assert!(!graph.is_vertex_adjacent(0, 1).unwrap());
    assert!(matches!(
        graph.disconnect(0, 42),
        Err(GraphError::UnknownLabel(42))
    ));
}

#[test]
fn test_remove_cleans_incident_edges() {
    let mut graph = cycle3();
    let payload = graph.remove_at(1).unwrap();
    assert_eq!(payload, "b");
    assert_eq!(graph.size(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.neighbors(0).unwrap(), Vec::<u32>::new());
    assert_eq!(graph.in_degree(2).unwrap(), 0);
    assert!(graph.is_vertex_adjacent(2, 0).unwrap());

    assert!(matches!(
        graph.remove_at(1),
        Err(GraphError::UnknownLabel(1))
    ));
    assert!(matches!(
        graph.is_vertex_adjacent(1, 0),
        Err(GraphError::UnknownLabel(1))
    ));
    assert!(matches!(
        graph.is_vertex_adjacent(2, 1),
        Err(GraphError::UnknownLabel(1))
    ));
}

#[test]
fn test_self_loop_removal() {
    let mut graph: Graph<u32> = Graph::new(false, false);
    graph.add_at(0, 0);
    graph.connect(0, 0).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.edges().next().unwrap().is_self_loop());

    graph.remove_at(0).unwrap();
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.is_empty());
}

#[test]
fn test_node_attributes() {
    let mut graph: Graph<u32> = Graph::new(true, false);
    graph.add_at(0, 0);
    assert_eq!(graph.set_attribute(0, "color", "red").unwrap(), None);
    assert_eq!(
        graph.set_attribute(0, "color", "blue").unwrap(),
        Some("red".to_string())
    );
    assert_eq!(graph.attribute(0, "color").unwrap(), Some("blue"));
    assert_eq!(
        graph.remove_attribute(0, "color").unwrap(),
        Some("blue".to_string())
    );
    assert_eq!(graph.attribute(0, "color").unwrap(), None);
    assert!(graph.set_attribute(3, "color", "red").is_err());
}

#[test]
fn test_edge_label() {
    let mut graph = cycle3();
    graph.set_edge_label(1, 0, Some("back".to_string())).unwrap();
    assert_eq!(graph.edge_between(0, 1).unwrap().unwrap().label(), Some("back"));
    assert!(matches!(
        graph.set_edge_label(0, 0, None),
        Err(GraphError::InvalidArgument(_))
    ));
}

// ==================== Builder ====================

#[test]
fn test_builder_duplicate_label() {
    let result: GraphResult<Graph<u32>> = GraphBuilder::undirected()
        .node(1, 10)
        .node(1, 11)
        .build();
    assert!(matches!(result, Err(GraphError::InvalidArgument(_))));
}

#[test]
fn test_builder_auto_nodes_after_explicit() {
    let graph: Graph<&str> = GraphBuilder::directed()
        .node(0, "zero")
        .auto_node("auto")
        .weighted()
        .weighted_edge(0, 1, 4.0)
        .build()
        .unwrap();
    assert!(graph.is_weighted());
    assert_eq!(graph.find(1), Some(&"auto"));
    assert_eq!(
        graph.edge_between(0, 1).unwrap().unwrap().weight().unwrap().value(),
        4.0
    );
}

// ==================== Duplication ====================

#[test]
fn test_duplicate_then_remove_on_copy() {
    let original = cycle3();
    let mut copy = original.duplicate().unwrap();

    assert_eq!(copy.size(), 3);
    assert_eq!(copy.edge_count(), 3);
    for u in 0..3 {
        for v in 0..3 {
            assert_eq!(
                copy.is_vertex_adjacent(u, v).unwrap(),
                original.is_vertex_adjacent(u, v).unwrap()
            );
        }
    }

    copy.remove_at(1).unwrap();
    assert_eq!(copy.labels().collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(copy.edge_count(), 1);
    assert!(copy.edge_between(2, 0).unwrap().unwrap().leads(2, 0));

    assert_eq!(original.size(), 3);
    assert_eq!(original.edge_count(), 3);
    assert!(original.is_vertex_adjacent(0, 1).unwrap());
}

#[test]
fn test_duplicate_preserves_flags_weights_and_attributes() {
    let mut graph: Graph<String, i32> = Graph::new(false, true);
    graph.add_at(0, "x".to_string());
    graph.add_at(1, "y".to_string());
    graph.connect_weighted(0, 1, 7i32).unwrap();
    graph.set_attribute(1, "role", "sink").unwrap();
    graph.set_edge_label(0, 1, Some("link".to_string())).unwrap();

    let copy = graph.duplicate().unwrap();
    assert!(!copy.is_directed());
    assert!(copy.is_weighted());
    let edge = copy.edge_between(1, 0).unwrap().unwrap();
    assert_eq!(edge.weight().unwrap().value(), 7);
    assert_eq!(edge.label(), Some("link"));
    assert_eq!(copy.attribute(1, "role").unwrap(), Some("sink"));
}

#[test]
fn test_duplicate_breaks_shared_payloads() {
    let shared = Rc::new(vec![1u8, 2, 3]);
    let mut graph: Graph<Rc<Vec<u8>>> = Graph::new(true, false);
    graph.add_at(0, Rc::clone(&shared));
    graph.add_at(1, Rc::clone(&shared));

    let copy = graph.duplicate().unwrap();
    let a = copy.find(0).unwrap();
    let b = copy.find(1).unwrap();
    assert_eq!(**a, vec![1, 2, 3]);
    assert!(!Rc::ptr_eq(a, &shared));
    assert!(!Rc::ptr_eq(a, b));
}

#[test]
fn test_duplicate_keeps_label_allocation() {
    let mut graph: Graph<u32> = Graph::new(true, false);
    for i in 0..3 {
        graph.add(i).unwrap();
    }
    graph.remove_at(0).unwrap();

    let mut copy = graph.duplicate().unwrap();
    assert_eq!(copy.add(9).unwrap(), 0);
    assert_eq!(copy.add(9).unwrap(), 3);
}

#[derive(Debug)]
struct Handle(u32);

impl Duplicate for Handle {
    fn duplicate(&self) -> GraphResult<Self> {
        Err(GraphError::CloneFailure(format!("handle {} is unique", self.0)))
    }
}

#[test]
fn test_duplicate_clone_failure() {
    let mut graph: Graph<Handle> = Graph::new(true, false);
    graph.add_at(0, Handle(0));
    graph.add_at(1, Handle(1));
    graph.connect(0, 1).unwrap();

    assert!(matches!(
        graph.duplicate(),
        Err(GraphError::CloneFailure(_))
    ));
    assert_eq!(graph.size(), 2);
}

#[test]
fn test_duplicate_long_chain() {
    const LEN: u32 = 200_000;
    let mut graph: Graph<u32> = Graph::new(true, false);
    for i in 0..LEN {
        graph.add_at(i, i);
    }
    for i in 1..LEN {
        graph.connect(i - 1, i).unwrap();
    }

    let copy = graph.duplicate().unwrap();
    assert_eq!(copy.size(), LEN as usize);
    assert_eq!(copy.edge_count(), (LEN - 1) as usize);
    assert!(copy.is_vertex_adjacent(LEN - 2, LEN - 1).unwrap());
    assert_eq!(copy.find(LEN - 1), Some(&(LEN - 1)));
}
