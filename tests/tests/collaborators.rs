//! The two collaborator surfaces: read-only snapshots for rendering and
//! direct table population for bulk import.

use vine_tests::prelude::*;

#[test]
fn test_snapshot_mirrors_tables_in_order() {
    let mut engine = engine_with_labels(&["one", "two"]);
    engine
        .add_edge("one", "two", attrs! { "rel" => "next", "weight" => 2i64 })
        .unwrap();

    let snap = engine.snapshot();

    assert_eq!(snap.nodes.len(), 2);
    assert_eq!(snap.nodes[0].id, 1);
    assert_eq!(snap.nodes[0].label, "one");
    assert_eq!(snap.nodes[1].label, "two");

    assert_eq!(snap.edges.len(), 1);
    assert_eq!((snap.edges[0].source, snap.edges[0].target), (1, 2));
}

#[test]
fn test_snapshot_is_json_serializable() {
    let mut engine = engine_with_labels(&["solo"]);
    engine.add_edge("solo", "solo", attrs!()).unwrap();

    let json = serde_json::to_value(engine.snapshot()).expect("snapshot serializes");
    assert_eq!(json["nodes"][0]["label"], "solo");
    assert_eq!(json["edges"][0]["source"], 1);
    assert_eq!(json["edges"][0]["target"], 1);
}

#[test]
fn test_bulk_import_then_normal_operation() {
    // GIVEN a graph populated directly, bypassing per-entity adds
    let mut graph = Graph::new();
    graph
        .import_node(NodeId::new(1), attrs! { "label" => "alpha" })
        .unwrap();
    graph
        .import_node(NodeId::new(7), attrs! { "label" => "beta" })
        .unwrap();
    graph
        .import_edge(EdgeId::new(3), NodeId::new(1), NodeId::new(7), attrs!())
        .unwrap();

    // WHEN an engine takes over
    let mut engine = GraphEngine::from_graph(graph);

    // THEN imported entities address normally
    engine.add_edge("beta", "alpha", attrs!()).unwrap();

    // AND fresh ids land past every injected one
    let fresh_node = engine.add_node(attrs!());
    assert_eq!(fresh_node, NodeId::new(8));
    let listing = engine.get_edges(EdgeShape::Pairs, Addressing::ById);
    assert_eq!(
        listing,
        EdgeListing::Pairs(vec!["1->7".into(), "7->1".into()])
    );
    assert_integrity(engine.graph());
}

#[test]
fn test_import_rejects_inconsistent_data() {
    let mut graph = Graph::new();
    graph.import_node(NodeId::new(2), attrs!()).unwrap();

    // Colliding id
    assert!(matches!(
        graph.import_node(NodeId::new(2), attrs!()),
        Err(GraphError::IdInUse(2))
    ));
    // Dangling endpoint
    assert!(matches!(
        graph.import_edge(EdgeId::new(1), NodeId::new(2), NodeId::new(9), attrs!()),
        Err(GraphError::UnknownId(9))
    ));
    assert_eq!(graph.edge_count(), 0);
}
