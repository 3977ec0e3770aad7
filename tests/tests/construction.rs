//! Incremental construction scenarios.
//!
//! These walk the store through the interaction pattern it exists for:
//! one node or edge at a time, addressed by id or label, observed through
//! the read-only projections.

use vine_tests::prelude::*;

mod from_empty {
    use super::*;

    #[test]
    fn test_two_nodes_then_edge_then_cascade() {
        // GIVEN an empty engine
        let mut engine = GraphEngine::new();
        assert_eq!(engine.count_nodes(), 0);
        assert!(engine
            .get_edges(EdgeShape::Pairs, Addressing::ById)
            .is_empty());

        // WHEN two anonymous nodes are added
        let a = engine.add_node(attrs!());
        let b = engine.add_node(attrs!());

        // THEN they are nodes 1 and 2 with defaulted labels
        assert_eq!((a, b), (NodeId::new(1), NodeId::new(2)));
        assert_eq!(
            engine.get_attribute(EntityKind::Node, "label"),
            vec![
                ("1".to_string(), Value::String("1".into())),
                ("2".to_string(), Value::String("2".into())),
            ]
        );

        // WHEN a single edge 1->2 is added
        engine
            .add_edge(1u64, 2u64, attrs! { "rel" => "to_number" })
            .unwrap();
        assert_eq!(
            engine.get_edges(EdgeShape::Pairs, Addressing::ById),
            EdgeListing::Pairs(vec!["1->2".into()])
        );

        // WHEN node 1 is deleted
        let removed = engine.delete_node(1u64).unwrap();

        // THEN the edge went with it
        assert_eq!(removed.node, NodeId::new(1));
        assert_eq!(removed.edges_removed, 1);
        assert_eq!(engine.count_nodes(), 1);
        assert_eq!(engine.count_edges(), 0);
    }

    #[test]
    fn test_empty_projections_never_fail() {
        let engine = GraphEngine::new();

        for shape in [EdgeShape::Pairs, EdgeShape::Table, EdgeShape::Endpoints] {
            for addressing in [Addressing::ById, Addressing::ByLabel] {
                assert!(engine.get_edges(shape, addressing).is_empty());
            }
        }
        assert!(engine.get_attribute(EntityKind::Node, "label").is_empty());
        assert_eq!(engine.count_nodes(), 0);
        assert_eq!(engine.count_edges(), 0);
    }
}

mod linked_adds {
    use super::*;

    #[test]
    fn test_fan_in_from_three_existing_nodes() {
        // GIVEN a 3-node graph
        let mut engine = engine_with_labels(&["one", "two", "three"]);

        // WHEN a node labeled "six" is added with from=[1,2,3]
        let outcome = engine
            .add_node_linked(
                attrs! { "label" => "six" },
                &[1u64.into(), 2u64.into(), 3u64.into()],
                &[],
            )
            .unwrap();

        // THEN node 4 and exactly the edges 1->4, 2->4, 3->4 exist
        assert_eq!(outcome.node, NodeId::new(4));
        assert_eq!(
            engine.get_edges(EdgeShape::Pairs, Addressing::ById),
            EdgeListing::Pairs(vec!["1->4".into(), "2->4".into(), "3->4".into()])
        );
        assert_integrity(engine.graph());
    }

    #[test]
    fn test_from_and_to_both_directions() {
        let mut engine = engine_with_labels(&["left", "right"]);

        let outcome = engine
            .add_node_linked(
                attrs! { "label" => "mid" },
                &[Address::parse("left")],
                &[Address::parse("right")],
            )
            .unwrap();

        assert_eq!(outcome.edges.len(), 2);
        assert_eq!(
            engine.get_edges(EdgeShape::Pairs, Addressing::ByLabel),
            EdgeListing::Pairs(vec!["left->mid".into(), "mid->right".into()])
        );
    }

    #[test]
    fn test_rejected_add_leaves_no_trace() {
        let mut engine = engine_with_labels(&["only"]);

        // WHEN one of the link addresses cannot resolve
        let result = engine.add_node_linked(
            attrs! { "label" => "new" },
            &[Address::parse("only"), Address::parse("ghost")],
            &[],
        );

        // THEN nothing was created and the next id is still 2
        assert!(matches!(result, Err(GraphError::UnresolvedAddress { .. })));
        assert_eq!(engine.count_nodes(), 1);
        assert_eq!(engine.count_edges(), 0);
        assert_eq!(engine.add_node(attrs!()), NodeId::new(2));
    }
}

mod multigraph {
    use super::*;

    #[test]
    fn test_parallel_edges_listed_separately() {
        let mut engine = engine_with_labels(&["a", "b"]);
        engine.add_edge("a", "b", attrs! { "rel" => "first" }).unwrap();
        engine.add_edge("a", "b", attrs! { "rel" => "second" }).unwrap();

        assert_eq!(engine.count_edges(), 2);
        assert_eq!(
            engine.get_edges(EdgeShape::Pairs, Addressing::ByLabel),
            EdgeListing::Pairs(vec!["a->b".into(), "a->b".into()])
        );
    }

    #[test]
    fn test_self_loop() {
        let mut engine = engine_with_labels(&["ouroboros"]);
        engine.add_edge("ouroboros", "ouroboros", attrs!()).unwrap();

        assert_eq!(
            engine.get_edges(EdgeShape::Pairs, Addressing::ById),
            EdgeListing::Pairs(vec!["1->1".into()])
        );

        let removed = engine.delete_node(1u64).unwrap();
        assert_eq!(removed.edges_removed, 1);
        assert_eq!(engine.count_edges(), 0);
    }
}
