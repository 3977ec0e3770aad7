//! Bulk attribute assignment and attribute projection.

use vine_tests::prelude::*;

#[test]
fn test_broadcast_then_project() {
    // GIVEN three labeled nodes
    let mut engine = engine_with_labels(&["one", "two", "three"]);

    // WHEN a uniform type is broadcast to all of them
    let updated = engine
        .set_attribute(
            EntityKind::Node,
            "type",
            Values::Uniform(Value::String("number".into())),
            Select::All,
        )
        .unwrap();

    // THEN the projection lists every node, keyed by bare id, in order
    assert_eq!(updated, 3);
    assert_eq!(
        engine.get_attribute(EntityKind::Node, "type"),
        vec![
            ("1".to_string(), Value::String("number".into())),
            ("2".to_string(), Value::String("number".into())),
            ("3".to_string(), Value::String("number".into())),
        ]
    );
}

#[test]
fn test_positional_values_per_key() {
    let mut engine = engine_with_labels(&["one", "two", "three"]);

    engine
        .set_attribute(
            EntityKind::Node,
            "value",
            Values::PerTarget(vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
            Select::All,
        )
        .unwrap();

    assert_eq!(
        engine.get_attribute(EntityKind::Node, "value"),
        vec![
            ("1".to_string(), Value::Int(1)),
            ("2".to_string(), Value::Int(2)),
            ("3".to_string(), Value::Int(3)),
        ]
    );
}

#[test]
fn test_edge_attributes_keyed_by_endpoint_pair() {
    // GIVEN edges 1->2 and 2->3, only the first having a rel
    let mut engine = engine_with_labels(&["one", "two", "three"]);
    engine
        .add_edge("one", "two", attrs! { "rel" => "next" })
        .unwrap();
    engine.add_edge("two", "three", attrs!()).unwrap();

    // THEN the projection uses "src->dst" keys and omits the bare edge
    assert_eq!(
        engine.get_attribute(EntityKind::Edge, "rel"),
        vec![("1->2".to_string(), Value::String("next".into()))]
    );

    // WHEN the missing rel is filled in by key
    engine
        .set_attribute(
            EntityKind::Edge,
            "rel",
            Values::Uniform(Value::String("then".into())),
            Select::Keys(vec![2]),
        )
        .unwrap();

    assert_eq!(engine.get_attribute(EntityKind::Edge, "rel").len(), 2);
}

#[test]
fn test_length_mismatch_is_atomic() {
    let mut engine = engine_with_labels(&["one", "two"]);

    let err = engine
        .set_attribute(
            EntityKind::Node,
            "value",
            Values::PerTarget(vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
            Select::All,
        )
        .unwrap_err();

    assert!(matches!(
        err,
        GraphError::LengthMismatch {
            expected: 2,
            actual: 3
        }
    ));
    assert!(engine.get_attribute(EntityKind::Node, "value").is_empty());
}

#[test]
fn test_missing_attribute_projects_empty() {
    let engine = engine_with_labels(&["one"]);
    assert!(engine.get_attribute(EntityKind::Node, "never_set").is_empty());
    assert!(engine.get_attribute(EntityKind::Edge, "rel").is_empty());
}

#[test]
fn test_bulk_relabel_keeps_addressing_consistent() {
    // GIVEN three nodes with distinct labels
    let mut engine = engine_with_labels(&["a", "b", "c"]);

    // WHEN all labels are rewritten positionally
    engine
        .set_attribute(
            EntityKind::Node,
            "label",
            Values::PerTarget(vec![
                Value::String("x".into()),
                Value::String("y".into()),
                Value::String("z".into()),
            ]),
            Select::All,
        )
        .unwrap();

    // THEN old labels are gone and new ones address the same nodes
    assert!(matches!(
        engine.add_edge("a", "b", attrs!()),
        Err(GraphError::UnknownLabel(_))
    ));
    engine.add_edge("x", "y", attrs!()).unwrap();
    assert_eq!(
        engine.get_edges(EdgeShape::Pairs, Addressing::ById),
        EdgeListing::Pairs(vec!["1->2".into()])
    );
}
