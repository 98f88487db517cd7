use super::*;
use crate::flow::DatasetRole;
use crate::layout::graph::{DatasetMeta, NodeKind};

fn sample_node() -> GraphNode {
    GraphNode {
        id: "raw".to_string(),
        label: "raw".to_string(),
        kind: NodeKind::Dataset(DatasetMeta {
            role: DatasetRole::Input,
        }),
    }
}

fn sample_position() -> NodePosition {
    NodePosition {
        x: 10.0,
        y: 20.0,
        width: 100.0,
        height: 50.0,
        layer: 0,
        node: sample_node(),
    }
}

#[test]
fn test_node_position_computed_properties() {
    let pos = sample_position();
    assert_eq!(pos.center_x(), 60.0);
    assert_eq!(pos.center_y(), 45.0);
    assert_eq!(pos.right(), 110.0);
    assert_eq!(pos.bottom(), 70.0);
}

#[test]
fn test_layout_edge_new() {
    let edge = LayoutEdge::new("a", "b");
    assert_eq!(edge.source, "a");
    assert_eq!(edge.target, "b");
    assert!(edge.label.is_none());
}

#[test]
fn test_result_accessors_match_fields() {
    let bounds = Bounds {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 110.0,
        max_y: 70.0,
    };
    let canvas = CanvasSize {
        width: 400.0,
        height: 200.0,
    };
    let result = LayoutResult {
        positions: HashMap::from([("raw".to_string(), sample_position())]),
        edges: vec![],
        bounds,
        canvas,
    };
    assert_eq!(result.bounds(), bounds);
    assert_eq!(result.canvas_size(), canvas);
}

#[test]
fn test_result_serializes_renderer_contract() {
    let result = LayoutResult {
        positions: HashMap::from([("raw".to_string(), sample_position())]),
        edges: vec![LayoutEdge::new("raw", "recipe_0")],
        bounds: Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 110.0,
            max_y: 70.0,
        },
        canvas: CanvasSize {
            width: 400.0,
            height: 200.0,
        },
    };
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["positions"]["raw"]["layer"], 0);
    assert_eq!(value["positions"]["raw"]["node"]["type"], "dataset");
    assert_eq!(value["positions"]["raw"]["node"]["role"], "input");
    assert_eq!(value["edges"][0]["source"], "raw");
    // Unlabeled edges stay compact on the wire.
    assert!(value["edges"][0].get("label").is_none());
    assert_eq!(value["canvas"]["width"], 400.0);
}
