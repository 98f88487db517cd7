//! Layout engine — graph extraction + layered layout pipeline.

pub mod engine;
pub mod graph;
pub mod types;

pub use engine::{CROSSING_PASSES, LayerAssignment, LayoutEngine};
pub use graph::{DatasetMeta, FlowGraph, GraphNode, NodeKind, RecipeMeta};
pub use types::{Bounds, CanvasSize, LayoutEdge, LayoutResult, NodePosition};
