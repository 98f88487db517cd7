//! Layout output types: NodePosition, LayoutEdge, Bounds, CanvasSize,
//! LayoutResult.

use std::collections::HashMap;

use serde::Serialize;

use super::graph::GraphNode;

// ─── NodePosition ────────────────────────────────────────────────────────────

/// A node with computed absolute position and dimensions. Immutable once
/// produced; renderers read it and must not write it back.
#[derive(Debug, Clone, Serialize)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub layer: usize,
    /// The originating graph node (id, label, kind metadata).
    pub node: GraphNode,
}

impl NodePosition {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

// ─── LayoutEdge ───────────────────────────────────────────────────────────────

/// A routable endpoint pair handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEdge {
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl LayoutEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: None,
        }
    }
}

// ─── Bounds / CanvasSize ──────────────────────────────────────────────────────

/// Bounding box over all placed nodes; maxima are right/bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

// ─── LayoutResult ─────────────────────────────────────────────────────────────

/// The full output of one layout run. Owned by the caller; the engine keeps
/// nothing once this is returned.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutResult {
    pub positions: HashMap<String, NodePosition>,
    pub edges: Vec<LayoutEdge>,
    pub bounds: Bounds,
    pub canvas: CanvasSize,
}

impl LayoutResult {
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
