//! Layered layout pipeline for flow graphs.
//!
//! Phases:
//!   1. Layer assignment (Kahn-style topological sweep)
//!   2. Crossing reduction (barycenter, alternating sweeps)
//!   3. Coordinate assignment
//!   4. Bounds / canvas sizing
//!
//! Every phase is a fast heuristic: the engine always produces a drawable
//! layout, it never aims for crossing-minimum optimality.

use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::flow::Flow;

use super::graph::{FlowGraph, GraphNode, NodeKind};
use super::types::{Bounds, CanvasSize, LayoutEdge, LayoutResult, NodePosition};

// ─── Constants ───────────────────────────────────────────────────────────────

/// Total barycenter sweeps, forward and backward interleaved.
pub const CROSSING_PASSES: usize = 4;

/// Bounds reported for a layout with no nodes.
pub const EMPTY_BOUNDS: Bounds = Bounds {
    min_x: 0.0,
    min_y: 0.0,
    max_x: 100.0,
    max_y: 100.0,
};

// ─── Layer Assignment ────────────────────────────────────────────────────────

pub struct LayerAssignment {
    /// node id → layer index
    pub layers: HashMap<String, usize>,
    /// Layer index → node ids; within-layer order is discovery order and is
    /// only ever changed by crossing reduction.
    pub ordering: Vec<Vec<String>>,
}

impl LayerAssignment {
    /// Kahn-style sweep: peel zero-in-degree frontiers layer by layer.
    ///
    /// Nodes a cycle keeps from ever reaching in-degree zero are appended as
    /// one trailing layer, so a cyclic flow still lays out; edges inside the
    /// cyclic subset lose the strictly-forward guarantee.
    pub fn assign(graph: &FlowGraph) -> Self {
        let node_ids = graph.node_ids();
        let mut in_deg: HashMap<String, usize> = node_ids
            .iter()
            .map(|id| (id.clone(), graph.in_degree(id)))
            .collect();

        let mut layers: HashMap<String, usize> = HashMap::new();
        let mut ordering: Vec<Vec<String>> = Vec::new();

        let mut frontier: Vec<String> = node_ids
            .iter()
            .filter(|id| in_deg[*id] == 0)
            .cloned()
            .collect();

        while !frontier.is_empty() {
            let layer_idx = ordering.len();
            let mut next: Vec<String> = Vec::new();
            for id in &frontier {
                layers.insert(id.clone(), layer_idx);
            }
            for id in &frontier {
                for succ in graph.successors(id) {
                    if let Some(deg) = in_deg.get_mut(&succ) {
                        *deg -= 1;
                        if *deg == 0 {
                            next.push(succ);
                        }
                    }
                }
            }
            ordering.push(frontier);
            frontier = next;
        }

        let leftover: Vec<String> = node_ids
            .iter()
            .filter(|id| !layers.contains_key(*id))
            .cloned()
            .collect();
        if !leftover.is_empty() {
            tracing::warn!(
                "flow graph has a cycle: {} node(s) placed in a trailing layer",
                leftover.len()
            );
            let layer_idx = ordering.len();
            for id in &leftover {
                layers.insert(id.clone(), layer_idx);
            }
            ordering.push(leftover);
        }

        Self { layers, ordering }
    }

    pub fn layer_count(&self) -> usize {
        self.ordering.len()
    }
}

// ─── Crossing Reduction ──────────────────────────────────────────────────────

/// Mean index of the node's neighbors within the adjacent layer, or +infinity
/// when none are there, so unconnected nodes keep sorting to the end.
fn barycenter(
    graph: &FlowGraph,
    id: &str,
    adjacent_pos: &HashMap<String, f64>,
    incoming: bool,
) -> f64 {
    let neighbors = if incoming {
        graph.predecessors(id)
    } else {
        graph.successors(id)
    };
    let positions: Vec<f64> = neighbors
        .iter()
        .filter_map(|n| adjacent_pos.get(n).copied())
        .collect();
    if positions.is_empty() {
        f64::INFINITY
    } else {
        positions.iter().sum::<f64>() / positions.len() as f64
    }
}

fn index_map(layer: &[String]) -> HashMap<String, f64> {
    layer
        .iter()
        .enumerate()
        .map(|(i, id)| (id.clone(), i as f64))
        .collect()
}

fn sort_layer(
    graph: &FlowGraph,
    layer: &mut [String],
    adjacent_pos: &HashMap<String, f64>,
    incoming: bool,
) {
    layer.sort_by(|a, b| {
        let ba = barycenter(graph, a, adjacent_pos, incoming);
        let bb = barycenter(graph, b, adjacent_pos, incoming);
        ba.partial_cmp(&bb).unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Reorder each layer by the barycenter heuristic: `passes` alternating
/// sweeps starting forward. Sorts are stable, so ties keep their prior
/// relative order and the result is deterministic for a fixed input
/// ordering and pass count.
pub fn reduce_crossings(
    graph: &FlowGraph,
    mut ordering: Vec<Vec<String>>,
    passes: usize,
) -> Vec<Vec<String>> {
    let layer_count = ordering.len();
    if layer_count < 2 {
        return ordering;
    }

    for pass in 0..passes {
        if pass % 2 == 0 {
            // Forward: settle each layer against the one before it.
            for layer_idx in 1..layer_count {
                let prev = index_map(&ordering[layer_idx - 1]);
                sort_layer(graph, &mut ordering[layer_idx], &prev, true);
            }
        } else {
            // Backward: settle each layer against the one after it.
            for layer_idx in (0..layer_count - 1).rev() {
                let next = index_map(&ordering[layer_idx + 1]);
                sort_layer(graph, &mut ordering[layer_idx], &next, false);
            }
        }
    }

    ordering
}

// ─── Coordinate Assignment ───────────────────────────────────────────────────

fn node_size(node: &GraphNode, config: &LayoutConfig) -> (f64, f64) {
    match node.kind {
        NodeKind::Dataset(_) => (config.dataset_width, config.dataset_height),
        NodeKind::Recipe(_) => (config.recipe_size, config.recipe_size),
    }
}

/// Place every node: layers become vertical bands left to right, nodes stack
/// top to bottom within their band. No cross-layer centering.
pub fn assign_coordinates(
    graph: &FlowGraph,
    ordering: &[Vec<String>],
    config: &LayoutConfig,
) -> HashMap<String, NodePosition> {
    let mut positions: HashMap<String, NodePosition> = HashMap::new();

    for (layer_idx, layer) in ordering.iter().enumerate() {
        let x = config.padding + layer_idx as f64 * config.layer_spacing;
        let mut y = config.padding;
        for id in layer {
            let Some(node) = graph.get(id) else { continue };
            let (width, height) = node_size(node, config);
            positions.insert(
                id.clone(),
                NodePosition {
                    x,
                    y,
                    width,
                    height,
                    layer: layer_idx,
                    node: node.clone(),
                },
            );
            y += height + config.node_spacing;
        }
    }

    positions
}

// ─── Bounds & Canvas ─────────────────────────────────────────────────────────

/// Bounding box over all placed nodes; a fixed fallback box when empty.
pub fn compute_bounds(positions: &HashMap<String, NodePosition>) -> Bounds {
    let mut iter = positions.values();
    let Some(first) = iter.next() else {
        return EMPTY_BOUNDS;
    };
    let mut bounds = Bounds {
        min_x: first.x,
        min_y: first.y,
        max_x: first.right(),
        max_y: first.bottom(),
    };
    for pos in iter {
        bounds.min_x = bounds.min_x.min(pos.x);
        bounds.min_y = bounds.min_y.min(pos.y);
        bounds.max_x = bounds.max_x.max(pos.right());
        bounds.max_y = bounds.max_y.max(pos.bottom());
    }
    bounds
}

/// Padded canvas for the given bounds, floored to the configured minimums.
pub fn canvas_size(bounds: &Bounds, config: &LayoutConfig) -> CanvasSize {
    CanvasSize {
        width: (bounds.max_x - bounds.min_x + 2.0 * config.padding).max(config.min_canvas_width),
        height: (bounds.max_y - bounds.min_y + 2.0 * config.padding).max(config.min_canvas_height),
    }
}

// ─── LayoutEngine ────────────────────────────────────────────────────────────

/// Layered layout engine for pipeline flows.
///
/// Holds only its configuration; every `calculate_layout` call works on
/// fresh local state. Callers wanting concurrent layouts use one engine per
/// call.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Run the full pipeline: extraction → layers → ordering → coordinates →
    /// bounds. Never fails; malformed or cyclic flows degrade to a
    /// best-effort layout.
    pub fn calculate_layout(&self, flow: &Flow) -> LayoutResult {
        let graph = FlowGraph::from_flow(flow);
        self.layout_graph(&graph)
    }

    /// Lay out an already-extracted graph.
    pub fn layout_graph(&self, graph: &FlowGraph) -> LayoutResult {
        let assignment = LayerAssignment::assign(graph);
        let ordering = reduce_crossings(graph, assignment.ordering, CROSSING_PASSES);
        let positions = assign_coordinates(graph, &ordering, &self.config);
        let bounds = compute_bounds(&positions);
        let canvas = canvas_size(&bounds, &self.config);

        tracing::debug!(
            "layout complete: {} nodes, {} edges, {} layers",
            positions.len(),
            graph.edge_count(),
            ordering.len()
        );

        LayoutResult {
            positions,
            edges: edge_list(graph),
            bounds,
            canvas,
        }
    }
}

fn edge_list(graph: &FlowGraph) -> Vec<LayoutEdge> {
    graph
        .digraph
        .edge_indices()
        .filter_map(|eidx| {
            let (src, tgt) = graph.digraph.edge_endpoints(eidx)?;
            Some(LayoutEdge {
                source: graph.digraph[src].id.clone(),
                target: graph.digraph[tgt].id.clone(),
                label: graph.digraph[eidx].label.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_engine.rs"]
mod tests;
