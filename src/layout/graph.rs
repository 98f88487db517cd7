//! FlowGraph — converts a flow into a petgraph DiGraph for layout.
//!
//! Every dataset becomes a node keyed by its name; every recipe becomes a
//! synthetic node keyed by its position in the flow (`recipe_<i>`), so
//! duplicate recipe names cannot collide. Edges whose dataset endpoint does
//! not exist are dropped: upstream flows may reference datasets that were
//! never materialized.

use std::collections::HashMap;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

use crate::flow::{Dataset, Flow, Recipe};

pub use crate::flow::DatasetRole;

// ─── Node metadata ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetMeta {
    pub role: DatasetRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeMeta {
    /// Recipe-type tag (e.g. "join").
    pub kind: String,
    /// Short human-readable summary for labels (e.g. "INNER", "3 steps").
    pub detail: String,
}

/// Kind-specific node payload. Two distinct structs behind a tag, so
/// renderers can consume either without sniffing a metadata map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    Dataset(DatasetMeta),
    Recipe(RecipeMeta),
}

impl NodeKind {
    pub fn is_dataset(&self) -> bool {
        matches!(self, NodeKind::Dataset(_))
    }

    pub fn is_recipe(&self) -> bool {
        matches!(self, NodeKind::Recipe(_))
    }
}

// ─── GraphNode / EdgeData ────────────────────────────────────────────────────

/// Node data stored in the petgraph DiGraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    /// Unique within one layout run.
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// Edge data stored in the petgraph DiGraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeData {
    pub label: Option<String>,
}

// ─── FlowGraph ───────────────────────────────────────────────────────────────

/// Graph intermediate representation extracted from a flow.
pub struct FlowGraph {
    pub digraph: DiGraph<GraphNode, EdgeData>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
}

impl FlowGraph {
    /// Build the node/edge graph from a flow description.
    pub fn from_flow(flow: &Flow) -> Self {
        let mut digraph: DiGraph<GraphNode, EdgeData> = DiGraph::new();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();

        for dataset in &flow.datasets {
            add_dataset_node(&mut digraph, &mut node_index, dataset);
        }

        for (i, recipe) in flow.recipes.iter().enumerate() {
            let recipe_id = format!("recipe_{i}");
            let node = GraphNode {
                id: recipe_id.clone(),
                label: recipe.name.clone(),
                kind: NodeKind::Recipe(RecipeMeta {
                    kind: recipe.kind.clone(),
                    detail: recipe_detail(recipe),
                }),
            };
            let idx = digraph.add_node(node);
            node_index.insert(recipe_id.clone(), idx);

            for input in &recipe.inputs {
                add_edge_if_known(&mut digraph, &node_index, input.name(), &recipe_id);
            }
            for output in &recipe.outputs {
                add_edge_if_known(&mut digraph, &node_index, &recipe_id, output.name());
            }
        }

        Self {
            digraph,
            node_index,
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Returns true if the graph has no cycles.
    pub fn is_dag(&self) -> bool {
        !is_cyclic_directed(&self.digraph)
    }

    pub fn get(&self, id: &str) -> Option<&GraphNode> {
        self.node_index.get(id).map(|&idx| &self.digraph[idx])
    }

    /// Node ids in insertion order: datasets first, then recipes.
    pub fn node_ids(&self) -> Vec<String> {
        self.digraph
            .node_indices()
            .map(|idx| self.digraph[idx].id.clone())
            .collect()
    }

    pub fn in_degree(&self, id: &str) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self
                .digraph
                .edges_directed(idx, petgraph::Direction::Incoming)
                .count(),
        }
    }

    pub fn out_degree(&self, id: &str) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self
                .digraph
                .edges_directed(idx, petgraph::Direction::Outgoing)
                .count(),
        }
    }

    /// Ids of nodes this node points to, one entry per edge.
    pub fn successors(&self, id: &str) -> Vec<String> {
        self.neighbors(id, petgraph::Direction::Outgoing)
    }

    /// Ids of nodes pointing to this node, one entry per edge.
    pub fn predecessors(&self, id: &str) -> Vec<String> {
        self.neighbors(id, petgraph::Direction::Incoming)
    }

    fn neighbors(&self, id: &str, dir: petgraph::Direction) -> Vec<String> {
        match self.node_index.get(id) {
            None => Vec::new(),
            Some(&idx) => self
                .digraph
                .neighbors_directed(idx, dir)
                .map(|n| self.digraph[n].id.clone())
                .collect(),
        }
    }
}

// ─── Private helpers ──────────────────────────────────────────────────────────

fn add_dataset_node(
    digraph: &mut DiGraph<GraphNode, EdgeData>,
    node_index: &mut HashMap<String, NodeIndex>,
    dataset: &Dataset,
) {
    if node_index.contains_key(&dataset.name) {
        return;
    }
    let node = GraphNode {
        id: dataset.name.clone(),
        label: dataset.name.clone(),
        kind: NodeKind::Dataset(DatasetMeta { role: dataset.role }),
    };
    let idx = digraph.add_node(node);
    node_index.insert(dataset.name.clone(), idx);
}

fn add_edge_if_known(
    digraph: &mut DiGraph<GraphNode, EdgeData>,
    node_index: &HashMap<String, NodeIndex>,
    source: &str,
    target: &str,
) {
    match (node_index.get(source), node_index.get(target)) {
        (Some(&src_idx), Some(&tgt_idx)) => {
            digraph.add_edge(src_idx, tgt_idx, EdgeData::default());
        }
        _ => {
            tracing::warn!(
                "dropping edge {} -> {}: endpoint references an unknown dataset",
                source,
                target
            );
        }
    }
}

/// Per-kind recipe summary shown under recipe labels. Metadata only;
/// geometry never depends on it.
fn recipe_detail(recipe: &Recipe) -> String {
    match recipe.kind.as_str() {
        "prepare" | "shaker" => format!("{} steps", recipe.steps.len()),
        "join" => recipe
            .join_type
            .as_deref()
            .unwrap_or("JOIN")
            .to_uppercase(),
        "grouping" | "group" => format!("{} aggs", recipe.aggregations.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
