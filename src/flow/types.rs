//! Flow input model.
//!
//! A flow is the upstream description of a data pipeline: named datasets
//! plus recipes that consume and produce them. These types match the JSON
//! wire shape handed over by the flow-building layer:
//! enums (DatasetRole) and structs (Flow, Dataset, Recipe, DatasetRef).

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─── DatasetRole ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetRole {
    Input,
    Output,
    #[default]
    Intermediate,
}

// ─── Dataset ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset name; unique within one flow.
    pub name: String,
    #[serde(default)]
    pub role: DatasetRole,
}

impl Dataset {
    pub fn new(name: impl Into<String>, role: DatasetRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

// ─── DatasetRef ──────────────────────────────────────────────────────────────

/// A recipe's reference to a dataset: either a bare name or an object
/// carrying a `ref` field. Both shapes appear in upstream flow JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatasetRef {
    Plain(String),
    Aliased {
        #[serde(rename = "ref")]
        target: String,
    },
}

impl DatasetRef {
    /// The referenced dataset name, whichever shape carried it.
    pub fn name(&self) -> &str {
        match self {
            DatasetRef::Plain(name) => name,
            DatasetRef::Aliased { target } => target,
        }
    }
}

impl From<&str> for DatasetRef {
    fn from(name: &str) -> Self {
        DatasetRef::Plain(name.to_string())
    }
}

// ─── Recipe ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Recipe-type tag (e.g. "prepare", "join", "grouping").
    #[serde(alias = "type")]
    pub kind: String,
    #[serde(default)]
    pub inputs: Vec<DatasetRef>,
    #[serde(default)]
    pub outputs: Vec<DatasetRef>,
    /// Step definitions of prepare recipes; only the count feeds labels.
    #[serde(default)]
    pub steps: Vec<Value>,
    #[serde(default)]
    pub join_type: Option<String>,
    /// Aggregation definitions of grouping recipes; only the count feeds labels.
    #[serde(default)]
    pub aggregations: Vec<Value>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            steps: Vec::new(),
            join_type: None,
            aggregations: Vec::new(),
        }
    }
}

// ─── Flow (top-level input) ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Flow {
    #[serde(default)]
    pub datasets: Vec<Dataset>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

impl Flow {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_flow_types.rs"]
mod tests;
