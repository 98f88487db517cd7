//! Flow input handling: typed model + JSON parsing.

pub mod types;

pub use types::{Dataset, DatasetRef, DatasetRole, Flow, Recipe};

use crate::error::FlowError;

/// Parse a flow description from its JSON wire form.
pub fn parse_flow(src: &str) -> Result<Flow, FlowError> {
    let flow: Flow = serde_json::from_str(src)?;
    Ok(flow)
}

#[cfg(test)]
#[path = "../../tests/rust/test_flow_parse.rs"]
mod tests;
