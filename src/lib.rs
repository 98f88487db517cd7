//! flow-layout — layered 2D layout engine for dataset/recipe pipeline flows.
//!
//! Takes a flow (datasets + recipes with input/output references), extracts
//! a node/edge graph, assigns topological layers, reduces edge crossings
//! with a barycenter heuristic, and emits absolute coordinates plus canvas
//! bounds for downstream renderers.
//!
//! Public API: `parse_flow()`, `layout_flow()`, `layout_flow_json()`

pub mod config;
pub mod error;
pub mod flow;
pub mod layout;

pub use config::LayoutConfig;
pub use error::FlowError;
pub use flow::{Flow, parse_flow};
pub use layout::{LayoutEngine, LayoutResult};

/// Lay out an already-parsed flow with the given configuration.
pub fn layout_flow(flow: &Flow, config: &LayoutConfig) -> LayoutResult {
    LayoutEngine::new(config.clone()).calculate_layout(flow)
}

/// Parse a flow from JSON and lay it out.
pub fn layout_flow_json(src: &str, config: &LayoutConfig) -> Result<LayoutResult, FlowError> {
    let flow = parse_flow(src)?;
    Ok(layout_flow(&flow, config))
}
