/// Spacing and sizing parameters for the layout engine.
///
/// Threaded explicitly into `LayoutEngine::new`; there is no ambient
/// default theme.

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Horizontal gap between layer bands.
    pub layer_spacing: f64,
    /// Vertical gap between nodes in the same layer.
    pub node_spacing: f64,
    /// Outer margin around the drawing.
    pub padding: f64,
    /// Dataset node rectangle.
    pub dataset_width: f64,
    pub dataset_height: f64,
    /// Recipe nodes are squares of this side.
    pub recipe_size: f64,
    /// Canvas floor so degenerate flows still render inside a usable area.
    pub min_canvas_width: f64,
    pub min_canvas_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            layer_spacing: 200.0,
            node_spacing: 100.0,
            padding: 50.0,
            dataset_width: 120.0,
            dataset_height: 60.0,
            recipe_size: 50.0,
            min_canvas_width: 400.0,
            min_canvas_height: 200.0,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
