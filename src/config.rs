/// Geometry used by the layout pipeline.
///
/// All distances are in SVG user units. `Default` reproduces the
/// console diagram's proportions.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Fixed height of every node box.
    pub node_height: f64,
    /// Narrowest a node box may be.
    pub min_node_width: f64,
    /// Width budget per label character.
    pub char_width: f64,
    /// Horizontal padding added to the label width.
    pub label_padding: f64,
    /// Gap between neighbouring boxes on one level.
    pub horizontal_gap: f64,
    /// Gap between the bottom of one level and the top of the next.
    pub vertical_gap: f64,
    /// y of level 0.
    pub start_y: f64,
    /// Vertical line every level is centred on.
    pub center_x: f64,
    /// Leftmost x a level may start at.
    pub min_x: f64,
    /// Space between a sidecar `@world` and its exchange partner.
    pub sidecar_gap: f64,
    /// Where a sidecar `@world` goes when none of its partners got a node.
    pub sidecar_fallback: (f64, f64),
    /// Two nodes whose y differs by less than this count as side by side.
    pub same_level_tolerance: f64,
    /// Lane offset for horizontal bidirectional pairs.
    pub horizontal_pair_offset: f64,
    /// Lane offset for vertical bidirectional pairs.
    pub vertical_pair_offset: f64,
    /// Label offset from horizontal lines.
    pub horizontal_label_offset: f64,
    /// Label offset from vertical and diagonal lines.
    pub vertical_label_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_height: 44.0,
            min_node_width: 140.0,
            char_width: 9.0,
            label_padding: 32.0,
            horizontal_gap: 50.0,
            vertical_gap: 80.0,
            start_y: 40.0,
            center_x: 350.0,
            min_x: 20.0,
            sidecar_gap: 180.0,
            sidecar_fallback: (650.0, 40.0),
            same_level_tolerance: 10.0,
            horizontal_pair_offset: 10.0,
            vertical_pair_offset: 20.0,
            horizontal_label_offset: 14.0,
            vertical_label_offset: 12.0,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered width of a node box for `label`.
    pub fn node_width(&self, label: &str) -> f64 {
        let chars = label.chars().count() as f64;
        self.min_node_width
            .max(chars * self.char_width + self.label_padding)
    }

    /// y of the top edge of every node on `level`.
    pub fn level_y(&self, level: usize) -> f64 {
        self.start_y + level as f64 * (self.node_height + self.vertical_gap)
    }
}

/// Canvas settings for the SVG renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Smallest canvas the renderer emits.
    pub min_width: f64,
    pub min_height: f64,
    /// Space kept right of the rightmost node.
    pub margin_right: f64,
    /// Space kept below the lowest node.
    pub margin_bottom: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            min_width: 800.0,
            min_height: 400.0,
            margin_right: 40.0,
            margin_bottom: 60.0,
        }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
