use serde::{Deserialize, Serialize};

use zaagplan::entities::Overhead;
use zaagplan::io::svg::SvgDrawOptions;

/// Configuration for the FFD optimizer
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FFDConfig {
    /// Clamp clearance and kerf loss charged for every piece
    #[serde(default)]
    pub overhead: Overhead,
    /// Stock lengths (mm) to use when the input does not specify any
    pub default_stock_lengths: Vec<u64>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for FFDConfig {
    fn default() -> Self {
        Self {
            overhead: Overhead::default(),
            default_stock_lengths: vec![5000, 7000],
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
