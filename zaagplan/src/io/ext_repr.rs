use serde::{Deserialize, Serialize};

/// A set of pieces to cut, optionally with the stock lengths available to cut them from
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtCutInstance {
    /// The name of the instance
    pub name: String,
    /// Pieces to be produced
    pub pieces: Vec<ExtPiece>,
    /// Standard lengths of the stock bars (mm).
    /// If empty, the caller is expected to supply defaults.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stock_lengths: Vec<u64>,
}

/// Piece with a demand
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtPiece {
    /// Identifying label, e.g. a window or frame reference
    pub label: String,
    /// Length in mm. Signed so that invalid input can be reported instead of failing deserialization.
    pub length: i64,
    /// Amount of times this piece has to be produced
    #[serde(default = "default_demand")]
    pub demand: u64,
}

fn default_demand() -> u64 {
    1
}

/// A piece as it appears in a plan
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtPieceRef {
    pub label: String,
    pub length: u64,
}

/// External representation of a [`Bar`](crate::entities::Bar)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtBar {
    /// Nominal length of the stock bar
    pub stock_length: u64,
    /// Pieces in the order they are placed on the bar
    pub pieces: Vec<ExtPieceRef>,
    /// Offcut left after all pieces (and their overhead) are cut
    pub remainder: u64,
}

/// Number of bars used of a single stock length
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtBarCount {
    pub stock_length: u64,
    pub count: usize,
}

/// External representation of a [`Plan`](crate::entities::Plan)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlan {
    /// Bars in the order they were opened
    pub bars: Vec<ExtBar>,
    /// Number of bars per stock length, by increasing length
    pub bar_counts: Vec<ExtBarCount>,
    /// Clamp clearance and kerf loss per piece (mm)
    pub overhead_per_piece: u64,
    /// Sum of the nominal lengths of all bars
    pub total_stock_length: u64,
    /// Sum of the lengths of all placed pieces
    pub total_material_length: u64,
    /// Stock length not delivered as pieces
    pub waste: u64,
    /// Waste as a percentage of the total stock length
    pub waste_pct: f64,
    /// Pieces which did not fit on any stock length
    pub unplaced: Vec<ExtPieceRef>,
    pub n_unplaced: usize,
}
