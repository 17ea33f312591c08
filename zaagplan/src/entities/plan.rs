use crate::entities::{Bar, Overhead, Piece, StockLength};
use itertools::Itertools;

/// Result of one optimizer run: the committed bars in creation order,
/// plus the pieces that did not fit on any available stock length.
///
/// A plan is never updated incrementally, any change to the inputs requires a new run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub bars: Vec<Bar>,
    /// Pieces longer than every usable stock length, in the order they were encountered
    pub unplaced: Vec<Piece>,
    /// Overhead the plan was computed with
    pub overhead: Overhead,
}

impl Plan {
    pub fn n_bars(&self) -> usize {
        self.bars.len()
    }

    /// Number of bars used per stock length, ordered by increasing length
    pub fn bar_counts(&self) -> Vec<(StockLength, usize)> {
        self.bars
            .iter()
            .map(|bar| bar.stock)
            .counts()
            .into_iter()
            .sorted()
            .collect()
    }

    /// Sum of the nominal lengths of all bars
    pub fn total_stock_length(&self) -> u64 {
        self.bars.iter().map(|bar| bar.stock.get()).sum()
    }

    /// Sum of the lengths of all placed pieces
    pub fn total_material_length(&self) -> u64 {
        self.bars.iter().map(Bar::material_length).sum()
    }

    /// Stock length not delivered as pieces: offcuts plus the overhead lost on every cut
    pub fn waste(&self) -> u64 {
        self.total_stock_length() - self.total_material_length()
    }

    /// Waste as a percentage of the total stock length, 0.0 for a plan without bars
    pub fn waste_pct(&self) -> f64 {
        match self.total_stock_length() {
            0 => 0.0,
            total => self.waste() as f64 / total as f64 * 100.0,
        }
    }

    /// Sum of the offcuts left on every bar
    pub fn total_remainder(&self) -> u64 {
        self.bars.iter().map(Bar::remainder).sum()
    }

    pub fn n_placed(&self) -> usize {
        self.bars.iter().map(Bar::n_pieces).sum()
    }

    pub fn n_unplaced(&self) -> usize {
        self.unplaced.len()
    }
}
