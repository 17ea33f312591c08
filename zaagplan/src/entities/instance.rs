use crate::entities::{Overhead, Piece, StockLength};
use itertools::Itertools;

/// Immutable snapshot of everything the optimizer needs: the pieces to cut,
/// the stock lengths to cut them from and the per-piece overhead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutInstance {
    /// Pieces in the order they were supplied. Their index is their id.
    pub pieces: Vec<Piece>,
    /// Distinct stock lengths, in order of first appearance
    pub stock_lengths: Vec<StockLength>,
    pub overhead: Overhead,
}

impl CutInstance {
    pub fn new(
        pieces: Vec<Piece>,
        stock_lengths: impl IntoIterator<Item = StockLength>,
        overhead: Overhead,
    ) -> Self {
        let stock_lengths = stock_lengths.into_iter().unique().collect_vec();
        Self {
            pieces,
            stock_lengths,
            overhead,
        }
    }

    pub fn piece(&self, id: usize) -> &Piece {
        &self.pieces[id]
    }

    pub fn stock(&self, id: usize) -> StockLength {
        self.stock_lengths[id]
    }

    pub fn n_pieces(&self) -> usize {
        self.pieces.len()
    }

    pub fn max_stock_length(&self) -> Option<StockLength> {
        self.stock_lengths.iter().max().copied()
    }
}
