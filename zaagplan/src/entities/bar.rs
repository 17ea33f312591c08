use crate::entities::{Piece, StockLength};

/// A single stock bar committed to a plan, with the pieces cut from it in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    /// Nominal length of the stock bar
    pub stock: StockLength,
    /// Overhead charged for each piece on this bar (clamp clearance + kerf loss)
    pub overhead_per_piece: u64,
    pieces: Vec<Piece>,
    consumed: u64,
}

impl Bar {
    pub fn new(stock: StockLength, overhead_per_piece: u64) -> Self {
        Self {
            stock,
            overhead_per_piece,
            pieces: vec![],
            consumed: 0,
        }
    }

    /// Length the piece would occupy on a bar, overhead included.
    /// `None` if it exceeds `u64::MAX`.
    pub fn footprint(&self, piece: &Piece) -> Option<u64> {
        piece.length().checked_add(self.overhead_per_piece)
    }

    /// Whether `piece` can be added without the remainder going negative
    pub fn fits(&self, piece: &Piece) -> bool {
        self.footprint(piece)
            .and_then(|footprint| self.consumed.checked_add(footprint))
            .is_some_and(|consumed| consumed <= self.stock.get())
    }

    /// Appends a piece. Callers are expected to have checked [`Bar::fits`].
    pub fn place(&mut self, piece: Piece) {
        assert!(self.fits(&piece), "{piece:?} does not fit in {self:?}");
        self.consumed += piece.length() + self.overhead_per_piece;
        self.pieces.push(piece);
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn n_pieces(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Sum of piece lengths plus the per-piece overhead of every piece
    pub fn consumed_length(&self) -> u64 {
        self.consumed
    }

    /// Sum of the piece lengths alone (useful material)
    pub fn material_length(&self) -> u64 {
        self.pieces.iter().map(Piece::length).sum()
    }

    /// Offcut left on the bar
    pub fn remainder(&self) -> u64 {
        self.stock.get() - self.consumed
    }
}
