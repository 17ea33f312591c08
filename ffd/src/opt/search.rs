use std::cmp::Reverse;

use zaagplan::entities::{BarType, CutInstance, CutPlacement, CutProblem, Piece};

/// Order in which the pieces are placed: by decreasing length.
/// The sort is stable, equal-length pieces keep their input order.
pub fn piece_placement_order(instance: &CutInstance) -> Vec<usize> {
    let mut order = (0..instance.n_pieces()).collect::<Vec<_>>();
    order.sort_by_key(|&id| Reverse(instance.piece(id).length()));
    order
}

/// Searches the problem for a placement of the piece.
///
/// Open bars are tried first, in the order they were created, and the first one with room wins.
/// If none has room, a new bar is opened from the stock length leaving the least immediate waste.
/// Returns `None` if the piece does not fit on any stock length.
pub fn search(problem: &CutProblem, piece_id: usize) -> Option<CutPlacement> {
    let piece = problem.instance.piece(piece_id);

    if let Some((key, _)) = problem.open_bars().find(|(_, bar)| bar.fits(piece)) {
        return Some(CutPlacement {
            bar: BarType::Open(key),
            piece_id,
        });
    }

    select_stock(&problem.instance, piece).map(|stock_id| CutPlacement {
        bar: BarType::Closed { stock_id },
        piece_id,
    })
}

/// Picks the stock length for a fresh bar holding `piece`.
/// Only lengths that can take the piece including its overhead are candidates,
/// among those the one minimizing `stock - piece length` is chosen.
pub fn select_stock(instance: &CutInstance, piece: &Piece) -> Option<usize> {
    let footprint = piece.length().checked_add(instance.overhead.per_piece())?;
    instance
        .stock_lengths
        .iter()
        .enumerate()
        .filter(|(_, stock)| stock.get() >= footprint)
        .min_by_key(|(_, stock)| stock.get() - piece.length())
        .map(|(stock_id, _)| stock_id)
}
