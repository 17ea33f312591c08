use crate::entities::{CutInstance, Overhead, Piece, StockLength};
use crate::error::ConfigurationError;
use crate::io::ext_repr::ExtCutInstance;
use anyhow::{Context, Result};
use log::debug;

/// Upper bound on the number of pieces an instance may expand to
pub const MAX_N_PIECES: usize = 1_000_000;

/// Imports an instance into the library.
/// Every piece is validated, pieces with a demand > 1 are expanded into consecutive copies.
pub fn import(ext_instance: &ExtCutInstance, overhead: Overhead) -> Result<CutInstance> {
    let mut pieces = vec![];
    for (i, ext_piece) in ext_instance.pieces.iter().enumerate() {
        let piece = Piece::new(ext_piece.label.as_str(), ext_piece.length)
            .with_context(|| format!("invalid piece #{i} ({:?})", ext_piece.label))?;
        let demand = usize::try_from(ext_piece.demand)
            .ok()
            .filter(|&d| pieces.len().saturating_add(d) <= MAX_N_PIECES)
            .with_context(|| {
                format!(
                    "demand {} of piece #{i} ({:?}) exceeds the limit of {MAX_N_PIECES} pieces",
                    ext_piece.demand, ext_piece.label
                )
            })?;
        pieces.extend(std::iter::repeat_n(piece, demand));
    }

    let stock_lengths = import_stock_lengths(&ext_instance.stock_lengths)
        .with_context(|| format!("invalid stock lengths in instance {:?}", ext_instance.name))?;

    debug!(
        "[IMPORT] {}: {} pieces, stock lengths {:?}",
        ext_instance.name,
        pieces.len(),
        ext_instance.stock_lengths
    );

    Ok(CutInstance::new(pieces, stock_lengths, overhead))
}

/// Validates raw stock lengths (mm).
pub fn import_stock_lengths(lengths: &[u64]) -> Result<Vec<StockLength>, ConfigurationError> {
    lengths.iter().map(|&l| StockLength::new(l)).collect()
}
