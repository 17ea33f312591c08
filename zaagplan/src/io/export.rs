use crate::entities::{Bar, Piece, Plan};
use crate::io::ext_repr::{ExtBar, ExtBarCount, ExtPieceRef, ExtPlan};

/// Exports a plan out of the library
pub fn export(plan: &Plan) -> ExtPlan {
    ExtPlan {
        bars: plan.bars.iter().map(export_bar).collect(),
        bar_counts: plan
            .bar_counts()
            .into_iter()
            .map(|(stock, count)| ExtBarCount {
                stock_length: stock.get(),
                count,
            })
            .collect(),
        overhead_per_piece: plan.overhead.per_piece(),
        total_stock_length: plan.total_stock_length(),
        total_material_length: plan.total_material_length(),
        waste: plan.waste(),
        waste_pct: plan.waste_pct(),
        unplaced: plan.unplaced.iter().map(export_piece).collect(),
        n_unplaced: plan.n_unplaced(),
    }
}

fn export_bar(bar: &Bar) -> ExtBar {
    ExtBar {
        stock_length: bar.stock.get(),
        pieces: bar.pieces().iter().map(export_piece).collect(),
        remainder: bar.remainder(),
    }
}

fn export_piece(piece: &Piece) -> ExtPieceRef {
    ExtPieceRef {
        label: piece.label().to_string(),
        length: piece.length(),
    }
}
