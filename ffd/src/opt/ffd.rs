use std::time::Instant;

use log::{debug, info};
use thousands::Separable;
use zaagplan::entities::{CutInstance, CutProblem, Overhead, Piece, Plan, StockLength};
use zaagplan::error::ConfigurationError;
use zaagplan::util::assertions::{bars_are_conserved, plan_accounts_for_all_pieces};

use crate::opt::search::{piece_placement_order, search};

/// First-Fit-Decreasing (FFD) optimizer for cutting pieces from stock bars.
///
/// Pieces are handled from long to short. Each one goes on the first open bar with room left,
/// otherwise on a fresh bar of the stock length that leaves the least immediate waste.
/// Pieces that fit on no stock length are left out and reported in [`Plan::unplaced`].
pub struct FFDOptimizer {
    pub instance: CutInstance,
    pub problem: CutProblem,
}

impl FFDOptimizer {
    pub fn new(instance: CutInstance) -> Self {
        let problem = CutProblem::new(instance.clone());
        Self { instance, problem }
    }

    /// Builds a fresh plan from the instance. Repeated calls yield identical plans.
    pub fn solve(&mut self) -> Result<Plan, ConfigurationError> {
        let n_pieces = self.instance.n_pieces();
        if n_pieces > 0 && self.instance.stock_lengths.is_empty() {
            return Err(ConfigurationError::NoStockLengths { n_pieces });
        }

        let start = Instant::now();
        self.problem = CutProblem::new(self.instance.clone());

        for (i, piece_id) in piece_placement_order(&self.instance).into_iter().enumerate() {
            match search(&self.problem, piece_id) {
                Some(placement) => {
                    self.problem.place_piece(placement);
                    debug!(
                        "[FFD] placed piece {}/{} {:?} ({} mm) on {:?}",
                        i + 1,
                        n_pieces,
                        self.instance.piece(piece_id).label(),
                        self.instance.piece(piece_id).length(),
                        placement.bar
                    );
                }
                None => self.problem.reject_piece(piece_id),
            }
        }

        let plan = self.problem.save();

        debug_assert_eq!(self.problem.n_pending(), 0);
        debug_assert!(bars_are_conserved(&plan.bars));
        debug_assert!(plan_accounts_for_all_pieces(&self.instance, &plan));

        info!(
            "[FFD] optimization finished in {:.3}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
        info!(
            "[FFD] plan uses {} bars ({} mm of stock) with {} mm waste ({:.1}%), {} pieces unplaced",
            plan.n_bars(),
            plan.total_stock_length().separate_with_commas(),
            plan.waste().separate_with_commas(),
            plan.waste_pct(),
            plan.n_unplaced()
        );

        Ok(plan)
    }
}

/// Computes a cutting plan for a snapshot of pieces, in one call.
pub fn optimize(
    pieces: Vec<Piece>,
    stock_lengths: impl IntoIterator<Item = StockLength>,
    overhead: Overhead,
) -> Result<Plan, ConfigurationError> {
    let instance = CutInstance::new(pieces, stock_lengths, overhead);
    FFDOptimizer::new(instance).solve()
}
