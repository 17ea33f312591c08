use crate::entities::{Bar, CutInstance, CutProblem, Piece, PieceState, Plan};
use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

/// No bar in the plan holds more than its nominal length, overhead included.
pub fn bars_are_conserved(bars: &[Bar]) -> bool {
    bars.iter().all(|bar| {
        let used = bar.material_length() + bar.n_pieces() as u64 * bar.overhead_per_piece;
        let ok = used <= bar.stock.get() && used == bar.consumed_length();
        if !ok {
            error!("bar overfilled or inconsistent: {bar:?}");
        }
        ok
    })
}

/// Every piece of the instance is either on exactly one bar or reported as unplaced.
/// Pieces are compared as a multiset since labels are not unique.
pub fn plan_accounts_for_all_pieces(instance: &CutInstance, plan: &Plan) -> bool {
    if instance.n_pieces() != plan.n_placed() + plan.n_unplaced() {
        error!(
            "{} pieces in instance, {} placed + {} unplaced in plan",
            instance.n_pieces(),
            plan.n_placed(),
            plan.n_unplaced()
        );
        return false;
    }
    let key = |p: &&Piece| (p.length(), p.label().to_string());
    let expected = instance.pieces.iter().sorted_by_key(key).collect_vec();
    let actual = plan
        .bars
        .iter()
        .flat_map(|bar| bar.pieces())
        .chain(plan.unplaced.iter())
        .sorted_by_key(key)
        .collect_vec();
    expected == actual
}

pub fn problem_matches_plan(problem: &CutProblem, plan: &Plan) -> bool {
    assert_eq!(problem.bars.len(), plan.n_bars());
    assert_eq!(problem.unplaced_ids().len(), plan.n_unplaced());
    assert!(bars_are_conserved(&plan.bars));

    let n_placed = (0..problem.instance.n_pieces())
        .filter(|&id| matches!(problem.piece_state(id), PieceState::Placed(_)))
        .count();
    assert_eq!(n_placed, plan.n_placed());

    // waste is made up of the offcuts and the overhead of every placed piece
    let overhead = plan.n_placed() as u64 * plan.overhead.per_piece();
    assert_eq!(plan.waste(), plan.total_remainder() + overhead);
    let waste_from_pct = plan.waste_pct() / 100.0 * plan.total_stock_length() as f64;
    assert!(approx_eq!(
        f64,
        waste_from_pct,
        plan.waste() as f64,
        epsilon = 1e-9 * (plan.total_stock_length() as f64).max(1.0)
    ));

    problem
        .open_bars()
        .zip(plan.bars.iter())
        .all(|((_, b1), b2)| b1 == b2)
}
