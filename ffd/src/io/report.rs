use itertools::Itertools;
use zaagplan::entities::{Bar, Plan};

/// Renders a plan as human-readable lines: one per bar, followed by the totals.
pub fn plan_report(plan: &Plan) -> Vec<String> {
    let mut lines = plan
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| bar_line(i, bar))
        .collect_vec();

    for (stock, count) in plan.bar_counts() {
        lines.push(format!("{stock} bars: {count}"));
    }
    if plan.overhead.per_piece() > 0 {
        lines.push(format!(
            "Overhead per piece: {} mm (clamp {} mm + kerf {} mm)",
            plan.overhead.per_piece(),
            plan.overhead.clamp_clearance,
            plan.overhead.kerf_loss
        ));
    }
    lines.push(format!("Total bars: {}", plan.n_bars()));
    lines.push(format!(
        "Total waste: {} mm ({:.1}%)",
        plan.waste(),
        plan.waste_pct()
    ));
    if !plan.unplaced.is_empty() {
        lines.push(format!(
            "Unplaced pieces: {} ({})",
            plan.n_unplaced(),
            plan.unplaced
                .iter()
                .map(|p| format!("{} {} mm", p.label(), p.length()))
                .join(", ")
        ));
    }
    lines
}

fn bar_line(index: usize, bar: &Bar) -> String {
    format!(
        "Bar {} ({}): [{}] -> rest: {} mm",
        index + 1,
        bar.stock,
        bar.pieces()
            .iter()
            .map(|p| format!("{} ({})", p.length(), p.label()))
            .join(", "),
        bar.remainder()
    )
}
