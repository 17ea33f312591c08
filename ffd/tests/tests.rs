#[cfg(test)]
mod tests {
    use std::path::Path;

    use ffd::config::FFDConfig;
    use ffd::io;
    use ffd::io::report::plan_report;
    use ffd::{FFDOptimizer, optimize};
    use float_cmp::approx_eq;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;
    use zaagplan::entities::{CutInstance, Overhead, Piece, PieceRegistry, Plan, StockLength};
    use zaagplan::error::ConfigurationError;
    use zaagplan::util::assertions::{bars_are_conserved, plan_accounts_for_all_pieces};

    const N_RANDOM_INSTANCES: usize = 200;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn pieces(lengths: &[i64]) -> Vec<Piece> {
        lengths
            .iter()
            .enumerate()
            .map(|(i, &l)| Piece::new(format!("P{i}"), l).unwrap())
            .collect()
    }

    fn stock(lengths: &[u64]) -> Vec<StockLength> {
        lengths
            .iter()
            .map(|&l| StockLength::new(l).unwrap())
            .collect()
    }

    fn bar_lengths(plan: &Plan) -> Vec<(u64, Vec<u64>, u64)> {
        plan.bars
            .iter()
            .map(|bar| {
                (
                    bar.stock.get(),
                    bar.pieces().iter().map(Piece::length).collect(),
                    bar.remainder(),
                )
            })
            .collect()
    }

    #[test]
    fn two_bars_first_fit() {
        init_logger();
        let plan = optimize(
            pieces(&[2300, 2300, 1200, 1200, 1200]),
            stock(&[5000]),
            Overhead::default(),
        )
        .unwrap();

        assert_eq!(
            bar_lengths(&plan),
            vec![
                (5000, vec![2300, 2300], 400),
                (5000, vec![1200, 1200, 1200], 1400)
            ]
        );
        assert_eq!(plan.waste(), 1800);
        assert!(approx_eq!(f64, plan.waste_pct(), 18.0, epsilon = 1e-9));
        assert_eq!(plan.n_unplaced(), 0);
    }

    #[test]
    fn stock_with_least_waste_is_opened() {
        let plan = optimize(pieces(&[6000]), stock(&[5000, 7000]), Overhead::default()).unwrap();
        assert_eq!(bar_lengths(&plan), vec![(7000, vec![6000], 1000)]);
    }

    #[test]
    fn oversized_piece_is_unplaced() {
        let plan = optimize(pieces(&[8000]), stock(&[5000, 7000]), Overhead::default()).unwrap();
        assert_eq!(plan.n_bars(), 0);
        assert_eq!(plan.n_unplaced(), 1);
        assert_eq!(plan.unplaced[0].length(), 8000);
        assert_eq!(plan.waste(), 0);
        assert_eq!(plan.waste_pct(), 0.0);
    }

    #[test_case(&[5000]; "single stock length")]
    #[test_case(&[5000, 7000]; "two stock lengths")]
    #[test_case(&[]; "no stock lengths")]
    fn no_pieces_no_bars(stock_lengths: &[u64]) {
        let plan = optimize(vec![], stock(stock_lengths), Overhead::new(50, 3)).unwrap();
        assert_eq!(plan.n_bars(), 0);
        assert_eq!(plan.waste(), 0);
        assert_eq!(plan.waste_pct(), 0.0);
        assert_eq!(plan.n_unplaced(), 0);
    }

    #[test]
    fn overhead_is_charged_per_piece() {
        let plan = optimize(
            pieces(&[1000, 1000, 1000, 1000, 1000]),
            stock(&[5000]),
            Overhead::new(50, 3),
        )
        .unwrap();

        assert_eq!(
            bar_lengths(&plan),
            vec![
                (5000, vec![1000, 1000, 1000, 1000], 788),
                (5000, vec![1000], 3947)
            ]
        );
        assert_eq!(plan.bars[0].consumed_length(), 4212);
        assert_eq!(plan.waste(), 5000);
        assert_eq!(plan.total_remainder() + 5 * 53, plan.waste());
    }

    #[test]
    fn overhead_decides_the_stock_length() {
        // 4990 fits on 5000 without overhead, but not with 11 mm per piece
        let plan = optimize(pieces(&[4990]), stock(&[5000, 7000]), Overhead::new(8, 3)).unwrap();
        assert_eq!(bar_lengths(&plan), vec![(7000, vec![4990], 1999)]);
    }

    #[test_case(Overhead::new(u64::MAX - 10, 0); "near max clamp")]
    #[test_case(Overhead::new(u64::MAX, 1); "saturating overhead")]
    #[test_case(Overhead::new(u64::MAX / 2 + 1, u64::MAX / 2 + 1); "overflowing sum")]
    fn huge_overhead_leaves_pieces_unplaced(overhead: Overhead) {
        init_logger();
        let plan = optimize(pieces(&[1000, 20]), stock(&[5000, u64::MAX]), overhead).unwrap();
        assert_eq!(plan.n_bars(), 0);
        assert_eq!(plan.n_unplaced(), 2);
        assert!(bars_are_conserved(&plan.bars));
    }

    #[test]
    fn no_stock_lengths_is_a_configuration_error() {
        let result = optimize(pieces(&[1000, 2000]), vec![], Overhead::default());
        assert_eq!(
            result,
            Err(ConfigurationError::NoStockLengths { n_pieces: 2 })
        );
    }

    #[test]
    fn equal_lengths_keep_input_order() {
        let pieces = ["A", "B", "C", "D"]
            .into_iter()
            .zip([1000, 2000, 1000, 2000])
            .map(|(label, length)| Piece::new(label, length).unwrap())
            .collect();
        let plan = optimize(pieces, stock(&[5000]), Overhead::default()).unwrap();

        let labels = plan
            .bars
            .iter()
            .map(|bar| bar.pieces().iter().map(Piece::label).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec![vec!["B", "D", "A"], vec!["C"]]);
    }

    #[test]
    fn bar_counts_per_stock_length() {
        let plan = optimize(
            pieces(&[6500, 6000, 4500, 4000, 900]),
            stock(&[7000, 5000]),
            Overhead::default(),
        )
        .unwrap();
        // 900 skips the first bar (500 left) and lands on the second one (1000 left)
        assert_eq!(
            bar_lengths(&plan),
            vec![
                (7000, vec![6500], 500),
                (7000, vec![6000, 900], 100),
                (5000, vec![4500], 500),
                (5000, vec![4000], 1000)
            ]
        );
        let counts = plan
            .bar_counts()
            .into_iter()
            .map(|(s, c)| (s.get(), c))
            .collect::<Vec<_>>();
        assert_eq!(counts, vec![(5000, 2), (7000, 2)]);
    }

    #[test]
    fn registry_snapshot_is_optimized() {
        let mut registry = PieceRegistry::new();
        registry.add_qty("W1 top", 2300, 2).unwrap();
        registry.add_qty("W1 side", 1200, 3).unwrap();
        let index = registry.add("typo", 12000).unwrap();
        registry.remove(index).unwrap();

        let plan = optimize(registry.snapshot(), stock(&[5000]), Overhead::default()).unwrap();
        assert_eq!(plan.n_bars(), 2);
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn solving_twice_gives_identical_plans() {
        let mut rng = SmallRng::seed_from_u64(42);
        let instance = random_instance(&mut rng, 100);
        let mut optimizer = FFDOptimizer::new(instance.clone());

        let plan_1 = optimizer.solve().unwrap();
        let plan_2 = optimizer.solve().unwrap();
        let plan_3 = FFDOptimizer::new(instance).solve().unwrap();
        assert_eq!(plan_1, plan_2);
        assert_eq!(plan_1, plan_3);

        let json_1 = serde_json::to_string(&zaagplan::io::export(&plan_1)).unwrap();
        let json_3 = serde_json::to_string(&zaagplan::io::export(&plan_3)).unwrap();
        assert_eq!(json_1, json_3);
    }

    #[test]
    fn random_instances_are_conserved() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..N_RANDOM_INSTANCES {
            let n_pieces = rng.random_range(0..60);
            let instance = random_instance(&mut rng, n_pieces);
            let plan = FFDOptimizer::new(instance.clone()).solve().unwrap();

            assert!(bars_are_conserved(&plan.bars));
            assert!(plan_accounts_for_all_pieces(&instance, &plan));
            assert_eq!(instance.n_pieces(), plan.n_placed() + plan.n_unplaced());
            assert!(plan.bars.iter().all(|bar| !bar.is_empty()));

            // pieces only remain unplaced when no stock length can take them
            let max_stock = instance.max_stock_length().unwrap().get();
            assert!(
                plan.unplaced
                    .iter()
                    .all(|p| p.length() + instance.overhead.per_piece() > max_stock)
            );
        }
    }

    #[test]
    fn appending_a_short_piece_never_reduces_bars() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..N_RANDOM_INSTANCES {
            let n_pieces = rng.random_range(1..40);
            let instance = random_instance(&mut rng, n_pieces);
            let n_bars = FFDOptimizer::new(instance.clone()).solve().unwrap().n_bars();

            let shortest = instance.pieces.iter().map(Piece::length).min().unwrap();
            let extra = rng.random_range(1..=shortest) as i64;
            let mut pieces = instance.pieces.clone();
            pieces.push(Piece::new("extra", extra).unwrap());
            let extended = CutInstance::new(pieces, instance.stock_lengths.clone(), instance.overhead);
            let n_bars_extended = FFDOptimizer::new(extended).solve().unwrap().n_bars();

            assert!(n_bars_extended >= n_bars);
        }
    }

    #[test_case("../assets/frames.json"; "frames json")]
    #[test_case("../assets/frames.txt"; "frames piece list")]
    fn test_instance(instance_path: &str) {
        init_logger();
        let config = FFDConfig::default();
        let mut ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        if ext_instance.stock_lengths.is_empty() {
            ext_instance.stock_lengths = config.default_stock_lengths.clone();
        }
        let instance = zaagplan::io::import(&ext_instance, Overhead::new(50, 3)).unwrap();
        let plan = FFDOptimizer::new(instance.clone()).solve().unwrap();

        assert!(plan_accounts_for_all_pieces(&instance, &plan));
        assert!(bars_are_conserved(&plan.bars));
        assert_eq!(plan.n_unplaced(), 0);
    }

    #[test]
    fn config_file_is_parsed() {
        let file = std::fs::File::open("../assets/config.json").unwrap();
        let config: FFDConfig = serde_json::from_reader(file).unwrap();
        assert_eq!(config.overhead, Overhead::new(50, 3));
        assert_eq!(config.default_stock_lengths, vec![5000, 7000]);
        assert!(config.svg_draw_options.piece_labels);
    }

    #[test]
    fn report_lines() {
        let mut plan = optimize(
            pieces(&[2300, 2300, 1200, 1200, 1200]),
            stock(&[5000]),
            Overhead::default(),
        )
        .unwrap();
        plan.unplaced.push(Piece::new("S1", 8000).unwrap());

        let report = plan_report(&plan);
        assert_eq!(
            report,
            vec![
                "Bar 1 (5000 mm): [2300 (P0), 2300 (P1)] -> rest: 400 mm",
                "Bar 2 (5000 mm): [1200 (P2), 1200 (P3), 1200 (P4)] -> rest: 1400 mm",
                "5000 mm bars: 2",
                "Total bars: 2",
                "Total waste: 1800 mm (18.0%)",
                "Unplaced pieces: 1 (S1 8000 mm)",
            ]
        );
    }

    fn random_instance(rng: &mut SmallRng, n_pieces: usize) -> CutInstance {
        let pieces = (0..n_pieces)
            .map(|i| Piece::new(format!("P{i}"), rng.random_range(1..=8000)).unwrap())
            .collect();
        let mut stock_lengths = [3000, 5000, 6000, 7000]
            .into_iter()
            .filter(|_| rng.random_bool(0.5))
            .collect::<Vec<u64>>();
        if stock_lengths.is_empty() {
            stock_lengths.push(5000);
        }
        let overhead = Overhead::new(rng.random_range(0..=50), rng.random_range(0..=5));
        CutInstance::new(pieces, stock(&stock_lengths), overhead)
    }
}
