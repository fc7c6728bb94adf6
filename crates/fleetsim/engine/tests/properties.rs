//! Property tests: every generated snapshot stays inside its bands and
//! rollups stay strictly additive, at any point in a ten-year window.

use fleetsim_engine::*;
use fleetsim_types::*;
use proptest::prelude::*;

const START: EpochSeconds = EpochSeconds(1_700_000_000.0);
const TEN_YEARS: f64 = 3_650.0 * 86_400.0;

fn engine() -> FleetEngine {
    FleetEngine::with_defaults(START).expect("default config is valid")
}

fn arb_offset() -> impl Strategy<Value = f64> {
    0.0..TEN_YEARS
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn categories_stay_in_bounds(offset in arb_offset()) {
        let engine = engine();
        let bounds = CategoryBounds::default();
        let report = engine.generate(START + offset, &SimulationState::default()).unwrap();

        for cell in &report.cells {
            for category in Category::ALL {
                let value = cell.snapshot.counts().get(category);
                prop_assert!(bounds.get(category).contains(value),
                    "{} {} {} = {}", cell.tenant, cell.region, category.as_str(), value);
            }
        }
    }

    #[test]
    fn healthy_is_fleet_minus_problems(offset in arb_offset()) {
        let engine = engine();
        let report = engine.generate(START + offset, &SimulationState::default()).unwrap();

        for cell in &report.cells {
            prop_assert_eq!(cell.snapshot.healthy, cell.fleet_size - cell.snapshot.problems());
            prop_assert_eq!(cell.snapshot.total(), cell.fleet_size);
        }
    }

    #[test]
    fn rollups_are_sums(offset in arb_offset()) {
        let engine = engine();
        let report = engine.generate(START + offset, &SimulationState::default()).unwrap();

        for regional in &report.rollup.regional {
            let sum: FleetSnapshot = report
                .cells
                .iter()
                .filter(|c| c.region == regional.region)
                .map(|c| c.snapshot)
                .sum();
            prop_assert_eq!(regional.totals, sum);
        }

        let global: FleetSnapshot = report.cells.iter().map(|c| c.snapshot).sum();
        prop_assert_eq!(report.rollup.global, global);
    }

    #[test]
    fn traffic_split_sums_to_hundred(offset in arb_offset()) {
        let gtm = engine().baseline_generator().gtm(START + offset);
        prop_assert!((gtm.east_us_traffic_percent + gtm.west_us_traffic_percent - 100.0).abs() < 1e-9);
        prop_assert!((40.0..=60.0).contains(&gtm.east_us_traffic_percent));
    }

    #[test]
    fn fleet_size_never_shrinks(a in arb_offset(), b in arb_offset(), tenant in 0usize..9) {
        let engine = engine();
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        for region in Region::ALL {
            let before = engine.fleet_size(tenant, region, START + earlier);
            let after = engine.fleet_size(tenant, region, START + later);
            prop_assert!(after >= before);
            prop_assert!(before >= 856_000);
        }
    }
}
