//! End-to-end checks on the rendered metric text.

use fleetsim_engine::*;
use fleetsim_types::*;
use std::collections::HashMap;

const START: EpochSeconds = EpochSeconds(1_700_000_000.0);

fn render_at(now: EpochSeconds, state: &SimulationState) -> String {
    FleetEngine::with_defaults(START)
        .unwrap()
        .render(now, state)
        .unwrap()
}

/// Map of `name{labels}` to raw value text
fn parse(text: &str) -> HashMap<String, String> {
    text.lines()
        .map(|line| {
            let (series, value) = line.rsplit_once(' ').expect("line has a value");
            (series.to_string(), value.to_string())
        })
        .collect()
}

fn value(lines: &HashMap<String, String>, series: &str) -> u64 {
    lines
        .get(series)
        .unwrap_or_else(|| panic!("missing {}", series))
        .parse()
        .unwrap()
}

#[test]
fn test_default_topology_line_count() {
    let text = render_at(START + 5_000.0, &SimulationState::default());
    assert!(text.ends_with('\n'));
    assert_eq!(text.lines().count(), 163);

    let count = |prefix: &str| text.lines().filter(|l| l.starts_with(prefix)).count();
    assert_eq!(count("dual_region_robot_fleet_"), 90 + 5 + 10);
    assert_eq!(count("dual_region_gtm_"), 5);
    assert_eq!(count("dual_region_regional_tm_"), 8);
    assert_eq!(count("dual_region_infrastructure_"), 42);
}

#[test]
fn test_first_cell_at_start() {
    let lines = parse(&render_at(START, &SimulationState::default()));
    let labels = r#"{tenant="enterprise",region="east_us"}"#;

    let total = value(&lines, &format!("dual_region_robot_fleet_total{}", labels));
    assert_eq!(total, 856_000);

    let sum: u64 = ["healthy", "degraded", "critical", "down"]
        .iter()
        .map(|c| value(&lines, &format!("dual_region_robot_fleet_{}{}", c, labels)))
        .sum();
    assert_eq!(sum, total);
}

#[test]
fn test_global_total_matches_cells() {
    let text = render_at(START + 40.0 * 86_400.0, &SimulationState::default());
    let lines = parse(&text);

    let cells: u64 = text
        .lines()
        .filter(|l| l.starts_with("dual_region_robot_fleet_total{tenant="))
        .map(|l| l.rsplit_once(' ').unwrap().1.parse::<u64>().unwrap())
        .sum();
    let global = value(&lines, r#"dual_region_robot_fleet_total{instance="global"}"#);
    let east = value(&lines, r#"dual_region_robot_fleet_total{region="east_us"}"#);
    let west = value(&lines, r#"dual_region_robot_fleet_total{region="west_us"}"#);

    assert_eq!(global, cells);
    assert_eq!(global, east + west);
}

#[test]
fn test_render_is_deterministic() {
    let now = START + 123_456.789;
    let state = SimulationState::default();
    assert_eq!(render_at(now, &state), render_at(now, &state));
}

#[test]
fn test_metadata_lines() {
    let state = SimulationState::new(
        SimulationMode::ScenarioActive,
        vec!["east_outage".to_string(), "storage_slowdown".to_string()],
    );
    let text = render_at(START + 90.4, &state);
    let tail: Vec<&str> = text.lines().rev().take(3).collect();

    assert_eq!(tail[2], r#"dual_region_simulation_mode{mode="scenario_active"} 1"#);
    assert_eq!(tail[1], "dual_region_active_scenarios_count 2");
    assert_eq!(tail[0], "dual_region_system_uptime_seconds 90");
}

#[test]
fn test_value_formatting() {
    let lines = parse(&render_at(START + 777.0, &SimulationState::default()));

    let decimals = |series: &str| lines[series].split_once('.').map(|(_, d)| d.len());
    assert_eq!(decimals("dual_region_gtm_traffic_volume_req_per_min"), None);
    assert_eq!(decimals("dual_region_gtm_response_time_ms"), Some(1));
    assert_eq!(decimals("dual_region_gtm_success_rate_percent"), Some(2));
    assert_eq!(
        decimals(r#"dual_region_infrastructure_orchestrator_queue_depth{region="east_us"}"#),
        None
    );
    assert_eq!(
        decimals(r#"dual_region_infrastructure_orchestrator_task_success_rate_percent{region="west_us"}"#),
        Some(2)
    );
    assert_eq!(
        lines[r#"dual_region_regional_tm_load_balancer_health{region="west_us"}"#],
        "4"
    );
}
