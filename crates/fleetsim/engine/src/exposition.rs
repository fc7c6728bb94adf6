//! Text exposition
//!
//! Renders a [`FleetReport`] as one `name{label="value",...} value` line per
//! metric instance, newline-terminated. Values are formatted exactly as they
//! were computed; nothing is reordered or recomputed here apart from each
//! snapshot's `total`, which is by definition the sum of its four categories.

use crate::baseline::Precision;
use crate::engine::FleetReport;
use fleetsim_types::FleetSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpositionOptions {
    /// Prepended to every metric name, joined with `_`
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for ExpositionOptions {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

fn default_prefix() -> String {
    "dual_region".to_string()
}

/// Render a full report
pub fn render(report: &FleetReport, options: &ExpositionOptions) -> String {
    let mut out = LineWriter::new(&options.prefix);

    for cell in &report.cells {
        let labels = [
            ("tenant", cell.tenant.name.as_str()),
            ("region", cell.region.as_str()),
        ];
        out.fleet(&labels, &cell.snapshot);
    }

    out.fleet(&[("instance", "global")], &report.rollup.global);

    for regional in &report.rollup.regional {
        out.fleet(&[("region", regional.region.as_str())], &regional.totals);
    }

    let gtm = &report.gtm;
    out.integer("gtm_traffic_volume_req_per_min", &[], gtm.traffic_volume_req_per_min);
    out.decimal("gtm_response_time_ms", &[], gtm.response_time_ms, 1);
    out.decimal("gtm_success_rate_percent", &[], gtm.success_rate_percent, 2);
    out.decimal("gtm_east_us_traffic_percent", &[], gtm.east_us_traffic_percent, 1);
    out.decimal("gtm_west_us_traffic_percent", &[], gtm.west_us_traffic_percent, 1);

    for rtm in &report.regional_tm {
        let labels = [("region", rtm.region.as_str())];
        out.integer(
            "regional_tm_traffic_volume_req_per_min",
            &labels,
            rtm.traffic_volume_req_per_min,
        );
        out.decimal("regional_tm_response_time_ms", &labels, rtm.response_time_ms, 1);
        out.decimal(
            "regional_tm_success_rate_percent",
            &labels,
            rtm.success_rate_percent,
            2,
        );
        out.integer(
            "regional_tm_load_balancer_health",
            &labels,
            rtm.load_balancer_health,
        );
    }

    for infra in &report.infrastructure {
        let labels = [("region", infra.region.as_str())];
        for sample in &infra.samples {
            let name = format!("infrastructure_{}_{}", infra.component.as_str(), sample.name);
            out.sample(&name, &labels, sample.value, sample.precision);
        }
    }

    out.integer("simulation_mode", &[("mode", report.state.mode.as_str())], 1u8);
    out.integer(
        "active_scenarios_count",
        &[],
        report.state.active_scenario_count(),
    );
    out.integer(
        "system_uptime_seconds",
        &[],
        report.uptime_seconds.max(0.0).round() as u64,
    );

    out.finish()
}

/// Escape a label value for the text format
fn escape_label_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    escaped
}

struct LineWriter<'a> {
    prefix: &'a str,
    buf: String,
}

impl<'a> LineWriter<'a> {
    fn new(prefix: &'a str) -> Self {
        Self {
            prefix,
            buf: String::new(),
        }
    }

    fn head(&mut self, name: &str, labels: &[(&str, &str)]) {
        if !self.prefix.is_empty() {
            self.buf.push_str(self.prefix);
            self.buf.push('_');
        }
        self.buf.push_str(name);
        if labels.is_empty() {
            return;
        }
        self.buf.push('{');
        for (i, (key, value)) in labels.iter().enumerate() {
            if i > 0 {
                self.buf.push(',');
            }
            // Writing to a String cannot fail.
            let _ = write!(self.buf, "{}=\"{}\"", key, escape_label_value(value));
        }
        self.buf.push('}');
    }

    fn integer(&mut self, name: &str, labels: &[(&str, &str)], value: impl std::fmt::Display) {
        self.head(name, labels);
        let _ = writeln!(self.buf, " {}", value);
    }

    fn decimal(&mut self, name: &str, labels: &[(&str, &str)], value: f64, places: usize) {
        self.head(name, labels);
        let _ = writeln!(self.buf, " {:.*}", places, value);
    }

    fn sample(&mut self, name: &str, labels: &[(&str, &str)], value: f64, precision: Precision) {
        match precision {
            Precision::Integer => self.integer(name, labels, value as i64),
            Precision::Places(places) => self.decimal(name, labels, value, places),
        }
    }

    fn fleet(&mut self, labels: &[(&str, &str)], snapshot: &FleetSnapshot) {
        self.integer("robot_fleet_healthy", labels, snapshot.healthy);
        self.integer("robot_fleet_degraded", labels, snapshot.degraded);
        self.integer("robot_fleet_critical", labels, snapshot.critical);
        self.integer("robot_fleet_down", labels, snapshot.down);
        self.integer("robot_fleet_total", labels, snapshot.total());
    }

    fn finish(self) -> String {
        self.buf
    }
}
