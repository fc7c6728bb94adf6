//! Shared generation entry point for the scrape and push paths

use fleetsim_engine::{Clock, EngineResult, FleetEngine};
use fleetsim_observability::{GenerationOutcome, MetricsRegistry};
use fleetsim_types::SimulationState;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Engine, clock and mutable simulation state behind one cloneable handle
#[derive(Clone)]
pub struct MetricsSource {
    engine: Arc<FleetEngine>,
    clock: Arc<dyn Clock>,
    simulation: Arc<RwLock<SimulationState>>,
    metrics: MetricsRegistry,
}

impl MetricsSource {
    pub fn new(engine: Arc<FleetEngine>, clock: Arc<dyn Clock>, metrics: MetricsRegistry) -> Self {
        Self {
            engine,
            clock,
            simulation: Arc::new(RwLock::new(SimulationState::default())),
            metrics,
        }
    }

    pub fn engine(&self) -> &FleetEngine {
        &self.engine
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Seconds since the engine's start, per the injected clock
    pub fn uptime_seconds(&self) -> f64 {
        self.engine.uptime_seconds(self.clock.now())
    }

    pub async fn simulation(&self) -> SimulationState {
        self.simulation.read().await.clone()
    }

    pub async fn set_simulation(&self, state: SimulationState) {
        *self.simulation.write().await = state;
    }

    /// Render the exposition for the current instant.
    ///
    /// `caller` labels the self-instrumentation counters.
    pub async fn render(&self, caller: &str) -> EngineResult<String> {
        let state = self.simulation().await;
        let started = Instant::now();
        let result = self.engine.render(self.clock.now(), &state);
        let elapsed = started.elapsed().as_secs_f64();

        let daemon = self.metrics.daemon();
        match &result {
            Ok(text) => {
                daemon.record_generation(caller, GenerationOutcome::Success, elapsed);
                daemon.set_last_render_lines(text.lines().count());
            }
            Err(_) => daemon.record_generation(caller, GenerationOutcome::Error, elapsed),
        }
        result
    }
}
