/// Gas reaction operation
/// Runs the reaction catalog over every mixture in the station and queues the
/// hotspot exposures it raises.

use crate::sim::simulation::Simulation;
use crate::sim_op::{AtmosOp, AtmosOpHandle};

#[derive(Debug, Default)]
pub struct GasReactionOp {
    /// Mixture-ticks in which at least one reaction ran.
    pub reacting_total: u64,
}

impl GasReactionOp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle() -> AtmosOpHandle {
        AtmosOpHandle::new(Box::new(Self::new()))
    }
}

impl AtmosOp for GasReactionOp {
    fn name(&self) -> &str {
        "GasReaction"
    }

    fn update_sim(&mut self, sim: &mut Simulation) {
        let tick = sim.engine.react_store(&mut sim.station.mixtures, &sim.config);
        self.reacting_total += tick.reacting_mixtures as u64;
        sim.pending_exposures.extend(tick.exposures);
    }
}
