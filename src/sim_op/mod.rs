// Operators run by the simulation each tick, in the order they are given.
pub mod gas_reaction_op;
pub mod heat_exchange_op;
pub mod hotspot_op;

pub use gas_reaction_op::GasReactionOp;
pub use heat_exchange_op::HeatExchangeOp;
pub use hotspot_op::HotspotOp;

use crate::sim::simulation::Simulation;

pub trait AtmosOp {
    /// The name of this operator (for identification and lookup)
    fn name(&self) -> &str;

    /// Called once before the first tick
    fn init_sim(&mut self, _sim: &mut Simulation) {}

    /// Called every tick
    fn update_sim(&mut self, _sim: &mut Simulation) {}

    /// Called once when the simulation finishes
    fn after_sim(&mut self, _sim: &mut Simulation) {}
}

pub struct AtmosOpHandle {
    pub op: Box<dyn AtmosOp>,
}

impl AtmosOpHandle {
    pub fn new(op: Box<dyn AtmosOp>) -> Self {
        AtmosOpHandle { op }
    }

    /// Run one tick of the wrapped operator.
    pub fn execute(&mut self, sim: &mut Simulation) {
        self.op.update_sim(sim);
    }
}

/// The standard tick: heat exchange, then reactions, then hotspot hand-off.
pub fn standard_ops() -> Vec<AtmosOpHandle> {
    vec![HeatExchangeOp::handle(), GasReactionOp::handle(), HotspotOp::handle()]
}
