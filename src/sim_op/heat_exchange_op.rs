/// Heat exchange operation
/// Runs every heat exchanger in the station once per tick, in the order they
/// were added. Exchangers may share an environment, so this stays sequential.

use crate::heat_exchanger::ExchangeOutcome;
use crate::sim::simulation::Simulation;
use crate::sim_op::{AtmosOp, AtmosOpHandle};
use log::debug;

#[derive(Debug, Default)]
pub struct HeatExchangeOp {
    pub exchanged: u64,
    pub skipped: u64,
}

impl HeatExchangeOp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle() -> AtmosOpHandle {
        AtmosOpHandle::new(Box::new(Self::new()))
    }
}

impl AtmosOp for HeatExchangeOp {
    fn name(&self) -> &str {
        "HeatExchange"
    }

    fn update_sim(&mut self, sim: &mut Simulation) {
        let station = &mut sim.station;
        let mut exchanged = 0;
        for exchanger in &station.exchangers {
            let outcome =
                exchanger.exchange_heat(&station.grid, &mut station.mixtures, &sim.config, sim.dt);
            match outcome {
                ExchangeOutcome::Exchanged => exchanged += 1,
                ExchangeOutcome::TileBlocked
                | ExchangeOutcome::MissingPipe
                | ExchangeOutcome::MissingEnvironment => self.skipped += 1,
            }
        }
        self.exchanged += exchanged;

        debug!(
            "step {}: {} of {} heat exchangers active",
            sim.step,
            exchanged,
            station.exchangers.len()
        );
    }
}
