/// Hotspot hand-off operation
/// Drains the exposures queued during the tick into the simulation's hotspot
/// log. Run it last so it sees everything the tick produced.

use crate::sim::simulation::{HotspotRecord, Simulation};
use crate::sim_op::{AtmosOp, AtmosOpHandle};
use log::{debug, trace};

#[derive(Debug, Default)]
pub struct HotspotOp {
    pub hottest: f32,
}

impl HotspotOp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle() -> AtmosOpHandle {
        AtmosOpHandle::new(Box::new(Self::new()))
    }
}

impl AtmosOp for HotspotOp {
    fn name(&self) -> &str {
        "Hotspot"
    }

    fn init_sim(&mut self, sim: &mut Simulation) {
        sim.hotspot_log.clear();
    }

    fn update_sim(&mut self, sim: &mut Simulation) {
        let step = sim.step;
        for exposure in sim.pending_exposures.drain(..) {
            trace!(
                "hotspot at {} : {:.1}K over {:.0}L",
                exposure.location,
                exposure.temperature,
                exposure.volume
            );
            self.hottest = self.hottest.max(exposure.temperature);
            sim.hotspot_log.push(HotspotRecord { step, exposure });
        }
    }

    fn after_sim(&mut self, sim: &mut Simulation) {
        debug!(
            "{} hotspot exposures over {} steps, hottest {:.1}K",
            sim.hotspot_log.len(),
            sim.step,
            self.hottest
        );
    }
}
