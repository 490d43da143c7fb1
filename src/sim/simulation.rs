use crate::config::AtmosConfig;
use crate::error::AtmosResult;
use crate::reaction_engine::ReactionEngine;
use crate::reactions::HotspotExposure;
use crate::sim::station::Station;
use crate::sim_op::{AtmosOp, AtmosOpHandle};
use log::debug;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct OpTiming {
    pub op_name: String,
    pub init_time: Duration,
    pub total_update_time: Duration,
    pub update_call_count: u32,
    pub after_time: Duration,
}

impl OpTiming {
    pub fn new(op_name: String) -> Self {
        Self {
            op_name,
            init_time: Duration::ZERO,
            total_update_time: Duration::ZERO,
            update_call_count: 0,
            after_time: Duration::ZERO,
        }
    }

    pub fn avg_update_time(&self) -> Duration {
        if self.update_call_count > 0 {
            self.total_update_time / self.update_call_count
        } else {
            Duration::ZERO
        }
    }

    pub fn total_time(&self) -> Duration {
        self.init_time + self.total_update_time + self.after_time
    }
}

/// A hotspot exposure handed off during a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotspotRecord {
    pub step: u32,
    pub exposure: HotspotExposure,
}

pub struct Simulation {
    pub station: Station,
    pub config: AtmosConfig,
    pub engine: ReactionEngine,
    pub ops: Vec<Box<dyn AtmosOp>>,
    /// Ticks completed so far.
    pub step: u32,
    /// Seconds per tick.
    pub dt: f32,
    /// Exposures raised this tick and not yet handed off.
    pub pending_exposures: Vec<HotspotExposure>,
    pub hotspot_log: Vec<HotspotRecord>,
    pub op_timings: Vec<OpTiming>,
    initialized: bool,
}

pub struct SimProps {
    pub station: Station,
    pub config: AtmosConfig,
    pub ops: Vec<AtmosOpHandle>,
    pub dt: f32,
}

impl Simulation {
    pub fn new(props: SimProps) -> Simulation {
        let ops: Vec<Box<dyn AtmosOp>> = props.ops.into_iter().map(|handle| handle.op).collect();
        let op_timings = ops.iter().map(|op| OpTiming::new(op.name().to_string())).collect();

        Simulation {
            station: props.station,
            engine: ReactionEngine::new(&props.config),
            config: props.config,
            ops,
            step: 0,
            dt: props.dt,
            pending_exposures: Vec::new(),
            hotspot_log: Vec::new(),
            op_timings,
            initialized: false,
        }
    }

    /// Get the current simulation step number
    pub fn current_step(&self) -> u32 {
        self.step
    }

    /// Advance one tick. The first call also runs every operator's `init_sim`.
    pub fn step(&mut self) {
        if !self.initialized {
            self.simulate_init();
            self.initialized = true;
        }
        self.simulate_step();
        self.step += 1;
    }

    /// Run a single tick with custom operators instead of the configured ones
    /// (for testing)
    pub fn step_with_ops(&mut self, ops: &mut [&mut dyn AtmosOp]) {
        for op in ops.iter_mut() {
            op.update_sim(self);
        }
        self.step += 1;
    }

    /// Run `steps` ticks, then let the operators wrap up.
    pub fn run(&mut self, steps: u32) {
        for _ in 0..steps {
            self.step();
        }
        self.finish();
        self.log_timing_report();
    }

    /// Call every operator's `after_sim`.
    pub fn finish(&mut self) {
        let mut ops = std::mem::take(&mut self.ops);

        for (i, op) in ops.iter_mut().enumerate() {
            let start = Instant::now();
            op.after_sim(self);
            self.op_timings[i].after_time = start.elapsed();
        }
        self.ops = ops;
    }

    /// Swap in a new config snapshot. A rejected config leaves the old one in
    /// place.
    pub fn reload_config(&mut self, config: AtmosConfig) -> AtmosResult<()> {
        config.validate()?;
        self.engine = ReactionEngine::new(&config);
        debug!(
            "atmos config reloaded: heat_scale={} reactions={} parallel={}",
            config.heat_scale,
            self.engine.reactions().len(),
            config.parallel_reactions
        );
        self.config = config;
        Ok(())
    }

    fn simulate_init(&mut self) {
        let mut ops = std::mem::take(&mut self.ops);

        for (i, op) in ops.iter_mut().enumerate() {
            let start = Instant::now();
            op.init_sim(self);
            self.op_timings[i].init_time = start.elapsed();
        }
        self.ops = ops;
    }

    fn simulate_step(&mut self) {
        let mut ops = std::mem::take(&mut self.ops);

        for (i, op) in ops.iter_mut().enumerate() {
            let start = Instant::now();
            op.update_sim(self);
            self.op_timings[i].total_update_time += start.elapsed();
            self.op_timings[i].update_call_count += 1;
        }
        self.ops = ops;
    }

    pub fn log_timing_report(&self) {
        let total_time: Duration = self.op_timings.iter().map(OpTiming::total_time).sum();

        debug!(
            "timing report: {} steps, {:.2}ms total",
            self.step,
            total_time.as_secs_f64() * 1000.0
        );
        for timing in &self.op_timings {
            debug!(
                "  {:<20} total {:>8.3}ms  avg/step {:>8.3}ms  init {:>6.3}ms  after {:>6.3}ms",
                timing.op_name,
                timing.total_time().as_secs_f64() * 1000.0,
                timing.avg_update_time().as_secs_f64() * 1000.0,
                timing.init_time.as_secs_f64() * 1000.0,
                timing.after_time.as_secs_f64() * 1000.0
            );
        }
    }
}
