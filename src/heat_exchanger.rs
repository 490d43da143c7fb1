//! Heat exchanger devices: a pipe segment trading heat with the air around it.
//!
//! Each tick a device convects with the surrounding mixture and radiates as a
//! black body, either toward that mixture or, in vacuum, toward the cosmic
//! background. Neither step may carry a side past the other's temperature.

use crate::config::AtmosConfig;
use crate::constants::{
    CONVECTION_DENSITY_EXPONENT, CONVECTION_DENSITY_FACTOR, COUPLED_OUTLET_FRACTION,
    DEFAULT_CONVECTION_COEFFICIENT, DEFAULT_PIPE_NAME, DEFAULT_RADIATION_AREA,
    MINIMUM_HEAT_CAPACITY, STEFAN_BOLTZMANN, TCMB,
};
use crate::gas_mixture::GasMixture;
use crate::mixture_store::{MixtureId, MixtureStore};
use glam::IVec2;
use log::trace;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeviceId(pub usize);

/// What the host world answers for a device.
pub trait DeviceLookup {
    fn is_tile_air_blocked(&self, tile: IVec2) -> bool;

    /// Tile the device sits on; `None` when it is not on a grid.
    fn device_tile(&self, device: DeviceId) -> Option<IVec2>;

    fn pipe_node(&self, device: DeviceId, name: &str) -> Option<MixtureId>;

    /// Air the device sits in. `None` means vacuum.
    fn containing_mixture(
        &self,
        device: DeviceId,
        include_device_volume: bool,
        exclude_blocked: bool,
    ) -> Option<MixtureId>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExchangerPipes {
    Single(String),
    /// Two-port layout. Inlet and outlet are exchanged as one mixture and
    /// split back afterwards.
    Coupled { inlet: String, outlet: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeOutcome {
    Exchanged,
    TileBlocked,
    MissingPipe,
    /// The host named a containing mixture the store does not hold.
    MissingEnvironment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatExchanger {
    pub device: DeviceId,
    pub pipes: ExchangerPipes,
    pub convection_coefficient: f32,
    /// Radiating area in m².
    pub surface_area: f32,
}

impl HeatExchanger {
    pub fn new(device: DeviceId) -> Self {
        Self {
            device,
            pipes: ExchangerPipes::Single(DEFAULT_PIPE_NAME.to_string()),
            convection_coefficient: DEFAULT_CONVECTION_COEFFICIENT,
            surface_area: DEFAULT_RADIATION_AREA,
        }
    }

    pub fn coupled(device: DeviceId, inlet: &str, outlet: &str) -> Self {
        Self {
            pipes: ExchangerPipes::Coupled {
                inlet: inlet.to_string(),
                outlet: outlet.to_string(),
            },
            ..Self::new(device)
        }
    }

    pub fn with_convection_coefficient(mut self, coefficient: f32) -> Self {
        self.convection_coefficient = coefficient;
        self
    }

    pub fn with_surface_area(mut self, area: f32) -> Self {
        self.surface_area = area;
        self
    }

    /// Run one tick of `dt` seconds for this device.
    pub fn exchange_heat<L: DeviceLookup + ?Sized>(
        &self,
        lookup: &L,
        store: &mut MixtureStore,
        config: &AtmosConfig,
        dt: f32,
    ) -> ExchangeOutcome {
        if let Some(tile) = lookup.device_tile(self.device) {
            if lookup.is_tile_air_blocked(tile) {
                trace!("heat exchanger {:?} skipped: tile {} is blocked", self.device, tile);
                return ExchangeOutcome::TileBlocked;
            }
        }

        let environment = lookup.containing_mixture(self.device, true, true);
        if let Some(env) = environment {
            if store.get(env).is_none() {
                trace!("heat exchanger {:?} skipped: unknown environment {:?}", self.device, env);
                return ExchangeOutcome::MissingEnvironment;
            }
        }

        match &self.pipes {
            ExchangerPipes::Single(name) => {
                let Some(pipe) = lookup.pipe_node(self.device, name) else {
                    trace!("heat exchanger {:?} skipped: no pipe node {}", self.device, name);
                    return ExchangeOutcome::MissingPipe;
                };
                self.exchange_pipe(pipe, environment, store, config, dt)
            }
            ExchangerPipes::Coupled { inlet, outlet } => {
                let (Some(inlet_id), Some(outlet_id)) =
                    (lookup.pipe_node(self.device, inlet), lookup.pipe_node(self.device, outlet))
                else {
                    trace!(
                        "heat exchanger {:?} skipped: missing {} or {}",
                        self.device,
                        inlet,
                        outlet
                    );
                    return ExchangeOutcome::MissingPipe;
                };
                self.exchange_coupled(inlet_id, outlet_id, environment, store, config, dt)
            }
        }
    }

    fn exchange_pipe(
        &self,
        pipe: MixtureId,
        environment: Option<MixtureId>,
        store: &mut MixtureStore,
        config: &AtmosConfig,
        dt: f32,
    ) -> ExchangeOutcome {
        match environment {
            Some(env) => {
                let Some((pipe_air, env_air)) = store.get2_mut(pipe, env) else {
                    return ExchangeOutcome::MissingPipe;
                };
                self.exchange_with_environment(pipe_air, env_air, config, dt);
            }
            None => {
                let Some(pipe_air) = store.get_mut(pipe) else {
                    return ExchangeOutcome::MissingPipe;
                };
                self.radiate_to_space(pipe_air, config, dt);
            }
        }
        ExchangeOutcome::Exchanged
    }

    fn exchange_coupled(
        &self,
        inlet: MixtureId,
        outlet: MixtureId,
        environment: Option<MixtureId>,
        store: &mut MixtureStore,
        config: &AtmosConfig,
        dt: f32,
    ) -> ExchangeOutcome {
        let (Some(inlet_air), Some(outlet_air)) = (store.get(inlet), store.get(outlet)) else {
            return ExchangeOutcome::MissingPipe;
        };

        let mut working = inlet_air.clone();
        if inlet != outlet {
            working.merge(outlet_air, &config.specific_heats, config.heat_scale);
        }

        match environment.and_then(|env| store.get_mut(env)) {
            Some(env_air) => self.exchange_with_environment(&mut working, env_air, config, dt),
            None => self.radiate_to_space(&mut working, config, dt),
        }

        if inlet == outlet {
            if let Some(air) = store.get_mut(inlet) {
                air.replace_contents(&working);
            }
            return ExchangeOutcome::Exchanged;
        }

        let outlet_share = working.remove_ratio(COUPLED_OUTLET_FRACTION);
        if let Some((inlet_air, outlet_air)) = store.get2_mut(inlet, outlet) {
            inlet_air.replace_contents(&working);
            outlet_air.replace_contents(&outlet_share);
        }
        ExchangeOutcome::Exchanged
    }

    fn exchange_with_environment(
        &self,
        pipe: &mut GasMixture,
        env: &mut GasMixture,
        config: &AtmosConfig,
        dt: f32,
    ) {
        self.convect(pipe, env, config, dt);
        self.radiate(pipe, env, config, dt);
    }

    /// Convection scales with how dense the surrounding air is and moves
    /// both sides or neither.
    fn convect(&self, pipe: &mut GasMixture, env: &mut GasMixture, config: &AtmosConfig, dt: f32) {
        let delta = env.temperature() - pipe.temperature();
        if delta == 0.0 {
            return;
        }

        let pipe_capacity = config.heat_capacity(pipe, true);
        let env_capacity = config.heat_capacity(env, true);
        if pipe_capacity <= MINIMUM_HEAT_CAPACITY || env_capacity <= MINIMUM_HEAT_CAPACITY {
            return;
        }

        let density = env_convection_coefficient(env.total_moles(), env.volume());
        let energy = self.convection_coefficient * density * delta.abs() * dt;
        let energy = energy.min(equilibrium_energy(delta, pipe_capacity, env_capacity));

        let direction = delta.signum();
        pipe.set_temperature(pipe.temperature() + direction * energy / pipe_capacity);
        env.set_temperature(env.temperature() - direction * energy / env_capacity);
    }

    /// Black-body exchange. Each side moves if it can hold heat.
    fn radiate(&self, pipe: &mut GasMixture, env: &mut GasMixture, config: &AtmosConfig, dt: f32) {
        let delta = env.temperature() - pipe.temperature();
        if delta == 0.0 {
            return;
        }

        let pipe_capacity = config.heat_capacity(pipe, true);
        let env_capacity = config.heat_capacity(env, true);
        let pipe_moves = pipe_capacity > MINIMUM_HEAT_CAPACITY;
        let env_moves = env_capacity > MINIMUM_HEAT_CAPACITY;

        let cap = match (pipe_moves, env_moves) {
            (true, true) => equilibrium_energy(delta, pipe_capacity, env_capacity),
            (true, false) => delta.abs() * pipe_capacity,
            (false, true) => delta.abs() * env_capacity,
            (false, false) => return,
        };
        let energy = (self.radiated_power(env.temperature(), pipe.temperature()) * dt).min(cap);

        let direction = delta.signum();
        if pipe_moves {
            pipe.set_temperature(pipe.temperature() + direction * energy / pipe_capacity);
        }
        if env_moves {
            env.set_temperature(env.temperature() - direction * energy / env_capacity);
        }
    }

    fn radiate_to_space(&self, pipe: &mut GasMixture, config: &AtmosConfig, dt: f32) {
        let excess = pipe.temperature() - TCMB;
        if excess <= 0.0 {
            return;
        }
        let capacity = config.heat_capacity(pipe, true);
        if capacity <= MINIMUM_HEAT_CAPACITY {
            return;
        }

        let energy = (self.radiated_power(pipe.temperature(), TCMB) * dt).min(excess * capacity);
        pipe.set_temperature(pipe.temperature() - energy / capacity);
    }

    fn radiated_power(&self, a: f32, b: f32) -> f32 {
        STEFAN_BOLTZMANN * self.surface_area * (a.powi(4) - b.powi(4)).abs()
    }
}

/// `(1 - 1/((500·n + V)/V))^0.75`: 0 for empty air, approaching 1 as it
/// gets denser.
pub fn env_convection_coefficient(total_moles: f32, volume: f32) -> f32 {
    let density_term = (CONVECTION_DENSITY_FACTOR * total_moles + volume) / volume;
    (1.0 - 1.0 / density_term).max(0.0).powf(CONVECTION_DENSITY_EXPONENT)
}

/// Energy that brings two bodies exactly to a common temperature.
fn equilibrium_energy(delta: f32, a_capacity: f32, b_capacity: f32) -> f32 {
    delta.abs() * a_capacity * b_capacity / (a_capacity + b_capacity)
}
