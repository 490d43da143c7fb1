// src/sim/station.rs - In-memory host world: tiles, devices and their pipes

use crate::gas_mixture::GasMixture;
use crate::heat_exchanger::{DeviceId, DeviceLookup, HeatExchanger};
use crate::mixture_store::{MixtureId, MixtureStore};
use glam::IVec2;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct TileState {
    pub air: Option<MixtureId>,
    /// Walls and similar. Blocked tiles neither feed nor host heat exchange.
    pub blocked: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DeviceState {
    pub tile: Option<IVec2>,
    pub pipes: HashMap<String, MixtureId>,
}

/// Tile and device layout. This is the part of the station the heat
/// exchanger queries.
#[derive(Debug, Clone, Default)]
pub struct StationGrid {
    tiles: HashMap<IVec2, TileState>,
    devices: Vec<DeviceState>,
}

impl StationGrid {
    pub fn tile(&self, location: IVec2) -> Option<&TileState> {
        self.tiles.get(&location)
    }

    pub fn device(&self, device: DeviceId) -> Option<&DeviceState> {
        self.devices.get(device.0)
    }
}

impl DeviceLookup for StationGrid {
    fn is_tile_air_blocked(&self, tile: IVec2) -> bool {
        self.tiles.get(&tile).is_some_and(|state| state.blocked)
    }

    fn device_tile(&self, device: DeviceId) -> Option<IVec2> {
        self.devices.get(device.0).and_then(|state| state.tile)
    }

    fn pipe_node(&self, device: DeviceId, name: &str) -> Option<MixtureId> {
        self.devices
            .get(device.0)
            .and_then(|state| state.pipes.get(name).copied())
    }

    // Devices here hold no gas of their own, so `include_device_volume` has
    // nothing to add.
    fn containing_mixture(
        &self,
        device: DeviceId,
        _include_device_volume: bool,
        exclude_blocked: bool,
    ) -> Option<MixtureId> {
        let tile = self.device_tile(device)?;
        let state = self.tiles.get(&tile)?;
        if exclude_blocked && state.blocked {
            return None;
        }
        state.air
    }
}

/// Everything one simulation runs over.
#[derive(Debug, Clone, Default)]
pub struct Station {
    pub grid: StationGrid,
    pub mixtures: MixtureStore,
    pub exchangers: Vec<HeatExchanger>,
}

impl Station {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a tile. `None` air makes it a vacuum tile.
    pub fn add_tile(&mut self, location: IVec2, air: Option<GasMixture>) -> Option<MixtureId> {
        let air = air.map(|mixture| self.mixtures.insert_tile_air(mixture, location));
        self.grid.tiles.insert(location, TileState { air, blocked: false });
        air
    }

    pub fn set_blocked(&mut self, location: IVec2, blocked: bool) {
        self.grid.tiles.entry(location).or_default().blocked = blocked;
    }

    pub fn tile_air(&self, location: IVec2) -> Option<MixtureId> {
        self.grid.tiles.get(&location).and_then(|state| state.air)
    }

    /// A pipe network or canister; contained gas never starts fires.
    pub fn add_pipe(&mut self, mixture: GasMixture) -> MixtureId {
        self.mixtures.insert(mixture)
    }

    pub fn add_device(&mut self, tile: Option<IVec2>) -> DeviceId {
        let id = DeviceId(self.grid.devices.len());
        self.grid.devices.push(DeviceState {
            tile,
            pipes: HashMap::new(),
        });
        id
    }

    /// Attach `pipe` to `device` under the node name `name`. Unknown devices
    /// are ignored.
    pub fn connect(&mut self, device: DeviceId, name: &str, pipe: MixtureId) {
        if let Some(state) = self.grid.devices.get_mut(device.0) {
            state.pipes.insert(name.to_string(), pipe);
        }
    }

    pub fn add_heat_exchanger(&mut self, exchanger: HeatExchanger) {
        self.exchangers.push(exchanger);
    }

    pub fn mixture(&self, id: MixtureId) -> Option<&GasMixture> {
        self.mixtures.get(id)
    }
}
