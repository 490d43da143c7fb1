pub mod simulation;
pub mod station;

pub use simulation::{HotspotRecord, OpTiming, SimProps, Simulation};
pub use station::{DeviceState, Station, StationGrid, TileState};
