pub mod config;
pub mod constants;
pub mod error;
pub mod gas;
pub mod gas_mixture;
pub mod heat_exchanger;
pub mod mixture_store;
pub mod reaction_curves;
pub mod reaction_engine;
pub mod reactions;
pub mod sim;
pub mod sim_op;

pub use config::AtmosConfig;
pub use error::{AtmosError, AtmosResult};
pub use gas::{Gas, SpecificHeats};
pub use gas_mixture::{GasMixture, ReactionTag};
pub use heat_exchanger::{DeviceId, DeviceLookup, HeatExchanger};
pub use mixture_store::{MixtureId, MixtureStore};
pub use reaction_engine::ReactionEngine;
pub use reactions::{HotspotExposure, HotspotSink, ReactionContext, ReactionKind, ReactionResult};
