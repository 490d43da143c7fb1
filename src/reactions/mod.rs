//! The fixed catalog of gas reactions.
//!
//! Each reaction lives in its own module as a `react` function with its
//! constants beside it. `ReactionKind` is the closed list the engine iterates;
//! `ReactionKind::CATALOG` fixes the order, and later reactions see what the
//! earlier ones did to the mixture in the same tick.

pub mod ammonia_oxygen;
pub mod frezon_decomposition;
pub mod frezon_oxygen;
pub mod frezon_plasma;
pub mod nitrous_decomposition;
pub mod plasma_oxygen;
pub mod plasma_steam;
pub mod tritium_oxygen;

use crate::constants::{
    FIRE_MINIMUM_TEMPERATURE_TO_EXIST, FIRE_REPORT_MIN_MOLES, MINIMUM_HEAT_CAPACITY,
};
use crate::gas::SpecificHeats;
use crate::gas_mixture::{GasMixture, ReactionTag};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::ops::BitOr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionResult {
    NoReaction,
    Reacting,
}

impl ReactionResult {
    pub fn is_reacting(self) -> bool {
        self == ReactionResult::Reacting
    }
}

impl BitOr for ReactionResult {
    type Output = ReactionResult;

    fn bitor(self, rhs: ReactionResult) -> ReactionResult {
        if self.is_reacting() || rhs.is_reacting() {
            ReactionResult::Reacting
        } else {
            ReactionResult::NoReaction
        }
    }
}

/// A request to the fire system to ignite or heat a hotspot on a tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotspotExposure {
    pub location: IVec2,
    pub temperature: f32,
    pub volume: f32,
}

/// The ignition collaborator a burning reaction reports to.
pub trait HotspotSink {
    fn hotspot_expose(&mut self, location: IVec2, temperature: f32, volume: f32);
}

impl HotspotSink for Vec<HotspotExposure> {
    fn hotspot_expose(&mut self, location: IVec2, temperature: f32, volume: f32) {
        self.push(HotspotExposure { location, temperature, volume });
    }
}

/// Everything a reaction reads besides the mixture itself.
pub struct ReactionContext<'a> {
    pub heats: &'a SpecificHeats,
    /// Divides enthalpies and specific heats alike.
    pub heat_scale: f32,
    /// Tile holding the mixture; `None` for pipe networks and canisters,
    /// which never start hotspots.
    pub location: Option<IVec2>,
    pub hotspots: &'a mut dyn HotspotSink,
}

impl ReactionContext<'_> {
    pub fn heat_capacity(&self, mixture: &GasMixture) -> f32 {
        mixture.heat_capacity(self.heats, self.heat_scale)
    }

    /// Total thermal energy of the mixture as seen by a reaction.
    pub fn thermal_energy(&self, mixture: &GasMixture) -> f32 {
        self.heat_capacity(mixture) * mixture.temperature()
    }

    /// Write back `total_energy` as a temperature using the post-reaction
    /// heat capacity. Thermally inert mixtures keep their temperature.
    pub fn commit_energy(&self, mixture: &mut GasMixture, total_energy: f32) {
        let new_heat_capacity = self.heat_capacity(mixture);
        if new_heat_capacity > MINIMUM_HEAT_CAPACITY {
            mixture.set_temperature(total_energy / new_heat_capacity);
        }
    }

    /// Accumulate burnt moles into the fire scratch value and expose a hotspot
    /// on the holding tile if the mixture is hot enough to keep a fire alive.
    pub fn report_fire(&mut self, mixture: &mut GasMixture, moles_burnt: f32) {
        if moles_burnt <= FIRE_REPORT_MIN_MOLES {
            return;
        }
        mixture.reaction_results.add(ReactionTag::Fire, moles_burnt);

        if let Some(location) = self.location {
            if mixture.temperature() > FIRE_MINIMUM_TEMPERATURE_TO_EXIST {
                self.hotspots
                    .hotspot_expose(location, mixture.temperature(), mixture.volume());
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    AmmoniaOxygenFire,
    PlasmaOxygenFire,
    TritiumOxygenFire,
    PlasmaSteamToTritium,
    NitrousOxideDecomposition,
    FrezonOxygenDissipation,
    FrezonPlasmaCooldown,
    FrezonDecomposition,
}

impl ReactionKind {
    /// Evaluation order. Reordering changes simulation outcomes.
    pub const CATALOG: [ReactionKind; 8] = [
        ReactionKind::AmmoniaOxygenFire,
        ReactionKind::PlasmaOxygenFire,
        ReactionKind::TritiumOxygenFire,
        ReactionKind::PlasmaSteamToTritium,
        ReactionKind::NitrousOxideDecomposition,
        ReactionKind::FrezonOxygenDissipation,
        ReactionKind::FrezonPlasmaCooldown,
        ReactionKind::FrezonDecomposition,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ReactionKind::AmmoniaOxygenFire => "ammonia_oxygen_fire",
            ReactionKind::PlasmaOxygenFire => "plasma_oxygen_fire",
            ReactionKind::TritiumOxygenFire => "tritium_oxygen_fire",
            ReactionKind::PlasmaSteamToTritium => "plasma_steam_to_tritium",
            ReactionKind::NitrousOxideDecomposition => "nitrous_oxide_decomposition",
            ReactionKind::FrezonOxygenDissipation => "frezon_oxygen_dissipation",
            ReactionKind::FrezonPlasmaCooldown => "frezon_plasma_cooldown",
            ReactionKind::FrezonDecomposition => "frezon_decomposition",
        }
    }

    /// Whether this reaction writes the fire scratch value and can expose hotspots.
    pub fn produces_fire(&self) -> bool {
        matches!(
            self,
            ReactionKind::AmmoniaOxygenFire
                | ReactionKind::PlasmaOxygenFire
                | ReactionKind::TritiumOxygenFire
        )
    }

    pub fn react(&self, mixture: &mut GasMixture, ctx: &mut ReactionContext) -> ReactionResult {
        match self {
            ReactionKind::AmmoniaOxygenFire => ammonia_oxygen::react(mixture, ctx),
            ReactionKind::PlasmaOxygenFire => plasma_oxygen::react(mixture, ctx),
            ReactionKind::TritiumOxygenFire => tritium_oxygen::react(mixture, ctx),
            ReactionKind::PlasmaSteamToTritium => plasma_steam::react(mixture, ctx),
            ReactionKind::NitrousOxideDecomposition => nitrous_decomposition::react(mixture, ctx),
            ReactionKind::FrezonOxygenDissipation => frezon_oxygen::react(mixture, ctx),
            ReactionKind::FrezonPlasmaCooldown => frezon_plasma::react(mixture, ctx),
            ReactionKind::FrezonDecomposition => frezon_decomposition::react(mixture, ctx),
        }
    }
}
