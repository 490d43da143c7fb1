//! Frezon dissipating in oxygen. Frezon is destroyed and the mixture pays a
//! large energy cost for it; the oxygen is untouched.

use crate::constants::T0C;
use crate::gas::Gas;
use crate::gas_mixture::GasMixture;
use crate::reaction_curves::min_temperature_asymptote;
use crate::reactions::{ReactionContext, ReactionResult};

// Deleting frezon also removes its large heat capacity, so the energy cost has
// to be high for the reaction to cool at all.
pub const ENERGY_PER_MOLE: f32 = 250e3;
pub const MINIMUM_TEMPERATURE: f32 = T0C - 30.0;
pub const HALF_STEP_TEMPERATURE: f32 = 80.0;

pub fn react(mixture: &mut GasMixture, ctx: &mut ReactionContext) -> ReactionResult {
    let temperature = mixture.temperature();
    let mut total_energy = ctx.thermal_energy(mixture);
    let oxygen = mixture.moles(Gas::Oxygen);
    let frezon = mixture.moles(Gas::Frezon);

    if oxygen <= 0.0 || frezon <= 0.0 {
        return ReactionResult::NoReaction;
    }

    let mut conversion_ratio = 1.0;
    conversion_ratio *=
        min_temperature_asymptote(temperature, MINIMUM_TEMPERATURE, HALF_STEP_TEMPERATURE);
    conversion_ratio *= (frezon + oxygen) / mixture.total_moles();

    if conversion_ratio <= 0.0 {
        return ReactionResult::NoReaction;
    }

    let moles_reacted = oxygen.min(frezon) * conversion_ratio;

    total_energy -= moles_reacted * ENERGY_PER_MOLE / ctx.heat_scale;

    mixture.adjust_moles(Gas::Frezon, -moles_reacted);

    ctx.commit_energy(mixture, total_energy);

    ReactionResult::Reacting
}
