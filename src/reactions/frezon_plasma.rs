//! Frezon quenched by plasma. Strongly endothermic; plasma is left intact.

use crate::constants::T0C;
use crate::gas::Gas;
use crate::gas_mixture::GasMixture;
use crate::reaction_curves::{ideal_ratio_multiplier, min_temperature_asymptote};
use crate::reactions::{ReactionContext, ReactionResult};

pub const ENERGY_PER_MOLE: f32 = 1000e3;
pub const MINIMUM_TEMPERATURE: f32 = 0.0;
pub const HALF_STEP_TEMPERATURE: f32 = T0C;
pub const PLASMA_RATIO: f32 = 0.5;

pub fn react(mixture: &mut GasMixture, ctx: &mut ReactionContext) -> ReactionResult {
    let temperature = mixture.temperature();
    let mut total_energy = ctx.thermal_energy(mixture);
    let plasma = mixture.moles(Gas::Plasma);
    let frezon = mixture.moles(Gas::Frezon);

    if plasma <= 0.0 || frezon <= 0.0 {
        return ReactionResult::NoReaction;
    }

    let mut conversion_ratio = 1.0;
    conversion_ratio *= ideal_ratio_multiplier(PLASMA_RATIO, plasma, frezon);
    conversion_ratio *=
        min_temperature_asymptote(temperature, MINIMUM_TEMPERATURE, HALF_STEP_TEMPERATURE);
    conversion_ratio *= (frezon + plasma) / mixture.total_moles();

    if conversion_ratio <= 0.0 {
        return ReactionResult::NoReaction;
    }

    let moles_reacted = plasma.min(frezon) * conversion_ratio;

    total_energy -= moles_reacted * ENERGY_PER_MOLE / ctx.heat_scale;

    mixture.adjust_moles(Gas::Frezon, -moles_reacted);

    ctx.commit_energy(mixture, total_energy);

    ReactionResult::Reacting
}
