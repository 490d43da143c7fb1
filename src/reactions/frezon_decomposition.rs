//! Frezon breaking down into oxygen once it warms past freezing.

use crate::constants::T0C;
use crate::gas::Gas;
use crate::gas_mixture::GasMixture;
use crate::reaction_curves::min_temperature_asymptote;
use crate::reactions::{ReactionContext, ReactionResult};

pub const MINIMUM_TEMPERATURE: f32 = T0C;
pub const HALF_STEP_TEMPERATURE: f32 = 1000.0;

pub fn react(mixture: &mut GasMixture, ctx: &mut ReactionContext) -> ReactionResult {
    let temperature = mixture.temperature();
    let total_energy = ctx.thermal_energy(mixture);
    let frezon = mixture.moles(Gas::Frezon);

    if frezon <= 0.0 {
        return ReactionResult::NoReaction;
    }

    let conversion_ratio =
        min_temperature_asymptote(temperature, MINIMUM_TEMPERATURE, HALF_STEP_TEMPERATURE);
    if conversion_ratio <= 0.0 {
        return ReactionResult::NoReaction;
    }

    let moles_decomposed = frezon * conversion_ratio;

    mixture.adjust_moles(Gas::Frezon, -moles_decomposed);
    mixture.adjust_moles(Gas::Oxygen, moles_decomposed);

    // no enthalpy, but the swap to oxygen changes the heat capacity
    ctx.commit_energy(mixture, total_energy);

    ReactionResult::Reacting
}
