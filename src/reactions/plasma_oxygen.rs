//! Plasma fire. Plasma and oxygen burn into carbon dioxide, fastest at a
//! 40:60 oxygen to plasma mix.

use crate::constants::T0C;
use crate::gas::Gas;
use crate::gas_mixture::{GasMixture, ReactionTag};
use crate::reaction_curves::{ideal_ratio_multiplier, min_temperature_asymptote};
use crate::reactions::{ReactionContext, ReactionResult};

pub const ENERGY_PER_MOLE: f32 = 2000e3; // per mole of plasma burnt
pub const MINIMUM_TEMPERATURE: f32 = T0C + 200.0;
pub const HALF_STEP_TEMPERATURE: f32 = 1750.0;
pub const OXYGEN_RATIO: f32 = 0.4;

pub fn react(mixture: &mut GasMixture, ctx: &mut ReactionContext) -> ReactionResult {
    mixture.reaction_results.set(ReactionTag::Fire, 0.0);

    let temperature = mixture.temperature();
    let mut total_energy = ctx.thermal_energy(mixture);
    let oxygen = mixture.moles(Gas::Oxygen);
    let plasma = mixture.moles(Gas::Plasma);
    let carbon_dioxide = mixture.moles(Gas::CarbonDioxide);

    if oxygen <= 0.0 || plasma <= 0.0 {
        return ReactionResult::NoReaction;
    }

    let mut conversion_ratio = 1.0;
    conversion_ratio *= ideal_ratio_multiplier(OXYGEN_RATIO, oxygen, plasma);
    conversion_ratio *=
        min_temperature_asymptote(temperature, MINIMUM_TEMPERATURE, HALF_STEP_TEMPERATURE);
    conversion_ratio *= (oxygen + plasma) / (mixture.total_moles() - carbon_dioxide);

    if conversion_ratio <= 0.0 {
        return ReactionResult::NoReaction;
    }

    // keep both burn amounts within what is present for any mix
    let larger_share = OXYGEN_RATIO.max(1.0 - OXYGEN_RATIO);
    let oxygen_factor = OXYGEN_RATIO / larger_share;
    let plasma_factor = (1.0 - OXYGEN_RATIO) / larger_share;

    let plasma_burnt = plasma * conversion_ratio * plasma_factor;
    let oxygen_burnt = oxygen * conversion_ratio * oxygen_factor;

    total_energy += ENERGY_PER_MOLE * plasma_burnt / ctx.heat_scale;

    mixture.adjust_moles(Gas::Plasma, -plasma_burnt);
    mixture.adjust_moles(Gas::Oxygen, -oxygen_burnt);
    mixture.adjust_moles(Gas::CarbonDioxide, plasma_burnt);

    ctx.commit_energy(mixture, total_energy);
    ctx.report_fire(mixture, plasma_burnt + oxygen_burnt);

    ReactionResult::Reacting
}
