//! Tritium burning in oxygen: 2 T2 + O2 -> 2 H2O.

use crate::constants::T0C;
use crate::gas::Gas;
use crate::gas_mixture::{GasMixture, ReactionTag};
use crate::reaction_curves::{ideal_ratio_multiplier, min_temperature_asymptote};
use crate::reactions::{ReactionContext, ReactionResult};

pub const ENERGY_PER_MOLE: f32 = 482e3; // per complete reaction, two moles of tritium
pub const MINIMUM_TEMPERATURE: f32 = T0C + 225.0;
pub const HALF_STEP_TEMPERATURE: f32 = 100.0;
pub const OXYGEN_RATIO: f32 = 1.0 / 3.0;

pub fn react(mixture: &mut GasMixture, ctx: &mut ReactionContext) -> ReactionResult {
    mixture.reaction_results.set(ReactionTag::Fire, 0.0);

    let temperature = mixture.temperature();
    let mut total_energy = ctx.thermal_energy(mixture);
    let oxygen = mixture.moles(Gas::Oxygen);
    let tritium = mixture.moles(Gas::Tritium);
    let steam = mixture.moles(Gas::WaterVapor);

    if oxygen <= 0.0 || tritium <= 0.0 {
        return ReactionResult::NoReaction;
    }

    let mut conversion_ratio = 1.0;
    conversion_ratio *= ideal_ratio_multiplier(OXYGEN_RATIO, oxygen, tritium);
    conversion_ratio *=
        min_temperature_asymptote(temperature, MINIMUM_TEMPERATURE, HALF_STEP_TEMPERATURE);
    conversion_ratio *= (oxygen + tritium) / (mixture.total_moles() - steam);

    if conversion_ratio <= 0.0 {
        return ReactionResult::NoReaction;
    }

    // moles of tritium; oxygen goes at half that
    let moles_converted = (oxygen * 0.5).min(tritium) * conversion_ratio;

    total_energy += ENERGY_PER_MOLE * 0.5 * moles_converted / ctx.heat_scale;

    mixture.adjust_moles(Gas::Tritium, -moles_converted);
    mixture.adjust_moles(Gas::Oxygen, -moles_converted * 0.5);
    mixture.adjust_moles(Gas::WaterVapor, moles_converted);

    ctx.commit_energy(mixture, total_energy);
    ctx.report_fire(mixture, moles_converted);

    ReactionResult::Reacting
}
