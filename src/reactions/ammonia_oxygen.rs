//! Ammonia burning in oxygen: 2 O2 + 2 NH3 -> N2O + 3 H2O.

use crate::constants::T0C;
use crate::gas::Gas;
use crate::gas_mixture::{GasMixture, ReactionTag};
use crate::reaction_curves::{ideal_ratio_multiplier, min_temperature_asymptote};
use crate::reactions::{ReactionContext, ReactionResult};

pub const ENERGY_PER_MOLE: f32 = 46e3; // J/mol for the complete reaction
pub const MINIMUM_TEMPERATURE: f32 = T0C + 250.0;
pub const HALF_STEP_TEMPERATURE: f32 = 150.0;
pub const OXYGEN_RATIO: f32 = 0.5;

pub fn react(mixture: &mut GasMixture, ctx: &mut ReactionContext) -> ReactionResult {
    mixture.reaction_results.set(ReactionTag::Fire, 0.0);

    let temperature = mixture.temperature();
    let mut total_energy = ctx.thermal_energy(mixture);
    let oxygen = mixture.moles(Gas::Oxygen);
    let ammonia = mixture.moles(Gas::Ammonia);
    let nitrous = mixture.moles(Gas::NitrousOxide);
    let steam = mixture.moles(Gas::WaterVapor);

    if oxygen <= 0.0 || ammonia <= 0.0 {
        return ReactionResult::NoReaction;
    }

    let mut conversion_ratio = 1.0;
    conversion_ratio *= ideal_ratio_multiplier(OXYGEN_RATIO, oxygen, ammonia);
    conversion_ratio *=
        min_temperature_asymptote(temperature, MINIMUM_TEMPERATURE, HALF_STEP_TEMPERATURE);
    // waste products don't slow the burn
    conversion_ratio *= (oxygen + ammonia) / (mixture.total_moles() - (nitrous + steam));

    if conversion_ratio <= 0.0 {
        return ReactionResult::NoReaction;
    }

    let moles_converted = oxygen.min(ammonia) * conversion_ratio;

    // the enthalpy is per complete reaction, which converts two moles of each reactant
    total_energy += ENERGY_PER_MOLE * 0.5 * moles_converted / ctx.heat_scale;

    mixture.adjust_moles(Gas::Ammonia, -moles_converted);
    mixture.adjust_moles(Gas::Oxygen, -moles_converted);
    mixture.adjust_moles(Gas::NitrousOxide, moles_converted * 0.5);
    mixture.adjust_moles(Gas::WaterVapor, moles_converted * 1.5);

    ctx.commit_energy(mixture, total_energy);
    ctx.report_fire(mixture, moles_converted);

    ReactionResult::Reacting
}
