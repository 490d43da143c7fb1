//! Nitrous oxide breaking down when hot: N2O -> N2 + ½ O2, releasing heat.

use crate::constants::T0C;
use crate::gas::Gas;
use crate::gas_mixture::GasMixture;
use crate::reaction_curves::min_temperature_asymptote;
use crate::reactions::{ReactionContext, ReactionResult};

pub const ENERGY_PER_MOLE: f32 = 81.55e3; // standard enthalpy of formation
pub const MINIMUM_TEMPERATURE: f32 = T0C + 300.0;
/// Degrees past the minimum at which a quarter of the gas breaks down per tick.
pub const HALF_STEP_TEMPERATURE: f32 = 1500.0;

pub fn react(mixture: &mut GasMixture, ctx: &mut ReactionContext) -> ReactionResult {
    let temperature = mixture.temperature();
    let mut total_energy = ctx.thermal_energy(mixture);
    let nitrous = mixture.moles(Gas::NitrousOxide);

    let conversion_ratio =
        min_temperature_asymptote(temperature, MINIMUM_TEMPERATURE, HALF_STEP_TEMPERATURE);
    let moles_decomposed = nitrous * conversion_ratio;

    if moles_decomposed <= 0.0 {
        return ReactionResult::NoReaction;
    }

    total_energy += moles_decomposed * ENERGY_PER_MOLE / ctx.heat_scale;

    mixture.adjust_moles(Gas::NitrousOxide, -moles_decomposed);
    mixture.adjust_moles(Gas::Nitrogen, moles_decomposed);
    mixture.adjust_moles(Gas::Oxygen, moles_decomposed * 0.5);

    ctx.commit_energy(mixture, total_energy);

    ReactionResult::Reacting
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_HEAT_SCALE;
    use crate::reactions::ReactionKind;
    use crate::reactions::test_support::{energy, run};
    use approx::assert_relative_eq;
    use more_asserts::assert_gt;

    #[test]
    fn test_quarter_decomposes_at_half_step() {
        let mut mix = GasMixture::new(2500.0, MINIMUM_TEMPERATURE + HALF_STEP_TEMPERATURE)
            .with_moles(Gas::NitrousOxide, 40.0);
        let energy_before = energy(&mix);
        let (result, _) = run(ReactionKind::NitrousOxideDecomposition, &mut mix, None);

        assert_eq!(result, ReactionResult::Reacting);
        assert_relative_eq!(mix.moles(Gas::NitrousOxide), 30.0, max_relative = 1e-4);
        assert_relative_eq!(mix.moles(Gas::Nitrogen), 10.0, max_relative = 1e-4);
        assert_relative_eq!(mix.moles(Gas::Oxygen), 5.0, max_relative = 1e-4);
        assert_relative_eq!(
            energy(&mix),
            energy_before + 10.0 * ENERGY_PER_MOLE / DEFAULT_HEAT_SCALE,
            max_relative = 1e-4
        );
    }

    #[test]
    fn test_stable_at_room_temperature() {
        let mut mix = GasMixture::new(2500.0, 293.15).with_moles(Gas::NitrousOxide, 40.0);
        let before = mix.clone();
        let (result, _) = run(ReactionKind::NitrousOxideDecomposition, &mut mix, None);

        assert_eq!(result, ReactionResult::NoReaction);
        assert_eq!(mix, before);
    }

    #[test]
    fn test_no_nitrous_no_reaction() {
        let mut mix = GasMixture::new(2500.0, 3000.0).with_moles(Gas::Oxygen, 40.0);
        let before = mix.clone();
        let (result, _) = run(ReactionKind::NitrousOxideDecomposition, &mut mix, None);

        assert_eq!(result, ReactionResult::NoReaction);
        assert_eq!(mix, before);
    }

    #[test]
    fn test_breakdown_heats_the_mixture() {
        let mut mix = GasMixture::new(2500.0, 1200.0).with_moles(Gas::NitrousOxide, 40.0);
        run(ReactionKind::NitrousOxideDecomposition, &mut mix, None);
        assert_gt!(mix.temperature(), 1200.0);
    }
}
