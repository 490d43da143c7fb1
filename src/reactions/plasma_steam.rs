//! Plasma splitting steam into tritium and oxygen: H2O -> T2 + ½ O2.
//!
//! Plasma acts as the catalyst and is not consumed. The reaction only runs
//! inside a temperature band and prefers a steam-poor 10:90 mix, which keeps it
//! slow.

use crate::constants::T0C;
use crate::gas::Gas;
use crate::gas_mixture::GasMixture;
use crate::reaction_curves::{finite_band_multiplier, ideal_ratio_multiplier};
use crate::reactions::{ReactionContext, ReactionResult};

pub const MINIMUM_TEMPERATURE: f32 = T0C + 100.0;
pub const PEAK_TEMPERATURE: f32 = T0C + 250.0;
pub const MAXIMUM_TEMPERATURE: f32 = T0C + 500.0;
/// Absorbed per mole of steam split.
pub const ENERGY_PER_MOLE: f32 = 50e3;
pub const STEAM_RATIO: f32 = 0.1;

pub fn react(mixture: &mut GasMixture, ctx: &mut ReactionContext) -> ReactionResult {
    let temperature = mixture.temperature();
    let mut total_energy = ctx.thermal_energy(mixture);
    let plasma = mixture.moles(Gas::Plasma);
    let steam = mixture.moles(Gas::WaterVapor);
    let tritium = mixture.moles(Gas::Tritium);
    let oxygen = mixture.moles(Gas::Oxygen);

    if plasma <= 0.0 || steam <= 0.0 {
        return ReactionResult::NoReaction;
    }

    let mut conversion_ratio = 1.0;
    conversion_ratio *= finite_band_multiplier(
        temperature,
        MINIMUM_TEMPERATURE,
        PEAK_TEMPERATURE,
        MAXIMUM_TEMPERATURE,
    );
    conversion_ratio *= ideal_ratio_multiplier(STEAM_RATIO, steam, plasma);
    // the products only count half against the available share
    conversion_ratio *= (plasma + steam) / (mixture.total_moles() - (oxygen + tritium) * 0.5);

    if conversion_ratio <= 0.0 {
        return ReactionResult::NoReaction;
    }

    let moles_converted = steam.min(plasma / 9.0) * conversion_ratio;

    total_energy -= moles_converted * ENERGY_PER_MOLE / ctx.heat_scale;

    mixture.adjust_moles(Gas::WaterVapor, -moles_converted);
    mixture.adjust_moles(Gas::Oxygen, moles_converted * 0.5);
    mixture.adjust_moles(Gas::Tritium, moles_converted);

    ctx.commit_energy(mixture, total_energy);

    ReactionResult::Reacting
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_HEAT_SCALE;
    use crate::gas_mixture::ReactionTag;
    use crate::reactions::ReactionKind;
    use crate::reactions::test_support::{energy, run};
    use approx::assert_relative_eq;
    use glam::IVec2;
    use more_asserts::{assert_gt, assert_lt};

    fn mixture(plasma: f32, steam: f32, temperature: f32) -> GasMixture {
        GasMixture::new(2500.0, temperature)
            .with_moles(Gas::Plasma, plasma)
            .with_moles(Gas::WaterVapor, steam)
    }

    #[test]
    fn test_peak_conversion() {
        let mut mix = mixture(90.0, 10.0, PEAK_TEMPERATURE);
        let energy_before = energy(&mix);
        let (result, hotspots) =
            run(ReactionKind::PlasmaSteamToTritium, &mut mix, Some(IVec2::ONE));

        assert_eq!(result, ReactionResult::Reacting);
        // band, ratio and share are all 1 here: min(10, 90 / 9) moles split
        assert_relative_eq!(mix.moles(Gas::WaterVapor), 0.0, epsilon = 1e-3);
        assert_relative_eq!(mix.moles(Gas::Tritium), 10.0, max_relative = 1e-4);
        assert_relative_eq!(mix.moles(Gas::Oxygen), 5.0, max_relative = 1e-4);
        assert_eq!(mix.moles(Gas::Plasma), 90.0);
        assert_relative_eq!(
            energy(&mix),
            energy_before - 10.0 * ENERGY_PER_MOLE / DEFAULT_HEAT_SCALE,
            max_relative = 1e-4
        );
        assert_lt!(mix.temperature(), PEAK_TEMPERATURE);
        assert!(hotspots.is_empty());
        assert_eq!(mix.reaction_results.get(ReactionTag::Fire), 0.0);
    }

    #[test]
    fn test_outside_band_is_inert() {
        for temperature in [MINIMUM_TEMPERATURE, MAXIMUM_TEMPERATURE, 300.0, 1200.0] {
            let mut mix = mixture(90.0, 10.0, temperature);
            let before = mix.clone();
            let (result, _) = run(ReactionKind::PlasmaSteamToTritium, &mut mix, None);

            assert_eq!(result, ReactionResult::NoReaction, "at {temperature} K");
            assert_eq!(mix, before);
        }
    }

    #[test]
    fn test_off_ratio_is_slower() {
        let mut ideal = mixture(90.0, 10.0, PEAK_TEMPERATURE);
        let mut wet = mixture(50.0, 50.0, PEAK_TEMPERATURE);

        run(ReactionKind::PlasmaSteamToTritium, &mut ideal, None);
        run(ReactionKind::PlasmaSteamToTritium, &mut wet, None);

        // wet: min(50, 50 / 9) × ratio(0.5) which is well under the ideal 10 moles
        assert_gt!(ideal.moles(Gas::Tritium), wet.moles(Gas::Tritium));
        assert_gt!(wet.moles(Gas::Tritium), 0.0);
    }

    #[test]
    fn test_needs_plasma() {
        let mut mix = mixture(0.0, 10.0, PEAK_TEMPERATURE);
        let (result, _) = run(ReactionKind::PlasmaSteamToTritium, &mut mix, None);
        assert_eq!(result, ReactionResult::NoReaction);
    }
}
