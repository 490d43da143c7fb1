// Catalog-wide reaction checks
// Sweeps every reaction over random mixtures and checks the bookkeeping holds

use atmos_reactions::constants::{DEFAULT_HEAT_SCALE, TCMB};
use atmos_reactions::gas::{Gas, SpecificHeats};
use atmos_reactions::gas_mixture::{GasMixture, ReactionTag};
use atmos_reactions::reactions::{HotspotExposure, ReactionContext, ReactionKind, ReactionResult};
use atmos_reactions::{AtmosConfig, ReactionEngine};
use glam::IVec2;
use more_asserts::{assert_ge, assert_gt};
use rand::Rng;

fn react(
    kind: ReactionKind,
    mixture: &mut GasMixture,
    heats: &SpecificHeats,
) -> (ReactionResult, Vec<HotspotExposure>) {
    let mut hotspots = Vec::new();
    let result = {
        let mut ctx = ReactionContext {
            heats,
            heat_scale: DEFAULT_HEAT_SCALE,
            location: Some(IVec2::ZERO),
            hotspots: &mut hotspots,
        };
        kind.react(mixture, &mut ctx)
    };
    (result, hotspots)
}

fn random_mixture(rng: &mut impl Rng) -> GasMixture {
    let volume = rng.random_range(1.0..5000.0);
    let mut mixture = GasMixture::new(volume, rng.random_range(TCMB..20_000.0));
    for gas in Gas::ALL {
        // a third of the species absent, to hit the missing-reactant paths
        if rng.random_bool(2.0 / 3.0) {
            mixture.set_moles(gas, rng.random_range(0.0..500.0));
        }
    }
    mixture
}

#[test]
fn test_moles_never_go_negative() {
    let heats = SpecificHeats::default();
    let mut rng = rand::rng();

    for _ in 0..2_000 {
        let start = random_mixture(&mut rng);
        for kind in ReactionKind::CATALOG {
            let mut mixture = start.clone();
            react(kind, &mut mixture, &heats);

            for gas in Gas::ALL {
                assert_ge!(
                    mixture.moles(gas),
                    0.0,
                    "{} left negative {} from {:?}",
                    kind.name(),
                    gas.as_str(),
                    start
                );
            }
            assert!(mixture.temperature().is_finite(), "{} produced {:?}", kind.name(), mixture);
            assert_ge!(mixture.temperature(), TCMB);
            assert_eq!(mixture.volume(), start.volume());
        }
    }
}

#[test]
fn test_empty_mixture_is_inert_for_every_reaction() {
    let heats = SpecificHeats::default();
    for temperature in [TCMB, 293.15, 1_000.0, 50_000.0] {
        for kind in ReactionKind::CATALOG {
            let mut mixture = GasMixture::new(2500.0, temperature);
            let before = mixture.clone();
            let (result, hotspots) = react(kind, &mut mixture, &heats);

            assert_eq!(result, ReactionResult::NoReaction, "{} at {}K", kind.name(), temperature);
            assert_eq!(mixture, before);
            assert!(hotspots.is_empty());
        }
    }
}

#[test]
fn test_missing_reactant_leaves_mixture_identical() {
    let heats = SpecificHeats::default();
    // every species but the one each reaction cannot do without
    let cases = [
        (ReactionKind::AmmoniaOxygenFire, Gas::Ammonia),
        (ReactionKind::AmmoniaOxygenFire, Gas::Oxygen),
        (ReactionKind::PlasmaOxygenFire, Gas::Plasma),
        (ReactionKind::PlasmaOxygenFire, Gas::Oxygen),
        (ReactionKind::TritiumOxygenFire, Gas::Tritium),
        (ReactionKind::TritiumOxygenFire, Gas::Oxygen),
        (ReactionKind::PlasmaSteamToTritium, Gas::WaterVapor),
        (ReactionKind::PlasmaSteamToTritium, Gas::Plasma),
        (ReactionKind::NitrousOxideDecomposition, Gas::NitrousOxide),
        (ReactionKind::FrezonOxygenDissipation, Gas::Frezon),
        (ReactionKind::FrezonOxygenDissipation, Gas::Oxygen),
        (ReactionKind::FrezonPlasmaCooldown, Gas::Frezon),
        (ReactionKind::FrezonPlasmaCooldown, Gas::Plasma),
        (ReactionKind::FrezonDecomposition, Gas::Frezon),
    ];

    for (kind, missing) in cases {
        let mut mixture = GasMixture::new(2500.0, 800.0);
        for gas in Gas::ALL {
            if gas != missing {
                mixture.set_moles(gas, 10.0);
            }
        }
        let before = mixture.clone();
        let (result, _) = react(kind, &mut mixture, &heats);

        assert_eq!(
            result,
            ReactionResult::NoReaction,
            "{} without {}",
            kind.name(),
            missing.as_str()
        );
        assert_eq!(mixture, before, "{} without {}", kind.name(), missing.as_str());
    }
}

#[test]
fn test_hot_ammonia_oxygen_burns() {
    let heats = SpecificHeats::default();
    let mut mixture = GasMixture::new(1.0, 600.0)
        .with_moles(Gas::Oxygen, 5.0)
        .with_moles(Gas::Ammonia, 5.0);

    let (result, _) = react(ReactionKind::AmmoniaOxygenFire, &mut mixture, &heats);

    assert_eq!(result, ReactionResult::Reacting);
    assert_gt!(mixture.reaction_results.get(ReactionTag::Fire), 0.0);
    assert!(mixture.moles(Gas::Oxygen) < 5.0 && mixture.moles(Gas::Ammonia) < 5.0);
    assert!(mixture.moles(Gas::NitrousOxide) > 0.0 && mixture.moles(Gas::WaterVapor) > 0.0);
    assert_gt!(mixture.temperature(), 600.0);
}

#[test]
fn test_plasma_without_oxygen_is_inert() {
    let heats = SpecificHeats::default();
    let mut mixture = GasMixture::new(2500.0, 300.0)
        .with_moles(Gas::Oxygen, 0.0)
        .with_moles(Gas::Plasma, 5.0);
    let before = mixture.clone();

    let (result, _) = react(ReactionKind::PlasmaOxygenFire, &mut mixture, &heats);

    assert_eq!(result, ReactionResult::NoReaction);
    assert_eq!(mixture, before);
}

#[test]
fn test_fire_scratch_reflects_last_fire_reaction() {
    // the tritium burn runs after the plasma burn and resets Fire on entry,
    // so a pass with no tritium ends with Fire at zero
    let config = AtmosConfig::default();
    let engine = ReactionEngine::new(&config);
    let mut mixture = GasMixture::new(2500.0, 1200.0)
        .with_moles(Gas::Oxygen, 40.0)
        .with_moles(Gas::Plasma, 60.0);
    let mut hotspots: Vec<HotspotExposure> = Vec::new();
    let mut ctx = ReactionContext {
        heats: &config.specific_heats,
        heat_scale: config.heat_scale,
        location: Some(IVec2::new(0, 0)),
        hotspots: &mut hotspots,
    };

    assert_eq!(engine.react(&mut mixture, &mut ctx), ReactionResult::Reacting);
    assert_eq!(mixture.reaction_results.get(ReactionTag::Fire), 0.0);
    // the plasma burn still reported its hotspot
    assert_eq!(hotspots.len(), 1);
}

#[test]
fn test_catalog_order_changes_outcome() {
    // running nitrous decomposition before the plasma burn means it sees the
    // cooler starting temperature
    let config = AtmosConfig::default();
    let heats = &config.specific_heats;
    let start = GasMixture::new(2500.0, 560.0)
        .with_moles(Gas::Oxygen, 40.0)
        .with_moles(Gas::Plasma, 60.0)
        .with_moles(Gas::NitrousOxide, 10.0);

    let mut in_order = start.clone();
    react(ReactionKind::PlasmaOxygenFire, &mut in_order, heats);
    react(ReactionKind::NitrousOxideDecomposition, &mut in_order, heats);

    let mut reversed = start.clone();
    react(ReactionKind::NitrousOxideDecomposition, &mut reversed, heats);
    react(ReactionKind::PlasmaOxygenFire, &mut reversed, heats);

    assert!(in_order.moles(Gas::NitrousOxide) < 10.0);
    assert_eq!(reversed.moles(Gas::NitrousOxide), 10.0);
}
