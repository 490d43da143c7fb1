//! Runs the reaction catalog over mixtures.

use crate::config::AtmosConfig;
use crate::gas_mixture::GasMixture;
use crate::mixture_store::{MixtureStore, StoredMixture};
use crate::reactions::{HotspotExposure, ReactionContext, ReactionKind, ReactionResult};
use log::{debug, trace};
use rayon::prelude::*;

/// The enabled subset of the catalog, still in catalog order.
#[derive(Debug, Clone)]
pub struct ReactionEngine {
    reactions: Vec<ReactionKind>,
}

/// What one pass over a store produced.
#[derive(Debug, Clone, Default)]
pub struct ReactionTick {
    pub reacting_mixtures: usize,
    pub exposures: Vec<HotspotExposure>,
}

impl ReactionEngine {
    pub fn new(config: &AtmosConfig) -> Self {
        let reactions = ReactionKind::CATALOG
            .iter()
            .copied()
            .filter(|kind| config.is_enabled(*kind))
            .collect();
        Self { reactions }
    }

    pub fn reactions(&self) -> &[ReactionKind] {
        &self.reactions
    }

    /// Run every enabled reaction against `mixture` in order. Each one sees
    /// the mixture as the previous one left it. Scratch results from the
    /// previous tick are dropped first.
    pub fn react(&self, mixture: &mut GasMixture, ctx: &mut ReactionContext) -> ReactionResult {
        mixture.reaction_results.clear();
        let mut result = ReactionResult::NoReaction;
        for kind in &self.reactions {
            let outcome = kind.react(mixture, ctx);
            if outcome.is_reacting() {
                trace!(
                    "{} fired: T={:.1}K total={:.3}mol",
                    kind.name(),
                    mixture.temperature(),
                    mixture.total_moles()
                );
            }
            result = result | outcome;
        }
        result
    }

    /// React every non-empty mixture in the store. Mixtures are independent, so
    /// with `parallel_reactions` set they are spread across the rayon pool;
    /// exposures come back in mixture order either way.
    pub fn react_store(&self, store: &mut MixtureStore, config: &AtmosConfig) -> ReactionTick {
        let outcomes: Vec<(ReactionResult, Vec<HotspotExposure>)> = if config.parallel_reactions {
            store
                .par_iter_mut()
                .map(|(_, entry)| self.react_entry(entry, config))
                .collect()
        } else {
            store
                .iter_mut()
                .map(|(_, entry)| self.react_entry(entry, config))
                .collect()
        };

        let mut tick = ReactionTick::default();
        for (result, exposures) in outcomes {
            if result.is_reacting() {
                tick.reacting_mixtures += 1;
            }
            tick.exposures.extend(exposures);
        }

        debug!(
            "reaction pass: {} of {} mixtures reacting, {} hotspot exposures",
            tick.reacting_mixtures,
            store.len(),
            tick.exposures.len()
        );
        tick
    }

    fn react_entry(
        &self,
        entry: &mut StoredMixture,
        config: &AtmosConfig,
    ) -> (ReactionResult, Vec<HotspotExposure>) {
        let mut exposures = Vec::new();
        if entry.mixture.is_empty() {
            entry.mixture.reaction_results.clear();
            return (ReactionResult::NoReaction, exposures);
        }
        let result = {
            let mut ctx = ReactionContext {
                heats: &config.specific_heats,
                heat_scale: config.heat_scale,
                location: entry.location,
                hotspots: &mut exposures,
            };
            self.react(&mut entry.mixture, &mut ctx)
        };
        (result, exposures)
    }
}
