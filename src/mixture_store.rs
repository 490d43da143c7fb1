//! Arena of gas mixtures addressed by `MixtureId`.
//!
//! Hosts hand out ids for tile air, pipe networks and canisters; the heat
//! exchanger and reaction engine borrow mixtures through the store so two
//! distinct mixtures can be mutated at once without shared ownership.

use crate::gas_mixture::GasMixture;
use glam::IVec2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MixtureId(pub usize);

#[derive(Debug, Clone)]
pub struct StoredMixture {
    pub mixture: GasMixture,
    /// Tile the mixture fills, if it is open air. Only tile air can start fires.
    pub location: Option<IVec2>,
}

#[derive(Debug, Clone, Default)]
pub struct MixtureStore {
    entries: Vec<StoredMixture>,
}

impl MixtureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contained mixture (pipe network, canister).
    pub fn insert(&mut self, mixture: GasMixture) -> MixtureId {
        self.push(mixture, None)
    }

    /// Add the open air of a tile.
    pub fn insert_tile_air(&mut self, mixture: GasMixture, location: IVec2) -> MixtureId {
        self.push(mixture, Some(location))
    }

    fn push(&mut self, mixture: GasMixture, location: Option<IVec2>) -> MixtureId {
        let id = MixtureId(self.entries.len());
        self.entries.push(StoredMixture { mixture, location });
        id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: MixtureId) -> Option<&GasMixture> {
        self.entries.get(id.0).map(|entry| &entry.mixture)
    }

    pub fn get_mut(&mut self, id: MixtureId) -> Option<&mut GasMixture> {
        self.entries.get_mut(id.0).map(|entry| &mut entry.mixture)
    }

    pub fn location(&self, id: MixtureId) -> Option<IVec2> {
        self.entries.get(id.0).and_then(|entry| entry.location)
    }

    /// Borrow two different mixtures mutably. `None` if either id is unknown
    /// or both ids are the same.
    pub fn get2_mut(
        &mut self,
        a: MixtureId,
        b: MixtureId,
    ) -> Option<(&mut GasMixture, &mut GasMixture)> {
        if a == b || a.0 >= self.entries.len() || b.0 >= self.entries.len() {
            return None;
        }
        if a.0 < b.0 {
            let (low, high) = self.entries.split_at_mut(b.0);
            Some((&mut low[a.0].mixture, &mut high[0].mixture))
        } else {
            let (low, high) = self.entries.split_at_mut(a.0);
            Some((&mut high[0].mixture, &mut low[b.0].mixture))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MixtureId, &StoredMixture)> {
        self.entries.iter().enumerate().map(|(i, entry)| (MixtureId(i), entry))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (MixtureId, &mut StoredMixture)> {
        self.entries
            .iter_mut()
            .enumerate()
            .map(|(i, entry)| (MixtureId(i), entry))
    }

    pub fn par_iter_mut(
        &mut self,
    ) -> impl ParallelIterator<Item = (MixtureId, &mut StoredMixture)> {
        self.entries
            .par_iter_mut()
            .enumerate()
            .map(|(i, entry)| (MixtureId(i), entry))
    }
}
