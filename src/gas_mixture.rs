use crate::constants::{
    MINIMUM_HEAT_CAPACITY, MINIMUM_TEMPERATURE_DELTA_TO_CONSIDER, R_IDEAL_GAS_EQUATION, TCMB,
};
use crate::gas::{Gas, SpecificHeats};

/// Keys of the per-tick scratch results a reaction can leave on a mixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionTag {
    Fire,
}

impl ReactionTag {
    pub const COUNT: usize = 1;

    fn index(self) -> usize {
        self as usize
    }
}

/// Scratch values written by reactions during a tick and read by the ignition
/// collaborator straight after. Not meaningful across ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReactionResults {
    values: [f32; ReactionTag::COUNT],
}

impl ReactionResults {
    pub fn get(&self, tag: ReactionTag) -> f32 {
        self.values[tag.index()]
    }

    pub fn set(&mut self, tag: ReactionTag, value: f32) {
        self.values[tag.index()] = value;
    }

    pub fn add(&mut self, tag: ReactionTag, value: f32) {
        self.values[tag.index()] += value;
    }

    pub fn clear(&mut self) {
        self.values = [0.0; ReactionTag::COUNT];
    }
}

/// Gas held by one pipe segment or one tile.
///
/// Volume is fixed when the mixture is created. Heat capacity is always
/// derived from the current moles, so it can never go stale after a reaction
/// changes the composition.
#[derive(Debug, Clone, PartialEq)]
pub struct GasMixture {
    moles: [f32; Gas::COUNT],
    volume: f32,
    temperature: f32,
    pub reaction_results: ReactionResults,
}

impl GasMixture {
    /// Create an empty mixture of `volume` litres at `temperature` kelvin.
    pub fn new(volume: f32, temperature: f32) -> Self {
        debug_assert!(volume > 0.0, "mixture volume must be positive, got {}", volume);
        let mut mixture = Self {
            moles: [0.0; Gas::COUNT],
            volume,
            temperature: TCMB,
            reaction_results: ReactionResults::default(),
        };
        mixture.set_temperature(temperature);
        mixture
    }

    /// Builder form of `set_moles`.
    pub fn with_moles(mut self, gas: Gas, moles: f32) -> Self {
        self.set_moles(gas, moles);
        self
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Temperatures never fall below the cosmic background.
    pub fn set_temperature(&mut self, kelvin: f32) {
        self.temperature = kelvin.max(TCMB);
    }

    pub fn moles(&self, gas: Gas) -> f32 {
        self.moles[gas.index()]
    }

    pub fn moles_array(&self) -> &[f32; Gas::COUNT] {
        &self.moles
    }

    pub fn set_moles(&mut self, gas: Gas, moles: f32) {
        self.moles[gas.index()] = moles.max(0.0);
    }

    /// Add `delta` moles of `gas`; the result is floored at zero.
    pub fn adjust_moles(&mut self, gas: Gas, delta: f32) {
        let slot = &mut self.moles[gas.index()];
        *slot = (*slot + delta).max(0.0);
    }

    pub fn total_moles(&self) -> f32 {
        self.moles.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_moles() <= 0.0
    }

    /// Fraction of the total moles that are `gas`; 0 for an empty mixture.
    pub fn mole_fraction(&self, gas: Gas) -> f32 {
        let total = self.total_moles();
        if total <= 0.0 { 0.0 } else { self.moles(gas) / total }
    }

    /// Pressure in kPa from the ideal gas law.
    pub fn pressure(&self) -> f32 {
        self.total_moles() * R_IDEAL_GAS_EQUATION * self.temperature / self.volume
    }

    /// Heat capacity with `heat_scale` applied, floored at
    /// `MINIMUM_HEAT_CAPACITY`. Pass a scale of 1 for the physical value.
    pub fn heat_capacity(&self, heats: &SpecificHeats, heat_scale: f32) -> f32 {
        (heats.weighted_sum(&self.moles) / heat_scale).max(MINIMUM_HEAT_CAPACITY)
    }

    pub fn thermal_energy(&self, heats: &SpecificHeats, heat_scale: f32) -> f32 {
        self.heat_capacity(heats, heat_scale) * self.temperature
    }

    /// Move every mole of `giver` into this mixture, conserving thermal energy.
    pub fn merge(&mut self, giver: &GasMixture, heats: &SpecificHeats, heat_scale: f32) {
        let receiver_capacity = self.heat_capacity(heats, heat_scale);
        let giver_capacity = giver.heat_capacity(heats, heat_scale);
        let combined_capacity = receiver_capacity + giver_capacity;

        if (self.temperature - giver.temperature).abs() > MINIMUM_TEMPERATURE_DELTA_TO_CONSIDER
            && combined_capacity > MINIMUM_HEAT_CAPACITY
        {
            let energy = giver.temperature * giver_capacity + self.temperature * receiver_capacity;
            self.set_temperature(energy / combined_capacity);
        }

        for (mine, theirs) in self.moles.iter_mut().zip(giver.moles.iter()) {
            *mine += theirs;
        }
    }

    /// Take `ratio` of every species out into a new mixture of the same volume
    /// and temperature. Ratios above 1 are treated as 1.
    pub fn remove_ratio(&mut self, ratio: f32) -> GasMixture {
        let mut removed = GasMixture::new(self.volume, self.temperature);
        if ratio <= 0.0 {
            return removed;
        }
        let ratio = ratio.min(1.0);

        for (mine, taken) in self.moles.iter_mut().zip(removed.moles.iter_mut()) {
            *taken = *mine * ratio;
            *mine = (*mine - *taken).max(0.0);
        }
        removed
    }

    /// Take `amount` moles out proportionally across species.
    pub fn remove_moles(&mut self, amount: f32) -> GasMixture {
        let total = self.total_moles();
        if total <= 0.0 {
            return GasMixture::new(self.volume, self.temperature);
        }
        self.remove_ratio(amount / total)
    }

    /// Drop every mole, keeping volume and temperature.
    pub fn clear(&mut self) {
        self.moles = [0.0; Gas::COUNT];
    }

    /// Take on the moles and temperature of `source`. Volume and reaction
    /// results stay as they are.
    pub fn replace_contents(&mut self, source: &GasMixture) {
        self.moles = source.moles;
        self.temperature = source.temperature;
    }
}
