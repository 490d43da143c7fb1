// src/gas.rs - Gas species and their molar specific heats

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gas {
    Oxygen,
    Nitrogen,
    CarbonDioxide,
    Plasma,
    Tritium,
    WaterVapor,
    Ammonia,
    NitrousOxide,
    Frezon,
}

impl Gas {
    pub const COUNT: usize = 9;

    pub const ALL: [Gas; Gas::COUNT] = [
        Gas::Oxygen,
        Gas::Nitrogen,
        Gas::CarbonDioxide,
        Gas::Plasma,
        Gas::Tritium,
        Gas::WaterVapor,
        Gas::Ammonia,
        Gas::NitrousOxide,
        Gas::Frezon,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gas::Oxygen => "oxygen",
            Gas::Nitrogen => "nitrogen",
            Gas::CarbonDioxide => "carbon_dioxide",
            Gas::Plasma => "plasma",
            Gas::Tritium => "tritium",
            Gas::WaterVapor => "water_vapor",
            Gas::Ammonia => "ammonia",
            Gas::NitrousOxide => "nitrous_oxide",
            Gas::Frezon => "frezon",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Gas::ALL.iter().copied().find(|gas| gas.as_str() == s)
    }
}

/// Molar specific heat per species, J/(mol·K) before heat scaling.
///
/// Serialises as a `gas -> value` map; any species missing from the map keeps
/// its default, so configs only need to list the overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Gas, f32>", into = "BTreeMap<Gas, f32>")]
pub struct SpecificHeats {
    values: [f32; Gas::COUNT],
}

impl SpecificHeats {
    pub fn get(&self, gas: Gas) -> f32 {
        self.values[gas.index()]
    }

    pub fn set(&mut self, gas: Gas, value: f32) {
        self.values[gas.index()] = value;
    }

    pub fn with(mut self, gas: Gas, value: f32) -> Self {
        self.set(gas, value);
        self
    }

    /// Σ moles × specific heat, unscaled.
    pub fn weighted_sum(&self, moles: &[f32; Gas::COUNT]) -> f32 {
        moles
            .iter()
            .zip(self.values.iter())
            .map(|(n, c)| n * c)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Gas, f32)> + '_ {
        Gas::ALL.iter().map(move |gas| (*gas, self.get(*gas)))
    }
}

impl Default for SpecificHeats {
    fn default() -> Self {
        DEFAULT_SPECIFIC_HEATS.clone()
    }
}

impl From<BTreeMap<Gas, f32>> for SpecificHeats {
    fn from(overrides: BTreeMap<Gas, f32>) -> Self {
        let mut heats = SpecificHeats::default();
        for (gas, value) in overrides {
            heats.set(gas, value);
        }
        heats
    }
}

impl From<SpecificHeats> for BTreeMap<Gas, f32> {
    fn from(heats: SpecificHeats) -> Self {
        heats.iter().collect()
    }
}

// Constant-volume molar heats near room temperature. Plasma and frezon are
// fictional and sit far above the rest so they dominate a mixture's thermal mass.
pub static DEFAULT_SPECIFIC_HEATS: Lazy<SpecificHeats> = Lazy::new(|| {
    use Gas::*;
    let mut values = [0.0; Gas::COUNT];

    values[Oxygen.index()] = 21.0;
    values[Nitrogen.index()] = 20.8;
    values[CarbonDioxide.index()] = 28.5;
    values[Plasma.index()] = 200.0;
    values[Tritium.index()] = 20.5;
    values[WaterVapor.index()] = 25.3;
    values[Ammonia.index()] = 27.0;
    values[NitrousOxide.index()] = 30.4;
    values[Frezon.index()] = 600.0;

    SpecificHeats { values }
});
