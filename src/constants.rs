// Temperatures
pub const T0C: f32 = 273.15; // 0 °C
pub const T20C: f32 = 293.15; // 20 °C
pub const TCMB: f32 = 2.7; // cosmic microwave background, -270.45 °C

// Physical constants
pub const STEFAN_BOLTZMANN: f32 = 5.670373e-8; // W/(m²·K⁴)
pub const R_IDEAL_GAS_EQUATION: f32 = 8.314462; // kPa·L/(K·mol)

// Mixtures
pub const MINIMUM_HEAT_CAPACITY: f32 = 0.0003;
pub const GAS_MIN_MOLES: f32 = 0.00000005;
pub const CELL_VOLUME: f32 = 2500.0; // litres in a tile
/// Merges between mixtures closer than this keep the receiver's temperature.
pub const MINIMUM_TEMPERATURE_DELTA_TO_CONSIDER: f32 = 0.01;

/// Divisor applied to specific heats and reaction enthalpies so the
/// simulation runs at game speed.
pub const DEFAULT_HEAT_SCALE: f32 = 8.0;
pub const DEFAULT_SUPERCONDUCTION_TILE_LOSS: f32 = 30.0;

// Fire
pub const FIRE_MINIMUM_TEMPERATURE_TO_EXIST: f32 = T0C + 100.0;
/// Moles burnt in one reaction below which no fire is reported.
pub const FIRE_REPORT_MIN_MOLES: f32 = 0.01;

// Heat exchangers
pub const DEFAULT_PIPE_NAME: &str = "pipe";
pub const DEFAULT_CONVECTION_COEFFICIENT: f32 = 0.5;
pub const DEFAULT_RADIATION_AREA: f32 = 3.0;
/// Scales environment moles against volume in the convection density curve.
pub const CONVECTION_DENSITY_FACTOR: f32 = 500.0;
pub const CONVECTION_DENSITY_EXPONENT: f32 = 0.75;
/// Share of a coupled exchanger's working mixture handed back to the outlet.
pub const COUPLED_OUTLET_FRACTION: f32 = 0.5;
