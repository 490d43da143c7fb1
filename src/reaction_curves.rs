//! Response curves that gate how far a reaction gets in one tick.
//!
//! Every curve maps a physical quantity (a temperature or a mole ratio) to a
//! multiplier in [0, 1]. Reactions multiply several of them together to get
//! their conversion ratio, so the exact shapes matter: changing a curve changes
//! how fast every reaction using it runs.

/// Rate multiplier for a two-gas reaction with an ideal mixing ratio.
///
/// `x = gas_a / (gas_a + gas_b)`. The curve is 1 at `x == ideal_ratio` and falls
/// to 0 at `x == 0` and `x == 1` along two independent parabolas:
///
/// * above the ideal: `(x - 1)(2·ideal - 1 - x) / (1 - ideal)²`
/// * at or below it: `x(2·ideal - x) / ideal²`
///
/// Returns 0 when either gas is absent. `ideal_ratio` must lie strictly inside
/// (0, 1).
///
/// # Examples
/// ```
/// use atmos_reactions::reaction_curves::ideal_ratio_multiplier;
///
/// assert_eq!(ideal_ratio_multiplier(0.5, 3.0, 3.0), 1.0);
/// assert_eq!(ideal_ratio_multiplier(0.5, 0.0, 3.0), 0.0);
/// ```
pub fn ideal_ratio_multiplier(ideal_ratio: f32, gas_a: f32, gas_b: f32) -> f32 {
    if gas_a <= 0.0 || gas_b <= 0.0 {
        return 0.0;
    }
    let ratio = gas_a / (gas_a + gas_b);

    let multiplier = if ratio > ideal_ratio {
        (ratio - 1.0) * (-ratio + 2.0 * ideal_ratio - 1.0)
            / ((1.0 - ideal_ratio) * (1.0 - ideal_ratio))
    } else {
        ratio * (2.0 * ideal_ratio - ratio) / (ideal_ratio * ideal_ratio)
    };

    multiplier.max(0.0)
}

/// Piecewise-linear form of [`ideal_ratio_multiplier`]: straight lines from
/// (0, 0) to (ideal, 1) and from (ideal, 1) to (1, 0).
///
/// Behaves like a band-pass and gives very slow rates off-ratio; no reaction in
/// the catalog uses it.
pub fn ideal_ratio_multiplier_linear(ideal_ratio: f32, gas_a: f32, gas_b: f32) -> f32 {
    if gas_a <= 0.0 || gas_b <= 0.0 {
        return 0.0;
    }
    let ratio = gas_a / (gas_a + gas_b);

    let multiplier = if ratio > ideal_ratio {
        (1.0 - ratio) / (1.0 - ideal_ratio)
    } else {
        ratio / ideal_ratio
    };

    multiplier.max(0.0)
}

/// Multiplier for reactions that need a minimum temperature and speed up the
/// hotter it gets.
///
/// `r = 1 - half_point / (max(0, t - min_temp) + half_point)` is 0 at
/// `min_temp`, 0.5 at `min_temp + half_point` and tends to 1. The result is
/// `r²`, so the half-point returns exactly 0.25. `half_point` must be > 0.
///
/// # Examples
/// ```
/// use atmos_reactions::reaction_curves::min_temperature_asymptote;
///
/// assert_eq!(min_temperature_asymptote(400.0, 400.0, 100.0), 0.0);
/// assert_eq!(min_temperature_asymptote(500.0, 400.0, 100.0), 0.25);
/// ```
pub fn min_temperature_asymptote(actual_temp: f32, min_temp: f32, half_point: f32) -> f32 {
    let ratio = 1.0 - half_point / ((actual_temp - min_temp).max(0.0) + half_point);
    ratio * ratio
}

/// Mirror of [`min_temperature_asymptote`] for reactions that shut off above
/// `max_temp`: 0 at or above it, 0.25 at `max_temp - half_point`, tending to 1
/// as the temperature falls.
pub fn max_temperature_asymptote(actual_temp: f32, max_temp: f32, half_point: f32) -> f32 {
    let ratio = 1.0 + half_point / ((actual_temp - max_temp).min(0.0) - half_point);
    ratio * ratio
}

/// Band-limited multiplier: 1 at `peak_temp`, falling along independent
/// parabolas to 0 at `min_temp` and `max_temp`, and 0 outside the band.
///
/// Requires `min_temp < peak_temp < max_temp`.
pub fn finite_band_multiplier(
    actual_temp: f32,
    min_temp: f32,
    peak_temp: f32,
    max_temp: f32,
) -> f32 {
    let offset = actual_temp - peak_temp;
    let normalized = if actual_temp > peak_temp {
        offset / (max_temp - peak_temp)
    } else {
        offset / (peak_temp - min_temp)
    };

    (1.0 - normalized * normalized).max(0.0)
}
