// ---------------------------------------------------------------------------
// Two-regime exponential atmosphere (sea level to 500 km)
// ---------------------------------------------------------------------------

pub const RHO0: f64 = 1.225; // sea-level density, kg/m^3

const DENSE_SCALE_HEIGHT: f64 = 7_200.0; // m, below 100 km
const THIN_SCALE_HEIGHT: f64 = 25_000.0; // m, 100-500 km

pub const THIN_REGIME_BASE: f64 = 100_000.0; // m
pub const ATMOSPHERE_CEILING: f64 = 500_000.0; // m

/// Atmospheric regime at a given altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    Dense,
    Thin,
    Vacuum,
}

pub fn regime(altitude_m: f64) -> Regime {
    if altitude_m >= ATMOSPHERE_CEILING {
        Regime::Vacuum
    } else if altitude_m >= THIN_REGIME_BASE {
        Regime::Thin
    } else {
        Regime::Dense
    }
}

/// Air density at a geometric altitude above the mean Earth radius.
///
/// Exponential decay with a 7.2 km scale height up to 100 km, continued with a
/// 25 km scale height up to 500 km, exactly zero above. Negative altitudes
/// clamp to sea level.
pub fn density(altitude_m: f64) -> f64 {
    let h = altitude_m.max(0.0);

    match regime(h) {
        Regime::Dense => RHO0 * (-h / DENSE_SCALE_HEIGHT).exp(),
        Regime::Thin => {
            let base = RHO0 * (-THIN_REGIME_BASE / DENSE_SCALE_HEIGHT).exp();
            base * (-(h - THIN_REGIME_BASE) / THIN_SCALE_HEIGHT).exp()
        }
        Regime::Vacuum => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
