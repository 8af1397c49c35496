use serde::Serialize;

use crate::types::Vec3;

// ---------------------------------------------------------------------------
// Physical constants (SI units)
// ---------------------------------------------------------------------------

/// Immutable table of physical constants shared by every engine call.
///
/// A single instance lives in [`PhysicalConstants::STANDARD`]; engines take it
/// by reference so hosts and tests may inject their own table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalConstants {
    pub gravitational_constant: f64,  // m^3/(kg s^2)
    pub sun_mass: f64,                // kg
    pub earth_mass: f64,              // kg
    pub moon_mass: f64,               // kg
    pub jupiter_mass: f64,            // kg
    pub au: f64,                      // m
    pub earth_radius: f64,            // mean radius, m
    pub earth_equatorial_radius: f64, // m
    pub sun_radius: f64,              // m
    pub moon_distance: f64,           // mean Earth-Moon distance, m
    pub jupiter_distance: f64,        // semi-major axis of Jupiter, m
    pub speed_of_light: f64,          // m/s
    pub j2: f64,                      // Earth oblateness coefficient
    pub solar_pressure: f64,          // radiation pressure at 1 AU, N/m^2
    pub tnt_joules_per_ton: f64,      // J per ton of TNT
    /// Metres to scene units. Display only; no force model reads it.
    pub visualization_scale: f64,
}

impl PhysicalConstants {
    pub const STANDARD: PhysicalConstants = PhysicalConstants {
        gravitational_constant: 6.674_30e-11,
        sun_mass: 1.989e30,
        earth_mass: 5.972e24,
        moon_mass: 7.342e22,
        jupiter_mass: 1.898e27,
        au: 1.495_978_707e11,
        earth_radius: 6.371e6,
        earth_equatorial_radius: 6.378_137e6,
        sun_radius: 6.96e8,
        moon_distance: 3.844e8,
        jupiter_distance: 5.2044 * 1.495_978_707e11,
        speed_of_light: 299_792_458.0,
        j2: 1.082_63e-3,
        solar_pressure: 4.56e-6,
        tnt_joules_per_ton: 4.184e9,
        visualization_scale: 1.0e-6,
    };

    /// Earth's gravitational parameter G*M (m^3/s^2).
    pub fn mu_earth(&self) -> f64 {
        self.gravitational_constant * self.earth_mass
    }

    /// Convert a physical position into scene units for a renderer.
    pub fn to_scene_units(&self, v: &Vec3) -> Vec3 {
        v * self.visualization_scale
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}

static CONSTANTS: PhysicalConstants = PhysicalConstants::STANDARD;

/// Process-wide constants table.
pub fn constants() -> &'static PhysicalConstants {
    &CONSTANTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mu_earth_matches_published_value() {
        let mu = constants().mu_earth();
        // IERS value 3.986004418e14
        assert!((mu - 3.986e14).abs() / 3.986e14 < 1e-3, "mu_earth = {mu:e}");
    }

    #[test]
    fn scene_scale_is_display_only() {
        let c = constants();
        let p = Vec3::new(c.earth_radius, 0.0, 0.0);
        let scene = c.to_scene_units(&p);
        assert!((scene.x - 6.371).abs() < 1e-9);
    }

    #[test]
    fn singleton_is_standard_table() {
        assert_eq!(constants(), &PhysicalConstants::STANDARD);
        assert_eq!(PhysicalConstants::default(), PhysicalConstants::STANDARD);
    }
}
