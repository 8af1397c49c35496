use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::constants::PhysicalConstants;
use crate::impact::params::ImpactParameters;

// ---------------------------------------------------------------------------
// Energy
// ---------------------------------------------------------------------------

/// `½·m·v²` for a sphere of the parameters' diameter and composition.
pub fn kinetic_energy(params: &ImpactParameters) -> f64 {
    let v = params.velocity.max(0.0);
    0.5 * params.mass() * v * v
}

/// TNT equivalent in tons.
pub fn tnt_equivalent(c: &PhysicalConstants, energy: f64) -> f64 {
    energy / c.tnt_joules_per_ton
}

// ---------------------------------------------------------------------------
// Crater
// ---------------------------------------------------------------------------

const CRATER_COEFFICIENT: f64 = 0.084; // m per J^0.25
const REFERENCE_DENSITY: f64 = 3_000.0;
const DEPTH_RATIO: f64 = 0.2;

/// Final crater diameter (m) from energy, impactor density and entry angle.
///
/// `D = 0.084·E^¼·(ρ/3000)^⅓·sin(θ)^⅓`; zero only for zero energy.
pub fn crater_diameter(energy: f64, density: f64, angle_deg: f64) -> f64 {
    if energy <= 0.0 {
        return 0.0;
    }
    let angle = angle_deg.clamp(1.0, 90.0).to_radians();
    CRATER_COEFFICIENT
        * energy.powf(0.25)
        * (density / REFERENCE_DENSITY).cbrt()
        * angle.sin().cbrt()
}

pub fn crater_depth(diameter: f64) -> f64 {
    diameter * DEPTH_RATIO
}

// ---------------------------------------------------------------------------
// Blast
// ---------------------------------------------------------------------------

/// Overpressure damage radii (m), innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlastRadius {
    pub lethal: f64,   // ~20 psi, total destruction
    pub severe: f64,   // ~5 psi, most buildings collapse
    pub moderate: f64, // ~3 psi
    pub light: f64,    // ~1 psi, window breakage
}

impl BlastRadius {
    pub fn as_array(&self) -> [f64; 4] {
        [self.lethal, self.severe, self.moderate, self.light]
    }
}

/// Cube-root scaled blast radii from the TNT yield in tons.
pub fn blast_radius(tnt_tons: f64) -> BlastRadius {
    let w = (tnt_tons.max(0.0) / 1_000.0).cbrt(); // kt^(1/3)
    BlastRadius {
        lethal: 280.0 * w,
        severe: 450.0 * w,
        moderate: 710.0 * w,
        light: 1_800.0 * w,
    }
}

// ---------------------------------------------------------------------------
// Seismic
// ---------------------------------------------------------------------------

pub const MAX_SEISMIC_MAGNITUDE: f64 = 13.0;

/// Richter-like magnitude `0.67·log10(E) − 5.87`, clamped to [0, 13].
pub fn seismic_magnitude(energy: f64) -> f64 {
    if energy <= 0.0 {
        return 0.0;
    }
    (0.67 * energy.log10() - 5.87).clamp(0.0, MAX_SEISMIC_MAGNITUDE)
}

// ---------------------------------------------------------------------------
// Thermal
// ---------------------------------------------------------------------------

const LUMINOUS_EFFICIENCY: f64 = 3.0e-3;
const STEFAN_BOLTZMANN: f64 = 5.670_374e-8; // W/(m^2 K^4)

/// Fireball radius `0.002·E^⅓` (m).
pub fn fireball_radius(energy: f64) -> f64 {
    0.002 * energy.max(0.0).cbrt()
}

/// Fireball temperature (K) from radiating `η·E` over the fireball surface
/// during the crossing time `R_f / v`.
pub fn peak_temperature(energy: f64, velocity: f64) -> f64 {
    let r_f = fireball_radius(energy);
    if r_f <= 0.0 || velocity <= 0.0 {
        return 0.0;
    }
    let duration = r_f / velocity;
    let power = LUMINOUS_EFFICIENCY * energy / duration;
    let flux = power / (4.0 * PI * r_f * r_f);
    (flux / STEFAN_BOLTZMANN).powf(0.25)
}
