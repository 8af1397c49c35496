use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Bulk composition of the impactor.
///
/// Deserializes from any string; unrecognised values fall back to `stone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum Composition {
    #[default]
    Stone,
    Iron,
    StonyIron,
    Carbonaceous,
}

impl Composition {
    pub const ALL: [Composition; 4] =
        [Self::Stone, Self::Iron, Self::StonyIron, Self::Carbonaceous];

    /// Lenient parse: case-insensitive, `-`/`_`/space agnostic.
    pub fn parse(s: &str) -> Self {
        let key: String = s
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "stone" | "stony" | "rocky" => Self::Stone,
            "iron" | "metallic" => Self::Iron,
            "stonyiron" => Self::StonyIron,
            "carbonaceous" => Self::Carbonaceous,
            _ => {
                log::warn!("unknown composition {s:?}, defaulting to stone");
                Self::Stone
            }
        }
    }

    /// Bulk density (kg/m^3).
    pub fn density(&self) -> f64 {
        match self {
            Self::Stone => 3_000.0,
            Self::Iron => 7_800.0,
            Self::StonyIron => 5_400.0,
            Self::Carbonaceous => 2_000.0,
        }
    }

    /// Plausible density range for this class (kg/m^3).
    pub fn density_range(&self) -> (f64, f64) {
        match self {
            Self::Stone => (2_500.0, 3_500.0),
            Self::Iron => (7_300.0, 8_000.0),
            Self::StonyIron => (4_800.0, 6_000.0),
            Self::Carbonaceous => (1_300.0, 2_600.0),
        }
    }

    /// Bulk strength (Pa); the body breaks up once ram pressure exceeds it.
    pub fn strength(&self) -> f64 {
        match self {
            Self::Carbonaceous => 1.0e6,
            Self::Stone => 1.0e7,
            Self::StonyIron => 5.0e7,
            Self::Iron => 1.0e8,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stone => "stone",
            Self::Iron => "iron",
            Self::StonyIron => "stony-iron",
            Self::Carbonaceous => "carbonaceous",
        }
    }
}

impl From<String> for Composition {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Impact parameters
// ---------------------------------------------------------------------------

pub const DEFAULT_ENTRY_ALTITUDE: f64 = 100_000.0; // m
pub const MIN_ENTRY_ANGLE_DEG: f64 = 1.0;
pub const MAX_ENTRY_ANGLE_DEG: f64 = 90.0;

fn default_altitude() -> f64 {
    DEFAULT_ENTRY_ALTITUDE
}

/// Entry conditions of an impactor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactParameters {
    pub diameter: f64, // m
    pub velocity: f64, // m/s
    pub angle: f64,    // deg above the horizontal
    #[serde(default)]
    pub composition: Composition,
    #[serde(default = "default_altitude")]
    pub altitude: f64, // m
}

impl ImpactParameters {
    pub fn new(diameter: f64, velocity: f64, angle: f64, composition: Composition) -> Self {
        Self { diameter, velocity, angle, composition, altitude: DEFAULT_ENTRY_ALTITUDE }
    }

    /// Copy with negative sizes/speeds clamped to zero and the entry angle
    /// clamped to [1, 90] degrees.
    pub fn sanitized(&self) -> Self {
        if self.diameter < 0.0 || self.velocity < 0.0 {
            log::warn!(
                "negative diameter ({}) or velocity ({}) clamped to zero",
                self.diameter,
                self.velocity
            );
        }
        Self {
            diameter: self.diameter.max(0.0),
            velocity: self.velocity.max(0.0),
            angle: self.angle.clamp(MIN_ENTRY_ANGLE_DEG, MAX_ENTRY_ANGLE_DEG),
            composition: self.composition,
            altitude: self.altitude.max(0.0),
        }
    }

    pub fn radius(&self) -> f64 {
        self.diameter.max(0.0) * 0.5
    }

    pub fn density(&self) -> f64 {
        self.composition.density()
    }

    /// Spherical mass `4/3·π·r³·ρ` (kg).
    pub fn mass(&self) -> f64 {
        sphere_mass(self.radius(), self.density())
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle.to_radians()
    }
}

pub fn sphere_mass(radius: f64, density: f64) -> f64 {
    4.0 / 3.0 * PI * radius.powi(3) * density
}
