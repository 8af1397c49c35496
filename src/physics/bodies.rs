use std::sync::OnceLock;

use serde::Serialize;

use crate::constants::PhysicalConstants;
use crate::types::{xyz, Vec3};

/// A perturbing body: mass and a static position snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CelestialBody {
    pub name: &'static str,
    pub mass: f64, // kg
    #[serde(with = "xyz")]
    pub position: Vec3, // m, heliocentric
}

/// Fixed registry of the bodies used as perturbation sources.
///
/// Positions are a simplified heliocentric snapshot (Sun at the origin, Earth
/// on +x at 1 AU, Moon beyond Earth, Jupiter on +x). Bodies do not move during
/// a propagation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CelestialBodySet {
    bodies: Vec<CelestialBody>,
}

impl CelestialBodySet {
    pub const SUN: &'static str = "sun";
    pub const EARTH: &'static str = "earth";
    pub const MOON: &'static str = "moon";
    pub const JUPITER: &'static str = "jupiter";

    /// Standard `{sun, earth, moon, jupiter}` registry.
    pub fn standard(c: &PhysicalConstants) -> Self {
        let earth = Vec3::new(c.au, 0.0, 0.0);
        Self {
            bodies: vec![
                CelestialBody { name: Self::SUN, mass: c.sun_mass, position: Vec3::zeros() },
                CelestialBody { name: Self::EARTH, mass: c.earth_mass, position: earth },
                CelestialBody {
                    name: Self::MOON,
                    mass: c.moon_mass,
                    position: earth + Vec3::new(c.moon_distance, 0.0, 0.0),
                },
                CelestialBody {
                    name: Self::JUPITER,
                    mass: c.jupiter_mass,
                    position: Vec3::new(c.jupiter_distance, 0.0, 0.0),
                },
            ],
        }
    }

    /// Registry from an explicit body list (order is the summation order).
    pub fn from_bodies(bodies: Vec<CelestialBody>) -> Self {
        Self { bodies }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    pub fn get(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Earth's heliocentric position, or the origin if Earth is absent.
    pub fn earth_position(&self) -> Vec3 {
        self.get(Self::EARTH).map(|b| b.position).unwrap_or_else(Vec3::zeros)
    }

    /// Position of `name` relative to Earth, if registered.
    pub fn geocentric(&self, name: &str) -> Option<Vec3> {
        self.get(name).map(|b| b.position - self.earth_position())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for CelestialBodySet {
    fn default() -> Self {
        Self::standard(&PhysicalConstants::STANDARD)
    }
}

static STANDARD_BODIES: OnceLock<CelestialBodySet> = OnceLock::new();

/// Process-wide standard registry, built on first use and never mutated.
pub fn standard_bodies() -> &'static CelestialBodySet {
    STANDARD_BODIES.get_or_init(CelestialBodySet::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::constants;

    #[test]
    fn standard_registry_has_four_bodies() {
        let set = CelestialBodySet::standard(constants());
        let names: Vec<_> = set.iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["sun", "earth", "moon", "jupiter"]);
    }

    #[test]
    fn moon_is_one_lunar_distance_from_earth() {
        let c = constants();
        let set = CelestialBodySet::standard(c);
        let moon = set.geocentric(CelestialBodySet::MOON).unwrap();
        assert!((moon.norm() - c.moon_distance).abs() < 1.0);
    }

    #[test]
    fn missing_earth_defaults_to_origin() {
        let set = CelestialBodySet::from_bodies(vec![]);
        assert!(set.is_empty());
        assert_eq!(set.earth_position(), Vec3::zeros());
    }
}
