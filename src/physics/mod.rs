pub mod aerodynamics;
pub mod atmosphere;
pub mod bodies;
pub mod forces;
pub mod gravity;
pub mod radiation;

pub use bodies::{standard_bodies, CelestialBody, CelestialBodySet};
pub use forces::{ForceTerm, ObjectProperties, PerturbationConfig};

use crate::constants::{constants, PhysicalConstants};

/// Read-only physics context injected into every engine call.
#[derive(Debug, Clone, Copy)]
pub struct Environment<'a> {
    pub constants: &'a PhysicalConstants,
    pub bodies: &'a CelestialBodySet,
}

impl<'a> Environment<'a> {
    pub fn new(constants: &'a PhysicalConstants, bodies: &'a CelestialBodySet) -> Self {
        Self { constants, bodies }
    }
}

impl Environment<'static> {
    /// Standard constants and body registry.
    pub fn standard() -> Self {
        Self { constants: constants(), bodies: standard_bodies() }
    }
}

impl Default for Environment<'static> {
    fn default() -> Self {
        Self::standard()
    }
}
