use serde::{Deserialize, Serialize};

use crate::types::{xyz, Vec3};

// ---------------------------------------------------------------------------
// Orbital state
// ---------------------------------------------------------------------------

/// Cartesian state of the propagated object, Earth-centred inertial frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalState {
    #[serde(with = "xyz")]
    pub position: Vec3, // m
    #[serde(with = "xyz")]
    pub velocity: Vec3, // m/s
}

impl OrbitalState {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// Advance state by a derivative scaled by dt (used inside RK4).
    pub fn apply(&self, d: &Deriv, dt: f64) -> OrbitalState {
        OrbitalState {
            position: self.position + d.dpos * dt,
            velocity: self.velocity + d.dvel * dt,
        }
    }

    /// Height above a reference radius (m).
    pub fn altitude(&self, reference_radius: f64) -> f64 {
        self.position.norm() - reference_radius
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

// ---------------------------------------------------------------------------
// State derivative (dp/dt, dv/dt)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deriv {
    pub dpos: Vec3, // velocity
    pub dvel: Vec3, // acceleration
}
