use std::f64::consts::TAU;

use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::PhysicalConstants;
use crate::orbital::state::OrbitalState;
use crate::physics::forces::PerturbationConfig;
use crate::physics::Environment;
use crate::types::Vec3;

/// Below this, eccentricity or node-vector magnitude is treated as zero.
const SMALL: f64 = 1e-10;

/// Fixed-point iterations used to resolve Kepler's equation.
pub const KEPLER_ITERATIONS: usize = 50;

/// J2 secular drift of the orbit orientation (rad/s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecularPrecession {
    pub nodal_rate: f64,   // dΩ/dt
    pub apsidal_rate: f64, // dω/dt
}

/// Classical orbital elements about Earth. Angles in radians, distances in m.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub argument_of_periapsis: f64,
    pub longitude_of_ascending_node: f64,
    pub true_anomaly: f64,
    pub mean_anomaly: f64,
    pub period: f64,  // s
    pub apogee: f64,  // apoapsis radius from Earth's centre
    pub perigee: f64, // periapsis radius from Earth's centre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precession: Option<SecularPrecession>,
}

impl OrbitalElements {
    /// Circular orbit at an altitude above the equatorial radius.
    pub fn circular(c: &PhysicalConstants, altitude: f64, inclination: f64) -> Self {
        let a = c.earth_equatorial_radius + altitude;
        OrbitalElements {
            semi_major_axis: a,
            eccentricity: 0.0,
            inclination,
            argument_of_periapsis: 0.0,
            longitude_of_ascending_node: 0.0,
            true_anomaly: 0.0,
            mean_anomaly: 0.0,
            period: period(a, c.mu_earth()),
            apogee: a,
            perigee: a,
            precession: None,
        }
    }

    /// Elements positioned by mean anomaly; the true anomaly is resolved
    /// through [`eccentric_anomaly`]. Elliptical orbits only.
    pub fn from_mean_anomaly(
        mu: f64,
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        longitude_of_ascending_node: f64,
        argument_of_periapsis: f64,
        mean_anomaly: f64,
    ) -> Self {
        let ecc_anom = eccentric_anomaly(mean_anomaly, eccentricity);
        OrbitalElements {
            semi_major_axis,
            eccentricity,
            inclination,
            argument_of_periapsis,
            longitude_of_ascending_node,
            true_anomaly: true_from_eccentric(ecc_anom, eccentricity),
            mean_anomaly,
            period: period(semi_major_axis, mu),
            apogee: semi_major_axis * (1.0 + eccentricity),
            perigee: semi_major_axis * (1.0 - eccentricity),
            precession: None,
        }
    }

    /// Convert to an inertial state vector.
    ///
    /// Position and velocity are solved in the perifocal frame, then rotated
    /// by node, inclination and argument of periapsis (3-1-3).
    pub fn to_state_vector(&self, mu: f64) -> OrbitalState {
        let (ecc, nu) = (self.eccentricity, self.true_anomaly);
        let p = self.semi_major_axis * (1.0 - ecc * ecc); // semi-latus rectum
        let r_pqw = p / (1.0 + ecc * nu.cos());

        // Perifocal frame (PQW)
        let r_pqw_vec = Vec3::new(r_pqw * nu.cos(), r_pqw * nu.sin(), 0.0);
        let sqrt_mu_p = (mu / p).sqrt();
        let v_pqw_vec = Vec3::new(-sqrt_mu_p * nu.sin(), sqrt_mu_p * (ecc + nu.cos()), 0.0);

        let rot = self.perifocal_to_inertial();
        OrbitalState::new(rot * r_pqw_vec, rot * v_pqw_vec)
    }

    /// `Rz(Ω)·Rx(i)·Rz(ω)`.
    pub fn perifocal_to_inertial(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::z_axis(), self.longitude_of_ascending_node)
            * Rotation3::from_axis_angle(&Vector3::x_axis(), self.inclination)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), self.argument_of_periapsis)
    }
}

/// Keplerian period `2π·sqrt(a³/μ)`; infinite for unbound orbits.
pub fn period(semi_major_axis: f64, mu: f64) -> f64 {
    if semi_major_axis > 0.0 {
        TAU * (semi_major_axis.powi(3) / mu).sqrt()
    } else {
        f64::INFINITY
    }
}

// ---------------------------------------------------------------------------
// Anomalies
// ---------------------------------------------------------------------------

/// Eccentric anomaly from mean anomaly via `E = M + e·sin E`.
///
/// The iteration count is fixed, so the result is only approximately
/// consistent with the mean anomaly for highly eccentric orbits.
pub fn eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut e_anom = mean_anomaly;
    for _ in 0..KEPLER_ITERATIONS {
        e_anom = mean_anomaly + eccentricity * e_anom.sin();
    }
    e_anom
}

pub fn true_from_eccentric(ecc_anom: f64, eccentricity: f64) -> f64 {
    let half = ecc_anom * 0.5;
    2.0 * ((1.0 + eccentricity).sqrt() * half.sin())
        .atan2((1.0 - eccentricity).sqrt() * half.cos())
}

/// Mean anomaly for a given true anomaly (elliptic or hyperbolic).
fn mean_from_true(nu: f64, ecc: f64) -> f64 {
    if ecc < 1.0 {
        let e_anom = ((1.0 - ecc * ecc).sqrt() * nu.sin()).atan2(ecc + nu.cos());
        (e_anom - ecc * e_anom.sin()).rem_euclid(TAU)
    } else {
        let f = 2.0 * (((ecc - 1.0) / (ecc + 1.0)).sqrt() * (nu * 0.5).tan()).atanh();
        ecc * f.sinh() - f
    }
}

/// Angle between two vectors in [0, 2π), flipped when `flip` holds.
fn angle_between(a: &Vec3, b: &Vec3, flip: bool) -> f64 {
    let cos = (a.dot(b) / (a.norm() * b.norm())).clamp(-1.0, 1.0);
    let angle = cos.acos();
    if flip {
        TAU - angle
    } else {
        angle
    }
}

// ---------------------------------------------------------------------------
// State vector -> elements
// ---------------------------------------------------------------------------

/// Osculating elements of an Earth-centred state, with J2 secular rates when
/// `config.j2` is enabled.
pub fn calculate_perturbed_orbital_elements(
    env: &Environment,
    pos: &Vec3,
    vel: &Vec3,
    config: &PerturbationConfig,
) -> OrbitalElements {
    let c = env.constants;
    let mu = c.mu_earth();
    let r = pos.norm();
    let v = vel.norm();

    // Angular momentum and node vector
    let h = pos.cross(vel);
    let h_mag = h.norm();
    let n = Vec3::new(-h.y, h.x, 0.0);
    let n_mag = n.norm();

    // Eccentricity vector
    let e_vec = ((v * v - mu / r) * pos - pos.dot(vel) * vel) / mu;
    let ecc = e_vec.norm();

    // Vis-viva
    let energy = 0.5 * v * v - mu / r;
    let sma = -mu / (2.0 * energy);

    let inc = (h.z / h_mag).clamp(-1.0, 1.0).acos();

    let raan = if n_mag > SMALL { angle_between(&Vec3::x(), &n, n.y < 0.0) } else { 0.0 };

    let argp = if n_mag > SMALL && ecc > SMALL {
        angle_between(&n, &e_vec, e_vec.z < 0.0)
    } else if ecc > SMALL {
        // Equatorial: longitude of periapsis
        e_vec.y.atan2(e_vec.x).rem_euclid(TAU)
    } else {
        0.0
    };

    let inbound = pos.dot(vel) < 0.0;
    let true_anom = if ecc > SMALL {
        angle_between(&e_vec, pos, inbound)
    } else if n_mag > SMALL {
        // Circular inclined: argument of latitude
        angle_between(&n, pos, pos.z < 0.0)
    } else {
        // Circular equatorial: true longitude
        pos.y.atan2(pos.x).rem_euclid(TAU)
    };

    let (apogee, perigee) = if ecc < 1.0 {
        (sma * (1.0 + ecc), sma * (1.0 - ecc))
    } else {
        (f64::INFINITY, h_mag * h_mag / (mu * (1.0 + ecc)))
    };

    let precession = if config.j2 && ecc < 1.0 && sma > 0.0 {
        let mean_motion = (mu / sma.powi(3)).sqrt();
        let p = sma * (1.0 - ecc * ecc);
        let k = mean_motion * c.j2 * (c.earth_equatorial_radius / p).powi(2);
        let cos_i = inc.cos();
        Some(SecularPrecession {
            nodal_rate: -1.5 * k * cos_i,
            apsidal_rate: 0.75 * k * (5.0 * cos_i * cos_i - 1.0),
        })
    } else {
        None
    };

    OrbitalElements {
        semi_major_axis: sma,
        eccentricity: ecc,
        inclination: inc,
        argument_of_periapsis: argp,
        longitude_of_ascending_node: raan,
        true_anomaly: true_anom,
        mean_anomaly: mean_from_true(true_anom, ecc),
        period: period(sma, mu),
        apogee,
        perigee,
        precession,
    }
}

/// Earth-centred state vector for a set of elements.
pub fn orbital_elements_to_state_vector(env: &Environment, elements: &OrbitalElements) -> OrbitalState {
    elements.to_state_vector(env.constants.mu_earth())
}
