use crate::constants::PhysicalConstants;
use crate::physics::bodies::CelestialBodySet;
use crate::types::Vec3;

/// Newtonian attraction between two masses, N.
///
/// `r = 0` gives `inf` (not guarded); a zero mass gives zero.
pub fn gravitational_force(c: &PhysicalConstants, m1: f64, m2: f64, r: f64) -> f64 {
    c.gravitational_constant * m1 * m2 / (r * r)
}

/// Earth-centred two-body acceleration `-mu * r / |r|^3`.
pub fn two_body_acceleration(c: &PhysicalConstants, pos: &Vec3) -> Vec3 {
    let r = pos.norm();
    -pos * (c.mu_earth() / (r * r * r))
}

/// Sum of point-mass accelerations from every registered body at `pos`.
///
/// `exclude` names a body to leave out (typically the primary). A body at
/// exactly zero distance is skipped so a co-located body contributes nothing
/// while the others still add their terms.
pub fn n_body_acceleration(
    c: &PhysicalConstants,
    bodies: &CelestialBodySet,
    pos: &Vec3,
    exclude: Option<&str>,
) -> Vec3 {
    let mut total = Vec3::zeros();
    for body in bodies.iter() {
        if exclude == Some(body.name) {
            continue;
        }
        let r_vec = body.position - pos;
        let r = r_vec.norm();
        if r == 0.0 {
            continue;
        }
        let accel = c.gravitational_constant * body.mass / (r * r);
        total += r_vec * (accel / r);
    }
    total
}

// ---------------------------------------------------------------------------
// J2 perturbation (Earth-centred frame)
// ---------------------------------------------------------------------------

/// J2 oblateness acceleration.
///
/// Not guarded at the origin: `r^5 = 0` makes every component NaN there.
pub fn j2_perturbation(c: &PhysicalConstants, pos: &Vec3, _vel: &Vec3) -> Vec3 {
    let r = pos.norm();
    let r2 = r * r;
    let r5 = r2 * r2 * r;
    let re2 = c.earth_equatorial_radius * c.earth_equatorial_radius;
    let z2_over_r2 = pos.z * pos.z / r2;

    let factor = -1.5 * c.j2 * c.mu_earth() * re2 / r5;

    Vec3::new(
        factor * pos.x * (1.0 - 5.0 * z2_over_r2),
        factor * pos.y * (1.0 - 5.0 * z2_over_r2),
        factor * pos.z * (3.0 - 5.0 * z2_over_r2),
    )
}

// ---------------------------------------------------------------------------
// Third-body perturbations
// ---------------------------------------------------------------------------

/// Tidal acceleration of a third body on an Earth-centred object:
/// attraction on the object minus attraction on Earth.
fn differential(mu: f64, body: &Vec3, pos: &Vec3) -> Vec3 {
    let to_body = body - pos;
    let d = to_body.norm();
    let b = body.norm();
    to_body * (mu / (d * d * d)) - body * (mu / (b * b * b))
}

/// Moon term plus a damped Jupiter term inside 10 AU of Jupiter.
pub fn third_body_perturbations(
    c: &PhysicalConstants,
    bodies: &CelestialBodySet,
    pos: &Vec3,
) -> Vec3 {
    const JUPITER_RANGE_AU: f64 = 10.0;
    const JUPITER_DAMPING: f64 = 0.1;

    let mut total = Vec3::zeros();

    if let Some(moon) = bodies.geocentric(CelestialBodySet::MOON) {
        let mu_moon = c.gravitational_constant * c.moon_mass;
        total += differential(mu_moon, &moon, pos);
    }

    if let Some(jupiter) = bodies.geocentric(CelestialBodySet::JUPITER) {
        if (jupiter - pos).norm() < JUPITER_RANGE_AU * c.au {
            let mu_jupiter = c.gravitational_constant * c.jupiter_mass;
            total += differential(mu_jupiter, &jupiter, pos) * JUPITER_DAMPING;
        }
    }

    total
}

// ---------------------------------------------------------------------------
// Relativistic correction
// ---------------------------------------------------------------------------

/// Schwarzschild-like correction along the velocity direction.
///
/// Zero velocity is defined as zero correction. At the origin the `1/r`
/// terms are left to overflow.
pub fn relativistic_correction(c: &PhysicalConstants, pos: &Vec3, vel: &Vec3) -> Vec3 {
    let speed = vel.norm();
    if speed == 0.0 {
        return Vec3::zeros();
    }
    let mu = c.mu_earth();
    let c2 = c.speed_of_light * c.speed_of_light;
    let r = pos.norm();

    let schwarzschild = 3.0 * mu / (c2 * r);
    let kinetic = speed * speed / c2;
    let magnitude = (schwarzschild + kinetic) * mu / (r * r);

    (vel / speed) * magnitude
}
