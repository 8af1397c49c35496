use crate::constants::PhysicalConstants;
use crate::physics::atmosphere;
use crate::types::Vec3;

pub const DEFAULT_DRAG_COEFFICIENT: f64 = 2.2;

/// Dynamic pressure `q = 1/2 rho v^2`, Pa.
pub fn dynamic_pressure(density: f64, speed: f64) -> f64 {
    0.5 * density * speed * speed
}

/// Atmospheric drag acceleration on an Earth-centred object (opposing velocity).
///
/// Altitude is measured above the mean Earth radius. At or above the 500 km
/// atmosphere ceiling, or at zero speed, the result is exactly zero.
pub fn atmospheric_drag(
    c: &PhysicalConstants,
    pos: &Vec3,
    vel: &Vec3,
    area: f64,
    mass: f64,
    cd: f64,
) -> Vec3 {
    let altitude = pos.norm() - c.earth_radius;
    let rho = atmosphere::density(altitude);
    let speed = vel.norm();
    if rho == 0.0 || speed == 0.0 {
        return Vec3::zeros();
    }
    let drag_mag = dynamic_pressure(rho, speed) * cd * area;
    -(vel / speed) * (drag_mag / mass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::constants;

    #[test]
    fn drag_opposes_velocity() {
        let c = constants();
        let pos = Vec3::new(c.earth_radius + 200_000.0, 0.0, 0.0);
        let vel = Vec3::new(0.0, 7_800.0, 0.0);
        let a = atmospheric_drag(c, &pos, &vel, 1.0, 100.0, DEFAULT_DRAG_COEFFICIENT);
        assert!(a.y < 0.0, "drag should oppose +y velocity");
        assert_eq!(a.x, 0.0);
    }

    #[test]
    fn no_drag_above_ceiling() {
        let c = constants();
        // 1000 km altitude
        let pos = Vec3::new(7.371e6, 0.0, 0.0);
        let vel = Vec3::new(0.0, 7_350.0, 0.0);
        let a = atmospheric_drag(c, &pos, &vel, 10.0, 100.0, 2.2);
        assert_eq!(a, Vec3::zeros());
    }

    #[test]
    fn no_drag_at_rest() {
        let c = constants();
        let pos = Vec3::new(c.earth_radius + 50_000.0, 0.0, 0.0);
        let a = atmospheric_drag(c, &pos, &Vec3::zeros(), 1.0, 1.0, 2.2);
        assert_eq!(a, Vec3::zeros());
    }

    #[test]
    fn drag_grows_lower_down() {
        let c = constants();
        let vel = Vec3::new(0.0, 7_800.0, 0.0);
        let high = Vec3::new(c.earth_radius + 400_000.0, 0.0, 0.0);
        let low = Vec3::new(c.earth_radius + 150_000.0, 0.0, 0.0);
        let a_high = atmospheric_drag(c, &high, &vel, 1.0, 100.0, 2.2).norm();
        let a_low = atmospheric_drag(c, &low, &vel, 1.0, 100.0, 2.2).norm();
        assert!(a_low > a_high);
    }
}
