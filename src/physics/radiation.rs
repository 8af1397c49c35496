use crate::constants::PhysicalConstants;
use crate::types::Vec3;

pub const DEFAULT_REFLECTIVITY: f64 = 0.3;

/// Solar radiation pressure acceleration for an object at heliocentric `pos`.
///
/// Flux falls off as `(AU / d)^2` and pushes along the Sun->object line.
/// At the Sun's position the direction is `0/0`, so every component is NaN.
pub fn solar_radiation_pressure(
    c: &PhysicalConstants,
    pos: &Vec3,
    area: f64,
    mass: f64,
    reflectivity: f64,
) -> Vec3 {
    let distance = pos.norm();
    let toward_sun = -pos / distance;

    let au_ratio = c.au / distance;
    let pressure = c.solar_pressure * au_ratio * au_ratio;
    let accel = pressure * (1.0 + reflectivity) * area / mass;

    -toward_sun * accel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::constants;

    #[test]
    fn pushes_away_from_sun_at_1au() {
        let c = constants();
        let pos = Vec3::new(c.au, 0.0, 0.0);
        let a = solar_radiation_pressure(c, &pos, 1.0, 1.0, 0.0);
        assert!(a.x > 0.0);
        assert!((a.x - c.solar_pressure).abs() < 1e-18);
    }

    #[test]
    fn inverse_square_falloff() {
        let c = constants();
        let near = solar_radiation_pressure(c, &Vec3::new(c.au, 0.0, 0.0), 1.0, 1.0, 0.3);
        let far = solar_radiation_pressure(c, &Vec3::new(2.0 * c.au, 0.0, 0.0), 1.0, 1.0, 0.3);
        assert!((near.norm() / far.norm() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn undefined_at_sun() {
        let a = solar_radiation_pressure(constants(), &Vec3::zeros(), 1.0, 1.0, 0.3);
        assert!(a.x.is_nan() && a.y.is_nan() && a.z.is_nan());
    }
}
