use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Shared vector type
// ---------------------------------------------------------------------------

/// Position (m), velocity (m/s) or acceleration (m/s^2), depending on context.
pub type Vec3 = Vector3<f64>;

/// Serde adapter writing a `Vec3` as a `{ "x", "y", "z" }` object.
///
/// nalgebra's own serde support emits a bare array; callers of this crate
/// exchange vectors as objects, so every public vector field goes through here.
pub mod xyz {
    use nalgebra::Vector3;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Xyz {
        x: f64,
        y: f64,
        z: f64,
    }

    pub fn serialize<S: Serializer>(v: &Vector3<f64>, s: S) -> Result<S::Ok, S::Error> {
        Xyz { x: v.x, y: v.y, z: v.z }.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vector3<f64>, D::Error> {
        let Xyz { x, y, z } = Xyz::deserialize(d)?;
        Ok(Vector3::new(x, y, z))
    }
}

// ---------------------------------------------------------------------------
// Saturation for user-visible numbers
// ---------------------------------------------------------------------------

/// Clamp a derived quantity into the finite f64 range.
///
/// Infinities saturate at `±f64::MAX`; NaN collapses to zero. Only the impact
/// pipeline uses this; orbital force functions keep their singular values.
pub fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else if value.is_infinite() {
        f64::MAX.copysign(value)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "xyz")]
        v: Vec3,
    }

    #[test]
    fn vector_serializes_as_object() {
        let h = Holder { v: Vec3::new(1.0, -2.0, 3.5) };
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"{"v":{"x":1.0,"y":-2.0,"z":3.5}}"#);

        let back: Holder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.v, h.v);
    }

    #[test]
    fn missing_component_is_rejected() {
        let r: Result<Holder, _> = serde_json::from_str(r#"{"v":{"x":1.0,"y":2.0}}"#);
        assert!(r.is_err());
    }

    #[test]
    fn saturate_handles_non_finite() {
        assert_eq!(saturate(f64::INFINITY), f64::MAX);
        assert_eq!(saturate(f64::NEG_INFINITY), -f64::MAX);
        assert_eq!(saturate(f64::NAN), 0.0);
        assert_eq!(saturate(42.0), 42.0);
    }
}
