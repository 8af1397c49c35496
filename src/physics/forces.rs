use serde::{Deserialize, Serialize};

use crate::constants::PhysicalConstants;
use crate::physics::aerodynamics::{self, DEFAULT_DRAG_COEFFICIENT};
use crate::physics::bodies::CelestialBodySet;
use crate::physics::gravity;
use crate::physics::radiation::{self, DEFAULT_REFLECTIVITY};
use crate::types::Vec3;

// ---------------------------------------------------------------------------
// Perturbation configuration
// ---------------------------------------------------------------------------

/// Physical properties of the propagated object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectProperties {
    pub mass: f64,             // kg
    pub area: f64,             // cross-section, m^2
    pub drag_coefficient: f64, // dimensionless
    pub reflectivity: f64,     // 0 = absorber
}

impl Default for ObjectProperties {
    fn default() -> Self {
        Self {
            mass: 1_000.0,
            area: 1.0,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            reflectivity: DEFAULT_REFLECTIVITY,
        }
    }
}

/// Which perturbations are active on top of two-body gravity.
///
/// Passed into each integration call and never mutated by the engine. The
/// default enables nothing, giving pure Keplerian motion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerturbationConfig {
    pub j2: bool,
    pub drag: bool,
    pub solar_pressure: bool,
    pub third_body: bool,
    pub relativistic: bool,
    pub object_properties: ObjectProperties,
}

impl PerturbationConfig {
    /// Everything switched on.
    pub fn all(object_properties: ObjectProperties) -> Self {
        Self {
            j2: true,
            drag: true,
            solar_pressure: true,
            third_body: true,
            relativistic: true,
            object_properties,
        }
    }

    /// Enabled terms in summation order.
    pub fn enabled_terms(&self) -> Vec<ForceTerm> {
        ForceTerm::ORDER
            .iter()
            .copied()
            .filter(|term| match term {
                ForceTerm::J2 => self.j2,
                ForceTerm::Drag => self.drag,
                ForceTerm::SolarPressure => self.solar_pressure,
                ForceTerm::ThirdBody => self.third_body,
                ForceTerm::Relativistic => self.relativistic,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Force terms
// ---------------------------------------------------------------------------

/// One perturbing acceleration. Terms are always summed in [`ForceTerm::ORDER`]
/// so results stay bit-reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceTerm {
    J2,
    Drag,
    SolarPressure,
    ThirdBody,
    Relativistic,
}

impl ForceTerm {
    pub const ORDER: [ForceTerm; 5] = [
        ForceTerm::J2,
        ForceTerm::Drag,
        ForceTerm::SolarPressure,
        ForceTerm::ThirdBody,
        ForceTerm::Relativistic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::J2 => "j2",
            Self::Drag => "drag",
            Self::SolarPressure => "solar_pressure",
            Self::ThirdBody => "third_body",
            Self::Relativistic => "relativistic",
        }
    }

    /// Acceleration contributed by this term for an Earth-centred state.
    ///
    /// Radiation pressure is evaluated at the object's heliocentric position
    /// (geocentric position plus Earth's registry position).
    pub fn acceleration(
        &self,
        c: &PhysicalConstants,
        bodies: &CelestialBodySet,
        pos: &Vec3,
        vel: &Vec3,
        props: &ObjectProperties,
    ) -> Vec3 {
        match self {
            Self::J2 => gravity::j2_perturbation(c, pos, vel),
            Self::Drag => aerodynamics::atmospheric_drag(
                c,
                pos,
                vel,
                props.area,
                props.mass,
                props.drag_coefficient,
            ),
            Self::SolarPressure => radiation::solar_radiation_pressure(
                c,
                &(pos + bodies.earth_position()),
                props.area,
                props.mass,
                props.reflectivity,
            ),
            Self::ThirdBody => gravity::third_body_perturbations(c, bodies, pos),
            Self::Relativistic => gravity::relativistic_correction(c, pos, vel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_enables_nothing() {
        assert!(PerturbationConfig::default().enabled_terms().is_empty());
    }

    #[test]
    fn terms_follow_fixed_order() {
        let mut cfg = PerturbationConfig::default();
        cfg.relativistic = true;
        cfg.j2 = true;
        cfg.third_body = true;
        assert_eq!(
            cfg.enabled_terms(),
            vec![ForceTerm::J2, ForceTerm::ThirdBody, ForceTerm::Relativistic]
        );
        assert_eq!(PerturbationConfig::all(ObjectProperties::default()).enabled_terms().len(), 5);
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let cfg: PerturbationConfig = serde_json::from_str(
            r#"{"j2": true, "solarPressure": true, "objectProperties": {"mass": 500, "area": 2}}"#,
        )
        .unwrap();
        assert!(cfg.j2 && cfg.solar_pressure);
        assert!(!cfg.drag && !cfg.third_body && !cfg.relativistic);
        assert_eq!(cfg.object_properties.mass, 500.0);
        assert_eq!(cfg.object_properties.drag_coefficient, 2.2);
        assert_eq!(cfg.object_properties.reflectivity, 0.3);
    }
}
