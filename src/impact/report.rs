use serde::{Deserialize, Serialize};

use crate::constants::PhysicalConstants;
use crate::impact::damage::{estimate_casualties, estimate_economic_damage, Casualties, EconomicDamage};
use crate::impact::effects::{
    blast_radius, crater_depth, crater_diameter, fireball_radius, kinetic_energy,
    peak_temperature, seismic_magnitude, tnt_equivalent, BlastRadius,
};
use crate::impact::entry::{simulate_entry, EntryConfig, EntryOutcome};
use crate::impact::environment::{environmental_effects, EnvironmentalEffects};
use crate::impact::params::{sphere_mass, ImpactParameters};
use crate::types::saturate;

// ---------------------------------------------------------------------------
// Model configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImpactModelConfig {
    pub population_density: f64,          // people/km^2
    pub infrastructure_value_density: f64, // USD/km^2
    pub world_population: f64,
    pub entry: EntryConfig,
}

impl Default for ImpactModelConfig {
    fn default() -> Self {
        Self {
            population_density: 100.0,
            infrastructure_value_density: 2.0e7,
            world_population: 8.0e9,
            entry: EntryConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Spread of the headline numbers over the composition's density range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Uncertainty {
    pub confidence: f64, // 0..1
    pub kinetic_energy_low: f64,
    pub kinetic_energy_high: f64,
    pub crater_diameter_low: f64,
    pub crater_diameter_high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactResult {
    pub parameters: ImpactParameters,
    pub kinetic_energy: f64, // J
    pub tnt_equivalent: f64, // tons of TNT
    pub crater_diameter: f64, // m
    pub crater_depth: f64,    // m
    pub blast_radius: BlastRadius,
    pub seismic_magnitude: f64,
    pub fireball_radius: f64,  // m
    pub peak_temperature: f64, // K
    pub peak_pressure: f64,    // Pa
    pub casualties: Casualties,
    pub economic_damage: EconomicDamage,
    pub environmental_effects: EnvironmentalEffects,
    pub atmospheric_entry: EntryOutcome,
    pub uncertainty: Uncertainty,
    pub recommendations: Vec<String>,
}

impl ImpactResult {
    pub fn kilotons(&self) -> f64 {
        self.tnt_equivalent / 1.0e3
    }

    pub fn megatons(&self) -> f64 {
        self.tnt_equivalent / 1.0e6
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

fn saturate_blast(b: BlastRadius) -> BlastRadius {
    BlastRadius {
        lethal: saturate(b.lethal),
        severe: saturate(b.severe),
        moderate: saturate(b.moderate),
        light: saturate(b.light),
    }
}

fn uncertainty(params: &ImpactParameters) -> Uncertainty {
    let (lo, hi) = params.composition.density_range();
    let nominal = params.density();
    let v = params.velocity.max(0.0);
    let energy = |density: f64| saturate(0.5 * sphere_mass(params.radius(), density) * v * v);
    let e_lo = energy(lo);
    let e_hi = energy(hi);

    Uncertainty {
        confidence: (1.0 - (hi - lo) / (2.0 * nominal)).clamp(0.0, 1.0),
        kinetic_energy_low: e_lo,
        kinetic_energy_high: e_hi,
        crater_diameter_low: saturate(crater_diameter(e_lo, lo, params.angle)),
        crater_diameter_high: saturate(crater_diameter(e_hi, hi, params.angle)),
    }
}

/// Run the full impact pipeline: entry, energy release and consequences.
///
/// Ground effects are driven by the pre-entry kinetic energy; the entry
/// passage is reported alongside in `atmospheric_entry`. Every number is
/// saturated to the finite range.
pub fn simulate_impact(
    c: &PhysicalConstants,
    params: &ImpactParameters,
    cfg: &ImpactModelConfig,
) -> ImpactResult {
    let p = params.sanitized();

    let entry = simulate_entry(&p, &cfg.entry);

    let energy = saturate(kinetic_energy(&p));
    let tnt = saturate(tnt_equivalent(c, energy));
    let crater = saturate(crater_diameter(energy, p.density(), p.angle));
    let blast = saturate_blast(blast_radius(tnt));
    let environment = environmental_effects(energy);

    let casualties = estimate_casualties(
        c,
        &blast,
        environment.severity,
        cfg.population_density,
        cfg.world_population,
    );
    let economic = estimate_economic_damage(
        c,
        &blast,
        environment.severity,
        cfg.infrastructure_value_density,
    );

    log::debug!(
        "impact {:.1} m {} at {:.1} km/s: {:.3e} J, crater {:.0} m, {}",
        p.diameter,
        p.composition,
        p.velocity / 1_000.0,
        energy,
        crater,
        environment.severity.label()
    );

    ImpactResult {
        parameters: p,
        kinetic_energy: energy,
        tnt_equivalent: tnt,
        crater_diameter: crater,
        crater_depth: saturate(crater_depth(crater)),
        blast_radius: blast,
        seismic_magnitude: seismic_magnitude(energy),
        fireball_radius: saturate(fireball_radius(energy)),
        peak_temperature: saturate(peak_temperature(energy, p.velocity)),
        peak_pressure: saturate(entry.peak_dynamic_pressure),
        casualties: Casualties {
            immediate: saturate(casualties.immediate),
            short_term: saturate(casualties.short_term),
            long_term: saturate(casualties.long_term),
            total: saturate(casualties.total),
        },
        economic_damage: EconomicDamage {
            direct: saturate(economic.direct),
            indirect: saturate(economic.indirect),
            total: saturate(economic.total),
        },
        environmental_effects: environment,
        atmospheric_entry: entry,
        uncertainty: uncertainty(&p),
        recommendations: environment.severity.recommendations(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::constants;
    use crate::impact::environment::SeverityTier;
    use crate::impact::params::Composition;

    #[test]
    fn hundred_metre_stone_report() {
        let p = ImpactParameters::new(100.0, 20_000.0, 45.0, Composition::Stone);
        let r = simulate_impact(constants(), &p, &ImpactModelConfig::default());

        assert!(r.kinetic_energy > 0.0 && r.tnt_equivalent > 0.0);
        assert!(r.crater_diameter > p.diameter);
        assert!((r.crater_depth - r.crater_diameter / 5.0).abs() < 1e-9);
        assert!((r.megatons() - 75.08).abs() < 0.1, "{} Mt", r.megatons());
        assert!((r.kilotons() - 1_000.0 * r.megatons()).abs() < 1e-6 * r.kilotons());
        assert_eq!(r.environmental_effects.severity, SeverityTier::Continental);
        assert!(r.casualties.total > 0.0);
        assert!(r.economic_damage.total > r.economic_damage.direct);
        assert!(!r.recommendations.is_empty());
        assert!(r.peak_temperature > 0.0 && r.peak_pressure > 0.0);
    }

    #[test]
    fn uncertainty_brackets_nominal() {
        let p = ImpactParameters::new(50.0, 15_000.0, 60.0, Composition::Carbonaceous);
        let r = simulate_impact(constants(), &p, &ImpactModelConfig::default());
        let u = r.uncertainty;
        assert!(u.kinetic_energy_low < r.kinetic_energy && r.kinetic_energy < u.kinetic_energy_high);
        assert!(u.crater_diameter_low < r.crater_diameter && r.crater_diameter < u.crater_diameter_high);
        assert!(u.confidence > 0.0 && u.confidence < 1.0);

        let iron = simulate_impact(
            constants(),
            &ImpactParameters { composition: Composition::Iron, ..p },
            &ImpactModelConfig::default(),
        );
        assert!(iron.uncertainty.confidence > u.confidence);
    }

    #[test]
    fn zero_diameter_gives_zero_effects() {
        let p = ImpactParameters::new(0.0, 20_000.0, 45.0, Composition::Stone);
        let r = simulate_impact(constants(), &p, &ImpactModelConfig::default());
        assert_eq!(r.kinetic_energy, 0.0);
        assert_eq!(r.crater_diameter, 0.0);
        assert_eq!(r.blast_radius, BlastRadius::default());
        assert_eq!(r.seismic_magnitude, 0.0);
        assert_eq!(r.casualties.total, 0.0);
        assert_eq!(r.environmental_effects.severity, SeverityTier::None);
    }

    #[test]
    fn report_serializes_camel_case() {
        let p = ImpactParameters::new(20.0, 18_000.0, 30.0, Composition::Iron);
        let r = simulate_impact(constants(), &p, &ImpactModelConfig::default());
        let json = serde_json::to_value(&r).unwrap();
        assert!(json["kineticEnergy"].as_f64().unwrap() > 0.0);
        assert!(json["blastRadius"]["lethal"].is_number());
        assert!(json["atmosphericEntry"]["finalVelocity"].is_number());
        assert_eq!(json["parameters"]["composition"], "iron");
    }
}
