use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::constants::PhysicalConstants;
use crate::impact::effects::BlastRadius;
use crate::impact::environment::SeverityTier;

/// Fatality share inside each blast band, innermost first.
const FATALITY_FRACTION: [f64; 4] = [0.9, 0.5, 0.1, 0.01];
/// Destroyed share of infrastructure value inside each band.
const DAMAGE_FRACTION: [f64; 4] = [1.0, 0.6, 0.3, 0.05];
/// Later deaths among the immediately affected (injuries, exposure).
const SHORT_TERM_FRACTION: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Casualties {
    pub immediate: f64,
    pub short_term: f64,
    pub long_term: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicDamage {
    pub direct: f64,   // USD
    pub indirect: f64, // USD
    pub total: f64,    // USD
}

// ---------------------------------------------------------------------------
// Ring areas
// ---------------------------------------------------------------------------

/// Earth's surface area in km^2.
pub fn earth_surface_km2(c: &PhysicalConstants) -> f64 {
    let r_km = c.earth_radius / 1_000.0;
    4.0 * PI * r_km * r_km
}

/// Area (km^2) of each blast band as an annulus around the next band in.
///
/// Disc areas are capped at Earth's surface area, so very large radii cannot
/// cover more ground than exists.
pub fn ring_areas(c: &PhysicalConstants, blast: &BlastRadius) -> [f64; 4] {
    let cap = earth_surface_km2(c);
    let mut rings = [0.0; 4];
    let mut inner = 0.0;
    for (ring, radius) in rings.iter_mut().zip(blast.as_array()) {
        let r_km = radius.max(0.0) / 1_000.0;
        let disc = (PI * r_km * r_km).min(cap);
        *ring = (disc - inner).max(0.0);
        inner = inner.max(disc);
    }
    rings
}

// ---------------------------------------------------------------------------
// Estimates
// ---------------------------------------------------------------------------

/// Deaths from a uniform population density (people/km^2).
///
/// Long-term losses scale with the severity tier's share of the world
/// population; every figure is capped at `world_population`.
pub fn estimate_casualties(
    c: &PhysicalConstants,
    blast: &BlastRadius,
    severity: SeverityTier,
    population_density: f64,
    world_population: f64,
) -> Casualties {
    let density = population_density.max(0.0);
    let immediate: f64 = ring_areas(c, blast)
        .iter()
        .zip(FATALITY_FRACTION)
        .map(|(area, frac)| area * density * frac)
        .sum::<f64>()
        .min(world_population);

    let short_term = (immediate * SHORT_TERM_FRACTION).min(world_population - immediate);
    let survivors = world_population - immediate - short_term;
    let long_term = (world_population * severity.long_term_fatality_fraction()).min(survivors);

    Casualties {
        immediate,
        short_term,
        long_term,
        total: (immediate + short_term + long_term).min(world_population),
    }
}

/// Losses from a uniform infrastructure value density (USD/km^2).
pub fn estimate_economic_damage(
    c: &PhysicalConstants,
    blast: &BlastRadius,
    severity: SeverityTier,
    value_density: f64,
) -> EconomicDamage {
    let density = value_density.max(0.0);
    let direct: f64 = ring_areas(c, blast)
        .iter()
        .zip(DAMAGE_FRACTION)
        .map(|(area, frac)| area * density * frac)
        .sum();
    let indirect = direct * severity.indirect_multiplier();

    EconomicDamage { direct, indirect, total: direct + indirect }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::constants;
    use crate::impact::effects::blast_radius;

    #[test]
    fn rings_partition_the_light_disc() {
        let c = constants();
        let b = blast_radius(1.0e6);
        let rings = ring_areas(c, &b);
        let total: f64 = rings.iter().sum();
        let light_km = b.light / 1_000.0;
        assert!((total - PI * light_km * light_km).abs() < 1e-6);
        assert!(rings.iter().all(|&a| a > 0.0));
    }

    #[test]
    fn huge_blast_is_capped_by_earth() {
        let c = constants();
        let b = blast_radius(1e30);
        let total: f64 = ring_areas(c, &b).iter().sum();
        assert!((total - earth_surface_km2(c)).abs() / total < 1e-12);

        let cas = estimate_casualties(c, &b, SeverityTier::MassExtinction, 1e6, 8e9);
        assert!(cas.total <= 8e9);
        assert!(cas.immediate.is_finite() && cas.long_term >= 0.0 && cas.short_term >= 0.0);
    }

    #[test]
    fn casualties_scale_with_population() {
        let c = constants();
        let b = blast_radius(1.0e4);
        let sparse = estimate_casualties(c, &b, SeverityTier::Regional, 10.0, 8e9);
        let dense = estimate_casualties(c, &b, SeverityTier::Regional, 1_000.0, 8e9);
        assert!(dense.immediate > sparse.immediate);
        assert_eq!(sparse.long_term, 0.0);
        assert!((sparse.total - sparse.immediate * 1.1).abs() < 1e-6);
    }

    #[test]
    fn no_blast_no_damage() {
        let c = constants();
        let b = BlastRadius::default();
        assert_eq!(estimate_casualties(c, &b, SeverityTier::None, 100.0, 8e9).total, 0.0);
        assert_eq!(estimate_economic_damage(c, &b, SeverityTier::None, 1e7).total, 0.0);
    }

    #[test]
    fn indirect_losses_follow_tier() {
        let c = constants();
        let b = blast_radius(1.0e6);
        let local = estimate_economic_damage(c, &b, SeverityTier::Local, 1e7);
        let global = estimate_economic_damage(c, &b, SeverityTier::Global, 1e7);
        assert_eq!(local.direct, global.direct);
        assert!(global.indirect > local.indirect);
        assert!((global.total - global.direct * 6.0).abs() / global.total < 1e-12);
    }
}
