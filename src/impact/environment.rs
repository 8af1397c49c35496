use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Severity tiers
// ---------------------------------------------------------------------------

/// Qualitative reach of an impact, banded by released energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeverityTier {
    None,
    Local,          // < 1e14 J
    Regional,       // < 1e16 J
    Continental,    // < 1e18 J
    Global,         // < 1e20 J
    MassExtinction, // >= 1e20 J
}

impl SeverityTier {
    pub fn from_energy(energy: f64) -> Self {
        if energy.is_nan() || energy <= 0.0 {
            Self::None
        } else if energy < 1e14 {
            Self::Local
        } else if energy < 1e16 {
            Self::Regional
        } else if energy < 1e18 {
            Self::Continental
        } else if energy < 1e20 {
            Self::Global
        } else {
            Self::MassExtinction
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Local => "local",
            Self::Regional => "regional",
            Self::Continental => "continental",
            Self::Global => "global",
            Self::MassExtinction => "mass extinction",
        }
    }

    /// Indirect losses (supply chains, displacement) as a multiple of direct
    /// damage.
    pub fn indirect_multiplier(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Local => 0.5,
            Self::Regional => 1.0,
            Self::Continental => 2.0,
            Self::Global => 5.0,
            Self::MassExtinction => 10.0,
        }
    }

    /// Share of the world population lost to famine and climate after the
    /// event.
    pub fn long_term_fatality_fraction(&self) -> f64 {
        match self {
            Self::None | Self::Local | Self::Regional => 0.0,
            Self::Continental => 1e-4,
            Self::Global => 0.05,
            Self::MassExtinction => 0.5,
        }
    }

    /// Response guidance for this tier.
    pub fn recommendations(&self) -> Vec<String> {
        let lines: &[&str] = match self {
            Self::None => &["No measurable ground effects expected."],
            Self::Local => &[
                "Issue local shelter-in-place advisories near the impact point.",
                "Stay away from windows inside the light-damage radius.",
            ],
            Self::Regional => &[
                "Evacuate the severe-damage radius before impact.",
                "Pre-position emergency medical and search-and-rescue teams.",
                "Prepare regional hospitals for burn and blast injuries.",
            ],
            Self::Continental => &[
                "Evacuate the full blast footprint and downwind areas.",
                "Coordinate national emergency response and mass-care shelters.",
                "Monitor coastal regions for impact-generated tsunamis.",
            ],
            Self::Global => &[
                "Coordinate an international response through planetary defense bodies.",
                "Stockpile food reserves for reduced harvests over several seasons.",
                "Prepare for global climate disruption and infrastructure failure.",
            ],
            Self::MassExtinction => &[
                "Pursue deflection by every available means well before impact.",
                "Establish long-term shelters with multi-year food and power supply.",
                "Preserve critical knowledge, seed banks and genetic archives.",
            ],
        };
        lines.iter().map(|s| s.to_string()).collect()
    }
}

// ---------------------------------------------------------------------------
// Environmental effects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalEffects {
    pub dust_cloud_radius: f64,   // m
    pub dust_cloud_duration: f64, // days
    pub climate_change: f64,      // global mean temperature change, K
    pub ozone_depletion: f64,     // percent
    pub severity: SeverityTier,
}

/// Atmospheric consequences of releasing `energy` joules at the surface.
pub fn environmental_effects(energy: f64) -> EnvironmentalEffects {
    let severity = SeverityTier::from_energy(energy);
    let (radius_km, days, climate, ozone) = match severity {
        SeverityTier::None => (0.0, 0.0, 0.0, 0.0),
        SeverityTier::Local => (10.0, 1.0, 0.0, 0.0),
        SeverityTier::Regional => (100.0, 7.0, -0.1, 1.0),
        SeverityTier::Continental => (1_000.0, 30.0, -0.5, 5.0),
        SeverityTier::Global => (5_000.0, 180.0, -2.0, 20.0),
        SeverityTier::MassExtinction => (20_000.0, 730.0, -8.0, 50.0),
    };
    EnvironmentalEffects {
        dust_cloud_radius: radius_km * 1_000.0,
        dust_cloud_duration: days,
        climate_change: climate,
        ozone_depletion: ozone,
        severity,
    }
}
