use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Close-approach risk rating
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl RiskLevel {
    pub fn score(&self) -> u32 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Extreme => 4,
        }
    }
}

/// Observed close approach of a near-Earth object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseApproach {
    pub miss_distance_lunar: f64,   // lunar distances
    pub relative_velocity_kms: f64, // km/s
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub size_risk: RiskLevel,
    pub proximity_risk: RiskLevel,
    pub velocity_risk: RiskLevel,
    pub overall_risk: RiskLevel,
    pub total_score: u32,
    pub potential_damage: String,
}

/// Rate a near-Earth object from its mean diameter (km) and, when known, its
/// close approach. Without an approach only size contributes above `Low`.
pub fn assess_approach_risk(diameter_km: f64, approach: Option<&CloseApproach>) -> RiskAssessment {
    let size_risk = if diameter_km > 1.0 {
        RiskLevel::Extreme
    } else if diameter_km > 0.5 {
        RiskLevel::High
    } else if diameter_km > 0.1 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let (proximity_risk, velocity_risk) = match approach {
        Some(a) => {
            let proximity = if a.miss_distance_lunar < 1.0 {
                RiskLevel::Extreme
            } else if a.miss_distance_lunar < 5.0 {
                RiskLevel::High
            } else if a.miss_distance_lunar < 20.0 {
                RiskLevel::Medium
            } else {
                RiskLevel::Low
            };
            let velocity = if a.relative_velocity_kms > 30.0 {
                RiskLevel::High
            } else if a.relative_velocity_kms > 20.0 {
                RiskLevel::Medium
            } else {
                RiskLevel::Low
            };
            (proximity, velocity)
        }
        None => (RiskLevel::Low, RiskLevel::Low),
    };

    let total_score = size_risk.score() + proximity_risk.score() + velocity_risk.score();
    let (overall_risk, damage) = match total_score {
        10.. => (RiskLevel::Extreme, "global catastrophe"),
        8..=9 => (RiskLevel::High, "regional destruction"),
        6..=7 => (RiskLevel::Medium, "local damage"),
        _ => (RiskLevel::Low, "minimal"),
    };

    RiskAssessment {
        size_risk,
        proximity_risk,
        velocity_risk,
        overall_risk,
        total_score,
        potential_damage: damage.to_string(),
    }
}
