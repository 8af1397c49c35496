pub mod damage;
pub mod effects;
pub mod entry;
pub mod environment;
pub mod params;
pub mod report;
pub mod risk;

pub use damage::{Casualties, EconomicDamage};
pub use effects::BlastRadius;
pub use entry::{simulate_entry, EntryConfig, EntryFate, EntryOutcome};
pub use environment::{EnvironmentalEffects, SeverityTier};
pub use params::{Composition, ImpactParameters};
pub use report::{simulate_impact, ImpactModelConfig, ImpactResult, Uncertainty};
pub use risk::{assess_approach_risk, CloseApproach, RiskAssessment, RiskLevel};
