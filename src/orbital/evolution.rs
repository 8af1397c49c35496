use serde::Serialize;

use crate::orbital::elements::{calculate_perturbed_orbital_elements, OrbitalElements};
use crate::orbital::propagator::rk4_step;
use crate::physics::forces::PerturbationConfig;
use crate::physics::Environment;
use crate::types::{xyz, Vec3};

/// Fixed sample count of an evolution forecast.
pub const EVOLUTION_SAMPLES: usize = 1000;

/// One point of an element-history forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionSample {
    pub time: f64, // s since the initial epoch
    pub elements: OrbitalElements,
    #[serde(with = "xyz")]
    pub position: Vec3,
    #[serde(with = "xyz")]
    pub velocity: Vec3,
}

/// Forecast how the elements drift over `time_span` seconds.
///
/// The elements are converted to a state once; each of the
/// [`EVOLUTION_SAMPLES`] samples then records the current elements and
/// advances one RK4 step of `time_span / EVOLUTION_SAMPLES`. A zero span
/// yields every sample at time zero.
pub fn predict_orbital_evolution(
    env: &Environment,
    initial: &OrbitalElements,
    time_span: f64,
    config: &PerturbationConfig,
) -> Vec<EvolutionSample> {
    let dt = time_span / EVOLUTION_SAMPLES as f64;
    let terms = config.enabled_terms();
    let mut state = initial.to_state_vector(env.constants.mu_earth());

    log::debug!("predicting evolution over {time_span} s ({EVOLUTION_SAMPLES} samples of {dt} s)");

    let mut samples = Vec::with_capacity(EVOLUTION_SAMPLES);
    for i in 0..EVOLUTION_SAMPLES {
        samples.push(EvolutionSample {
            time: i as f64 * dt,
            elements: calculate_perturbed_orbital_elements(
                env,
                &state.position,
                &state.velocity,
                config,
            ),
            position: state.position,
            velocity: state.velocity,
        });
        state = rk4_step(env, &state, dt, &terms, &config.object_properties);
    }

    samples
}
