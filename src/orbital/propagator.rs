use crate::orbital::state::{Deriv, OrbitalState};
use crate::physics::forces::{ForceTerm, ObjectProperties, PerturbationConfig};
use crate::physics::gravity::two_body_acceleration;
use crate::physics::Environment;

// ---------------------------------------------------------------------------
// Equations of motion
// ---------------------------------------------------------------------------

/// State derivative for an explicit, ordered list of perturbation terms.
///
/// Two-body Earth gravity is always the first term; the remaining terms are
/// added in slice order.
pub fn derivatives_with_terms(
    env: &Environment,
    state: &OrbitalState,
    terms: &[ForceTerm],
    props: &ObjectProperties,
) -> Deriv {
    let pos = &state.position;
    let vel = &state.velocity;

    let mut accel = two_body_acceleration(env.constants, pos);
    for term in terms {
        accel += term.acceleration(env.constants, env.bodies, pos, vel, props);
    }

    Deriv { dpos: *vel, dvel: accel }
}

/// State derivative (velocity, acceleration) under a perturbation config.
pub fn calculate_derivatives(
    env: &Environment,
    state: &OrbitalState,
    config: &PerturbationConfig,
) -> Deriv {
    derivatives_with_terms(env, state, &config.enabled_terms(), &config.object_properties)
}

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta
// ---------------------------------------------------------------------------

/// Single RK4 step: advance state by dt.
pub fn rk4_step(
    env: &Environment,
    state: &OrbitalState,
    dt: f64,
    terms: &[ForceTerm],
    props: &ObjectProperties,
) -> OrbitalState {
    let k1 = derivatives_with_terms(env, state, terms, props);
    let k2 = derivatives_with_terms(env, &state.apply(&k1, dt * 0.5), terms, props);
    let k3 = derivatives_with_terms(env, &state.apply(&k2, dt * 0.5), terms, props);
    let k4 = derivatives_with_terms(env, &state.apply(&k3, dt), terms, props);

    OrbitalState {
        position: state.position
            + (k1.dpos + 2.0 * k2.dpos + 2.0 * k3.dpos + k4.dpos) * (dt / 6.0),
        velocity: state.velocity
            + (k1.dvel + 2.0 * k2.dvel + 2.0 * k3.dvel + k4.dvel) * (dt / 6.0),
    }
}

/// Propagate `steps` fixed RK4 steps of `dt` seconds.
///
/// Each state is recorded before stepping, so `trajectory[i]` is the state at
/// `i * dt`, `trajectory[0]` is `initial` and the length is exactly `steps`.
pub fn integrate_orbit(
    env: &Environment,
    initial: &OrbitalState,
    dt: f64,
    steps: usize,
    config: &PerturbationConfig,
) -> Vec<OrbitalState> {
    let terms = config.enabled_terms();
    log::debug!(
        "integrating {} steps of {} s with terms {:?}",
        steps,
        dt,
        terms.iter().map(ForceTerm::name).collect::<Vec<_>>()
    );

    let mut trajectory = Vec::with_capacity(steps);
    let mut state = *initial;

    for _ in 0..steps {
        trajectory.push(state);
        state = rk4_step(env, &state, dt, &terms, &config.object_properties);
    }

    trajectory
}
