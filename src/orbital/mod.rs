pub mod elements;
pub mod evolution;
pub mod propagator;
pub mod state;

pub use elements::{
    calculate_perturbed_orbital_elements, orbital_elements_to_state_vector, OrbitalElements,
    SecularPrecession,
};
pub use evolution::{predict_orbital_evolution, EvolutionSample, EVOLUTION_SAMPLES};
pub use propagator::{calculate_derivatives, integrate_orbit, rk4_step};
pub use state::{Deriv, OrbitalState};
