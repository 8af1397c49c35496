use approx::assert_relative_eq;

use meteor_impact::constants::constants;
use meteor_impact::impact::effects::kinetic_energy;
use meteor_impact::impact::{
    simulate_entry, simulate_impact, Composition, EntryConfig, EntryFate, ImpactModelConfig,
    ImpactParameters,
};
use meteor_impact::io::parse_impact_parameters;
use meteor_impact::orbital::{
    calculate_perturbed_orbital_elements, integrate_orbit, predict_orbital_evolution,
    OrbitalElements, OrbitalState,
};
use meteor_impact::physics::aerodynamics::atmospheric_drag;
use meteor_impact::physics::atmosphere::ATMOSPHERE_CEILING;
use meteor_impact::physics::gravity::n_body_acceleration;
use meteor_impact::physics::{CelestialBody, CelestialBodySet, ObjectProperties, PerturbationConfig};
use meteor_impact::types::Vec3;
use meteor_impact::Environment;

fn stone(diameter: f64, velocity: f64) -> ImpactParameters {
    ImpactParameters::new(diameter, velocity, 45.0, Composition::Stone)
}

// ---------------------------------------------------------------------------
// Impact pipeline
// ---------------------------------------------------------------------------

#[test]
fn energy_scales_with_diameter_cubed_and_velocity_squared() {
    let base = kinetic_energy(&stone(50.0, 15_000.0));
    assert_relative_eq!(kinetic_energy(&stone(100.0, 15_000.0)), 8.0 * base, max_relative = 1e-12);
    assert_relative_eq!(kinetic_energy(&stone(50.0, 30_000.0)), 4.0 * base, max_relative = 1e-12);

    let c = constants();
    let cfg = ImpactModelConfig::default();
    let r1 = simulate_impact(c, &stone(50.0, 15_000.0), &cfg);
    let r2 = simulate_impact(c, &stone(100.0, 15_000.0), &cfg);
    assert_relative_eq!(r2.kinetic_energy, 8.0 * r1.kinetic_energy, max_relative = 1e-12);
}

#[test]
fn denser_composition_carries_more_energy() {
    let c = constants();
    let cfg = ImpactModelConfig::default();
    let energy = |composition| {
        let p = ImpactParameters::new(80.0, 18_000.0, 45.0, composition);
        simulate_impact(c, &p, &cfg).kinetic_energy
    };
    let iron = energy(Composition::Iron);
    let stony_iron = energy(Composition::StonyIron);
    let stone = energy(Composition::Stone);
    let carbonaceous = energy(Composition::Carbonaceous);
    assert!(iron > stony_iron && stony_iron > stone && stone > carbonaceous);
}

#[test]
fn extreme_impactor_stays_finite() {
    let p = ImpactParameters {
        diameter: 10_000.0,
        velocity: 70_000.0,
        angle: 90.0,
        composition: Composition::Stone,
        altitude: 200_000.0,
    };
    let r = simulate_impact(constants(), &p, &ImpactModelConfig::default());

    assert!(r.kinetic_energy.is_finite() && r.kinetic_energy > 0.0);
    assert!(r.crater_diameter.is_finite() && r.crater_diameter > 0.0);
    assert!(r.seismic_magnitude.is_finite() && r.seismic_magnitude > 0.0);
    assert!(r.seismic_magnitude < 15.0);
    assert!(r.casualties.total.is_finite() && r.casualties.total <= 8.0e9);
    assert!(r.economic_damage.total.is_finite());
    assert!(r.atmospheric_entry.final_velocity < r.atmospheric_entry.initial_velocity);
}

#[test]
fn hundred_metre_stone_end_to_end() {
    let p = parse_impact_parameters(
        r#"{"diameter": 100, "velocity": 20000, "angle": 45, "composition": "stone", "altitude": 100000}"#,
    )
    .unwrap();
    let r = simulate_impact(constants(), &p, &ImpactModelConfig::default());

    assert!(r.kinetic_energy > 0.0);
    assert!(r.tnt_equivalent > 0.0);
    assert!(r.crater_diameter > p.diameter);
    let b = r.blast_radius;
    assert!(b.lethal < b.severe && b.severe < b.moderate && b.moderate < b.light);
}

#[test]
fn entry_contract_holds_across_sizes() {
    let cfg = EntryConfig::default();
    for composition in Composition::ALL {
        for diameter in [1.0, 10.0, 100.0, 1_000.0] {
            let p = ImpactParameters::new(diameter, 20_000.0, 30.0, composition);
            let out = simulate_entry(&p, &cfg);
            assert!(
                out.final_velocity < out.initial_velocity && out.final_velocity >= 0.0,
                "{composition} {diameter} m: {:?}",
                out
            );
            assert!(out.ablation_mass >= 0.0 && out.ablation_mass <= out.initial_mass);
            assert!(out.heat_generated.is_finite());
        }
    }
}

#[test]
fn entry_contract_holds_from_the_atmosphere_ceiling_and_beyond() {
    let cfg = EntryConfig::default();
    for composition in Composition::ALL {
        for altitude in [ATMOSPHERE_CEILING, 3.0e7] {
            let p = ImpactParameters {
                altitude,
                ..ImpactParameters::new(50.0, 20_000.0, 90.0, composition)
            };
            let out = simulate_entry(&p, &cfg);
            assert!(
                out.final_velocity < out.initial_velocity,
                "{composition} from {altitude} m: {:?}",
                out
            );
            assert!(out.ablation_mass >= 0.0 && out.ablation_mass <= out.initial_mass);
            assert_ne!(out.fate, EntryFate::StepLimit);
        }
    }
}

// ---------------------------------------------------------------------------
// Orbital core
// ---------------------------------------------------------------------------

#[test]
fn circular_state_reports_circular_elements() {
    let env = Environment::standard();
    let mu = env.constants.mu_earth();
    let r = 6.9e6;
    let el = calculate_perturbed_orbital_elements(
        &env,
        &Vec3::new(r, 0.0, 0.0),
        &Vec3::new(0.0, (mu / r).sqrt(), 0.0),
        &PerturbationConfig::default(),
    );
    assert!(el.eccentricity < 1e-5);
    assert_relative_eq!(el.apogee, el.perigee, max_relative = 1e-5);
}

#[test]
fn trajectory_length_matches_step_count() {
    let env = Environment::standard();
    let state = OrbitalState::new(Vec3::new(7.0e6, 0.0, 0.0), Vec3::new(0.0, 7_546.0, 0.0));
    let cfg = PerturbationConfig::default();

    assert!(integrate_orbit(&env, &state, 10.0, 0, &cfg).is_empty());
    let traj = integrate_orbit(&env, &state, 10.0, 37, &cfg);
    assert_eq!(traj.len(), 37);
    assert_eq!(traj[0], state);
}

#[test]
fn zero_span_evolution_is_degenerate() {
    let env = Environment::standard();
    let orbit = OrbitalElements::circular(env.constants, 600_000.0, 0.5);
    let cfg = PerturbationConfig::all(ObjectProperties::default());
    let samples = predict_orbital_evolution(&env, &orbit, 0.0, &cfg);
    assert_eq!(samples.len(), 1000);
    assert!(samples.iter().all(|s| s.time == 0.0));
}

#[test]
fn co_located_body_is_skipped() {
    let c = constants();

    let sun_only = CelestialBodySet::from_bodies(vec![CelestialBody {
        name: CelestialBodySet::SUN,
        mass: c.sun_mass,
        position: Vec3::zeros(),
    }]);
    assert_eq!(n_body_acceleration(c, &sun_only, &Vec3::zeros(), None), Vec3::zeros());

    let standard = CelestialBodySet::standard(c);
    let a = n_body_acceleration(c, &standard, &Vec3::zeros(), None);
    assert!(a.iter().all(|v| v.is_finite()));
    // Every other body lies on +x
    assert!(a.x > 0.0);
}

#[test]
fn drag_vanishes_at_a_thousand_kilometres() {
    let c = constants();
    let a = atmospheric_drag(
        c,
        &Vec3::new(7.371e6, 0.0, 0.0),
        &Vec3::new(0.0, 7_350.0, 0.0),
        1.0,
        1_000.0,
        2.2,
    );
    assert_eq!(a, Vec3::zeros());
}

#[test]
fn integrator_leaves_shared_context_untouched() {
    let env = Environment::standard();
    let bodies_before = env.bodies.clone();
    let constants_before = env.constants.clone();
    let state = OrbitalState::new(Vec3::new(7.0e6, 0.0, 0.0), Vec3::new(0.0, 7_546.0, 0.0));
    integrate_orbit(&env, &state, 10.0, 50, &PerturbationConfig::all(ObjectProperties::default()));
    assert_eq!(*env.bodies, bodies_before);
    assert_eq!(*env.constants, constants_before);
}
