use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use meteor_impact::impact::{simulate_impact, Composition, ImpactModelConfig, ImpactParameters};
use meteor_impact::io;
use meteor_impact::orbital::{integrate_orbit, OrbitalElements};
use meteor_impact::physics::{ObjectProperties, PerturbationConfig};
use meteor_impact::{constants, Environment};

#[derive(Parser, Debug)]
#[command(name = "meteor-impact")]
#[command(about = "Atmospheric entry and ground effects of a meteor impact")]
struct Args {
    /// Print the full report as JSON instead of the text summary
    #[arg(long)]
    json: bool,

    /// JSON file with impact parameters (default: 100 m stony asteroid)
    params: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(args.params.as_deref(), args.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: Option<&Path>, json_output: bool) -> meteor_impact::Result<()> {
    // -----------------------------------------------------------------------
    // Scenario: file parameters or a 100 m stony asteroid
    // -----------------------------------------------------------------------
    let params = match path {
        Some(p) => {
            log::info!("reading impact parameters from {}", p.display());
            io::read_impact_parameters(p)?
        }
        None => ImpactParameters::new(100.0, 20_000.0, 45.0, Composition::Stone),
    };

    let c = constants();
    let result = simulate_impact(c, &params, &ImpactModelConfig::default());

    if json_output {
        let stdout = std::io::stdout();
        return io::write_report(&mut stdout.lock(), &result);
    }

    let p = &result.parameters;
    let entry = &result.atmospheric_entry;

    println!();
    println!("====================================================================");
    println!("  METEOR IMPACT SIMULATION");
    println!("====================================================================");
    println!();
    println!("  Impactor");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Diameter:      {:>10.1} m     Composition:  {:>12}",
        p.diameter, p.composition
    );
    println!(
        "  Velocity:      {:>10.2} km/s  Angle:        {:>10.1} deg",
        p.velocity / 1_000.0,
        p.angle
    );
    println!(
        "  Mass:          {:>10.3e} kg    Entry alt:    {:>10.0} m",
        p.mass(),
        p.altitude
    );
    println!();

    println!("  Atmospheric Entry");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Outcome:       {:>12}     Duration:     {:>10.2} s",
        format!("{:?}", entry.fate),
        entry.duration
    );
    println!(
        "  Final speed:   {:>10.2} km/s  Ablated:      {:>10.3e} kg",
        entry.final_velocity / 1_000.0,
        entry.ablation_mass
    );
    if let Some(h) = entry.fragmentation_altitude {
        println!("  Break-up at:   {:>10.0} m", h);
    }
    if let Some(h) = entry.airburst_altitude {
        println!("  Airburst at:   {:>10.0} m", h);
    }
    println!(
        "  Peak q:        {:>10.3e} Pa    Residual KE:  {:>10.3e} J",
        entry.peak_dynamic_pressure,
        entry.final_kinetic_energy()
    );
    println!();

    println!("  Energy & Ground Effects");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Energy:        {:>10.3e} J     Yield:        {:>10.2} Mt",
        result.kinetic_energy,
        result.megatons()
    );
    if result.megatons() < 1.0 {
        println!("                                 ({:.1} kt)", result.kilotons());
    }
    println!(
        "  Crater:        {:>10.0} m     Depth:        {:>10.0} m",
        result.crater_diameter, result.crater_depth
    );
    println!(
        "  Seismic:       {:>10.1} M     Fireball:     {:>10.0} m  ({:.0} K)",
        result.seismic_magnitude, result.fireball_radius, result.peak_temperature
    );
    let b = &result.blast_radius;
    println!(
        "  Blast radii:   lethal {:.1} km, severe {:.1} km, moderate {:.1} km, light {:.1} km",
        b.lethal / 1_000.0,
        b.severe / 1_000.0,
        b.moderate / 1_000.0,
        b.light / 1_000.0
    );
    println!();

    println!("  Human & Environmental Impact");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Casualties:    {:>10.3e}       (immediate {:.3e})",
        result.casualties.total, result.casualties.immediate
    );
    println!("  Damage:        {:>10.3e} USD", result.economic_damage.total);
    let env_fx = &result.environmental_effects;
    println!(
        "  Severity:      {:>10}       Dust cloud:   {:>7.0} km / {:.0} d",
        env_fx.severity.label(),
        env_fx.dust_cloud_radius / 1_000.0,
        env_fx.dust_cloud_duration
    );
    println!(
        "  Climate:       {:>+10.1} K     Ozone loss:   {:>10.0} %",
        env_fx.climate_change, env_fx.ozone_depletion
    );
    println!(
        "  Confidence:    {:>10.0} %     Crater range: {:.0}-{:.0} m",
        result.uncertainty.confidence * 100.0,
        result.uncertainty.crater_diameter_low,
        result.uncertainty.crater_diameter_high
    );
    println!();
    for line in &result.recommendations {
        println!("  - {line}");
    }
    println!();

    // -----------------------------------------------------------------------
    // Orbit check: one ISS-like orbit with every perturbation enabled
    // -----------------------------------------------------------------------
    let env = Environment::standard();
    let orbit = OrbitalElements::circular(c, 400_000.0, 51.6_f64.to_radians());
    let initial = orbit.to_state_vector(c.mu_earth());
    let config = PerturbationConfig::all(ObjectProperties::default());
    let dt = 10.0;
    let steps = (orbit.period / dt) as usize;
    let trajectory = integrate_orbit(&env, &initial, dt, steps, &config);

    if let Some(last) = trajectory.last() {
        println!("  Orbit Propagation (RK4, all perturbations)");
        println!("  ──────────────────────────────────────────────────────────────────");
        println!(
            "  Period:        {:>10.1} s     Steps:        {:>10}",
            orbit.period,
            trajectory.len()
        );
        println!(
            "  Altitude:      {:>10.1} km -> {:.1} km",
            initial.altitude(c.earth_equatorial_radius) / 1_000.0,
            last.altitude(c.earth_equatorial_radius) / 1_000.0
        );
    }
    println!("====================================================================");
    println!();

    Ok(())
}
