use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::impact::params::ImpactParameters;
use crate::physics::aerodynamics::dynamic_pressure;
use crate::physics::atmosphere;

// ---------------------------------------------------------------------------
// Entry configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryConfig {
    pub drag_coefficient: f64,
    pub heat_transfer_coefficient: f64, // C_H
    pub heat_of_ablation: f64,          // Q, J/kg
    /// Airburst once the fragment cloud reaches this multiple of the
    /// initial radius.
    pub pancake_limit: f64,
    pub altitude_step: f64, // target descent per step, m
    pub max_dt: f64,        // s
    /// Below this speed the body is in dark flight and integration stops.
    pub terminal_speed: f64, // m/s
    pub max_steps: usize,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            drag_coefficient: 1.0,
            heat_transfer_coefficient: 0.1,
            heat_of_ablation: 8.0e6,
            pancake_limit: 7.0,
            altitude_step: 50.0,
            max_dt: 1.0,
            terminal_speed: 50.0,
            max_steps: 500_000,
        }
    }
}

/// How the entry ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryFate {
    /// Nothing to integrate (no mass, no speed or no atmosphere path).
    NoEntry,
    GroundImpact,
    Airburst,
    Ablated,
    DarkFlight,
    StepLimit,
}

/// Result of an atmospheric passage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryOutcome {
    pub fate: EntryFate,
    pub initial_velocity: f64, // m/s
    pub final_velocity: f64,   // m/s
    pub initial_mass: f64,     // kg
    pub final_mass: f64,       // kg
    pub ablation_mass: f64,    // kg lost to ablation
    pub fragmentation_altitude: Option<f64>, // m
    pub airburst_altitude: Option<f64>,      // m
    pub final_altitude: f64,                 // m
    pub heat_generated: f64,                 // J of kinetic energy dissipated
    pub peak_dynamic_pressure: f64,          // Pa
    pub duration: f64,                       // s
    pub steps: usize,
}

impl EntryOutcome {
    fn untouched(fate: EntryFate, velocity: f64, mass: f64, altitude: f64) -> Self {
        Self {
            fate,
            initial_velocity: velocity,
            final_velocity: velocity,
            initial_mass: mass,
            final_mass: mass,
            ablation_mass: 0.0,
            fragmentation_altitude: None,
            airburst_altitude: None,
            final_altitude: altitude,
            heat_generated: 0.0,
            peak_dynamic_pressure: 0.0,
            duration: 0.0,
            steps: 0,
        }
    }

    /// Kinetic energy still carried at the end of the passage (J).
    pub fn final_kinetic_energy(&self) -> f64 {
        0.5 * self.final_mass * self.final_velocity * self.final_velocity
    }
}

// ---------------------------------------------------------------------------
// Entry state and derivatives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct EntryState {
    velocity: f64, // m/s along the path
    mass: f64,     // kg
    altitude: f64, // m
    radius: f64,   // effective cross-section radius, m
}

#[derive(Debug, Clone, Copy)]
struct EntryDeriv {
    dv: f64,
    dm: f64,
    dh: f64,
    dr: f64,
}

impl EntryState {
    fn apply(&self, d: &EntryDeriv, dt: f64) -> EntryState {
        EntryState {
            velocity: self.velocity + d.dv * dt,
            mass: self.mass + d.dm * dt,
            altitude: self.altitude + d.dh * dt,
            radius: self.radius + d.dr * dt,
        }
    }
}

struct EntryModel<'a> {
    cfg: &'a EntryConfig,
    sin_angle: f64,
    body_density: f64,
    fragmented: bool,
}

impl EntryModel<'_> {
    /// Drag deceleration, ablation and (after break-up) pancake spreading.
    fn derivatives(&self, s: &EntryState) -> EntryDeriv {
        let rho = atmosphere::density(s.altitude);
        let v = s.velocity.max(0.0);
        let area = PI * s.radius * s.radius;

        let dv = if s.mass > 0.0 {
            -dynamic_pressure(rho, v) * self.cfg.drag_coefficient * area / s.mass
        } else {
            0.0
        };
        let dm = -self.cfg.heat_transfer_coefficient * rho * area * v.powi(3)
            / (2.0 * self.cfg.heat_of_ablation);
        let dr = if self.fragmented {
            v * (3.5 * rho / self.body_density).sqrt()
        } else {
            0.0
        };

        EntryDeriv { dv, dm, dh: -v * self.sin_angle, dr }
    }

    fn rk4(&self, s: &EntryState, dt: f64) -> EntryState {
        let k1 = self.derivatives(s);
        let k2 = self.derivatives(&s.apply(&k1, dt * 0.5));
        let k3 = self.derivatives(&s.apply(&k2, dt * 0.5));
        let k4 = self.derivatives(&s.apply(&k3, dt));

        let w = dt / 6.0;
        EntryState {
            velocity: s.velocity + (k1.dv + 2.0 * k2.dv + 2.0 * k3.dv + k4.dv) * w,
            mass: s.mass + (k1.dm + 2.0 * k2.dm + 2.0 * k3.dm + k4.dm) * w,
            altitude: s.altitude + (k1.dh + 2.0 * k2.dh + 2.0 * k3.dh + k4.dh) * w,
            radius: s.radius + (k1.dr + 2.0 * k2.dr + 2.0 * k3.dr + k4.dr) * w,
        }
    }

    /// Step that descends about `altitude_step` while changing speed, mass
    /// and radius by at most 10 %.
    fn step_size(&self, s: &EntryState) -> f64 {
        let d = self.derivatives(s);
        let mut dt = self.cfg.max_dt;
        let descent = s.velocity * self.sin_angle;
        if descent > 0.0 {
            dt = dt.min(self.cfg.altitude_step / descent);
        }
        for (value, rate) in [(s.velocity, d.dv), (s.mass, d.dm), (s.radius, d.dr)] {
            if rate != 0.0 {
                dt = dt.min(0.1 * value / rate.abs());
            }
        }
        dt.max(1e-9)
    }
}

// ---------------------------------------------------------------------------
// Entry simulation
// ---------------------------------------------------------------------------

/// Integrate the passage of an impactor from its entry altitude.
///
/// Never fails: degenerate inputs (no mass, no speed, no altitude) return an
/// outcome with zero heating. A massless body reports zero final velocity.
pub fn simulate_entry(params: &ImpactParameters, cfg: &EntryConfig) -> EntryOutcome {
    let p = params.sanitized();
    let m0 = p.mass();
    let v0 = p.velocity;
    let h0 = p.altitude;

    if m0 <= 0.0 || !m0.is_finite() {
        let mut out = EntryOutcome::untouched(EntryFate::NoEntry, v0, 0.0, h0);
        out.final_velocity = 0.0;
        return out;
    }
    if v0 <= 0.0 || h0 <= 0.0 {
        return EntryOutcome::untouched(EntryFate::NoEntry, v0, m0, h0);
    }

    let mut model = EntryModel {
        cfg,
        sin_angle: p.angle_rad().sin(),
        body_density: p.density(),
        fragmented: false,
    };
    let r0 = p.radius();

    // No drag or ablation above the ceiling: fly the vacuum leg in one go.
    let mut time = 0.0;
    let mut h_start = h0;
    if h0 > atmosphere::ATMOSPHERE_CEILING {
        h_start = atmosphere::ATMOSPHERE_CEILING;
        time = (h0 - h_start) / (v0 * model.sin_angle);
        log::debug!("coasting {:.0} m to the atmosphere in {:.1} s", h0 - h_start, time);
    }
    let mut s = EntryState { velocity: v0, mass: m0, altitude: h_start, radius: r0 };

    let mut steps = 0;
    let mut peak_q: f64 = 0.0;
    let mut fragmentation_altitude = None;
    let mut airburst_altitude = None;

    let fate = loop {
        let dt = model.step_size(&s);
        s = model.rk4(&s, dt);
        s.velocity = s.velocity.max(0.0);
        s.mass = s.mass.max(0.0);
        time += dt;
        steps += 1;

        let rho = atmosphere::density(s.altitude);
        peak_q = peak_q.max(dynamic_pressure(rho, s.velocity));

        if !model.fragmented && rho * s.velocity * s.velocity > p.composition.strength() {
            model.fragmented = true;
            fragmentation_altitude = Some(s.altitude.max(0.0));
            log::debug!("break-up at {:.0} m, {:.0} m/s", s.altitude, s.velocity);
        }

        if s.altitude <= 0.0 {
            s.altitude = 0.0;
            break EntryFate::GroundImpact;
        }
        if s.mass <= m0 * 1e-12 {
            break EntryFate::Ablated;
        }
        if model.fragmented && s.radius >= cfg.pancake_limit * r0 {
            airburst_altitude = Some(s.altitude);
            break EntryFate::Airburst;
        }
        if s.velocity < cfg.terminal_speed {
            break EntryFate::DarkFlight;
        }
        if steps >= cfg.max_steps {
            log::warn!("entry stopped after {steps} steps at {:.0} m", s.altitude);
            break EntryFate::StepLimit;
        }
    };

    let ke0 = 0.5 * m0 * v0 * v0;
    let ke1 = 0.5 * s.mass * s.velocity * s.velocity;

    log::debug!(
        "entry {:?} after {:.1} s: {:.0} -> {:.0} m/s, mass {:.3e} -> {:.3e} kg",
        fate,
        time,
        v0,
        s.velocity,
        m0,
        s.mass
    );

    EntryOutcome {
        fate,
        initial_velocity: v0,
        final_velocity: s.velocity.min(v0),
        initial_mass: m0,
        final_mass: s.mass.min(m0),
        ablation_mass: (m0 - s.mass).clamp(0.0, m0),
        fragmentation_altitude,
        airburst_altitude,
        final_altitude: s.altitude,
        heat_generated: (ke0 - ke1).max(0.0),
        peak_dynamic_pressure: peak_q,
        duration: time,
        steps,
    }
}
