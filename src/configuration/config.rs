//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, pacing, tick bound, constants
//! - [`BodyConfig`]       – one authored body (star or satellite)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   dt: 1.0               # Earth days per tick
//!   time_scale: 864.0     # optional, defaults to 36*24
//!   max_ticks: 10000      # optional, absent -> run until cancelled
//!   G: 6.67e-11           # optional
//!
//! central: Earth
//! members: [Moon]         # optional, absent -> every non-central body
//!
//! bodies:
//!   - name: Sun
//!     mass: 1.989e30
//!     radius: 6.95e8
//!     color: yellow
//!   - name: Earth
//!     mass: 5.97e24
//!     radius: 6.371e6
//!     color: blue
//!     parent: Sun
//!     distance: 1.50e11
//!     period: 365.25
//!     inclination: 7.155  # degrees
//!   - name: Moon
//!     mass: 7.34e22
//!     radius: 1.737e6
//!     parent: Earth
//!     distance: 3.84399e8
//!     period: 27.321
//!     inclination: 1.54
//! ```
//!
//! Unlike the body layer, this layer validates: every plausibility problem
//! (non-positive mass, a satellite without a period, an unknown parent) is
//! rejected here, before any body is built.

use serde::Deserialize;

use crate::error::SimError;

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64, // Earth days per tick
    #[serde(default)]
    pub time_scale: Option<f64>, // seconds per day-unit, defaults to 36*24
    #[serde(default)]
    pub max_ticks: Option<u64>, // absent -> run until externally cancelled
    #[serde(default)]
    pub G: Option<f64>, // gravitational constant override
}

/// One authored body. A body with no `parent` is a star; a body with a
/// `parent` is a satellite and must also carry `distance` and `period`.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64, // kg
    pub radius: f64, // m
    #[serde(default = "default_color")]
    pub color: String, // opaque display tag
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub distance: Option<f64>, // m, to parent
    #[serde(default)]
    pub period: Option<f64>, // Earth days
    #[serde(default)]
    pub inclination: Option<f64>, // degrees, defaults to 0
}

fn default_color() -> String {
    "white".to_string()
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // numerical parameters
    pub central: String, // name of the central body
    #[serde(default)]
    pub members: Option<Vec<String>>, // registration list, in order
    pub bodies: Vec<BodyConfig>, // every authored body
}

fn config_err(message: String) -> SimError {
    SimError::Configuration { message }
}

impl ScenarioConfig {
    /// Fail-fast validation of everything the body layer will not check
    pub fn validate(&self) -> Result<(), SimError> {
        let p = &self.parameters;
        if !(p.dt > 0.0 && p.dt.is_finite()) {
            return Err(config_err(format!("dt must be a positive number of days, got {}", p.dt)));
        }
        if let Some(ts) = p.time_scale {
            if !(ts > 0.0 && ts.is_finite()) {
                return Err(config_err(format!("time_scale must be positive, got {ts}")));
            }
        }
        if let Some(g) = p.G {
            if !(g > 0.0 && g.is_finite()) {
                return Err(config_err(format!("G must be positive, got {g}")));
            }
        }

        if self.bodies.is_empty() {
            return Err(config_err("a scenario needs at least one body".to_string()));
        }

        let mut names = std::collections::HashSet::new();
        for bc in &self.bodies {
            bc.validate()?;
            // Names resolve parent references, so ambiguity is fatal here
            // even though the core itself never requires uniqueness
            if !names.insert(bc.name.as_str()) {
                return Err(config_err(format!("duplicate body name `{}`", bc.name)));
            }
        }
        for bc in &self.bodies {
            if let Some(parent) = &bc.parent {
                if !names.contains(parent.as_str()) {
                    return Err(config_err(format!(
                        "unknown parent `{parent}` for body `{}`",
                        bc.name
                    )));
                }
            }
        }

        if !names.contains(self.central.as_str()) {
            return Err(config_err(format!("unknown central body `{}`", self.central)));
        }
        if let Some(members) = &self.members {
            for m in members {
                if !names.contains(m.as_str()) {
                    return Err(config_err(format!("unknown member `{m}`")));
                }
                if m == &self.central {
                    return Err(config_err(format!(
                        "central body `{m}` cannot be registered as a member"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl BodyConfig {
    fn validate(&self) -> Result<(), SimError> {
        if self.name.is_empty() {
            return Err(config_err("body with an empty name".to_string()));
        }
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(config_err(format!("mass of `{}` must be positive, got {}", self.name, self.mass)));
        }
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(config_err(format!("radius of `{}` must be positive, got {}", self.name, self.radius)));
        }
        match &self.parent {
            Some(_) => {
                let distance = self.distance.ok_or_else(|| {
                    config_err(format!("satellite `{}` is missing `distance`", self.name))
                })?;
                let period = self.period.ok_or_else(|| {
                    config_err(format!("satellite `{}` is missing `period`", self.name))
                })?;
                if !(distance > 0.0 && distance.is_finite()) {
                    return Err(config_err(format!(
                        "distance of `{}` must be positive, got {distance}",
                        self.name
                    )));
                }
                if !(period > 0.0 && period.is_finite()) {
                    return Err(config_err(format!(
                        "period of `{}` must be positive, got {period}",
                        self.name
                    )));
                }
                if let Some(incl) = self.inclination {
                    if !incl.is_finite() {
                        return Err(config_err(format!(
                            "inclination of `{}` must be finite, got {incl}",
                            self.name
                        )));
                    }
                }
            }
            None => {
                // A star carries no orbital fields
                if self.distance.is_some() || self.period.is_some() || self.inclination.is_some() {
                    return Err(config_err(format!(
                        "star `{}` must not carry distance/period/inclination",
                        self.name
                    )));
                }
            }
        }
        Ok(())
    }
}
