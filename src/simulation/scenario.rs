//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - the revolving system with every admissible member registered
//! - the active force set (`ForceSet` with Newtonian gravity)
//!
//! Registration follows the configured member order. A body whose chain
//! leads to a foreign star is logged and skipped; a cyclic parent graph
//! aborts the build.

use std::collections::HashMap;

use crate::configuration::config::ScenarioConfig;
use crate::error::SimError;
use super::bodies::{BodyId, BodyStore};
use super::forces::{ForceSet, NewtonianGravity};
use super::params::{Parameters, LEGACY_TIME_SCALE};
use super::system::RevolvingSystem;

/// A fully-initialized runtime bundle: parameters, system state at t = 0,
/// and the set of active force laws
pub struct Scenario {
    pub parameters: Parameters,
    pub system: RevolvingSystem,
    pub forces: ForceSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        cfg.validate()?;

        let defaults = Parameters::default();
        let parameters = Parameters {
            dt: cfg.parameters.dt,
            time_scale: cfg.parameters.time_scale.unwrap_or(LEGACY_TIME_SCALE),
            max_ticks: cfg.parameters.max_ticks,
            G: cfg.parameters.G.unwrap_or(defaults.G),
        };

        // Intern bodies. Ids are assigned by declaration position first so
        // a parent may be declared after its children.
        let mut index: HashMap<&str, BodyId> = HashMap::new();
        for (k, bc) in cfg.bodies.iter().enumerate() {
            index.insert(bc.name.as_str(), BodyId(k));
        }

        let mut store = BodyStore::new();
        for bc in &cfg.bodies {
            match &bc.parent {
                None => {
                    store.add_star(&bc.name, bc.mass, bc.radius, &bc.color);
                }
                Some(parent) => {
                    let pid = *index.get(parent.as_str()).ok_or_else(|| SimError::Configuration {
                        message: format!("unknown parent `{parent}` for body `{}`", bc.name),
                    })?;
                    let distance = bc.distance.ok_or_else(|| SimError::Configuration {
                        message: format!("satellite `{}` is missing `distance`", bc.name),
                    })?;
                    let period = bc.period.ok_or_else(|| SimError::Configuration {
                        message: format!("satellite `{}` is missing `period`", bc.name),
                    })?;
                    store.add_satellite(
                        &bc.name,
                        bc.mass,
                        bc.radius,
                        &bc.color,
                        pid,
                        distance,
                        period,
                        bc.inclination.unwrap_or(0.0),
                    );
                }
            }
        }

        let central = *index.get(cfg.central.as_str()).ok_or_else(|| SimError::Configuration {
            message: format!("unknown central body `{}`", cfg.central),
        })?;
        let mut system = RevolvingSystem::new(store, central);

        // Registration order: the configured member list, or every
        // non-central body in declaration order
        let registration: Vec<BodyId> = match &cfg.members {
            Some(members) => members
                .iter()
                .filter_map(|m| index.get(m.as_str()).copied())
                .collect(),
            None => (0..cfg.bodies.len())
                .map(BodyId)
                .filter(|&id| id != central)
                .collect(),
        };

        for id in registration {
            match system.add_satellite(id) {
                Ok(()) => {}
                // Refused locally (already warned), the system keeps its
                // membership and the build carries on
                Err(SimError::AncestryRejected { .. }) => {}
                Err(err) => return Err(err),
            }
        }

        let forces = ForceSet::new().with(NewtonianGravity { G: parameters.G });

        Ok(Self {
            parameters,
            system,
            forces,
        })
    }
}
