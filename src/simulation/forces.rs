//! Force contributors for the revolving-system engine
//!
//! Defines the force trait, the pairwise Newtonian gravity term, and the
//! `ForceSet` collection that sums contributions into a per-target buffer

use tracing::warn;

use crate::error::SimError;
use super::bodies::{BodyId, BodyStore, CelestialBody, NVec3};

/// Collection of force terms (gravity, and whatever else a scenario wires in)
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per target body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces on `targets` from `sources`
    /// - `out[k]` will be set to the sum of contributions on `targets[k]`
    pub fn accumulate_forces(
        &self,
        store: &BodyStore,
        targets: &[BodyId],
        sources: &[BodyId],
        out: &mut [NVec3],
    ) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec3::zeros();
        }
        // Iterate over all force contributors
        for term in &self.terms {
            term.accumulate(store, targets, sources, out);
        }
    }
}

/// Trait for force sources operating on bodies in a [`BodyStore`]
/// Implementations add their contribution into `out[k]` for each target
pub trait Force {
    fn accumulate(&self, store: &BodyStore, targets: &[BodyId], sources: &[BodyId], out: &mut [NVec3]);
}

/// Pairwise Newtonian gravity, direct O(n^2) summation, no softening
/// A coincident pair is degenerate: that contribution is skipped and
/// reported, the loop keeps going
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Force for NewtonianGravity {
    fn accumulate(&self, store: &BodyStore, targets: &[BodyId], sources: &[BodyId], out: &mut [NVec3]) {
        for (k, &ti) in targets.iter().enumerate() {
            let on = store.get(ti);
            for &sj in sources.iter() {
                // Self-pairs are filtered here, gforce never sees one
                if sj == ti {
                    continue;
                }
                let from = store.get(sj);
                match gforce(on, from, self.G) {
                    Ok(f) => out[k] += f,
                    Err(err) => warn!(%err, "skipping pair contribution"),
                }
            }
        }
    }
}

/// Gravitational force exerted on `on` by `from`.
///
/// Magnitude `G * m1 * m2 / d^2`, directed from `on` toward `from`
/// (attraction). Coincident positions make the direction undefined and
/// return a `DegenerateForce` error instead of dividing by zero.
pub fn gforce(on: &CelestialBody, from: &CelestialBody, g: f64) -> Result<NVec3, SimError> {
    let dvector = from.position - on.position; // points from `on` toward `from`
    let d = dvector.norm();
    if d == 0.0 {
        return Err(SimError::DegenerateForce {
            a: on.name.clone(),
            b: from.name.clone(),
        });
    }
    let magnitude = g * on.mass * from.mass / (d * d);
    Ok(magnitude * (dvector / d))
}
