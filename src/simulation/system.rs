//! The revolving system: one central body plus a validated set of members
//!
//! Owns every authored body, admits members through the ancestry check,
//! resolves their initial state lazily, and runs the simulation loop.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::SimError;
use super::bodies::{BodyId, BodyKind, BodyStore, NVec3};
use super::forces::ForceSet;
use super::integrator;
use super::orbit;
use super::params::Parameters;
use super::snapshot::{BodySnapshot, TickObserver};

pub struct RevolvingSystem {
    pub bodies: BodyStore, // every authored body, member or not
    pub central: BodyId, // the gravitational anchor
    pub members: Vec<BodyId>, // insertion order, also snapshot order
    pub t: f64, // elapsed scaled seconds
}

impl RevolvingSystem {
    /// Anchor the system on `central`: fixed at the origin with zero
    /// momentum, and marked resolved so chains can terminate on it
    pub fn new(mut bodies: BodyStore, central: BodyId) -> Self {
        let body = bodies.get_mut(central);
        body.position = NVec3::zeros();
        body.momentum = NVec3::zeros();
        body.force = NVec3::zeros();
        body.resolved = true;
        Self {
            bodies,
            central,
            members: Vec::new(),
            t: 0.0,
        }
    }

    /// Register a body as a member of this system.
    ///
    /// The ancestry check runs first; a body whose chain reaches a star
    /// other than the central body is refused (`AncestryRejected`, the
    /// system keeps operating with its existing membership). On success the
    /// initial state is resolved, recursing up the parent chain as needed,
    /// and the body joins the member list.
    pub fn add_satellite(&mut self, id: BodyId) -> Result<(), SimError> {
        if self.members.contains(&id) {
            warn!(body = %self.bodies.get(id).name, "already a member, ignoring");
            return Ok(());
        }
        if let Err(err) = self.check_ancestry(id) {
            if matches!(err, SimError::AncestryRejected { .. }) {
                warn!(%err, "body has the wrong parent");
            }
            return Err(err);
        }
        orbit::resolve_state(&mut self.bodies, self.central, id)?;
        self.members.push(id);
        debug!(body = %self.bodies.get(id).name, "registered");
        Ok(())
    }

    /// Walk up the parent links: admissible when the chain reaches the
    /// central body before any other star. A star candidate has no chain
    /// at all and is refused. A revisited body means the parent graph is
    /// cyclic, which is fatal.
    fn check_ancestry(&self, id: BodyId) -> Result<(), SimError> {
        let mut visited = HashSet::new();
        visited.insert(id);
        let mut cur = match self.bodies.get(id).parent() {
            Some(p) => p,
            None => {
                return Err(SimError::AncestryRejected {
                    name: self.bodies.get(id).name.clone(),
                })
            }
        };
        loop {
            if cur == self.central {
                return Ok(());
            }
            if !visited.insert(cur) {
                return Err(SimError::UnresolvedAncestor {
                    name: self.bodies.get(cur).name.clone(),
                });
            }
            cur = match &self.bodies.get(cur).kind {
                BodyKind::Star => {
                    return Err(SimError::AncestryRejected {
                        name: self.bodies.get(id).name.clone(),
                    })
                }
                BodyKind::Satellite(el) => el.parent,
            };
        }
    }

    /// Every registered body: members first, central last, which is also
    /// the order snapshots are emitted in
    pub fn registered(&self) -> Vec<BodyId> {
        let mut ids = self.members.clone();
        ids.push(self.central);
        ids
    }

    /// Read-only view of every registered body for an external display
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.registered()
            .iter()
            .map(|&id| {
                let b = self.bodies.get(id);
                BodySnapshot {
                    name: b.name.clone(),
                    position: b.position,
                    radius: b.radius,
                    color: b.color.clone(),
                }
            })
            .collect()
    }

    /// Advance exactly one tick
    pub fn step(&mut self, forces: &ForceSet, params: &Parameters) {
        integrator::advance(self, forces, params);
    }

    /// Run the loop: emit the initial snapshot, then tick until
    /// `params.max_ticks` is reached (or forever when it is `None`,
    /// cancellation being the host's business)
    pub fn simulate(&mut self, forces: &ForceSet, params: &Parameters, observer: &mut dyn TickObserver) {
        observer.on_register(&self.snapshot());
        let mut tick: u64 = 0;
        loop {
            if let Some(max) = params.max_ticks {
                if tick >= max {
                    break;
                }
            }
            self.step(forces, params);
            tick += 1;
            observer.on_tick(tick, &self.snapshot());
        }
    }
}
