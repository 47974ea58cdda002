//! Initial-condition derivation for satellites.
//!
//! Given a satellite whose ancestors terminate at the system's central body,
//! derive its starting position and momentum from its orbital elements:
//! - position: offset from the parent by `d * (cos i, 0, sin i)`, the
//!   inclination acting as a fixed angular placement in the x-z plane
//! - momentum: `m * 2*pi*d / T` along global +y, plus the parent's bulk
//!   velocity scaled by this body's mass when the parent is not the
//!   central body
//!
//! The walk up the parent chain is iterative with a visited set. A body is
//! resolved at most once; the `resolved` flag is the marker, never a
//! position sentinel.

use std::collections::HashSet;
use std::f64::consts::TAU;

use tracing::debug;

use crate::error::SimError;
use super::bodies::{BodyId, BodyKind, BodyStore, NVec3};
use super::params::SECONDS_PER_DAY;

/// One unresolved link of a parent chain, captured on the way up
struct ChainNode {
    id: BodyId,
    parent: BodyId,
    mass: f64,
    offset: NVec3,
    intrinsic: NVec3,
}

/// Resolve the initial position and momentum of `id`, resolving unresolved
/// ancestors first. Idempotent: an already-resolved body is left untouched.
///
/// Fails with `UnresolvedAncestor` on a cyclic parent graph or on a chain
/// whose root star is not the resolved central body.
pub fn resolve_state(store: &mut BodyStore, central: BodyId, id: BodyId) -> Result<(), SimError> {
    // Climb until a resolved ancestor is found, collecting the unresolved
    // tail bottom-up
    let mut chain: Vec<ChainNode> = Vec::new();
    let mut visited = HashSet::new();
    let mut cur = id;
    loop {
        let body = store.get(cur);
        if body.resolved {
            break;
        }
        if !visited.insert(cur) {
            return Err(SimError::UnresolvedAncestor { name: body.name.clone() });
        }
        let elements = match &body.kind {
            // An unresolved star cannot anchor the chain; only the central
            // body is fixed at the origin
            BodyKind::Star => {
                return Err(SimError::UnresolvedAncestor { name: body.name.clone() });
            }
            BodyKind::Satellite(el) => el,
        };
        let offset = elements.distance_to_parent
            * NVec3::new(elements.inclination.cos(), 0.0, elements.inclination.sin());
        let intrinsic = NVec3::new(
            0.0,
            body.mass * (elements.distance_to_parent * TAU)
                / (elements.orbital_period * SECONDS_PER_DAY),
            0.0,
        );
        chain.push(ChainNode {
            id: cur,
            parent: elements.parent,
            mass: body.mass,
            offset,
            intrinsic,
        });
        cur = elements.parent;
    }

    // Resolve top-down so every parent is ready before its children
    for node in chain.iter().rev() {
        let (position, momentum) = if node.parent == central {
            // The central body is the momentum reference frame origin: no
            // inherited term beyond the intrinsic orbital momentum
            (node.offset, node.intrinsic)
        } else {
            let parent = store.get(node.parent);
            (
                parent.position + node.offset,
                parent.momentum / parent.mass * node.mass + node.intrinsic,
            )
        };
        let body = store.get_mut(node.id);
        body.position = position;
        body.momentum = momentum;
        body.force = NVec3::zeros();
        body.resolved = true;
        debug!(body = %body.name, "resolved initial state");
    }

    Ok(())
}
