//! Fixed-step symplectic (semi-implicit) Euler integrator
//!
//! Advances momentum with the freshly accumulated force, then position with
//! the updated momentum. The intra-tick ordering is the contract:
//! every force is evaluated from the tick-start positions, then every
//! momentum updates, then every position. The central body contributes as a
//! force source but its own force, momentum, and position are never touched.

use super::bodies::NVec3;
use super::forces::ForceSet;
use super::params::Parameters;
use super::system::RevolvingSystem;

/// Advance the system by one tick of `params.dt` Earth days.
/// `dt` is scaled once by `params.time_scale` before use.
pub fn advance(sys: &mut RevolvingSystem, forces: &ForceSet, params: &Parameters) {
    let n = sys.members.len();
    if n == 0 { // nothing orbits, nothing moves
        return;
    }

    let dt = params.dt * params.time_scale;

    let targets = sys.members.clone();
    let sources = sys.registered();

    // Forces on every member from the tick-start snapshot. Positions are
    // not mutated until the drift pass below, so no partial update is
    // visible inside the tick.
    let mut out = vec![NVec3::zeros(); n];
    forces.accumulate_forces(&sys.bodies, &targets, &sources, &mut out);

    // Kick: p_n+1 = p_n + F_n * dt
    for (&id, f) in targets.iter().zip(out.iter()) {
        let b = sys.bodies.get_mut(id);
        b.force = *f;
        b.momentum += *f * dt;
    }

    // Drift: x_n+1 = x_n + p_n+1 / m * dt
    // The central body is included: its momentum is pinned at zero, so the
    // update is a no-op and it stays at the origin.
    for &id in sources.iter() {
        let b = sys.bodies.get_mut(id);
        b.position += b.momentum / b.mass * dt;
    }

    sys.t += dt;
}
