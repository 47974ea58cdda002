use std::time::Instant;

use crate::simulation::bodies::{BodyStore, NVec3};
use crate::simulation::forces::{Force, ForceSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::system::RevolvingSystem;

/// Helper to build a star plus `n` satellites of it
/// Deterministic trig spread, no rand needed
fn make_system(n: usize) -> RevolvingSystem {
    let mut store = BodyStore::new();
    let star = store.add_star("anchor", 1.989e30, 6.95e8, "yellow");

    let mut sats = Vec::with_capacity(n);
    for i in 0..n {
        let i_f = i as f64;
        sats.push(store.add_satellite(
            &format!("sat-{i}"),
            1.0e24 + (i_f * 0.37).sin().abs() * 1.0e23,
            1.0e6,
            "white",
            star,
            1.0e11 + i_f * 1.0e9,
            300.0 + i_f * 3.0,
            (i_f * 7.3) % 360.0, // degrees
        ));
    }

    let mut system = RevolvingSystem::new(store, star);
    for id in sats {
        system
            .add_satellite(id)
            .expect("a direct satellite of the anchor star is always admissible");
    }
    system
}

fn make_params() -> Parameters {
    Parameters {
        dt: 1.0,
        ..Parameters::default()
    }
}

/// Time one full force accumulation for a range of system sizes
pub fn bench_forces() {
    let ns = [50, 100, 200, 400, 800, 1600];

    for n in ns {
        let sys = make_system(n);
        let targets = sys.members.clone();
        let sources = sys.registered();

        let gravity = NewtonianGravity { G: 6.67e-11 };
        let mut out = vec![NVec3::zeros(); targets.len()];

        // Warm up
        gravity.accumulate(&sys.bodies, &targets, &sources, &mut out);

        let t0 = Instant::now();
        gravity.accumulate(&sys.bodies, &targets, &sources, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, forces = {dt_direct:8.6} s");
    }
}

/// Time whole ticks (forces + kick + drift) for a range of system sizes
pub fn bench_step() {
    let ns = [50, 100, 200, 400, 800];
    let steps = 10; // ticks per measurement

    for n in ns {
        let mut sys = make_system(n);
        let forces = ForceSet::new().with(NewtonianGravity { G: 6.67e-11 });
        let params = make_params();

        // Warm up
        sys.step(&forces, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            sys.step(&forces, &params);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {per_step:8.6} s");
    }
}
