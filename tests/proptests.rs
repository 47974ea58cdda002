//! Property-based tests for the orbit initializer and ancestry validation.
//!
//! These check the initialization invariants across wide ranges of orbital
//! parameters instead of a handful of authored bodies.

use std::f64::consts::TAU;

use proptest::prelude::*;

use revsim::{BodyStore, RevolvingSystem, SECONDS_PER_DAY};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A direct child of the central body gets exactly its intrinsic
    /// orbital momentum, along +y, at exactly its orbital radius.
    #[test]
    fn prop_direct_child_momentum_frame(
        mass in 1.0e20f64..1.0e28,
        distance in 1.0e9f64..1.0e13,
        period in 1.0f64..1.0e5,
        incl_deg in -360.0f64..360.0,
    ) {
        let mut store = BodyStore::new();
        let star = store.add_star("star", 1.989e30, 6.95e8, "yellow");
        let sat = store.add_satellite("sat", mass, 1.0e6, "white", star, distance, period, incl_deg);

        let mut sys = RevolvingSystem::new(store, star);
        sys.add_satellite(sat).unwrap();

        let body = sys.bodies.get(sat);
        let expected = mass * (distance * TAU) / (period * SECONDS_PER_DAY);

        prop_assert!(body.momentum.x == 0.0 && body.momentum.z == 0.0);
        prop_assert!(
            (body.momentum.y - expected).abs() <= expected * 1e-9,
            "momentum {} != {}", body.momentum.y, expected
        );
        prop_assert!(
            (body.position.norm() - distance).abs() <= distance * 1e-9,
            "radius {} != {}", body.position.norm(), distance
        );
    }

    /// Inclination is an angular placement in the x-z plane: the initial
    /// position never leaves it, and the angle matches the input.
    #[test]
    fn prop_placement_angle_matches_inclination(
        distance in 1.0e9f64..1.0e13,
        incl_deg in -179.0f64..179.0,
    ) {
        let mut store = BodyStore::new();
        let star = store.add_star("star", 1.989e30, 6.95e8, "yellow");
        let sat = store.add_satellite("sat", 1.0e24, 1.0e6, "white", star, distance, 100.0, incl_deg);

        let mut sys = RevolvingSystem::new(store, star);
        sys.add_satellite(sat).unwrap();

        let body = sys.bodies.get(sat);
        prop_assert!(body.position.y == 0.0);

        let angle = body.position.z.atan2(body.position.x);
        let expected = incl_deg.to_radians();
        prop_assert!(
            (angle - expected).abs() < 1e-9,
            "angle {} != inclination {}", angle, expected
        );
    }

    /// Construction is deterministic: the same inputs give bit-identical
    /// initial state, with no hidden randomness.
    #[test]
    fn prop_construction_deterministic(
        mass in 1.0e20f64..1.0e28,
        distance in 1.0e9f64..1.0e13,
        period in 1.0f64..1.0e5,
        incl_deg in -360.0f64..360.0,
    ) {
        let build = || {
            let mut store = BodyStore::new();
            let star = store.add_star("star", 1.989e30, 6.95e8, "yellow");
            let sat = store.add_satellite("sat", mass, 1.0e6, "white", star, distance, period, incl_deg);
            let mut sys = RevolvingSystem::new(store, star);
            sys.add_satellite(sat).unwrap();
            (sys.bodies.get(sat).position, sys.bodies.get(sat).momentum)
        };

        let (xa, pa) = build();
        let (xb, pb) = build();
        prop_assert_eq!(xa, xb);
        prop_assert_eq!(pa, pb);
    }

    /// Chains of any depth below the central body are admissible, and
    /// every link resolves.
    #[test]
    fn prop_chain_of_any_depth_is_admissible(depth in 1usize..6) {
        let mut store = BodyStore::new();
        let star = store.add_star("star", 1.989e30, 6.95e8, "yellow");

        let mut parent = star;
        let mut chain = Vec::new();
        for level in 0..depth {
            // Shrink each level so the hierarchy stays gravitationally sane
            let scale = 0.01f64.powi(level as i32);
            parent = store.add_satellite(
                &format!("level-{level}"),
                5.0e24 * scale,
                1.0e6,
                "white",
                parent,
                1.0e11 * scale,
                100.0,
                5.0,
            );
            chain.push(parent);
        }

        let mut sys = RevolvingSystem::new(store, star);
        // Register deepest-first, forcing the initializer up the chain
        for &id in chain.iter().rev() {
            prop_assert!(sys.add_satellite(id).is_ok());
        }
        prop_assert_eq!(sys.members.len(), depth);
        for &id in &chain {
            prop_assert!(sys.bodies.get(id).resolved);
        }
    }
}
