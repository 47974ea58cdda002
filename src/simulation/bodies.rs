//! Core body types for the revolving-system simulation.
//!
//! Defines the body model and its owner:
//! - `CelestialBody` with a `BodyKind` tag (`Star` or `Satellite`)
//! - `OrbitalElements` carried by satellites
//! - `BodyStore`, an index arena owning every authored body
//!
//! Dynamic state (position, momentum, force) starts zeroed and unresolved;
//! the orbit initializer assigns it and the integrator mutates it.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Index into a `BodyStore`. Parent links are non-owning `BodyId`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

/// Orbital parameters of a satellite relative to its parent
#[derive(Debug, Clone)]
pub struct OrbitalElements {
    pub parent: BodyId, // the body this one revolves around
    pub distance_to_parent: f64, // initial orbital radius (m)
    pub orbital_period: f64, // one revolution, in Earth days
    pub inclination: f64, // radians, converted once at construction
}

/// Variant tag: a star anchors a chain, a satellite revolves around a parent
#[derive(Debug, Clone)]
pub enum BodyKind {
    Star,
    Satellite(OrbitalElements),
}

#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub name: String, // diagnostic identity
    pub mass: f64, // kg
    pub radius: f64, // m, display only, irrelevant to dynamics
    pub color: String, // opaque display tag
    pub kind: BodyKind,
    pub position: NVec3, // m
    pub momentum: NVec3, // kg m/s
    pub force: NVec3, // N, recomputed every tick
    pub resolved: bool, // initial state assigned
}

impl CelestialBody {
    fn new(name: &str, mass: f64, radius: f64, color: &str, kind: BodyKind) -> Self {
        Self {
            name: name.to_string(),
            mass,
            radius,
            color: color.to_string(),
            kind,
            position: NVec3::zeros(),
            momentum: NVec3::zeros(),
            force: NVec3::zeros(),
            resolved: false,
        }
    }

    /// Parent link, `None` for stars
    pub fn parent(&self) -> Option<BodyId> {
        match &self.kind {
            BodyKind::Star => None,
            BodyKind::Satellite(el) => Some(el.parent),
        }
    }

    pub fn is_star(&self) -> bool {
        matches!(self.kind, BodyKind::Star)
    }
}

/// Arena owning every authored body, addressed by `BodyId`.
///
/// Ids are assigned sequentially in insertion order. No plausibility
/// validation happens here; callers own that (the configuration layer
/// validates before interning). A zero mass or distance surfaces downstream
/// as a degenerate force or division by zero.
#[derive(Debug, Clone, Default)]
pub struct BodyStore {
    bodies: Vec<CelestialBody>,
}

impl BodyStore {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Add a star: no parent, no orbital elements
    pub fn add_star(&mut self, name: &str, mass: f64, radius: f64, color: &str) -> BodyId {
        self.bodies.push(CelestialBody::new(name, mass, radius, color, BodyKind::Star));
        BodyId(self.bodies.len() - 1)
    }

    /// Add a satellite of `parent`. Inclination arrives in degrees and is
    /// stored as radians, converted exactly once here.
    pub fn add_satellite(
        &mut self,
        name: &str,
        mass: f64,
        radius: f64,
        color: &str,
        parent: BodyId,
        distance_to_parent: f64,
        orbital_period: f64,
        inclination_deg: f64,
    ) -> BodyId {
        let elements = OrbitalElements {
            parent,
            distance_to_parent,
            orbital_period,
            inclination: inclination_deg.to_radians(),
        };
        self.bodies.push(CelestialBody::new(name, mass, radius, color, BodyKind::Satellite(elements)));
        BodyId(self.bodies.len() - 1)
    }

    pub fn get(&self, id: BodyId) -> &CelestialBody {
        &self.bodies[id.0]
    }

    pub fn get_mut(&mut self, id: BodyId) -> &mut CelestialBody {
        &mut self.bodies[id.0]
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &CelestialBody)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }
}
