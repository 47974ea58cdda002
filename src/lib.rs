pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::bodies::{BodyId, BodyKind, BodyStore, CelestialBody, NVec3, OrbitalElements};
pub use simulation::forces::{gforce, Force, ForceSet, NewtonianGravity};
pub use simulation::integrator::advance;
pub use simulation::orbit::resolve_state;
pub use simulation::params::{Parameters, LEGACY_TIME_SCALE, SECONDS_PER_DAY};
pub use simulation::scenario::Scenario;
pub use simulation::snapshot::{BodySnapshot, NullObserver, SnapshotPrinter, TickObserver};
pub use simulation::system::RevolvingSystem;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};

pub use error::SimError;

pub use benchmark::benchmark::{bench_forces, bench_step};
