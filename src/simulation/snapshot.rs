//! Read-only per-tick output for external display collaborators
//!
//! The engine never depends on a render loop: it emits a snapshot per tick
//! through an injected [`TickObserver`] and moves on (fire and forget)

use super::bodies::NVec3;

/// What a display needs to draw one body, nothing more
#[derive(Debug, Clone)]
pub struct BodySnapshot {
    pub name: String,
    pub position: NVec3, // m
    pub radius: f64, // m
    pub color: String, // opaque display tag
}

pub trait TickObserver {
    /// Called once before the first tick with every registered body,
    /// members first and the central body last
    fn on_register(&mut self, _bodies: &[BodySnapshot]) {}

    /// Called after each completed tick
    fn on_tick(&mut self, tick: u64, bodies: &[BodySnapshot]);
}

/// Observer that ignores everything, for tests and benchmarks
pub struct NullObserver;

impl TickObserver for NullObserver {
    fn on_tick(&mut self, _tick: u64, _bodies: &[BodySnapshot]) {}
}

/// Prints one `tick, name, x, y, z` line per body every `every` ticks
pub struct SnapshotPrinter {
    pub every: u64,
}

impl TickObserver for SnapshotPrinter {
    fn on_register(&mut self, bodies: &[BodySnapshot]) {
        for b in bodies {
            println!("0, {}, {:.6e}, {:.6e}, {:.6e}", b.name, b.position.x, b.position.y, b.position.z);
        }
    }

    fn on_tick(&mut self, tick: u64, bodies: &[BodySnapshot]) {
        if self.every == 0 || tick % self.every != 0 {
            return;
        }
        for b in bodies {
            println!("{}, {}, {:.6e}, {:.6e}, {:.6e}", tick, b.name, b.position.x, b.position.y, b.position.z);
        }
    }
}
