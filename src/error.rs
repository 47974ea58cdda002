//! Error taxonomy for scenario construction and the physics engine
//!
//! Configuration and ancestry problems are reported without aborting the
//! run; an unresolvable parent graph is fatal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Malformed body or parameter values, rejected before any body is built
    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    /// The candidate's parent chain reaches a star other than the central body
    #[error("body `{name}` does not orbit the central body of this system")]
    AncestryRejected { name: String },

    /// Two bodies at the same position, the pairwise force is undefined
    #[error("bodies `{a}` and `{b}` coincide, gravitational force is undefined")]
    DegenerateForce { a: String, b: String },

    /// A parent chain that cannot be resolved (cycle or unanchored root)
    #[error("cannot resolve the ancestor chain at `{name}`")]
    UnresolvedAncestor { name: String },
}
