//! Multi-objective Pareto ranking and indicator toolkit.
//!
//! Provides the ranking and quality-indicator building blocks used by
//! Pareto-based evolutionary algorithms:
//!
//! - **Non-dominated sorting**: Partition a population into successive
//!   Pareto fronts, either with the classic fast sort (Deb et al., 2002)
//!   or the divide-and-conquer variant with logarithmic complexity per
//!   objective (Fortin et al., 2013).
//! - **Crowding distance**: Per-individual diversity scores within a
//!   front, assigned in place.
//! - **NSGA-II selection**: Compose sorting and crowding to pick exactly
//!   `n` individuals from a population.
//! - **Hypervolume**: The volume of objective space dominated by a point
//!   set relative to a reference point (Fonseca et al., 2006), plus the
//!   least-contributor query used by bounded Pareto archives.
//! - **Front metrics**: Convergence, diversity, and inverted generational
//!   distance measures for comparing fronts against a known optimum.
//!
//! # Architecture
//!
//! The crate is a pure-algorithm layer: no I/O, no global state, no
//! background work. Individuals stay opaque to the library — populations
//! are described by their [`MultiFitness`] vectors and every ranking
//! operation returns *indices* into the caller's population, so any
//! genome representation can sit on top.
//!
//! # Conventions
//!
//! [`MultiFitness`] carries per-objective sign weights (positive =
//! maximize, negative = minimize); dominance is always evaluated over the
//! weighted values. The hypervolume engine instead works in plain
//! minimization space, matching the usual indicator literature.
//!
//! # Features
//!
//! - `parallel`: rayon-based fan-out for the least-contributor query.
//! - `serde`: Serialize/Deserialize derives on the public data types.
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*
//! - Fortin et al. (2013), *Generalizing the Improved Run-Time Complexity
//!   Algorithm for Non-Dominated Sorting*
//! - Fonseca et al. (2006), *An Improved Dimension-Sweep Algorithm for
//!   the Hypervolume Indicator*

pub mod error;
pub mod fitness;
pub mod hypervolume;
pub mod metrics;
pub mod selection;
pub mod sorting;

pub use error::{Error, Result};
pub use fitness::MultiFitness;
pub use sorting::SortingStrategy;
