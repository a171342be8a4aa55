//! Pareto-based selection: crowding distance, NSGA-II, reference points.
//!
//! [`sel_nsga2`] composes non-dominated sorting with in-place crowding
//! distance assignment to choose exactly `n` individuals from a
//! population. The pieces are exposed separately so callers can run their
//! own selection policy on top of the same ranking:
//!
//! - [`assign_crowding_dist`]: Per-front diversity scores.
//! - [`uniform_reference_points`]: Das–Dennis reference directions for
//!   decomposition-style selection.
//!
//! Single-objective selection schemes (tournament, roulette, rank) are
//! deliberately out of scope; this module only deals with populations
//! ranked by Pareto dominance.

mod crowding;
mod nsga2;
mod reference;

pub use crowding::assign_crowding_dist;
pub use nsga2::sel_nsga2;
pub use reference::uniform_reference_points;
