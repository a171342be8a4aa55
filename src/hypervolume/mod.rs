//! Hypervolume indicator and least-contributor queries.
//!
//! The hypervolume of a point set is the volume of objective space it
//! dominates, bounded by a reference point that every point must beat.
//! It is the standard scalar quality measure for Pareto fronts: adding a
//! non-dominated point always grows it, so maximizing hypervolume pushes
//! a front both towards the optimum and along its spread.
//!
//! - [`HyperVolume`] / [`hypervolume`]: The dimension-sweep engine of
//!   Fonseca et al. (2006), recursing over a multi-dimensional linked
//!   structure ([`HyperList`]) that shares its nodes between one
//!   circular list per dimension.
//! - [`least_contributor`]: The individual whose removal costs the least
//!   volume, with a pluggable mapping hook
//!   ([`least_contributor_with`]) and a rayon fan-out behind the
//!   `parallel` feature.
//!
//! Everything here works in minimization space: lower coordinates are
//! better and the reference point is element-wise worse than every
//! point. [`least_contributor`] handles the sign projection from
//! weighted (maximization-oriented) fitness values itself; callers of
//! the raw engine must transform their objectives first.
//!
//! The multi-list is built fresh inside each `compute` call and never
//! outlives it, so engine values can be shared freely; one sweep's
//! link mutations are invisible to any other.

mod engine;
mod least_contrib;
mod multi_list;

pub use engine::{hypervolume, HyperVolume};
#[cfg(feature = "parallel")]
pub use least_contrib::least_contributor_par;
pub use least_contrib::{least_contributor, least_contributor_with, ContributionJob};
pub use multi_list::{HyperList, HyperNode};
