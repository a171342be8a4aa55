//! Least hypervolume contributor of a population.
//!
//! Bounded-size Pareto archives evict the individual whose removal costs
//! the least hypervolume. Finding it takes one engine run per individual
//! over the population minus that individual; the runs are independent,
//! so the mapping step is pluggable and can fan out across threads.

use super::engine::hypervolume;
use crate::error::{Error, Result};
use crate::fitness::MultiFitness;

/// One exclusion evaluation: the population's points minus one
/// individual, plus the shared reference point.
///
/// Jobs own their data so a mapping hook can move them across threads
/// freely; nothing is shared between jobs.
#[derive(Debug, Clone)]
pub struct ContributionJob {
    /// The point set with one individual excluded (minimization space).
    pub points: Vec<Vec<f64>>,
    /// The reference point shared by every job of the query.
    pub reference: Vec<f64>,
}

impl ContributionJob {
    /// Hypervolume of the remaining point set.
    pub fn compute(&self) -> Result<f64> {
        hypervolume(&self.points, &self.reference)
    }
}

/// Returns the index of the individual contributing the least
/// hypervolume, evaluating the exclusion jobs sequentially.
///
/// Weighted fitness values are negated into minimization space. When no
/// reference point is given, one is derived as the per-dimension maximum
/// of the negated population plus one, so every point sits strictly
/// inside the boundary. Ties report the lowest index.
///
/// # Example
///
/// ```
/// use pareto_kit::MultiFitness;
/// use pareto_kit::hypervolume::least_contributor;
///
/// let pop = vec![
///     MultiFitness::maximize(vec![1.0, 5.0]),
///     MultiFitness::maximize(vec![5.0, 1.0]),
///     MultiFitness::maximize(vec![2.0, 2.0]),
/// ];
/// // The interior point is nearly covered by the extremes.
/// assert_eq!(least_contributor(&pop, None).unwrap(), 2);
/// ```
pub fn least_contributor(
    population: &[MultiFitness],
    ref_point: Option<&[f64]>,
) -> Result<usize> {
    least_contributor_with(population, ref_point, |jobs| {
        jobs.iter().map(ContributionJob::compute).collect()
    })
}

/// [`least_contributor`] with a caller-supplied mapping hook.
///
/// `map_func` receives every [`ContributionJob`] of the query and must
/// return their volumes in the same order; it exists purely so callers
/// can substitute a concurrent mapping primitive (a thread pool, a
/// distributed map) without changing the algorithm.
pub fn least_contributor_with<F>(
    population: &[MultiFitness],
    ref_point: Option<&[f64]>,
    map_func: F,
) -> Result<usize>
where
    F: FnOnce(Vec<ContributionJob>) -> Vec<Result<f64>>,
{
    if population.is_empty() {
        return Err(Error::EmptyPopulation);
    }
    let dims = population[0].len();
    for (index, fit) in population.iter().enumerate() {
        if fit.len() != dims {
            return Err(Error::DimensionMismatch {
                expected: dims,
                got: fit.len(),
                index,
            });
        }
    }

    // Weighted values are maximization-oriented; flip them so the engine
    // sees minimization distances.
    let points: Vec<Vec<f64>> = population
        .iter()
        .map(|f| f.wvalues().iter().map(|v| -v).collect())
        .collect();

    let reference: Vec<f64> = match ref_point {
        Some(r) => {
            if r.len() != dims {
                return Err(Error::DimensionMismatch {
                    expected: dims,
                    got: r.len(),
                    index: 0,
                });
            }
            r.to_vec()
        }
        None => (0..dims)
            .map(|d| {
                points
                    .iter()
                    .map(|p| p[d])
                    .fold(f64::NEG_INFINITY, f64::max)
                    + 1.0
            })
            .collect(),
    };

    let jobs: Vec<ContributionJob> = (0..points.len())
        .map(|i| {
            let mut remaining = Vec::with_capacity(points.len() - 1);
            remaining.extend_from_slice(&points[..i]);
            remaining.extend_from_slice(&points[i + 1..]);
            ContributionJob {
                points: remaining,
                reference: reference.clone(),
            }
        })
        .collect();

    // The individual whose exclusion leaves the most volume behind is
    // the one the set misses least.
    let mut best = 0;
    let mut best_volume = f64::NEG_INFINITY;
    for (i, volume) in map_func(jobs).into_iter().enumerate() {
        let volume = volume?;
        if volume > best_volume {
            best_volume = volume;
            best = i;
        }
    }
    Ok(best)
}

/// [`least_contributor`] with the exclusion jobs evaluated on the rayon
/// thread pool.
#[cfg(feature = "parallel")]
pub fn least_contributor_par(
    population: &[MultiFitness],
    ref_point: Option<&[f64]>,
) -> Result<usize> {
    use rayon::prelude::*;

    least_contributor_with(population, ref_point, |jobs| {
        jobs.par_iter().map(ContributionJob::compute).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_population() {
        let err = least_contributor(&[], None);
        assert!(matches!(err, Err(Error::EmptyPopulation)));
    }

    #[test]
    fn test_single_individual() {
        let pop = vec![MultiFitness::maximize(vec![1.0, 2.0])];
        assert_eq!(least_contributor(&pop, None).unwrap(), 0);
    }

    #[test]
    fn test_covered_interior_point() {
        let pop = vec![
            MultiFitness::maximize(vec![1.0, 5.0]),
            MultiFitness::maximize(vec![5.0, 1.0]),
            MultiFitness::maximize(vec![2.0, 2.0]),
        ];
        assert_eq!(least_contributor(&pop, None).unwrap(), 2);
    }

    #[test]
    fn test_minimization_weights() {
        let pop = vec![
            MultiFitness::minimize(vec![1.0, 5.0]),
            MultiFitness::minimize(vec![5.0, 1.0]),
            MultiFitness::minimize(vec![4.0, 4.0]),
        ];
        // The near-covered interior point adds the least volume.
        assert_eq!(least_contributor(&pop, None).unwrap(), 2);
    }

    #[test]
    fn test_explicit_reference_point() {
        let pop = vec![
            MultiFitness::minimize(vec![1.0, 3.0]),
            MultiFitness::minimize(vec![3.0, 1.0]),
        ];
        let idx = least_contributor(&pop, Some(&[10.0, 4.0])).unwrap();
        // The asymmetric reference leaves point 0 a much thinner slab.
        assert_eq!(idx, 0);
    }

    #[test]
    fn test_reference_dimension_mismatch() {
        let pop = vec![MultiFitness::minimize(vec![1.0, 2.0])];
        let err = least_contributor(&pop, Some(&[1.0, 2.0, 3.0]));
        assert!(matches!(err, Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn test_mixed_population_dimensions() {
        let pop = vec![
            MultiFitness::minimize(vec![1.0, 2.0]),
            MultiFitness::minimize(vec![1.0, 2.0, 3.0]),
        ];
        let err = least_contributor(&pop, None);
        assert!(matches!(
            err,
            Err(Error::DimensionMismatch {
                expected: 2,
                got: 3,
                index: 1,
            })
        ));
    }

    #[test]
    fn test_duplicates_report_equal_contribution() {
        let pop = vec![
            MultiFitness::minimize(vec![1.0, 5.0]),
            MultiFitness::minimize(vec![3.0, 3.0]),
            MultiFitness::minimize(vec![3.0, 3.0]),
        ];
        let idx = least_contributor(&pop, None).unwrap();
        assert!(idx == 1 || idx == 2);

        // The exclusion volumes of the two duplicates must be identical.
        let mut volumes = Vec::new();
        least_contributor_with(&pop, None, |jobs| {
            let results: Vec<Result<f64>> =
                jobs.iter().map(ContributionJob::compute).collect();
            volumes = results.iter().map(|r| *r.as_ref().unwrap()).collect();
            results
        })
        .unwrap();
        assert_eq!(volumes[1], volumes[2]);
    }

    #[test]
    fn test_map_hook_sees_all_jobs() {
        let pop = vec![
            MultiFitness::minimize(vec![1.0, 2.0]),
            MultiFitness::minimize(vec![2.0, 1.0]),
        ];
        let mut seen = 0;
        least_contributor_with(&pop, None, |jobs| {
            seen = jobs.len();
            jobs.iter().map(ContributionJob::compute).collect()
        })
        .unwrap();
        assert_eq!(seen, 2);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let pop = vec![
            MultiFitness::minimize(vec![1.0, 6.0]),
            MultiFitness::minimize(vec![2.0, 4.0]),
            MultiFitness::minimize(vec![4.0, 2.0]),
            MultiFitness::minimize(vec![6.0, 1.0]),
        ];
        assert_eq!(
            least_contributor_par(&pop, None).unwrap(),
            least_contributor(&pop, None).unwrap()
        );
    }
}
