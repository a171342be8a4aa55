//! NSGA-II environmental selection (Deb et al., 2002).

use super::crowding::assign_crowding_dist;
use crate::fitness::MultiFitness;
use crate::sorting::SortingStrategy;

/// Selects `sel_count` individuals by Pareto rank and crowding distance.
///
/// The population is sorted into fronts with a budget of `sel_count`,
/// crowding distances are assigned within each front, whole fronts are
/// taken in rank order, and the boundary front is filled by descending
/// crowding distance with a stable sort (ties keep front order). Returns
/// the selected indices; crowding distances remain available on the
/// mutated `fitnesses` afterwards.
///
/// When `sel_count` is at least the population size the result is the
/// whole population ordered by front; a larger `sel_count` truncates
/// gracefully to the population.
///
/// # Example
///
/// ```
/// use pareto_kit::{MultiFitness, SortingStrategy};
/// use pareto_kit::selection::sel_nsga2;
///
/// let mut pop = vec![
///     MultiFitness::minimize(vec![1.0, 4.0]),
///     MultiFitness::minimize(vec![4.0, 1.0]),
///     MultiFitness::minimize(vec![2.0, 2.0]),
///     MultiFitness::minimize(vec![5.0, 5.0]),
/// ];
/// let strategy: SortingStrategy = "standard".parse().unwrap();
/// let chosen = sel_nsga2(&mut pop, 3, strategy);
/// assert_eq!(chosen.len(), 3);
/// assert!(!chosen.contains(&3)); // the dominated one misses the cut
/// ```
pub fn sel_nsga2(
    fitnesses: &mut [MultiFitness],
    sel_count: usize,
    strategy: SortingStrategy,
) -> Vec<usize> {
    let fronts = strategy.sort(fitnesses, sel_count);
    for front in &fronts {
        assign_crowding_dist(fitnesses, front);
    }

    let mut chosen: Vec<usize> = fronts[..fronts.len().saturating_sub(1)]
        .iter()
        .flatten()
        .copied()
        .collect();

    let remaining = sel_count.saturating_sub(chosen.len());
    if remaining > 0 {
        if let Some(boundary) = fronts.last() {
            let mut by_crowding = boundary.clone();
            by_crowding.sort_by(|&a, &b| {
                fitnesses[b]
                    .crowding_dist
                    .partial_cmp(&fitnesses[a].crowding_dist)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            chosen.extend(by_crowding.into_iter().take(remaining));
        }
    }

    chosen
}
