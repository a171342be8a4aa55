//! Fast non-dominated sorting (Deb et al., 2002).

use super::group_identical;
use crate::fitness::MultiFitness;

/// Sorts a population into Pareto fronts of population indices.
///
/// Front 0 holds the non-dominated individuals; each later front is
/// dominated only by earlier ones. Fronts are emitted until the
/// cumulative individual count reaches `min(population size, sel_count)`,
/// so a budget covering the whole population yields an exact partition.
///
/// - `sel_count == 0` returns no fronts.
/// - `first_front_only` skips building anything past front 0.
///
/// Distinct fitnesses are compared pairwise once each; individuals with
/// identical weighted values share the outcome and expand back into their
/// front in input order.
///
/// # Example
///
/// ```
/// use pareto_kit::MultiFitness;
/// use pareto_kit::sorting::sort_non_dominated;
///
/// let pop = vec![
///     MultiFitness::minimize(vec![1.0, 1.0]),
///     MultiFitness::minimize(vec![2.0, 2.0]),
///     MultiFitness::minimize(vec![1.0, 2.0]),
/// ];
/// let fronts = sort_non_dominated(&pop, pop.len(), false);
/// assert_eq!(fronts, vec![vec![0], vec![2], vec![1]]);
/// ```
pub fn sort_non_dominated(
    fitnesses: &[MultiFitness],
    sel_count: usize,
    first_front_only: bool,
) -> Vec<Vec<usize>> {
    if sel_count == 0 || fitnesses.is_empty() {
        return Vec::new();
    }

    let groups = group_identical(fitnesses);
    let k = groups.len();
    let rep = |g: usize| &fitnesses[groups[g][0]];

    // Count, for each distinct fitness, how many others dominate it and
    // which ones it dominates. Each unordered pair is examined once.
    let mut dominating = vec![0usize; k];
    let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); k];
    let mut current: Vec<usize> = Vec::new();

    for i in 0..k {
        for j in (i + 1)..k {
            if rep(i).dominates(rep(j)) {
                dominating[j] += 1;
                dominated[i].push(j);
            } else if rep(j).dominates(rep(i)) {
                dominating[i] += 1;
                dominated[j].push(i);
            }
        }
        if dominating[i] == 0 {
            current.push(i);
        }
    }

    let mut fronts: Vec<Vec<usize>> = vec![Vec::new()];
    for &g in &current {
        fronts[0].extend_from_slice(&groups[g]);
    }
    let mut sorted_count = fronts[0].len();

    if !first_front_only {
        let budget = fitnesses.len().min(sel_count);
        while sorted_count < budget {
            let mut next: Vec<usize> = Vec::new();
            let mut members: Vec<usize> = Vec::new();
            for &g in &current {
                for &d in &dominated[g] {
                    dominating[d] -= 1;
                    if dominating[d] == 0 {
                        next.push(d);
                        sorted_count += groups[d].len();
                        members.extend_from_slice(&groups[d]);
                    }
                }
            }
            fronts.push(members);
            current = next;
        }
    }

    fronts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimize_all(points: &[[f64; 2]]) -> Vec<MultiFitness> {
        points
            .iter()
            .map(|p| MultiFitness::minimize(p.to_vec()))
            .collect()
    }

    #[test]
    fn test_zero_budget() {
        let pop = minimize_all(&[[1.0, 2.0]]);
        assert!(sort_non_dominated(&pop, 0, false).is_empty());
    }

    #[test]
    fn test_empty_population() {
        assert!(sort_non_dominated(&[], 5, false).is_empty());
    }

    #[test]
    fn test_single_front() {
        let pop = minimize_all(&[[1.0, 5.0], [3.0, 3.0], [5.0, 1.0]]);
        let fronts = sort_non_dominated(&pop, 3, false);
        assert_eq!(fronts, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_chain_of_fronts() {
        let pop = minimize_all(&[[3.0, 3.0], [1.0, 1.0], [2.0, 2.0]]);
        let fronts = sort_non_dominated(&pop, 3, false);
        assert_eq!(fronts, vec![vec![1], vec![2], vec![0]]);
    }

    #[test]
    fn test_partition_exact() {
        let pop = minimize_all(&[
            [1.0, 5.0],
            [2.0, 4.0],
            [4.0, 4.0],
            [3.0, 3.0],
            [5.0, 5.0],
            [2.0, 4.0],
        ]);
        let fronts = sort_non_dominated(&pop, pop.len(), false);
        let mut seen: Vec<usize> = fronts.iter().flatten().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..pop.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_duplicates_share_front() {
        let pop = minimize_all(&[[2.0, 2.0], [1.0, 1.0], [2.0, 2.0]]);
        let fronts = sort_non_dominated(&pop, 3, false);
        assert_eq!(fronts, vec![vec![1], vec![0, 2]]);
    }

    #[test]
    fn test_budget_stops_early() {
        let pop = minimize_all(&[[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0]]);
        let fronts = sort_non_dominated(&pop, 2, false);
        // Two fronts cover the budget of 2; the rest are never built.
        assert_eq!(fronts, vec![vec![0], vec![1]]);
    }

    #[test]
    fn test_first_front_only() {
        let pop = minimize_all(&[[1.0, 5.0], [5.0, 1.0], [6.0, 6.0]]);
        let fronts = sort_non_dominated(&pop, 3, true);
        assert_eq!(fronts, vec![vec![0, 1]]);
    }

    #[test]
    fn test_front_monotonicity() {
        let pop = minimize_all(&[
            [1.0, 4.0],
            [4.0, 1.0],
            [2.0, 5.0],
            [5.0, 2.0],
            [3.0, 6.0],
        ]);
        let fronts = sort_non_dominated(&pop, pop.len(), false);
        for front in &fronts {
            for &a in front {
                for &b in front {
                    assert!(!pop[a].dominates(&pop[b]), "{a} dominates {b} in same front");
                }
            }
        }
        for w in fronts.windows(2) {
            for &b in &w[1] {
                assert!(
                    w[0].iter().any(|&a| pop[a].dominates(&pop[b])),
                    "{b} not dominated by previous front"
                );
            }
        }
    }

    #[test]
    fn test_maximization_weights() {
        let pop: Vec<MultiFitness> = [[1.0, 1.0], [2.0, 2.0]]
            .iter()
            .map(|p| MultiFitness::maximize(p.to_vec()))
            .collect();
        let fronts = sort_non_dominated(&pop, 2, false);
        // Under maximization the larger vector leads.
        assert_eq!(fronts, vec![vec![1], vec![0]]);
    }
}
