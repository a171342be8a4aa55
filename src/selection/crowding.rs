//! Crowding distance assignment (Deb et al., 2002).

use crate::fitness::MultiFitness;

/// Assigns a crowding distance to every individual of one front,
/// in place.
///
/// `front` holds indices into `fitnesses`, as produced by the sorters.
/// For each objective the front is sorted by raw value; the two boundary
/// individuals get `f64::INFINITY` (ties at a boundary included) and each
/// interior individual accumulates
/// `(next - prev) / ((max - min) * objective_count)`. An objective whose
/// values are all equal contributes nothing to interior individuals — the
/// zero-width range is skipped by an explicit branch, never divided by.
///
/// Distances are *overwritten*, not accumulated across calls. An empty
/// front is a no-op; a front of one or two individuals is all-infinite.
///
/// # Example
///
/// ```
/// use pareto_kit::MultiFitness;
/// use pareto_kit::selection::assign_crowding_dist;
///
/// let mut pop = vec![
///     MultiFitness::maximize(vec![1.0, 3.0]),
///     MultiFitness::maximize(vec![2.0, 2.0]),
///     MultiFitness::maximize(vec![3.0, 1.0]),
/// ];
/// assign_crowding_dist(&mut pop, &[0, 1, 2]);
/// assert!(pop[0].crowding_dist.is_infinite());
/// assert!(pop[1].crowding_dist.is_finite());
/// assert!(pop[2].crowding_dist.is_infinite());
/// ```
pub fn assign_crowding_dist(fitnesses: &mut [MultiFitness], front: &[usize]) {
    if front.is_empty() {
        return;
    }

    let n = front.len();
    let n_obj = fitnesses[front[0]].len();
    let mut distances = vec![0.0f64; n];
    let mut order: Vec<usize> = (0..n).collect();

    for obj in 0..n_obj {
        // Stable sort: individuals tied on this objective keep front order.
        order.sort_by(|&a, &b| {
            let va = fitnesses[front[a]].values()[obj];
            let vb = fitnesses[front[b]].values()[obj];
            va.partial_cmp(&vb).unwrap_or(std::cmp::Ordering::Equal)
        });

        distances[order[0]] = f64::INFINITY;
        distances[order[n - 1]] = f64::INFINITY;

        let min = fitnesses[front[order[0]]].values()[obj];
        let max = fitnesses[front[order[n - 1]]].values()[obj];
        if max == min {
            continue;
        }

        let norm = n_obj as f64 * (max - min);
        for i in 1..(n - 1) {
            let prev = fitnesses[front[order[i - 1]]].values()[obj];
            let next = fitnesses[front[order[i + 1]]].values()[obj];
            distances[order[i]] += (next - prev) / norm;
        }
    }

    for (pos, &idx) in front.iter().enumerate() {
        fitnesses[idx].crowding_dist = distances[pos];
    }
}
