//! Front quality metrics against a known optimal front.
//!
//! Benchmark-style measures from the NSGA-II literature: how close an
//! obtained front sits to the true Pareto front and how evenly it covers
//! it. All of them treat the optimal front as ground truth supplied by
//! the caller; they are diagnostics, not selection criteria.

use crate::fitness::MultiFitness;

/// Deb's diversity metric Δ for a two-objective front.
///
/// `first` and `last` are the extreme points of the *optimal* front.
/// Measures the spread of consecutive distances along the obtained
/// front, plus the gaps to the optimal extremes; smaller is better, 0
/// meaning perfectly even coverage reaching both extremes.
///
/// The front must be ordered along the trade-off curve (e.g. by one
/// objective). A single-individual front degenerates to the sum of its
/// distances to the two extremes; an empty front returns 0.
pub fn nsga_diversity(front: &[MultiFitness], first: &[f64], last: &[f64]) -> f64 {
    if front.is_empty() {
        return 0.0;
    }

    let head = front[0].values();
    let tail = front[front.len() - 1].values();
    let df = (head[0] - first[0]).hypot(head[1] - first[1]);
    let dl = (tail[0] - last[0]).hypot(tail[1] - last[1]);

    if front.len() == 1 {
        return df + dl;
    }

    let gaps: Vec<f64> = front
        .windows(2)
        .map(|pair| {
            let a = pair[0].values();
            let b = pair[1].values();
            (a[0] - b[0]).hypot(a[1] - b[1])
        })
        .collect();

    let mean = gaps.iter().sum::<f64>() / gaps.len() as f64;
    let deviation: f64 = gaps.iter().map(|g| (g - mean).abs()).sum();
    (df + dl + deviation) / (df + dl + gaps.len() as f64 * mean)
}

/// Deb's convergence metric: mean Euclidean distance from each
/// individual to its nearest point of the optimal front.
///
/// Smaller is better, 0 meaning the front lies on the optimum. An empty
/// front returns 0; an empty optimal front returns infinity.
pub fn nsga_convergence(front: &[MultiFitness], optimal: &[Vec<f64>]) -> f64 {
    if front.is_empty() {
        return 0.0;
    }

    let total: f64 = front
        .iter()
        .map(|ind| {
            optimal
                .iter()
                .map(|opt| squared_distance(ind.values(), opt))
                .fold(f64::INFINITY, f64::min)
                .sqrt()
        })
        .sum();
    total / front.len() as f64
}

/// Inverted generational distance of an approximation front.
///
/// Mean distance from each *optimal* point to its nearest approximation
/// point, so both convergence and coverage gaps raise the value. An
/// empty optimal front returns 0; an empty approximation returns
/// infinity.
pub fn inv_gen_dist(approx: &[Vec<f64>], optimal: &[Vec<f64>]) -> f64 {
    if optimal.is_empty() {
        return 0.0;
    }

    let total: f64 = optimal
        .iter()
        .map(|opt| {
            approx
                .iter()
                .map(|a| squared_distance(a, opt))
                .fold(f64::INFINITY, f64::min)
                .sqrt()
        })
        .sum();
    total / optimal.len() as f64
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}
