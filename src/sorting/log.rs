//! Divide-and-conquer non-dominated sorting (Fortin et al., 2013).
//!
//! Generalizes Jensen's improved run-time algorithm to populations with
//! duplicate and incomparable fitnesses. Distinct fitnesses are sorted
//! lexicographically, then recursively split at per-objective medians;
//! two-objective subproblems are resolved by a staircase sweep instead of
//! pairwise comparison.

use super::group_identical;
use crate::fitness::MultiFitness;
use std::cmp::Ordering;

/// Sorts a population into Pareto fronts of population indices, using the
/// divide-and-conquer strategy.
///
/// Produces the same front partition as
/// [`sort_non_dominated`](super::sort_non_dominated): every individual
/// receives the same rank under either strategy. Within a front,
/// fitnesses appear in descending lexicographic order of their weighted
/// values rather than first-seen order.
///
/// Budget semantics match the standard sort: fronts are kept until the
/// cumulative individual count reaches `min(population size, sel_count)`,
/// `sel_count == 0` yields no fronts, and `first_front_only` keeps only
/// front 0.
pub fn sort_log_non_dominated(
    fitnesses: &[MultiFitness],
    sel_count: usize,
    first_front_only: bool,
) -> Vec<Vec<usize>> {
    if sel_count == 0 || fitnesses.is_empty() {
        return Vec::new();
    }

    let groups = group_identical(fitnesses);
    let fits: Vec<Vec<f64>> = groups
        .iter()
        .map(|g| fitnesses[g[0]].wvalues().to_vec())
        .collect();
    let n_obj = fitnesses[0].len();

    let mut ids: Vec<usize> = (0..fits.len()).collect();
    ids.sort_by(|&a, &b| lex_cmp(&fits[b], &fits[a]));

    let front = if n_obj <= 1 {
        // A single objective degenerates to the descending sort itself:
        // each distinct value is dominated by exactly the better ones.
        let mut front = vec![0usize; fits.len()];
        for (rank, &id) in ids.iter().enumerate() {
            front[id] = rank;
        }
        front
    } else {
        let mut sort = LogSort {
            fits: &fits,
            front: vec![0; fits.len()],
        };
        sort.helper_a(ids.clone(), n_obj - 1);
        sort.front
    };

    let n_fronts = front.iter().map(|&f| f + 1).max().unwrap_or(0);
    let mut fronts: Vec<Vec<usize>> = vec![Vec::new(); n_fronts];
    for &id in &ids {
        fronts[front[id]].extend_from_slice(&groups[id]);
    }

    if first_front_only {
        fronts.truncate(1);
        return fronts;
    }

    let budget = fitnesses.len().min(sel_count);
    let mut count = 0;
    for i in 0..fronts.len() {
        count += fronts[i].len();
        if count >= budget {
            fronts.truncate(i + 1);
            break;
        }
    }
    fronts
}

/// Shared state of one sorting run: the distinct weighted-fitness vectors
/// and the front number assigned to each so far.
struct LogSort<'a> {
    fits: &'a [Vec<f64>],
    front: Vec<usize>,
}

impl LogSort<'_> {
    /// Non-dominated sort of `items` restricted to objectives `0..=obj`.
    ///
    /// `items` must be lexicographically descending; recursion preserves
    /// that order through the median splits.
    fn helper_a(&mut self, items: Vec<usize>, obj: usize) {
        if items.len() < 2 {
            return;
        }
        if items.len() == 2 {
            let (s1, s2) = (items[0], items[1]);
            if is_dominated(&self.fits[s2][..=obj], &self.fits[s1][..=obj]) {
                self.front[s2] = self.front[s2].max(self.front[s1] + 1);
            }
        } else if obj == 1 {
            self.sweep_a(&items);
        } else if self.all_equal_on(&items, obj) {
            // Objective obj cannot separate anyone: drop to the next one.
            self.helper_a(items, obj - 1);
        } else {
            let (best, worst) = self.split_a(&items, obj);
            self.helper_a(best.clone(), obj);
            self.helper_b(&best, &worst, obj - 1);
            self.helper_a(worst, obj);
        }
    }

    /// Raises the fronts of `worst` according to the already-ranked
    /// `best`, over objectives `0..=obj`. Members of `worst` are never
    /// compared with each other here.
    fn helper_b(&mut self, best: &[usize], worst: &[usize], obj: usize) {
        if best.is_empty() || worst.is_empty() {
            return;
        }
        if best.len() == 1 || worst.len() == 1 {
            for &hi in worst {
                for &li in best {
                    let covered = {
                        let h = &self.fits[hi][..=obj];
                        let l = &self.fits[li][..=obj];
                        is_dominated(h, l) || h == l
                    };
                    if covered {
                        self.front[hi] = self.front[hi].max(self.front[li] + 1);
                    }
                }
            }
        } else if obj == 1 {
            self.sweep_b(best, worst);
        } else {
            let best_min = self.min_on(best, obj);
            let best_max = self.max_on(best, obj);
            let worst_min = self.min_on(worst, obj);
            let worst_max = self.max_on(worst, obj);

            if best_min >= worst_max {
                // Everything in best covers worst on this objective
                // (including the all-equal case): recurse on the rest.
                self.helper_b(best, worst, obj - 1);
            } else if best_max >= worst_min {
                let (best1, best2, worst1, worst2) = self.split_b(best, worst, obj);
                self.helper_b(&best1, &worst1, obj);
                self.helper_b(&best1, &worst2, obj - 1);
                self.helper_b(&best2, &worst2, obj);
            }
            // best_max < worst_min: nothing in best can cover worst.
        }
    }

    /// Two-objective sweep: walks the lexicographically sorted items and
    /// maintains a staircase of the best fitness seen per front number.
    fn sweep_a(&mut self, items: &[usize]) {
        let mut stairs: Vec<f64> = vec![-self.fits[items[0]][1]];
        let mut fstairs: Vec<usize> = vec![items[0]];

        for &fit in &items[1..] {
            let key = -self.fits[fit][1];
            let idx = stairs.partition_point(|&s| s <= key);
            if idx > 0 {
                let max_front = fstairs[..idx]
                    .iter()
                    .map(|&s| self.front[s])
                    .max()
                    .expect("idx > 0 guarantees a non-empty prefix");
                self.front[fit] = self.front[fit].max(max_front + 1);
            }
            // At most one stair per front number: replace the one that
            // now shares this fitness's front.
            for i in idx..fstairs.len() {
                if self.front[fstairs[i]] == self.front[fit] {
                    stairs.remove(i);
                    fstairs.remove(i);
                    break;
                }
            }
            stairs.insert(idx, key);
            fstairs.insert(idx, fit);
        }
    }

    /// Two-objective version of [`helper_b`](Self::helper_b): merges the
    /// staircase of `best` into the scan over `worst`.
    fn sweep_b(&mut self, best: &[usize], worst: &[usize]) {
        let mut stairs: Vec<f64> = Vec::new();
        let mut fstairs: Vec<usize> = Vec::new();
        let mut best_iter = best.iter().copied();
        let mut next_best = best_iter.next();

        for &h in worst {
            while let Some(nb) = next_best {
                if !lex2_le(&self.fits[h], &self.fits[nb]) {
                    break;
                }
                let mut insert = true;
                for i in 0..fstairs.len() {
                    let fstair = fstairs[i];
                    if self.front[fstair] == self.front[nb] {
                        if self.fits[fstair][1] > self.fits[nb][1] {
                            insert = false;
                        } else {
                            stairs.remove(i);
                            fstairs.remove(i);
                        }
                        break;
                    }
                }
                if insert {
                    let key = -self.fits[nb][1];
                    let idx = stairs.partition_point(|&s| s <= key);
                    stairs.insert(idx, key);
                    fstairs.insert(idx, nb);
                }
                next_best = best_iter.next();
            }

            let key = -self.fits[h][1];
            let idx = stairs.partition_point(|&s| s <= key);
            if idx > 0 {
                let max_front = fstairs[..idx]
                    .iter()
                    .map(|&s| self.front[s])
                    .max()
                    .expect("idx > 0 guarantees a non-empty prefix");
                self.front[h] = self.front[h].max(max_front + 1);
            }
        }
    }

    /// Splits `items` at the median of objective `obj`, ties going to
    /// whichever side keeps the split more balanced.
    fn split_a(&self, items: &[usize], obj: usize) -> (Vec<usize>, Vec<usize>) {
        let median = median(items.iter().map(|&i| self.fits[i][obj]).collect());

        let mut best_a = Vec::new();
        let mut worst_a = Vec::new();
        let mut best_b = Vec::new();
        let mut worst_b = Vec::new();
        for &fit in items {
            let v = self.fits[fit][obj];
            if v > median {
                best_a.push(fit);
                best_b.push(fit);
            } else if v < median {
                worst_a.push(fit);
                worst_b.push(fit);
            } else {
                best_a.push(fit);
                worst_b.push(fit);
            }
        }

        let balance_a = best_a.len().abs_diff(worst_a.len());
        let balance_b = best_b.len().abs_diff(worst_b.len());
        if balance_a <= balance_b {
            (best_a, worst_a)
        } else {
            (best_b, worst_b)
        }
    }

    /// Splits `best` and `worst` at the median of objective `obj`,
    /// computed on the larger of the two sets, again balancing ties.
    #[allow(clippy::type_complexity)]
    fn split_b(
        &self,
        best: &[usize],
        worst: &[usize],
        obj: usize,
    ) -> (Vec<usize>, Vec<usize>, Vec<usize>, Vec<usize>) {
        let source = if best.len() > worst.len() { best } else { worst };
        let median = median(source.iter().map(|&i| self.fits[i][obj]).collect());

        let mut best1_a = Vec::new();
        let mut best2_a = Vec::new();
        let mut best1_b = Vec::new();
        let mut best2_b = Vec::new();
        for &fit in best {
            let v = self.fits[fit][obj];
            if v > median {
                best1_a.push(fit);
                best1_b.push(fit);
            } else if v < median {
                best2_a.push(fit);
                best2_b.push(fit);
            } else {
                best1_a.push(fit);
                best2_b.push(fit);
            }
        }

        let mut worst1_a = Vec::new();
        let mut worst2_a = Vec::new();
        let mut worst1_b = Vec::new();
        let mut worst2_b = Vec::new();
        for &fit in worst {
            let v = self.fits[fit][obj];
            if v > median {
                worst1_a.push(fit);
                worst1_b.push(fit);
            } else if v < median {
                worst2_a.push(fit);
                worst2_b.push(fit);
            } else {
                worst1_a.push(fit);
                worst2_b.push(fit);
            }
        }

        let balance_a = (best1_a.len() + worst1_a.len()).abs_diff(best2_a.len() + worst2_a.len());
        let balance_b = (best1_b.len() + worst1_b.len()).abs_diff(best2_b.len() + worst2_b.len());
        if balance_a <= balance_b {
            (best1_a, best2_a, worst1_a, worst2_a)
        } else {
            (best1_b, best2_b, worst1_b, worst2_b)
        }
    }

    fn all_equal_on(&self, items: &[usize], obj: usize) -> bool {
        let first = self.fits[items[0]][obj];
        items.iter().all(|&i| self.fits[i][obj] == first)
    }

    fn min_on(&self, items: &[usize], obj: usize) -> f64 {
        items
            .iter()
            .map(|&i| self.fits[i][obj])
            .fold(f64::INFINITY, f64::min)
    }

    fn max_on(&self, items: &[usize], obj: usize) -> f64 {
        items
            .iter()
            .map(|&i| self.fits[i][obj])
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// `true` when `wv1` is Pareto-dominated by `wv2` (both maximization).
fn is_dominated(wv1: &[f64], wv2: &[f64]) -> bool {
    let mut not_equal = false;
    for (a, b) in wv1.iter().zip(wv2.iter()) {
        if a > b {
            return false;
        }
        if a < b {
            not_equal = true;
        }
    }
    not_equal
}

/// Total lexicographic order over weighted-value vectors.
fn lex_cmp(a: &[f64], b: &[f64]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.partial_cmp(y).unwrap_or(Ordering::Equal) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    a.len().cmp(&b.len())
}

/// Lexicographic `<=` over the first two objectives.
fn lex2_le(a: &[f64], b: &[f64]) -> bool {
    a[0] < b[0] || (a[0] == b[0] && a[1] <= b[1])
}

/// Median of a sample; the mean of the two middle values for even sizes.
fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let n = values.len();
    if n % 2 == 1 {
        values[(n - 1) / 2]
    } else {
        (values[(n - 1) / 2] + values[n / 2]) / 2.0
    }
}
