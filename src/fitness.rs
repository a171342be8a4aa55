//! Multi-objective fitness vectors.
//!
//! [`MultiFitness`] pairs an ordered sequence of objective values with a
//! parallel sequence of sign weights: a positive weight marks an objective
//! to maximize, a negative weight one to minimize. Dominance is evaluated
//! over the *weighted* values, so all comparisons reduce to maximization
//! regardless of the mix of directions.

use crate::error::{Error, Result};

/// A fitness value over several weighted objectives.
///
/// The weighted values (`values[i] * weights[i]`) are cached at
/// construction and never change; the only mutable part is the
/// [`crowding_dist`](MultiFitness::crowding_dist) slot filled in by
/// [`assign_crowding_dist`](crate::selection::assign_crowding_dist).
///
/// # Example
///
/// ```
/// use pareto_kit::MultiFitness;
///
/// // Maximize the first objective, minimize the second.
/// let a = MultiFitness::new(vec![3.0, 1.0], vec![1.0, -1.0]).unwrap();
/// let b = MultiFitness::new(vec![2.0, 2.0], vec![1.0, -1.0]).unwrap();
/// assert!(a.dominates(&b));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiFitness {
    values: Vec<f64>,
    weights: Vec<f64>,
    wvalues: Vec<f64>,

    /// Diversity score within this individual's front.
    ///
    /// Zero until assigned; boundary individuals receive `f64::INFINITY`.
    pub crowding_dist: f64,
}

impl MultiFitness {
    /// Creates a fitness from objective values and sign weights.
    ///
    /// Returns [`Error::WeightLengthMismatch`] when the two vectors have
    /// different lengths.
    pub fn new(values: Vec<f64>, weights: Vec<f64>) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(Error::WeightLengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        let wvalues = values
            .iter()
            .zip(weights.iter())
            .map(|(v, w)| v * w)
            .collect();
        Ok(Self {
            values,
            weights,
            wvalues,
            crowding_dist: 0.0,
        })
    }

    /// Creates a fitness where every objective is maximized (weights +1).
    pub fn maximize(values: Vec<f64>) -> Self {
        let weights = vec![1.0; values.len()];
        Self::new(values, weights).expect("weights built to match values length")
    }

    /// Creates a fitness where every objective is minimized (weights -1).
    pub fn minimize(values: Vec<f64>) -> Self {
        let weights = vec![-1.0; values.len()];
        Self::new(values, weights).expect("weights built to match values length")
    }

    /// The raw objective values, in declaration order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The per-objective sign weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The weighted (maximization-oriented) objective values.
    pub fn wvalues(&self) -> &[f64] {
        &self.wvalues
    }

    /// Number of objectives.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the fitness has no objectives.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pareto dominance over the weighted values.
    ///
    /// `self` dominates `other` when it is at least as good on every
    /// objective and strictly better on at least one. Two identical
    /// fitnesses dominate neither way.
    pub fn dominates(&self, other: &Self) -> bool {
        let mut strictly_better = false;
        for (a, b) in self.wvalues.iter().zip(other.wvalues.iter()) {
            if a < b {
                return false;
            }
            if a > b {
                strictly_better = true;
            }
        }
        strictly_better
    }

    /// Grouping key over the weighted values.
    ///
    /// Individuals with identical weighted values share a key, letting the
    /// sorters compare each distinct fitness once. Uses the bit pattern of
    /// each coordinate; `-0.0` is folded into `0.0` so the two compare-equal
    /// zeros land in the same group.
    pub(crate) fn key(&self) -> Vec<u64> {
        self.wvalues
            .iter()
            .map(|&v| if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_lengths_rejected() {
        let err = MultiFitness::new(vec![1.0, 2.0, 3.0], vec![1.0, -1.0]);
        assert!(matches!(
            err,
            Err(Error::WeightLengthMismatch {
                values: 3,
                weights: 2
            })
        ));
    }

    #[test]
    fn test_weighted_values() {
        let f = MultiFitness::new(vec![2.0, 3.0], vec![1.0, -1.0]).unwrap();
        assert_eq!(f.wvalues(), &[2.0, -3.0]);
        assert_eq!(f.values(), &[2.0, 3.0]);
    }

    #[test]
    fn test_dominates_minimization() {
        let a = MultiFitness::minimize(vec![1.0, 1.0]);
        let b = MultiFitness::minimize(vec![2.0, 2.0]);
        assert!(a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_dominates_mixed_directions() {
        // Maximize first, minimize second.
        let a = MultiFitness::new(vec![3.0, 1.0], vec![1.0, -1.0]).unwrap();
        let b = MultiFitness::new(vec![3.0, 2.0], vec![1.0, -1.0]).unwrap();
        assert!(a.dominates(&b)); // equal on first, better on second
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_identical_fitness_no_dominance() {
        let a = MultiFitness::maximize(vec![1.0, 2.0]);
        let b = MultiFitness::maximize(vec![1.0, 2.0]);
        assert!(!a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_incomparable_pair() {
        let a = MultiFitness::maximize(vec![1.0, 5.0]);
        let b = MultiFitness::maximize(vec![5.0, 1.0]);
        assert!(!a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_key_groups_duplicates() {
        let a = MultiFitness::maximize(vec![1.0, 2.0]);
        let b = MultiFitness::maximize(vec![1.0, 2.0]);
        let c = MultiFitness::maximize(vec![2.0, 1.0]);
        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
    }

    #[test]
    fn test_key_folds_negative_zero() {
        let a = MultiFitness::new(vec![0.0], vec![1.0]).unwrap();
        let b = MultiFitness::new(vec![0.0], vec![-1.0]).unwrap();
        // 0.0 * -1.0 == -0.0; the two must still group together.
        assert_eq!(a.key(), b.key());
    }
}
