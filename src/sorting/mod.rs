//! Non-dominated sorting of populations into Pareto fronts.
//!
//! Two interchangeable strategies produce the same front partition:
//!
//! - [`sort_non_dominated`]: The fast non-dominated sort of Deb et al.
//!   (2002), O(m·k²) over the k distinct fitnesses.
//! - [`sort_log_non_dominated`]: The divide-and-conquer sort of Fortin
//!   et al. (2013), with better asymptotics for large populations and
//!   few objectives.
//!
//! Both return fronts of *indices* into the caller's population, front 0
//! first. Every individual lands in exactly one front as long as the
//! selection budget covers the whole population; smaller budgets stop
//! emitting fronts once the cumulative count reaches the budget.
//! Individuals sharing identical weighted values are grouped and compared
//! once, then expanded back in input order.
//!
//! Within-front ordering is strategy-specific: the standard sort keeps
//! first-seen fitness order, the log sort emits fitnesses in lexicographic
//! order. Callers needing a particular order should sort the front
//! themselves.

mod log;
mod standard;

pub use self::log::sort_log_non_dominated;
pub use self::standard::sort_non_dominated;

use crate::error::Error;
use crate::fitness::MultiFitness;
use std::collections::HashMap;
use std::str::FromStr;

/// Selects which non-dominated sorting algorithm to run.
///
/// Parses from the names `"standard"` and `"log"`; anything else is a
/// configuration error.
///
/// ```
/// use pareto_kit::SortingStrategy;
///
/// let strategy: SortingStrategy = "log".parse().unwrap();
/// assert_eq!(strategy, SortingStrategy::Log);
/// assert!("quick".parse::<SortingStrategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortingStrategy {
    /// Fast non-dominated sort (Deb et al., 2002).
    #[default]
    Standard,
    /// Divide-and-conquer sort (Fortin et al., 2013).
    Log,
}

impl SortingStrategy {
    /// Runs the selected strategy over a population.
    ///
    /// Emits fronts until the cumulative individual count reaches
    /// `min(population size, sel_count)`.
    pub fn sort(self, fitnesses: &[MultiFitness], sel_count: usize) -> Vec<Vec<usize>> {
        match self {
            SortingStrategy::Standard => sort_non_dominated(fitnesses, sel_count, false),
            SortingStrategy::Log => sort_log_non_dominated(fitnesses, sel_count, false),
        }
    }

    /// The strategy's configuration name.
    pub fn as_str(self) -> &'static str {
        match self {
            SortingStrategy::Standard => "standard",
            SortingStrategy::Log => "log",
        }
    }
}

impl FromStr for SortingStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "standard" => Ok(SortingStrategy::Standard),
            "log" => Ok(SortingStrategy::Log),
            other => Err(Error::UnknownSortingStrategy(other.to_string())),
        }
    }
}

impl std::fmt::Display for SortingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Groups population indices by identical weighted fitness values.
///
/// Returns one group per distinct fitness, groups in first-seen order,
/// members in input order. Dominance is a property of the fitness values,
/// so each group is compared through its first member only.
pub(crate) fn group_identical(fitnesses: &[MultiFitness]) -> Vec<Vec<usize>> {
    let mut ids: HashMap<Vec<u64>, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (i, fit) in fitnesses.iter().enumerate() {
        let next_id = groups.len();
        let id = *ids.entry(fit.key()).or_insert(next_id);
        if id == next_id {
            groups.push(Vec::new());
        }
        groups[id].push(i);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_from_name() {
        assert_eq!(
            "standard".parse::<SortingStrategy>().unwrap(),
            SortingStrategy::Standard
        );
        assert_eq!("log".parse::<SortingStrategy>().unwrap(), SortingStrategy::Log);
    }

    #[test]
    fn test_unknown_strategy_name() {
        let err = "fast".parse::<SortingStrategy>();
        assert!(matches!(err, Err(Error::UnknownSortingStrategy(name)) if name == "fast"));
    }

    #[test]
    fn test_strategy_round_trips_through_name() {
        for strategy in [SortingStrategy::Standard, SortingStrategy::Log] {
            assert_eq!(strategy.as_str().parse::<SortingStrategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_group_identical_preserves_order() {
        let fits = vec![
            MultiFitness::maximize(vec![1.0, 2.0]),
            MultiFitness::maximize(vec![3.0, 4.0]),
            MultiFitness::maximize(vec![1.0, 2.0]),
            MultiFitness::maximize(vec![5.0, 6.0]),
            MultiFitness::maximize(vec![3.0, 4.0]),
        ];
        let groups = group_identical(&fits);
        assert_eq!(groups, vec![vec![0, 2], vec![1, 4], vec![3]]);
    }
}
