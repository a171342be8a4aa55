//! Error types for invalid configuration and malformed input.
//!
//! Degenerate inputs (empty fronts, single-point hypervolume queries,
//! zero-width objective ranges) are *not* errors — each has a defined
//! result documented on the operation that handles it. The variants here
//! cover the configuration-error class only: the caller must fix the
//! input before retrying; nothing is retried internally.

/// Errors produced by ranking and indicator operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a sorting strategy name is not recognized.
    #[error("unknown sorting strategy '{0}': expected 'standard' or 'log'")]
    UnknownSortingStrategy(String),

    /// Returned when a fitness is built with mismatched vector lengths.
    #[error("fitness has {values} objective values but {weights} weights")]
    WeightLengthMismatch {
        /// Number of objective values supplied.
        values: usize,
        /// Number of sign weights supplied.
        weights: usize,
    },

    /// Returned when a point set and its reference point disagree on
    /// dimensionality.
    #[error("dimension mismatch: entry {index} has {got} coordinates, expected {expected}")]
    DimensionMismatch {
        /// The dimensionality everything is checked against.
        expected: usize,
        /// Dimensionality of the offending vector.
        got: usize,
        /// Index of the offending vector in its input sequence.
        index: usize,
    },

    /// Returned when a least-contributor query is made on an empty
    /// population (there is no index to report).
    #[error("cannot find the least contributor of an empty population")]
    EmptyPopulation,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::UnknownSortingStrategy("quick".into());
        assert!(err.to_string().contains("'quick'"));

        let err = Error::WeightLengthMismatch {
            values: 3,
            weights: 2,
        };
        assert!(err.to_string().contains('3'));
        assert!(err.to_string().contains('2'));

        let err = Error::DimensionMismatch {
            expected: 2,
            got: 4,
            index: 1,
        };
        assert!(err.to_string().contains("dimension mismatch"));
    }
}
