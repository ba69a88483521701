//! Error types for mining operations.
//!
//! Provides context-rich errors for library consumers.

use std::fmt;

/// Main error type for minar operations.
///
/// Every failure is reported synchronously before any candidate is
/// evaluated; mining never returns a partial result.
///
/// # Examples
///
/// ```
/// use minar::MinarError;
///
/// let err = MinarError::InvalidHyperparameter {
///     param: "min_support".to_string(),
///     value: "1.5".to_string(),
///     constraint: "in [0, 1]".to_string(),
/// };
/// assert!(err.to_string().contains("min_support"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinarError {
    /// The transaction collection was empty at store construction.
    ///
    /// Support is a fraction of the transaction count, so a store with
    /// zero transactions cannot answer any query.
    EmptyTransactionSet,

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },
}

impl fmt::Display for MinarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinarError::EmptyTransactionSet => {
                write!(
                    f,
                    "transaction set is empty: support is undefined without at least one transaction"
                )
            }
            MinarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
        }
    }
}

impl std::error::Error for MinarError {}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MinarError>;
