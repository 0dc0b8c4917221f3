//! Error types for the fixture crate

use crate::freeze::Matching;
use fixcraft_kernel::{ProduceError, SpecificationError};

/// Main fixture error type
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// A producer in the pipeline failed
    #[error("produce error: {0}")]
    Produce(#[from] ProduceError),

    /// A specification was misconfigured or raised while matching
    #[error("specification error: {0}")]
    Specification(#[from] SpecificationError),

    /// A resolved specimen did not hold the requested type
    #[error("resolved specimen for {expected} holds a {actual}")]
    SpecimenType {
        /// The requested type
        expected: &'static str,
        /// The type the specimen actually holds
        actual: &'static str,
    },

    /// A name-based matching flag was set without an identifier
    #[error("matching policy {0:?} requires an identifier")]
    MissingIdentifier(Matching),
}
