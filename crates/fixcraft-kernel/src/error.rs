//! Error types for the kernel
//!
//! Declining a request is never an error; producers express it with
//! [`Specimen::NoSpecimen`](crate::Specimen::NoSpecimen). Errors are
//! reserved for configuration mistakes and compatibility violations.

/// Request specification failures
#[derive(Debug, thiserror::Error)]
pub enum SpecificationError {
    /// A member request matched by name but the frozen type cannot be
    /// assigned to the member's declared type
    #[error(
        "member '{name}' matches by name but frozen type {frozen} is not assignable to declared type {declared}"
    )]
    IncompatibleMatch {
        /// The matched member name
        name: String,
        /// Name of the frozen target type
        frozen: &'static str,
        /// Name of the member's declared type
        declared: &'static str,
    },

    /// A name-based specification was configured without an identifier
    #[error("name-based specification requires a non-empty identifier")]
    EmptyIdentifier,
}

/// Specimen production failures
#[derive(Debug, thiserror::Error)]
pub enum ProduceError {
    /// A specification raised while deciding a match
    #[error(transparent)]
    Specification(#[from] SpecificationError),

    /// Every producer in the chain declined
    #[error("no producer handled request: {0}")]
    Unresolved(String),

    /// Nested resolution recursed past the configured limit
    #[error("resolution exceeded maximum depth of {0}")]
    DepthExceeded(usize),

    /// A producer failed while building a value
    #[error("producer failure: {0}")]
    Producer(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incompatible_match_names_both_types() {
        let err = SpecificationError::IncompatibleMatch {
            name: "owner".to_string(),
            frozen: "alloc::string::String",
            declared: "u64",
        };
        let rendered = err.to_string();
        assert!(rendered.contains("owner"));
        assert!(rendered.contains("String"));
        assert!(rendered.contains("u64"));
    }

    #[test]
    fn specification_error_converts_into_produce_error() {
        let err: ProduceError = SpecificationError::EmptyIdentifier.into();
        assert!(matches!(err, ProduceError::Specification(_)));
    }
}
