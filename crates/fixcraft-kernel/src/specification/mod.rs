//! Request specifications
//!
//! Pure, stateless predicates over [`Request`]s, composable with
//! [`OrSpecification`]. Type-based specifications live in
//! [`type_based`], name-based ones in [`name_based`].

mod name_based;
mod type_based;

pub use name_based::MemberNameSpecification;
pub use type_based::{
    BaseTypeSpecification, ExactTypeSpecification, ImplementedInterfacesSpecification,
};

use std::fmt;
use std::sync::Arc;

use crate::error::SpecificationError;
use crate::request::Request;

/// Predicate over generation requests
///
/// Implementations are stateless with respect to requests: evaluating a
/// request must not mutate the specification or the request.
pub trait RequestSpecification: Send + Sync + fmt::Debug {
    /// Decide whether `request` matches
    ///
    /// # Errors
    /// [`SpecificationError::IncompatibleMatch`] when a name-based
    /// specification matches by name but the declared type is incompatible.
    fn is_satisfied_by(&self, request: &Request) -> Result<bool, SpecificationError>;
}

/// Matches when any child specification matches
///
/// The empty composition matches nothing. Children are evaluated in
/// insertion order and evaluation short-circuits on the first match;
/// child errors propagate immediately.
#[derive(Debug, Clone, Default)]
pub struct OrSpecification {
    children: Vec<Arc<dyn RequestSpecification>>,
}

impl OrSpecification {
    /// Empty composition
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child specification
    #[must_use]
    pub fn with(mut self, child: Arc<dyn RequestSpecification>) -> Self {
        self.children.push(child);
        self
    }

    /// Number of child specifications
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the composition has no children
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl RequestSpecification for OrSpecification {
    fn is_satisfied_by(&self, request: &Request) -> Result<bool, SpecificationError> {
        for child in &self.children {
            if child.is_satisfied_by(request)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
