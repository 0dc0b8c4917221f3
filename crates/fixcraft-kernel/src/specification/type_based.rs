//! Type-based request specifications

use crate::error::SpecificationError;
use crate::request::Request;
use crate::specification::RequestSpecification;
use crate::ty::{TypeDescriptor, TypeToken};

/// Matches type requests for exactly the target type
#[derive(Debug, Clone)]
pub struct ExactTypeSpecification {
    target: TypeToken,
}

impl ExactTypeSpecification {
    /// Specification for `target`
    #[inline]
    #[must_use]
    pub fn new(target: TypeToken) -> Self {
        Self { target }
    }
}

impl RequestSpecification for ExactTypeSpecification {
    fn is_satisfied_by(&self, request: &Request) -> Result<bool, SpecificationError> {
        match request {
            Request::Type(t) => Ok(t.token() == self.target),
            Request::Member(_) => Ok(false),
        }
    }
}

/// Matches type requests for the target type or any declared ancestor
///
/// Reflexive: a request for the target type itself is a base-type match.
/// Interfaces are never counted; that is
/// [`ImplementedInterfacesSpecification`]'s job.
#[derive(Debug, Clone)]
pub struct BaseTypeSpecification {
    target: TypeDescriptor,
}

impl BaseTypeSpecification {
    /// Specification for the type described by `target`
    #[inline]
    #[must_use]
    pub fn new(target: TypeDescriptor) -> Self {
        Self { target }
    }
}

impl RequestSpecification for BaseTypeSpecification {
    fn is_satisfied_by(&self, request: &Request) -> Result<bool, SpecificationError> {
        match request {
            Request::Type(t) => {
                let token = t.token();
                Ok(token == self.target.token() || self.target.ancestors().contains(&token))
            }
            Request::Member(_) => Ok(false),
        }
    }
}

/// Matches type requests for any interface the target type implements
#[derive(Debug, Clone)]
pub struct ImplementedInterfacesSpecification {
    target: TypeDescriptor,
}

impl ImplementedInterfacesSpecification {
    /// Specification for the type described by `target`
    #[inline]
    #[must_use]
    pub fn new(target: TypeDescriptor) -> Self {
        Self { target }
    }
}

impl RequestSpecification for ImplementedInterfacesSpecification {
    fn is_satisfied_by(&self, request: &Request) -> Result<bool, SpecificationError> {
        match request {
            Request::Type(t) => Ok(self.target.interfaces().contains(&t.token())),
            Request::Member(_) => Ok(false),
        }
    }
}
