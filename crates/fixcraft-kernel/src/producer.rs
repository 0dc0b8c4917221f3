//! Specimen producers and the resolution chain
//!
//! Producers form a chain of responsibility: each one either produces a
//! value, declines with [`Specimen::NoSpecimen`], or fails. The three
//! pipeline primitives here are [`FixedProducer`] (always the same
//! captured value), [`FilteringProducer`] (delegate only on a
//! specification match), and [`CompositeProducer`] (first non-declining
//! child wins).

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::error::ProduceError;
use crate::request::Request;
use crate::specification::RequestSpecification;
use crate::specimen::{Specimen, SpecimenValue};
use crate::ty::SpecimenType;

/// Upper bound on nested resolution depth
pub const MAX_RESOLVE_DEPTH: usize = 64;

/// A producer of specimens
///
/// Declining is expressed solely via [`Specimen::NoSpecimen`]; `Err` is
/// reserved for configuration and compatibility failures.
pub trait SpecimenProducer: Send + Sync + fmt::Debug {
    /// Produce a specimen for `request`, or decline
    ///
    /// # Errors
    /// Propagates specification failures and producer construction
    /// failures; never errors merely to decline.
    fn produce(
        &self,
        request: &Request,
        context: &ResolveContext<'_>,
    ) -> Result<Specimen, ProduceError>;
}

/// Resolution entry point over an ordered producer chain
///
/// Handed to every [`SpecimenProducer::produce`] call so producers can
/// resolve nested requests through the same chain. Depth is tracked per
/// nested call and bounded by [`MAX_RESOLVE_DEPTH`].
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    producers: &'a [Arc<dyn SpecimenProducer>],
    depth: usize,
}

impl<'a> ResolveContext<'a> {
    /// Context over `producers`, consulted front to back
    #[inline]
    #[must_use]
    pub fn new(producers: &'a [Arc<dyn SpecimenProducer>]) -> Self {
        Self {
            producers,
            depth: 0,
        }
    }

    /// Current nesting depth
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Walk the chain; first non-declining result wins
    ///
    /// Returns [`Specimen::NoSpecimen`] when every producer declines.
    ///
    /// # Errors
    /// [`ProduceError::DepthExceeded`] past [`MAX_RESOLVE_DEPTH`], plus
    /// any failure raised by a producer in the chain.
    pub fn resolve(&self, request: &Request) -> Result<Specimen, ProduceError> {
        if self.depth >= MAX_RESOLVE_DEPTH {
            return Err(ProduceError::DepthExceeded(MAX_RESOLVE_DEPTH));
        }
        let nested = Self {
            producers: self.producers,
            depth: self.depth + 1,
        };
        for producer in self.producers {
            match producer.produce(request, &nested)? {
                Specimen::NoSpecimen => {
                    trace!(%request, producer = ?producer, "producer declined");
                }
                specimen => return Ok(specimen),
            }
        }
        Ok(Specimen::NoSpecimen)
    }

    /// Like [`resolve`](Self::resolve), but an all-decline is an error
    ///
    /// # Errors
    /// [`ProduceError::Unresolved`] when every producer declines.
    pub fn resolve_value(&self, request: &Request) -> Result<SpecimenValue, ProduceError> {
        match self.resolve(request)? {
            Specimen::Value(value) => Ok(value),
            Specimen::NoSpecimen => Err(ProduceError::Unresolved(request.to_string())),
        }
    }

    /// Resolve a type request for `T` and downcast the result
    ///
    /// # Errors
    /// [`ProduceError::Unresolved`] when nothing handles the request, or
    /// [`ProduceError::Producer`] when the produced specimen is not a `T`.
    pub fn create<T: SpecimenType>(&self) -> Result<Arc<T>, ProduceError> {
        let value = self.resolve_value(&Request::for_type::<T>())?;
        value.downcast::<T>().map_err(|value| {
            ProduceError::Producer(format!(
                "specimen for {} holds a {}",
                std::any::type_name::<T>(),
                value.token()
            ))
        })
    }
}

/// Always returns one pre-captured value
///
/// The value is captured once at construction; clones of it share the
/// underlying instance, so every production preserves identity.
#[derive(Debug, Clone)]
pub struct FixedProducer {
    value: SpecimenValue,
}

impl FixedProducer {
    /// Capture `value`
    #[inline]
    #[must_use]
    pub fn new(value: SpecimenValue) -> Self {
        Self { value }
    }

    /// The captured value
    #[inline]
    #[must_use]
    pub fn value(&self) -> &SpecimenValue {
        &self.value
    }
}

impl SpecimenProducer for FixedProducer {
    fn produce(
        &self,
        _request: &Request,
        _context: &ResolveContext<'_>,
    ) -> Result<Specimen, ProduceError> {
        Ok(Specimen::Value(self.value.clone()))
    }
}

/// Delegates to an inner producer only when a specification matches
///
/// Non-matching requests fall through with [`Specimen::NoSpecimen`]
/// without ever invoking the inner producer.
#[derive(Debug, Clone)]
pub struct FilteringProducer {
    specification: Arc<dyn RequestSpecification>,
    inner: Arc<dyn SpecimenProducer>,
}

impl FilteringProducer {
    /// Gate `inner` behind `specification`
    #[inline]
    #[must_use]
    pub fn new(
        specification: Arc<dyn RequestSpecification>,
        inner: Arc<dyn SpecimenProducer>,
    ) -> Self {
        Self {
            specification,
            inner,
        }
    }
}

impl SpecimenProducer for FilteringProducer {
    fn produce(
        &self,
        request: &Request,
        context: &ResolveContext<'_>,
    ) -> Result<Specimen, ProduceError> {
        if self.specification.is_satisfied_by(request)? {
            trace!(%request, "specification matched, delegating to inner producer");
            self.inner.produce(request, context)
        } else {
            Ok(Specimen::NoSpecimen)
        }
    }
}

/// Tries children in order; the first non-declining result wins
///
/// Order encodes override precedence and is caller-controlled.
#[derive(Debug, Clone, Default)]
pub struct CompositeProducer {
    children: Vec<Arc<dyn SpecimenProducer>>,
}

impl CompositeProducer {
    /// Empty composite
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Composite over `children`, consulted in order
    #[inline]
    #[must_use]
    pub fn from_children(children: Vec<Arc<dyn SpecimenProducer>>) -> Self {
        Self { children }
    }

    /// Append a child at the lowest-precedence position
    #[must_use]
    pub fn with(mut self, child: Arc<dyn SpecimenProducer>) -> Self {
        self.children.push(child);
        self
    }

    /// Number of children
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the composite has no children
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl SpecimenProducer for CompositeProducer {
    fn produce(
        &self,
        request: &Request,
        context: &ResolveContext<'_>,
    ) -> Result<Specimen, ProduceError> {
        for child in &self.children {
            match child.produce(request, context)? {
                Specimen::NoSpecimen => {}
                specimen => return Ok(specimen),
            }
        }
        Ok(Specimen::NoSpecimen)
    }
}
