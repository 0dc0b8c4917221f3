//! The fixture: an ordered, single-owner specimen producer registry
//!
//! Producers are consulted front to back; the first non-declining result
//! wins. Customizations always rank ahead of the engine tier, so a frozen
//! value installed with [`insert_front`](Fixture::insert_front) overrides
//! default generation without removing it.

use std::sync::Arc;

use tracing::debug;

use crate::customization::Customization;
use crate::engine::{default_engine, FactoryProducer};
use crate::error::FixtureError;
use crate::freeze::FreezeOnMatch;
use fixcraft_kernel::{
    ProduceError, Request, ResolveContext, SpecimenProducer, SpecimenType, SpecimenValue,
};

/// Ordered registry of specimen producers
///
/// Owned by one test-configuration context; configure first, then
/// resolve. Mutation happens only through the insert operations, keeping
/// precedence auditable.
#[derive(Debug)]
pub struct Fixture {
    /// High-precedence tier, consulted first
    customizations: Vec<Arc<dyn SpecimenProducer>>,
    /// Default generation tier: factories, relays, primitives
    engine: Vec<Arc<dyn SpecimenProducer>>,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Fixture with the default generation engine installed
    #[must_use]
    pub fn new() -> Self {
        Self {
            customizations: Vec::new(),
            engine: default_engine(),
        }
    }

    /// Fixture with no engine at all
    ///
    /// Every request declines until producers are installed. Useful for
    /// exercising pipeline behavior in isolation.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            customizations: Vec::new(),
            engine: Vec::new(),
        }
    }

    /// Install a producer at the highest-precedence position
    pub fn insert_front(&mut self, producer: Arc<dyn SpecimenProducer>) {
        self.customizations.insert(0, producer);
    }

    /// Install a producer behind existing customizations
    ///
    /// Still ranks ahead of the engine tier.
    pub fn append(&mut self, producer: Arc<dyn SpecimenProducer>) {
        self.customizations.push(producer);
    }

    /// Register a factory for building `T`
    ///
    /// Factories join the engine tier ahead of the built-in producers and
    /// may resolve nested requests through the passed context.
    pub fn provide<T, F>(&mut self, factory: F)
    where
        T: SpecimenType,
        F: Fn(&ResolveContext<'_>) -> Result<T, ProduceError> + Send + Sync + 'static,
    {
        self.engine.insert(0, Arc::new(FactoryProducer::new(factory)));
    }

    /// Number of installed customization producers
    #[inline]
    #[must_use]
    pub fn customization_count(&self) -> usize {
        self.customizations.len()
    }

    /// Resolve one request through the full pipeline
    ///
    /// # Errors
    /// [`ProduceError::Unresolved`] (wrapped) when every producer
    /// declines, plus any failure raised by a producer or specification.
    pub fn resolve(&self, request: &Request) -> Result<SpecimenValue, FixtureError> {
        let chain: Vec<Arc<dyn SpecimenProducer>> = self
            .customizations
            .iter()
            .chain(self.engine.iter())
            .cloned()
            .collect();
        let context = ResolveContext::new(&chain);
        debug!(%request, producers = chain.len(), "resolving request");
        Ok(context.resolve_value(request)?)
    }

    /// Resolve a type request for `T` and downcast the result
    ///
    /// # Errors
    /// Resolution failures, or [`FixtureError::SpecimenType`] when the
    /// produced specimen is not a `T`.
    pub fn create<T: SpecimenType>(&self) -> Result<Arc<T>, FixtureError> {
        let value = self.resolve(&Request::for_type::<T>())?;
        value
            .downcast::<T>()
            .map_err(|value| FixtureError::SpecimenType {
                expected: std::any::type_name::<T>(),
                actual: value.token().name(),
            })
    }

    /// Apply a customization
    ///
    /// # Errors
    /// Whatever the customization raises; the fixture is untouched when
    /// the customization fails its own validation.
    pub fn apply(&mut self, customization: &dyn Customization) -> Result<(), FixtureError> {
        customization.customize(self)
    }

    /// Freeze `T` with exact-type matching and return the frozen instance
    ///
    /// # Errors
    /// Fails when the pipeline cannot generate a `T`.
    pub fn freeze<T: SpecimenType>(&mut self) -> Result<Arc<T>, FixtureError> {
        self.apply(&FreezeOnMatch::new::<T>())?;
        self.create::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixcraft_kernel::{FixedProducer, Specimen};

    #[test]
    fn insert_front_takes_precedence_over_append() {
        let mut fixture = Fixture::empty();
        fixture.append(Arc::new(FixedProducer::new(SpecimenValue::new(1_u32))));
        fixture.insert_front(Arc::new(FixedProducer::new(SpecimenValue::new(2_u32))));

        assert_eq!(*fixture.create::<u32>().unwrap(), 2);
        assert_eq!(fixture.customization_count(), 2);
    }

    #[test]
    fn customizations_rank_ahead_of_engine() {
        let mut fixture = Fixture::new();
        fixture.provide(|_| Ok(5_u32));
        fixture.append(Arc::new(FixedProducer::new(SpecimenValue::new(9_u32))));

        assert_eq!(*fixture.create::<u32>().unwrap(), 9);
    }

    #[test]
    fn empty_fixture_resolves_nothing() {
        let fixture = Fixture::empty();
        let err = fixture.create::<u32>().unwrap_err();
        assert!(matches!(
            err,
            FixtureError::Produce(ProduceError::Unresolved(_))
        ));
    }

    #[test]
    fn factories_can_resolve_nested_requests() {
        #[derive(Debug, PartialEq)]
        struct Wrapper(u32);
        impl SpecimenType for Wrapper {}

        let mut fixture = Fixture::empty();
        fixture.provide(|_| Ok(11_u32));
        fixture.provide(|ctx: &ResolveContext<'_>| Ok(Wrapper(*ctx.create::<u32>()?)));

        assert_eq!(*fixture.create::<Wrapper>().unwrap(), Wrapper(11));
    }

    #[test]
    fn create_surfaces_type_mismatch() {
        #[derive(Debug)]
        struct AnswersEverything;

        impl SpecimenProducer for AnswersEverything {
            fn produce(
                &self,
                _request: &Request,
                _context: &ResolveContext<'_>,
            ) -> Result<Specimen, ProduceError> {
                Ok(Specimen::value(1_u8))
            }
        }

        let mut fixture = Fixture::empty();
        fixture.append(Arc::new(AnswersEverything));
        let err = fixture.create::<String>().unwrap_err();
        assert!(matches!(err, FixtureError::SpecimenType { .. }));
    }
}
