//! Default generation engine
//!
//! The engine tier sits behind all customizations and makes the pipeline
//! terminate: registered factories build domain types, member requests
//! relay to their declared type, and primitives get fresh random values.

use std::fmt;
use std::sync::Arc;

use rand::distr::Alphanumeric;
use rand::Rng;
use tracing::trace;

use fixcraft_kernel::{
    ProduceError, Request, ResolveContext, Specimen, SpecimenProducer, SpecimenType, SpecimenValue,
    TypeToken,
};

/// Length of generated `String` specimens
const GENERATED_STRING_LEN: usize = 16;

/// Producers making up the default engine tier, highest precedence first
#[must_use]
pub fn default_engine() -> Vec<Arc<dyn SpecimenProducer>> {
    vec![
        Arc::new(MemberRelayProducer::new()),
        Arc::new(PrimitiveProducer::new()),
    ]
}

/// Builds `T` via a registered closure
///
/// Only answers type requests for `T`; the closure may resolve nested
/// requests through the passed context.
pub struct FactoryProducer<T> {
    #[allow(clippy::type_complexity)]
    build: Box<dyn Fn(&ResolveContext<'_>) -> Result<T, ProduceError> + Send + Sync>,
}

impl<T: SpecimenType> FactoryProducer<T> {
    /// Producer wrapping `factory`
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&ResolveContext<'_>) -> Result<T, ProduceError> + Send + Sync + 'static,
    {
        Self {
            build: Box::new(factory),
        }
    }
}

impl<T> fmt::Debug for FactoryProducer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryProducer")
            .field("target", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: SpecimenType> SpecimenProducer for FactoryProducer<T> {
    fn produce(
        &self,
        request: &Request,
        context: &ResolveContext<'_>,
    ) -> Result<Specimen, ProduceError> {
        match request {
            Request::Type(t) if t.token() == TypeToken::of::<T>() => {
                trace!(%request, "factory building specimen");
                Ok(Specimen::Value(SpecimenValue::new((self.build)(context)?)))
            }
            _ => Ok(Specimen::NoSpecimen),
        }
    }
}

/// Relays member requests to a type request for the declared type
///
/// Keeps name-scoped freezes from starving every other member: a member
/// request nothing else handled is generated like a plain value of its
/// declared type.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberRelayProducer;

impl MemberRelayProducer {
    /// New relay
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SpecimenProducer for MemberRelayProducer {
    fn produce(
        &self,
        request: &Request,
        context: &ResolveContext<'_>,
    ) -> Result<Specimen, ProduceError> {
        match request {
            Request::Member(member) => context.resolve(&Request::for_token(member.declared())),
            Request::Type(_) => Ok(Specimen::NoSpecimen),
        }
    }
}

/// Fresh pseudo-random values for the leaf primitives
///
/// Every request yields a new value; freezing is what pins one down.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimitiveProducer;

impl PrimitiveProducer {
    /// New primitive generator
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

macro_rules! primitive_hit {
    ($token:expr, $rng:expr, $($ty:ty),* $(,)?) => {
        $(
            if $token == TypeToken::of::<$ty>() {
                return Ok(Specimen::value($rng.random::<$ty>()));
            }
        )*
    };
}

impl SpecimenProducer for PrimitiveProducer {
    fn produce(
        &self,
        request: &Request,
        _context: &ResolveContext<'_>,
    ) -> Result<Specimen, ProduceError> {
        let Request::Type(t) = request else {
            return Ok(Specimen::NoSpecimen);
        };
        let token = t.token();
        let mut rng = rand::rng();

        primitive_hit!(
            token, rng, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64, bool, char,
        );
        if token == TypeToken::of::<usize>() {
            return Ok(Specimen::value(rng.random::<u64>() as usize));
        }
        if token == TypeToken::of::<isize>() {
            return Ok(Specimen::value(rng.random::<i64>() as isize));
        }
        if token == TypeToken::of::<String>() {
            let value: String = rng
                .sample_iter(&Alphanumeric)
                .take(GENERATED_STRING_LEN)
                .map(char::from)
                .collect();
            return Ok(Specimen::value(value));
        }
        Ok(Specimen::NoSpecimen)
    }
}
