//! Specimens and the decline sentinel
//!
//! A [`SpecimenValue`] is a type-erased generated value; cloning one shares
//! the underlying allocation, so identity (not just equality) survives the
//! trip through the pipeline. [`Specimen::NoSpecimen`] is the decline
//! sentinel: a distinct variant, never conflatable with a produced value.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::ty::TypeToken;

/// Result of asking a producer for a value
#[derive(Debug, Clone)]
pub enum Specimen {
    /// A produced value
    Value(SpecimenValue),

    /// The producer declines this request; try the next one
    NoSpecimen,
}

impl Specimen {
    /// Wrap a concrete value
    #[inline]
    #[must_use]
    pub fn value<T: Any + Send + Sync>(value: T) -> Self {
        Self::Value(SpecimenValue::new(value))
    }

    /// Whether this is the decline sentinel
    #[inline]
    #[must_use]
    pub fn is_no_specimen(&self) -> bool {
        matches!(self, Self::NoSpecimen)
    }

    /// The produced value, if any
    #[inline]
    #[must_use]
    pub fn into_value(self) -> Option<SpecimenValue> {
        match self {
            Self::Value(value) => Some(value),
            Self::NoSpecimen => None,
        }
    }
}

/// A type-erased generated value with shared identity
#[derive(Clone)]
pub struct SpecimenValue {
    token: TypeToken,
    inner: Arc<dyn Any + Send + Sync>,
}

impl SpecimenValue {
    /// Capture a value
    #[inline]
    #[must_use]
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            token: TypeToken::of::<T>(),
            inner: Arc::new(value),
        }
    }

    /// Token of the concrete type captured here
    #[inline]
    #[must_use]
    pub fn token(&self) -> TypeToken {
        self.token
    }

    /// Borrow the value as `T`
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }

    /// Extract the value as a shared `Arc<T>`
    ///
    /// # Errors
    /// Returns `self` unchanged when the captured value is not a `T`.
    pub fn downcast<T: Any + Send + Sync>(self) -> Result<Arc<T>, Self> {
        let token = self.token;
        self.inner.downcast().map_err(|inner| Self { token, inner })
    }

    /// Whether two specimen values share one underlying instance
    #[inline]
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SpecimenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecimenValue")
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_roundtrip() {
        let specimen = Specimen::value(41_i32);
        let value = specimen.into_value().unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&41));
        assert_eq!(value.token(), TypeToken::of::<i32>());
    }

    #[test]
    fn no_specimen_is_distinguishable_from_produced_none() {
        // A produced Option::None is a value, not a decline.
        let produced: Specimen = Specimen::value(Option::<i32>::None);
        assert!(!produced.is_no_specimen());
        assert!(Specimen::NoSpecimen.is_no_specimen());
    }

    #[test]
    fn clones_share_identity() {
        let value = SpecimenValue::new(String::from("frozen"));
        let clone = value.clone();
        assert!(value.same_instance(&clone));

        let other = SpecimenValue::new(String::from("frozen"));
        assert!(!value.same_instance(&other));
    }

    #[test]
    fn downcast_to_wrong_type_returns_value_intact() {
        let value = SpecimenValue::new(7_u8);
        let back = value.downcast::<String>().unwrap_err();
        assert_eq!(back.downcast_ref::<u8>(), Some(&7));
    }

    #[test]
    fn downcast_to_arc() {
        let value = SpecimenValue::new(String::from("x"));
        let arc = value.clone().downcast::<String>().unwrap();
        assert_eq!(arc.as_str(), "x");
    }
}
