//! Fixture customizations
//!
//! A customization encapsulates one reusable fixture configuration step.
//! [`FreezeOnMatch`](crate::FreezeOnMatch) is the canonical one; test
//! suites compose their own via [`CompositeCustomization`].

use crate::error::FixtureError;
use crate::fixture::Fixture;

/// One reusable fixture configuration step
pub trait Customization {
    /// Apply this customization to `fixture`
    ///
    /// # Errors
    /// Implementations validate their own configuration before mutating
    /// the fixture and fail fast on invalid setups.
    fn customize(&self, fixture: &mut Fixture) -> Result<(), FixtureError>;
}

/// Applies child customizations in order
///
/// Stops at the first failing child; earlier children stay applied.
#[derive(Default)]
pub struct CompositeCustomization {
    children: Vec<Box<dyn Customization>>,
}

impl CompositeCustomization {
    /// Empty composite
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child customization
    #[must_use]
    pub fn with(mut self, child: Box<dyn Customization>) -> Self {
        self.children.push(child);
        self
    }

    /// Number of child customizations
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

impl Customization for CompositeCustomization {
    fn customize(&self, fixture: &mut Fixture) -> Result<(), FixtureError> {
        for child in &self.children {
            child.customize(fixture)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixcraft_kernel::{FixedProducer, SpecimenValue};
    use std::sync::Arc;

    struct PushesValue(u32);

    impl Customization for PushesValue {
        fn customize(&self, fixture: &mut Fixture) -> Result<(), FixtureError> {
            fixture.insert_front(Arc::new(FixedProducer::new(SpecimenValue::new(self.0))));
            Ok(())
        }
    }

    #[test]
    fn composite_applies_children_in_order() {
        let composite = CompositeCustomization::new()
            .with(Box::new(PushesValue(1)))
            .with(Box::new(PushesValue(2)));

        let mut fixture = Fixture::empty();
        composite.customize(&mut fixture).unwrap();

        // The later child inserted in front, so it wins.
        let value = fixture.create::<u32>().unwrap();
        assert_eq!(*value, 2);
    }
}
