//! Freeze-on-match orchestration
//!
//! [`FreezeOnMatch`] generates one instance of a target type through the
//! fixture's current pipeline, then installs a filtering producer at the
//! front so every subsequent matching request resolves to that same
//! instance. [`Matching`] selects which request shapes count as matching.

use std::sync::Arc;

use tracing::info;

use crate::customization::Customization;
use crate::error::FixtureError;
use crate::fixture::Fixture;
use fixcraft_kernel::{
    BaseTypeSpecification, ExactTypeSpecification, FilteringProducer, FixedProducer,
    ImplementedInterfacesSpecification, MemberKind, MemberNameSpecification, OrSpecification,
    Request, SpecimenType, TypeDescriptor,
};

bitflags::bitflags! {
    /// Which request shapes a freeze operation matches
    ///
    /// Flags are independent and additive; none implies or excludes
    /// another. The empty set is the default policy and behaves as
    /// [`Matching::EXACT_TYPE`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Matching: u8 {
        /// Type requests for exactly the target type
        const EXACT_TYPE = 1;
        /// Type requests for the target type or a declared ancestor
        const BASE_TYPE = 1 << 1;
        /// Type requests for an interface the target type implements
        const IMPLEMENTED_INTERFACES = 1 << 2;
        /// Property requests matching the configured identifier
        const PROPERTY_NAME = 1 << 3;
        /// Constructor-parameter requests matching the configured identifier
        const PARAMETER_NAME = 1 << 4;
        /// Field requests matching the configured identifier
        const FIELD_NAME = 1 << 5;
        /// Any member kind matching the configured identifier
        const MEMBER_NAME = Self::PROPERTY_NAME.bits()
            | Self::PARAMETER_NAME.bits()
            | Self::FIELD_NAME.bits();
    }
}

/// Freeze one specimen of a target type for all matching requests
///
/// The frozen value is generated exactly once, through the pipeline as it
/// stands at customize time, before the filtering producer is installed.
/// Requests matching no active flag are resolved exactly as before.
#[derive(Debug, Clone)]
pub struct FreezeOnMatch {
    target: TypeDescriptor,
    identifier: Option<String>,
    matching: Matching,
}

impl FreezeOnMatch {
    /// Freeze `T`, matching exact-type requests only
    #[must_use]
    pub fn new<T: SpecimenType>() -> Self {
        Self {
            target: T::descriptor(),
            identifier: None,
            matching: Matching::EXACT_TYPE,
        }
    }

    /// Set the matching policy
    #[inline]
    #[must_use]
    pub fn with_matching(mut self, matching: Matching) -> Self {
        self.matching = matching;
        self
    }

    /// Set the member identifier for name-based flags
    #[inline]
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// The target type's descriptor
    #[inline]
    #[must_use]
    pub fn target(&self) -> &TypeDescriptor {
        &self.target
    }

    /// The active matching policy
    #[inline]
    #[must_use]
    pub fn matching(&self) -> Matching {
        self.matching
    }

    /// One OR-composition covering every active flag
    fn build_specification(&self) -> Result<OrSpecification, FixtureError> {
        let matching = if self.matching.is_empty() {
            Matching::EXACT_TYPE
        } else {
            self.matching
        };

        let mut specification = OrSpecification::new();
        if matching.contains(Matching::EXACT_TYPE) {
            specification =
                specification.with(Arc::new(ExactTypeSpecification::new(self.target.token())));
        }
        if matching.contains(Matching::BASE_TYPE) {
            specification =
                specification.with(Arc::new(BaseTypeSpecification::new(self.target.clone())));
        }
        if matching.contains(Matching::IMPLEMENTED_INTERFACES) {
            specification = specification.with(Arc::new(ImplementedInterfacesSpecification::new(
                self.target.clone(),
            )));
        }

        for (flag, kind) in [
            (Matching::PROPERTY_NAME, MemberKind::Property),
            (Matching::PARAMETER_NAME, MemberKind::Parameter),
            (Matching::FIELD_NAME, MemberKind::Field),
        ] {
            if matching.contains(flag) {
                let identifier = self
                    .identifier
                    .as_deref()
                    .ok_or(FixtureError::MissingIdentifier(flag))?;
                specification = specification.with(Arc::new(MemberNameSpecification::new(
                    kind,
                    identifier,
                    self.target.clone(),
                )?));
            }
        }
        Ok(specification)
    }
}

impl Customization for FreezeOnMatch {
    fn customize(&self, fixture: &mut Fixture) -> Result<(), FixtureError> {
        // Validate the whole configuration before touching the pipeline.
        let specification = self.build_specification()?;

        // Generate once, through the pipeline as it currently stands, so
        // other active customizations still shape the frozen value.
        let frozen = fixture.resolve(&Request::for_token(self.target.token()))?;
        info!(
            frozen = %self.target.token(),
            matching = ?self.matching,
            "installing frozen specimen"
        );

        let fixed = Arc::new(FixedProducer::new(frozen));
        fixture.insert_front(Arc::new(FilteringProducer::new(
            Arc::new(specification),
            fixed,
        )));
        Ok(())
    }
}
