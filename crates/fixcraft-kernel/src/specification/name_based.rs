//! Name-based request specifications

use crate::error::SpecificationError;
use crate::request::{MemberKind, Request};
use crate::specification::RequestSpecification;
use crate::ty::TypeDescriptor;

/// Matches member requests of one kind by name, with type compatibility
///
/// A request matches when it targets a member of the configured kind whose
/// name equals the identifier and whose declared type can accept the frozen
/// target. Name equality with an incompatible declared type is a
/// configuration error surfaced at resolution time, not a silent mismatch.
#[derive(Debug, Clone)]
pub struct MemberNameSpecification {
    kind: MemberKind,
    identifier: String,
    target: TypeDescriptor,
}

impl MemberNameSpecification {
    /// Specification for members of `kind` named `identifier`
    ///
    /// # Errors
    /// [`SpecificationError::EmptyIdentifier`] when `identifier` is empty.
    pub fn new(
        kind: MemberKind,
        identifier: impl Into<String>,
        target: TypeDescriptor,
    ) -> Result<Self, SpecificationError> {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return Err(SpecificationError::EmptyIdentifier);
        }
        Ok(Self {
            kind,
            identifier,
            target,
        })
    }

    /// The member kind this specification targets
    #[inline]
    #[must_use]
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// The configured member name
    #[inline]
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl RequestSpecification for MemberNameSpecification {
    fn is_satisfied_by(&self, request: &Request) -> Result<bool, SpecificationError> {
        let Request::Member(member) = request else {
            return Ok(false);
        };
        if member.kind() != self.kind || member.name() != self.identifier {
            return Ok(false);
        }
        if self.target.assignable_to(member.declared()) {
            Ok(true)
        } else {
            Err(SpecificationError::IncompatibleMatch {
                name: member.name().to_string(),
                frozen: self.target.token().name(),
                declared: member.declared().name(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ty::{SpecimenType, TypeDescriptor};

    trait Serial {}

    struct Device;

    impl SpecimenType for Device {
        fn descriptor() -> TypeDescriptor {
            TypeDescriptor::of::<Device>().implements::<dyn Serial>()
        }
    }

    fn property_spec(identifier: &str) -> MemberNameSpecification {
        MemberNameSpecification::new(MemberKind::Property, identifier, Device::descriptor())
            .unwrap()
    }

    #[test]
    fn empty_identifier_is_rejected_at_construction() {
        let err = MemberNameSpecification::new(MemberKind::Field, "", Device::descriptor());
        assert!(matches!(err, Err(SpecificationError::EmptyIdentifier)));
    }

    #[test]
    fn matches_compatible_member_by_name() {
        let spec = property_spec("device");
        assert!(spec
            .is_satisfied_by(&Request::property::<Device>("device"))
            .unwrap());
    }

    #[test]
    fn matches_member_declared_as_implemented_interface() {
        let spec = property_spec("device");
        assert!(spec
            .is_satisfied_by(&Request::property::<dyn Serial>("device"))
            .unwrap());
    }

    #[test]
    fn ignores_other_names_and_kinds() {
        let spec = property_spec("device");
        assert!(!spec
            .is_satisfied_by(&Request::property::<Device>("gadget"))
            .unwrap());
        assert!(!spec
            .is_satisfied_by(&Request::field::<Device>("device"))
            .unwrap());
        assert!(!spec
            .is_satisfied_by(&Request::for_type::<Device>())
            .unwrap());
    }

    #[test]
    fn name_match_with_incompatible_type_is_an_error() {
        let spec = property_spec("device");
        let err = spec
            .is_satisfied_by(&Request::property::<u64>("device"))
            .unwrap_err();
        assert!(matches!(err, SpecificationError::IncompatibleMatch { .. }));
    }
}
