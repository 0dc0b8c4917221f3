use fixcraft_kernel::{
    BaseTypeSpecification, ExactTypeSpecification, MemberKind, MemberNameSpecification,
    OrSpecification, Request, RequestSpecification, SpecimenType, TypeDescriptor, TypeToken,
};
use proptest::prelude::*;
use std::sync::Arc;

trait Pluggable {}

struct Peripheral;
struct Keyboard;

impl SpecimenType for Peripheral {}

impl SpecimenType for Keyboard {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Keyboard>()
            .extends::<Peripheral>()
            .implements::<dyn Pluggable>()
    }
}

#[test]
fn exact_and_base_type_disagree_only_off_target() {
    let exact = ExactTypeSpecification::new(TypeToken::of::<Keyboard>());
    let base = BaseTypeSpecification::new(Keyboard::descriptor());

    // Reflexive: both match the target itself.
    let target = Request::for_type::<Keyboard>();
    assert!(exact.is_satisfied_by(&target).unwrap());
    assert!(base.is_satisfied_by(&target).unwrap());

    // Only base-type matching reaches the ancestor.
    let ancestor = Request::for_type::<Peripheral>();
    assert!(!exact.is_satisfied_by(&ancestor).unwrap());
    assert!(base.is_satisfied_by(&ancestor).unwrap());

    // Neither counts interfaces as base types.
    let interface = Request::for_type::<dyn Pluggable>();
    assert!(!exact.is_satisfied_by(&interface).unwrap());
    assert!(!base.is_satisfied_by(&interface).unwrap());
}

#[test]
fn or_over_independent_kinds_does_not_cross_match() {
    let or = OrSpecification::new()
        .with(Arc::new(BaseTypeSpecification::new(Keyboard::descriptor())))
        .with(Arc::new(
            MemberNameSpecification::new(MemberKind::Property, "input", Keyboard::descriptor())
                .unwrap(),
        ));

    // The type flag does not make unrelated member names match.
    assert!(!or
        .is_satisfied_by(&Request::property::<Keyboard>("output"))
        .unwrap());
    // The name flag does not make unrelated type requests match.
    assert!(!or.is_satisfied_by(&Request::for_type::<u64>()).unwrap());

    assert!(or.is_satisfied_by(&Request::for_type::<Peripheral>()).unwrap());
    assert!(or
        .is_satisfied_by(&Request::property::<Keyboard>("input"))
        .unwrap());
}

proptest! {
    #[test]
    fn member_name_matches_exactly_one_name(
        name in "[a-z]{1,12}",
        other in "[a-z]{1,12}",
    ) {
        prop_assume!(name != other);
        let spec = MemberNameSpecification::new(
            MemberKind::Parameter,
            name.clone(),
            Keyboard::descriptor(),
        ).unwrap();

        prop_assert!(spec.is_satisfied_by(&Request::parameter::<Keyboard>(name)).unwrap());
        prop_assert!(!spec.is_satisfied_by(&Request::parameter::<Keyboard>(other)).unwrap());
    }

    #[test]
    fn or_semantics_match_any_child(present in proptest::collection::vec(any::<bool>(), 0..6)) {
        #[derive(Debug)]
        struct Fixed(bool);
        impl RequestSpecification for Fixed {
            fn is_satisfied_by(
                &self,
                _request: &Request,
            ) -> Result<bool, fixcraft_kernel::SpecificationError> {
                Ok(self.0)
            }
        }

        let mut or = OrSpecification::new();
        for flag in &present {
            or = or.with(Arc::new(Fixed(*flag)));
        }
        let expected = present.iter().any(|f| *f);
        prop_assert_eq!(or.is_satisfied_by(&Request::for_type::<u8>()).unwrap(), expected);
    }
}
