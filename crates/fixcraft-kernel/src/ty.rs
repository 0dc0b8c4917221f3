//! Type identity and declared type relations
//!
//! Rust has no runtime view of subtyping, so assignability is carried by
//! declared metadata: every type participating in specimen generation is
//! identified by a [`TypeToken`] and described by a [`TypeDescriptor`]
//! listing its ancestor chain and implemented interfaces.

use std::any::{Any, TypeId};
use std::fmt;

/// Identity of a type within the fixture's type universe
///
/// Wraps a [`TypeId`] together with the type's name for diagnostics.
/// Constructible for unsized types, so trait objects (`dyn Trait`) can be
/// requested and matched like any other type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// Token for `T`
    #[inline]
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Underlying [`TypeId`]
    #[inline]
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Type name as reported by the compiler
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Declared type relations for one target type
///
/// Holds the type's own token, its ancestor chain (nearest first,
/// transitively flattened), and the set of interface tokens it implements
/// (its own plus those inherited from ancestors).
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    token: TypeToken,
    ancestors: Vec<TypeToken>,
    interfaces: Vec<TypeToken>,
}

impl TypeDescriptor {
    /// Leaf descriptor for `T`: no ancestors, no interfaces
    #[inline]
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self {
            token: TypeToken::of::<T>(),
            ancestors: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    /// Declare `U` as the direct ancestor
    ///
    /// `U`'s own ancestors and interfaces are absorbed, so the chain stays
    /// transitively complete no matter how deep the declared hierarchy is.
    #[must_use]
    pub fn extends<U: SpecimenType>(mut self) -> Self {
        let ancestor = U::descriptor();
        self.ancestors.push(ancestor.token);
        self.ancestors.extend(ancestor.ancestors);
        for interface in ancestor.interfaces {
            if !self.interfaces.contains(&interface) {
                self.interfaces.push(interface);
            }
        }
        self
    }

    /// Declare that the type implements interface `I`
    #[must_use]
    pub fn implements<I>(mut self) -> Self
    where
        I: ?Sized + 'static,
    {
        let token = TypeToken::of::<I>();
        if !self.interfaces.contains(&token) {
            self.interfaces.push(token);
        }
        self
    }

    /// The described type's own token
    #[inline]
    #[must_use]
    pub fn token(&self) -> TypeToken {
        self.token
    }

    /// Declared ancestor chain, nearest first
    #[inline]
    #[must_use]
    pub fn ancestors(&self) -> &[TypeToken] {
        &self.ancestors
    }

    /// Declared interfaces, own and inherited
    #[inline]
    #[must_use]
    pub fn interfaces(&self) -> &[TypeToken] {
        &self.interfaces
    }

    /// Whether a value of the described type can stand in for `other`
    ///
    /// True for the type itself, any declared ancestor, and any declared
    /// interface. This is the compatibility check name-based matching uses.
    #[must_use]
    pub fn assignable_to(&self, other: TypeToken) -> bool {
        self.token == other
            || self.ancestors.contains(&other)
            || self.interfaces.contains(&other)
    }
}

/// Types that participate in specimen generation
///
/// The default descriptor is a leaf (no ancestors, no interfaces); types
/// modeling a hierarchy override [`SpecimenType::descriptor`].
pub trait SpecimenType: Any + Send + Sync {
    /// Declared type relations for this type
    #[must_use]
    fn descriptor() -> TypeDescriptor
    where
        Self: Sized,
    {
        TypeDescriptor::of::<Self>()
    }
}

macro_rules! leaf_specimen_type {
    ($($ty:ty),* $(,)?) => {
        $(impl SpecimenType for $ty {})*
    };
}

leaf_specimen_type!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

#[cfg(test)]
mod tests {
    use super::*;

    trait Marker {}

    struct Base;
    struct Middle;
    struct Leaf;

    impl SpecimenType for Base {}

    impl SpecimenType for Middle {
        fn descriptor() -> TypeDescriptor {
            TypeDescriptor::of::<Middle>()
                .extends::<Base>()
                .implements::<dyn Marker>()
        }
    }

    impl SpecimenType for Leaf {
        fn descriptor() -> TypeDescriptor {
            TypeDescriptor::of::<Leaf>().extends::<Middle>()
        }
    }

    #[test]
    fn token_identity() {
        assert_eq!(TypeToken::of::<i32>(), TypeToken::of::<i32>());
        assert_ne!(TypeToken::of::<i32>(), TypeToken::of::<i64>());
    }

    #[test]
    fn token_for_trait_object() {
        let token = TypeToken::of::<dyn Marker>();
        assert_eq!(token, TypeToken::of::<dyn Marker>());
        assert_ne!(token, TypeToken::of::<Base>());
    }

    #[test]
    fn leaf_descriptor_is_bare() {
        let descriptor = TypeDescriptor::of::<Base>();
        assert!(descriptor.ancestors().is_empty());
        assert!(descriptor.interfaces().is_empty());
    }

    #[test]
    fn extends_flattens_chain() {
        let descriptor = Leaf::descriptor();
        assert_eq!(
            descriptor.ancestors(),
            &[TypeToken::of::<Middle>(), TypeToken::of::<Base>()]
        );
    }

    #[test]
    fn interfaces_are_inherited() {
        let descriptor = Leaf::descriptor();
        assert_eq!(descriptor.interfaces(), &[TypeToken::of::<dyn Marker>()]);
    }

    #[test]
    fn assignable_to_self_ancestors_and_interfaces() {
        let descriptor = Leaf::descriptor();
        assert!(descriptor.assignable_to(TypeToken::of::<Leaf>()));
        assert!(descriptor.assignable_to(TypeToken::of::<Base>()));
        assert!(descriptor.assignable_to(TypeToken::of::<dyn Marker>()));
        assert!(!descriptor.assignable_to(TypeToken::of::<i32>()));
    }

    #[test]
    fn primitives_are_leaf_specimen_types() {
        assert!(String::descriptor().ancestors().is_empty());
        assert_eq!(i32::descriptor().token(), TypeToken::of::<i32>());
    }
}
