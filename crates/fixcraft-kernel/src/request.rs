//! Generation requests
//!
//! A [`Request`] describes what is being asked for: a type, or a named
//! member (property, constructor parameter, or field) with a declared type.
//! Requests are immutable and created once per generation step.

use std::fmt;

use crate::ty::TypeToken;

/// What a producer is being asked to generate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Request {
    /// A value of a given type
    Type(TypeRequest),

    /// A value for a named member with a declared type
    Member(MemberRequest),
}

impl Request {
    /// Type request for `T`
    #[inline]
    #[must_use]
    pub fn for_type<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self::Type(TypeRequest {
            token: TypeToken::of::<T>(),
        })
    }

    /// Type request for an already-materialized token
    #[inline]
    #[must_use]
    pub fn for_token(token: TypeToken) -> Self {
        Self::Type(TypeRequest { token })
    }

    /// Property request named `name`, declared as `T`
    #[inline]
    #[must_use]
    pub fn property<T>(name: impl Into<String>) -> Self
    where
        T: ?Sized + 'static,
    {
        Self::member::<T>(MemberKind::Property, name)
    }

    /// Constructor-parameter request named `name`, declared as `T`
    #[inline]
    #[must_use]
    pub fn parameter<T>(name: impl Into<String>) -> Self
    where
        T: ?Sized + 'static,
    {
        Self::member::<T>(MemberKind::Parameter, name)
    }

    /// Field request named `name`, declared as `T`
    #[inline]
    #[must_use]
    pub fn field<T>(name: impl Into<String>) -> Self
    where
        T: ?Sized + 'static,
    {
        Self::member::<T>(MemberKind::Field, name)
    }

    /// Member request of an arbitrary kind
    #[inline]
    #[must_use]
    pub fn member<T>(kind: MemberKind, name: impl Into<String>) -> Self
    where
        T: ?Sized + 'static,
    {
        Self::Member(MemberRequest {
            kind,
            name: name.into(),
            declared: TypeToken::of::<T>(),
        })
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(t) => write!(f, "type {}", t.token),
            Self::Member(m) => write!(f, "{} '{}' of type {}", m.kind, m.name, m.declared),
        }
    }
}

/// A request for a value of one type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRequest {
    token: TypeToken,
}

impl TypeRequest {
    /// The requested type
    #[inline]
    #[must_use]
    pub fn token(&self) -> TypeToken {
        self.token
    }
}

/// A request for a named member's value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberRequest {
    kind: MemberKind,
    name: String,
    declared: TypeToken,
}

impl MemberRequest {
    /// Which kind of member is being populated
    #[inline]
    #[must_use]
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// The member's name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The member's declared type
    #[inline]
    #[must_use]
    pub fn declared(&self) -> TypeToken {
        self.declared
    }
}

/// Member kinds a named request can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// A property
    Property,

    /// A constructor parameter
    Parameter,

    /// A field
    Field,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property => f.write_str("property"),
            Self::Parameter => f.write_str("parameter"),
            Self::Field => f.write_str("field"),
        }
    }
}
