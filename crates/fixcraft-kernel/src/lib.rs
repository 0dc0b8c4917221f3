//! fixcraft kernel
//!
//! Request matching and specimen producer pipeline primitives.
//!
//! # Overview
//!
//! The kernel provides:
//! - **Requests**: what is being generated — a type, or a named member
//!   with a declared type ([`Request`])
//! - **Specimens**: type-erased generated values with shared identity,
//!   plus the decline sentinel ([`Specimen`], [`SpecimenValue`])
//! - **Specifications**: pure predicates over requests, OR-composable
//!   ([`RequestSpecification`], [`OrSpecification`])
//! - **Producers**: the chain-of-responsibility pipeline
//!   ([`SpecimenProducer`], [`FixedProducer`], [`FilteringProducer`],
//!   [`CompositeProducer`])
//!
//! # Example
//!
//! ```rust
//! use fixcraft_kernel::{
//!     ExactTypeSpecification, FilteringProducer, FixedProducer, Request, ResolveContext,
//!     SpecimenProducer, SpecimenValue, TypeToken,
//! };
//! use std::sync::Arc;
//!
//! // A fixed value that only answers requests for i32.
//! let fixed = Arc::new(FixedProducer::new(SpecimenValue::new(42_i32)));
//! let filtered: Arc<dyn SpecimenProducer> = Arc::new(FilteringProducer::new(
//!     Arc::new(ExactTypeSpecification::new(TypeToken::of::<i32>())),
//!     fixed,
//! ));
//!
//! let chain = vec![filtered];
//! let context = ResolveContext::new(&chain);
//!
//! let hit = context.resolve(&Request::for_type::<i32>()).unwrap();
//! assert!(!hit.is_no_specimen());
//!
//! let miss = context.resolve(&Request::for_type::<bool>()).unwrap();
//! assert!(miss.is_no_specimen());
//! ```

pub mod error;
pub mod producer;
pub mod request;
pub mod specification;
pub mod specimen;
pub mod ty;

// Re-exports
pub use error::{ProduceError, SpecificationError};
pub use producer::{
    CompositeProducer, FilteringProducer, FixedProducer, ResolveContext, SpecimenProducer,
    MAX_RESOLVE_DEPTH,
};
pub use request::{MemberKind, MemberRequest, Request, TypeRequest};
pub use specification::{
    BaseTypeSpecification, ExactTypeSpecification, ImplementedInterfacesSpecification,
    MemberNameSpecification, OrSpecification, RequestSpecification,
};
pub use specimen::{Specimen, SpecimenValue};
pub use ty::{SpecimenType, TypeDescriptor, TypeToken};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for pipeline construction
    pub use crate::{
        Request, RequestSpecification, ResolveContext, Specimen, SpecimenProducer, SpecimenType,
        SpecimenValue, TypeDescriptor, TypeToken,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
