//! fixcraft fixture
//!
//! The fixture registry, default generation engine, and freeze-on-match
//! orchestration.
//!
//! # Overview
//!
//! - [`Fixture`]: single-owner, ordered producer registry
//! - [`Customization`]: reusable configuration steps
//! - [`FreezeOnMatch`] + [`Matching`]: generate a specimen once, then
//!   return the identical instance for all matching requests
//! - [`engine`]: factories, member relays, and primitive generators
//!
//! # Example
//!
//! ```rust
//! use fixcraft_fixture::Fixture;
//! use std::sync::Arc;
//!
//! let mut fixture = Fixture::new();
//! let frozen = fixture.freeze::<String>().unwrap();
//! let again = fixture.create::<String>().unwrap();
//! assert!(Arc::ptr_eq(&frozen, &again));
//! ```

pub mod customization;
pub mod engine;
pub mod error;
pub mod fixture;
pub mod freeze;

// Re-exports
pub use customization::{CompositeCustomization, Customization};
pub use engine::{default_engine, FactoryProducer, MemberRelayProducer, PrimitiveProducer};
pub use error::FixtureError;
pub use fixture::Fixture;
pub use freeze::{FreezeOnMatch, Matching};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for fixture configuration
    pub use crate::{Customization, Fixture, FixtureError, FreezeOnMatch, Matching};
    pub use fixcraft_kernel::prelude::*;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
