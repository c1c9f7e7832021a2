//! # enumguard-core
//!
//! Shared types for the user-enumeration guards: the [`Identity`] model,
//! the [`IdentityStore`] seam to the host's identity backend, and the
//! [`Verdict`] / [`Rejection`] terminal-response types request guards
//! answer with.
//!
//! Two failure policies run through everything built on this crate:
//!
//! - **Fail-closed for requests**: a request that matches an enumeration
//!   pattern is rejected regardless of what the identity store contains.
//! - **Fail-open for masking**: an identity lookup miss means "not an
//!   administrator" and the original value passes through unchanged. A
//!   missing identity cannot leak more than the unmodified input already
//!   would.

#![deny(unsafe_code)]

pub mod error;
pub mod identity;
pub mod mocks;
pub mod store;
pub mod verdict;

pub use error::GuardError;
pub use identity::{Identity, Role};
pub use store::{IdentityStore, InMemoryIdentityStore};
pub use verdict::{Rejection, Verdict, JSON_CONTENT_TYPE};
