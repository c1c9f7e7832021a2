//! # enumguard-request
//!
//! Request-phase guards. Both classify an inbound request before any
//! rendering happens and answer with a [`Verdict`](enumguard_core::Verdict);
//! a rejection is terminal and the host must emit it verbatim.
//!
//! - [`ArchiveGuard`] — blocks the enumerable author-archive form
//!   `?author=<id>`.
//! - [`RestListingGuard`] — blocks REST user-collection listings across
//!   both API generations, with byte-exact rejection bodies.

#![deny(unsafe_code)]

pub mod archive;
pub mod rest;

pub use archive::{ArchiveGuard, ARCHIVE_BODY};
pub use rest::{RestListingGuard, REST_V1_BODY, REST_V2_BODY};
