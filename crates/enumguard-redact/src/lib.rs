//! # enumguard-redact
//!
//! Render-phase masking. The [`IdentityMasker`] holds the four rules that
//! keep administrator login names out of public output: display names,
//! author permalinks, comment CSS classifiers, and reply-control markup.
//!
//! All rules are stateless, single-call, and idempotent, and they fail
//! open: input that resolves to no identity (or to a non-administrator)
//! passes through unchanged.

#![deny(unsafe_code)]

pub mod masker;
pub mod slug;

pub use masker::{IdentityMasker, AUTHOR_CLASS_PREFIX};
pub use slug::last_path_segment;
