//! # enumguard
//!
//! Blocks user enumeration on a host content platform. Attackers discover
//! valid login names through author-archive URLs, REST user listings, and
//! byline/comment metadata; this crate intercepts each of those surfaces
//! behind one [`EnumerationGuard`] value:
//!
//! - request phase — [`EnumerationGuard::check_request`] rejects
//!   `?author=<id>` archive requests and REST user-collection listings
//!   with terminal, byte-exact responses;
//! - render phase — [`EnumerationGuard::apply`] masks administrator
//!   display names, author permalinks, comment CSS classifiers, and
//!   reply-control labels;
//! - management UI — the guard's own plugin row loses its deactivate and
//!   delete actions (cosmetic, not a security boundary).
//!
//! The guard is stateless once constructed. The host wires it in by
//! installing a handler at each point [`EnumerationGuard::registrations`]
//! lists and feeding render values through [`EnumerationGuard::apply`].
//!
//! ```
//! use std::sync::Arc;
//! use enumguard::{EnumerationGuard, Identity, InMemoryIdentityStore, Role};
//!
//! let mut store = InMemoryIdentityStore::new();
//! store.insert(Identity::new(1, "admin", "admin").with_role(Role::Administrator));
//!
//! let guard = EnumerationGuard::new(Arc::new(store))?;
//! assert!(guard.check_request("/wp-json/wp/v2/users", [("per_page", "100")]).is_reject());
//! assert_eq!(guard.mask_display_name("admin"), "");
//! # Ok::<(), enumguard::GuardError>(())
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod guard;
pub mod hooks;
pub mod plugin;

pub use config::GuardConfig;
pub use guard::EnumerationGuard;
pub use hooks::{HookPayload, HookPoint};
pub use plugin::PluginAction;

pub use enumguard_core::{
    GuardError, Identity, IdentityStore, InMemoryIdentityStore, Rejection, Role, Verdict,
    JSON_CONTENT_TYPE,
};
pub use enumguard_request::{ARCHIVE_BODY, REST_V1_BODY, REST_V2_BODY};
