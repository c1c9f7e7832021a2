//! Preloaded identity stores for tests.

use crate::identity::{Identity, Role};
use crate::store::{IdentityStore, InMemoryIdentityStore};

/// Mock identity store for testing.
///
/// Builds up an [`InMemoryIdentityStore`] with one call per user, assigning
/// ids sequentially. Implements [`IdentityStore`] directly so it can be
/// handed to guards as-is.
#[derive(Clone, Debug, Default)]
pub struct MockIdentityStore {
    inner: InMemoryIdentityStore,
    next_id: u64,
}

impl MockIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Administrator whose display name is the login (no nickname set).
    pub fn with_admin(self, login: &str) -> Self {
        self.with_admin_named(login, login)
    }

    /// Administrator with a configured nickname.
    pub fn with_admin_named(mut self, login: &str, display_name: &str) -> Self {
        self.next_id += 1;
        self.inner.insert(
            Identity::new(self.next_id, login, display_name).with_role(Role::Administrator),
        );
        self
    }

    /// Ordinary subscriber.
    pub fn with_subscriber(mut self, login: &str) -> Self {
        self.next_id += 1;
        self.inner
            .insert(Identity::new(self.next_id, login, login).with_role(Role::Subscriber));
        self
    }

    pub fn into_inner(self) -> InMemoryIdentityStore {
        self.inner
    }
}

impl IdentityStore for MockIdentityStore {
    fn lookup_by_login(&self, login: &str) -> Option<Identity> {
        self.inner.lookup_by_login(login)
    }

    fn lookup_by_nicename(&self, slug: &str) -> Option<Identity> {
        self.inner.lookup_by_nicename(slug)
    }
}
