use crate::identity::Identity;

/// Read-only identity oracle supplied by the embedding host.
///
/// Lookups that find nothing return `None`; a miss is never an error.
/// The masking guards treat a miss as "not an administrator" and pass
/// their input through unchanged.
pub trait IdentityStore {
    /// Exact, case-sensitive lookup by login name.
    fn lookup_by_login(&self, login: &str) -> Option<Identity>;

    /// Lookup by the permalink slug (nicename).
    fn lookup_by_nicename(&self, slug: &str) -> Option<Identity>;
}

/// Vec-backed store for embedders without an identity backend of their own.
#[derive(Clone, Debug, Default)]
pub struct InMemoryIdentityStore {
    identities: Vec<Identity>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, identity: Identity) {
        self.identities.push(identity);
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

impl IdentityStore for InMemoryIdentityStore {
    fn lookup_by_login(&self, login: &str) -> Option<Identity> {
        self.identities.iter().find(|user| user.login == login).cloned()
    }

    fn lookup_by_nicename(&self, slug: &str) -> Option<Identity> {
        self.identities
            .iter()
            .find(|user| user.nicename == slug)
            .cloned()
    }
}
