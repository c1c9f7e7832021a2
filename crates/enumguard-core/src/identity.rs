use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A user record as the host's identity backend presents it.
///
/// The login name is the enumerable secret: it is stable, unique, and
/// embedded in archive URLs and comment markup by the host. The display
/// name is free text with no uniqueness guarantee — an administrator who
/// configured a nickname distinct from their login is safe to attribute
/// by that nickname.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: u64,
    /// Unique login name, used in URLs and attribution.
    pub login: String,
    /// URL slug embedded in author permalinks.
    pub nicename: String,
    /// Free-text display name; defaults to the login when never configured.
    pub display_name: String,
    pub roles: BTreeSet<Role>,
}

/// Host role granted to an identity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Administrator,
    Editor,
    Author,
    Contributor,
    Subscriber,
    Custom(String),
}

impl Identity {
    /// Create an identity with no roles; the nicename defaults to the
    /// lowercased login, matching the host's slug convention.
    pub fn new(id: u64, login: impl Into<String>, display_name: impl Into<String>) -> Self {
        let login = login.into();
        let nicename = login.to_lowercase();
        Self {
            id,
            login,
            nicename,
            display_name: display_name.into(),
            roles: BTreeSet::new(),
        }
    }

    /// Override the permalink slug.
    pub fn with_nicename(mut self, nicename: impl Into<String>) -> Self {
        self.nicename = nicename.into();
        self
    }

    /// Grant a role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.insert(role);
        self
    }

    /// Whether this identity carries the administrator capability.
    pub fn is_administrator(&self) -> bool {
        self.roles.contains(&Role::Administrator)
    }
}
