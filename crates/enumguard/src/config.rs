use serde::{Deserialize, Serialize};

/// Per-guard enable flags.
///
/// Everything defaults to enabled. A disabled guard drops out of
/// [`registrations`](crate::EnumerationGuard::registrations) and its entry
/// points become pass-throughs, so a host that wires unconditionally still
/// gets the configured behavior.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Reject `?author=<id>` archive requests.
    pub block_author_archives: bool,
    /// Reject REST user-collection listings (both API generations).
    pub block_rest_user_listing: bool,
    /// Mask administrator names, links, classes, and reply labels.
    pub mask_admin_identity: bool,
    /// Strip deactivate/delete from this guard's own plugin row.
    pub protect_plugin_row: bool,
    /// Identifier of this guard's own entry in the host's plugin listing.
    pub plugin_id: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            block_author_archives: true,
            block_rest_user_listing: true,
            mask_admin_identity: true,
            protect_plugin_row: true,
            plugin_id: "enumguard".to_string(),
        }
    }
}
