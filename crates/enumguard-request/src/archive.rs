use enumguard_core::{Rejection, Verdict};
use tracing::{debug, warn};

/// Body of the archive rejection. Plain text, host-default content type.
pub const ARCHIVE_BODY: &str = "Forbidden";

/// Blocks the enumerable author-archive request form `?author=<id>`.
///
/// The host resolves `?author=N` to a redirect that exposes the user's
/// login name in the archive URL, which is how enumeration scripts walk
/// the user table. Only that form is blocked: an absent or empty `author`
/// parameter is allowed so the archive feature itself keeps working, and
/// no other parameter is inspected.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArchiveGuard;

impl ArchiveGuard {
    pub fn new() -> Self {
        Self
    }

    /// Classify one request's query parameters.
    pub fn check<'a, P>(&self, params: P) -> Verdict
    where
        P: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in params {
            if name == "author" && !value.is_empty() {
                warn!("author archive request blocked");
                return Verdict::Reject(Rejection::forbidden(ARCHIVE_BODY));
            }
        }
        debug!("archive guard passed");
        Verdict::Allow
    }
}
