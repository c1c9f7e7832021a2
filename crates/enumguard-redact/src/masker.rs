use std::sync::Arc;

use enumguard_core::{GuardError, IdentityStore};
use regex::Regex;
use tracing::{debug, warn};

use crate::slug::last_path_segment;

/// CSS class prefix the host stamps on comments with the author's login.
pub const AUTHOR_CLASS_PREFIX: &str = "comment-author-";

// Greedy span: everything between the first and last single quote on the
// line is blanked.
const REPLY_LABEL_PATTERN: &str = "aria-label='.+'";

/// Masks administrator identity in rendered output.
///
/// The login name is the enumerable secret; showing it in a byline, a
/// permalink slug, a CSS classifier, or an accessibility label defeats
/// the request-phase guards. A configured nickname is not the login name
/// and stays visible.
pub struct IdentityMasker {
    store: Arc<dyn IdentityStore + Send + Sync>,
    reply_label: Regex,
}

impl IdentityMasker {
    pub fn new(store: Arc<dyn IdentityStore + Send + Sync>) -> Result<Self, GuardError> {
        let reply_label = Regex::new(REPLY_LABEL_PATTERN)
            .map_err(|err| GuardError::invalid_pattern(REPLY_LABEL_PATTERN, err))?;
        Ok(Self { store, reply_label })
    }

    /// Mask a rendered author or comment-author name.
    ///
    /// Only names that resolve to an administrator change: a nickname
    /// distinct from the login (compared ASCII case-insensitively)
    /// replaces it; a display name that still defaults to the login
    /// leaves nothing safe to show and becomes the empty string.
    pub fn mask_display_name(&self, shown: &str) -> String {
        let Some(user) = self.store.lookup_by_login(shown) else {
            return shown.to_string();
        };
        if !user.is_administrator() {
            return shown.to_string();
        }
        if user.display_name.eq_ignore_ascii_case(shown) {
            warn!("administrator display name suppressed");
            String::new()
        } else {
            debug!("administrator display name replaced with nickname");
            user.display_name
        }
    }

    /// Mask an author permalink URL.
    ///
    /// An empty return means "no link": the caller renders plain text
    /// instead of an anchor. Unparseable input passes through unchanged.
    pub fn mask_author_link(&self, link: &str) -> String {
        let Some(slug) = last_path_segment(link) else {
            return link.to_string();
        };
        let Some(user) = self.store.lookup_by_nicename(slug) else {
            return link.to_string();
        };
        if user.is_administrator() {
            warn!("administrator author link suppressed");
            String::new()
        } else {
            link.to_string()
        }
    }

    /// Drop every comment CSS class carrying the login-name prefix.
    ///
    /// The result is dense and order-preserving whether or not anything
    /// was removed.
    pub fn strip_author_classes(&self, mut classes: Vec<String>) -> Vec<String> {
        let before = classes.len();
        classes.retain(|class| !class.starts_with(AUTHOR_CLASS_PREFIX));
        if classes.len() != before {
            debug!(removed = before - classes.len(), "author classes stripped");
        }
        classes
    }

    /// Blank every single-quoted `aria-label` span in reply-control markup.
    ///
    /// The labels embed "Reply to {author}"; the rest of the markup is
    /// untouched.
    pub fn scrub_reply_markup(&self, markup: &str) -> String {
        self.reply_label
            .replace_all(markup, "aria-label=''")
            .into_owned()
    }
}
