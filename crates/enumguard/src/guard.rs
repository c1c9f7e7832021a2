use std::sync::Arc;

use enumguard_core::{GuardError, IdentityStore, Verdict};
use enumguard_redact::IdentityMasker;
use enumguard_request::{ArchiveGuard, RestListingGuard};
use tracing::debug;

use crate::config::GuardConfig;
use crate::hooks::{HookPayload, HookPoint};
use crate::plugin::{self, PluginAction};

/// Every interceptor behind one value.
///
/// Stateless once constructed; wrap it in an `Arc` and share it across
/// request handlers freely. Each entry point is a pure function of its
/// input plus a read-only identity lookup.
pub struct EnumerationGuard {
    config: GuardConfig,
    archive: ArchiveGuard,
    rest: RestListingGuard,
    masker: IdentityMasker,
}

impl EnumerationGuard {
    /// Build with default configuration (everything enabled).
    pub fn new(store: Arc<dyn IdentityStore + Send + Sync>) -> Result<Self, GuardError> {
        Self::with_config(store, GuardConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn IdentityStore + Send + Sync>,
        config: GuardConfig,
    ) -> Result<Self, GuardError> {
        Ok(Self {
            archive: ArchiveGuard::new(),
            rest: RestListingGuard::new()?,
            masker: IdentityMasker::new(store)?,
            config,
        })
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Request-phase classification: archive guard first, then REST guard.
    ///
    /// The first rejection wins and is terminal — the host must emit its
    /// status, headers, and body verbatim and run no further handler.
    pub fn check_request<'a, P>(&self, uri: &str, params: P) -> Verdict
    where
        P: IntoIterator<Item = (&'a str, &'a str)>,
    {
        if self.config.block_author_archives {
            let verdict = self.archive.check(params);
            if verdict.is_reject() {
                return verdict;
            }
        }
        if self.config.block_rest_user_listing {
            let verdict = self.rest.check(uri);
            if verdict.is_reject() {
                return verdict;
            }
        }
        Verdict::Allow
    }

    /// Mask a rendered author or comment-author name.
    pub fn mask_display_name(&self, shown: &str) -> String {
        if !self.config.mask_admin_identity {
            return shown.to_string();
        }
        self.masker.mask_display_name(shown)
    }

    /// Mask an author permalink URL; empty means "render no link".
    pub fn mask_author_link(&self, link: &str) -> String {
        if !self.config.mask_admin_identity {
            return link.to_string();
        }
        self.masker.mask_author_link(link)
    }

    /// Drop login-name CSS classifiers from a comment class list.
    pub fn strip_author_classes(&self, classes: Vec<String>) -> Vec<String> {
        if !self.config.mask_admin_identity {
            return classes;
        }
        self.masker.strip_author_classes(classes)
    }

    /// Blank aria-labels in reply-control markup.
    pub fn scrub_reply_markup(&self, markup: &str) -> String {
        if !self.config.mask_admin_identity {
            return markup.to_string();
        }
        self.masker.scrub_reply_markup(markup)
    }

    /// Strip deactivate/delete from this guard's own plugin row.
    pub fn filter_plugin_actions(
        &self,
        entry_id: &str,
        actions: Vec<PluginAction>,
    ) -> Vec<PluginAction> {
        if !self.config.protect_plugin_row {
            return actions;
        }
        plugin::filter_plugin_actions(&self.config.plugin_id, entry_id, actions)
    }

    /// Hook points enabled under the current configuration, in
    /// registration order. The host installs one handler per point.
    pub fn registrations(&self) -> Vec<HookPoint> {
        let mut points = Vec::new();
        if self.config.block_author_archives || self.config.block_rest_user_listing {
            points.push(HookPoint::RequestStart);
        }
        if self.config.mask_admin_identity {
            points.extend([
                HookPoint::AuthorName,
                HookPoint::CommentAuthorName,
                HookPoint::AuthorLink,
                HookPoint::CommentCssClasses,
                HookPoint::CommentReplyMarkup,
            ]);
        }
        if self.config.protect_plugin_row {
            points.push(HookPoint::PluginActionRow);
        }
        debug!(hooks = points.len(), "guard registrations built");
        points
    }

    /// Dispatch one render-phase payload through its rule.
    pub fn apply(&self, payload: HookPayload) -> HookPayload {
        match payload {
            HookPayload::AuthorName(name) => {
                HookPayload::AuthorName(self.mask_display_name(&name))
            }
            HookPayload::CommentAuthorName(name) => {
                HookPayload::CommentAuthorName(self.mask_display_name(&name))
            }
            HookPayload::AuthorLink(link) => HookPayload::AuthorLink(self.mask_author_link(&link)),
            HookPayload::CommentCssClasses(classes) => {
                HookPayload::CommentCssClasses(self.strip_author_classes(classes))
            }
            HookPayload::CommentReplyMarkup(markup) => {
                HookPayload::CommentReplyMarkup(self.scrub_reply_markup(&markup))
            }
            HookPayload::PluginActionRow { entry_id, actions } => {
                let actions = self.filter_plugin_actions(&entry_id, actions);
                HookPayload::PluginActionRow { entry_id, actions }
            }
        }
    }
}
