use serde::{Deserialize, Serialize};

use crate::plugin::PluginAction;

/// Host extension points the guard attaches to.
///
/// The host calls the matching guard entry point whenever one of these
/// fires: the request points feed
/// [`check_request`](crate::EnumerationGuard::check_request), the render
/// points feed [`apply`](crate::EnumerationGuard::apply).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookPoint {
    /// Inbound request, before any rendering.
    RequestStart,
    /// Author byline name about to be rendered.
    AuthorName,
    /// Comment author name about to be rendered.
    CommentAuthorName,
    /// Author archive permalink about to be rendered.
    AuthorLink,
    /// CSS class list for one comment.
    CommentCssClasses,
    /// Reply-control markup for one comment.
    CommentReplyMarkup,
    /// Management action row for one plugin entry.
    PluginActionRow,
}

impl HookPoint {
    /// Every point, in registration order.
    pub const ALL: [HookPoint; 7] = [
        HookPoint::RequestStart,
        HookPoint::AuthorName,
        HookPoint::CommentAuthorName,
        HookPoint::AuthorLink,
        HookPoint::CommentCssClasses,
        HookPoint::CommentReplyMarkup,
        HookPoint::PluginActionRow,
    ];

    /// Extension-point name the host registers the handler under.
    pub fn name(self) -> &'static str {
        match self {
            HookPoint::RequestStart => "on-request-start",
            HookPoint::AuthorName => "on-render-author-name",
            HookPoint::CommentAuthorName => "on-render-comment-author-name",
            HookPoint::AuthorLink => "on-render-author-link",
            HookPoint::CommentCssClasses => "on-render-comment-css-classes",
            HookPoint::CommentReplyMarkup => "on-render-comment-reply-markup",
            HookPoint::PluginActionRow => "on-render-plugin-action-row",
        }
    }
}

/// One render-phase value passing through a hook.
///
/// The variant selects the rule; [`apply`](crate::EnumerationGuard::apply)
/// returns the same variant with the value transformed. There is no
/// variant for [`HookPoint::RequestStart`] — the request phase answers
/// with a [`Verdict`](enumguard_core::Verdict), not a rewritten value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HookPayload {
    AuthorName(String),
    CommentAuthorName(String),
    AuthorLink(String),
    CommentCssClasses(Vec<String>),
    CommentReplyMarkup(String),
    PluginActionRow {
        entry_id: String,
        actions: Vec<PluginAction>,
    },
}

impl HookPayload {
    /// The point this payload belongs to.
    pub fn point(&self) -> HookPoint {
        match self {
            HookPayload::AuthorName(_) => HookPoint::AuthorName,
            HookPayload::CommentAuthorName(_) => HookPoint::CommentAuthorName,
            HookPayload::AuthorLink(_) => HookPoint::AuthorLink,
            HookPayload::CommentCssClasses(_) => HookPoint::CommentCssClasses,
            HookPayload::CommentReplyMarkup(_) => HookPoint::CommentReplyMarkup,
            HookPayload::PluginActionRow { .. } => HookPoint::PluginActionRow,
        }
    }
}
