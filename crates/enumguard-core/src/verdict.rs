use serde::{Deserialize, Serialize};

/// Content type attached to JSON rejection bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Outcome of a request-phase guard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Request proceeds; the guard takes no action.
    Allow,
    /// Request must terminate immediately with the given response.
    Reject(Rejection),
}

/// Terminal response emitted when a guard rejects a request.
///
/// The host must write exactly this status, header set, and body, then
/// stop — no further handler in the pipeline runs. Bodies are byte-exact
/// by contract; clients probe these endpoints and match on them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub status: u16,
    /// `Content-Type` header value; `None` leaves the host default.
    pub content_type: Option<String>,
    pub body: String,
}

impl Rejection {
    /// 403 with a plain body and the host's default content type.
    pub fn forbidden(body: impl Into<String>) -> Self {
        Self {
            status: 403,
            content_type: None,
            body: body.into(),
        }
    }

    /// 403 with a JSON body.
    pub fn forbidden_json(body: impl Into<String>) -> Self {
        Self {
            status: 403,
            content_type: Some(JSON_CONTENT_TYPE.to_string()),
            body: body.into(),
        }
    }
}

impl Verdict {
    pub fn is_allow(&self) -> bool {
        matches!(self, Verdict::Allow)
    }

    pub fn is_reject(&self) -> bool {
        matches!(self, Verdict::Reject(_))
    }
}
