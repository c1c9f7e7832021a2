use enumguard_core::{GuardError, Rejection, Verdict};
use regex::Regex;
use tracing::{debug, warn};

/// Rejection body for the v2 route (`wp/v2`, merged into the host in 4.7).
pub const REST_V2_BODY: &str = r#"{"code":"rest_user_cannot_view","message":"Sorry, you are not allowed to list users.","data":{"status":403}}"#;

/// Rejection body for the legacy v1 route.
///
/// An array, not an object. The two API generations answered in different
/// shapes and clients match on them; the asymmetry is preserved on purpose.
pub const REST_V1_BODY: &str = r#"[{"code":"json_user_cannot_list","message":"Sorry, you are not allowed to list users."}]"#;

const REST_V2_PATTERN: &str = r"/wp-json/wp/v2/users\b";
const REST_V1_PATTERN: &str = r"/wp-json/users\b";

/// Blocks REST user-collection listings across both API generations.
///
/// Matching is at a path-segment boundary: the route must be followed by
/// end-of-input or a non-word character, so `/wp-json/wp/v2/usersfoo`
/// passes while `/wp-json/wp/v2/users`, `/wp-json/wp/v2/users/5`, and
/// `/wp-json/wp/v2/users?per_page=100` are all blocked.
#[derive(Clone, Debug)]
pub struct RestListingGuard {
    v2: Regex,
    v1: Regex,
}

impl RestListingGuard {
    pub fn new() -> Result<Self, GuardError> {
        Ok(Self {
            v2: compile(REST_V2_PATTERN)?,
            v1: compile(REST_V1_PATTERN)?,
        })
    }

    /// Classify one request URI. The v2 route is checked first.
    pub fn check(&self, uri: &str) -> Verdict {
        if self.v2.is_match(uri) {
            warn!(uri = %uri, "rest v2 user listing blocked");
            return Verdict::Reject(Rejection::forbidden_json(REST_V2_BODY));
        }
        if self.v1.is_match(uri) {
            warn!(uri = %uri, "rest v1 user listing blocked");
            return Verdict::Reject(Rejection::forbidden_json(REST_V1_BODY));
        }
        debug!(uri = %uri, "rest guard passed");
        Verdict::Allow
    }
}

fn compile(pattern: &str) -> Result<Regex, GuardError> {
    Regex::new(pattern).map_err(|err| GuardError::invalid_pattern(pattern, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumguard_core::JSON_CONTENT_TYPE;

    fn guard() -> RestListingGuard {
        RestListingGuard::new().unwrap()
    }

    fn reject_body(verdict: Verdict) -> Rejection {
        match verdict {
            Verdict::Reject(rejection) => rejection,
            Verdict::Allow => panic!("expected rejection"),
        }
    }

    #[test]
    fn v2_route_is_rejected_with_exact_body() {
        let rejection = reject_body(guard().check("/wp-json/wp/v2/users"));
        assert_eq!(rejection.status, 403);
        assert_eq!(rejection.content_type.as_deref(), Some(JSON_CONTENT_TYPE));
        assert_eq!(rejection.body, REST_V2_BODY);
    }

    #[test]
    fn v1_route_is_rejected_with_exact_body() {
        let rejection = reject_body(guard().check("/wp-json/users"));
        assert_eq!(rejection.status, 403);
        assert_eq!(rejection.content_type.as_deref(), Some(JSON_CONTENT_TYPE));
        assert_eq!(rejection.body, REST_V1_BODY);
    }

    #[test]
    fn segment_boundary_is_required() {
        assert!(guard().check("/wp-json/wp/v2/usersfoo").is_allow());
        assert!(guard().check("/wp-json/users_export").is_allow());
    }

    #[test]
    fn nonword_followers_still_match() {
        assert!(guard().check("/wp-json/wp/v2/users/5").is_reject());
        assert!(guard().check("/wp-json/wp/v2/users?per_page=100").is_reject());
        assert!(guard().check("/wp-json/users/").is_reject());
    }

    #[test]
    fn prefix_paths_still_match() {
        // The route can sit anywhere in the URI, e.g. behind a subdirectory install.
        assert!(guard().check("/blog/wp-json/wp/v2/users").is_reject());
    }

    #[test]
    fn v2_wins_when_both_routes_appear() {
        let uri = "/wp-json/wp/v2/users?next=/wp-json/users";
        assert_eq!(reject_body(guard().check(uri)).body, REST_V2_BODY);
    }

    #[test]
    fn unrelated_uris_are_allowed() {
        assert!(guard().check("/").is_allow());
        assert!(guard().check("/wp-json/wp/v2/posts").is_allow());
        assert!(guard().check("/about-users").is_allow());
    }

    #[test]
    fn bodies_keep_their_wire_shapes() {
        // v2 answers in object shape, v1 in list shape; both must parse.
        let v2: serde_json::Value = serde_json::from_str(REST_V2_BODY).unwrap();
        assert_eq!(v2["code"], "rest_user_cannot_view");
        assert_eq!(v2["data"]["status"], 403);

        let v1: serde_json::Value = serde_json::from_str(REST_V1_BODY).unwrap();
        let list = v1.as_array().expect("v1 body is a list");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["code"], "json_user_cannot_list");
    }
}
