//! Property tests for the request-phase guards.

use enumguard_core::Verdict;
use enumguard_request::{ArchiveGuard, RestListingGuard, ARCHIVE_BODY, REST_V2_BODY};
use proptest::prelude::*;

proptest! {
    #[test]
    fn any_nonempty_author_value_rejects(value in "[A-Za-z0-9_.%-]{1,24}") {
        let guard = ArchiveGuard::new();
        match guard.check([("author", value.as_str())]) {
            Verdict::Reject(rejection) => {
                prop_assert_eq!(rejection.status, 403);
                prop_assert_eq!(rejection.body.as_str(), ARCHIVE_BODY);
            }
            Verdict::Allow => prop_assert!(false, "author={} was allowed", value),
        }
    }

    #[test]
    fn params_without_author_allow(name in "[a-z_]{1,12}", value in "[A-Za-z0-9]{0,24}") {
        prop_assume!(name != "author");
        let guard = ArchiveGuard::new();
        prop_assert!(guard.check([(name.as_str(), value.as_str())]).is_allow());
    }

    #[test]
    fn users_route_with_nonword_follower_rejects(follower in "[/?&=.;-][a-z0-9/=&?-]{0,20}") {
        let guard = RestListingGuard::new().unwrap();
        let uri = format!("/wp-json/wp/v2/users{follower}");
        match guard.check(&uri) {
            Verdict::Reject(rejection) => prop_assert_eq!(rejection.body.as_str(), REST_V2_BODY),
            Verdict::Allow => prop_assert!(false, "{} was allowed", uri),
        }
    }

    #[test]
    fn users_route_with_word_follower_allows(follower in "[a-z0-9_]{1,8}") {
        let guard = RestListingGuard::new().unwrap();
        let uri = format!("/wp-json/wp/v2/users{follower}");
        prop_assert!(guard.check(&uri).is_allow());
    }
}
