/// Last non-empty path segment of a URL.
///
/// Author permalinks embed the identity's nicename as the final segment
/// (`https://example.com/author/<nicename>/`). Trailing slashes are
/// trimmed, then the substring after the last remaining slash is the slug.
/// Inputs with no slash, or nothing left after trimming, yield `None`.
pub fn last_path_segment(url: &str) -> Option<&str> {
    let trimmed = url.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some((_, segment)) if !segment.is_empty() => Some(segment),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_trailing_slash_form() {
        assert_eq!(last_path_segment("/author/admin/"), Some("admin"));
        assert_eq!(
            last_path_segment("https://example.com/author/jane/"),
            Some("jane")
        );
    }

    #[test]
    fn extracts_slashless_tail() {
        assert_eq!(last_path_segment("/author/admin"), Some("admin"));
    }

    #[test]
    fn multiple_trailing_slashes_are_trimmed() {
        assert_eq!(last_path_segment("/author/admin///"), Some("admin"));
    }

    #[test]
    fn inputs_without_slash_have_no_segment() {
        assert_eq!(last_path_segment("admin"), None);
        assert_eq!(last_path_segment(""), None);
    }

    #[test]
    fn slash_only_inputs_have_no_segment() {
        assert_eq!(last_path_segment("/"), None);
        assert_eq!(last_path_segment("///"), None);
    }
}
