//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in a query value
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a query string value
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Site path of a single post
pub fn post_path(slug: &str) -> String {
    format!("/post/{}", slug)
}

/// Site path of the listing filtered by a tag
///
/// # Examples
/// ```ignore
/// tag_path("game dev") // -> "/posts?filter=tag&value=game%20dev"
/// ```
pub fn tag_path(tag: &str) -> String {
    format!("/posts?filter=tag&value={}", encode_query_value(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_path() {
        assert_eq!(tag_path("opengl"), "/posts?filter=tag&value=opengl");
        assert_eq!(tag_path("3d-rendering"), "/posts?filter=tag&value=3d-rendering");
        assert_eq!(tag_path("c++ & go"), "/posts?filter=tag&value=c%2B%2B%20%26%20go");
    }

    #[test]
    fn test_post_path() {
        assert_eq!(post_path("nanite"), "/post/nanite");
    }
}
