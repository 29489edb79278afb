use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes `encodeURIComponent` escapes: everything but ASCII alphanumerics
/// and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Escape a string the way JavaScript's `encodeURIComponent` does.
///
/// ASCII letters, digits and `-_.!~*'()` pass through; every other
/// character is percent-encoded as its UTF-8 bytes.
///
/// # Examples
///
/// ```
/// use sentence_links_util::strings::encode_uri_component;
///
/// assert_eq!(encode_uri_component("你好"), "%E4%BD%A0%E5%A5%BD");
/// assert_eq!(encode_uri_component("a b&c"), "a%20b%26c");
/// ```
pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_passthrough() {
        assert_eq!(encode_uri_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
    }

    #[test]
    fn test_reserved_escaped() {
        assert_eq!(encode_uri_component("/?#[]@$+,;=:"), "%2F%3F%23%5B%5D%40%24%2B%2C%3B%3D%3A");
    }

    #[test]
    fn test_non_ascii_and_controls() {
        assert_eq!(encode_uri_component("é\n%"), "%C3%A9%0A%25");
        assert_eq!(encode_uri_component("学生"), "%E5%AD%A6%E7%94%9F");
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode_uri_component(""), "");
    }
}
