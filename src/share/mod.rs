//! Builders for third-party "share" URLs. Each builder is a pure function
//! over strings: a fixed host/path prefix, a query parameter name, and a
//! percent-encoded value. Malformed input is not rejected, it is encoded and
//! concatenated as given.

use itertools::Itertools;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

mod registry;

pub use registry::{FilterFn, FilterRegistry};

/// Percent-encode a string for inclusion in a URL query component.
/// Every non-alphanumeric byte is escaped, so spaces become `%20`.
pub fn percent_encode(component: &str) -> String {
    utf8_percent_encode(component, NON_ALPHANUMERIC).to_string()
}

pub fn twitter_share_url(url: &str) -> String {
    format!("http://twitter.com/share?url={}", percent_encode(url))
}

/// Append a pre-populated tweet text to a share URL produced by
/// [`twitter_share_url`]. The base is not validated.
pub fn append_text(share_url: &str, text: &str) -> String {
    format!("{share_url}&text={}", percent_encode(text))
}

/// Append a `hashtags` parameter. Tags are encoded individually and joined
/// with `,`; an empty tag list leaves the parameter value empty.
pub fn append_hashtags(share_url: &str, tags: impl Into<Hashtags>) -> String {
    let joined = tags
        .into()
        .0
        .iter()
        .map(|tag| percent_encode(tag))
        .join(",");
    format!("{share_url}&hashtags={joined}")
}

pub fn facebook_share_url(url: &str) -> String {
    format!(
        "https://www.facebook.com/sharer/sharer.php?u={}",
        percent_encode(url)
    )
}

pub fn linkedin_share_url(url: &str) -> String {
    format!(
        "https://www.linkedin.com/shareArticle?url={}",
        percent_encode(url)
    )
}

/// Hashtag list for [`append_hashtags`]. Built either from an explicit list
/// or from a single comma-delimited string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hashtags(Vec<String>);

impl From<&str> for Hashtags {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Self(Vec::new())
        } else {
            Self(value.split(',').map(str::to_string).collect())
        }
    }
}

impl From<Vec<String>> for Hashtags {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl From<&[String]> for Hashtags {
    fn from(value: &[String]) -> Self {
        Self(value.to_vec())
    }
}

impl From<&[&str]> for Hashtags {
    fn from(value: &[&str]) -> Self {
        Self(value.iter().map(|tag| tag.to_string()).collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn twitter_prefix_and_encoding() {
        let built = twitter_share_url("http://example.com/post");
        assert_eq!(
            built,
            format!(
                "http://twitter.com/share?url={}",
                percent_encode("http://example.com/post")
            )
        );
        assert_eq!(
            built,
            "http://twitter.com/share?url=http%3A%2F%2Fexample%2Ecom%2Fpost"
        );
    }

    #[test]
    fn append_text_encodes_spaces() {
        let built = append_text(&twitter_share_url("http://x"), "hi there");
        assert_eq!(
            built,
            "http://twitter.com/share?url=http%3A%2F%2Fx&text=hi%20there"
        );
    }

    #[test]
    fn hashtag_string_and_list_forms_agree() {
        let base = twitter_share_url("http://x");
        let from_string = append_hashtags(&base, "a,b,c");
        let from_list = append_hashtags(&base, ["a", "b", "c"].as_slice());
        assert_eq!(from_string, from_list);
        assert_eq!(from_string, format!("{base}&hashtags=a,b,c"));
    }

    #[test]
    fn hashtags_are_encoded_per_tag() {
        let built = append_hashtags("base", ["rust lang", "plt"].as_slice());
        assert_eq!(built, "base&hashtags=rust%20lang,plt");
    }

    #[test]
    fn empty_hashtag_list_leaves_bare_parameter() {
        let base = twitter_share_url("http://x");
        assert_eq!(
            append_hashtags(&base, Vec::<String>::new()),
            format!("{base}&hashtags=")
        );
    }

    #[test]
    fn facebook_prefix_and_encoding() {
        let built = facebook_share_url("http://example.com/p/essay?x=1");
        assert!(built.starts_with("https://www.facebook.com/sharer/sharer.php?u="));
        assert_eq!(
            built,
            format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                percent_encode("http://example.com/p/essay?x=1")
            )
        );
    }

    #[test]
    fn linkedin_prefix_and_encoding() {
        assert_eq!(
            linkedin_share_url("http://example.com/post"),
            format!(
                "https://www.linkedin.com/shareArticle?url={}",
                percent_encode("http://example.com/post")
            )
        );
    }

    #[test]
    fn builders_are_total_over_malformed_input() {
        // Garbage in, well-formed share URL out.
        let built = twitter_share_url("not a url at all & never will be");
        assert_eq!(
            built,
            format!(
                "http://twitter.com/share?url={}",
                percent_encode("not a url at all & never will be")
            )
        );
        assert_eq!(
            facebook_share_url(""),
            "https://www.facebook.com/sharer/sharer.php?u="
        );
    }

    #[test]
    fn builders_are_deterministic() {
        let u = "http://example.com/p/paradigms?a=b&c=d e";
        assert_eq!(twitter_share_url(u), twitter_share_url(u));
        assert_eq!(facebook_share_url(u), facebook_share_url(u));
        assert_eq!(linkedin_share_url(u), linkedin_share_url(u));
    }
}
