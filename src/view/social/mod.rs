//! Anchor components for the social links on a post page, plus the glue that
//! resolves their hrefs through the share filter registry.

mod facebook;
mod feed;
mod linkedin;
mod twitter;

pub use self::facebook::*;
pub use self::feed::*;
pub use self::linkedin::*;
pub use self::twitter::*;

use log::warn;
use url::Url;

use crate::share::FilterRegistry;

/// Resolved hrefs for the share anchors on a single post page.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareHrefs {
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
}

impl ShareHrefs {
    /// Invoke the share filters by name, the way a template would, for the
    /// post at `url` titled `title`.
    pub fn build(filters: &FilterRegistry, url: &Url, title: &str, tags: &[String]) -> Self {
        let url = url.to_string();

        let twitter = apply(filters, "twitter_share_url", vec![url.clone()]);
        let twitter = apply(filters, "append_text", vec![twitter, title.to_string()]);
        let twitter = if tags.is_empty() {
            twitter
        } else {
            let mut args = vec![twitter];
            args.extend(tags.iter().cloned());
            apply(filters, "append_hashtags", args)
        };

        let facebook = apply(filters, "facebook_share_url", vec![url.clone()]);
        let linkedin = apply(filters, "linkedin_share_url", vec![url]);

        Self {
            twitter,
            facebook,
            linkedin,
        }
    }
}

fn apply(filters: &FilterRegistry, name: &str, args: Vec<String>) -> String {
    filters.apply(name, &args).unwrap_or_else(|| {
        warn!("No share filter named {name:?}");
        String::new()
    })
}

#[cfg(test)]
mod test {
    use super::ShareHrefs;
    use crate::share::{self, FilterRegistry};
    use url::Url;

    #[test]
    fn hrefs_chain_the_builders() {
        let filters = FilterRegistry::new();
        let url = Url::parse("https://example.com/p/on-closures").unwrap();
        let tags = vec!["plt".to_string(), "closures".to_string()];

        let hrefs = ShareHrefs::build(&filters, &url, "On Closures", &tags);

        let expected_twitter = share::append_hashtags(
            &share::append_text(
                &share::twitter_share_url("https://example.com/p/on-closures"),
                "On Closures",
            ),
            tags.as_slice(),
        );
        assert_eq!(hrefs.twitter, expected_twitter);
        assert_eq!(
            hrefs.facebook,
            share::facebook_share_url("https://example.com/p/on-closures")
        );
        assert_eq!(
            hrefs.linkedin,
            share::linkedin_share_url("https://example.com/p/on-closures")
        );
    }

    #[test]
    fn no_tags_means_no_hashtags_parameter() {
        let filters = FilterRegistry::new();
        let url = Url::parse("https://example.com/p/on-closures").unwrap();

        let hrefs = ShareHrefs::build(&filters, &url, "On Closures", &[]);
        assert!(!hrefs.twitter.contains("&hashtags="));
    }
}
