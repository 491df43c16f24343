//! Filter registry for the share-link builders.
//!
//! Rendering code invokes the builders by name with positional string
//! arguments, the way a template filter would be invoked. The name-to-function
//! table is built once when the server is constructed and never mutated.

use std::collections::HashMap;

/// A share filter: positional string arguments in, finished string out.
pub type FilterFn = fn(&[String]) -> String;

pub struct FilterRegistry {
    filters: HashMap<&'static str, FilterFn>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        let mut filters: HashMap<&'static str, FilterFn> = HashMap::new();
        filters.insert("twitter_share_url", twitter_share_url);
        filters.insert("append_text", append_text);
        filters.insert("append_hashtags", append_hashtags);
        filters.insert("facebook_share_url", facebook_share_url);
        filters.insert("linkedin_share_url", linkedin_share_url);
        Self { filters }
    }

    /// Apply the named filter, or `None` if no such filter is registered.
    pub fn apply(&self, name: &str, args: &[String]) -> Option<String> {
        self.filters.get(name).map(|filter| filter(args))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.filters.keys().copied()
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn arg(args: &[String], n: usize) -> &str {
    args.get(n).map_or("", |arg| arg.as_str())
}

fn twitter_share_url(args: &[String]) -> String {
    super::twitter_share_url(arg(args, 0))
}

fn append_text(args: &[String]) -> String {
    super::append_text(arg(args, 0), arg(args, 1))
}

// A single tag argument is the comma-delimited form; two or more are an
// explicit tag list.
fn append_hashtags(args: &[String]) -> String {
    let base = arg(args, 0);
    match args.get(1..) {
        Some([tags]) => super::append_hashtags(base, tags.as_str()),
        Some(tags) => super::append_hashtags(base, tags),
        None => super::append_hashtags(base, Vec::<String>::new()),
    }
}

fn facebook_share_url(args: &[String]) -> String {
    super::facebook_share_url(arg(args, 0))
}

fn linkedin_share_url(args: &[String]) -> String {
    super::linkedin_share_url(arg(args, 0))
}

#[cfg(test)]
mod test {
    use super::FilterRegistry;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn registers_all_share_filters() {
        let registry = FilterRegistry::new();
        for name in [
            "twitter_share_url",
            "append_text",
            "append_hashtags",
            "facebook_share_url",
            "linkedin_share_url",
        ] {
            assert!(
                registry.names().any(|registered| registered == name),
                "missing filter {name}"
            );
        }
        assert_eq!(registry.names().count(), 5);
    }

    #[test]
    fn unknown_name_is_none() {
        let registry = FilterRegistry::new();
        assert_eq!(registry.apply("mastodon_share_url", &args(&["x"])), None);
    }

    #[test]
    fn dispatches_to_builders() {
        let registry = FilterRegistry::new();

        assert_eq!(
            registry.apply("twitter_share_url", &args(&["http://x"])),
            Some(crate::share::twitter_share_url("http://x"))
        );
        assert_eq!(
            registry.apply("facebook_share_url", &args(&["http://x"])),
            Some(crate::share::facebook_share_url("http://x"))
        );
        assert_eq!(
            registry.apply("linkedin_share_url", &args(&["http://x"])),
            Some(crate::share::linkedin_share_url("http://x"))
        );
    }

    #[test]
    fn append_text_takes_base_and_text() {
        let registry = FilterRegistry::new();
        assert_eq!(
            registry.apply("append_text", &args(&["base", "hi there"])),
            Some("base&text=hi%20there".to_string())
        );
    }

    #[test]
    fn hashtag_argument_forms() {
        let registry = FilterRegistry::new();

        let comma = registry.apply("append_hashtags", &args(&["base", "a,b,c"]));
        let list = registry.apply("append_hashtags", &args(&["base", "a", "b", "c"]));
        assert_eq!(comma, list);
        assert_eq!(comma, Some("base&hashtags=a,b,c".to_string()));

        // No tag arguments at all: the parameter is appended with no value.
        assert_eq!(
            registry.apply("append_hashtags", &args(&["base"])),
            Some("base&hashtags=".to_string())
        );
    }
}
