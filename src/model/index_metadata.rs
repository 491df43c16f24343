use serde::{de::Error as _, Deserialize, Deserializer};
use url::Url;

/// Front matter of the site's `index.md`. Doubles as the site configuration.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct IndexMetadata {
    pub title: String,
    pub short_title: Option<String>,
    pub author: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub highlight: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "deserialize_url")]
    pub url: Url,
    /// Render social share anchors on post pages.
    #[serde(default)]
    pub share: bool,
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl IndexMetadata {
    pub fn from_yaml<S: AsRef<str>>(yaml: S) -> Result<Self, super::Error> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml.as_ref());
        Ok(Self::deserialize(deserializer)?)
    }

    pub fn short_title(&self) -> &str {
        self.short_title.as_deref().unwrap_or(&self.title)
    }

    /// Canonical URL of a post, derived from the site's base URL. This is the
    /// link the share builders wrap.
    pub fn post_url(&self, post_id: &str) -> Url {
        let mut url = self.url.clone();
        url.set_path(&format!("p/{post_id}"));
        url
    }
}

fn default_lang() -> String {
    "en_US".to_string()
}

fn deserialize_url<'de, D>(deserializer: D) -> Result<Url, D::Error>
where
    D: Deserializer<'de>,
{
    let url_str = String::deserialize(deserializer)?;
    let url = Url::parse(&url_str).map_err(|err| D::Error::custom(format!("{err}")))?;
    if url.cannot_be_a_base() {
        Err(D::Error::custom("Index URL must be a base URL"))
    } else {
        Ok(url)
    }
}

impl Default for IndexMetadata {
    fn default() -> Self {
        Self {
            url: Url::parse("https://unspecified.example").unwrap(),
            title: Default::default(),
            short_title: Default::default(),
            author: Default::default(),
            summary: Default::default(),
            highlight: Default::default(),
            tags: Default::default(),
            share: Default::default(),
            lang: default_lang(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::IndexMetadata;

    #[test]
    fn parses_site_front_matter() {
        let meta = IndexMetadata::from_yaml(
            "title: Paradigm Essays\n\
             short_title: Paradigms\n\
             url: https://example.com\n\
             share: true\n",
        )
        .expect("site front matter should parse");

        assert_eq!(meta.title, "Paradigm Essays");
        assert_eq!(meta.short_title(), "Paradigms");
        assert!(meta.share);
        assert_eq!(meta.lang, "en_US");
    }

    #[test]
    fn post_url_joins_post_path() {
        let meta = IndexMetadata::from_yaml(
            "title: Blog\n\
             url: https://example.com\n",
        )
        .expect("site front matter should parse");

        assert_eq!(
            meta.post_url("on-closures").as_str(),
            "https://example.com/p/on-closures"
        );
    }

    #[test]
    fn rejects_non_base_url() {
        let parsed = IndexMetadata::from_yaml(
            "title: Blog\n\
             url: mailto:someone@example.com\n",
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn short_title_falls_back_to_title() {
        let meta = IndexMetadata::from_yaml(
            "title: Paradigm Essays\n\
             url: https://example.com\n",
        )
        .expect("site front matter should parse");
        assert_eq!(meta.short_title(), "Paradigm Essays");
    }
}
