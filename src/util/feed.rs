//! RSS feed construction from the cached post metadata.

use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};

use super::db::PostMeta;
use crate::model::IndexMetadata;

pub fn channel(site: &IndexMetadata, posts: &[PostMeta]) -> Channel {
    let items: Vec<Item> = posts.iter().map(|post| item(site, post)).collect();

    ChannelBuilder::default()
        .title(site.title.clone())
        .link(site.url.to_string())
        .description(site.summary.clone().unwrap_or_default())
        .language(Some(site.lang.replace('_', "-").to_lowercase()))
        .items(items)
        .build()
}

fn item(site: &IndexMetadata, post: &PostMeta) -> Item {
    let link = site.post_url(&post.id).to_string();

    ItemBuilder::default()
        .title(Some(post.title.clone()))
        .link(Some(link.clone()))
        .guid(Some(
            GuidBuilder::default().value(link).permalink(true).build(),
        ))
        .description(post.summary.clone())
        .pub_date(post.created.as_ref().map(|created| created.to_string_rss()))
        .build()
}

#[cfg(test)]
mod test {
    use super::channel;
    use crate::model::IndexMetadata;
    use crate::util::db::PostMeta;
    use crate::util::mydatetime::MyDateTime;

    fn site() -> IndexMetadata {
        IndexMetadata::from_yaml(
            "title: Paradigm Essays\n\
             summary: Essays on programming-language paradigms.\n\
             url: https://example.com\n",
        )
        .expect("site front matter should parse")
    }

    #[test]
    fn channel_carries_site_fields() {
        let feed = channel(&site(), &[]);
        assert_eq!(feed.title(), "Paradigm Essays");
        assert_eq!(feed.link(), "https://example.com/");
        assert_eq!(feed.language(), Some("en-us"));
        assert!(feed.items().is_empty());
    }

    #[test]
    fn items_link_to_canonical_post_urls() {
        let posts = vec![PostMeta {
            id: "on-closures".to_string(),
            title: "On Closures".to_string(),
            summary: Some("Why lexical scope matters.".to_string()),
            created: None,
        }];

        let feed = channel(&site(), &posts);
        let item = &feed.items()[0];
        assert_eq!(item.title(), Some("On Closures"));
        assert_eq!(item.link(), Some("https://example.com/p/on-closures"));
        assert_eq!(
            item.guid().map(|guid| guid.value()),
            Some("https://example.com/p/on-closures")
        );
    }

    #[test]
    fn items_carry_rfc2822_pub_dates() {
        let created: MyDateTime =
            serde_yaml::from_str("\"28 Aug 2023 18:00 +0500\"").expect("sample datetime");

        let posts = vec![PostMeta {
            id: "on-closures".to_string(),
            title: "On Closures".to_string(),
            summary: None,
            created: Some(created.clone()),
        }];

        let feed = channel(&site(), &posts);
        let item = &feed.items()[0];
        assert_eq!(item.pub_date(), Some("Mon, 28 Aug 2023 18:00:00 +0500"));
        assert_eq!(item.pub_date(), Some(created.to_string_rss().as_str()));
    }

    #[test]
    fn undated_items_omit_pub_date() {
        let posts = vec![PostMeta {
            id: "on-closures".to_string(),
            title: "On Closures".to_string(),
            summary: None,
            created: None,
        }];

        let feed = channel(&site(), &posts);
        assert_eq!(feed.items()[0].pub_date(), None);
    }
}
