use dioxus::prelude::*;
use url::Url;

/// Link to the site feed, resolved against whatever page URL the caller is
/// rendering. Falls back to a root-relative href if resolution fails.
#[derive(Props)]
pub struct FeedLinkProps<'a> {
    base_url: &'a Url,
}

pub fn feed_link<'a>(cx: Scope<'a, FeedLinkProps<'a>>) -> Element<'a> {
    let href = cx
        .props
        .base_url
        .join("/rss")
        .map_or_else(|_| "/rss".to_string(), String::from);

    cx.render(rsx! {
        a {
            class: "share rss",
            href: "{href}",
            "RSS"
        }
    })
}
