use dioxus::prelude::*;
use url::Url;

use super::header;
use super::social::{self, ShareHrefs};
use crate::util::db::PostContent;

#[derive(Props, PartialEq)]
pub struct PostProps {
    pub post: PostContent,
    pub site_title: String,
    pub site_title_short: String,
    pub canonical_url: Url,
    #[props(!optional)]
    pub share: Option<ShareHrefs>,
}

pub fn post(cx: Scope<PostProps>) -> Element {
    let published = cx
        .props
        .post
        .metadata
        .created
        .as_ref()
        .map(|created| **created)
        .unwrap_or_else(|| cx.props.post.timestamp.fixed_offset());

    let timestamp = published.format("%A, %e %B %Y");
    let datetime = published.format("%F");
    let time_title = published.format("%e %B %Y");

    let address = if let Some(author) = &cx.props.post.metadata.author {
        cx.render(rsx! {
            address {
                class: "author",
                "Published by "
                a {
                    rel: "author",
                    "{author}"
                }
                " on "
                time {
                    datetime: "{datetime}",
                    title: "{time_title}",
                    "{timestamp}"
                }
            }
        })
    } else {
        cx.render(rsx! {
            address {
                class: "author",
                "Published on "
                time {
                    datetime: "{datetime}",
                    title: "{time_title}",
                    "{timestamp}"
                }
            }
        })
    };

    let share = cx.props.share.as_ref().map(|hrefs| {
        cx.render(rsx! {
            footer {
                class: "share-links",
                social::twitter_share { href: hrefs.twitter.as_str() }
                social::facebook_share { href: hrefs.facebook.as_str() }
                social::linkedin_share { href: hrefs.linkedin.as_str() }
                social::feed_link { base_url: &cx.props.canonical_url }
            }
        })
    });

    cx.render(rsx! {
        super::preamble {
            title: &cx.props.post.metadata.title,
            url: &cx.props.canonical_url,
            highlight: cx.props.post.metadata.highlight,
            author: cx.props.post.metadata.author.as_deref(),
            summary: cx.props.post.metadata.summary.as_deref(),
            tags: &cx.props.post.metadata.tags,
        }
        body {
            main {
                class: "post",
                header::site_header {
                    site_title: &cx.props.site_title,
                    site_title_short: &cx.props.site_title_short,
                }
                article {
                    header {
                        h1 { "{cx.props.post.metadata.title}" },
                        div {
                            class: "byline",
                            address,
                        }
                    }
                    div {
                        class: "article-body",
                        dangerous_inner_html: cx.props.post.body.as_str()
                    }
                    share
                }
            }
        }
    })
}
