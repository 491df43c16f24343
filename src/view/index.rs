use dioxus::prelude::*;

use super::header;
use crate::util::db::{IndexContent, PostMeta};

#[derive(Props, PartialEq)]
pub struct IndexProps {
    pub posts: Vec<PostMeta>,
    pub content: IndexContent,
    pub page: usize,
    pub is_end: bool,
}

pub fn index(cx: Scope<IndexProps>) -> Element {
    let newer = (cx.props.page > 0).then(|| {
        let page = cx.props.page - 1;
        cx.render(rsx! {
            a {
                href: "/?p={page}",
                "Newer"
            }
        })
    });

    let older = (!cx.props.is_end).then(|| {
        let page = cx.props.page + 1;
        cx.render(rsx! {
            a {
                href: "/?p={page}",
                "Older"
            }
        })
    });

    cx.render(rsx! {
        super::preamble {
            title: &cx.props.content.metadata.title,
            url: &cx.props.content.metadata.url,
            highlight: cx.props.content.metadata.highlight,
            author: cx.props.content.metadata.author.as_deref(),
            summary: cx.props.content.metadata.summary.as_deref(),
            tags: &cx.props.content.metadata.tags,
        }
        body {
            main {
                class: "index",
                header::site_header {
                    site_title: &cx.props.content.metadata.title,
                    site_title_short: cx.props.content.metadata.short_title(),
                }
                nav {
                    a {
                        href: "/archive",
                        "Archive"
                    },
                    a {
                        href: "/random",
                        "Random Post"
                    }
                }
                div {
                    class: "index-content",
                    dangerous_inner_html: "{cx.props.content.body}"
                }
                section {
                    h2 { "Recent Posts" }
                    ol {
                        for post in cx.props.posts.iter() {
                            li {
                                a {
                                    href: "/p/{post.id}",
                                    h3 { "{post.title}" }
                                }
                                post.summary.as_deref().unwrap_or("")
                            }
                        }
                    }
                    nav {
                        class: "pagination",
                        newer,
                        older
                    }
                }
            }
        }
    })
}
