use dioxus::prelude::*;

use super::header;
use crate::model::IndexMetadata;
use crate::util::db::PostMeta;

#[derive(Props, PartialEq)]
pub struct ArchiveProps {
    pub posts: Vec<PostMeta>,
    pub metadata: IndexMetadata,
}

pub fn archive(cx: Scope<ArchiveProps>) -> Element {
    cx.render(rsx! {
        super::preamble {
            title: "Archive",
            url: &cx.props.metadata.url,
            highlight: false,
            author: cx.props.metadata.author.as_deref(),
            summary: None,
            tags: &cx.props.metadata.tags,
        }

        body {
            main {
                class: "archive",
                header::site_header {
                    site_title: &cx.props.metadata.title,
                    site_title_short: cx.props.metadata.short_title(),
                }

                section {
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
                }
            }
        }
    })
}
