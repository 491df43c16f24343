use dioxus::prelude::*;
use url::Url;

/// Document head shared by every page. Carries the OpenGraph/Twitter card
/// metadata that the share targets read back when a shared link is expanded.
#[derive(Props)]
pub struct PreambleProps<'a> {
    title: &'a str,
    url: &'a Url,
    highlight: bool,
    #[props(!optional)]
    author: Option<&'a str>,
    #[props(!optional)]
    summary: Option<&'a str>,
    tags: &'a Vec<String>,
}

pub fn preamble<'a>(cx: Scope<'a, PreambleProps<'a>>) -> Element<'a> {
    let author = cx.props.author.and_then(|author| {
        cx.render(rsx! {
            meta { name: "author", content: "{author}" }
        })
    });

    let description = cx.props.summary.and_then(|summary| {
        cx.render(rsx! {
            meta { name: "description", content: "{summary}" }
            meta { "property": "og:description", content: "{summary}" }
        })
    });

    let keywords = (!cx.props.tags.is_empty()).then(|| {
        let keywords = cx.props.tags.join(", ");
        cx.render(rsx! {
            meta { name: "keywords", content: "{keywords}" }
        })
    });

    let highlight = cx.props.highlight.then(|| {
        cx.render(rsx! {
            link {
                rel: "stylesheet",
                href: "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.8.0/styles/github.min.css"
            }
            script {
                src: "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.8.0/highlight.min.js"
            }
            script {
                "hljs.highlightAll();"
            }
        })
    });

    cx.render(rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width,initial-scale=1" }
            title { "{cx.props.title}" }
            link { rel: "canonical", href: "{cx.props.url}" }
            link { rel: "alternate", href: "/rss", title: "RSS" }
            meta { "property": "og:title", content: "{cx.props.title}" }
            meta { "property": "og:url", content: "{cx.props.url}" }
            meta { name: "twitter:card", content: "summary" }
            link { rel: "icon", href: "/public/favicon.png" }
            author
            description
            keywords
            highlight
            link {
                rel: "stylesheet",
                href: "/public/styles.css"
            }
        }
    })
}
