use dioxus::prelude::*;
use hyper::{Method, Uri};

#[derive(Props, PartialEq)]
pub struct NotFoundProps {
    pub path: Uri,
    pub method: Method,
}

pub fn not_found(cx: Scope<NotFoundProps>) -> Element {
    cx.render(rsx! {
        body {
            main {
                class: "not-found",
                h1 { "404: Not Found" }
                p {
                    code { "{cx.props.method} {cx.props.path}" }
                }
                p {
                    a { href: "/", "Back to the index" }
                }
            }
        }
    })
}
