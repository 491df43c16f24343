use dioxus::prelude::*;

#[derive(Props)]
pub struct TwitterShareProps<'a> {
    href: &'a str,
}

pub fn twitter_share<'a>(cx: Scope<'a, TwitterShareProps<'a>>) -> Element<'a> {
    cx.render(rsx! {
        a {
            class: "share twitter",
            href: "{cx.props.href}",
            rel: "nofollow",
            "Tweet"
        }
    })
}
