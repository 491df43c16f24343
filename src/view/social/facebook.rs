use dioxus::prelude::*;

#[derive(Props)]
pub struct FacebookShareProps<'a> {
    href: &'a str,
}

pub fn facebook_share<'a>(cx: Scope<'a, FacebookShareProps<'a>>) -> Element<'a> {
    cx.render(rsx! {
        a {
            class: "share facebook",
            href: "{cx.props.href}",
            rel: "nofollow",
            "Share"
        }
    })
}
