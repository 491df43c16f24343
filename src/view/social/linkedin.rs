use dioxus::prelude::*;

// The shareArticle endpoint also accepts mini/title/summary/source
// parameters; the plain url form is all we emit.
#[derive(Props)]
pub struct LinkedinShareProps<'a> {
    href: &'a str,
}

pub fn linkedin_share<'a>(cx: Scope<'a, LinkedinShareProps<'a>>) -> Element<'a> {
    cx.render(rsx! {
        a {
            class: "share linkedin",
            href: "{cx.props.href}",
            rel: "nofollow",
            "Post"
        }
    })
}
