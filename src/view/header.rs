use dioxus::prelude::*;

#[derive(Props)]
pub struct HeaderProps<'a> {
    pub site_title: &'a str,
    pub site_title_short: &'a str,
}

pub fn site_header<'a>(cx: Scope<'a, HeaderProps<'a>>) -> Element<'a> {
    cx.render(rsx! {
        header {
            a {
                href: "/",
                h1 {
                    class: "site-title",
                    "{cx.props.site_title}"
                }
                h1 {
                    class: "short-title",
                    "{cx.props.site_title_short}"
                }
            }

            nav {
                a {
                    href: "/archive",
                    "Archive"
                }
                a {
                    href: "/rss",
                    "RSS"
                }
            }
        }
    })
}
