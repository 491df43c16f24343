use chrono::{DateTime, TimeZone};
use dioxus::prelude::VirtualDom;
use hyper::{Body, Request};

pub mod db;
pub mod feed;
pub mod has_any_symlinks;
pub mod header_ext;
pub mod mydatetime;

use header_ext::HeaderExt;

pub fn render_html(mut vdom: VirtualDom, lang: &str) -> String {
    let _ = vdom.rebuild();
    let mut renderer = dioxus_ssr::Renderer::new();
    renderer.sanitize = true;
    let lang = html_escape::encode_unquoted_attribute(lang);
    format!(
        "<!DOCTYPE html><html lang=\"{lang}\">{}</html>",
        renderer.render(&vdom)
    )
}

pub fn cache_valid<TZ>(req: &Request<Body>, timestamp: &DateTime<TZ>) -> bool
where
    TZ: TimeZone,
{
    req.headers().is_cache_valid(timestamp)
}
