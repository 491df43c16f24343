use std::str::Split;

use chrono::{DateTime, FixedOffset, TimeZone};
use hyper::{
    header::{HeaderValue, CACHE_CONTROL, IF_MODIFIED_SINCE},
    HeaderMap,
};

pub trait HeaderExt {
    fn if_modified_since(&self) -> Option<IfModifiedSince>;
    fn cache_control(&self) -> Option<CacheControl<'_>>;

    fn is_cache_valid<TZ>(&self, current: &DateTime<TZ>) -> bool
    where
        TZ: TimeZone,
    {
        let no_cache = self.cache_control().map_or(false, |cc| cc.is_no_cache());
        let cache_valid = self
            .if_modified_since()
            .map_or(false, |ifs| ifs.is_up_to_date(current));

        cache_valid && !no_cache
    }
}

pub struct IfModifiedSince(DateTime<FixedOffset>);
impl IfModifiedSince {
    fn is_up_to_date<TZ>(&self, current: &DateTime<TZ>) -> bool
    where
        TZ: TimeZone,
    {
        // RFC 2822 has one-second resolution
        current <= &(self.0 + chrono::Duration::seconds(1))
    }
}

pub struct CacheControl<'a>(Split<'a, [char; 19]>);
impl<'a> CacheControl<'a> {
    pub fn is_no_cache(&self) -> bool {
        self.0.clone().any(|token| token == "no-cache")
    }
}

impl HeaderExt for HeaderMap<HeaderValue> {
    fn if_modified_since(&self) -> Option<IfModifiedSince> {
        let value = self.get(IF_MODIFIED_SINCE)?;
        let text = value.to_str().ok()?;
        let date = DateTime::parse_from_rfc2822(text).ok()?;
        Some(IfModifiedSince(date))
    }

    fn cache_control(&self) -> Option<CacheControl<'_>> {
        let value = self.get(CACHE_CONTROL)?;
        let text = value.to_str().ok()?;
        let spl = text.split(SEPARATORS);
        Some(CacheControl(spl))
    }
}

// Header value 'separators' according to RFC 2616
const SEPARATORS: [char; 19] = [
    '(', ')', '<', '>', '@', ',', ';', ':', '\\', '"', '/', '[', ']', '?', '=', '{', '}', ' ',
    '\t',
];
