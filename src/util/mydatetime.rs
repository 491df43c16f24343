use chrono::{DateTime, FixedOffset, Local};
use std::{
    fmt::{Debug, Display},
    ops::Deref,
    time::SystemTime,
};

/// Timestamp type used in post front matter. Accepts a handful of
/// human-friendly formats when deserializing.
#[derive(Debug, PartialEq, Clone)]
pub struct MyDateTime(DateTime<FixedOffset>);

const DISPLAY_FORMAT: &str = "%e %b %Y %H:%M:%S %z";
const NO_SECONDS_24_FORMAT: &str = "%e %b %Y %H:%M %z";

const ALLOWED_FORMATS: [&str; 8] = [
    "%e %b %Y %I:%M:%S %p %z",
    DISPLAY_FORMAT,
    "%e %B %Y %I:%M:%S %p %z",
    "%e %B %Y %H:%M:%S %z",
    "%e %b %Y %I:%M %p %z",
    NO_SECONDS_24_FORMAT,
    "%e %B %Y %I:%M %p %z",
    "%e %B %Y %H:%M %z",
];

impl MyDateTime {
    pub fn now() -> Self {
        Local::now().into()
    }

    pub fn to_string_rss(&self) -> String {
        self.0.to_rfc2822()
    }

    pub fn system_time(&self) -> SystemTime {
        SystemTime::from(self.0)
    }
}

impl Deref for MyDateTime {
    type Target = DateTime<FixedOffset>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialOrd for MyDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<'de> serde::Deserialize<'de> for MyDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let s = String::deserialize(deserializer)?;

        for format in ALLOWED_FORMATS.iter() {
            let parsed = DateTime::<FixedOffset>::parse_from_str(&s, format);
            if let Ok(parsed) = parsed {
                return Ok(MyDateTime(parsed));
            }
        }

        Err(D::Error::custom("Invalid datetime format".to_string()))
    }
}

impl Display for MyDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let formatted = self.0.format(DISPLAY_FORMAT);
        std::fmt::Display::fmt(&formatted, f)
    }
}

impl From<DateTime<Local>> for MyDateTime {
    fn from(value: DateTime<Local>) -> Self {
        Self(value.fixed_offset())
    }
}

#[cfg(test)]
mod test {
    use super::ALLOWED_FORMATS;
    use chrono::{DateTime, FixedOffset};

    const SAMPLES: [&str; 8] = [
        "28 Aug 2023 06:00:00 PM +0500",
        "28 Aug 2023 18:00:00 +0500",
        "28 August 2023 06:00:00 PM +0500",
        "28 August 2023 18:00:00 +0500",
        "28 Aug 2023 06:00 PM +0500",
        "28 Aug 2023 18:00 +0500",
        "28 August 2023 06:00 PM +0500",
        "28 August 2023 18:00 +0500",
    ];

    #[test]
    fn every_allowed_format_parses_its_sample() {
        for (format, input) in ALLOWED_FORMATS.iter().zip(SAMPLES) {
            let parsed = DateTime::<FixedOffset>::parse_from_str(input, format);
            if let Err(err) = &parsed {
                eprintln!("{input:?} with {format:?}: {err}");
            }
            parsed.expect("parse_from_str");
        }
    }

    #[test]
    fn all_samples_deserialize_to_same_instant() {
        let expected: Vec<super::MyDateTime> = SAMPLES
            .iter()
            .map(|s| {
                serde_yaml::from_str(&format!("\"{s}\"")).expect("sample should deserialize")
            })
            .collect();

        for window in expected.windows(2) {
            assert_eq!(window[0], window[1]);
        }
    }

    #[test]
    fn rss_output_is_rfc2822() {
        let parsed: super::MyDateTime =
            serde_yaml::from_str("\"28 Aug 2023 18:00 +0500\"").expect("sample datetime");
        assert_eq!(parsed.to_string_rss(), "Mon, 28 Aug 2023 18:00:00 +0500");
    }
}
