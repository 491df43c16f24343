use crate::util::mydatetime::MyDateTime;
use serde::Deserialize;

use super::Error;

/// Front matter of a single post.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct Metadata {
    pub title: String,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub created: Option<MyDateTime>,
    #[serde(default)]
    pub highlight: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Metadata {
    pub fn from_yaml<S: AsRef<str>>(yaml: S) -> Result<Self, Error> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml.as_ref());
        Ok(Self::deserialize(deserializer)?)
    }
}
