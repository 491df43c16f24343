//! The blog "database" holds the logic for post caching. Posts and the site
//! index are markdown files reparsed at most once per TTL period.

use std::{
    cmp::max,
    collections::HashMap,
    io::{self, ErrorKind},
    path::PathBuf,
    time::{Duration, SystemTime},
};

use chrono::{DateTime, Local};
use comrak::{nodes::NodeValue::FrontMatter, Arena, ComrakOptions};
use log::{debug, error, info, warn};
use tokio::{fs, io::AsyncReadExt};

use crate::model::{IndexMetadata, Metadata};
use crate::util::mydatetime::MyDateTime;

pub struct PostDb {
    posts: HashMap<String, PostEntry>,
    index: IndexEntry,
    posts_dir: PathBuf,
    ttl: Duration,
    index_updated: SystemTime,
}

struct PostEntry {
    updated: SystemTime,
    last_modified: SystemTime,
    body: String,
    metadata: Metadata,
}

pub struct IndexEntry {
    updated: SystemTime,
    last_modified: SystemTime,
    body: String,
    metadata: IndexMetadata,
}

pub struct Post<'a> {
    id: &'a str,
    entry: &'a PostEntry,
}

#[derive(Debug, PartialEq, Clone)]
pub struct PostMeta {
    pub id: String,
    pub title: String,
    pub summary: Option<String>,
    pub created: Option<MyDateTime>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct PostContent {
    pub id: String,
    pub metadata: Metadata,
    pub body: String,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct IndexContent {
    pub metadata: IndexMetadata,
    pub body: String,
    pub timestamp: DateTime<Local>,
}

impl PostDb {
    pub fn new(posts_dir: PathBuf, ttl_seconds: u32) -> Result<Self, io::Error> {
        Ok(Self {
            posts: HashMap::default(),
            index: IndexEntry::empty(),
            posts_dir: dunce::canonicalize(posts_dir)?,
            ttl: Duration::from_secs(ttl_seconds as u64),
            index_updated: SystemTime::UNIX_EPOCH,
        })
    }

    pub fn get<'a>(&'a self, id: &'a str) -> Option<Post<'a>> {
        self.posts.get(id).map(|entry| Post { id, entry })
    }

    pub fn all_posts<'a>(&'a self) -> impl Iterator<Item = Post<'a>> {
        self.posts.iter().map(|(id, entry)| Post { id, entry })
    }

    /// The last time any file in the db was modified
    pub fn index_updated(&self) -> DateTime<Local> {
        self.index_updated.into()
    }

    pub async fn refresh_index(&mut self, scan_posts: bool) -> Result<&IndexEntry, io::Error> {
        if scan_posts && self.index_updated + self.ttl <= SystemTime::now() {
            let mut posts_dir_iter = fs::read_dir(&self.posts_dir).await?;
            while let Some(ent) = posts_dir_iter.next_entry().await? {
                let path = PathBuf::from(ent.file_name());
                if !path.extension().map_or(false, |ext| ext == "md") {
                    continue;
                }

                if let Some(id) = path.with_extension("").file_name().and_then(|s| s.to_str()) {
                    if !self.posts.contains_key(id) {
                        debug!("Found new post {id}");
                        self.refresh(id).await?;
                    }
                } else {
                    debug!("Skipping {path:?}, not a valid post id");
                }
            }
            self.index_updated = SystemTime::now();
        }

        let index_file = dunce::canonicalize(self.posts_dir.join("../index.md"))?;
        let ttl = self.ttl;
        self.index.refresh(&index_file, ttl).await?;
        self.index_updated = max(self.index.last_modified, self.index_updated);
        Ok(&self.index)
    }

    pub async fn refresh<'a>(&'a mut self, id: &'a str) -> Result<Post<'a>, io::Error> {
        let post_file = match dunce::canonicalize(self.posts_dir.join(id).with_extension("md")) {
            Ok(ok) => {
                if ok.starts_with(&self.posts_dir) {
                    ok
                } else {
                    warn!("Suspicious refresh request for id={id:?} did not start with canonical posts_dir");
                    return Err(io::Error::new(
                        ErrorKind::InvalidData,
                        format!("Invalid post id {id:?}"),
                    ));
                }
            }
            Err(err) => {
                info!("Refresh request for id={id:?} caused error: {err}");
                return Err(io::Error::new(
                    ErrorKind::InvalidData,
                    format!("Invalid post id {id:?}"),
                ));
            }
        };

        let updated = self.posts.get(id).map(|ent| ent.updated);

        if updated.map_or(false, |updated| updated + self.ttl >= SystemTime::now()) {
            // not due for another check yet
            return Ok(self.get(id).unwrap());
        }

        let file = fs::File::open(&post_file).await.map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                debug!("No such post with id {id}, trying to delete it from cache");
                self.posts.remove(id);
                err
            } else {
                error!("{err} (opening {post_file:?})");
                err
            }
        })?;

        let file_modified_time = file.metadata().await?.modified()?;

        if updated.map_or(false, |updated| updated >= file_modified_time) {
            // file has not been changed since last check
            self.posts.get_mut(id).unwrap().updated = SystemTime::now();
            return Ok(self.get(id).unwrap());
        }

        let entry = PostEntry::parse(file, file_modified_time).await?;
        self.posts.insert(id.to_string(), entry);
        info!("Refreshed post {id}");

        self.index_updated = max(file_modified_time, self.index_updated);

        Ok(self.get(id).unwrap())
    }
}

impl PostEntry {
    async fn parse(mut file: fs::File, last_modified: SystemTime) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer).await?;

        let (front_matter, body) = render_markdown(&buffer)?;

        let metadata = front_matter
            .map(Metadata::from_yaml)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            updated: SystemTime::now(),
            last_modified,
            body,
            metadata,
        })
    }

    fn published(&self) -> SystemTime {
        self.metadata
            .created
            .as_ref()
            .map_or(self.last_modified, |created| created.system_time())
    }
}

impl IndexEntry {
    fn empty() -> Self {
        Self {
            updated: SystemTime::UNIX_EPOCH,
            last_modified: SystemTime::UNIX_EPOCH,
            body: String::default(),
            metadata: IndexMetadata::default(),
        }
    }

    async fn refresh(&mut self, index_file: &PathBuf, ttl: Duration) -> Result<(), io::Error> {
        if self.updated + ttl >= SystemTime::now() {
            return Ok(());
        }

        let mut file = fs::File::open(index_file).await?;
        let file_modified_time = file.metadata().await?.modified()?;

        if self.updated >= file_modified_time && self.updated > SystemTime::UNIX_EPOCH {
            self.updated = SystemTime::now();
            return Ok(());
        }

        let mut buffer = String::new();
        file.read_to_string(&mut buffer).await?;

        let (front_matter, body) = render_markdown(&buffer)?;

        self.metadata = front_matter
            .map(IndexMetadata::from_yaml)
            .transpose()?
            .unwrap_or_default();
        self.body = body;
        self.last_modified = file_modified_time;
        self.updated = SystemTime::now();
        info!("Refreshed index");

        Ok(())
    }

    pub fn metadata(&self) -> &IndexMetadata {
        &self.metadata
    }

    pub fn to_index_content(&self) -> IndexContent {
        IndexContent {
            metadata: self.metadata.clone(),
            body: self.body.clone(),
            timestamp: self.last_modified.into(),
        }
    }
}

impl<'a> Post<'a> {
    pub fn id(&self) -> &'a str {
        self.id
    }

    /// Creation date from front matter, falling back to the file mtime.
    pub fn published(&self) -> SystemTime {
        self.entry.published()
    }

    pub fn to_post_meta(&self) -> PostMeta {
        PostMeta {
            id: self.id.to_string(),
            title: self.entry.metadata.title.clone(),
            summary: self.entry.metadata.summary.clone(),
            created: self.entry.metadata.created.clone(),
        }
    }

    pub fn to_post_content(&self) -> PostContent {
        PostContent {
            id: self.id.to_string(),
            metadata: self.entry.metadata.clone(),
            body: self.entry.body.clone(),
            timestamp: self.entry.last_modified.into(),
        }
    }
}

/// Render a markdown document to HTML, splitting off the YAML front matter.
fn render_markdown(buffer: &str) -> Result<(Option<String>, String), io::Error> {
    let arena = Arena::new();

    let mut options = ComrakOptions::default();
    options.extension.front_matter_delimiter = Some("---".into());
    options.extension.strikethrough = true;
    options.extension.header_ids = Some("p-".to_string());
    options.extension.table = true;
    options.extension.tasklist = true;
    options.parse.smart = true;
    options.parse.relaxed_tasklist_matching = true;

    let root = comrak::parse_document(&arena, buffer, &options);

    let mut html = vec![];
    comrak::format_html(root, &options, &mut html)?;

    let front_matter = root
        .children()
        .filter_map(|child| {
            let data = child.data.borrow();
            match &data.value {
                FrontMatter(fm) => Some(fm.clone()),
                _ => None,
            }
        })
        .nth(0)
        .map(|fm| {
            let trimmed = fm.trim();
            trimmed
                .strip_prefix("---")
                .and_then(|inner| inner.strip_suffix("---"))
                .unwrap_or(trimmed)
                .to_string()
        });

    Ok((front_matter, String::from_utf8_lossy(&html).to_string()))
}
