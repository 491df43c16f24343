use std::error::Error;

use clap::Parser;
use log::{debug, warn, LevelFilter};
use tokio::{fs, io::AsyncWriteExt};

const DEFAULT_STYLES: &str = include_str!("res/styles.css");
const DEFAULT_INDEX: &str = include_str!("res/index.md");

#[derive(Debug, Parser)]
pub struct Init {
    /// Adjusts the verbosity of the logger.
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

impl Init {
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        debug!("Creating posts directory");
        fs::create_dir_all("posts").await?;

        debug!("Creating public directory");
        fs::create_dir_all("public").await?;

        if fs::try_exists("public/styles.css").await? {
            warn!("Not creating public/styles.css because it already exists");
        } else {
            debug!("Creating default public/styles.css");
            let mut file = fs::File::create("public/styles.css").await?;
            file.write_all(DEFAULT_STYLES.as_bytes()).await?;
        }

        if fs::try_exists("index.md").await? {
            warn!("Not creating index.md because it already exists");
        } else {
            debug!("Creating default index.md");
            let mut file = fs::File::create("index.md").await?;
            file.write_all(DEFAULT_INDEX.as_bytes()).await?;
        }

        Ok(())
    }
}
