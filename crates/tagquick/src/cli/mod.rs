pub mod render;
pub mod tags;
pub mod toggle;
pub mod zoom;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tagquick_core::{ClientConfig, GalleryPage, TagApi};

#[derive(Parser)]
#[command(
    name = "tagquick",
    about = "Tag gallery images from the command line",
    version
)]
pub struct Cli {
    /// Gallery server URL (overrides config file and TAGQUICK_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,
    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u32>,
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List known tags and tagged images
    Tags,
    /// Flip a tag on the given images
    Toggle {
        /// Tag name
        tag: String,
        /// Image ids (file names)
        #[arg(required = true)]
        images: Vec<String>,
    },
    /// Flip the Nth known tag on the given images, like Ctrl+N in the gallery
    Shortcut {
        /// Shortcut number
        #[arg(value_parser = clap::value_parser!(u8).range(1..=9))]
        number: u8,
        /// Image ids (file names)
        #[arg(required = true)]
        images: Vec<String>,
    },
    /// Print tag list and caption markup for the given images
    Render {
        /// Displayed image ids, in page order
        images: Vec<String>,
    },
    /// Print the zoom source for a single image
    Zoom {
        /// Selected image ids
        images: Vec<String>,
    },
}

impl Cli {
    /// Resolve the client config: file, then environment, then flags
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = if let Some(path) = &self.config {
            let mut config = ClientConfig::from_file(path)?;
            config.apply_env(|key| std::env::var(key).ok())?;
            config
        } else {
            ClientConfig::load()?
        };

        if let Some(url) = &self.url {
            config.base_url.clone_from(url);
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_seconds = timeout;
        }

        config.validate().context("invalid client configuration")?;
        Ok(config)
    }
}

/// Turn notices left by a page operation into a command failure
pub(crate) fn fail_on_notices<A: TagApi>(page: &mut GalleryPage<A>) -> Result<()> {
    let notices = page.notices().drain();
    if let Some(first) = notices.first() {
        anyhow::bail!("{first}");
    }
    Ok(())
}
