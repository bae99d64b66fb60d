//! codenpixel: an htmx-driven blog server for game development and
//! graphics programming posts
//!
//! Post metadata is read once from a JSON file and served as full pages or
//! htmx fragments rendered from embedded Tera templates.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod newsletter;
pub mod render;
pub mod server;
pub mod templates;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A blog site rooted at a directory
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory; post content paths are relative to it
    pub base_dir: PathBuf,
    /// Post metadata file
    pub posts_path: PathBuf,
    /// Static assets served under `/public`
    pub public_dir: PathBuf,
    /// Template overrides, if configured
    pub templates_dir: Option<PathBuf>,
}

impl Site {
    /// Open a site, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)
                .with_context(|| format!("failed to load {}", config_path.display()))?
        } else {
            config::SiteConfig::default()
        };

        let posts_path = config::SiteConfig::resolve(&base_dir, &config.posts_file);
        let public_dir = config::SiteConfig::resolve(&base_dir, &config.public_dir);
        let templates_dir = config
            .templates_dir
            .as_deref()
            .map(|dir| config::SiteConfig::resolve(&base_dir, dir));

        Ok(Self {
            config,
            base_dir,
            posts_path,
            public_dir,
            templates_dir,
        })
    }

    /// Load and validate the post store
    pub fn load_posts(&self) -> Result<content::PostStore> {
        Ok(content::PostStore::load(&self.posts_path)?)
    }

    /// Start the HTTP server
    pub async fn serve(&self, ip: &str, port: u16) -> Result<()> {
        server::start(self, ip, port).await
    }

    /// List site content
    pub fn list(&self, content_type: &str) -> Result<()> {
        commands::list::run(self, content_type)
    }
}
