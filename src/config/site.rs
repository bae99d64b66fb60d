//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub keywords: Vec<String>,

    // URL
    pub url: String,
    pub og_image: String,

    // Files
    pub posts_file: String,
    pub public_dir: String,
    pub templates_dir: Option<String>,

    // Listing
    pub home_limit: usize,

    // Writing
    /// Convert `markdown_path` files to HTML instead of inserting them verbatim
    pub render_markdown: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "CodeNPixel".to_string(),
            tagline: "Dive into Game Development & Graphics Programming".to_string(),
            description: "Dive into game development and graphics programming with CodeNPixel. \
                          Learn Unreal Engine, OpenGL, and more through tutorials and insights."
                .to_string(),
            keywords: vec![
                "game development".to_string(),
                "graphics programming".to_string(),
                "unreal engine".to_string(),
                "opengl".to_string(),
            ],

            url: "http://localhost:3000".to_string(),
            og_image: "/public/og-image.png".to_string(),

            posts_file: "posts.json".to_string(),
            public_dir: "public".to_string(),
            templates_dir: None,

            home_limit: 6,

            render_markdown: false,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Keywords joined for a `<meta name="keywords">` tag
    pub fn keyword_line(&self) -> String {
        self.keywords.join(", ")
    }

    /// Absolute URL for a site path
    pub fn full_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Resolve a configured path against the site base directory
    pub fn resolve(base_dir: &Path, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }
}
