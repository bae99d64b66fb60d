//! Content loader - resolves a post's body from its HTML or Markdown file

use std::path::{Path, PathBuf};

use super::{MarkdownRenderer, Post};
use crate::config::SiteConfig;

/// A resolved post body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Authored file content, inserted into the page as-is
    Trusted(String),
    /// The post description, escaped like any other text field
    Fallback(String),
}

impl Body {
    pub fn as_str(&self) -> &str {
        match self {
            Body::Trusted(s) | Body::Fallback(s) => s,
        }
    }

    pub fn is_trusted(&self) -> bool {
        matches!(self, Body::Trusted(_))
    }
}

/// Loads post bodies from disk
#[derive(Debug, Clone)]
pub struct ContentLoader {
    base_dir: PathBuf,
    markdown: Option<MarkdownRenderer>,
}

impl ContentLoader {
    /// Create a loader resolving relative content paths against `base_dir`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            markdown: None,
        }
    }

    /// Convert Markdown files to HTML instead of inserting the raw text
    pub fn with_markdown(mut self, enabled: bool) -> Self {
        self.markdown = enabled.then(MarkdownRenderer::new);
        self
    }

    /// Resolve the body of a post
    ///
    /// `html_path` wins over `markdown_path`. A configured file that cannot be
    /// read degrades to the description; the failure is logged.
    pub async fn load_content(&self, post: &Post) -> Body {
        if let Some(path) = post.html_file() {
            return match self.read(path).await {
                Some(html) => Body::Trusted(html),
                None => Body::Fallback(post.description.clone()),
            };
        }

        if let Some(path) = post.markdown_file() {
            return match self.read(path).await {
                Some(text) => match &self.markdown {
                    Some(renderer) => Body::Trusted(renderer.render(&text)),
                    None => Body::Trusted(text),
                },
                None => Body::Fallback(post.description.clone()),
            };
        }

        Body::Fallback(post.description.clone())
    }

    async fn read(&self, path: &str) -> Option<String> {
        let full = SiteConfig::resolve(&self.base_dir, path);
        match tokio::fs::read_to_string(&full).await {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!(path = %full.display(), error = %e, "failed to read post content");
                None
            }
        }
    }
}
