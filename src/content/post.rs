//! Post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by `posts.json`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A blog post as stored in `posts.json`
///
/// The field set and naming mirror the JSON file so that `/api/posts/json`
/// hands back exactly what was loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// URL identifier, unique across the store
    pub slug: String,

    /// Post title
    #[serde(default)]
    pub title: String,

    /// Short summary, also the body fallback
    #[serde(default)]
    pub description: String,

    /// Author display name
    #[serde(default)]
    pub author: String,

    /// Publication date (`YYYY-MM-DD`)
    #[serde(default)]
    pub date: String,

    /// Post tags, first one is the primary tag
    #[serde(default)]
    pub tags: Vec<String>,

    /// Post category
    #[serde(default)]
    pub category: String,

    /// Pre-rendered HTML body file
    #[serde(default)]
    pub html_path: String,

    /// Markdown body file
    #[serde(default)]
    pub markdown_path: String,
}

impl Post {
    /// Create a post with the required fields, everything else empty
    pub fn new(slug: &str, title: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            description: String::new(),
            author: String::new(),
            date: String::new(),
            tags: Vec::new(),
            category: String::new(),
            html_path: String::new(),
            markdown_path: String::new(),
        }
    }

    /// Parsed publication date
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Primary tag, the one that picks the banner icon
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// Configured HTML body path, if any
    pub fn html_file(&self) -> Option<&str> {
        non_empty(&self.html_path)
    }

    /// Configured Markdown body path, if any
    pub fn markdown_file(&self) -> Option<&str> {
        non_empty(&self.markdown_path)
    }

    /// Tags with quote characters removed, in post order
    pub fn clean_tags(&self) -> impl Iterator<Item = String> + '_ {
        self.tags.iter().map(|t| strip_quotes(t))
    }
}

/// Remove every `"` from a tag
///
/// Some tags in the post file carry literal quotes (`"\"opengl\""`).
pub fn strip_quotes(tag: &str) -> String {
    tag.replace('"', "")
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
