//! Post store - the read-only set of posts loaded from `posts.json`

use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::Post;

/// Errors raised while loading the post file
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("post #{index} has an empty slug")]
    MissingSlug { index: usize },

    #[error("duplicate post slug: {0}")]
    DuplicateSlug(String),
}

/// Posts in file order, indexed by slug
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    by_slug: HashMap<String, usize>,
}

impl PostStore {
    /// Load and validate a JSON array of posts
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let posts: Vec<Post> = serde_json::from_str(&data).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_posts(posts)?;
        tracing::info!("Loaded {} posts from {:?}", store.len(), path);
        Ok(store)
    }

    /// Build a store from already-parsed posts
    pub fn from_posts(posts: Vec<Post>) -> Result<Self, StoreError> {
        let mut by_slug = HashMap::with_capacity(posts.len());

        for (index, post) in posts.iter().enumerate() {
            if post.slug.is_empty() {
                return Err(StoreError::MissingSlug { index });
            }
            if by_slug.insert(post.slug.clone(), index).is_some() {
                return Err(StoreError::DuplicateSlug(post.slug.clone()));
            }
            if post.tags.is_empty() {
                tracing::warn!(slug = %post.slug, "post has no tags, using default icon");
            }
        }

        Ok(Self { posts, by_slug })
    }

    /// All posts in file order
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a post by slug
    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.by_slug.get(slug).map(|&i| &self.posts[i])
    }

    /// The first `limit` posts, or all of them if there are fewer
    pub fn recent(&self, limit: usize) -> &[Post] {
        &self.posts[..limit.min(self.posts.len())]
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Every quote-stripped tag across the store, in first-seen order
    pub fn tags(&self) -> IndexSet<String> {
        self.posts.iter().flat_map(|p| p.clean_tags()).collect()
    }

    /// Tag usage counts, in first-seen order
    pub fn tag_counts(&self) -> IndexMap<String, usize> {
        let mut counts = IndexMap::new();
        for tag in self.posts.iter().flat_map(|p| p.clean_tags()) {
            *counts.entry(tag).or_insert(0) += 1;
        }
        counts
    }

    /// Category usage counts, in first-seen order
    pub fn category_counts(&self) -> IndexMap<String, usize> {
        let mut counts = IndexMap::new();
        for post in &self.posts {
            if !post.category.is_empty() {
                *counts.entry(post.category.clone()).or_insert(0) += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn post(slug: &str, tags: &[&str]) -> Post {
        let mut post = Post::new(slug, slug);
        post.tags = tags.iter().map(|t| t.to_string()).collect();
        post
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"slug":"game-loop","title":"Game Loops","tags":["game-loop"],"category":"Engines"}},
                {{"slug":"nanite","title":"Nanite","tags":["\"nanite\"","unreal-engine"]}}
            ]"#
        )
        .unwrap();

        let store = PostStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("nanite").unwrap().title, "Nanite");
        assert!(store.get("unknown").is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = PostStore::load("/nonexistent/posts.json").unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not a list").unwrap();
        let err = PostStore::load(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = PostStore::from_posts(vec![post("a", &["x"]), post("a", &["y"])]).unwrap_err();
        assert_eq!(err.to_string(), "duplicate post slug: a");
    }

    #[test]
    fn test_empty_slug_rejected() {
        let err = PostStore::from_posts(vec![post("a", &["x"]), post("", &["y"])]).unwrap_err();
        assert!(matches!(err, StoreError::MissingSlug { index: 1 }));
    }

    #[test]
    fn test_recent_clamps() {
        let store =
            PostStore::from_posts(vec![post("a", &[]), post("b", &[]), post("c", &[])]).unwrap();
        let slugs: Vec<_> = store.recent(2).iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b"]);
        assert_eq!(store.recent(10).len(), 3);
        assert!(store.recent(0).is_empty());
    }

    #[test]
    fn test_tags_deduplicated_in_order() {
        let store = PostStore::from_posts(vec![
            post("a", &["\"opengl\"", "gpu"]),
            post("b", &["gpu", "opengl", "shaders"]),
        ])
        .unwrap();
        let tags: Vec<_> = store.tags().into_iter().collect();
        assert_eq!(tags, vec!["opengl", "gpu", "shaders"]);
        assert_eq!(store.tag_counts()["gpu"], 2);
    }
}
