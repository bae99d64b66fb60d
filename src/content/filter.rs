//! Post filtering for the `/posts` listing

use super::post::strip_quotes;
use super::{Post, PostStore};

/// Which subset of posts a listing shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Tag(String),
    Category(String),
}

impl Filter {
    /// Build a filter from the `filter` and `value` query parameters
    ///
    /// Unknown modes and empty values mean "everything".
    pub fn from_query(mode: &str, value: &str) -> Self {
        match mode {
            "tag" if !value.is_empty() => Filter::Tag(value.to_string()),
            "category" if !value.is_empty() => Filter::Category(value.to_string()),
            _ => Filter::All,
        }
    }

    /// Whether a post belongs to this filter's subset
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            Filter::All => true,
            Filter::Tag(value) => {
                let value = value.to_lowercase();
                post.tags
                    .iter()
                    .any(|tag| strip_quotes(tag).to_lowercase() == value)
            }
            Filter::Category(value) => post.category.to_lowercase() == value.to_lowercase(),
        }
    }

    /// Whether a tag navigation button for `tag` is the selected one
    pub fn is_active_tag(&self, tag: &str) -> bool {
        matches!(self, Filter::Tag(value) if value == tag)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}

/// A tag navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNav {
    pub tag: String,
    pub active: bool,
}

/// Posts matching `filter`, in store order
pub fn build_view<'a>(store: &'a PostStore, filter: &Filter) -> Vec<&'a Post> {
    store.all().iter().filter(|p| filter.matches(p)).collect()
}

/// Tag navigation for the whole store with the current selection marked
pub fn tag_navigation(store: &PostStore, filter: &Filter) -> Vec<TagNav> {
    store
        .tags()
        .into_iter()
        .map(|tag| TagNav {
            active: filter.is_active_tag(&tag),
            tag,
        })
        .collect()
}
