//! Content module - posts, their bodies, filtering and icons

pub mod filter;
pub mod icon;
pub mod loader;
mod markdown;
mod post;
pub mod store;

pub use filter::{build_view, tag_navigation, Filter, TagNav};
pub use icon::resolve_icon;
pub use loader::{Body, ContentLoader};
pub use markdown::MarkdownRenderer;
pub use post::{strip_quotes, Post};
pub use store::{PostStore, StoreError};
