//! Banner icons keyed by primary tag

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::post::strip_quotes;
use super::Post;

/// Icon for posts whose primary tag has no entry
pub const DEFAULT_ICON: &str = "🔥";

lazy_static! {
    static ref ICONS: HashMap<&'static str, &'static str> = HashMap::from([
        ("game-loop", "🎮"),
        ("game-engine", "⚙️"),
        ("architecture", "🏗️"),
        ("performance", "⚡"),
        ("real-time", "⏱️"),
        ("opengl", "🖥️"),
        ("graphics-programming", "🎨"),
        ("shaders", "✨"),
        ("rendering", "🎭"),
        ("gpu", "💻"),
        ("procedural-generation", "🌍"),
        ("algorithms", "🧮"),
        ("world-building", "🏔️"),
        ("noise-functions", "🌊"),
        ("game-design", "🎯"),
        ("unreal-engine", "🚀"),
        ("nanite", "💎"),
        ("graphics", "🎪"),
        ("game-development", "🎲"),
        ("3d-rendering", "🎬"),
    ]);
}

/// Icon for a tag, after lowercasing and removing quotes
pub fn icon_for_tag(tag: &str) -> Option<&'static str> {
    ICONS.get(strip_quotes(tag).to_lowercase().as_str()).copied()
}

/// Banner icon for a post
pub fn resolve_icon(post: &Post) -> &'static str {
    post.primary_tag()
        .and_then(icon_for_tag)
        .unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_tagged(tags: &[&str]) -> Post {
        let mut post = Post::new("p", "P");
        post.tags = tags.iter().map(|t| t.to_string()).collect();
        post
    }

    #[test]
    fn test_known_primary_tag() {
        assert_eq!(resolve_icon(&post_tagged(&["nanite", "gpu"])), "💎");
    }

    #[test]
    fn test_primary_tag_normalized() {
        assert_eq!(resolve_icon(&post_tagged(&["\"OpenGL\""])), "🖥️");
    }

    #[test]
    fn test_only_primary_tag_counts() {
        assert_eq!(resolve_icon(&post_tagged(&["cooking", "gpu"])), DEFAULT_ICON);
    }

    #[test]
    fn test_no_tags_uses_default() {
        assert_eq!(resolve_icon(&post_tagged(&[])), DEFAULT_ICON);
    }

    #[test]
    fn test_default_iff_unknown() {
        for tag in ["shaders", "GPU", "\"rendering\"", "audio", "", "open gl"] {
            let icon = resolve_icon(&post_tagged(&[tag]));
            assert_eq!(icon == DEFAULT_ICON, icon_for_tag(tag).is_none(), "tag {tag:?}");
        }
    }
}
