//! List site content

use anyhow::Result;
use std::fmt::Write;

use crate::content::PostStore;
use crate::helpers::display_date;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let store = site.load_posts()?;
    print!("{}", listing(&store, content_type)?);
    Ok(())
}

fn listing(store: &PostStore, content_type: &str) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            writeln!(out, "Posts ({}):", store.len())?;
            for post in store.all() {
                writeln!(
                    out,
                    "  {} - {} [{}]",
                    display_date(post),
                    post.title,
                    post.slug
                )?;
            }
        }
        "tag" | "tags" => {
            let mut tags: Vec<_> = store.tag_counts().into_iter().collect();
            writeln!(out, "Tags ({}):", tags.len())?;
            // stable, so equal counts keep first-seen order
            tags.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in tags {
                writeln!(out, "  {} ({})", tag, count)?;
            }
        }
        "category" | "categories" => {
            let mut categories: Vec<_> = store.category_counts().into_iter().collect();
            writeln!(out, "Categories ({}):", categories.len())?;
            categories.sort_by(|a, b| b.1.cmp(&a.1));
            for (category, count) in categories {
                writeln!(out, "  {} ({})", category, count)?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, tag, category",
                content_type
            );
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Post;

    fn store() -> PostStore {
        let mut a = Post::new("a", "Alpha");
        a.date = "2024-03-09".to_string();
        a.tags = vec!["opengl".to_string(), "shaders".to_string()];
        a.category = "Graphics".to_string();
        let mut b = Post::new("b", "Beta");
        b.tags = vec!["\"shaders\"".to_string()];
        PostStore::from_posts(vec![a, b]).unwrap()
    }

    #[test]
    fn test_list_posts() {
        let out = listing(&store(), "posts").unwrap();
        assert!(out.starts_with("Posts (2):"));
        assert!(out.contains("  Mar 9, 2024 - Alpha [a]"));
    }

    #[test]
    fn test_list_tags_by_count() {
        let out = listing(&store(), "tag").unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["Tags (2):", "  shaders (2)", "  opengl (1)"]);
    }

    #[test]
    fn test_list_categories_skips_empty() {
        let out = listing(&store(), "categories").unwrap();
        assert_eq!(out, "Categories (1):\n  Graphics (1)\n");
    }

    #[test]
    fn test_unknown_type() {
        assert!(listing(&store(), "pages").is_err());
    }
}
