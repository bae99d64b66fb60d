//! Built-in CodeNPixel templates using the Tera template engine
//!
//! The default template set is embedded in the binary. A site may point
//! `templates_dir` at a directory with the same file names to replace it.

use serde::Serialize;
use std::path::Path;
use tera::{Context, Tera};

/// Templates every template set must provide
pub const REQUIRED_TEMPLATES: &[&str] = &[
    "layout.html",
    "home.html",
    "posts.html",
    "post.html",
    "cards.html",
    "newsletter.html",
    "not_found.html",
    "error.html",
];

/// Template loading and rendering errors
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to load templates: {0}")]
    Load(#[source] tera::Error),

    #[error("template set is missing {0}")]
    Missing(&'static str),

    #[error("failed to render {name}: {source}")]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },
}

/// Template renderer over a validated template set
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a renderer with the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("codenpixel/layout.html")),
            ("home.html", include_str!("codenpixel/home.html")),
            ("posts.html", include_str!("codenpixel/posts.html")),
            ("post.html", include_str!("codenpixel/post.html")),
            ("cards.html", include_str!("codenpixel/cards.html")),
            ("newsletter.html", include_str!("codenpixel/newsletter.html")),
            ("not_found.html", include_str!("codenpixel/not_found.html")),
            ("error.html", include_str!("codenpixel/error.html")),
            // Partials
            (
                "partials/post_card.html",
                include_str!("codenpixel/partials/post_card.html"),
            ),
        ])
        .map_err(TemplateError::Load)?;

        Self::validated(tera)
    }

    /// Create a renderer from every `*.html` file under `dir`
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, TemplateError> {
        let pattern = format!("{}/**/*.html", dir.as_ref().display());
        let tera = Tera::new(&pattern).map_err(TemplateError::Load)?;
        tracing::debug!("Loaded templates from {:?}", dir.as_ref());
        Self::validated(tera)
    }

    fn validated(tera: Tera) -> Result<Self, TemplateError> {
        let names: Vec<&str> = tera.get_template_names().collect();
        for required in REQUIRED_TEMPLATES {
            if !names.contains(required) {
                return Err(TemplateError::Missing(required));
            }
        }
        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, name: &str, context: &Context) -> Result<String, TemplateError> {
        self.tera
            .render(name, context)
            .map_err(|source| TemplateError::Render {
                name: name.to_string(),
                source,
            })
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct TagLink {
    pub name: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostCard {
    pub slug: String,
    pub icon: &'static str,
    pub banner_title: String,
    pub title: String,
    pub date: String,
    pub author: String,
    pub description: String,
    pub tags: Vec<TagLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub slug: String,
    pub icon: &'static str,
    pub title: String,
    pub date: String,
    pub author: String,
    pub tags: Vec<TagLink>,
    pub body: String,
    /// Authored HTML, inserted without escaping
    pub body_trusted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostListing {
    pub heading: String,
    pub all_active: bool,
    pub tag_nav: Vec<TagLink>,
    pub posts: Vec<PostCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeData {
    pub title: String,
    pub tagline: String,
    pub limit: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsletterData {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MissingData {
    pub icon: &'static str,
    pub heading: &'static str,
    pub message: &'static str,
    pub link_text: &'static str,
    pub link_href: &'static str,
    pub link_fragment: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_templates_load() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_text_is_escaped() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert(
            "newsletter",
            &NewsletterData {
                status: "added",
                message: "<b>hi</b>",
            },
        );
        let html = renderer.render("newsletter.html", &context).unwrap();
        assert!(html.contains("&lt;b&gt;hi&lt;&#x2F;b&gt;"));
        assert!(!html.contains("<b>hi</b>"));
    }

    #[test]
    fn test_trusted_body_not_escaped() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert(
            "post",
            &PostDetail {
                slug: "s".to_string(),
                icon: "🔥",
                title: "T".to_string(),
                date: String::new(),
                author: String::new(),
                tags: Vec::new(),
                body: "<h2>Raw</h2>".to_string(),
                body_trusted: true,
            },
        );
        let html = renderer.render("post.html", &context).unwrap();
        assert!(html.contains("<h2>Raw</h2>"));
    }

    #[test]
    fn test_layout_assets_ship_with_sample_site() {
        let layout = include_str!("codenpixel/layout.html");
        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("site/public");

        let assets: Vec<&str> = layout
            .split("\"/public/")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect();
        assert!(assets.contains(&"style.css"));
        assert!(assets.contains(&"script.js"));
        for asset in assets {
            assert!(public.join(asset).is_file(), "missing site/public/{}", asset);
        }
    }

    #[test]
    fn test_from_dir_requires_full_set() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("layout.html"), "{{ content | safe }}").unwrap();
        let err = TemplateRenderer::from_dir(dir.path()).err().unwrap();
        assert!(matches!(err, TemplateError::Missing("home.html")));
    }

    #[test]
    fn test_from_dir_loads_overrides() {
        let dir = TempDir::new().unwrap();
        for name in REQUIRED_TEMPLATES {
            fs::write(dir.path().join(name), format!("custom {}", name)).unwrap();
        }
        let renderer = TemplateRenderer::from_dir(dir.path()).unwrap();
        assert_eq!(
            renderer.render("home.html", &Context::new()).unwrap(),
            "custom home.html"
        );
    }
}
