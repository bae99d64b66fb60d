//! Page and fragment rendering
//!
//! Rendering is a two-step pipeline: the page's own template produces a
//! fragment, and for full-page requests that fragment is placed inside
//! `layout.html`. Whether to wrap is decided by the caller and passed in as
//! a plain flag.

mod meta;
pub mod view;

pub use meta::PageMeta;
pub use view::{Missing, Page, View};

use axum::http::StatusCode;
use std::sync::Arc;
use tera::Context;

use crate::config::SiteConfig;
use crate::templates::{TemplateError, TemplateRenderer};

/// Returned when even the error template cannot be rendered
pub const FALLBACK_ERROR_HTML: &str = r#"<div class="text-center py-16"><h1 class="text-3xl font-bold text-gray-800">Error loading page</h1></div>"#;

/// A finished response body
#[derive(Debug, Clone)]
pub struct Rendered {
    pub status: StatusCode,
    pub html: String,
    pub meta: PageMeta,
}

/// Renders views into fragments or full pages
pub struct Renderer {
    templates: TemplateRenderer,
    config: Arc<SiteConfig>,
}

impl Renderer {
    pub fn new(templates: TemplateRenderer, config: Arc<SiteConfig>) -> Self {
        Self { templates, config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Render a view; `fragment` skips the layout
    ///
    /// Template failures are logged and replaced by the error page in the
    /// same mode, with status 500.
    pub fn render(&self, view: &View, fragment: bool) -> Rendered {
        match self.try_render(view, fragment) {
            Ok(html) => Rendered {
                status: view.status(),
                html,
                meta: view.meta.clone(),
            },
            Err(e) => {
                tracing::error!(
                    template = view.page.template_name(),
                    error = %error_chain(&e),
                    "failed to render page"
                );
                let error = View::error(&self.config);
                let html = self.try_render(&error, fragment).unwrap_or_else(|e| {
                    tracing::error!(error = %error_chain(&e), "failed to render error page");
                    FALLBACK_ERROR_HTML.to_string()
                });
                Rendered {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    html,
                    meta: error.meta,
                }
            }
        }
    }

    fn try_render(&self, view: &View, fragment: bool) -> Result<String, TemplateError> {
        let content = self.render_fragment(&view.page)?;
        if fragment {
            return Ok(content);
        }

        let mut context = Context::new();
        context.insert("content", &content);
        context.insert("meta", &view.meta);
        context.insert("site_title", &self.config.title);
        self.templates.render("layout.html", &context)
    }

    fn render_fragment(&self, page: &Page) -> Result<String, TemplateError> {
        let mut context = Context::new();
        match page {
            Page::Home(home) => context.insert("home", home),
            Page::Posts(listing) => context.insert("listing", listing),
            Page::Post(post) => context.insert("post", post),
            Page::Cards(cards) => context.insert("cards", cards),
            Page::Newsletter(outcome) => {
                context.insert("newsletter", &view::newsletter_data(*outcome))
            }
            Page::NotFound(missing) => context.insert("missing", &view::missing_data(*missing)),
            Page::Error => {}
        }
        self.templates.render(page.template_name(), &context)
    }
}

/// Error message with its whole source chain
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
