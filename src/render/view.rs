//! Views - the logical pages of the site and the data they render with

use axum::http::StatusCode;

use super::PageMeta;
use crate::config::SiteConfig;
use crate::content::{self, Body, Filter, Post, PostStore};
use crate::helpers::{display_date, encode_query_value, post_path, tag_path, truncate};
use crate::newsletter::Subscription;
use crate::templates::{
    HomeData, MissingData, NewsletterData, PostCard, PostDetail, PostListing, TagLink,
};

/// Banner titles longer than this are cut
const BANNER_TITLE_LENGTH: usize = 50;

/// What was not found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Post,
    Page,
}

/// A logical page and its template data
#[derive(Debug, Clone)]
pub enum Page {
    Home(HomeData),
    Posts(PostListing),
    Post(PostDetail),
    Cards(Vec<PostCard>),
    Newsletter(Subscription),
    NotFound(Missing),
    Error,
}

impl Page {
    /// Template rendering this page's fragment
    pub fn template_name(&self) -> &'static str {
        match self {
            Page::Home(_) => "home.html",
            Page::Posts(_) => "posts.html",
            Page::Post(_) => "post.html",
            Page::Cards(_) => "cards.html",
            Page::Newsletter(_) => "newsletter.html",
            Page::NotFound(_) => "not_found.html",
            Page::Error => "error.html",
        }
    }

    /// Response status for this page
    pub fn status(&self) -> StatusCode {
        match self {
            Page::NotFound(_) => StatusCode::NOT_FOUND,
            Page::Error => StatusCode::INTERNAL_SERVER_ERROR,
            Page::Newsletter(Subscription::Invalid) => StatusCode::BAD_REQUEST,
            _ => StatusCode::OK,
        }
    }
}

/// A page together with its metadata
#[derive(Debug, Clone)]
pub struct View {
    pub page: Page,
    pub meta: PageMeta,
}

impl View {
    pub fn home(config: &SiteConfig) -> Self {
        let page = Page::Home(HomeData {
            title: config.title.clone(),
            tagline: config.tagline.clone(),
            limit: config.home_limit,
        });
        let meta = site_meta(
            config,
            format!("{} - {}", config.title, config.tagline),
            config.description.clone(),
            "/",
        );
        Self { page, meta }
    }

    /// The `/posts` listing for a filter
    pub fn posts(config: &SiteConfig, store: &PostStore, filter: &Filter) -> Self {
        let posts = content::build_view(store, filter)
            .into_iter()
            .map(post_card)
            .collect();

        let tag_nav = content::tag_navigation(store, filter)
            .into_iter()
            .map(|nav| TagLink {
                href: tag_path(&nav.tag),
                name: nav.tag,
                active: nav.active,
            })
            .collect();

        let site = &config.title;
        let topic = "on game development and graphics programming";
        let (heading, title, description, path) = match filter {
            Filter::Tag(value) => (
                format!("Posts tagged with \"{}\"", value),
                format!("Posts tagged with \"{}\" - {}", value, site),
                format!("Explore posts tagged with \"{}\" {} at {}.", value, topic, site),
                tag_path(value),
            ),
            Filter::Category(value) => (
                format!("{} Posts", value),
                format!("{} Posts - {}", value, site),
                format!("Explore {} posts {} at {}.", value, topic, site),
                format!("/posts?filter=category&value={}", encode_query_value(value)),
            ),
            Filter::All => (
                "All Posts".to_string(),
                format!("All Posts - {}", site),
                format!("Explore all posts {} at {}.", topic, site),
                "/posts".to_string(),
            ),
        };

        let mut meta = site_meta(config, title, description, &path);
        if let Filter::Tag(value) | Filter::Category(value) = filter {
            meta.keywords = format!("{}, {}", value, meta.keywords);
        }

        let page = Page::Posts(PostListing {
            heading,
            all_active: filter.is_all(),
            tag_nav,
            posts,
        });
        Self { page, meta }
    }

    /// A single post with its resolved body
    pub fn post(config: &SiteConfig, post: &Post, body: Body) -> Self {
        let meta = PageMeta {
            title: format!("{} - {}", post.title, config.title),
            description: post.description.clone(),
            keywords: post.clean_tags().collect::<Vec<_>>().join(", "),
            og_type: "article",
            url: config.full_url(&post_path(&post.slug)),
            og_image: config.og_image.clone(),
        };

        let body_trusted = body.is_trusted();
        let page = Page::Post(PostDetail {
            slug: post.slug.clone(),
            icon: content::resolve_icon(post),
            title: post.title.clone(),
            date: display_date(post),
            author: post.author.clone(),
            tags: tag_links(post),
            body: match body {
                Body::Trusted(s) | Body::Fallback(s) => s,
            },
            body_trusted,
        });
        Self { page, meta }
    }

    /// Bare post cards, as loaded into the home page
    pub fn cards(config: &SiteConfig, posts: &[Post]) -> Self {
        let page = Page::Cards(posts.iter().map(post_card).collect());
        let meta = site_meta(
            config,
            format!("Latest Posts - {}", config.title),
            config.description.clone(),
            "/",
        );
        Self { page, meta }
    }

    pub fn newsletter(config: &SiteConfig, outcome: Subscription) -> Self {
        let meta = site_meta(
            config,
            format!("Newsletter - {}", config.title),
            config.description.clone(),
            "/",
        );
        Self {
            page: Page::Newsletter(outcome),
            meta,
        }
    }

    pub fn not_found(config: &SiteConfig, missing: Missing) -> Self {
        let (title, description) = match missing {
            Missing::Post => ("Post Not Found", "The requested post was not found."),
            Missing::Page => ("Page Not Found", "The requested page was not found."),
        };
        let meta = site_meta(
            config,
            format!("{} - {}", title, config.title),
            description.to_string(),
            "/",
        );
        Self {
            page: Page::NotFound(missing),
            meta,
        }
    }

    pub fn error(config: &SiteConfig) -> Self {
        let meta = site_meta(
            config,
            format!("Error - {}", config.title),
            "An error occurred on the server.".to_string(),
            "/",
        );
        Self {
            page: Page::Error,
            meta,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.page.status()
    }
}

/// Card data for a post
pub fn post_card(post: &Post) -> PostCard {
    PostCard {
        slug: post.slug.clone(),
        icon: content::resolve_icon(post),
        banner_title: truncate(&post.title, BANNER_TITLE_LENGTH),
        title: post.title.clone(),
        date: display_date(post),
        author: post.author.clone(),
        description: post.description.clone(),
        tags: tag_links(post),
    }
}

fn tag_links(post: &Post) -> Vec<TagLink> {
    post.clean_tags()
        .map(|tag| TagLink {
            href: tag_path(&tag),
            name: tag,
            active: false,
        })
        .collect()
}

pub(super) fn newsletter_data(outcome: Subscription) -> NewsletterData {
    let status = match outcome {
        Subscription::Invalid => "invalid",
        Subscription::Duplicate => "duplicate",
        Subscription::Added => "added",
    };
    NewsletterData {
        status,
        message: outcome.message(),
    }
}

pub(super) fn missing_data(missing: Missing) -> MissingData {
    match missing {
        Missing::Post => MissingData {
            icon: "📝",
            heading: "Post Not Found",
            message: "The post you're looking for doesn't exist.",
            link_text: "Browse All Posts",
            link_href: "/posts",
            link_fragment: "/posts",
        },
        Missing::Page => MissingData {
            icon: "🔍",
            heading: "Page Not Found",
            message: "The page you're looking for doesn't exist.",
            link_text: "Go Home",
            link_href: "/",
            link_fragment: "/home",
        },
    }
}

fn site_meta(config: &SiteConfig, title: String, description: String, path: &str) -> PageMeta {
    PageMeta {
        title,
        description,
        keywords: config.keyword_line(),
        og_type: "website",
        url: config.full_url(path),
        og_image: config.og_image.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> PostStore {
        let mut a = Post::new("loops", "The Game Loop, Explained From First Principles To Production");
        a.tags = vec!["game-loop".to_string()];
        a.date = "2024-02-01".to_string();
        a.category = "Engines".to_string();

        let mut b = Post::new("nanite", "Nanite");
        b.tags = vec!["\"nanite\"".to_string(), "unreal-engine".to_string()];
        b.description = "Virtualized geometry".to_string();

        PostStore::from_posts(vec![a, b]).unwrap()
    }

    #[test]
    fn test_post_card_fields() {
        let store = store();
        let card = post_card(store.get("loops").unwrap());
        assert_eq!(card.icon, "🎮");
        assert_eq!(card.date, "Feb 1, 2024");
        assert_eq!(card.banner_title.chars().count(), BANNER_TITLE_LENGTH + 3);
        assert!(card.banner_title.ends_with("..."));
    }

    #[test]
    fn test_tag_links_strip_quotes() {
        let store = store();
        let card = post_card(store.get("nanite").unwrap());
        assert_eq!(card.tags[0].name, "nanite");
        assert_eq!(card.tags[0].href, "/posts?filter=tag&value=nanite");
    }

    #[test]
    fn test_posts_view_heading_and_meta() {
        let config = SiteConfig::default();
        let view = View::posts(&config, &store(), &Filter::Tag("nanite".to_string()));
        assert_eq!(view.meta.title, "Posts tagged with \"nanite\" - CodeNPixel");
        assert!(view.meta.keywords.starts_with("nanite, "));
        match view.page {
            Page::Posts(listing) => {
                assert_eq!(listing.heading, "Posts tagged with \"nanite\"");
                assert!(!listing.all_active);
                assert_eq!(listing.posts.len(), 1);
                assert!(listing.tag_nav.iter().any(|t| t.name == "nanite" && t.active));
            }
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn test_category_view_heading() {
        let config = SiteConfig::default();
        let view = View::posts(&config, &store(), &Filter::Category("Engines".to_string()));
        match view.page {
            Page::Posts(listing) => assert_eq!(listing.heading, "Engines Posts"),
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn test_post_view_meta() {
        let config = SiteConfig::default();
        let store = store();
        let post = store.get("nanite").unwrap();
        let view = View::post(&config, post, Body::Fallback(post.description.clone()));
        assert_eq!(view.meta.og_type, "article");
        assert_eq!(view.meta.keywords, "nanite, unreal-engine");
        assert_eq!(view.meta.url, "http://localhost:3000/post/nanite");
    }

    #[test]
    fn test_statuses() {
        let config = SiteConfig::default();
        assert_eq!(View::not_found(&config, Missing::Post).status(), StatusCode::NOT_FOUND);
        assert_eq!(View::error(&config).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            View::newsletter(&config, Subscription::Invalid).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(View::newsletter(&config, Subscription::Added).status(), StatusCode::OK);
    }
}
