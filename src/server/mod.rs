//! HTTP server

use anyhow::Result;
use axum::{
    async_trait,
    extract::{
        rejection::{FormRejection, PathRejection, QueryRejection},
        FromRequestParts, Path, Query, State,
    },
    http::{header, request::Parts, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::Path as FsPath;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::{ContentLoader, Filter, PostStore};
use crate::newsletter::Newsletter;
use crate::render::{Missing, Rendered, Renderer, View};
use crate::templates::TemplateRenderer;
use crate::Site;

/// Response header carrying page metadata for fragment swaps
pub const META_HEADER: &str = "x-meta-data";

/// Everything a request handler needs
pub struct ServerState {
    pub store: PostStore,
    pub loader: ContentLoader,
    pub renderer: Renderer,
    pub newsletter: Newsletter,
}

impl ServerState {
    /// Load posts and templates for a site
    ///
    /// Fails if the post file or the template set cannot be loaded.
    pub fn load(site: &Site) -> Result<Self> {
        let store = site.load_posts()?;

        let templates = match &site.templates_dir {
            Some(dir) => TemplateRenderer::from_dir(dir)?,
            None => TemplateRenderer::new()?,
        };

        let loader =
            ContentLoader::new(&site.base_dir).with_markdown(site.config.render_markdown);

        Ok(Self {
            store,
            loader,
            renderer: Renderer::new(templates, Arc::new(site.config.clone())),
            newsletter: Newsletter::new(),
        })
    }

    fn page(&self, view: &View, fragment: bool) -> Response {
        html_response(self.renderer.render(view, fragment), false)
    }
}

/// Whether the request came from htmx and wants a bare fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HxRequest(pub bool);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for HxRequest {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let fragment = parts
            .headers
            .get("hx-request")
            .and_then(|v| v.to_str().ok())
            .map(|v| v == "true")
            .unwrap_or(false);
        Ok(Self(fragment))
    }
}

/// Build the application router
pub fn router(state: Arc<ServerState>, public_dir: &FsPath) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/home", get(home_fragment_handler))
        .route("/posts", get(posts_handler))
        .route("/post/:slug", get(post_handler))
        .route("/api/posts", get(api_posts_handler))
        .route("/api/posts/json", get(api_posts_json_handler))
        .route("/api/posts/:slug", get(api_post_json_handler))
        .route("/newsletter", post(newsletter_handler))
        .nest_service("/public", ServeDir::new(public_dir))
        .fallback(not_found_handler)
        .with_state(state)
}

/// Start the server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState::load(site)?);
    let app = router(state, &site.public_dir).layer(TraceLayer::new_for_http());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://{}:{}", ip, port);
    tracing::info!("Available routes:");
    tracing::info!("  GET  /                  - Main page");
    tracing::info!("  GET  /posts             - Posts page");
    tracing::info!("  GET  /post/:slug        - Individual post");
    tracing::info!("  GET  /api/posts         - Posts HTML (for htmx)");
    tracing::info!("  GET  /api/posts/json    - Posts JSON");
    tracing::info!("  GET  /api/posts/:slug   - Single post JSON");
    tracing::info!("  POST /newsletter        - Newsletter subscription");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Query string as raw pairs, repeated keys included
type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Deserialize)]
struct NewsletterForm {
    #[serde(default)]
    email: String,
}

#[derive(Debug, serde::Serialize)]
struct ResponseError {
    error: &'static str,
}

async fn home_handler(
    State(state): State<Arc<ServerState>>,
    HxRequest(fragment): HxRequest,
) -> Response {
    state.page(&View::home(state.renderer.config()), fragment)
}

async fn home_fragment_handler(State(state): State<Arc<ServerState>>) -> Response {
    state.page(&View::home(state.renderer.config()), true)
}

async fn posts_handler(
    State(state): State<Arc<ServerState>>,
    HxRequest(fragment): HxRequest,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let pairs = query_pairs(query);
    let filter = Filter::from_query(
        first_param(&pairs, "filter").unwrap_or("all"),
        first_param(&pairs, "value").unwrap_or(""),
    );
    let view = View::posts(state.renderer.config(), &state.store, &filter);
    html_response(state.renderer.render(&view, fragment), fragment)
}

async fn post_handler(
    State(state): State<Arc<ServerState>>,
    HxRequest(fragment): HxRequest,
    slug: Result<Path<String>, PathRejection>,
) -> Response {
    let Some(post) = path_slug(slug).and_then(|slug| state.store.get(&slug)) else {
        return state.page(
            &View::not_found(state.renderer.config(), Missing::Post),
            fragment,
        );
    };

    let body = state.loader.load_content(post).await;
    let view = View::post(state.renderer.config(), post, body);
    html_response(state.renderer.render(&view, fragment), fragment)
}

async fn api_posts_handler(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let pairs = query_pairs(query);
    let limit = first_param(&pairs, "limit")
        .and_then(|l| l.trim().parse::<usize>().ok())
        .unwrap_or(state.renderer.config().home_limit);
    let view = View::cards(state.renderer.config(), state.store.recent(limit));
    state.page(&view, true)
}

async fn api_posts_json_handler(State(state): State<Arc<ServerState>>) -> Response {
    Json(state.store.all()).into_response()
}

async fn api_post_json_handler(
    State(state): State<Arc<ServerState>>,
    slug: Result<Path<String>, PathRejection>,
) -> Response {
    match path_slug(slug).and_then(|slug| state.store.get(&slug)) {
        Some(post) => Json(post).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ResponseError {
                error: "Post not found",
            }),
        )
            .into_response(),
    }
}

async fn newsletter_handler(
    State(state): State<Arc<ServerState>>,
    HxRequest(fragment): HxRequest,
    form: Result<Form<NewsletterForm>, FormRejection>,
) -> Response {
    let email = match form {
        Ok(Form(form)) => form.email,
        Err(e) => {
            tracing::debug!(error = %e, "unreadable newsletter form");
            String::new()
        }
    };
    let outcome = state.newsletter.subscribe(&email);
    state.page(&View::newsletter(state.renderer.config(), outcome), fragment)
}

async fn not_found_handler(
    State(state): State<Arc<ServerState>>,
    HxRequest(fragment): HxRequest,
) -> Response {
    state.page(
        &View::not_found(state.renderer.config(), Missing::Page),
        fragment,
    )
}

fn query_pairs(query: Result<Query<QueryPairs>, QueryRejection>) -> QueryPairs {
    match query {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            tracing::debug!(error = %e, "unreadable query string");
            Vec::new()
        }
    }
}

/// First value given for `key`
fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn path_slug(slug: Result<Path<String>, PathRejection>) -> Option<String> {
    match slug {
        Ok(Path(slug)) => Some(slug),
        Err(e) => {
            tracing::debug!(error = %e, "unreadable post slug");
            None
        }
    }
}

fn html_response(rendered: Rendered, with_meta: bool) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    if with_meta {
        match HeaderValue::from_str(&rendered.meta.header_json()) {
            Ok(value) => {
                headers.insert(HeaderName::from_static(META_HEADER), value);
            }
            Err(e) => tracing::warn!(error = %e, "page metadata is not a valid header value"),
        }
    }
    (rendered.status, headers, rendered.html).into_response()
}
