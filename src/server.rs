//! HTTP server.
//!
//! One axum router serves the rendered pages, the two form flows, the
//! career application API, `sitemap.xml`, `robots.txt`, and the embedded
//! assets. Forms work without JavaScript: a POST runs the same
//! [`FormSubmitter`] the browser flow uses and re-renders the page with the
//! resulting status.
//!
//! Each request gets its own submitter, so "one submission in flight" is
//! scoped to a single form instance rather than to the whole server.

use crate::careers::{self, ApplicationError, InProcessTransport};
use crate::catalog::LegalDoc;
use crate::config::SiteConfig;
use crate::content::{ContentClient, FetchError};
use crate::form::{
    FieldSet, FormSpec, FormStatus, FormSubmission, FormSubmitter, HttpTransport, SubmitOutcome,
};
use crate::generate::{ApplyView, FormView, Renderer};
use crate::nav::{self, NavError};
use crate::sitemap;
use crate::types::FaqCategory;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{DefaultBodyLimit, Multipart, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub type SharedState = Arc<AppState>;

/// Headroom over the CV limit for the other multipart parts.
const MULTIPART_OVERHEAD: u64 = 1024 * 1024;

const ASSET_CACHE: &str = "public, max-age=31536000, immutable";

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("navigation error: {0}")]
    Nav(#[from] NavError),
    #[error("content client error: {0}")]
    Content(#[from] FetchError),
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub struct AppState {
    pub renderer: Renderer,
    pub content: ContentClient,
    http: reqwest::Client,
    contact_endpoint: String,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Result<Self, ServeError> {
        let content = ContentClient::from_config(&config)?;
        let http = reqwest::Client::builder()
            .timeout(config.content.request_timeout())
            .build()?;
        let contact_endpoint = format!("{}/contact", config.site.api_base_url);
        let renderer = Renderer::new(config, nav::default_nav())?;
        Ok(Self {
            renderer,
            content,
            http,
            contact_endpoint,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        self.renderer.config()
    }

    pub fn contact_endpoint(&self) -> &str {
        &self.contact_endpoint
    }

    fn contact_submitter(&self) -> FormSubmitter<HttpTransport> {
        FormSubmitter::new(
            FormSpec::contact(&self.contact_endpoint),
            HttpTransport::new(self.http.clone(), self.contact_endpoint.clone()),
        )
    }

    fn career_spec(&self) -> FormSpec {
        let forms = &self.config().forms;
        FormSpec::career_application(forms.max_cv_bytes(), forms.auto_close())
    }
}

pub async fn serve(config: SiteConfig) -> Result<(), ServeError> {
    let addr = config.server.bind_addr();
    let state = Arc::new(AppState::new(config)?);
    info!(
        %addr,
        site = %state.config().site.site_url,
        api = %state.content.base_url(),
        "binding HTTP listener"
    );
    let router = build_router(state);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server exited");
    Ok(())
}

pub fn build_router(state: SharedState) -> Router {
    let upload_limit = state.config().forms.max_cv_bytes() + MULTIPART_OVERHEAD;
    let upload_limit = usize::try_from(upload_limit).unwrap_or(usize::MAX);
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/faq", get(faq))
        .route("/careers", get(careers_page))
        .route(
            "/careers/apply",
            post(apply_submit).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/careers",
            post(careers::api_handler).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/contact", get(contact_page).post(contact_submit))
        .route("/how-it-works", get(how_it_works))
        .route("/blog", get(blog_index))
        .route("/blog/:slug", get(blog_post))
        .route("/privacy", get(privacy))
        .route("/terms", get(terms))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/robots.txt", get(robots_txt))
        .route("/static/site.css", get(site_css))
        .route("/static/site.js", get(site_js))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

// ============================================================================
// Pages
// ============================================================================

async fn home(State(state): State<SharedState>) -> Html<String> {
    Html(state.renderer.home().into_string())
}

async fn about(State(state): State<SharedState>) -> Html<String> {
    Html(state.renderer.about().into_string())
}

#[derive(Debug, Deserialize)]
struct FaqQuery {
    category: Option<String>,
}

async fn faq(State(state): State<SharedState>, Query(query): Query<FaqQuery>) -> Html<String> {
    let category = query
        .category
        .as_deref()
        .map(FaqCategory::from_slug)
        .unwrap_or_default();
    Html(state.renderer.faq(category).into_string())
}

async fn how_it_works(State(state): State<SharedState>) -> Html<String> {
    Html(state.renderer.how_it_works().into_string())
}

async fn privacy(State(state): State<SharedState>) -> Html<String> {
    let today = Utc::now().date_naive();
    Html(state.renderer.legal(LegalDoc::Privacy, today).into_string())
}

async fn terms(State(state): State<SharedState>) -> Html<String> {
    let today = Utc::now().date_naive();
    Html(state.renderer.legal(LegalDoc::Terms, today).into_string())
}

async fn not_found(State(state): State<SharedState>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(state.renderer.not_found().into_string()),
    )
        .into_response()
}

// ============================================================================
// Careers
// ============================================================================

#[derive(Debug, Deserialize)]
struct CareersQuery {
    apply: Option<String>,
}

async fn careers_page(
    State(state): State<SharedState>,
    Query(query): Query<CareersQuery>,
) -> Html<String> {
    let view = query
        .apply
        .map(|position| position.trim().to_string())
        .filter(|position| !position.is_empty())
        .map(|position| ApplyView {
            position,
            ..Default::default()
        });
    Html(state.renderer.careers(view.as_ref()).into_string())
}

async fn apply_submit(
    State(state): State<SharedState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Html<String> {
    let spec = state.career_spec();
    let mut fields = FieldSet::new();
    let read = match multipart {
        Ok(multipart) => careers::read_into(multipart, &mut fields).await,
        Err(rejection) => Err(rejection.into()),
    };
    let view = match read {
        Ok(()) => {
            let position = fields.get("position").unwrap_or_default().to_string();
            let submitter = FormSubmitter::new(spec, InProcessTransport);
            match submitter.submit(fields).await {
                SubmitOutcome::Completed(done) => ApplyView {
                    position,
                    form: FormView {
                        submission: done.submission,
                        fields: done.fields,
                    },
                    close_after: done.close_after,
                },
                SubmitOutcome::Ignored | SubmitOutcome::Discarded => ApplyView {
                    position,
                    ..Default::default()
                },
            }
        }
        Err(ApplicationError::TooLarge) => {
            warn!("application form over the upload limit");
            rejected_application(fields, &spec.messages.file_too_large)
        }
        Err(err) => {
            warn!(error = %err, "could not read application form");
            rejected_application(FieldSet::new(), &spec.messages.connectivity)
        }
    };
    Html(state.renderer.careers(Some(&view)).into_string())
}

/// The dialog re-rendered with an error, keeping whatever text was read.
fn rejected_application(fields: FieldSet, message: &str) -> ApplyView {
    ApplyView {
        position: fields.get("position").unwrap_or_default().to_string(),
        form: FormView {
            submission: FormSubmission::error(message),
            fields,
        },
        ..Default::default()
    }
}

// ============================================================================
// Contact
// ============================================================================

async fn contact_page(State(state): State<SharedState>) -> Html<String> {
    Html(state.renderer.contact(&FormView::default()).into_string())
}

async fn contact_submit(
    State(state): State<SharedState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Html<String> {
    let submitter = state.contact_submitter();
    let fields = FieldSet::from_pairs(pairs);
    let view = match submitter.submit(fields).await {
        SubmitOutcome::Completed(done) => {
            if done.submission.status == FormStatus::Error {
                warn!(
                    endpoint = %state.contact_endpoint,
                    message = %done.submission.message,
                    "contact submission failed"
                );
            }
            FormView {
                submission: done.submission,
                fields: done.fields,
            }
        }
        SubmitOutcome::Ignored | SubmitOutcome::Discarded => FormView::default(),
    };
    Html(state.renderer.contact(&view).into_string())
}

// ============================================================================
// Blog
// ============================================================================

#[derive(Debug, Deserialize)]
struct BlogQuery {
    page: Option<String>,
}

async fn blog_index(
    State(state): State<SharedState>,
    Query(query): Query<BlogQuery>,
) -> Html<String> {
    let page = query
        .page
        .and_then(|p| p.trim().parse::<u32>().ok())
        .unwrap_or(1);
    let listing = state
        .content
        .list_posts(page, state.config().content.per_page)
        .await;
    Html(state.renderer.blog_index(&listing).into_string())
}

async fn blog_post(State(state): State<SharedState>, Path(slug): Path<String>) -> Response {
    match state.content.get_post(&slug).await {
        Some(post) => Html(state.renderer.blog_post(&post).into_string()).into_response(),
        None => not_found(State(state)).await,
    }
}

// ============================================================================
// Machine-readable and static
// ============================================================================

async fn sitemap_xml(State(state): State<SharedState>) -> Response {
    let body = sitemap::render_sitemap(&state.config().site.site_url, Utc::now().date_naive());
    ([(header::CONTENT_TYPE, "application/xml")], body).into_response()
}

async fn robots_txt(State(state): State<SharedState>) -> Response {
    let body = sitemap::render_robots(&state.config().site.site_url);
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

async fn site_css(State(state): State<SharedState>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, ASSET_CACHE),
        ],
        state.renderer.assets().css().to_string(),
    )
        .into_response()
}

async fn site_js(State(state): State<SharedState>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, ASSET_CACHE),
        ],
        state.renderer.assets().js(),
    )
        .into_response()
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "service": "errand-site" }))
}
