//! Shared test utilities for the errand-site test suite.
//!
//! Provides recording hosts for the browser-side state machines, scripted
//! transports for the form submitter, and an in-process stub of the content
//! API bound to an ephemeral port.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let api = StubContentApi::start().await;
//! let client = ContentClient::new(api.base_url(), timeout, ttl)?;
//! assert_eq!(client.list_posts(1, 12).await.posts.len(), 2);
//! assert_eq!(api.last_query().as_deref(), Some("per_page=12&page=1"));
//! ```

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Json;
use axum::Router;
use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::json;
use tokio::sync::Notify;

use crate::content::{Author, Post, PostSummary};
use crate::form::{Payload, Transport, TransportError, TransportResponse};
use crate::nav::ScrollHost;
use crate::section::{ObservedBand, SectionHost};
use crate::types::SectionId;

// =========================================================================
// Section host
// =========================================================================

#[derive(Debug, Default)]
pub struct SectionLog {
    pub listening: bool,
    pub observed: Vec<SectionId>,
    pub disconnects: usize,
}

/// A page with a fixed set of element ids and an optional URL fragment.
/// Registrations are recorded in a shared log that outlives the host.
#[derive(Debug)]
pub struct RecordingSectionHost {
    existing: HashSet<String>,
    fragment: Option<String>,
    log: Rc<RefCell<SectionLog>>,
}

impl RecordingSectionHost {
    pub fn new(existing: &[&str], fragment: Option<&str>) -> Self {
        Self {
            existing: existing.iter().map(|s| s.to_string()).collect(),
            fragment: fragment.map(str::to_string),
            log: Rc::new(RefCell::new(SectionLog::default())),
        }
    }

    pub fn log(&self) -> Rc<RefCell<SectionLog>> {
        Rc::clone(&self.log)
    }
}

impl SectionHost for RecordingSectionHost {
    fn current_fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn observe(&mut self, id: &SectionId, _band: &ObservedBand) -> bool {
        if !self.existing.contains(id.as_str()) {
            return false;
        }
        self.log.borrow_mut().observed.push(id.clone());
        true
    }

    fn disconnect(&mut self) {
        let mut log = self.log.borrow_mut();
        log.observed.clear();
        log.disconnects += 1;
    }

    fn listen_fragment_changes(&mut self) {
        self.log.borrow_mut().listening = true;
    }

    fn unlisten_fragment_changes(&mut self) {
        self.log.borrow_mut().listening = false;
    }
}

// =========================================================================
// Scroll host
// =========================================================================

#[derive(Debug, Default)]
struct ScrollCounts {
    locked: bool,
    locks: usize,
    unlocks: usize,
}

/// Clones share one record, so a test keeps a handle after moving a clone
/// into the menu.
#[derive(Debug, Clone, Default)]
pub struct RecordingScrollHost {
    counts: Rc<RefCell<ScrollCounts>>,
}

impl RecordingScrollHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.counts.borrow().locked
    }

    pub fn lock_count(&self) -> usize {
        self.counts.borrow().locks
    }

    pub fn unlock_count(&self) -> usize {
        self.counts.borrow().unlocks
    }
}

impl ScrollHost for RecordingScrollHost {
    fn lock_scroll(&mut self) {
        let mut c = self.counts.borrow_mut();
        c.locked = true;
        c.locks += 1;
    }

    fn unlock_scroll(&mut self) {
        let mut c = self.counts.borrow_mut();
        c.locked = false;
        c.unlocks += 1;
    }
}

// =========================================================================
// Transports
// =========================================================================

/// Replays a fixed sequence of results. The last result repeats once the
/// sequence is exhausted.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    last: Mutex<Option<Result<TransportResponse, TransportError>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedTransport {
    pub fn ok(response: TransportResponse) -> Self {
        Self::sequence(vec![Ok(response)])
    }

    pub fn sequence(results: Vec<Result<TransportResponse, TransportError>>) -> Self {
        Self {
            script: Mutex::new(results.into()),
            last: Mutex::new(None),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, _payload: Payload) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        match next {
            Some(result) => {
                *last = Some(result.clone());
                result
            }
            None => last
                .clone()
                .unwrap_or_else(|| Err(TransportError::Unreachable("script exhausted".into()))),
        }
    }
}

/// Holds every request until the test releases the gate.
pub struct GatedTransport {
    response: TransportResponse,
    gate: Arc<Notify>,
    calls: Arc<AtomicUsize>,
}

impl GatedTransport {
    pub fn new(response: TransportResponse) -> Self {
        Self {
            response,
            gate: Arc::new(Notify::new()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn gate(&self) -> Arc<Notify> {
        Arc::clone(&self.gate)
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn send(&self, _payload: Payload) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(self.response.clone())
    }
}

// =========================================================================
// Stub content API
// =========================================================================

pub fn sample_post(id: u64, slug: &str, title: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        slug: slug.to_string(),
        excerpt: Some(format!("{title} in brief.")),
        body: format!("{title} opening.\n\nSecond paragraph."),
        image: Some(format!("/storage/blog/{slug}.jpg")),
        published_at: Some("2025-03-05T10:00:00Z".into()),
        author: Some(Author {
            id: Some(1),
            name: "GoQuick Team".into(),
        }),
    }
}

pub fn sample_posts() -> Vec<Post> {
    vec![
        sample_post(1, "welcome", "Welcome to GoQuick"),
        sample_post(2, "runner-tips", "Tips for new runners"),
    ]
}

fn summary(post: &Post) -> PostSummary {
    PostSummary {
        id: post.id,
        title: post.title.clone(),
        slug: post.slug.clone(),
        excerpt: post.excerpt.clone(),
        image: post.image.clone(),
        published_at: post.published_at.clone(),
        author: post.author.clone(),
    }
}

#[derive(Default)]
struct StubState {
    posts: Mutex<Vec<Post>>,
    fail_listing: AtomicBool,
    last_query: Mutex<Option<String>>,
    detail_hits: AtomicUsize,
}

/// Content API double serving `/v1/blog/posts` and `/v1/blog/posts/:slug`.
pub struct StubContentApi {
    addr: std::net::SocketAddr,
    state: Arc<StubState>,
}

impl StubContentApi {
    pub async fn start() -> Self {
        let state = Arc::new(StubState {
            posts: Mutex::new(sample_posts()),
            ..Default::default()
        });
        let router = Router::new()
            .route("/v1/blog/posts", get(stub_list))
            .route("/v1/blog/posts/:slug", get(stub_show))
            .with_state(Arc::clone(&state));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    pub fn set_posts(&self, posts: Vec<Post>) {
        *self.state.posts.lock().unwrap() = posts;
    }

    pub fn fail_listing(&self) {
        self.state.fail_listing.store(true, Ordering::SeqCst);
    }

    pub fn last_query(&self) -> Option<String> {
        self.state.last_query.lock().unwrap().clone()
    }

    pub fn detail_hits(&self) -> usize {
        self.state.detail_hits.load(Ordering::SeqCst)
    }
}

async fn stub_list(State(state): State<Arc<StubState>>, RawQuery(query): RawQuery) -> Response {
    *state.last_query.lock().unwrap() = query;
    if state.fail_listing.load(Ordering::SeqCst) {
        return (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response();
    }
    let posts = state.posts.lock().unwrap().clone();
    let summaries: Vec<PostSummary> = posts.iter().map(summary).collect();
    Json(json!({
        "success": true,
        "data": {
            "posts": summaries,
            "pagination": {
                "current_page": 1,
                "last_page": 1,
                "per_page": 12,
                "total": summaries.len(),
            }
        }
    }))
    .into_response()
}

async fn stub_show(State(state): State<Arc<StubState>>, Path(slug): Path<String>) -> Response {
    state.detail_hits.fetch_add(1, Ordering::SeqCst);
    let found = state
        .posts
        .lock()
        .unwrap()
        .iter()
        .find(|p| p.slug == slug)
        .cloned();
    match found {
        Some(post) => Json(json!({"success": true, "data": post})).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "message": "Post not found"})),
        )
            .into_response(),
    }
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v1")
}
