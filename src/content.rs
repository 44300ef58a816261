//! Blog content client.
//!
//! Read-only access to the remote content API:
//!
//! - `GET {base}/blog/posts?per_page=N&page=P` for listings
//! - `GET {base}/blog/posts/{slug}` for a single post
//!
//! Both calls degrade instead of failing: a listing that cannot be fetched
//! or decoded is empty, and a post that cannot be fetched is not found.
//! Listings are always fetched fresh; found posts are reused for a short
//! TTL.

use crate::config::SiteConfig;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("content API returned status {0}")]
    Status(u16),
    #[error("content API base URL is not usable: {0}")]
    InvalidBaseUrl(String),
    #[error("could not decode content API response: {0}")]
    Decode(#[from] serde_json::Error),
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
}

/// Listing entry (no body).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostListing {
    pub posts: Vec<PostSummary>,
    pub pagination: Option<Pagination>,
}

impl PostListing {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// "Page X of Y" is shown only when there is more than one page.
    pub fn page_footer(&self) -> Option<String> {
        self.pagination
            .filter(|p| p.last_page > 1)
            .map(|p| format!("Page {} of {}", p.current_page, p.last_page))
    }

    pub fn prev_page(&self) -> Option<u32> {
        self.pagination
            .filter(|p| p.current_page > 1)
            .map(|p| p.current_page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.pagination
            .filter(|p| p.current_page < p.last_page)
            .map(|p| p.current_page + 1)
    }
}

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    #[serde(default)]
    data: Option<ListData>,
}

#[derive(Debug, Deserialize)]
struct ListData {
    #[serde(default)]
    posts: Vec<PostSummary>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct ShowEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Post>,
}

// =============================================================================
// Client
// =============================================================================

struct CachedPost {
    post: Post,
    fetched_at: Instant,
}

pub struct ContentClient {
    client: reqwest::Client,
    base_url: String,
    post_ttl: Duration,
    cache: Mutex<HashMap<String, CachedPost>>,
}

impl ContentClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        post_ttl: Duration,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            post_ttl,
            cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn from_config(config: &SiteConfig) -> Result<Self, FetchError> {
        Self::new(
            config.site.api_base_url.clone(),
            config.content.request_timeout(),
            config.content.post_cache_ttl(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/seg/seg/...` with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| FetchError::InvalidBaseUrl(e.to_string()))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.clone()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    pub async fn fetch_posts(&self, page: u32, per_page: u32) -> Result<PostListing, FetchError> {
        let mut url = self.endpoint(&["blog", "posts"])?;
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string())
            .append_pair("page", &page.to_string());

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }
        let bytes = response.bytes().await?;
        let envelope: ListEnvelope = serde_json::from_slice(&bytes)?;
        Ok(envelope
            .data
            .map(|d| PostListing {
                posts: d.posts,
                pagination: d.pagination,
            })
            .unwrap_or_default())
    }

    /// A page of summaries; empty on any failure.
    pub async fn list_posts(&self, page: u32, per_page: u32) -> PostListing {
        match self.fetch_posts(page.max(1), per_page).await {
            Ok(listing) => listing,
            Err(err) => {
                warn!(error = %err, page, "blog listing unavailable, rendering empty state");
                PostListing::default()
            }
        }
    }

    /// `Ok(None)` when the API reports the slug as missing.
    pub async fn fetch_post(&self, slug: &str) -> Result<Option<Post>, FetchError> {
        let url = self.endpoint(&["blog", "posts", slug])?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let envelope: ShowEnvelope = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => return Err(FetchError::Status(status.as_u16())),
            Err(err) => return Err(err.into()),
        };
        if !envelope.success {
            return Ok(None);
        }
        Ok(envelope.data)
    }

    fn cached(&self, slug: &str) -> Option<Post> {
        let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache
            .get(slug)
            .filter(|c| c.fetched_at.elapsed() < self.post_ttl)
            .map(|c| c.post.clone())
    }

    /// A single post, or `None` when missing or unreachable.
    pub async fn get_post(&self, slug: &str) -> Option<Post> {
        if let Some(post) = self.cached(slug) {
            debug!(slug, "post cache hit");
            return Some(post);
        }
        match self.fetch_post(slug).await {
            Ok(Some(post)) => {
                let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
                cache.retain(|_, c| c.fetched_at.elapsed() < self.post_ttl);
                cache.insert(
                    slug.to_string(),
                    CachedPost {
                        post: post.clone(),
                        fetched_at: Instant::now(),
                    },
                );
                Some(post)
            }
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, slug, "blog post unavailable, treating as not found");
                None
            }
        }
    }

    pub fn resolve_image(&self, image: Option<&str>) -> Option<String> {
        image.and_then(|i| resolve_image_url(&self.base_url, i))
    }
}

// =============================================================================
// Presentation helpers
// =============================================================================

fn strip_version_segment(base: &str) -> &str {
    match base.rsplit_once('/') {
        Some((head, last))
            if !head.ends_with('/')
                && last.len() > 1
                && last.starts_with('v')
                && last[1..].bytes().all(|b| b.is_ascii_digit()) =>
        {
            head
        }
        _ => base,
    }
}

/// Absolute image URL for a post's image reference.
///
/// Absolute `http…` references are used as-is. Relative references resolve
/// against the API host with its `/v{N}` segment removed, joined by exactly
/// one `/`. Blank references have no image.
pub fn resolve_image_url(api_base: &str, image: &str) -> Option<String> {
    let image = image.trim();
    if image.is_empty() {
        return None;
    }
    if image.starts_with("http") {
        return Some(image.to_string());
    }
    let base = strip_version_segment(api_base.trim_end_matches('/'));
    Some(format!("{}/{}", base, image.trim_start_matches('/')))
}

/// `March 5, 2025`, or empty when the timestamp is missing or unparseable.
pub fn format_date(iso: Option<&str>) -> String {
    let Some(iso) = iso.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };
    let date = DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(iso, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(iso, "%Y-%m-%d"));
    match date {
        Ok(d) => d.format("%B %-d, %Y").to_string(),
        Err(_) => String::new(),
    }
}

/// How a post body is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostBody {
    /// Body contains markup and is inserted as-is.
    Html(String),
    /// Plain text split on blank lines.
    Paragraphs(Vec<String>),
}

pub fn post_body(body: &str) -> PostBody {
    if body.contains('<') {
        return PostBody::Html(body.to_string());
    }
    let normalized = body.replace("\r\n", "\n");
    PostBody::Paragraphs(
        normalized
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{StubContentApi, unreachable_base_url};

    const BASE: &str = "https://api.goquickapp.com.ng/v1";

    fn client(base: &str) -> ContentClient {
        ContentClient::new(base, Duration::from_secs(5), Duration::from_secs(60)).unwrap()
    }

    // =========================================================================
    // Image resolution
    // =========================================================================

    #[test]
    fn relative_image_joins_with_one_slash() {
        for image in ["uploads/x.png", "/uploads/x.png"] {
            assert_eq!(
                resolve_image_url(BASE, image).as_deref(),
                Some("https://api.goquickapp.com.ng/uploads/x.png")
            );
        }
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        assert_eq!(
            resolve_image_url("https://api.example.com/v1/", "a.png").as_deref(),
            Some("https://api.example.com/a.png")
        );
    }

    #[test]
    fn absolute_image_is_kept() {
        let url = "https://cdn.example.com/img.jpg";
        assert_eq!(resolve_image_url(BASE, url).as_deref(), Some(url));
    }

    #[test]
    fn blank_image_has_no_url() {
        assert_eq!(resolve_image_url(BASE, "  "), None);
    }

    #[test]
    fn base_without_version_is_used_whole() {
        assert_eq!(
            resolve_image_url("http://localhost:8000/api", "x.png").as_deref(),
            Some("http://localhost:8000/api/x.png")
        );
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    #[test]
    fn dates_render_long_form() {
        assert_eq!(format_date(Some("2025-03-05T10:00:00Z")), "March 5, 2025");
        assert_eq!(format_date(Some("2024-12-25 08:30:00")), "December 25, 2024");
        assert_eq!(format_date(Some("2024-01-09")), "January 9, 2024");
        assert_eq!(format_date(Some("soon")), "");
        assert_eq!(format_date(None), "");
    }

    #[test]
    fn html_body_is_kept() {
        assert_eq!(post_body("<p>Hi</p>"), PostBody::Html("<p>Hi</p>".into()));
    }

    #[test]
    fn plain_body_splits_on_blank_lines() {
        assert_eq!(
            post_body("One\n\nTwo\r\n\r\n\n\nThree\n"),
            PostBody::Paragraphs(vec!["One".into(), "Two".into(), "Three".into()])
        );
    }

    #[test]
    fn page_footer_only_with_several_pages() {
        let mut listing = PostListing {
            posts: Vec::new(),
            pagination: Some(Pagination {
                current_page: 1,
                last_page: 1,
                per_page: 12,
                total: 3,
            }),
        };
        assert_eq!(listing.page_footer(), None);
        if let Some(p) = listing.pagination.as_mut() {
            p.last_page = 3;
            p.current_page = 2;
        }
        assert_eq!(listing.page_footer().as_deref(), Some("Page 2 of 3"));
        assert_eq!(listing.prev_page(), Some(1));
        assert_eq!(listing.next_page(), Some(3));
    }

    #[test]
    fn slug_is_percent_encoded_in_path() {
        let url = client(BASE).endpoint(&["blog", "posts", "a b/c"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.goquickapp.com.ng/v1/blog/posts/a%20b%2Fc"
        );
    }

    // =========================================================================
    // Against a stub API
    // =========================================================================

    #[tokio::test]
    async fn listing_failure_is_empty() {
        let listing = client(&unreachable_base_url().await).list_posts(1, 12).await;
        assert_eq!(listing, PostListing::default());
    }

    #[tokio::test]
    async fn listing_error_status_is_empty() {
        let api = StubContentApi::start().await;
        api.fail_listing();
        let listing = client(&api.base_url()).list_posts(1, 12).await;
        assert!(listing.is_empty());
        assert!(listing.pagination.is_none());
    }

    #[tokio::test]
    async fn listing_decodes_posts_and_pagination() {
        let api = StubContentApi::start().await;
        let listing = client(&api.base_url()).list_posts(1, 12).await;
        assert_eq!(listing.posts.len(), 2);
        assert_eq!(listing.posts[0].slug, "welcome");
        assert_eq!(listing.pagination.map(|p| p.total), Some(2));
        assert_eq!(api.last_query().as_deref(), Some("per_page=12&page=1"));
    }

    #[tokio::test]
    async fn empty_listing_is_not_an_error() {
        let api = StubContentApi::start().await;
        api.set_posts(Vec::new());
        let listing = client(&api.base_url()).list_posts(1, 12).await;
        assert!(listing.is_empty());
        assert!(listing.pagination.is_some());
    }

    #[tokio::test]
    async fn missing_slug_is_not_found() {
        let api = StubContentApi::start().await;
        assert_eq!(client(&api.base_url()).get_post("missing-slug").await, None);
    }

    #[tokio::test]
    async fn unreachable_post_is_not_found() {
        let c = client(&unreachable_base_url().await);
        assert_eq!(c.get_post("welcome").await, None);
    }

    #[tokio::test]
    async fn found_post_is_cached() {
        let api = StubContentApi::start().await;
        let c = client(&api.base_url());
        let first = c.get_post("welcome").await.unwrap();
        let second = c.get_post("welcome").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(api.detail_hits(), 1);
    }

    #[tokio::test]
    async fn expired_cache_entry_is_refetched() {
        let api = StubContentApi::start().await;
        let c = ContentClient::new(api.base_url(), Duration::from_secs(5), Duration::ZERO).unwrap();
        c.get_post("welcome").await.unwrap();
        c.get_post("welcome").await.unwrap();
        assert_eq!(api.detail_hits(), 2);
    }

    #[tokio::test]
    async fn expired_entries_are_evicted_on_insert() {
        let api = StubContentApi::start().await;
        let c = ContentClient::new(api.base_url(), Duration::from_secs(5), Duration::ZERO).unwrap();
        c.get_post("welcome").await.unwrap();
        c.get_post("runner-tips").await.unwrap();
        let cache = c.cache.lock().unwrap();
        assert_eq!(cache.len(), 1);
        assert!(cache.contains_key("runner-tips"));
    }

    #[tokio::test]
    async fn live_entries_survive_eviction() {
        let api = StubContentApi::start().await;
        let c = client(&api.base_url());
        c.get_post("welcome").await.unwrap();
        c.get_post("runner-tips").await.unwrap();
        assert_eq!(c.cache.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn not_found_is_not_cached() {
        let api = StubContentApi::start().await;
        let c = client(&api.base_url());
        assert!(c.get_post("nope").await.is_none());
        assert!(c.get_post("nope").await.is_none());
        assert_eq!(api.detail_hits(), 2);
    }
}
