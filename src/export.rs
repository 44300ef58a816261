//! Static export.
//!
//! Writes the site as plain files that any static host can serve. Blog
//! posts are fetched once at export time; every post reachable from the
//! listing gets its own page.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── 404.html
//! ├── about/index.html
//! ├── blog/
//! │   ├── index.html             # First listing page
//! │   └── welcome/index.html     # One directory per post
//! ├── careers/index.html
//! ├── ...
//! ├── robots.txt
//! ├── sitemap.xml
//! └── static/
//!     ├── site.css
//!     └── site.js
//! ```
//!
//! Server-only states are not exported: the FAQ renders unfiltered, the
//! careers page without its apply dialog, and both forms still post to
//! `/contact` and `/careers/apply`.

use crate::catalog::LegalDoc;
use crate::content::{ContentClient, Post, PostListing};
use crate::generate::{FormView, Renderer};
use crate::sitemap;
use crate::types::FaqCategory;
use chrono::NaiveDate;
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A rendered page and where it was written, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPage {
    pub title: String,
    pub file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub pages: Vec<ExportedPage>,
    pub posts: Vec<ExportedPage>,
    /// Sitemap, robots, and static assets.
    pub files: Vec<String>,
    /// Listing pages the content API did not return.
    pub missed_listing_pages: Vec<u32>,
}

struct Writer<'a> {
    root: &'a Path,
}

impl Writer<'_> {
    fn write(&self, rel: &str, contents: &str) -> Result<(), ExportError> {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, contents).map_err(|source| ExportError::Io { path, source })
    }

    fn page(&self, title: &str, rel: &str, markup: Markup) -> Result<ExportedPage, ExportError> {
        self.write(rel, &markup.into_string())?;
        Ok(ExportedPage {
            title: title.to_string(),
            file: rel.to_string(),
        })
    }
}

pub async fn export_site(
    renderer: &Renderer,
    content: &ContentClient,
    output: &Path,
    today: NaiveDate,
) -> Result<ExportReport, ExportError> {
    let out = Writer { root: output };
    let mut report = ExportReport::default();
    let per_page = renderer.config().content.per_page;

    let first = content.list_posts(1, per_page).await;
    let (posts, missed) = collect_posts(content, &first, per_page).await;
    report.missed_listing_pages = missed;

    let static_pages = [
        ("Home", "index.html", renderer.home()),
        ("About", "about/index.html", renderer.about()),
        ("FAQ", "faq/index.html", renderer.faq(FaqCategory::All)),
        ("Careers", "careers/index.html", renderer.careers(None)),
        (
            "Contact",
            "contact/index.html",
            renderer.contact(&FormView::default()),
        ),
        ("How it works", "how-it-works/index.html", renderer.how_it_works()),
        ("Blog", "blog/index.html", renderer.blog_index(&first)),
        (
            LegalDoc::Privacy.title(),
            "privacy/index.html",
            renderer.legal(LegalDoc::Privacy, today),
        ),
        (
            LegalDoc::Terms.title(),
            "terms/index.html",
            renderer.legal(LegalDoc::Terms, today),
        ),
        ("Not found", "404.html", renderer.not_found()),
    ];
    for (title, rel, markup) in static_pages {
        report.pages.push(out.page(title, rel, markup)?);
    }

    for post in &posts {
        let rel = format!("blog/{}/index.html", post.slug);
        report
            .posts
            .push(out.page(&post.title, &rel, renderer.blog_post(post))?);
    }

    let site_url = &renderer.config().site.site_url;
    let assets = renderer.assets();
    let files = [
        ("sitemap.xml", sitemap::render_sitemap(site_url, today)),
        ("robots.txt", sitemap::render_robots(site_url)),
        ("static/site.css", assets.css().to_string()),
        ("static/site.js", assets.js().to_string()),
    ];
    for (rel, body) in files {
        out.write(rel, &body)?;
        report.files.push(rel.to_string());
    }

    info!(
        pages = report.pages.len(),
        posts = report.posts.len(),
        output = %output.display(),
        "export complete"
    );
    Ok(report)
}

/// Full posts for every listing page. Posts whose detail fetch fails are
/// skipped; their cards still link to the server route.
async fn collect_posts(
    content: &ContentClient,
    first: &PostListing,
    per_page: u32,
) -> (Vec<Post>, Vec<u32>) {
    let last_page = first.pagination.map_or(1, |p| p.last_page.max(1));
    let mut summaries = first.posts.clone();
    let mut missed = Vec::new();
    for page in 2..=last_page {
        let listing = content.list_posts(page, per_page).await;
        if listing.is_empty() {
            missed.push(page);
        }
        summaries.extend(listing.posts);
    }

    let mut posts = Vec::with_capacity(summaries.len());
    for summary in summaries {
        if posts.iter().any(|p: &Post| p.slug == summary.slug) {
            continue;
        }
        match content.get_post(&summary.slug).await {
            Some(post) => posts.push(post),
            None => warn!(slug = %summary.slug, "post listed but not fetched, skipping"),
        }
    }
    (posts, missed)
}
