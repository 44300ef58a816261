//! `sitemap.xml` and `robots.txt`.

use chrono::NaiveDate;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SitemapPage {
    /// Path below the site root, without a leading slash. Empty is the root.
    pub path: &'static str,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

const fn page(path: &'static str, change_frequency: ChangeFrequency, priority: f32) -> SitemapPage {
    SitemapPage {
        path,
        change_frequency,
        priority,
    }
}

pub const STATIC_PAGES: [SitemapPage; 9] = [
    page("", ChangeFrequency::Weekly, 1.0),
    page("about", ChangeFrequency::Monthly, 0.9),
    page("contact", ChangeFrequency::Monthly, 0.9),
    page("careers", ChangeFrequency::Weekly, 0.9),
    page("how-it-works", ChangeFrequency::Monthly, 0.9),
    page("faq", ChangeFrequency::Monthly, 0.9),
    page("blog", ChangeFrequency::Weekly, 0.8),
    page("privacy", ChangeFrequency::Yearly, 0.4),
    page("terms", ChangeFrequency::Yearly, 0.4),
];

fn xml_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Absolute URL of a sitemap page. The root is the bare base.
pub fn page_url(site_url: &str, path: &str) -> String {
    let base = site_url.trim_end_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

/// Every static page, stamped with `lastmod`.
pub fn render_sitemap(site_url: &str, lastmod: NaiveDate) -> String {
    let mut body = String::with_capacity(1024);
    body.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    body.push('\n');
    body.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    body.push('\n');
    let date = lastmod.format("%Y-%m-%d");
    for p in &STATIC_PAGES {
        // Writing to a String cannot fail.
        let _ = writeln!(
            body,
            "  <url><loc>{}</loc><lastmod>{date}</lastmod><changefreq>{}</changefreq><priority>{:.1}</priority></url>",
            xml_escape(&page_url(site_url, p.path)),
            p.change_frequency.as_str(),
            p.priority,
        );
    }
    body.push_str("</urlset>\n");
    body
}

pub fn render_robots(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        site_url.trim_end_matches('/')
    )
}
