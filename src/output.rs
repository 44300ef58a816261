//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Site
//!     GoQuick → https://goquickapp.com.ng
//!     API: https://api.goquickapp.com.ng/v1
//!
//! Navigation
//! 001 Home → /
//! 002 Features → /#services (section)
//! 003 Company
//!     001 About → /about
//!
//! Stats
//! 001 Errands completed: 10K+
//! ```
//!
//! ## Build
//!
//! ```text
//! Pages
//! 001 Home → index.html
//! 002 About → about/index.html
//!
//! Blog posts
//! 001 Welcome to GoQuick → blog/welcome/index.html
//!
//! Files
//!     sitemap.xml
//!     static/site.css
//!
//! Exported 10 pages, 1 post → dist
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::SiteConfig;
use crate::export::{ExportReport, ExportedPage};
use crate::nav;
use crate::types::NavItem;
use crate::widgets::counter::format_stat;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn target_line(index: usize, label: &str, target: &str) -> String {
    let marker = if nav::section_id_from_href(target).is_some() && target != "/" {
        " (section)"
    } else {
        ""
    };
    format!(
        "{} {} \u{2192} {}{}",
        format_index(index),
        label,
        nav::resolve_href(target),
        marker
    )
}

fn page_lines(pages: &[ExportedPage], lines: &mut Vec<String>) {
    for (i, page) in pages.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            page.title,
            page.file
        ));
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(config: &SiteConfig, items: &[NavItem]) -> Vec<String> {
    let site = &config.site;
    let mut lines = vec![
        "Site".to_string(),
        format!("{}{} \u{2192} {}", indent(1), site.name, site.site_url),
        format!("{}API: {}", indent(1), site.api_base_url),
        String::new(),
        "Navigation".to_string(),
    ];

    for (i, item) in items.iter().enumerate() {
        match item {
            NavItem::Link { label, target } => lines.push(target_line(i + 1, label, target)),
            NavItem::Submenu { label, children } => {
                lines.push(format!("{} {}", format_index(i + 1), label));
                for (j, child) in nav::unique_children(children).into_iter().enumerate() {
                    lines.push(format!(
                        "{}{}",
                        indent(1),
                        target_line(j + 1, &child.label, &child.target)
                    ));
                }
            }
        }
    }

    let sections: Vec<String> = nav::home_section_ids(items)
        .iter()
        .map(|s| s.to_string())
        .collect();
    lines.push(format!("{}Tracked sections: {}", indent(1), sections.join(", ")));

    if !config.stats.is_empty() {
        lines.push(String::new());
        lines.push("Stats".to_string());
        for (i, stat) in config.stats.iter().enumerate() {
            lines.push(format!(
                "{} {}: {}",
                format_index(i + 1),
                stat.label,
                format_stat(stat)
            ));
        }
    }

    lines.push(String::new());
    lines.push("Forms".to_string());
    lines.push(format!(
        "{}CV limit: {}MB, dialog closes after {}ms",
        indent(1),
        config.forms.max_cv_mb,
        config.forms.auto_close_ms
    ));
    lines.push(format!(
        "{}Contact endpoint: {}/contact",
        indent(1),
        site.api_base_url
    ));
    lines
}

pub fn print_check_output(config: &SiteConfig, items: &[NavItem]) {
    for line in format_check_output(config, items) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_export_output(report: &ExportReport, output: &Path) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    page_lines(&report.pages, &mut lines);

    if !report.posts.is_empty() {
        lines.push(String::new());
        lines.push("Blog posts".to_string());
        page_lines(&report.posts, &mut lines);
    }

    if !report.files.is_empty() {
        lines.push(String::new());
        lines.push("Files".to_string());
        for file in &report.files {
            lines.push(format!("{}{}", indent(1), file));
        }
    }

    if !report.missed_listing_pages.is_empty() {
        let pages: Vec<String> = report
            .missed_listing_pages
            .iter()
            .map(u32::to_string)
            .collect();
        lines.push(String::new());
        lines.push(format!(
            "Warning: blog listing pages not fetched: {}",
            pages.join(", ")
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Exported {}, {} \u{2192} {}",
        plural(report.pages.len(), "page", "pages"),
        plural(report.posts.len(), "post", "posts"),
        output.display()
    ));
    lines
}

pub fn print_export_output(report: &ExportReport, output: &Path) {
    for line in format_export_output(report, output) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
