//! `site.toml` loading and validation.
//!
//! Handles loading, validating, and merging `site.toml`. Configuration is
//! layered: stock defaults, then the user's `site.toml`, then a handful of
//! environment variables for deploy-time values.
//!
//! ## Configuration Options
//!
//! ```toml
//! # Every key may be omitted; the values below are what you get
//!
//! [site]
//! name = "GoQuick"
//! site_url = "https://goquickapp.com.ng"        # trailing slash is stripped
//! api_base_url = "https://api.goquickapp.com.ng/v1"
//! app_download_url = "/"
//!
//! [site.contact]
//! email = "support@goquickapp.com.ng"
//! phone = "+234 (0) 906 906 3200"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//!
//! [content]
//! per_page = 12             # Blog listing page size
//! post_cache_secs = 60      # How long a fetched post is reused
//! request_timeout_secs = 10
//!
//! [forms]
//! max_cv_mb = 5
//! auto_close_ms = 2000      # Career modal closes this long after success
//!
//! [theme]
//! primary = "#16a34a"
//! primary_hover = "#15803d"
//!
//! [[stats]]
//! label = "Errands completed"
//! value = 10000
//! format = "compact"        # "compact" renders 10K+, "number" renders 10000+
//! suffix = "+"
//! ```
//!
//! ## Environment Overrides
//!
//! `SITE_URL`, `API_BASE_URL`, `APP_DOWNLOAD_URL`, `HOST` and `PORT` replace
//! the matching keys after the file is merged. Blank values are ignored.
//!
//! A misspelled key is an error, not a silent default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Identity, URLs, and contact details.
    pub site: SiteInfo,
    /// Listen address for `serve`.
    pub server: ServerConfig,
    /// Remote blog API settings.
    pub content: ContentConfig,
    /// Form limits and timings.
    pub forms: FormsConfig,
    /// Brand colours.
    pub theme: ThemeConfig,
    /// Counters shown in the home stats block.
    pub stats: Vec<Stat>,
}

impl SiteConfig {
    /// Reject URLs and limits the server cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, url) in [
            ("site.site_url", &self.site.site_url),
            ("site.api_base_url", &self.site.api_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be an absolute http(s) URL, got {url:?}"
                )));
            }
        }
        if self.content.per_page == 0 || self.content.per_page > 100 {
            return Err(ConfigError::Validation(
                "content.per_page must be 1-100".into(),
            ));
        }
        if self.content.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "content.request_timeout_secs must be non-zero".into(),
            ));
        }
        if self.forms.max_cv_mb == 0 {
            return Err(ConfigError::Validation(
                "forms.max_cv_mb must be non-zero".into(),
            ));
        }
        if self.stats.iter().any(|s| s.label.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "stats entries need a label".into(),
            ));
        }
        Ok(())
    }
}

/// Identity, URLs, and contact details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub name: String,
    pub description: String,
    /// Public origin, no trailing slash. Used for canonical links and the sitemap.
    pub site_url: String,
    /// Base of the remote API, including its version segment.
    pub api_base_url: String,
    /// Target of the "Download the app" buttons.
    pub app_download_url: String,
    pub app_store_url: String,
    pub play_store_url: String,
    pub contact: ContactInfo,
    pub social: SocialLinks,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "GoQuick".to_string(),
            description: "GoQuick helps you book trusted runners for pickups, deliveries, and daily tasks across your city.".to_string(),
            site_url: "https://goquickapp.com.ng".to_string(),
            api_base_url: "https://api.goquickapp.com.ng/v1".to_string(),
            app_download_url: "/".to_string(),
            app_store_url: "https://apps.apple.com/app/goquick/id".to_string(),
            play_store_url: "https://play.google.com/store/apps/details?id=com.goquick.app"
                .to_string(),
            contact: ContactInfo::default(),
            social: SocialLinks::default(),
        }
    }
}

impl SiteInfo {
    /// Absolute URL for a site path such as `/about`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.site_url, path.trim_start_matches('/'))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "support@goquickapp.com.ng".to_string(),
            phone: "+234 (0) 906 906 3200".to_string(),
        }
    }
}

/// Social profile links. `"#"` renders an inert link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialLinks {
    pub whatsapp: String,
    pub facebook: String,
    pub twitter: String,
    pub tiktok: String,
    pub instagram: String,
    pub linkedin: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            whatsapp: "#".to_string(),
            facebook: "#".to_string(),
            twitter: "https://twitter.com/goquickapp".to_string(),
            tiktok: "#".to_string(),
            instagram: "#".to_string(),
            linkedin: "#".to_string(),
        }
    }
}

impl SocialLinks {
    /// `(label, href)` pairs in footer order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("WhatsApp", &self.whatsapp),
            ("Facebook", &self.facebook),
            ("X (Twitter)", &self.twitter),
            ("TikTok", &self.tiktok),
            ("Instagram", &self.instagram),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    pub per_page: u32,
    pub post_cache_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            per_page: 12,
            post_cache_secs: 60,
            request_timeout_secs: 10,
        }
    }
}

impl ContentConfig {
    pub fn post_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.post_cache_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormsConfig {
    pub max_cv_mb: u64,
    pub auto_close_ms: u64,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            max_cv_mb: 5,
            auto_close_ms: 2000,
        }
    }
}

impl FormsConfig {
    pub fn max_cv_bytes(&self) -> u64 {
        self.max_cv_mb * 1024 * 1024
    }

    pub fn auto_close(&self) -> Duration {
        Duration::from_millis(self.auto_close_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub primary: String,
    pub primary_hover: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#16a34a".to_string(),
            primary_hover: "#15803d".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatFormat {
    /// `12K+` for values of a thousand or more.
    Compact,
    #[default]
    Number,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub label: String,
    pub value: u64,
    #[serde(default)]
    pub format: StatFormat,
    #[serde(default)]
    pub suffix: String,
}

pub fn default_stats() -> Vec<Stat> {
    vec![
        Stat {
            label: "Errands completed".to_string(),
            value: 10_000,
            format: StatFormat::Compact,
            suffix: "+".to_string(),
        },
        Stat {
            label: "Verified runners".to_string(),
            value: 500,
            format: StatFormat::Number,
            suffix: "+".to_string(),
        },
        Stat {
            label: "Customer satisfaction".to_string(),
            value: 98,
            format: StatFormat::Number,
            suffix: "%".to_string(),
        },
    ]
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Stats are seeded here rather than in `SiteConfig::default()` so that a
/// user `[[stats]]` array replaces the stock list instead of appending to it.
pub fn stock_defaults_value() -> toml::Value {
    let config = SiteConfig {
        stats: default_stats(),
        ..SiteConfig::default()
    };
    toml::Value::try_from(config).expect("default config must serialize")
}

/// Deep-merge `overlay` into `base`.
///
/// Tables merge per key; any other overlay value replaces the base value
/// outright, and base keys missing from the overlay survive.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Apply deploy-time overrides. `lookup` is `std::env::var(..).ok()` in
/// production; tests pass a closure over a map.
pub fn apply_env_overrides<F>(config: &mut SiteConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| {
        lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    if let Some(url) = var("SITE_URL") {
        config.site.site_url = url;
    }
    if let Some(url) = var("API_BASE_URL") {
        config.site.api_base_url = url;
    }
    if let Some(url) = var("APP_DOWNLOAD_URL") {
        config.site.app_download_url = url;
    }
    if let Some(host) = var("HOST") {
        config.server.host = host;
    }
    if let Some(port) = var("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| ConfigError::Validation(format!("PORT must be a port number, got {port:?}")))?;
    }
    Ok(())
}

/// Merge an optional overlay onto the stock defaults, apply environment
/// overrides, normalise, and validate.
pub fn resolve_config<F>(overlay: Option<toml::Value>, env: F) -> Result<SiteConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let mut config: SiteConfig = merged.try_into()?;
    apply_env_overrides(&mut config, env)?;
    normalize(&mut config);
    config.validate()?;
    Ok(config)
}

fn normalize(config: &mut SiteConfig) {
    let trimmed = config.site.site_url.trim().trim_end_matches('/').to_string();
    config.site.site_url = trimmed;
    let api = config.site.api_base_url.trim().trim_end_matches('/').to_string();
    config.site.api_base_url = api;
}

/// Load config from `path`, merged over stock defaults, with process
/// environment overrides. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(path)?;
    resolve_config(overlay, |key| std::env::var(key).ok())
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# GoQuick Site Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Environment variables SITE_URL, API_BASE_URL, APP_DOWNLOAD_URL, HOST and
# PORT override the matching keys at startup.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
name = "GoQuick"
description = "GoQuick helps you book trusted runners for pickups, deliveries, and daily tasks across your city."

# Public origin used for canonical links and sitemap.xml (no trailing slash).
site_url = "https://goquickapp.com.ng"

# Remote API base. Blog posts and contact messages go here.
api_base_url = "https://api.goquickapp.com.ng/v1"

# Where "Download the app" buttons point.
app_download_url = "/"
app_store_url = "https://apps.apple.com/app/goquick/id"
play_store_url = "https://play.google.com/store/apps/details?id=com.goquick.app"

[site.contact]
email = "support@goquickapp.com.ng"
phone = "+234 (0) 906 906 3200"

# "#" renders an inert link.
[site.social]
whatsapp = "#"
facebook = "#"
twitter = "https://twitter.com/goquickapp"
tiktok = "#"
instagram = "#"
linkedin = "#"

# ---------------------------------------------------------------------------
# HTTP server
# ---------------------------------------------------------------------------
[server]
host = "0.0.0.0"
port = 3000

# ---------------------------------------------------------------------------
# Blog content
# ---------------------------------------------------------------------------
[content]
# Posts per listing page.
per_page = 12

# Seconds a fetched post is reused before asking the API again.
post_cache_secs = 60

# Give up on the content API after this many seconds.
request_timeout_secs = 10

# ---------------------------------------------------------------------------
# Forms
# ---------------------------------------------------------------------------
[forms]
# Largest accepted CV upload, in megabytes.
max_cv_mb = 5

# The career application dialog closes this long after a success.
auto_close_ms = 2000

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
primary = "#16a34a"
primary_hover = "#15803d"

# ---------------------------------------------------------------------------
# Home page counters
# ---------------------------------------------------------------------------
# format = "compact" renders 10000 as 10K; "number" renders it as-is.
[[stats]]
label = "Errands completed"
value = 10000
format = "compact"
suffix = "+"

[[stats]]
label = "Verified runners"
value = 500
format = "number"
suffix = "+"

[[stats]]
label = "Customer satisfaction"
value = 98
format = "number"
suffix = "%"
"##
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --primary: {primary};
    --primary-hover: {primary_hover};
}}"#,
        primary = theme.primary,
        primary_hover = theme.primary_hover,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config_has_site_identity() {
        let config = SiteConfig::default();
        assert_eq!(config.site.name, "GoQuick");
        assert_eq!(config.site.site_url, "https://goquickapp.com.ng");
        assert_eq!(config.site.api_base_url, "https://api.goquickapp.com.ng/v1");
        assert_eq!(config.site.contact.email, "support@goquickapp.com.ng");
    }

    #[test]
    fn default_limits() {
        let config = SiteConfig::default();
        assert_eq!(config.server.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.content.per_page, 12);
        assert_eq!(config.content.post_cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.forms.max_cv_bytes(), 5 * 1024 * 1024);
        assert_eq!(config.forms.auto_close(), Duration::from_millis(2000));
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[server]
port = 8080
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.content.per_page, 12);
    }

    #[test]
    fn url_for_joins_with_single_slash() {
        let site = SiteInfo::default();
        assert_eq!(site.url_for("/about"), "https://goquickapp.com.ng/about");
        assert_eq!(site.url_for("faq"), "https://goquickapp.com.ng/faq");
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let overlay = load_raw_config(&tmp.path().join("site.toml")).unwrap();
        assert!(overlay.is_none());
        let config = resolve_config(overlay, no_env).unwrap();
        assert_eq!(config.site.name, "GoQuick");
        assert_eq!(config.stats.len(), 3);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        fs::write(
            &path,
            r#"
[site]
site_url = "https://staging.example.com/"

[content]
per_page = 6
"#,
        )
        .unwrap();

        let config = resolve_config(load_raw_config(&path).unwrap(), no_env).unwrap();
        assert_eq!(config.site.site_url, "https://staging.example.com");
        assert_eq!(config.content.per_page, 6);
        // Unspecified values keep their defaults
        assert_eq!(config.site.name, "GoQuick");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();
        assert!(matches!(load_raw_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn user_stats_replace_stock_stats() {
        let overlay: toml::Value = toml::from_str(
            r#"
[[stats]]
label = "Cities"
value = 1
"#,
        )
        .unwrap();
        let config = resolve_config(Some(overlay), no_env).unwrap();
        assert_eq!(config.stats.len(), 1);
        assert_eq!(config.stats[0].label, "Cities");
        assert_eq!(config.stats[0].format, StatFormat::Number);
    }

    // =========================================================================
    // Environment override tests
    // =========================================================================

    #[test]
    fn env_overrides_replace_file_values() {
        let env = env_of(&[
            ("SITE_URL", "https://preview.example.com/"),
            ("API_BASE_URL", "http://localhost:8000/v1"),
            ("PORT", "4000"),
        ]);
        let config = resolve_config(None, env).unwrap();
        assert_eq!(config.site.site_url, "https://preview.example.com");
        assert_eq!(config.site.api_base_url, "http://localhost:8000/v1");
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let env = env_of(&[("SITE_URL", "   "), ("APP_DOWNLOAD_URL", "")]);
        let config = resolve_config(None, env).unwrap();
        assert_eq!(config.site.site_url, "https://goquickapp.com.ng");
        assert_eq!(config.site.app_download_url, "/");
    }

    #[test]
    fn bad_port_is_validation_error() {
        let env = env_of(&[("PORT", "eighty")]);
        let err = resolve_config(None, env).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(1));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r#"
[site.contact]
email = "a@example.com"
phone = "1"
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[site.contact]
phone = "2"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let contact = merged.get("site").unwrap().get("contact").unwrap();
        assert_eq!(contact.get("email").unwrap().as_str(), Some("a@example.com"));
        assert_eq!(contact.get("phone").unwrap().as_str(), Some("2"));
    }

    // =========================================================================
    // Unknown key rejection and validation
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[content]\nper_pag = 3\n");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[sever]\nport = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_relative_site_url() {
        let mut config = SiteConfig::default();
        config.site.site_url = "goquickapp.com.ng".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_per_page() {
        let mut config = SiteConfig::default();
        config.content.per_page = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_cv_limit() {
        let mut config = SiteConfig::default();
        config.forms.max_cv_mb = 0;
        assert!(config.validate().is_err());
    }

    // =========================================================================
    // Stock config
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let value: toml::Value = toml::from_str(stock_config_toml()).unwrap();
        let config = resolve_config(Some(value), no_env).unwrap();
        let defaults = resolve_config(None, no_env).unwrap();
        assert_eq!(config.site.site_url, defaults.site.site_url);
        assert_eq!(config.server.port, defaults.server.port);
        assert_eq!(config.stats.len(), defaults.stats.len());
        assert_eq!(config.theme.primary, defaults.theme.primary);
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let value = stock_defaults_value();
        for key in ["site", "server", "content", "forms", "theme", "stats"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn generate_theme_css_sets_primary_vars() {
        let css = generate_theme_css(&ThemeConfig::default());
        assert!(css.contains("--primary: #16a34a"));
        assert!(css.contains("--primary-hover: #15803d"));
    }
}
