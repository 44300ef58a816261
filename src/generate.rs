//! HTML page rendering.
//!
//! Every page is rendered server-side with [maud](https://maud.lambda.xyz/).
//! Interactive widgets are rendered in their initial state (drawer closed,
//! first FAQ answer open, counters at their final values) and carry `data-*`
//! attributes that `static/site.js` reads to drive the same state machines
//! in the browser. Pages work without JavaScript.
//!
//! ## Pages
//!
//! | Path | Renderer |
//! |------|----------|
//! | `/` | [`Renderer::home`] |
//! | `/about` | [`Renderer::about`] |
//! | `/faq` | [`Renderer::faq`] |
//! | `/careers` | [`Renderer::careers`] |
//! | `/contact` | [`Renderer::contact`] |
//! | `/how-it-works` | [`Renderer::how_it_works`] |
//! | `/blog`, `/blog/{slug}` | [`Renderer::blog_index`], [`Renderer::blog_post`] |
//! | `/privacy`, `/terms` | [`Renderer::legal`] |
//! | anything else | [`Renderer::not_found`] |
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time and served from `/static/`:
//! - `static/site.css`: base styles (theme colours prepended from config)
//! - `static/site.js`: nav drawer, dropdowns, accordion, typing word,
//!   counters, section tracking
//!
//! Asset URLs carry a content hash (`?v=`) so a changed build is never
//! served from a stale cache.

use crate::catalog::{
    self, BENEFITS, CAREERS_EMAIL, FAQS, LegalDoc, ROLES, RUNNER_PERKS, RUNNER_STEPS, SERVICES,
    STEPS, Step, TOPIC_OPTIONS, WHAT_WE_DO, WHY_CHOOSE_US,
};
use crate::config::{self, SiteConfig};
use crate::content::{self, Post, PostBody, PostListing};
use crate::form::{FieldSet, FormStatus, FormSubmission};
use crate::nav::{self, NavError};
use crate::section::{ActiveState, ObservedBand};
use crate::types::{FaqCategory, NavIcon, NavItem, SectionId};
use crate::widgets::FaqAccordion;
use crate::widgets::counter::{self, format_stat};
use crate::widgets::dropdown::Dropdown;
use crate::widgets::typing::{TypingTimings, WORDS};
use chrono::{Datelike, NaiveDate, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use sha2::{Digest, Sha256};
use std::time::Duration;

const CSS_STATIC: &str = include_str!("../static/site.css");
const JS: &str = include_str!("../static/site.js");

/// Stylesheet and script with a shared content hash.
#[derive(Debug, Clone)]
pub struct Assets {
    css: String,
    version: String,
}

impl Assets {
    pub fn new(theme: &config::ThemeConfig) -> Self {
        let css = format!("{}\n\n{}", config::generate_theme_css(theme), CSS_STATIC);
        let mut hasher = Sha256::new();
        hasher.update(css.as_bytes());
        hasher.update(b"\0");
        hasher.update(JS.as_bytes());
        let digest = format!("{:x}", hasher.finalize());
        Self {
            css,
            version: digest[..12].to_string(),
        }
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn js(&self) -> &'static str {
        JS
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn css_href(&self) -> String {
        format!("/static/site.css?v={}", self.version)
    }

    pub fn js_href(&self) -> String {
        format!("/static/site.js?v={}", self.version)
    }
}

/// A form re-rendered after a server-side submission.
#[derive(Debug, Clone, Default)]
pub struct FormView {
    pub submission: FormSubmission,
    pub fields: FieldSet,
}

/// The careers page with its apply dialog open.
#[derive(Debug, Clone, Default)]
pub struct ApplyView {
    pub position: String,
    pub form: FormView,
    /// Set after a successful application; the dialog closes itself.
    pub close_after: Option<Duration>,
}

struct PageMeta<'a> {
    /// `None` uses the site-wide default title.
    title: Option<&'a str>,
    description: &'a str,
    path: &'a str,
}

/// Renders pages for one site configuration and nav tree.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: SiteConfig,
    nav: Vec<NavItem>,
    assets: Assets,
    year: i32,
}

impl Renderer {
    pub fn new(config: SiteConfig, nav: Vec<NavItem>) -> Result<Self, NavError> {
        nav::validate_nav(&nav)?;
        let assets = Assets::new(&config.theme);
        Ok(Self {
            config,
            nav,
            assets,
            year: Utc::now().year(),
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn nav(&self) -> &[NavItem] {
        &self.nav
    }

    // ========================================================================
    // Layout
    // ========================================================================

    fn document(&self, meta: &PageMeta, body_attrs: Option<&SectionTracking>, content: Markup) -> Markup {
        let site = &self.config.site;
        let title = match meta.title {
            Some(t) => format!("{t} | {}", site.name),
            None => format!("Fast, Trusted Errand Delivery | {}", site.name),
        };
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (title) }
                    meta name="description" content=(meta.description);
                    link rel="canonical" href=(site.url_for(meta.path));
                    meta property="og:title" content=(title);
                    meta property="og:site_name" content=(site.name);
                    link rel="stylesheet" href=(self.assets.css_href());
                    script src=(self.assets.js_href()) defer {}
                }
                body data-sections=[body_attrs.map(|t| t.sections.as_str())]
                    data-root-margin=[body_attrs.map(|t| t.root_margin.as_str())] {
                    (self.header(meta.path))
                    (content)
                    (self.footer())
                }
            }
        }
    }

    /// Header with desktop nav and the mobile drawer, drawer closed.
    fn header(&self, path: &str) -> Markup {
        let active = initial_active_state(path);
        html! {
            header.site-header {
                div.header-inner {
                    a.brand href="/#home" aria-label={ (self.config.site.name) " home" } {
                        (self.config.site.name)
                    }
                    nav.desktop-nav aria-label="Main" {
                        ul {
                            @for item in &self.nav {
                                (render_desktop_item(item, path, &active))
                            }
                        }
                    }
                    a.header-cta href=(self.config.site.app_download_url) { "Download App" }
                    button.nav-hamburger type="button" aria-controls="mobile-drawer"
                        aria-expanded="false" aria-label="Open menu" data-drawer-toggle {
                        span.hamburger-line {}
                        span.hamburger-line {}
                        span.hamburger-line {}
                    }
                }
                div #mobile-drawer .drawer hidden {
                    ul {
                        @for item in &self.nav {
                            (render_mobile_item(item, path, &active))
                        }
                    }
                }
            }
        }
    }

    fn footer(&self) -> Markup {
        let site = &self.config.site;
        let quick_links = [
            ("Features", "/#services"),
            ("For Runners", "/#for-runners"),
            ("How It Works", "/how-it-works"),
            ("About Us", "/about"),
            ("Careers", "/careers"),
            ("Blog", "/blog"),
        ];
        let legal_links = [("Privacy Policy", "/privacy"), ("Terms of Service", "/terms")];
        html! {
            footer.site-footer {
                div.footer-grid {
                    div.footer-brand {
                        a.brand href="/#home" { (site.name) }
                        p { (site.description) }
                        div.social aria-label="Social media" {
                            @for (label, href) in site.social.entries() {
                                a href=(href) target="_blank" rel="noopener noreferrer" aria-label=(label) {
                                    (label)
                                }
                            }
                        }
                    }
                    div.footer-column {
                        h3 { "Quick Links" }
                        @for (label, href) in quick_links {
                            a href=(href) { (label) }
                        }
                    }
                    div.footer-column {
                        h3 { "Legal" }
                        @for (label, href) in legal_links {
                            a href=(href) { (label) }
                        }
                    }
                    div.footer-column {
                        h3 { "Contact" }
                        p {
                            "Email: "
                            a href={ "mailto:" (site.contact.email) } { (site.contact.email) }
                        }
                        p { (site.contact.phone) }
                        p.footer-download { "Download App" }
                        (self.store_buttons())
                    }
                }
                p.copyright { "© " (self.year) " " (site.name) ". All rights reserved." }
            }
        }
    }

    fn store_buttons(&self) -> Markup {
        let site = &self.config.site;
        html! {
            div.store-buttons {
                a.store-button href=(site.app_store_url) target="_blank" rel="noopener noreferrer"
                    aria-label="Download on the App Store" { "App Store" }
                a.store-button href=(site.play_store_url) target="_blank" rel="noopener noreferrer"
                    aria-label="Get it on Google Play" { "Google Play" }
            }
        }
    }

    fn cta_section(&self) -> Markup {
        html! {
            section.cta aria-labelledby="cta-heading" {
                h2 #cta-heading { "Download the app. Get errands done." }
                p { "Book trusted runners for pickups, deliveries, and daily tasks. Save time. Get it done." }
                (self.store_buttons())
            }
        }
    }

    // ========================================================================
    // Pages
    // ========================================================================

    pub fn home(&self) -> Markup {
        let tracking = SectionTracking::for_nav(&self.nav, &ObservedBand::default());
        let timings = TypingTimings::default();
        let stats = &self.config.stats;
        let content = html! {
            main.home {
                section #home .hero {
                    div.hero-copy {
                        h1 {
                            "Got "
                            span.typing-word
                                data-words=(WORDS.join(","))
                                data-type-ms=(millis(timings.type_delay))
                                data-pause-ms=(millis(timings.pause))
                                data-delete-ms=(millis(timings.delete_delay)) {
                                (WORDS[0])
                            }
                            "?"
                        }
                        p.hero-tagline { "Stop Wasting Time." br; "Get it done ASAP." }
                        p.lead { "Get errands done fast: grocery shopping, deliveries, queues & more, right here in Lagos." }
                        (self.store_buttons())
                    }
                }
                section #about .band {
                    h2 { "Time is valuable. Get errands done ASAP with " (self.config.site.name) "." }
                    p { "Between work, traffic, family, and daily responsibilities, simple errands can consume hours of your day." }
                    p { (self.config.site.name) " is built for modern living. We connect you with reliable errand runners in your city who handle everyday tasks quickly and professionally." }
                    p { (self.config.site.name) " helps you reclaim your time with just a few taps." }
                }
                section #steps {
                    h2 { "Get Your Errands Done in 6 Simple Steps" }
                    (render_steps(&STEPS, false))
                    p.slogan { "Less stress. Less waiting. More done." }
                }
                @if !stats.is_empty() {
                    section #stats .stats aria-label="Platform stats"
                        data-duration-ms=(millis(counter::DURATION)) {
                        @for stat in stats {
                            div.stat {
                                span.stat-value
                                    data-target=(stat.value)
                                    data-format=(stat_format_attr(stat.format))
                                    data-suffix=(stat.suffix) {
                                    (format_stat(stat))
                                }
                                span.stat-label { (stat.label) }
                            }
                        }
                    }
                }
                section #services .band {
                    h2 { "Your Personal Errand Service, right in your pocket" }
                    p { (self.config.site.name) " is your trusted errand service app that connects you with reliable runners for everyday tasks quickly and stress-free." }
                    div.service-cards {
                        @for service in SERVICES {
                            article.service-card { h4 { (service) } }
                        }
                    }
                }
                section #for-runners .band {
                    h2 { "Earn Money Running Errands, On Your Schedule" }
                    p { "Turn your bike, car, or free time into steady income with our flexible errand runner app." }
                    ul.checklist {
                        @for (headline, detail) in RUNNER_PERKS {
                            li { strong { (headline) } " : " (detail) }
                        }
                    }
                    p { "Join one of the fastest growing errand and delivery partner networks in your city." }
                    a.button href=(self.config.site.app_download_url) { "Become a Runner" }
                }
                (self.cta_section())
            }
        };
        let meta = PageMeta {
            title: Some("Book Reliable Runners For Everyday Tasks"),
            description: "Get errands done faster with GoQuick. Trusted runners, real-time tracking, secure payment, from pickup to delivery.",
            path: "/",
        };
        self.document(&meta, Some(&tracking), content)
    }

    pub fn about(&self) -> Markup {
        let name = &self.config.site.name;
        let content = html! {
            main.page {
                section.hero-panel aria-labelledby="about-hero-heading" {
                    h1 #about-hero-heading { "About " (name) }
                    p { "We're building the go-to platform for getting everyday errands done so you can focus on what matters most." }
                    (self.store_buttons())
                }
                section {
                    h2 { "Who we are" }
                    p { (name) " is your trusted errand and delivery partner. We connect people who need tasks done, from grocery runs and pickups to queue help and deliveries, with verified runners who get the job done quickly and reliably." }
                    p { "We started with a simple idea: in busy cities like Lagos, time is one of your most valuable resources. Everyday errands shouldn't eat into your day. With " (name) ", you book a runner, track progress in real time, and pay securely, all from your phone." }
                }
                div.two-up {
                    section {
                        h2 { "Our mission" }
                        p { "To give you back your time by making errands simple, fast, and stress-free. We want every user to feel confident that their task is in good hands, and every runner to have a fair, flexible way to earn." }
                    }
                    section {
                        h2 { "Our vision" }
                        p { "To be the trusted platform that makes everyday tasks effortless across every city we serve." }
                    }
                }
                section {
                    h2 { "What we do" }
                    p { "Through the " (name) " app, you can request a wide range of everyday tasks:" }
                    ul.checklist {
                        @for item in WHAT_WE_DO { li { (item) } }
                    }
                }
                section {
                    h2 { "Why choose us" }
                    ul {
                        @for (headline, detail) in WHY_CHOOSE_US {
                            li { strong { (headline) } " " (detail) }
                        }
                    }
                }
                section {
                    h2 { "Get started today" }
                    p { "Download the app and book your first errand, or join our runner network and start earning." }
                    a.button href="/#home" { "Download the app" }
                    " "
                    a.button.secondary href="/contact" { "Contact us" }
                }
            }
        };
        let meta = PageMeta {
            title: Some("About Us"),
            description: "Learn about GoQuick: we connect you with trusted runners for errands, deliveries, and daily tasks so you can reclaim your time.",
            path: "/about",
        };
        self.document(&meta, None, content)
    }

    pub fn faq(&self, category: FaqCategory) -> Markup {
        let accordion = FaqAccordion::with_category(&FAQS, category);
        let content = html! {
            main.page {
                section aria-labelledby="faq-heading" {
                    p.eyebrow { "Help" }
                    h1 #faq-heading { "Frequently Asked Questions" }
                }
                section #faq .faq data-accordion {
                    div.chips role="group" aria-label="Filter questions" {
                        @for chip in FaqCategory::CHIPS {
                            @let selected = chip == accordion.category();
                            a class=(with_state("chip", "selected", selected))
                                href={ "/faq?category=" (chip.slug()) }
                                aria-pressed=(flag(selected)) {
                                (chip.label())
                            }
                        }
                    }
                    @for (i, item) in accordion.visible().into_iter().enumerate() {
                        @let open = accordion.is_open(i);
                        div.faq-item {
                            button.faq-question type="button" data-panel=(i)
                                aria-expanded=(flag(open)) aria-controls={ "faq-panel-" (i) } {
                                (item.question)
                            }
                            div.faq-answer id={ "faq-panel-" (i) } hidden[!open] {
                                p { (item.answer) }
                            }
                        }
                    }
                }
                (self.cta_section())
            }
        };
        let meta = PageMeta {
            title: Some("FAQ"),
            description: "Frequently asked questions about GoQuick: errands, payments, becoming a runner, service areas, and real-time tracking.",
            path: "/faq",
        };
        self.document(&meta, None, content)
    }

    pub fn careers(&self, apply: Option<&ApplyView>) -> Markup {
        let name = &self.config.site.name;
        let content = html! {
            main.page {
                header {
                    p.eyebrow { "Careers" }
                    h1 { "Join the " (name) " team" }
                    p.lead { "We're building the go-to platform for errands and deliveries. If you want to help people reclaim their time and give runners a better way to earn, we'd love to hear from you." }
                }
                section {
                    h2 { "Why join us" }
                    ul.checklist {
                        @for benefit in BENEFITS { li { (benefit) } }
                    }
                }
                section {
                    h2 { "Open positions" }
                    p {
                        "Don't see a fit? Send your CV to "
                        a href={ "mailto:" (CAREERS_EMAIL) } { (CAREERS_EMAIL) }
                        "."
                    }
                    ul.roles {
                        @for role in &ROLES {
                            li.role {
                                h3 { (role.title) }
                                p.role-meta { (role.department) " · " (role.kind) " · " (role.location) }
                                p { (role.description) }
                                form method="get" action="/careers" {
                                    input type="hidden" name="apply" value=(role.title);
                                    button.button type="submit" data-apply=(role.title) { "Apply" }
                                }
                            }
                        }
                    }
                }
                section.get-in-touch {
                    h2 { "Get in touch" }
                    p { "Have questions about working at " (name) "? Reach out to our team." }
                    a.button href={ "mailto:" (CAREERS_EMAIL) } { "Email careers" }
                    " "
                    a.button.secondary href="/contact" { "Contact us" }
                }
                @if let Some(view) = apply {
                    (self.apply_dialog(view))
                }
            }
        };
        let meta = PageMeta {
            title: Some("Careers"),
            description: "Join GoQuick. We're building the go-to platform for errands and deliveries. See open roles and join our team.",
            path: "/careers",
        };
        self.document(&meta, None, content)
    }

    fn apply_dialog(&self, view: &ApplyView) -> Markup {
        let fields = &view.form.fields;
        let max_mb = self.config.forms.max_cv_mb;
        let close_ms = view.close_after.map(millis);
        html! {
            div.modal role="dialog" aria-modal="true" aria-labelledby="apply-modal-title"
                data-auto-close-ms=[close_ms] {
                div.modal-panel {
                    div.modal-header {
                        h2 #apply-modal-title { "Apply for " (view.position) }
                        a.modal-close href="/careers" aria-label="Close" { "×" }
                    }
                    form method="post" action="/careers/apply" enctype="multipart/form-data" data-async-form {
                        input type="hidden" name="position" value=(view.position);
                        label for="apply-name" { "Full name " span.required { "*" } }
                        input #apply-name name="name" type="text" required autocomplete="name"
                            placeholder="Your name" value=[fields.get("name")];
                        label for="apply-location" { "Location " span.required { "*" } }
                        input #apply-location name="location" type="text" required
                            placeholder="e.g. Lagos, Nigeria" value=[fields.get("location")];
                        label for="apply-cv" { "Upload CV " span.required { "*" } }
                        input #apply-cv name="cv" type="file" required
                            accept=".pdf,.doc,.docx,application/pdf,application/msword,application/vnd.openxmlformats-officedocument.wordprocessingml.document";
                        p.hint { "PDF or Word, max " (max_mb) "MB" }
                        label for="apply-cover" { "Cover letter " span.optional { "(optional)" } }
                        textarea #apply-cover name="coverLetter" rows="4"
                            placeholder="Tell us why you're a great fit..." {
                            (fields.get("coverLetter").unwrap_or_default())
                        }
                        label for="apply-portfolio" { "Portfolio link " span.optional { "(optional)" } }
                        input #apply-portfolio name="portfolioLink" type="url" autocomplete="url"
                            placeholder="https://..." value=[fields.get("portfolioLink")];
                        label for="apply-social" { "Social media link " span.optional { "(optional)" } }
                        input #apply-social name="socialLink" type="url" autocomplete="url"
                            placeholder="LinkedIn, Twitter, etc." value=[fields.get("socialLink")];
                        (status_message(&view.form.submission))
                        div.modal-actions {
                            a.button.secondary href="/careers" { "Cancel" }
                            button.button type="submit" disabled[view.form.submission.is_loading()] {
                                "Submit application"
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn contact(&self, view: &FormView) -> Markup {
        let site = &self.config.site;
        let fields = &view.fields;
        let topic = fields
            .trimmed("topic")
            .unwrap_or(catalog::DEFAULT_TOPIC);
        let dropdown = Dropdown::new(&TOPIC_OPTIONS, "Select a topic").with_value(topic);
        let content = html! {
            main.page {
                section aria-labelledby="contact-heading" {
                    p.eyebrow { "Contact Us" }
                    h1 #contact-heading { "Get in touch with the " (site.name) " team" }
                    p.lead { "Whether you need help with an errand, have a question about the app, want to become a runner, or have a partnership idea, we're here to help. Reach out and we'll respond within 24 hours." }
                }
                div.contact-grid {
                    section {
                        h2 { "Send us a message" }
                        p { "Tell us what you need: app support, runner enquiries, partnership proposals, or feedback. We read every message and will get back to you soon." }
                        form method="post" action="/contact" data-async-form {
                            label for="name" { "Full name" }
                            input #name name="name" type="text" placeholder="e.g. Adebola Johnson"
                                value=[fields.get("name")];
                            label for="email" { "Email address" }
                            input #email name="email" type="email" placeholder="your@email.com"
                                value=[fields.get("email")];
                            label for="topic" { "Topic" }
                            div.dropdown data-dropdown {
                                input type="hidden" name="topic" value=[dropdown.value()];
                                button #topic .dropdown-trigger type="button" aria-haspopup="listbox"
                                    aria-expanded=(flag(dropdown.is_open())) {
                                    (dropdown.display_label())
                                }
                                ul.dropdown-options role="listbox" hidden[!dropdown.is_open()] {
                                    @for option in dropdown.options() {
                                        li role="option" data-value=(option.value)
                                            aria-selected=(flag(dropdown.is_selected(option.value))) tabindex="-1" {
                                            (option.label)
                                        }
                                    }
                                }
                            }
                            label for="message" { "Message" }
                            textarea #message name="message" rows="4"
                                placeholder="Describe your errand, issue, or enquiry. Include order ID if you're reporting a problem..." {
                                (fields.get("message").unwrap_or_default())
                            }
                            button.button type="submit" disabled[view.submission.is_loading()] {
                                "Send to " (site.name)
                            }
                            (status_message(&view.submission))
                        }
                    }
                    aside {
                        h2 { (site.name) " headquarters" }
                        p { "Our team is based in Lagos and ready to help with errands, app issues, runner signups, and business enquiries." }
                        dl {
                            dt { "Support email" }
                            dd { a href={ "mailto:" (site.contact.email) } { (site.contact.email) } }
                            dt { "Phone / WhatsApp" }
                            dd { (site.contact.phone) }
                            dt { "Lagos office" }
                            dd { "Lagos, Nigeria" }
                            dt { "Support hours" }
                            dd { "Monday to Friday, 8:00am to 6:00pm (WAT)" }
                        }
                    }
                }
            }
        };
        let meta = PageMeta {
            title: Some("Contact Us"),
            description: "Contact GoQuick for errand support, runner signups, payment help, partnerships, and feedback. We respond within 24 hours.",
            path: "/contact",
        };
        self.document(&meta, None, content)
    }

    pub fn how_it_works(&self) -> Markup {
        let name = &self.config.site.name;
        let content = html! {
            main.page {
                section aria-labelledby="how-heading" {
                    p.eyebrow { "How it works" }
                    h1 #how-heading { "Get your errands done in 6 simple steps" }
                    p.lead { "From creating your errand to payment and rating, here's how " (name) " gets things done for you." }
                }
                section {
                    (render_steps(&STEPS, true))
                    p.slogan { "Less stress. Less waiting. More done." }
                    a.button href=(self.config.site.app_download_url) { "Download " (name) }
                    " "
                    a.button.secondary href="/contact" { "Contact us" }
                }
                section #for-runners aria-labelledby="runner-heading" {
                    p.eyebrow { "For runners" }
                    h2 #runner-heading { "Earn on your schedule in 6 simple steps" }
                    p.lead { "From sign-up to payout, here's how running errands with " (name) " works." }
                    (render_steps(&RUNNER_STEPS, true))
                    p.slogan { "Flexible hours. Clear earnings. Get paid when you deliver." }
                    a.button href=(self.config.site.app_download_url) { "Become a runner" }
                    " "
                    a.button.secondary href="/#for-runners" { "Learn more on homepage" }
                }
            }
        };
        let meta = PageMeta {
            title: Some("How It Works"),
            description: "Get your errands done in 6 simple steps: create, set details, get matched, chat, track, and pay. See how GoQuick works.",
            path: "/how-it-works",
        };
        self.document(&meta, None, content)
    }

    pub fn blog_index(&self, listing: &PostListing) -> Markup {
        let api_base = &self.config.site.api_base_url;
        let content = html! {
            main.page {
                section aria-labelledby="blog-heading" {
                    p.eyebrow { "Blog" }
                    h1 #blog-heading { "News & updates from " (self.config.site.name) }
                    p.lead { "Tips, product updates, and stories from the GoQuick team." }
                }
                @if listing.is_empty() {
                    div.empty-state { p { "No posts yet. Check back soon." } }
                } @else {
                    ul.post-grid {
                        @for post in &listing.posts {
                            @let image = post.image.as_deref().and_then(|i| content::resolve_image_url(api_base, i));
                            li {
                                a.post-card href={ "/blog/" (post.slug) } {
                                    @if let Some(src) = image {
                                        img src=(src) alt="" loading="lazy";
                                    } @else {
                                        div.post-card-placeholder {}
                                    }
                                    time datetime=[post.published_at.as_deref()] {
                                        (content::format_date(post.published_at.as_deref()))
                                    }
                                    h2 { (post.title) }
                                    @if let Some(excerpt) = &post.excerpt {
                                        p { (excerpt) }
                                    }
                                    @if let Some(author) = &post.author {
                                        p.byline { "By " (author.name) }
                                    }
                                }
                            }
                        }
                    }
                }
                @if let Some(footer) = listing.page_footer() {
                    nav.pagination aria-label="Pagination" {
                        @if let Some(prev) = listing.prev_page() {
                            a rel="prev" href={ "/blog?page=" (prev) } { "← Newer" }
                        }
                        p { (footer) }
                        @if let Some(next) = listing.next_page() {
                            a rel="next" href={ "/blog?page=" (next) } { "Older →" }
                        }
                    }
                }
            }
        };
        let meta = PageMeta {
            title: Some("Blog"),
            description: "News, tips, and updates from the GoQuick team.",
            path: "/blog",
        };
        self.document(&meta, None, content)
    }

    pub fn blog_post(&self, post: &Post) -> Markup {
        let image = post
            .image
            .as_deref()
            .and_then(|i| content::resolve_image_url(&self.config.site.api_base_url, i));
        let path = format!("/blog/{}", post.slug);
        let content = html! {
            main.page {
                nav.breadcrumb aria-label="Breadcrumb" {
                    a href="/blog" { "Blog" }
                    span { "/" }
                    span { (post.title) }
                }
                article.post {
                    header {
                        h1 { (post.title) }
                        div.post-meta {
                            time datetime=[post.published_at.as_deref()] {
                                (content::format_date(post.published_at.as_deref()))
                            }
                            @if let Some(author) = &post.author {
                                span { "By " (author.name) }
                            }
                        }
                    }
                    @if let Some(src) = image {
                        img.post-image src=(src) alt="" loading="lazy";
                    }
                    div.post-body {
                        @match content::post_body(&post.body) {
                            PostBody::Html(body) => (PreEscaped(body)),
                            PostBody::Paragraphs(paragraphs) => {
                                @for paragraph in paragraphs { p { (paragraph) } }
                            },
                        }
                    }
                }
                p { a href="/blog" { "← Back to blog" } }
            }
        };
        let description = post.excerpt.as_deref().unwrap_or(&self.config.site.description);
        let meta = PageMeta {
            title: Some(post.title.as_str()),
            description,
            path: &path,
        };
        self.document(&meta, None, content)
    }

    pub fn legal(&self, doc: LegalDoc, updated: NaiveDate) -> Markup {
        let body = doc.to_html(&self.config.site);
        let content = html! {
            main.page.legal {
                header {
                    p.eyebrow { "Legal" }
                    h1 { (doc.title()) }
                    p.updated { "Last updated: " (updated.format("%B %-d, %Y")) }
                }
                article.legal-body { (PreEscaped(body)) }
                p { a href="/" { "← Back to home" } }
            }
        };
        let meta = PageMeta {
            title: Some(doc.title()),
            description: doc.description(),
            path: doc.path(),
        };
        self.document(&meta, None, content)
    }

    pub fn not_found(&self) -> Markup {
        let content = html! {
            main.page.not-found {
                h1 { "Page not found" }
                p { "The page you're looking for doesn't exist or has moved." }
                a.button href="/" { "Back to home" }
                " "
                a.button.secondary href="/blog" { "Read the blog" }
            }
        };
        let meta = PageMeta {
            title: Some("Page not found"),
            description: &self.config.site.description,
            path: "/404",
        };
        self.document(&meta, None, content)
    }
}

// ============================================================================
// Components
// ============================================================================

/// Section ids and observer band for the home view's active-section tracker.
struct SectionTracking {
    sections: String,
    root_margin: String,
}

impl SectionTracking {
    fn for_nav(items: &[NavItem], band: &ObservedBand) -> Self {
        let sections = nav::home_section_ids(items)
            .iter()
            .map(SectionId::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            sections,
            root_margin: band.root_margin(),
        }
    }
}

/// Server-side view of the tracker: the home view starts on `home`, other
/// pages have no active section.
fn initial_active_state(path: &str) -> ActiveState {
    if path == "/" {
        ActiveState::Active(SectionId::home())
    } else {
        ActiveState::NoActive
    }
}

fn icon_class(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::Building => "icon-building",
        NavIcon::Briefcase => "icon-briefcase",
        NavIcon::Document => "icon-document",
        NavIcon::Steps => "icon-steps",
        NavIcon::Question => "icon-question",
        NavIcon::Support => "icon-support",
    }
}

fn stat_format_attr(format: config::StatFormat) -> &'static str {
    match format {
        config::StatFormat::Compact => "compact",
        config::StatFormat::Number => "number",
    }
}

fn render_desktop_item(item: &NavItem, path: &str, active: &ActiveState) -> Markup {
    let is_active = nav::is_item_active(item, path, active.id());
    match item {
        NavItem::Link { label, target } => html! {
            li.nav-item {
                a class=[is_active.then_some("active")] href=(nav::resolve_href(target))
                    data-section=[nav::section_id_from_href(target).map(|s| s.to_string())]
                    aria-current=[is_active.then_some("page")] {
                    (label)
                }
            }
        },
        NavItem::Submenu { label, children } => html! {
            li.nav-item.has-submenu data-submenu=(label) {
                button class=(with_state("submenu-toggle", "active", is_active)) type="button" aria-haspopup="true"
                    aria-expanded="false" {
                    (label)
                }
                div.mega-panel hidden {
                    @for child in nav::unique_children(children) {
                        @let child_active = nav::is_target_active(&child.target, path, active.id());
                        a class=(with_state("mega-item", "active", child_active)) href=(nav::resolve_href(&child.target)) {
                            span class={ "icon " (icon_class(child.icon)) } aria-hidden="true" {}
                            span.mega-label { (child.label) }
                            span.mega-description { (child.description) }
                        }
                    }
                }
            }
        },
    }
}

fn render_mobile_item(item: &NavItem, path: &str, active: &ActiveState) -> Markup {
    let is_active = nav::is_item_active(item, path, active.id());
    match item {
        NavItem::Link { label, target } => html! {
            li {
                a class=[is_active.then_some("active")] href=(nav::resolve_href(target)) data-drawer-link { (label) }
            }
        },
        NavItem::Submenu { label, children } => html! {
            li data-mobile-submenu=(label) {
                button class=(with_state("mobile-submenu-toggle", "active", is_active)) type="button" aria-expanded="false" {
                    (label)
                }
                ul hidden {
                    @for child in nav::unique_children(children) {
                        li {
                            a href=(nav::resolve_href(&child.target)) data-drawer-link { (child.label) }
                        }
                    }
                }
            }
        },
    }
}

fn flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// `base`, plus `state` when `on`.
fn with_state(base: &str, state: &str, on: bool) -> String {
    if on {
        format!("{base} {state}")
    } else {
        base.to_string()
    }
}

fn render_steps(steps: &[Step], numbered: bool) -> Markup {
    html! {
        div.steps {
            @for (i, step) in steps.iter().enumerate() {
                article.step {
                    @if numbered {
                        span.step-number { "Step " (i + 1) }
                    }
                    h3 { (step.title) }
                    p { (step.description) }
                }
            }
        }
    }
}

fn status_message(submission: &FormSubmission) -> Markup {
    html! {
        @match submission.status {
            FormStatus::Success => p.form-status.success role="status" { (submission.message) },
            FormStatus::Error => p.form-status.error role="alert" { (submission.message) },
            FormStatus::Idle | FormStatus::Loading => {},
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Author, Pagination, PostSummary};
    use crate::nav::default_nav;

    fn renderer() -> Renderer {
        let config = config::resolve_config(None, |_: &str| None).unwrap();
        Renderer::new(config, default_nav()).unwrap()
    }

    fn summary(slug: &str, image: Option<&str>) -> PostSummary {
        PostSummary {
            id: 1,
            title: format!("Post {slug}"),
            slug: slug.to_string(),
            excerpt: Some("Short".into()),
            image: image.map(str::to_string),
            published_at: Some("2025-03-05T10:00:00Z".into()),
            author: Some(Author {
                id: None,
                name: "Ada".into(),
            }),
        }
    }

    fn post(body: &str) -> Post {
        Post {
            id: 7,
            title: "Runner tips".into(),
            slug: "runner-tips".into(),
            excerpt: None,
            body: body.into(),
            image: None,
            published_at: None,
            author: None,
        }
    }

    // =========================================================================
    // Layout and nav
    // =========================================================================

    #[test]
    fn invalid_nav_is_rejected() {
        let mut items = default_nav();
        items.push(NavItem::link("Home", "/elsewhere"));
        assert!(Renderer::new(SiteConfig::default(), items).is_err());
    }

    #[test]
    fn document_includes_doctype_title_and_assets() {
        let r = renderer();
        let html = r.about().into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>About Us | GoQuick</title>"));
        assert!(html.contains(&format!("/static/site.css?v={}", r.assets().version())));
        assert!(html.contains(r#"<link rel="canonical" href="https://goquickapp.com.ng/about">"#));
    }

    #[test]
    fn fragment_targets_resolve_to_home_view() {
        let html = renderer().about().into_string();
        assert!(html.contains(r#"href="/#services""#));
    }

    #[test]
    fn home_highlights_home_link() {
        let html = renderer().home().into_string();
        assert!(html.contains(r#"<a class="active" href="/" data-section="home" aria-current="page">Home</a>"#));
    }

    #[test]
    fn submenu_highlights_when_child_page_is_current() {
        let html = renderer().careers(None).into_string();
        assert!(html.contains(r#"class="submenu-toggle active""#));
        assert!(html.contains(r#"class="mega-item active" href="/careers""#));
    }

    #[test]
    fn drawer_renders_closed() {
        let html = renderer().home().into_string();
        assert!(html.contains(r#"aria-controls="mobile-drawer" aria-expanded="false""#));
        assert!(html.contains(r#"<div id="mobile-drawer" class="drawer" hidden>"#));
    }

    #[test]
    fn home_carries_tracked_sections_and_band() {
        let html = renderer().home().into_string();
        assert!(html.contains(r#"data-sections="home services""#));
        assert!(html.contains(r#"data-root-margin="-20% 0px -60% 0px""#));
        assert!(html.contains(r#"id="services""#));
    }

    #[test]
    fn other_pages_do_not_track_sections() {
        assert!(!renderer().faq(FaqCategory::All).into_string().contains("data-sections"));
    }

    #[test]
    fn home_renders_typing_word_and_final_stats() {
        let html = renderer().home().into_string();
        assert!(html.contains(r#"data-words="GoQuick,Deliveries,Queues,Shopping""#));
        assert!(html.contains(r#"data-type-ms="100""#));
        assert!(html.contains(">10K+</span>"));
        assert!(html.contains(">98%</span>"));
    }

    #[test]
    fn assets_version_changes_with_theme() {
        let a = Assets::new(&config::ThemeConfig::default());
        let b = Assets::new(&config::ThemeConfig {
            primary: "#000000".into(),
            ..Default::default()
        });
        assert_eq!(a.version().len(), 12);
        assert_ne!(a.version(), b.version());
        assert!(b.css().starts_with(":root"));
    }

    #[test]
    fn html_escape_in_maud() {
        let html = renderer().blog_post(&post("a & b")).into_string();
        assert!(html.contains("<p>a &amp; b</p>"));
    }

    // =========================================================================
    // FAQ
    // =========================================================================

    #[test]
    fn faq_opens_first_item_only() {
        let html = renderer().faq(FaqCategory::All).into_string();
        assert!(html.contains(r#"aria-expanded="true" aria-controls="faq-panel-0""#));
        assert!(html.contains(r#"<div class="faq-answer" id="faq-panel-1" hidden>"#));
        assert_eq!(html.matches(r#"class="faq-item""#).count(), FAQS.len());
    }

    #[test]
    fn faq_category_filters_items() {
        let html = renderer().faq(FaqCategory::Runners).into_string();
        assert_eq!(html.matches(r#"class="faq-item""#).count(), 2);
        assert!(html.contains("How are runners verified?"));
        assert!(!html.contains("How do I pay for an errand?"));
        assert!(html.contains(r#"class="chip selected" href="/faq?category=runners""#));
    }

    // =========================================================================
    // Forms
    // =========================================================================

    #[test]
    fn careers_without_apply_has_no_dialog() {
        let html = renderer().careers(None).into_string();
        assert!(!html.contains(r#"role="dialog""#));
        assert!(html.contains("Operations Associate"));
    }

    #[test]
    fn apply_dialog_carries_position_and_error() {
        let view = ApplyView {
            position: "Software Engineer".into(),
            form: FormView {
                submission: FormSubmission::error("Please upload your CV."),
                fields: FieldSet::new().with("name", "Jane").with("location", "Lagos"),
            },
            close_after: None,
        };
        let html = renderer().careers(Some(&view)).into_string();
        assert!(html.contains("Apply for Software Engineer"));
        assert!(html.contains(r#"name="position" value="Software Engineer""#));
        assert!(html.contains(r#"role="alert">Please upload your CV.</p>"#));
        assert!(html.contains(r#"value="Jane""#));
        assert!(html.contains("max 5MB"));
    }

    #[test]
    fn apply_success_auto_closes() {
        let view = ApplyView {
            position: "Customer Support".into(),
            form: FormView {
                submission: FormSubmission::success("Application received. We'll be in touch!"),
                fields: FieldSet::new(),
            },
            close_after: Some(Duration::from_millis(2000)),
        };
        let html = renderer().careers(Some(&view)).into_string();
        assert!(html.contains(r#"data-auto-close-ms="2000""#));
        assert!(html.contains(r#"role="status""#));
    }

    #[test]
    fn contact_defaults_topic_to_support() {
        let html = renderer().contact(&FormView::default()).into_string();
        assert!(html.contains(r#"name="topic" value="support""#));
        assert!(html.contains("App support / Errand help</button>"));
        assert!(!html.contains("form-status"));
    }

    #[test]
    fn contact_keeps_fields_on_error() {
        let view = FormView {
            submission: FormSubmission::error("Please fill in all fields."),
            fields: FieldSet::new()
                .with("name", "Ada")
                .with("topic", "press")
                .with("message", "<hello>"),
        };
        let html = renderer().contact(&view).into_string();
        assert!(html.contains(r#"value="Ada""#));
        assert!(html.contains("Press &amp; media</button>"));
        assert!(html.contains("&lt;hello&gt;</textarea>"));
        assert!(html.contains("Please fill in all fields."));
    }

    #[test]
    fn cleared_contact_form_falls_back_to_default_topic() {
        let mut fields = FieldSet::new().with("topic", "press");
        fields.clear();
        let view = FormView {
            submission: FormSubmission::success("Thanks"),
            fields,
        };
        let html = renderer().contact(&view).into_string();
        assert!(html.contains(r#"name="topic" value="support""#));
    }

    // =========================================================================
    // Blog and legal
    // =========================================================================

    #[test]
    fn empty_listing_shows_empty_state() {
        let html = renderer().blog_index(&PostListing::default()).into_string();
        assert!(html.contains("No posts yet. Check back soon."));
        assert!(!html.contains("Page 1 of"));
    }

    #[test]
    fn listing_resolves_images_and_paginates() {
        let listing = PostListing {
            posts: vec![summary("a", Some("/uploads/a.png")), summary("b", None)],
            pagination: Some(Pagination {
                current_page: 2,
                last_page: 3,
                per_page: 12,
                total: 30,
            }),
        };
        let html = renderer().blog_index(&listing).into_string();
        assert!(html.contains(r#"src="https://api.goquickapp.com.ng/uploads/a.png""#));
        assert!(html.contains("post-card-placeholder"));
        assert!(html.contains(r#"href="/blog/a""#));
        assert!(html.contains("March 5, 2025"));
        assert!(html.contains("By Ada"));
        assert!(html.contains("Page 2 of 3"));
        assert!(html.contains(r#"href="/blog?page=1""#));
        assert!(html.contains(r#"href="/blog?page=3""#));
    }

    #[test]
    fn html_body_is_inserted_raw() {
        let html = renderer().blog_post(&post("<h2>Hi</h2><p>There</p>")).into_string();
        assert!(html.contains("<h2>Hi</h2><p>There</p>"));
        assert!(html.contains("<title>Runner tips | GoQuick</title>"));
    }

    #[test]
    fn plain_body_becomes_paragraphs() {
        let html = renderer().blog_post(&post("One\n\nTwo")).into_string();
        assert!(html.contains("<p>One</p><p>Two</p>"));
    }

    #[test]
    fn legal_page_renders_markdown_and_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        let html = renderer().legal(LegalDoc::Privacy, date).into_string();
        assert!(html.contains("<h1>Privacy Policy</h1>"));
        assert!(html.contains("Last updated: January 9, 2025"));
        assert!(html.contains("<h2>1. Introduction</h2>"));
    }

    #[test]
    fn not_found_page() {
        let html = renderer().not_found().into_string();
        assert!(html.contains("Page not found"));
        assert!(html.contains("<title>Page not found | GoQuick</title>"));
    }
}
