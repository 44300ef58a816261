//! Static site copy: FAQ entries, roles, steps, services and legal text.
//!
//! Everything here is compiled in. Anything that differs per deployment
//! (URLs, contact details, stats) lives in [`crate::config`] instead.

use crate::config::SiteInfo;
use crate::types::{FaqCategory, FaqItem, Role};
use crate::widgets::dropdown::DropdownOption;
use pulldown_cmark::{Parser, html as md_html};

pub const CAREERS_EMAIL: &str = "careers@goquickapp.com.ng";

pub const FAQS: [FaqItem; 6] = [
    FaqItem {
        question: "What kind of errands can I get done with GoQuick?",
        answer: "You can use GoQuick for grocery shopping, food and package delivery, queue services (e.g. paying bills, bank errands), pickups and drop-offs, and other everyday tasks. Create an errand with details and budget, and nearby runners will accept the job.",
        category: FaqCategory::Requesters,
    },
    FaqItem {
        question: "How do I pay for an errand?",
        answer: "Payment is handled securely inside the app. You add a payment method, and the agreed amount is held safely until the errand is completed. You only pay when you're satisfied with the result. We support cards and other methods via our payment partners.",
        category: FaqCategory::Payments,
    },
    FaqItem {
        question: "Where does GoQuick operate?",
        answer: "GoQuick currently operates in Lagos. We're expanding to more cities. Check the app or contact us for the latest service areas.",
        category: FaqCategory::Service,
    },
    FaqItem {
        question: "How do I become a runner and earn money?",
        answer: "Download the GoQuick app, sign up as a runner, and complete the verification steps. Once approved, you can accept errand requests in your area, set your own availability, and get paid for each completed task.",
        category: FaqCategory::Runners,
    },
    FaqItem {
        question: "How are runners verified?",
        answer: "Runners go through identity verification and approval before they can accept jobs. We also use ratings and reviews so you can see how others rate their experience.",
        category: FaqCategory::Runners,
    },
    FaqItem {
        question: "Can I track my errand in real time?",
        answer: "Yes. Once a runner accepts your errand, you can follow progress in the app and message them directly if you need to share or clarify anything.",
        category: FaqCategory::Requesters,
    },
];

pub const ROLES: [Role; 3] = [
    Role {
        title: "Software Engineer",
        department: "Engineering",
        kind: "Full-time",
        location: "Lagos (Hybrid)",
        description: "Build and improve the GoQuick app and platform that connects users with runners.",
    },
    Role {
        title: "Operations Associate",
        department: "Operations",
        kind: "Full-time",
        location: "Lagos",
        description: "Help scale our runner network and ensure smooth day-to-day operations.",
    },
    Role {
        title: "Customer Support",
        department: "Support",
        kind: "Full-time",
        location: "Lagos",
        description: "Support our users and runners and help resolve issues quickly.",
    },
];

pub const BENEFITS: [&str; 4] = [
    "Competitive salary and growth opportunities",
    "Flexible and inclusive work environment",
    "Impact on how a city gets things done",
    "Learning and development support",
];

pub const SERVICES: [&str; 6] = [
    "Grocery Shopping",
    "Queue Standing",
    "Pickup & Delivery",
    "Pharmacy Runs",
    "Document Drop-Offs",
    "Custom Errands",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 6] = [
    Step {
        title: "Create an Errand",
        description: "Open the app and create your errand: shopping, delivery, queue help, pickups and more.",
    },
    Step {
        title: "Set the Details",
        description: "Add location, instructions, budget, and deadline so runners know exactly what to do.",
    },
    Step {
        title: "Get Matched Instantly",
        description: "Nearby verified runners receive your request and accept the job.",
    },
    Step {
        title: "Chat & Confirm",
        description: "Use in-app messaging to clarify instructions or special requirements.",
    },
    Step {
        title: "Track in Real Time",
        description: "Follow your errand live and stay updated every step of the way.",
    },
    Step {
        title: "Pay Securely & Rate",
        description: "Complete payment safely in the app and rate your experience.",
    },
];

pub const RUNNER_STEPS: [Step; 6] = [
    Step {
        title: "Sign up & get verified",
        description: "Download the app, create your runner account, and complete verification so you can start accepting jobs.",
    },
    Step {
        title: "Set your availability",
        description: "Choose when you're available to run errands. Work around your schedule and turn on or off anytime.",
    },
    Step {
        title: "Receive requests",
        description: "Get real-time notifications when errand requests match your area and preferences.",
    },
    Step {
        title: "Accept & confirm",
        description: "Review the details and accept the job. Chat with the requester if you need to clarify anything before you start.",
    },
    Step {
        title: "Complete the errand",
        description: "Head to pickup, do the task, and update status in the app. Requesters can track progress in real time.",
    },
    Step {
        title: "Get paid",
        description: "Payment is released when the job is done. Earn per task with transparent pricing and reliable payouts.",
    },
];

/// `(headline, detail)` pairs for the home page runner pitch.
pub const RUNNER_PERKS: [(&str, &str); 4] = [
    (
        "Flexible Hours",
        "Choose when you work and accept on-demand errand jobs that fit your schedule.",
    ),
    (
        "Transparent Earnings",
        "See exactly how much you earn per task with clear pricing and no hidden deductions.",
    ),
    (
        "Instant Job Notifications",
        "Receive real-time alerts for nearby delivery and errand requests in your area.",
    ),
    (
        "Secure Payouts",
        "Get paid safely and reliably through our trusted in-app payment system.",
    ),
];

pub const WHAT_WE_DO: [&str; 5] = [
    "Grocery shopping and market runs",
    "Pickups and deliveries",
    "Queue help (e.g. bank, government offices)",
    "Document and package delivery",
    "Other everyday tasks you'd rather not do yourself",
];

pub const WHY_CHOOSE_US: [(&str, &str); 4] = [
    (
        "Trusted runners",
        "We work with verified runners so you can rely on the people handling your errands.",
    ),
    (
        "Real-time tracking",
        "See where your errand is and stay updated from request to completion.",
    ),
    (
        "Secure payments",
        "Pay safely in the app with transparent pricing and no surprise charges.",
    ),
    (
        "Built for your city",
        "We're focused on serving our users where they live, starting with Lagos and expanding to more cities.",
    ),
];

/// Contact form topics. The form preselects `support`.
pub const TOPIC_OPTIONS: [DropdownOption; 7] = [
    DropdownOption {
        value: "support",
        label: "App support / Errand help",
    },
    DropdownOption {
        value: "runner",
        label: "Become a runner",
    },
    DropdownOption {
        value: "payment",
        label: "Payment or payout issue",
    },
    DropdownOption {
        value: "partnership",
        label: "Partnership / Business",
    },
    DropdownOption {
        value: "press",
        label: "Press & media",
    },
    DropdownOption {
        value: "feedback",
        label: "Feedback or suggestion",
    },
    DropdownOption {
        value: "other",
        label: "Other",
    },
];

pub const DEFAULT_TOPIC: &str = "support";

// ============================================================================
// Legal pages
// ============================================================================

const PRIVACY_MD: &str = include_str!("../content/privacy.md");
const TERMS_MD: &str = include_str!("../content/terms.md");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalDoc {
    Privacy,
    Terms,
}

impl LegalDoc {
    pub fn title(self) -> &'static str {
        match self {
            LegalDoc::Privacy => "Privacy Policy",
            LegalDoc::Terms => "Terms of Service",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LegalDoc::Privacy => {
                "GoQuick Privacy Policy: how we collect, use, and protect your data when you use our errand and runner app."
            }
            LegalDoc::Terms => {
                "GoQuick Terms of Service: rules and agreement for using our errand and runner app and related services."
            }
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            LegalDoc::Privacy => "/privacy",
            LegalDoc::Terms => "/terms",
        }
    }

    fn source(self) -> &'static str {
        match self {
            LegalDoc::Privacy => PRIVACY_MD,
            LegalDoc::Terms => TERMS_MD,
        }
    }

    /// Markdown with the site's name and contact details filled in.
    pub fn markdown(self, site: &SiteInfo) -> String {
        self.source()
            .replace("{site_name}", &site.name)
            .replace("{contact_email}", &site.contact.email)
            .replace("{contact_phone}", &site.contact.phone)
    }

    pub fn to_html(self, site: &SiteInfo) -> String {
        let markdown = self.markdown(site);
        let parser = Parser::new(&markdown);
        let mut body_html = String::new();
        md_html::push_html(&mut body_html, parser);
        body_html
    }
}
