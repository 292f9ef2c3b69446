//! Built-in SEO entries used whenever the database has nothing for a page.

use crate::models::PageSeo;

struct StaticEntry {
    path: &'static str,
    title: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
}

const STATIC_ENTRIES: &[StaticEntry] = &[
    StaticEntry {
        path: "/",
        title: "Compassionate Behavioral Health Care",
        description: "Outpatient mental health and substance use treatment for adults, adolescents and families across our clinic locations.",
        keywords: &["behavioral health", "mental health", "therapy", "counseling", "psychiatry"],
    },
    StaticEntry {
        path: "/about",
        title: "About Us",
        description: "Learn about our mission, our clinical approach and the people behind our behavioral health practice.",
        keywords: &["about", "mission", "behavioral health provider"],
    },
    StaticEntry {
        path: "/services",
        title: "Our Services",
        description: "Individual therapy, psychiatric evaluation, medication management, intensive outpatient and substance use programs.",
        keywords: &["therapy", "medication management", "intensive outpatient", "substance use treatment"],
    },
    StaticEntry {
        path: "/locations",
        title: "Clinic Locations",
        description: "Find a clinic near you, with addresses, hours and the services offered at each location.",
        keywords: &["clinic locations", "mental health clinic near me"],
    },
    StaticEntry {
        path: "/blog",
        title: "Blog",
        description: "Articles on mental health, recovery, wellness and navigating care.",
        keywords: &["mental health blog", "recovery", "wellness"],
    },
    StaticEntry {
        path: "/faq",
        title: "Frequently Asked Questions",
        description: "Answers to common questions about appointments, insurance, telehealth and what to expect.",
        keywords: &["faq", "appointments", "insurance", "telehealth"],
    },
    StaticEntry {
        path: "/team",
        title: "Leadership Team",
        description: "Meet the clinical and operational leaders guiding our organization.",
        keywords: &["leadership", "management team"],
    },
    StaticEntry {
        path: "/contact",
        title: "Contact Us",
        description: "Request an appointment or reach our intake team by phone, email or online form.",
        keywords: &["contact", "appointment", "intake"],
    },
    StaticEntry {
        path: "/careers",
        title: "Careers",
        description: "Join a team of clinicians and staff dedicated to accessible behavioral health care.",
        keywords: &["careers", "therapist jobs", "behavioral health jobs"],
    },
    StaticEntry {
        path: "/insurance",
        title: "Insurance & Payment",
        description: "Accepted insurance plans, self-pay options and how billing works.",
        keywords: &["insurance", "payment", "billing"],
    },
    StaticEntry {
        path: "/privacy-policy",
        title: "Privacy Policy",
        description: "How we collect, use and protect information submitted through this website.",
        keywords: &["privacy policy"],
    },
    StaticEntry {
        path: "/terms-of-service",
        title: "Terms of Service",
        description: "The terms that govern use of this website.",
        keywords: &["terms of service"],
    },
    StaticEntry {
        path: "/notice-of-privacy-practices",
        title: "Notice of Privacy Practices",
        description: "How medical information about you may be used and disclosed, and how you can get access to it.",
        keywords: &["hipaa", "notice of privacy practices"],
    },
];

/// Site-level settings the fallback titles are built from.
#[derive(Debug, Clone)]
pub struct SiteIdentity {
    pub name: String,
    /// Base URL without trailing slash, used for canonical links.
    pub url: Option<String>,
}

impl SiteIdentity {
    fn title(&self, page_title: &str) -> String {
        format!("{} | {}", page_title, self.name)
    }

    fn canonical(&self, path: &str) -> Option<String> {
        self.url.as_ref().map(|base| {
            if path == "/" {
                base.clone()
            } else {
                format!("{}{}", base, path)
            }
        })
    }
}

/// Static table lookup. `path` must already be normalized.
pub fn static_entry(site: &SiteIdentity, path: &str) -> Option<PageSeo> {
    STATIC_ENTRIES
        .iter()
        .find(|entry| entry.path == path)
        .map(|entry| PageSeo {
            page_path: entry.path.to_string(),
            title: site.title(entry.title),
            description: entry.description.to_string(),
            keywords: entry.keywords.iter().map(|k| k.to_string()).collect(),
            og_title: Some(site.title(entry.title)),
            og_description: Some(entry.description.to_string()),
            og_image: None,
            canonical_url: site.canonical(entry.path),
            no_index: false,
        })
}

/// Generic entry for pages with neither a stored nor a static record.
/// The title comes from the last path segment: `/services/family-therapy` -> "Family Therapy".
pub fn default_entry(site: &SiteIdentity, path: &str) -> PageSeo {
    let home = &STATIC_ENTRIES[0];
    let page_name = path
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .map(title_case)
        .filter(|name| !name.is_empty());

    let title = match page_name {
        Some(name) => site.title(&name),
        None => site.title(home.title),
    };

    PageSeo {
        page_path: path.to_string(),
        title: title.clone(),
        description: home.description.to_string(),
        keywords: home.keywords.iter().map(|k| k.to_string()).collect(),
        og_title: Some(title),
        og_description: Some(home.description.to_string()),
        og_image: None,
        canonical_url: site.canonical(path),
        no_index: false,
    }
}

fn title_case(segment: &str) -> String {
    segment
        .split(|c: char| c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Paths that have a built-in entry.
pub fn static_paths() -> impl Iterator<Item = &'static str> {
    STATIC_ENTRIES.iter().map(|entry| entry.path)
}
