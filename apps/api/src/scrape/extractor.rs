//! Job-detail extraction from a job posting's markup.
//!
//! Order of precedence:
//! 1. schema.org `JobPosting` JSON-LD blocks
//! 2. ordered fallback selectors (site-specific attributes, then generic meta tags)
//! 3. `<title>` as the last resort for the job title
//!
//! The job title is then cleaned: the company name is stripped and only the first
//! non-empty " | " / " - " segment is kept, so both "Title | Company" and
//! "Company | Title" reduce to the title.
//!
//! Everything here is synchronous. `scraper::Html` is not `Send`, so the caller
//! fetches first and parses afterwards without holding the document across an await.

use scraper::{Html, Selector};
use serde_json::Value;

/// Which part of a matched element carries the value.
#[derive(Debug, Clone, Copy)]
enum Source {
    /// Concatenated text content of the element.
    Text,
    /// The `content` attribute (meta tags).
    Content,
    /// A `content` attribute holding a social handle; one leading `@` is dropped.
    Handle,
}

/// An ordered lookup rule, only consulted when structured data left a field empty.
struct Fallback {
    selector: &'static str,
    source: Source,
}

const COMPANY_FALLBACKS: &[Fallback] = &[
    Fallback {
        selector: r#"[data-test-id="company-name"]"#,
        source: Source::Text,
    },
    // LinkedIn
    Fallback {
        selector: r#"a[data-tracking-id="Company-Name"]"#,
        source: Source::Text,
    },
    // Indeed
    Fallback {
        selector: ".jobsearch-CompanyInfoContainer a",
        source: Source::Text,
    },
    Fallback {
        selector: r#"meta[property="og:site_name"]"#,
        source: Source::Content,
    },
    Fallback {
        selector: r#"meta[name="twitter:site"]"#,
        source: Source::Handle,
    },
];

const TITLE_FALLBACKS: &[Fallback] = &[
    Fallback {
        selector: r#"[data-test-id="job-title"]"#,
        source: Source::Text,
    },
    // Indeed
    Fallback {
        selector: ".jobsearch-JobInfoHeader-title",
        source: Source::Text,
    },
    // LinkedIn
    Fallback {
        selector: r#"h1[data-tracking-id="job-title"]"#,
        source: Source::Text,
    },
    Fallback {
        selector: r#"h1[class*="job-title"]"#,
        source: Source::Text,
    },
    Fallback {
        selector: r#"meta[property="og:title"]"#,
        source: Source::Content,
    },
    Fallback {
        selector: r#"meta[name="twitter:title"]"#,
        source: Source::Content,
    },
    Fallback {
        selector: "title",
        source: Source::Text,
    },
];

const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;
const JOB_POSTING_TYPE: &str = "JobPosting";

/// Separators between a job title and the site/company name in `<title>`-like strings.
const TITLE_SEPARATOR: &str = " | ";
const ALT_TITLE_SEPARATOR: &str = " - ";

/// Best-effort (company, job title) pair. Either field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDetails {
    pub company: String,
    pub job_title: String,
}

/// Extracts company and job title from raw HTML. Never fails; missing values are empty.
pub fn extract_job_details(html: &str) -> JobDetails {
    let document = Html::parse_document(html);
    let mut details = JobDetails::default();

    read_structured_data(&document, &mut details);

    if details.company.is_empty() {
        details.company = first_fallback_match(&document, COMPANY_FALLBACKS).unwrap_or_default();
    }

    if details.job_title.is_empty() {
        details.job_title = first_fallback_match(&document, TITLE_FALLBACKS).unwrap_or_default();
    }

    details.job_title = clean_job_title(&details.job_title, &details.company);
    details
}

/// Fills empty fields from the first `JobPosting` blocks found. Values already set
/// by an earlier block are never overridden; unparsable blocks are skipped.
fn read_structured_data(document: &Html, details: &mut JobDetails) {
    let Ok(selector) = Selector::parse(JSON_LD_SELECTOR) else {
        return;
    };

    for script in document.select(&selector) {
        let raw: String = script.text().collect();
        let Ok(value) = serde_json::from_str::<Value>(raw.trim()) else {
            continue;
        };

        let mut postings = Vec::new();
        collect_job_postings(&value, &mut postings);

        for posting in postings {
            if details.job_title.is_empty() {
                if let Some(title) = posting.get("title").and_then(Value::as_str) {
                    details.job_title = normalize_whitespace(title);
                }
            }
            if details.company.is_empty() {
                if let Some(name) = hiring_organization_name(posting) {
                    details.company = normalize_whitespace(name);
                }
            }
        }
    }
}

/// Walks a JSON-LD value (object, array, or `@graph` container) collecting `JobPosting` nodes
/// in document order.
fn collect_job_postings<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_job_postings(item, out);
            }
        }
        Value::Object(map) => {
            if is_job_posting(value) {
                out.push(value);
            }
            if let Some(graph) = map.get("@graph") {
                collect_job_postings(graph, out);
            }
        }
        _ => {}
    }
}

fn is_job_posting(node: &Value) -> bool {
    match node.get("@type") {
        Some(Value::String(t)) => t == JOB_POSTING_TYPE,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(JOB_POSTING_TYPE)),
        _ => false,
    }
}

fn hiring_organization_name(posting: &Value) -> Option<&str> {
    match posting.get("hiringOrganization")? {
        Value::String(name) => Some(name.as_str()),
        Value::Object(org) => org.get("name").and_then(Value::as_str),
        Value::Array(orgs) => orgs
            .iter()
            .find_map(|org| org.get("name").and_then(Value::as_str)),
        _ => None,
    }
}

/// Returns the first non-empty value produced by the ordered fallback rules.
fn first_fallback_match(document: &Html, fallbacks: &[Fallback]) -> Option<String> {
    for fallback in fallbacks {
        let Ok(selector) = Selector::parse(fallback.selector) else {
            continue;
        };

        let found = document.select(&selector).find_map(|element| {
            let value = match fallback.source {
                Source::Text => normalize_whitespace(&element.text().collect::<String>()),
                Source::Content => normalize_whitespace(element.value().attr("content")?),
                Source::Handle => {
                    let handle = element.value().attr("content")?.trim();
                    normalize_whitespace(handle.strip_prefix('@').unwrap_or(handle))
                }
            };
            (!value.is_empty()).then_some(value)
        });

        if found.is_some() {
            return found;
        }
    }
    None
}

/// Strips the company name from a title, then keeps the first non-empty segment
/// between " | " / " - " separators.
///
/// `"Backend Developer | Acme"` → `"Backend Developer"`,
/// `"Acme Backend Developer"` (company `"Acme"`) → `"Backend Developer"`.
pub fn clean_job_title(title: &str, company: &str) -> String {
    let stripped = if !company.is_empty() && title.contains(company) {
        title.replacen(company, "", 1)
    } else {
        title.to_string()
    };

    stripped
        .replace(ALT_TITLE_SEPARATOR, TITLE_SEPARATOR)
        .split(TITLE_SEPARATOR)
        .map(str::trim)
        .find(|segment| !segment.is_empty())
        .map(normalize_whitespace)
        .unwrap_or_default()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
