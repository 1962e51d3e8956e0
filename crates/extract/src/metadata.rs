//! Document metadata extraction: date, adjudicator, SOR allegations,
//! mitigating-condition mentions, summary, and case-number year.
//!
//! All of these are best-effort: a missing section produces `None` or an
//! empty list, and the summary falls back to the leading text.

use crate::window::{head, tail};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

const HEAD_WINDOW: usize = 2_000;
const SIGNATURE_WINDOW: usize = 3_000;
const SUMMARY_CAP: usize = 1_500;

fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("static pattern must compile")
}

fn compile_dotall(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .expect("static pattern must compile")
}

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?:issued|date|dated)[:\s]+([a-z]+\s+\d{1,2},?\s+\d{4})"),
        compile(r"(\d{1,2}/\d{1,2}/\d{4})"),
        compile(r"([a-z]+\s+\d{1,2},?\s+\d{4})"),
    ]
});

/// Decision date, if stated. The caption near the top is tried first, then
/// the signature block at the end.
#[must_use]
pub fn extract_date(text: &str) -> Option<String> {
    for window in [head(text, HEAD_WINDOW), tail(text, SIGNATURE_WINDOW)] {
        for pattern in DATE_PATTERNS.iter() {
            if let Some(m) = pattern.captures(window) {
                return Some(m[1].trim().to_string());
            }
        }
    }
    None
}

// Name shapes depend on capitalization, so these stay case-sensitive.
static ADJUDICATOR_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // "Jane Q. Smith, Administrative Judge" signature form.
        r"([A-Z][a-z]+\s+(?:[A-Z]\.?\s*)?[A-Z][a-z]+)[\s,]+Administrative\s+Judge",
        r"(?:Administrative\s+Judge|Hearing\s+Officer)[:\s]+([A-Z][a-z]+\s+(?:[A-Z]\.?\s*)?[A-Z][a-z]+)",
        r"/s/\s*([A-Z][a-z]+\s+(?:[A-Z]\.?\s*)?[A-Z][a-z]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static pattern must compile"))
    .collect()
});

/// Name fragments that the signature patterns sometimes pick up instead of a
/// person.
const ADJUDICATOR_FALSE_POSITIVES: &[&str] = &["United States", "Appeal Board", "Defense Office"];

/// Administrative judge or hearing officer, from the signature block first
/// and the caption second.
#[must_use]
pub fn extract_adjudicator(text: &str) -> Option<String> {
    for window in [tail(text, SIGNATURE_WINDOW), head(text, SIGNATURE_WINDOW)] {
        for pattern in ADJUDICATOR_PATTERNS.iter() {
            for m in pattern.captures_iter(window) {
                let name = m[1].trim().to_string();
                if !ADJUDICATOR_FALSE_POSITIVES.contains(&name.as_str()) {
                    return Some(name);
                }
            }
        }
    }
    None
}

static SOR_SECTION: Lazy<Regex> =
    Lazy::new(|| compile_dotall(r"statement\s+of\s+reasons.*?(?:FINDINGS|ANALYSIS|\n\n\n)"));
static SOR_ALLEGATION: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"(?m)(?:^\s*\d+\.\s*[a-z]?\.?|SOR\s*\u{b6}\s*\d+\.[a-z]?)\s*(.+?)$")
        .case_insensitive(true)
        .build()
        .expect("static pattern must compile")
});

/// Numbered allegation lines from the Statement of Reasons section, capped
/// at 10 entries of 500 characters each.
#[must_use]
pub fn extract_sor_allegations(text: &str) -> Vec<String> {
    let Some(section) = SOR_SECTION.find(text) else {
        return Vec::new();
    };

    SOR_ALLEGATION
        .captures_iter(section.as_str())
        .filter_map(|m| {
            let cleaned = normalize_whitespace(&m[1]);
            (cleaned.len() > 10).then(|| truncate(&cleaned, 500))
        })
        .take(10)
        .collect()
}

static MITIGATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?:mitigating\s+condition|AG\s*\u{b6}\s*\d+\([a-z]\))[^\n]*"),
        compile(r"(?:in\s+mitigation|mitigating\s+factor)[^\n]*"),
    ]
});

/// Mitigating-condition mentions, deduplicated, capped at 10.
#[must_use]
pub fn extract_mitigating_mentions(text: &str) -> Vec<String> {
    let mut mentions: Vec<String> = Vec::new();
    for pattern in MITIGATION_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            let cleaned = truncate(normalize_whitespace(m.as_str()).as_str(), 300);
            if cleaned.len() > 20 && !mentions.contains(&cleaned) {
                mentions.push(cleaned);
            }
            if mentions.len() >= 10 {
                return mentions;
            }
        }
    }
    mentions
}

// The capture group keeps the section body while the terminator header
// stays out of the summary.
static SUMMARY_SECTIONS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile_dotall(r"(FINDINGS\s+OF\s+FACT.*?)(?:POLICIES|ANALYSIS|\z)"),
        compile_dotall(r"(ANALYSIS.*?)(?:CONCLUSION|\z)"),
        compile_dotall(r"(STATEMENT\s+OF\s+THE\s+CASE.*?)(?:FINDINGS|\z)"),
    ]
});

/// A whitespace-normalized summary: Findings of Fact preferred, then
/// Analysis, then Statement of the Case, else the leading text.
#[must_use]
pub fn summarize(text: &str) -> String {
    for pattern in SUMMARY_SECTIONS.iter() {
        if let Some(m) = pattern.captures(text) {
            return truncate(&normalize_whitespace(&m[1]), SUMMARY_CAP);
        }
    }
    truncate(&normalize_whitespace(head(text, SUMMARY_CAP)), SUMMARY_CAP)
}

static CASE_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{2})-\d+").expect("static pattern must compile"));

/// Two-digit year from a case number ("23-01234", "ISCR-23-01234"):
/// below 50 reads as 2000s, 50 and above as 1900s.
#[must_use]
pub fn parse_case_year(case_number: &str) -> Option<i32> {
    let caps = CASE_YEAR.captures(case_number)?;
    let two_digit: i32 = caps[1].parse().ok()?;
    Some(if two_digit < 50 {
        two_digit + 2000
    } else {
        two_digit + 1900
    })
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate(text: &str, max_bytes: usize) -> String {
    head(text, max_bytes).trim().to_string()
}
