//! Parser for the "Formal Findings" section of a hearing decision.
//!
//! The section lists, per SOR paragraph/guideline, whether findings were for
//! or against the applicant, followed by subparagraph lines. Decisions write
//! these headings in several competing formats; they are tried in a fixed
//! precedence order and the first resolution of a guideline code is never
//! overwritten by a later format.

use adjudex_protocol::{FindingDirection, FormalFinding, GuidelineCode, SubparagraphFinding};
use adjudex_guidelines::Catalog;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::collections::{BTreeMap, BTreeSet};

fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("static pattern must compile")
}

static FORMAL_HEADER: Lazy<Regex> = Lazy::new(|| compile(r"(?m)^\s*formal\s+findings?\b[^\n]*"));
// Line-start anchor guards against "in conclusion" mid-sentence.
static CONCLUSION_HEADER: Lazy<Regex> = Lazy::new(|| compile(r"(?m)^\s*conclusions?\b"));

// Per-guideline heading formats, in precedence order.
static HEADING_PARA_CODE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"paragraph\s+(\d+)\s*[,.:]?\s*\(?\s*guideline\s+([a-m])\b\s*\)?(?:\s*\([^)\n]*\))?\s*:?\s*(for|against)\s+applicant",
    )
});
static HEADING_CODE: Lazy<Regex> = Lazy::new(|| {
    compile(r"guideline\s+([a-m])\b\s*(?:\([^)\n]*\))?\s*:?\s*(for|against)\s+applicant")
});
static HEADING_PARA_NAME: Lazy<Regex> = Lazy::new(|| {
    compile(r"paragraph\s+(\d+)\s*[,.:]?\s*([a-z][a-z /-]{2,60}?)\s*:?\s*(for|against)\s+applicant")
});
static HEADING_NAME_CONCERN: Lazy<Regex> = Lazy::new(|| {
    compile(r"([a-z][a-z ]{2,40}?)\s+(?:\(security\)\s+|security\s+)?concerns?\s*:?\s*(for|against)\s+applicant")
});

// Subparagraph line formats, in precedence order. A later pattern never
// claims text already matched by an earlier one.
static SUB_NUMBERED_RANGE: Lazy<Regex> = Lazy::new(|| {
    compile(r"(\d+\.[a-z])[ \t]*[\u{2013}-][ \t]*(\d+\.[a-z])\b[ \t]*:?[ \t]*\n?[ \t]*(for|against)\b")
});
static SUB_NUMBERED_LIST: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"subparagraphs?\s+((?:\d+\.[a-z])(?:[ \t]*,[ \t]*\d+\.[a-z])*)\b[ \t]*:?[ \t]*\n?[ \t]*(for|against)\b",
    )
});
static SUB_NUMBERED_SINGLE: Lazy<Regex> =
    Lazy::new(|| compile(r"(\d+\.[a-z])\b[ \t]*:?[ \t]*\n?[ \t]*(for|against)\b"));
static SUB_LETTER_GROUP: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"subparagraphs?\s+([a-z](?:[ \t]*[\u{2013},-][ \t]*[a-z])+)\b[ \t]*:?[ \t]*\n?[ \t]*(for|against)\b",
    )
});
static SUB_LETTER_SINGLE: Lazy<Regex> =
    Lazy::new(|| compile(r"subparagraphs?\s+([a-z])\b[ \t]*:?[ \t]*\n?[ \t]*(for|against)\b"));

/// Common-name keywords resolving a heading without a "Guideline X" citation.
const NAME_KEYWORDS: &[(&str, GuidelineCode)] = &[
    ("allegiance", GuidelineCode::A),
    ("foreign influence", GuidelineCode::B),
    ("foreign preference", GuidelineCode::C),
    ("sexual behavior", GuidelineCode::D),
    ("personal conduct", GuidelineCode::E),
    ("financial", GuidelineCode::F),
    ("alcohol", GuidelineCode::G),
    ("drug", GuidelineCode::H),
    ("psychological", GuidelineCode::I),
    ("criminal", GuidelineCode::J),
    ("handling protected", GuidelineCode::K),
    ("protected information", GuidelineCode::K),
    ("outside activit", GuidelineCode::L),
    ("information technology", GuidelineCode::M),
];

fn name_to_code(name: &str) -> Option<GuidelineCode> {
    let lowered = name.to_lowercase();
    NAME_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, code)| *code)
}

struct Heading {
    code: GuidelineCode,
    overall: FindingDirection,
    /// Explicit "Paragraph N" number when the format carries one.
    paragraph: Option<u32>,
    start: usize,
    end: usize,
}

/// Parse the Formal Findings section into per-guideline findings.
///
/// Returns only the guidelines actually adjudicated; an absent section is a
/// best-effort scan of the entire input rather than an error, so bare
/// findings text still parses.
#[must_use]
pub fn extract_formal_findings(text: &str) -> BTreeMap<GuidelineCode, FormalFinding> {
    let section = bound_section(text);
    let headings = collect_headings(section);

    let mut findings = BTreeMap::new();
    for (ordinal, heading) in headings.iter().enumerate() {
        let span_end = headings
            .get(ordinal + 1)
            .map_or(section.len(), |next| next.start);
        let span = &section[heading.end..span_end];

        // SOR paragraph numbers follow guideline order, so a heading without
        // an explicit number takes its 1-based position in the section.
        let paragraph = heading.paragraph.unwrap_or(ordinal as u32 + 1);
        let subparagraphs = extract_subparagraphs(span, paragraph);

        findings.insert(
            heading.code,
            FormalFinding {
                code: heading.code,
                guideline_name: Catalog::builtin().name(heading.code).to_string(),
                overall: heading.overall,
                subparagraphs,
            },
        );
    }

    findings
}

fn bound_section(text: &str) -> &str {
    let Some(header) = FORMAL_HEADER.find(text) else {
        return text;
    };
    let rest = &text[header.end()..];
    match CONCLUSION_HEADER.find(rest) {
        Some(conclusion) => &rest[..conclusion.start()],
        None => rest,
    }
}

/// All per-guideline headings, earliest format winning per code, ordered by
/// position in the section.
fn collect_headings(section: &str) -> Vec<Heading> {
    let mut seen: BTreeSet<GuidelineCode> = BTreeSet::new();
    let mut headings: Vec<Heading> = Vec::new();

    let mut push = |heading: Heading, seen: &mut BTreeSet<GuidelineCode>| {
        if seen.insert(heading.code) {
            headings.push(heading);
        }
    };

    for m in HEADING_PARA_CODE.captures_iter(section) {
        let code = GuidelineCode::from_char(first_char(&m[2]));
        let overall = FindingDirection::from_token(&m[3]);
        if let (Some(code), Some(overall)) = (code, overall) {
            push(
                Heading {
                    code,
                    overall,
                    paragraph: m[1].parse().ok(),
                    start: m.get(0).map_or(0, |g| g.start()),
                    end: m.get(0).map_or(0, |g| g.end()),
                },
                &mut seen,
            );
        }
    }

    for m in HEADING_CODE.captures_iter(section) {
        let code = GuidelineCode::from_char(first_char(&m[1]));
        let overall = FindingDirection::from_token(&m[2]);
        if let (Some(code), Some(overall)) = (code, overall) {
            push(
                Heading {
                    code,
                    overall,
                    paragraph: None,
                    start: m.get(0).map_or(0, |g| g.start()),
                    end: m.get(0).map_or(0, |g| g.end()),
                },
                &mut seen,
            );
        }
    }

    for m in HEADING_PARA_NAME.captures_iter(section) {
        let Some(code) = name_to_code(&m[2]) else {
            continue;
        };
        if let Some(overall) = FindingDirection::from_token(&m[3]) {
            push(
                Heading {
                    code,
                    overall,
                    paragraph: m[1].parse().ok(),
                    start: m.get(0).map_or(0, |g| g.start()),
                    end: m.get(0).map_or(0, |g| g.end()),
                },
                &mut seen,
            );
        }
    }

    for m in HEADING_NAME_CONCERN.captures_iter(section) {
        let Some(code) = name_to_code(&m[1]) else {
            continue;
        };
        if let Some(overall) = FindingDirection::from_token(&m[2]) {
            push(
                Heading {
                    code,
                    overall,
                    paragraph: None,
                    start: m.get(0).map_or(0, |g| g.start()),
                    end: m.get(0).map_or(0, |g| g.end()),
                },
                &mut seen,
            );
        }
    }

    headings.sort_by_key(|h| h.start);
    headings
}

fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or('\0')
}

fn extract_subparagraphs(span: &str, paragraph: u32) -> Vec<SubparagraphFinding> {
    let mut claimed: Vec<(usize, usize)> = Vec::new();
    let mut found: BTreeSet<SubparagraphFinding> = BTreeSet::new();

    let mut claim = |start: usize, end: usize, claimed: &mut Vec<(usize, usize)>| -> bool {
        if claimed.iter().any(|(s, e)| start < *e && *s < end) {
            return false;
        }
        claimed.push((start, end));
        true
    };

    for m in SUB_NUMBERED_RANGE.captures_iter(span) {
        let whole = m.get(0).expect("group 0 always present");
        if !claim(whole.start(), whole.end(), &mut claimed) {
            continue;
        }
        if let Some(finding) = FindingDirection::from_token(&m[3]) {
            found.insert(SubparagraphFinding {
                paragraph_ref: format!("{}-{}", m[1].to_lowercase(), m[2].to_lowercase()),
                finding,
            });
        }
    }

    for m in SUB_NUMBERED_LIST.captures_iter(span) {
        let whole = m.get(0).expect("group 0 always present");
        if !claim(whole.start(), whole.end(), &mut claimed) {
            continue;
        }
        if let Some(finding) = FindingDirection::from_token(&m[2]) {
            for r in m[1].split(',') {
                found.insert(SubparagraphFinding {
                    paragraph_ref: r.trim().to_lowercase(),
                    finding,
                });
            }
        }
    }

    for m in SUB_NUMBERED_SINGLE.captures_iter(span) {
        let whole = m.get(0).expect("group 0 always present");
        if !claim(whole.start(), whole.end(), &mut claimed) {
            continue;
        }
        if let Some(finding) = FindingDirection::from_token(&m[2]) {
            found.insert(SubparagraphFinding {
                paragraph_ref: m[1].to_lowercase(),
                finding,
            });
        }
    }

    for m in SUB_LETTER_GROUP.captures_iter(span) {
        let whole = m.get(0).expect("group 0 always present");
        if !claim(whole.start(), whole.end(), &mut claimed) {
            continue;
        }
        if let Some(finding) = FindingDirection::from_token(&m[2]) {
            for segment in m[1].split(',') {
                if let Some(reference) = normalize_letter_segment(segment, paragraph) {
                    found.insert(SubparagraphFinding {
                        paragraph_ref: reference,
                        finding,
                    });
                }
            }
        }
    }

    for m in SUB_LETTER_SINGLE.captures_iter(span) {
        let whole = m.get(0).expect("group 0 always present");
        if !claim(whole.start(), whole.end(), &mut claimed) {
            continue;
        }
        if let Some(finding) = FindingDirection::from_token(&m[2]) {
            found.insert(SubparagraphFinding {
                paragraph_ref: format!("{paragraph}.{}", m[1].to_lowercase()),
                finding,
            });
        }
    }

    found.into_iter().collect()
}

/// "a-b" under paragraph 1 becomes "1.a-1.b"; a lone "d" becomes "1.d".
fn normalize_letter_segment(segment: &str, paragraph: u32) -> Option<String> {
    let segment = segment.trim().to_lowercase();
    if let Some((from, to)) = segment.split_once(['-', '\u{2013}']) {
        let (from, to) = (from.trim(), to.trim());
        if from.len() == 1 && to.len() == 1 {
            return Some(format!("{paragraph}.{from}-{paragraph}.{to}"));
        }
        return None;
    }
    if segment.len() == 1 && segment.chars().all(|c| c.is_ascii_lowercase()) {
        return Some(format!("{paragraph}.{segment}"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn finding(reference: &str, direction: FindingDirection) -> SubparagraphFinding {
        SubparagraphFinding {
            paragraph_ref: reference.to_string(),
            finding: direction,
        }
    }

    #[test]
    fn paragraph_code_heading_with_numbered_range() {
        let text = "Paragraph 1, Guideline F: AGAINST APPLICANT\n\
                    Subparagraphs 1.a-1.b: Against Applicant";
        let findings = extract_formal_findings(text);

        let f = &findings[&GuidelineCode::F];
        assert_eq!(f.overall, FindingDirection::Against);
        assert_eq!(f.guideline_name, "Financial Considerations");
        assert_eq!(
            f.subparagraphs,
            vec![finding("1.a-1.b", FindingDirection::Against)]
        );
    }

    #[test]
    fn bounded_between_formal_findings_and_conclusion() {
        let text = "STATEMENT OF THE CASE\n\
                    Guideline F discussion: against applicant arguments were raised.\n\
                    FORMAL FINDINGS\n\
                    Paragraph 1, Guideline H: AGAINST APPLICANT\n\
                    Subparagraphs 1.a, 1.c: Against Applicant\n\
                    CONCLUSION\n\
                    Paragraph 2, Guideline J: FOR APPLICANT\n";
        let findings = extract_formal_findings(text);

        assert!(findings.contains_key(&GuidelineCode::H));
        // Heading after the CONCLUSION header is outside the section.
        assert!(!findings.contains_key(&GuidelineCode::J));
        assert_eq!(
            findings[&GuidelineCode::H].subparagraphs,
            vec![
                finding("1.a", FindingDirection::Against),
                finding("1.c", FindingDirection::Against),
            ]
        );
    }

    #[test]
    fn guideline_heading_without_paragraph_number() {
        let text = "FORMAL FINDINGS\n\
                    GUIDELINE G (Alcohol Consumption): FOR APPLICANT\n\
                    Subparagraphs a-b, d: For Applicant\n";
        let findings = extract_formal_findings(text);

        let g = &findings[&GuidelineCode::G];
        assert_eq!(g.overall, FindingDirection::For);
        assert_eq!(
            g.subparagraphs,
            vec![
                finding("1.a-1.b", FindingDirection::For),
                finding("1.d", FindingDirection::For),
            ]
        );
    }

    #[test]
    fn common_name_heading_resolves_through_keyword_table() {
        let text = "FORMAL FINDINGS\n\
                    Paragraph 1, Financial Considerations: AGAINST APPLICANT\n\
                    Subparagraphs 1.a: Against Applicant\n\
                    Paragraph 2, Alcohol Consumption: FOR APPLICANT\n\
                    Subparagraphs 2.a: For Applicant\n";
        let findings = extract_formal_findings(text);

        assert_eq!(findings[&GuidelineCode::F].overall, FindingDirection::Against);
        assert_eq!(findings[&GuidelineCode::G].overall, FindingDirection::For);
        assert_eq!(
            findings[&GuidelineCode::G].subparagraphs,
            vec![finding("2.a", FindingDirection::For)]
        );
    }

    #[test]
    fn concern_heading_format() {
        let text = "FORMAL FINDINGS\n\
                    Drug Involvement Security Concern: AGAINST APPLICANT\n\
                    Subparagraphs a: Against Applicant\n";
        let findings = extract_formal_findings(text);

        let h = &findings[&GuidelineCode::H];
        assert_eq!(h.overall, FindingDirection::Against);
        assert_eq!(h.subparagraphs, vec![finding("1.a", FindingDirection::Against)]);
    }

    #[test]
    fn earlier_format_is_not_overwritten_by_later_one() {
        // The paragraph+code heading says AGAINST; a later common-name line
        // for the same guideline says FOR. The earlier format wins.
        let text = "FORMAL FINDINGS\n\
                    Paragraph 1, Guideline F: AGAINST APPLICANT\n\
                    Subparagraph 1.a: Against Applicant\n\
                    Financial Considerations Concern: FOR APPLICANT\n";
        let findings = extract_formal_findings(text);
        assert_eq!(findings[&GuidelineCode::F].overall, FindingDirection::Against);
    }

    #[test]
    fn newline_before_direction_token() {
        let text = "FORMAL FINDINGS\n\
                    Paragraph 1, Guideline E: AGAINST APPLICANT\n\
                    Subparagraphs 1.a:\nAgainst Applicant\n";
        let findings = extract_formal_findings(text);
        assert_eq!(
            findings[&GuidelineCode::E].subparagraphs,
            vec![finding("1.a", FindingDirection::Against)]
        );
    }

    #[test]
    fn extraction_is_idempotent_and_deduplicated() {
        let text = "FORMAL FINDINGS\n\
                    Paragraph 1, Guideline F: AGAINST APPLICANT\n\
                    Subparagraph 1.a: Against Applicant\n\
                    Subparagraph 1.a: Against Applicant\n";
        let first = extract_formal_findings(text);
        let second = extract_formal_findings(text);
        assert_eq!(first, second);
        assert_eq!(
            first[&GuidelineCode::F].subparagraphs,
            vec![finding("1.a", FindingDirection::Against)]
        );
    }

    #[test]
    fn missing_section_yields_empty_map_for_ordinary_text() {
        let findings = extract_formal_findings("No findings were stated in this decision.");
        assert!(findings.is_empty());
    }

    #[test]
    fn mid_sentence_conclusion_does_not_bound_the_section() {
        let text = "FORMAL FINDINGS\n\
                    In conclusion as to the allegations, the findings follow.\n\
                    Paragraph 1, Guideline J: FOR APPLICANT\n\
                    Subparagraph 1.a: For Applicant\n";
        let findings = extract_formal_findings(text);
        assert!(findings.contains_key(&GuidelineCode::J));
    }
}
