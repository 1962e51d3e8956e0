//! Ordered regex pattern tables for outcome and guideline extraction.
//!
//! List order is semantic: the outcome tables are scanned pattern-by-pattern
//! with a rightmost-match-wins policy in the hearing classifier, and the
//! appeal direction tables are checked in declaration order with the first
//! matching entry winning. The tables are pinned against the decision corpus;
//! do not reorder or "simplify" entries without regression coverage.

use adjudex_protocol::{GuidelineCode, Outcome};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("static pattern table must compile")
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| compile(p)).collect()
}

static GRANTED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"clearance\s+is\s+granted",
        r"eligibility\s+for\s+access\s+to\s+classified\s+information\s+is\s+granted",
        r"eligibility\s+[^.]{0,50}\s+is\s+granted",
        r"access\s+to\s+classified\s+information\s+is\s+granted",
        r"favorable\s+determination",
        r"security\s+clearance\s+is\s+granted",
        r"eligibility\s+is\s+granted",
        r"eligibility\s+granted",
        r"clearance\s+granted",
        r"clearance\s+eligibility\s+is\s+granted",
        r"cac\s+eligibility\s+is\s+granted",
        r"trustworthiness\s+(?:designation\s+)?(?:is\s+)?granted",
        r"adp.{0,20}eligibility\s+(?:is\s+)?granted",
        r"eligibility\s+for\s+(?:a\s+)?(?:adp|public\s+trust)\s+position\s+(?:is\s+)?granted",
        r"(?:adp|public\s+trust)\s+position\s+(?:is\s+)?granted",
        r"request\s+for\s+(?:a\s+)?position\s+of\s+trust\s+is\s+granted",
        r"eligibility\s+for\s+access\s+to\s+sensitive\s+information.*?(?:is\s+)?granted",
        r"eligibility\s+for\s+(?:assignment\s+to\s+)?sensitive\s+(?:positions?|duties)\s+is\s+granted",
        r"assignment\s+to\s+sensitive\s+(?:positions?|duties)\s+is\s+granted",
        // "[\s\d]*" tolerates a page number breaking the phrase across pages.
        r"it\s+is\s+clearly\s+consistent[\s\d]*with\s+the\s+national\s+interests?\s+to\s+grant",
        r"clearly\s+consistent[\s\d]*with\s+the\s+national\s+interests?\s+to\s+grant",
        r"clearly\s+consistent[\s\d]*with\s+the\s+interests\s+of\s+national\s+security",
        r"clearly\s+consistent[\s\d]*with\s+the\s+security\s+interests",
        r"clearly\s+consistent[\s\n]*with\s+national\s+security\s+to\s+(?:approve|grant|continue)",
        r"(?:it\s+is\s+)?clearly[\s\n]+consistent[\s\n]+to[\s\n]+grant",
        r"clearly\s+consistent[\s\n]*with\s+the\s+national\s+interests?\s+to[\s\n]+(?:make|continue)",
        r"national\s+security\s+eligibility\s+is\s+granted",
        // Appeal board phrasings.
        r"favorable\s+decision\s+(?:is\s+)?affirmed",
        r"adverse\s+decision\s+(?:is\s+)?reversed",
        r"adverse\s+findings\s+are\s+not\s+sustainable",
    ])
});

static DENIED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"clearance\s+is\s+denied",
        r"eligibility\s+for\s+access\s+to\s+classified\s+information\s+is\s+denied",
        r"eligibility\s+[^.]{0,50}\s+is\s+denied",
        r"access\s+to\s+classified\s+information\s+is\s+denied",
        r"unfavorable\s+determination",
        r"security\s+clearance\s+is\s+denied",
        r"eligibility\s+is\s+denied",
        r"eligibility\s+denied",
        r"clearance\s+denied",
        r"clearance\s+eligibility\s+is\s+denied",
        r"cac\s+eligibility\s+is\s+denied",
        r"trustworthiness\s+(?:designation\s+)?is\s+denied",
        r"adp.{0,20}eligibility\s+is\s+denied",
        r"eligibility\s+for\s+a\s+public\s+trust\s+position\s+is\s+denied",
        r"public\s+trust\s+position\s+is\s+denied",
        r"eligibility\s+for\s+(?:assignment\s+to\s+)?sensitive\s+(?:positions?|duties)\s+is\s+denied",
        r"assignment\s+to\s+sensitive\s+(?:positions?|duties)\s+is\s+denied",
        r"it\s+is\s+not\s+clearly\s+consistent[\s\d]*with\s+the\s+national\s+interest",
        r"not\s+clearly\s+consistent[\s\d]*with\s+the\s+national\s+interest",
        r"not\s+clearly\s+consistent[\s\d]*with\s+the\s+interests\s+of\s+national\s+security",
        r"not\s+clearly\s+consistent[\s\d]*with\s+the\s+security\s+interests",
        r"not[\s\n]+clearly\s+consistent\s+with\s+national\s+security",
        r"it\s+is\s+clearly\s+not\s+consistent[\s\d]*with\s+the\s+national\s+interest",
        r"clearly\s+not\s+consistent[\s\d]*with\s+the\s+national\s+interest",
        r"national\s+security\s+eligibility\s+is\s+denied",
        r"eligibility\s+for\s+(?:a\s+)?(?:adp|public\s+trust)\s+position\s+(?:is\s+)?denied",
        r"(?:adp|public\s+trust)\s+position\s+(?:is\s+)?denied",
        r"request\s+for\s+(?:a\s+)?position\s+of\s+trust\s+is\s+denied",
        r"eligibility\s+for\s+access\s+to\s+sensitive\s+information.*?(?:is\s+)?denied",
        r"clearly\s+consistent[\s\n]*with\s+the\s+national\s+interests?\s+to[\s\n]+deny",
        // Appeal board phrasings.
        r"adverse\s+decision\s+(?:is\s+)?affirmed",
        r"favorable\s+decision\s+(?:is\s+)?reversed",
        r"favorable\s+(?:security\s+)?(?:clearance\s+)?determination\s+cannot\s+be\s+sustained",
        r"decision\s+(?:is\s+)?not\s+sustainable[^.]*reversed",
        r"record\s+(?:evidence\s+)?(?:is\s+)?not\s+sufficient\s+to\s+mitigate",
        r"runs\s+contrary\s+to\s+the\s+(?:weight\s+of\s+the\s+)?record\s+evidence[^.]*not\s+sustainable",
    ])
});

static REVOKED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"clearance\s+is\s+revoked",
        r"eligibility\s+[^.]{0,50}\s+is\s+revoked",
        r"access\s+to\s+classified\s+information\s+is\s+revoked",
        r"security\s+clearance\s+is\s+revoked",
        r"eligibility\s+revoked",
        r"clearance\s+revoked",
    ])
});

static REMANDED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"case\s+(?:is\s+)?remanded",
        r"decision\s+(?:is\s+)?remanded",
        r"remanded\s+to\s+the\s+administrative\s+judge",
        r"remanded\s+for\s+(?:further|additional)\s+proceedings",
    ])
});

/// Ordered dispositive-phrase patterns for one outcome category.
#[must_use]
pub fn outcome_patterns(outcome: Outcome) -> &'static [Regex] {
    match outcome {
        Outcome::Granted => &GRANTED_PATTERNS,
        Outcome::Denied => &DENIED_PATTERNS,
        Outcome::Revoked => &REVOKED_PATTERNS,
        Outcome::Remanded => &REMANDED_PATTERNS,
        Outcome::Unknown => &[],
    }
}

static GUIDELINE_PRESENCE: Lazy<Vec<(GuidelineCode, Regex)>> = Lazy::new(|| {
    [
        (GuidelineCode::A, r"Guideline\s*A|Allegiance|AG\s*\u{b6}\s*2"),
        (
            GuidelineCode::B,
            r"Guideline\s*B|Foreign\s*Influence|AG\s*\u{b6}\s*6|AG\s*\u{b6}\s*7",
        ),
        (
            GuidelineCode::C,
            r"Guideline\s*C|Foreign\s*Preference|AG\s*\u{b6}\s*9|AG\s*\u{b6}\s*10",
        ),
        (
            GuidelineCode::D,
            r"Guideline\s*D|Sexual\s*Behavior|AG\s*\u{b6}\s*12|AG\s*\u{b6}\s*13",
        ),
        (
            GuidelineCode::E,
            r"Guideline\s*E|Personal\s*Conduct|AG\s*\u{b6}\s*15|AG\s*\u{b6}\s*16",
        ),
        (
            GuidelineCode::F,
            r"Guideline\s*F|Financial\s*Considerations|AG\s*\u{b6}\s*18|AG\s*\u{b6}\s*19|AG\s*\u{b6}\s*20",
        ),
        (
            GuidelineCode::G,
            r"Guideline\s*G|Alcohol\s*Consumption|AG\s*\u{b6}\s*21|AG\s*\u{b6}\s*22",
        ),
        (
            GuidelineCode::H,
            r"Guideline\s*H|Drug\s*Involvement|AG\s*\u{b6}\s*24|AG\s*\u{b6}\s*25|AG\s*\u{b6}\s*26",
        ),
        (
            GuidelineCode::I,
            r"Guideline\s*I|Psychological\s*Conditions|AG\s*\u{b6}\s*27|AG\s*\u{b6}\s*28",
        ),
        (
            GuidelineCode::J,
            r"Guideline\s*J|Criminal\s*Conduct|AG\s*\u{b6}\s*30|AG\s*\u{b6}\s*31|AG\s*\u{b6}\s*32",
        ),
        (
            GuidelineCode::K,
            r"Guideline\s*K|Handling\s*Protected\s*Information|AG\s*\u{b6}\s*33|AG\s*\u{b6}\s*34",
        ),
        (
            GuidelineCode::L,
            r"Guideline\s*L|Outside\s*Activities|AG\s*\u{b6}\s*36|AG\s*\u{b6}\s*37",
        ),
        (
            GuidelineCode::M,
            r"Guideline\s*M|Use\s*of\s*Information\s*Technology|AG\s*\u{b6}\s*39|AG\s*\u{b6}\s*40",
        ),
    ]
    .into_iter()
    .map(|(code, pattern)| (code, compile(pattern)))
    .collect()
});

/// Disjunctive presence pattern for one guideline: the formal "Guideline X"
/// phrasing, the common name, or the AG paragraph citation range.
#[must_use]
pub fn guideline_patterns(code: GuidelineCode) -> &'static Regex {
    &GUIDELINE_PRESENCE
        .iter()
        .find(|(c, _)| *c == code)
        .expect("presence table covers all guideline codes")
        .1
}

static APPEAL_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"appeal\s+board",
        r"cross-?appeal",
        r"app\.\s*bd\.",
        r"applicant\s+(?:has\s+)?appealed",
        r"government\s+appealed",
        r"department\s+counsel\s+(?:has\s+)?appealed",
    ])
});

/// Markers that identify an appeal board decision in the document header.
#[must_use]
pub fn appeal_markers() -> &'static [Regex] {
    &APPEAL_MARKERS
}

/// Phrases implying the underlying hearing decision was a denial. Checked
/// before the grant indicators; most rejected appeals affirm a denial.
static DENIAL_INDICATORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"judge\s+denied",
        r"denied\s+applicant'?s?\s+(?:request|application|eligibility)",
        r"adverse\s+decision",
        r"applicant\s+(?:has\s+)?appealed",
        r"decision\s+is\s+sustainable",
        r"unfavorable\s+decision",
    ])
});

#[must_use]
pub fn denial_indicators() -> &'static [Regex] {
    &DENIAL_INDICATORS
}

static GRANT_INDICATORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"judge\s+granted",
        r"granted\s+applicant'?s?\s+(?:request|application|eligibility)",
        r"favorable\s+decision",
        r"government\s+(?:has\s+)?appealed",
        r"department\s+counsel\s+(?:has\s+)?appealed",
        r"cannot\s+be\s+sustained",
    ])
});

#[must_use]
pub fn grant_indicators() -> &'static [Regex] {
    &GRANT_INDICATORS
}

static REMAND_INDICATORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"remanded\s+for\s+(?:further|additional)\s+proceedings",
        r"remanded\s+to\s+the\s+administrative\s+judge",
        r"\bremanded\b",
    ])
});

#[must_use]
pub fn remand_indicators() -> &'static [Regex] {
    &REMAND_INDICATORS
}

/// Action the appeal board took in its Order section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Affirmed,
    Reversed,
    Remanded,
}

static ORDER_DIRECTIVES: Lazy<Vec<(OrderAction, Regex)>> = Lazy::new(|| {
    vec![
        (OrderAction::Remanded, compile(r"\bremand(?:ed)?\b")),
        (OrderAction::Affirmed, compile(r"\baffirmed\b")),
        (OrderAction::Reversed, compile(r"\breversed\b")),
    ]
});

/// Order actions in precedence order: remand always outranks affirm/reverse.
#[must_use]
pub fn order_directives() -> &'static [(OrderAction, Regex)] {
    &ORDER_DIRECTIVES
}

/// A directional phrase that resolves an appeal outcome on its own, because
/// it names both the order action and the sign of the underlying decision.
pub struct DigestResolution {
    pub pattern: Regex,
    pub outcome: Outcome,
}

static DIGEST_RESOLUTIONS: Lazy<Vec<DigestResolution>> = Lazy::new(|| {
    [
        (r"adverse\s+decision\s+(?:is\s+)?affirmed", Outcome::Denied),
        (r"favorable\s+decision\s+(?:is\s+)?affirmed", Outcome::Granted),
        (r"adverse\s+decision\s+(?:is\s+)?reversed", Outcome::Granted),
        (r"favorable\s+decision\s+(?:is\s+)?reversed", Outcome::Denied),
        (
            r"adverse\s+findings\s+are\s+not\s+sustainable",
            Outcome::Granted,
        ),
        (
            r"favorable\s+(?:security\s+)?(?:clearance\s+)?determination\s+cannot\s+be\s+sustained",
            Outcome::Denied,
        ),
    ]
    .into_iter()
    .map(|(pattern, outcome)| DigestResolution {
        pattern: compile(pattern),
        outcome,
    })
    .collect()
});

#[must_use]
pub fn digest_resolutions() -> &'static [DigestResolution] {
    &DIGEST_RESOLUTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any_match(patterns: &[Regex], text: &str) -> bool {
        patterns.iter().any(|p| p.is_match(text))
    }

    #[test]
    fn table_sizes_are_pinned() {
        assert_eq!(outcome_patterns(Outcome::Granted).len(), 30);
        assert_eq!(outcome_patterns(Outcome::Denied).len(), 36);
        assert_eq!(outcome_patterns(Outcome::Revoked).len(), 6);
        assert_eq!(outcome_patterns(Outcome::Remanded).len(), 4);
        assert!(outcome_patterns(Outcome::Unknown).is_empty());
    }

    #[test]
    fn granted_patterns_cover_corpus_phrasings() {
        let granted = outcome_patterns(Outcome::Granted);
        for text in [
            "Applicant's security clearance is granted.",
            "Eligibility for access to classified information is granted.",
            "Eligibility for a security clearance is granted.",
            "I make a favorable determination for Applicant.",
            "CAC eligibility is granted.",
            "Trustworthiness designation is granted.",
            "ADP-I/II/III eligibility is granted.",
            "Eligibility for a public trust position is granted.",
            "Request for a position of trust is granted.",
            "Eligibility for assignment to sensitive duties is granted.",
            "It is clearly consistent\n5\nwith the national interest to grant.",
            "It is clearly consistent with national security to continue.",
            "Applicant's national security eligibility is granted.",
            "The favorable decision is affirmed.",
            "The adverse decision is reversed.",
            "The Administrative Judge's adverse findings are not sustainable.",
        ] {
            assert!(any_match(granted, text), "no GRANTED pattern for: {text}");
        }
    }

    #[test]
    fn denied_patterns_cover_corpus_phrasings() {
        let denied = outcome_patterns(Outcome::Denied);
        for text in [
            "Applicant's security clearance is denied.",
            "Eligibility for a security clearance is denied.",
            "I make an unfavorable determination.",
            "Trustworthiness designation is denied.",
            "It is not clearly consistent\n6\nwith the national interest.",
            "It is clearly not consistent with the national interest.",
            "Eligibility for public trust position denied.",
            "The adverse decision is affirmed.",
            "The favorable decision is reversed.",
            "The favorable security clearance determination cannot be sustained.",
            "The decision is not sustainable and is reversed.",
            "The record evidence is not sufficient to mitigate.",
            "The decision runs contrary to the weight of the record evidence and is not sustainable.",
        ] {
            assert!(any_match(denied, text), "no DENIED pattern for: {text}");
        }
    }

    #[test]
    fn revoked_and_remanded_patterns_match() {
        assert!(any_match(
            outcome_patterns(Outcome::Revoked),
            "Applicant's security clearance is REVOKED."
        ));
        assert!(any_match(
            outcome_patterns(Outcome::Remanded),
            "The case is remanded to the Administrative Judge."
        ));
        assert!(any_match(
            outcome_patterns(Outcome::Remanded),
            "The case is remanded for additional proceedings."
        ));
    }

    #[test]
    fn guideline_presence_patterns_match_citations_and_names() {
        assert!(guideline_patterns(GuidelineCode::F).is_match("AG \u{b6} 19(a)"));
        assert!(guideline_patterns(GuidelineCode::F).is_match("Financial Considerations apply"));
        assert!(guideline_patterns(GuidelineCode::A).is_match("Guideline  A"));
        assert!(guideline_patterns(GuidelineCode::M)
            .is_match("Use of Information Technology misuse"));
        assert!(!guideline_patterns(GuidelineCode::D).is_match("nothing relevant here"));
    }

    #[test]
    fn digest_resolutions_map_direction_to_outcome() {
        let hit = |text: &str| {
            digest_resolutions()
                .iter()
                .find(|r| r.pattern.is_match(text))
                .map(|r| r.outcome)
        };
        assert_eq!(hit("The adverse decision is affirmed."), Some(Outcome::Denied));
        assert_eq!(hit("The adverse decision is reversed."), Some(Outcome::Granted));
        assert_eq!(hit("The favorable decision reversed."), Some(Outcome::Denied));
        assert_eq!(hit("no directional phrase"), None);
    }
}
