//! Static vocabulary tables for the relevance classifiers.
//!
//! Keyword lists drive the plain keyword classifier; the bigram/trigram and
//! context-indicator tables feed the ensemble scorer. All tables are tuned
//! against the decision corpus, so the word lists are deliberately literal.

use adjudex_protocol::GuidelineCode;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Stopwords excluded when extracting condition keywords.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "been", "be", "have", "has", "had", "do", "does", "did",
    "that", "this", "it", "if", "not",
];

/// Per-guideline keyword lists for frequency-based relevance.
#[must_use]
pub fn keywords(code: GuidelineCode) -> &'static [&'static str] {
    match code {
        GuidelineCode::A => &[
            "allegiance", "treason", "espionage", "sabotage", "terrorism", "sedition", "overthrow",
        ],
        GuidelineCode::B => &[
            "foreign",
            "foreign contact",
            "foreign national",
            "dual citizenship",
            "foreign property",
            "foreign business",
        ],
        GuidelineCode::C => &[
            "foreign preference",
            "foreign passport",
            "foreign voting",
            "foreign military",
        ],
        GuidelineCode::D => &[
            "sexual behavior",
            "sexual conduct",
            "pornography",
            "sexual misconduct",
        ],
        GuidelineCode::E => &[
            "personal conduct",
            "dishonest",
            "untrustworthy",
            "rule violation",
            "misconduct",
        ],
        GuidelineCode::F => &[
            "financial",
            "debt",
            "bankruptcy",
            "foreclosure",
            "delinquent",
            "credit",
            "financial problem",
        ],
        GuidelineCode::G => &[
            "alcohol", "drinking", "dui", "dwi", "intoxication", "alcohol abuse",
        ],
        GuidelineCode::H => &[
            "drug",
            "marijuana",
            "cocaine",
            "heroin",
            "illegal substance",
            "prescription abuse",
            "controlled substance",
        ],
        GuidelineCode::I => &[
            "psychological",
            "mental health",
            "psychiatric",
            "counseling",
            "therapy",
            "diagnosis",
        ],
        GuidelineCode::J => &[
            "criminal",
            "arrest",
            "conviction",
            "felony",
            "misdemeanor",
            "charge",
            "probation",
        ],
        GuidelineCode::K => &[
            "handling protected information",
            "classified",
            "security violation",
            "spillage",
        ],
        GuidelineCode::L => &[
            "outside activities",
            "conflict of interest",
            "outside employment",
        ],
        GuidelineCode::M => &[
            "use of information technology",
            "cyber",
            "unauthorized access",
            "computer",
        ],
    }
}

/// Bigram/trigram phrase tables for one guideline.
pub struct Ngrams {
    pub bigrams: &'static [&'static str],
    pub trigrams: &'static [&'static str],
}

impl Ngrams {
    #[must_use]
    pub fn total(&self) -> usize {
        self.bigrams.len() + self.trigrams.len()
    }
}

#[must_use]
pub fn ngrams(code: GuidelineCode) -> &'static Ngrams {
    match code {
        GuidelineCode::A => &Ngrams {
            bigrams: &[
                "foreign allegiance",
                "divided loyalty",
                "foreign country",
                "foreign government",
                "preference for",
            ],
            trigrams: &[
                "allegiance to united",
                "loyalty to foreign",
                "divided loyalty between",
            ],
        },
        GuidelineCode::B => &Ngrams {
            bigrams: &[
                "foreign contact",
                "foreign influence",
                "foreign national",
                "foreign travel",
                "foreign business",
                "foreign property",
            ],
            trigrams: &[
                "contact with foreign",
                "foreign influence concern",
                "foreign family members",
            ],
        },
        GuidelineCode::C => &Ngrams {
            bigrams: &[
                "foreign preference",
                "foreign passport",
                "dual citizenship",
                "foreign military",
                "foreign benefit",
            ],
            trigrams: &[
                "acting to acquire",
                "preference for foreign",
                "foreign citizenship actively",
            ],
        },
        GuidelineCode::D => &Ngrams {
            bigrams: &[
                "sexual behavior",
                "sexual conduct",
                "sexual activity",
                "coercion exploitation",
                "personal conduct",
            ],
            trigrams: &[
                "sexual behavior causing",
                "vulnerability to coercion",
                "sexual conduct reflects",
            ],
        },
        GuidelineCode::E => &Ngrams {
            bigrams: &[
                "personal conduct",
                "lack candor",
                "deliberately provided",
                "false statement",
                "misleading information",
                "failure comply",
                "concealed information",
                "dishonest conduct",
            ],
            trigrams: &[
                "deliberately providing false",
                "failure to comply",
                "lack of candor",
                "concealment of information",
                "dishonest or illegal",
            ],
        },
        GuidelineCode::F => &Ngrams {
            bigrams: &[
                "financial considerations",
                "financial difficulty",
                "delinquent debt",
                "bankruptcy filed",
                "foreclosure proceedings",
                "financial irresponsibility",
                "inability to satisfy",
                "tax lien",
                "credit report",
                "unpaid debt",
                "financial problems",
                "overdue accounts",
                "collection account",
                "charged off",
                "past due",
                "owed money",
                "outstanding debt",
                "failed to pay",
                "debts owed",
                "financial issues",
                "credit card",
                "medical debt",
                "student loan",
                "delinquent accounts",
                "credit history",
                "financial record",
                "financial situation",
                "debts totaling",
            ],
            trigrams: &[
                "history of financial",
                "unable to satisfy",
                "financial problems resulted",
                "delinquent debt totaling",
                "filed for bankruptcy",
                "failure to pay",
                "history of not",
                "unwilling to satisfy",
                "unable or unwilling",
                "debts listed on",
                "alleged in sor",
                "financial considerations concern",
            ],
        },
        GuidelineCode::G => &Ngrams {
            bigrams: &[
                "alcohol consumption",
                "alcohol use",
                "driving under",
                "alcohol related",
                "binge drinking",
                "dui arrest",
                "dwi",
                "alcohol incident",
                "alcohol disorder",
                "alcohol treatment",
            ],
            trigrams: &[
                "alcohol use disorder",
                "driving under influence",
                "habitual alcohol consumption",
                "alcohol related incident",
                "diagnosis of alcohol",
                "treatment for alcohol",
            ],
        },
        GuidelineCode::H => &Ngrams {
            bigrams: &[
                "drug involvement",
                "substance misuse",
                "illegal drug",
                "drug use",
                "controlled substance",
                "drug possession",
                "drug testing",
                "positive test",
            ],
            trigrams: &[
                "illegal drug use",
                "use of illegal",
                "drug abuse violation",
                "testing positive for",
                "possession of controlled",
            ],
        },
        GuidelineCode::I => &Ngrams {
            bigrams: &[
                "psychological condition",
                "mental health",
                "psychiatric evaluation",
                "mental disorder",
                "emotional instability",
                "psychological evaluation",
                "mental health professional",
                "diagnosis of",
            ],
            trigrams: &[
                "opinion by qualified",
                "mental health professional",
                "psychological or psychiatric",
                "condition may impair",
                "diagnosis by mental",
            ],
        },
        GuidelineCode::J => &Ngrams {
            bigrams: &[
                "criminal conduct",
                "criminal activity",
                "criminal offense",
                "arrest for",
                "convicted of",
                "criminal charge",
                "pattern of",
                "illegal activity",
                "criminal history",
            ],
            trigrams: &[
                "pattern of criminal",
                "criminal or dishonest",
                "single serious crime",
                "evidence of criminal",
                "history of criminal",
            ],
        },
        GuidelineCode::K => &Ngrams {
            bigrams: &[
                "handling protected",
                "protected information",
                "security violation",
                "classified information",
                "unauthorized disclosure",
                "security procedures",
                "mishandling of",
                "security rules",
            ],
            trigrams: &[
                "disclosure of protected",
                "failure to comply",
                "handling of protected",
                "violation of security",
                "unauthorized access to",
            ],
        },
        GuidelineCode::L => &Ngrams {
            bigrams: &[
                "outside activities",
                "conflict of interest",
                "employment with",
                "foreign employment",
                "outside employment",
                "business interest",
            ],
            trigrams: &[
                "employment with foreign",
                "outside activity poses",
                "conflict of interest",
            ],
        },
        GuidelineCode::M => &Ngrams {
            bigrams: &[
                "information technology",
                "unauthorized access",
                "computer systems",
                "misuse of",
                "cyber security",
                "it systems",
            ],
            trigrams: &[
                "misuse of information",
                "unauthorized access to",
                "information technology systems",
            ],
        },
    }
}

/// Context words that must co-occur with a guideline phrase inside one
/// sentence for the contextual signal. Only the high-volume guidelines carry
/// a table; the rest contribute a zero contextual score.
#[must_use]
pub fn context_indicators(code: GuidelineCode) -> &'static [&'static str] {
    match code {
        GuidelineCode::G => &[
            "disorder",
            "incident",
            "treatment",
            "consumption",
            "rehabilitation",
            "diagnosis",
            "abuse",
            "dependence",
            "arrest",
            "conviction",
        ],
        GuidelineCode::E => &[
            "conduct",
            "disclosure",
            "statement",
            "violation",
            "omission",
            "falsification",
            "dishonest",
            "misleading",
            "concealment",
        ],
        GuidelineCode::F => &[
            "debt",
            "bankruptcy",
            "foreclosure",
            "delinquent",
            "financial",
            "payment",
            "credit",
            "lien",
            "judgment",
            "defaulted",
            "owed",
            "unpaid",
            "collection",
            "account",
            "creditor",
            "charged",
            "overdue",
            "resolved",
            "alleged",
            "sor",
            "totaling",
            "owing",
            "admitted",
            "denied",
        ],
        GuidelineCode::J => &[
            "conduct",
            "conviction",
            "arrest",
            "offense",
            "charge",
            "crime",
            "illegal",
            "violation",
            "sentenced",
            "probation",
        ],
        GuidelineCode::I => &[
            "disorder",
            "condition",
            "diagnosis",
            "treatment",
            "impairment",
            "evaluation",
            "professional",
            "psychiatric",
            "psychological",
        ],
        GuidelineCode::H => &[
            "drug",
            "substance",
            "marijuana",
            "cocaine",
            "heroin",
            "prescription",
            "illegal",
            "controlled",
            "abuse",
            "misuse",
            "positive",
            "test",
        ],
        _ => &[],
    }
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .expect("static severe pattern must compile")
        })
        .collect()
}

static SEVERE_F: Lazy<Vec<Regex>> =
    Lazy::new(|| compile_all(&[r"\$\s*\d{6,}", r"bankruptcy", r"foreclosure"]));
static SEVERE_G: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"multiple\s+dui",
        r"dui.*dui",
        r"alcohol.*treatment",
        r"rehabilitation",
    ])
});
static SEVERE_H: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"cocaine|heroin|methamphetamine",
        r"drug.*sale|sell.*drug",
        r"trafficking",
    ])
});
static SEVERE_J: Lazy<Vec<Regex>> =
    Lazy::new(|| compile_all(&[r"felony", r"prison", r"incarceration"]));

/// Patterns that force severity D in the keyword classifier.
#[must_use]
pub fn severe_patterns(code: GuidelineCode) -> &'static [Regex] {
    match code {
        GuidelineCode::F => &SEVERE_F,
        GuidelineCode::G => &SEVERE_G,
        GuidelineCode::H => &SEVERE_H,
        GuidelineCode::J => &SEVERE_J,
        _ => &[],
    }
}

static SEVERE_ENH_G: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"multiple\s+dui",
        r"alcohol.*rehabilitation.*fail",
        r"alcohol use disorder.*severe",
    ])
});
static SEVERE_ENH_F: Lazy<Vec<Regex>> =
    Lazy::new(|| compile_all(&[r"\$\d{6,}", r"bankruptcy", r"foreclosure", r"tax.*lien"]));
static SEVERE_ENH_H: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"cocaine|heroin|methamphetamine",
        r"drug.*trafficking",
        r"multiple.*positive.*test",
    ])
});
static SEVERE_ENH_J: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"felony",
        r"pattern.*criminal",
        r"multiple.*arrest",
        r"serious.*crime",
    ])
});
static SEVERE_ENH_E: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"deliberately.*false",
        r"concealed.*classified",
        r"repeated.*dishonest",
    ])
});
static SEVERE_ENH_I: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"severe.*disorder",
        r"significant.*impairment",
        r"dangerous.*behavior",
    ])
});

/// Broader severe-pattern table used by the ensemble scorer.
#[must_use]
pub fn severe_patterns_enhanced(code: GuidelineCode) -> &'static [Regex] {
    match code {
        GuidelineCode::G => &SEVERE_ENH_G,
        GuidelineCode::F => &SEVERE_ENH_F,
        GuidelineCode::H => &SEVERE_ENH_H,
        GuidelineCode::J => &SEVERE_ENH_J,
        GuidelineCode::E => &SEVERE_ENH_E,
        GuidelineCode::I => &SEVERE_ENH_I,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_has_keywords() {
        for code in GuidelineCode::ALL {
            assert!(!keywords(code).is_empty(), "no keywords for {code}");
            assert!(ngrams(code).total() > 0, "no ngrams for {code}");
        }
    }

    #[test]
    fn severe_financial_patterns_match_large_debt_and_bankruptcy() {
        let patterns = severe_patterns(GuidelineCode::F);
        assert!(patterns.iter().any(|p| p.is_match("debts of $150000 remain")));
        assert!(patterns.iter().any(|p| p.is_match("filed for Bankruptcy in 2020")));
        assert!(!patterns.iter().any(|p| p.is_match("a modest $500 balance")));
    }

    #[test]
    fn codes_without_severe_tables_return_empty() {
        assert!(severe_patterns(GuidelineCode::A).is_empty());
        assert!(severe_patterns_enhanced(GuidelineCode::L).is_empty());
        assert!(!severe_patterns_enhanced(GuidelineCode::I).is_empty());
    }
}
