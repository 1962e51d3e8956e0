use adjudex_protocol::GuidelineCode;
use adjudex_guidelines::guideline_patterns;
use std::collections::BTreeSet;

/// Which guidelines are textually present in the document.
///
/// Binary presence only: one disjunctive pattern per code (formal
/// "Guideline X" phrasing, common name, or AG paragraph citation range).
#[must_use]
pub fn extract_guidelines(text: &str) -> BTreeSet<GuidelineCode> {
    GuidelineCode::ALL
        .into_iter()
        .filter(|code| guideline_patterns(*code).is_match(text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_named_and_cited_guidelines() {
        let text = "The SOR alleged concerns under Guideline F (Financial Considerations) \
                    and cross-referenced AG \u{b6} 25(a) regarding substance misuse.";
        let found = extract_guidelines(text);
        assert!(found.contains(&GuidelineCode::F));
        assert!(found.contains(&GuidelineCode::H));
        assert!(!found.contains(&GuidelineCode::L));
    }

    #[test]
    fn empty_text_yields_empty_set() {
        assert!(extract_guidelines("").is_empty());
    }

    #[test]
    fn result_is_ordered_by_code() {
        let text = "Guideline J and Guideline B and Guideline F all apply.";
        let found: Vec<_> = extract_guidelines(text).into_iter().collect();
        assert_eq!(
            found,
            vec![GuidelineCode::B, GuidelineCode::F, GuidelineCode::J]
        );
    }
}
