//! Rule-based synthesis of the case-level recommendation.
//!
//! Folds the 13 per-guideline assessments (from either classifier) and
//! optional precedent statistics into one recommendation with a bounded
//! confidence. The decision table is evaluated strictly in order: no
//! relevant guidelines, any severe guideline, three or more relevant
//! guidelines, then the few-concerns default.

use adjudex_protocol::{
    GuidelineAssessment, OverallAssessment, PrecedentStats, Recommendation,
};

const CONFIDENCE_FLOOR: f32 = 0.35;
const CONFIDENCE_CEILING: f32 = 0.92;
const KEY_ITEM_LIMIT: usize = 5;

/// Synthesize the overall recommendation from guideline assessments and
/// optional precedent statistics.
#[must_use]
pub fn synthesize_recommendation(
    assessments: &[GuidelineAssessment],
    precedents: Option<&PrecedentStats>,
) -> OverallAssessment {
    let relevant: Vec<&GuidelineAssessment> = assessments.iter().filter(|a| a.relevant).collect();
    let severe: Vec<&GuidelineAssessment> = relevant
        .iter()
        .copied()
        .filter(|a| a.is_severe())
        .collect();

    let mut key_concerns = Vec::new();
    let mut key_mitigations = Vec::new();
    for assessment in &relevant {
        if !assessment.disqualifiers.is_empty() {
            key_concerns.push(format!(
                "{}: {} disqualifying condition(s) identified",
                assessment.name,
                assessment.disqualifiers.len()
            ));
        }
        let applicable = assessment.applicable_mitigators();
        if applicable > 0 {
            key_mitigations.push(format!(
                "{}: {applicable} potentially applicable mitigating condition(s)",
                assessment.name
            ));
        }
    }
    key_concerns.truncate(KEY_ITEM_LIMIT);
    key_mitigations.truncate(KEY_ITEM_LIMIT);

    let confidence = overall_confidence(&relevant, severe.len(), precedents);

    let (recommendation, summary) = if relevant.is_empty() {
        (
            Recommendation::InsufficientInfo,
            "Analysis found no clear security concerns. Limited information available for \
             comprehensive assessment."
                .to_string(),
        )
    } else if !severe.is_empty() {
        let summary = match precedents {
            Some(stats) if stats.denied_percentage > 0.7 => format!(
                "Analysis identified {} severe concern area(s). Similar precedents show {:.0}% \
                 denial rate. Significant security concerns identified through pattern matching.",
                severe.len(),
                stats.denied_percentage * 100.0
            ),
            _ => format!(
                "Analysis identified {} severe concern area(s) based on keyword and pattern \
                 matching. Further investigation recommended.",
                severe.len()
            ),
        };
        (Recommendation::Unfavorable, summary)
    } else if relevant.len() >= 3 {
        match precedents {
            Some(stats) if stats.granted_percentage > 0.6 => (
                Recommendation::Conditional,
                format!(
                    "Multiple security concern areas identified ({} guidelines). Similar cases \
                     show {:.0}% approval rate with mitigation. Conditional recommendation \
                     pending mitigation verification.",
                    relevant.len(),
                    stats.granted_percentage * 100.0
                ),
            ),
            Some(_) => (
                Recommendation::Unfavorable,
                format!(
                    "Multiple security concerns across {} guideline areas. Similar precedents \
                     suggest unfavorable outcomes without strong mitigation.",
                    relevant.len()
                ),
            ),
            None => (
                Recommendation::Unfavorable,
                format!(
                    "Pattern analysis identified concerns in {} guideline areas. Unfavorable \
                     recommendation pending further review.",
                    relevant.len()
                ),
            ),
        }
    } else {
        let summary = if key_mitigations.is_empty() {
            format!(
                "Security concerns identified in {} area(s). Analysis suggests conditional \
                 recommendation pending detailed review.",
                relevant.len()
            )
        } else {
            match precedents {
                Some(stats) if stats.granted_percentage > 0.5 => format!(
                    "Limited security concerns identified with potential mitigating factors. \
                     Similar cases show {:.0}% approval rate.",
                    stats.granted_percentage * 100.0
                ),
                _ => "Security concerns identified but potential mitigating factors present. \
                      Conditional recommendation pending verification of mitigation."
                    .to_string(),
            }
        };
        (Recommendation::Conditional, summary)
    };

    OverallAssessment {
        recommendation,
        confidence,
        summary,
        key_concerns,
        key_mitigations,
    }
}

/// Base confidence is the mean of the relevant guidelines' confidences,
/// boosted by severe-concern count and precedent alignment, then clamped.
fn overall_confidence(
    relevant: &[&GuidelineAssessment],
    severe_count: usize,
    precedents: Option<&PrecedentStats>,
) -> f32 {
    if relevant.is_empty() {
        return CONFIDENCE_FLOOR;
    }

    let base =
        relevant.iter().map(|a| a.confidence).sum::<f32>() / relevant.len() as f32;
    let severity_boost = (severe_count as f32 * 0.05).min(0.15);
    let precedent_boost = precedents.map_or(0.0, |stats| {
        if stats.denied_percentage > 0.7 {
            0.10
        } else if stats.avg_relevance > 0.7 {
            0.05
        } else {
            0.0
        }
    });

    (base + severity_boost + precedent_boost).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adjudex_protocol::{
        DisqualifierFinding, GuidelineCode, MitigatorApplicability, MitigatorFinding, Outcome,
        SeverityLevel,
    };

    fn not_relevant_all() -> Vec<GuidelineAssessment> {
        GuidelineCode::ALL
            .into_iter()
            .map(|code| GuidelineAssessment::not_relevant(code, "name"))
            .collect()
    }

    fn relevant(
        code: GuidelineCode,
        severity: SeverityLevel,
        confidence: f32,
        disqualifiers: usize,
        partial_mitigators: usize,
    ) -> GuidelineAssessment {
        GuidelineAssessment {
            code,
            name: format!("Guideline {code}"),
            relevant: true,
            severity: Some(severity),
            disqualifiers: (0..disqualifiers)
                .map(|i| DisqualifierFinding {
                    code: format!("AG \u{b6} 19({i})"),
                    text: String::new(),
                    evidence: String::new(),
                    confidence: 0.7,
                })
                .collect(),
            mitigators: (0..partial_mitigators)
                .map(|i| MitigatorFinding {
                    code: format!("AG \u{b6} 20({i})"),
                    text: String::new(),
                    applicability: MitigatorApplicability::Partial,
                    reasoning: String::new(),
                    evidence: None,
                })
                .collect(),
            reasoning: String::new(),
            confidence,
        }
    }

    fn stats(denied: f32, granted: f32, avg_relevance: f32) -> PrecedentStats {
        PrecedentStats {
            total: 10,
            denied_percentage: denied,
            granted_percentage: granted,
            most_common_outcome: if denied >= granted {
                Outcome::Denied
            } else {
                Outcome::Granted
            },
            avg_relevance,
        }
    }

    #[test]
    fn no_relevant_guidelines_is_insufficient_info() {
        let overall = synthesize_recommendation(&not_relevant_all(), None);
        assert_eq!(overall.recommendation, Recommendation::InsufficientInfo);
        assert!((overall.confidence - 0.35).abs() < f32::EPSILON);
        assert!(overall.key_concerns.is_empty());
    }

    #[test]
    fn severe_guideline_forces_unfavorable() {
        let mut assessments = not_relevant_all();
        assessments[5] = relevant(GuidelineCode::F, SeverityLevel::D, 0.9, 2, 0);
        let overall = synthesize_recommendation(&assessments, None);
        assert_eq!(overall.recommendation, Recommendation::Unfavorable);
        // base 0.9 + one severe 0.05, capped at 0.92.
        assert!((overall.confidence - 0.92).abs() < 1e-6);
    }

    #[test]
    fn severe_with_aligned_precedents_mentions_denial_rate() {
        let mut assessments = not_relevant_all();
        assessments[5] = relevant(GuidelineCode::F, SeverityLevel::C, 0.6, 1, 0);
        let overall =
            synthesize_recommendation(&assessments, Some(&stats(0.8, 0.1, 0.5)));
        assert_eq!(overall.recommendation, Recommendation::Unfavorable);
        assert!(overall.summary.contains("80% denial rate"), "{}", overall.summary);
        // base 0.6 + severity 0.05 + precedent 0.10.
        assert!((overall.confidence - 0.75).abs() < 1e-6);
    }

    #[test]
    fn three_moderate_concerns_default_unfavorable() {
        let mut assessments = not_relevant_all();
        assessments[4] = relevant(GuidelineCode::E, SeverityLevel::B, 0.6, 1, 0);
        assessments[5] = relevant(GuidelineCode::F, SeverityLevel::B, 0.6, 1, 0);
        assessments[9] = relevant(GuidelineCode::J, SeverityLevel::B, 0.6, 1, 0);
        let overall = synthesize_recommendation(&assessments, None);
        assert_eq!(overall.recommendation, Recommendation::Unfavorable);
        assert_eq!(overall.key_concerns.len(), 3);
    }

    #[test]
    fn favorable_precedents_soften_multiple_concerns_to_conditional() {
        let mut assessments = not_relevant_all();
        assessments[4] = relevant(GuidelineCode::E, SeverityLevel::B, 0.6, 1, 0);
        assessments[5] = relevant(GuidelineCode::F, SeverityLevel::B, 0.6, 1, 0);
        assessments[9] = relevant(GuidelineCode::J, SeverityLevel::B, 0.6, 1, 0);
        let overall =
            synthesize_recommendation(&assessments, Some(&stats(0.2, 0.7, 0.5)));
        assert_eq!(overall.recommendation, Recommendation::Conditional);
        assert!(overall.summary.contains("70% approval rate"), "{}", overall.summary);
    }

    #[test]
    fn few_concerns_are_conditional_with_mitigation_note() {
        let mut assessments = not_relevant_all();
        assessments[5] = relevant(GuidelineCode::F, SeverityLevel::B, 0.6, 1, 2);
        let overall = synthesize_recommendation(&assessments, None);
        assert_eq!(overall.recommendation, Recommendation::Conditional);
        assert_eq!(overall.key_mitigations.len(), 1);
        assert!(overall
            .key_mitigations[0]
            .contains("2 potentially applicable mitigating condition(s)"));
    }

    #[test]
    fn minimal_mitigators_do_not_count_as_key_mitigations() {
        let mut assessments = not_relevant_all();
        let mut a = relevant(GuidelineCode::F, SeverityLevel::B, 0.6, 1, 0);
        a.mitigators.push(MitigatorFinding {
            code: "AG \u{b6} 20(a)".to_string(),
            text: String::new(),
            applicability: MitigatorApplicability::Minimal,
            reasoning: String::new(),
            evidence: None,
        });
        assessments[5] = a;
        let overall = synthesize_recommendation(&assessments, None);
        assert!(overall.key_mitigations.is_empty());
    }

    #[test]
    fn confidence_stays_within_bounds() {
        let mut assessments = not_relevant_all();
        for (idx, code) in [(4, GuidelineCode::E), (5, GuidelineCode::F), (9, GuidelineCode::J)] {
            assessments[idx] = relevant(code, SeverityLevel::D, 0.95, 3, 0);
        }
        let overall =
            synthesize_recommendation(&assessments, Some(&stats(0.9, 0.05, 0.9)));
        assert!(overall.confidence <= 0.92);
        assert!(overall.confidence >= 0.35);
    }
}
