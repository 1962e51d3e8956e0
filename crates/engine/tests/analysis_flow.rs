use adjudex_assess::{EmbeddingHandle, EnsembleScorer};
use adjudex_engine::{AnalysisPath, AnalyzeOptions, Engine};
use adjudex_protocol::{
    CaseRecord, FindingDirection, GuidelineCode, Outcome, PrecedentSummary, Recommendation,
    SeverityLevel,
};
use adjudex_guidelines::Catalog;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::sync::Arc;

const FINANCIAL_DECISION: &str = "\
DEPARTMENT OF DEFENSE\n\
ISCR Case No. 23-01234\n\
Date: June 2, 2023\n\n\
STATEMENT OF THE CASE\n\
The SOR alleged security concerns under Guideline F (Financial Considerations).\n\n\
FINDINGS OF FACT\n\
Applicant has a history of financial problems. Eleven delinquent debts totaling $85,000 \
were alleged in SOR. Applicant filed for bankruptcy in 2019. He has an inability to \
satisfy debts stemming from a period of unemployment. In mitigation, Applicant received \
credit counseling and initiated a good-faith effort to repay overdue creditors.\n\n\
FORMAL FINDINGS\n\
Paragraph 1, Guideline F: AGAINST APPLICANT\n\
Subparagraphs 1.a-1.b: Against Applicant\n\
Subparagraph 1.c: For Applicant\n\n\
CONCLUSION\n\
Applicant's eligibility for a security clearance is DENIED.\n\n\
Jane Q. Smith, Administrative Judge\n";

fn engine() -> Engine {
    let _ = env_logger::builder().is_test(true).try_init();
    Engine::new()
}

fn engine_with_stub_embeddings() -> Engine {
    let catalog = Arc::new(Catalog::builtin().clone());
    let ensemble =
        EnsembleScorer::with_embedding(catalog.clone(), EmbeddingHandle::stub(64)).unwrap();
    Engine::with_ensemble(catalog, ensemble)
}

fn assert_thirteen_unique(assessments: &[adjudex_protocol::GuidelineAssessment]) {
    assert_eq!(assessments.len(), 13);
    let codes: BTreeSet<GuidelineCode> = assessments.iter().map(|a| a.code).collect();
    assert_eq!(codes.len(), 13);
}

#[test]
fn both_classifiers_return_exactly_thirteen_assessments() {
    for engine in [engine(), engine_with_stub_embeddings()] {
        assert_thirteen_unique(&engine.assess_guidelines_native(FINANCIAL_DECISION));
        assert_thirteen_unique(&engine.assess_guidelines_ensemble(FINANCIAL_DECISION));
        // Degenerate input still produces the full set.
        assert_thirteen_unique(&engine.assess_guidelines_native(""));
        assert_thirteen_unique(&engine.assess_guidelines_ensemble(""));
    }
}

#[test]
fn severity_is_only_set_on_relevant_guidelines() {
    let engine = engine();
    for assessment in engine
        .assess_guidelines_native(FINANCIAL_DECISION)
        .iter()
        .chain(engine.assess_guidelines_ensemble(FINANCIAL_DECISION).iter())
    {
        if !assessment.relevant {
            assert!(assessment.severity.is_none(), "severity on {}", assessment.code);
        }
    }
}

#[test]
fn bankruptcy_and_large_debt_force_severity_d_for_financial() {
    let text = "Applicant's financial problems include a bankruptcy filing and \
                delinquent debts of $150,000 on his credit report.";
    let engine = engine();
    for assessments in [
        engine.assess_guidelines_native(text),
        engine.assess_guidelines_ensemble(text),
    ] {
        let f = assessments
            .iter()
            .find(|a| a.code == GuidelineCode::F)
            .unwrap();
        assert!(f.relevant);
        assert_eq!(f.severity, Some(SeverityLevel::D));
    }
}

#[test]
fn formal_findings_scenario_and_idempotence() {
    let engine = engine();
    let text = "Paragraph 1, Guideline F: AGAINST APPLICANT\n\
                Subparagraphs 1.a-1.b: Against Applicant";
    let findings = engine.extract_formal_findings(text);

    let f = &findings[&GuidelineCode::F];
    assert_eq!(f.overall, FindingDirection::Against);
    assert_eq!(f.subparagraphs.len(), 1);
    assert_eq!(f.subparagraphs[0].paragraph_ref, "1.a-1.b");
    assert_eq!(f.subparagraphs[0].finding, FindingDirection::Against);

    assert_eq!(findings, engine.extract_formal_findings(text));
}

#[test]
fn zero_relevant_guidelines_is_insufficient_info_at_floor_confidence() {
    let engine = engine();
    let assessments =
        engine.assess_guidelines_native("An administrative scheduling note with no concerns.");
    let overall = engine.synthesize_recommendation(&assessments, None);
    assert_eq!(overall.recommendation, Recommendation::InsufficientInfo);
    assert!((overall.confidence - 0.35).abs() < f32::EPSILON);
}

#[test]
fn analyze_assembles_a_validated_result() {
    let engine = engine();
    let precedents = vec![
        PrecedentSummary {
            case_number: "22-00987".to_string(),
            outcome: Outcome::Denied,
            guidelines: vec![GuidelineCode::F],
            relevance_score: 0.8,
            summary: "Similar unresolved delinquent debt.".to_string(),
        },
        PrecedentSummary {
            case_number: "21-00455".to_string(),
            outcome: Outcome::Denied,
            guidelines: vec![GuidelineCode::F, GuidelineCode::E],
            relevance_score: 0.75,
            summary: "Bankruptcy without mitigation.".to_string(),
        },
    ];

    let result = engine.analyze(
        FINANCIAL_DECISION,
        "23-01234",
        AnalyzeOptions::default(),
        &precedents,
    );

    assert_eq!(result.validate(), Ok(()));
    assert_eq!(result.case_id, "23-01234");
    assert_eq!(result.precedents_considered.len(), 2);
    assert!(result.text_excerpt.as_ref().is_some_and(|e| e.len() <= 500));

    // Bankruptcy forces a severe financial concern, so the recommendation
    // is unfavorable and the all-denied precedents boost its confidence.
    assert!(result.relevant_guidelines().any(|a| a.code == GuidelineCode::F));
    assert!(result.severe_concerns().any(|a| a.code == GuidelineCode::F));
    assert_eq!(result.overall.recommendation, Recommendation::Unfavorable);
    assert!(result.overall.confidence <= 0.92);
    assert!(!result.overall.key_concerns.is_empty());
}

#[test]
fn analyze_on_the_ensemble_path_also_validates() {
    let engine = engine_with_stub_embeddings();
    let result = engine.analyze(
        FINANCIAL_DECISION,
        "23-01234",
        AnalyzeOptions {
            path: AnalysisPath::Ensemble,
        },
        &[],
    );
    assert_eq!(result.validate(), Ok(()));
    assert!(result.relevant_guidelines().any(|a| a.code == GuidelineCode::F));
}

#[test]
fn parse_case_assembles_the_structured_record() {
    let engine = engine();
    let record = engine.parse_case("23-01234", FINANCIAL_DECISION);

    let CaseRecord::Structured(fields) = &record else {
        panic!("parse_case returns the structured representation");
    };
    assert_eq!(fields.case_number, "23-01234");
    assert_eq!(fields.outcome, Some(Outcome::Denied));
    assert_eq!(fields.case_type, "hearing");
    assert_eq!(fields.date.as_deref(), Some("June 2, 2023"));
    assert_eq!(fields.adjudicator.as_deref(), Some("Jane Q. Smith"));
    assert!(fields.guidelines.contains(&GuidelineCode::F));
    assert!(fields.formal_findings.contains_key(&GuidelineCode::F));
    assert!(fields.summary.contains("FINDINGS OF FACT"));
    assert!(!fields.mitigating_factors.is_empty());
}

#[test]
fn parse_case_detects_appeals() {
    let engine = engine();
    let text = "APPEAL BOARD DECISION\n\n\
                The judge denied applicant's request for a security clearance.\n\n\
                ORDER\n\nThe decision is AFFIRMED.";
    let record = engine.parse_case("appeal-2023-210780", text);

    let CaseRecord::Structured(fields) = &record else {
        panic!("parse_case returns the structured representation");
    };
    assert_eq!(fields.case_type, "appeal");
    assert_eq!(fields.outcome, Some(Outcome::Denied));
}

#[test]
fn case_record_field_access_round_trips() {
    let engine = engine();
    let mut record = engine.parse_case("23-01234", FINANCIAL_DECISION);
    assert_eq!(
        record.get_field("case_type"),
        Some(serde_json::json!("hearing"))
    );

    record.set_field("source_url", serde_json::json!("file:///cases/23-01234.pdf"));
    assert_eq!(
        record.get_field("source_url"),
        Some(serde_json::json!("file:///cases/23-01234.pdf"))
    );
    assert_eq!(record.case_number(), Some("23-01234".to_string()));
}
