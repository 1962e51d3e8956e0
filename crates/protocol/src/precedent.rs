use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The shape in which a retrieved precedent case enters the engine.
///
/// Retrieval itself (embedding index, nearest-neighbor search) is an external
/// collaborator; the engine only consumes these plain records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecedentSummary {
    pub case_number: String,
    pub outcome: Outcome,
    #[serde(default)]
    pub guidelines: Vec<crate::GuidelineCode>,
    /// Similarity of the precedent to the case under analysis, [0, 1].
    #[serde(default = "default_relevance")]
    pub relevance_score: f32,
    #[serde(default)]
    pub summary: String,
}

const fn default_relevance() -> f32 {
    0.5
}

/// Aggregate outcome statistics over a set of retrieved precedents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecedentStats {
    pub total: usize,
    /// DENIED and REVOKED both count as denials.
    pub denied_percentage: f32,
    pub granted_percentage: f32,
    pub most_common_outcome: Outcome,
    pub avg_relevance: f32,
}

impl PrecedentStats {
    /// Compute stats from precedent records. Returns `None` for an empty set.
    #[must_use]
    pub fn from_summaries(precedents: &[PrecedentSummary]) -> Option<Self> {
        if precedents.is_empty() {
            return None;
        }

        let total = precedents.len();
        let mut counts: HashMap<Outcome, usize> = HashMap::new();
        for p in precedents {
            *counts.entry(p.outcome).or_insert(0) += 1;
        }

        let denied =
            counts.get(&Outcome::Denied).copied().unwrap_or(0) + counts.get(&Outcome::Revoked).copied().unwrap_or(0);
        let granted = counts.get(&Outcome::Granted).copied().unwrap_or(0);

        let most_common_outcome = counts
            .iter()
            .max_by_key(|(_, n)| **n)
            .map_or(Outcome::Unknown, |(o, _)| *o);

        let avg_relevance =
            precedents.iter().map(|p| p.relevance_score).sum::<f32>() / total as f32;

        Some(Self {
            total,
            denied_percentage: denied as f32 / total as f32,
            granted_percentage: granted as f32 / total as f32,
            most_common_outcome,
            avg_relevance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn precedent(outcome: Outcome, relevance: f32) -> PrecedentSummary {
        PrecedentSummary {
            case_number: "23-00001".to_string(),
            outcome,
            guidelines: vec![],
            relevance_score: relevance,
            summary: String::new(),
        }
    }

    #[test]
    fn empty_set_has_no_stats() {
        assert!(PrecedentStats::from_summaries(&[]).is_none());
    }

    #[test]
    fn revoked_counts_as_denied() {
        let stats = PrecedentStats::from_summaries(&[
            precedent(Outcome::Denied, 0.8),
            precedent(Outcome::Revoked, 0.6),
            precedent(Outcome::Granted, 0.4),
            precedent(Outcome::Denied, 0.6),
        ])
        .unwrap();

        assert_eq!(stats.total, 4);
        assert!((stats.denied_percentage - 0.75).abs() < 1e-6);
        assert!((stats.granted_percentage - 0.25).abs() < 1e-6);
        assert_eq!(stats.most_common_outcome, Outcome::Denied);
        assert!((stats.avg_relevance - 0.6).abs() < 1e-6);
    }
}
