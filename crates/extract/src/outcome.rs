use crate::window::tail;
use adjudex_protocol::Outcome;
use adjudex_guidelines::outcome_patterns;

/// The dispositive paragraph is always near the end of a hearing decision.
const TAIL_WINDOW: usize = 3_000;

/// Categories are scanned in this fixed order; an exact tie on the rightmost
/// offset is taken by the later-scanned category, so the adverse reading wins
/// ties like "unfavorable determination" containing "favorable determination".
const SCAN_ORDER: [Outcome; 4] = [
    Outcome::Granted,
    Outcome::Denied,
    Outcome::Revoked,
    Outcome::Remanded,
];

/// Classify a hearing decision by its dispositive phrase.
///
/// Every pattern of every outcome category is evaluated against the final
/// 3,000 characters and the match ending rightmost wins. Decisions often
/// restate a prior outcome earlier in the tail (quoting the standard of
/// review) before stating the actual disposition last, so the last stated
/// outcome is the operative one.
#[must_use]
pub fn classify_hearing_outcome(text: &str) -> Outcome {
    let tail_text = tail(text, TAIL_WINDOW);

    let mut best: Option<(usize, Outcome)> = None;
    for outcome in SCAN_ORDER {
        let Some(end) = rightmost_match_end(tail_text, outcome) else {
            continue;
        };
        log::debug!("{outcome}: rightmost pattern match ends at {end}");
        match best {
            Some((best_end, _)) if end < best_end => {}
            _ => best = Some((end, outcome)),
        }
    }

    best.map_or(Outcome::Unknown, |(_, outcome)| outcome)
}

fn rightmost_match_end(tail_text: &str, outcome: Outcome) -> Option<usize> {
    let mut best = None;
    for pattern in outcome_patterns(outcome) {
        for m in pattern.find_iter(tail_text) {
            if best.is_none_or(|end| m.end() > end) {
                best = Some(m.end());
            }
        }
    }
    best
}
