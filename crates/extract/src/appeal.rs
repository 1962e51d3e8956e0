use crate::window::{head, tail};
use adjudex_protocol::Outcome;
use adjudex_guidelines::{
    appeal_markers, denial_indicators, digest_resolutions, grant_indicators, order_directives,
    remand_indicators, OrderAction,
};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Appeal markers live in the caption and digest at the top of the document.
const HEADER_WINDOW: usize = 2_500;

/// The Order section is the last thing the appeal board writes.
const ORDER_WINDOW: usize = 2_000;

/// The digest restating the outcome sits near the start of the decision.
const DIGEST_WINDOW: usize = 2_000;

static ORDER_HEADER: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"(?m)^\s*ORDER\s*$")
        .case_insensitive(false)
        .build()
        .expect("static pattern must compile")
});

/// Sign of the hearing decision the appeal board reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnderlyingSign {
    Adverse,
    Favorable,
}

/// Whether the document is an appeal board decision rather than a hearing
/// decision, judged from markers in the header.
#[must_use]
pub fn is_appeal_document(text: &str) -> bool {
    let header = head(text, HEADER_WINDOW);
    appeal_markers().iter().any(|p| p.is_match(header))
}

/// The Order section: from an anchored ORDER header when one appears in the
/// final window, otherwise the final window itself.
#[must_use]
pub fn extract_order_section(text: &str) -> &str {
    let window = tail(text, ORDER_WINDOW);
    match ORDER_HEADER.find(window) {
        Some(m) => &window[m.start()..],
        None => window,
    }
}

/// Resolve the outcome of an appeal board decision.
///
/// The board's Order states an action (affirmed, reversed, remanded) but the
/// outcome for the applicant depends on the sign of the underlying hearing
/// decision: affirming a denial is still a denial, reversing one is a grant.
/// Remand outranks everything. When neither the Order nor the body resolves
/// the direction, the digest near the top of the document is scanned; an
/// ambiguous direction is reported as `Unknown`, never guessed.
#[must_use]
pub fn classify_appeal_outcome(text: &str) -> Outcome {
    let order = extract_order_section(text);

    if remand_indicators().iter().any(|p| p.is_match(order)) {
        log::debug!("appeal order is a remand");
        return Outcome::Remanded;
    }

    // The order may name the direction itself ("the adverse decision is
    // affirmed"), which resolves the case without reading the body.
    for resolution in digest_resolutions() {
        if resolution.pattern.is_match(order) {
            return resolution.outcome;
        }
    }

    if let Some(action) = order_action(order) {
        let body_end = text.len() - order.len();
        let body = &text[..body_end];
        if let Some(sign) = underlying_sign(body) {
            return resolve(action, sign);
        }
        log::debug!("appeal order says {action:?} but the underlying sign is unresolved");
    }

    digest_fallback(text)
}

fn order_action(order: &str) -> Option<OrderAction> {
    order_directives()
        .iter()
        .find(|(_, pattern)| pattern.is_match(order))
        .map(|(action, _)| *action)
}

/// Denial indicators are checked first: most rejected appeals affirm a
/// denial, so a tie resolves toward the adverse reading.
fn underlying_sign(body: &str) -> Option<UnderlyingSign> {
    if denial_indicators().iter().any(|p| p.is_match(body)) {
        return Some(UnderlyingSign::Adverse);
    }
    if grant_indicators().iter().any(|p| p.is_match(body)) {
        return Some(UnderlyingSign::Favorable);
    }
    None
}

const fn resolve(action: OrderAction, sign: UnderlyingSign) -> Outcome {
    match (action, sign) {
        (OrderAction::Remanded, _) => Outcome::Remanded,
        (OrderAction::Affirmed, UnderlyingSign::Adverse) => Outcome::Denied,
        (OrderAction::Affirmed, UnderlyingSign::Favorable) => Outcome::Granted,
        (OrderAction::Reversed, UnderlyingSign::Adverse) => Outcome::Granted,
        (OrderAction::Reversed, UnderlyingSign::Favorable) => Outcome::Denied,
    }
}

fn digest_fallback(text: &str) -> Outcome {
    let digest = head(text, DIGEST_WINDOW);

    if remand_indicators().iter().any(|p| p.is_match(digest)) {
        return Outcome::Remanded;
    }
    for resolution in digest_resolutions() {
        if resolution.pattern.is_match(digest) {
            return resolution.outcome;
        }
    }

    // Last resort: a directional order verb in the digest plus a sign.
    if let Some(action) = order_action(digest) {
        if let Some(sign) = underlying_sign(digest) {
            return resolve(action, sign);
        }
    }

    Outcome::Unknown
}
