//! Structured extraction from decision document text.
//!
//! Everything here is a pure function of (text, static pattern tables): the
//! hearing outcome classifier, the appeal outcome resolver, guideline
//! presence detection, the formal-findings parser, and document metadata
//! extraction. Absent sections and unmatched patterns degrade to
//! `Unknown`/empty values rather than errors.

mod appeal;
mod formal;
mod metadata;
mod outcome;
mod presence;
mod window;

pub use appeal::{classify_appeal_outcome, extract_order_section, is_appeal_document};
pub use formal::extract_formal_findings;
pub use metadata::{
    extract_adjudicator, extract_date, extract_mitigating_mentions, extract_sor_allegations,
    parse_case_year, summarize,
};
pub use outcome::classify_hearing_outcome;
pub use presence::extract_guidelines;
pub use window::{head, tail};
