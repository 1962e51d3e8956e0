mod catalog;
mod keywords;
mod patterns;
mod reference;

pub use catalog::{Catalog, CatalogError, Condition, GuidelineRef, Result};
pub use keywords::{
    context_indicators, keywords, ngrams, severe_patterns, severe_patterns_enhanced, Ngrams,
    STOPWORDS,
};
pub use patterns::{
    appeal_markers, denial_indicators, digest_resolutions, grant_indicators, guideline_patterns,
    order_directives, outcome_patterns, remand_indicators, DigestResolution, OrderAction,
};
