mod assessment;
mod findings;
mod guideline;
mod outcome;
mod precedent;
mod record;
mod result;

pub use assessment::{
    DisqualifierFinding, EnsembleScore, GuidelineAssessment, MitigatorApplicability,
    MitigatorFinding, OverallAssessment, Recommendation, SeverityLevel,
};
pub use findings::{FindingDirection, FormalFinding, SubparagraphFinding};
pub use guideline::{GuidelineCode, ParseGuidelineError};
pub use outcome::{DocumentKind, Outcome};
pub use precedent::{PrecedentStats, PrecedentSummary};
pub use record::{CaseFields, CaseRecord};
pub use result::{AnalysisResult, ResultError};
