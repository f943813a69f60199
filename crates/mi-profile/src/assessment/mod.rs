//! Questionnaire intake, scoring, and report assembly.
//!
//! The scoring engine is a pure function of the static catalog and a response
//! set; everything around it (validation, persistence seam, report views,
//! HTTP surface) is thin glue kept behind narrow interfaces.

pub mod catalog;
pub mod document;
pub mod domain;
pub mod insights;
pub mod repository;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

pub use catalog::{
    Intelligence, LikertOption, Question, LIKERT_SCALE, MAX_RESPONSE, MIN_RESPONSE, QUESTION_COUNT,
};
pub use document::render_document;
pub use domain::{
    ParticipantProfile, SubmissionForm, SubmissionId, SubmissionRecord, SubmissionSummary,
};
pub use insights::{insight, tips};
pub use report::{AssessmentReport, DomainHighlight, HIGHLIGHT_COUNT};
pub use repository::{RepositoryError, SubmissionFilter, SubmissionRepository};
pub use router::assessment_router;
pub use scoring::{score, DomainScore, ResponseSet};
pub use service::{AssessmentService, AssessmentServiceError};
pub use validation::{validate, ValidationError};
