use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use super::domain::{SubmissionForm, SubmissionId, SubmissionRecord, SubmissionSummary};
use super::report::AssessmentReport;
use super::repository::{RepositoryError, SubmissionFilter, SubmissionRepository};
use super::scoring::score;
use super::validation::{validate, ValidationError};

/// Service composing validation, the scoring engine, and the submission store.
pub struct AssessmentService<R> {
    repository: Arc<R>,
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id() -> SubmissionId {
    let id = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionId(format!("sub-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: SubmissionRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and persist a new submission. Scores are not computed here;
    /// the cache is back-filled on first report read.
    pub fn submit(
        &self,
        form: SubmissionForm,
    ) -> Result<SubmissionRecord, AssessmentServiceError> {
        let profile = validate(&form)?;

        let record = SubmissionRecord {
            id: next_submission_id(),
            profile,
            responses: form.responses,
            scores: None,
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Build the report for a stored submission.
    ///
    /// Scores are always recomputed from the response set; the stored cache is
    /// only a read optimization for the listing, so a back-fill failure is
    /// logged and otherwise ignored.
    pub fn report(&self, id: &SubmissionId) -> Result<AssessmentReport, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let scores = score(&record.responses);
        if record.scores.is_none() {
            if let Err(err) = self.repository.update_scores(id, &scores) {
                warn!(submission_id = %id.0, error = %err, "score cache back-fill failed");
            }
        }

        Ok(AssessmentReport::assemble(&record, scores))
    }

    /// Administrative listing, newest first.
    pub fn list(
        &self,
        filter: &SubmissionFilter,
    ) -> Result<Vec<SubmissionSummary>, AssessmentServiceError> {
        let records = self.repository.list(filter)?;
        Ok(records.iter().map(SubmissionRecord::summary).collect())
    }

    /// Bulk CSV export of the (filtered) listing. Fields are quoted by the
    /// writer, so free-text values containing delimiters survive round-trips.
    pub fn export_csv(
        &self,
        filter: &SubmissionFilter,
    ) -> Result<String, AssessmentServiceError> {
        let records = self.repository.list(filter)?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            "Name", "Email", "Phone", "DOB", "City", "Created At", "Top Domain",
        ])?;

        for record in &records {
            writer.write_record([
                record.profile.name.as_str(),
                record.profile.email.as_str(),
                record.profile.phone.as_str(),
                &record.profile.date_of_birth.format("%Y-%m-%d").to_string(),
                record.profile.city.as_str(),
                &record.created_at.format("%Y-%m-%d").to_string(),
                record.top_domain_label(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|err| csv::Error::from(err.into_error()))?;
        String::from_utf8(bytes).map_err(|err| {
            AssessmentServiceError::Csv(csv::Error::from(io::Error::new(
                io::ErrorKind::InvalidData,
                err,
            )))
        })
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
}
