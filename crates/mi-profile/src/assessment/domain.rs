use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::scoring::{score, DomainScore, ResponseSet};

/// Identifier wrapper for persisted submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// Identity fields captured alongside the questionnaire answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub city: String,
}

/// Raw submission payload as received from the intake form.
///
/// All identity fields arrive as strings, date of birth included, so the
/// validator can report a blank or malformed value with its single-message
/// contract instead of the payload failing to deserialize. Validation
/// produces the typed [`ParticipantProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub city: String,
    pub responses: ResponseSet,
}

/// Persisted submission. Immutable once written except for `scores`, which is
/// a lazily back-filled cache of the ranked result and never a source of
/// truth on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub profile: ParticipantProfile,
    pub responses: ResponseSet,
    pub scores: Option<Vec<DomainScore>>,
    pub created_at: DateTime<Utc>,
}

impl SubmissionRecord {
    /// Ranked scores, preferring a fresh recomputation over the cache.
    pub fn ranked_scores(&self) -> Vec<DomainScore> {
        score(&self.responses)
    }

    /// Top-ranked domain label, served from the cache when present.
    pub fn top_domain_label(&self) -> &'static str {
        match self.scores.as_ref().and_then(|scores| scores.first()) {
            Some(top) => top.domain.label(),
            None => self
                .ranked_scores()
                .first()
                .map(|top| top.domain.label())
                .unwrap_or(""),
        }
    }

    pub fn summary(&self) -> SubmissionSummary {
        SubmissionSummary {
            id: self.id.clone(),
            name: self.profile.name.clone(),
            email: self.profile.email.clone(),
            phone: self.profile.phone.clone(),
            city: self.profile.city.clone(),
            created_at: self.created_at,
            top_domain: self.top_domain_label(),
        }
    }
}

/// Row shape used by the administrative listing.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionSummary {
    pub id: SubmissionId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub top_domain: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog;

    fn record_with_uniform_answers(value: u8) -> SubmissionRecord {
        SubmissionRecord {
            id: SubmissionId("sub-000001".to_string()),
            profile: ParticipantProfile {
                name: "Asha Patel".to_string(),
                email: "asha@example.com".to_string(),
                phone: "+15155550123".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(2008, 3, 14).expect("valid date"),
                city: "Ames".to_string(),
            },
            responses: catalog::questions()
                .iter()
                .map(|question| (question.id, value))
                .collect(),
            scores: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn top_domain_falls_back_to_recomputation() {
        let record = record_with_uniform_answers(3);
        // Uniform answers tie every domain; catalog order puts Linguistic first.
        assert_eq!(record.top_domain_label(), "Linguistic");
    }

    #[test]
    fn top_domain_prefers_cache_when_present() {
        let mut record = record_with_uniform_answers(3);
        let mut cached = record.ranked_scores();
        cached.rotate_left(1);
        record.scores = Some(cached);
        assert_eq!(record.top_domain_label(), "Logical-Mathematical");
    }
}
