use serde::Deserialize;

use super::domain::{SubmissionId, SubmissionRecord};
use super::scoring::DomainScore;

/// Storage seam for submissions so the service can be exercised against an
/// in-memory double in tests and a managed store in deployment.
///
/// `list` must return records ordered by creation time descending.
pub trait SubmissionRepository: Send + Sync {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError>;
    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError>;
    /// Best-effort score-cache back-fill. Idempotent for a given response
    /// set, so a last-write-wins race between concurrent readers is harmless.
    fn update_scores(
        &self,
        id: &SubmissionId,
        scores: &[DomainScore],
    ) -> Result<(), RepositoryError>;
    fn list(&self, filter: &SubmissionFilter) -> Result<Vec<SubmissionRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("submission already exists")]
    Conflict,
    #[error("submission not found")]
    NotFound,
    #[error("submission store unavailable: {0}")]
    Unavailable(String),
}

/// Administrative listing filters: case-insensitive substring on name or
/// email, and a date prefix matched against the RFC 3339 creation timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl SubmissionFilter {
    pub fn matches(&self, record: &SubmissionRecord) -> bool {
        if let Some(search) = self.search.as_deref() {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() {
                let name = record.profile.name.to_lowercase();
                let email = record.profile.email.to_lowercase();
                if !name.contains(&needle) && !email.contains(&needle) {
                    return false;
                }
            }
        }

        if let Some(date) = self.date.as_deref() {
            let prefix = date.trim();
            if !prefix.is_empty() && !record.created_at.to_rfc3339().starts_with(prefix) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::ParticipantProfile;
    use crate::assessment::scoring::ResponseSet;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn record() -> SubmissionRecord {
        SubmissionRecord {
            id: SubmissionId("sub-000042".to_string()),
            profile: ParticipantProfile {
                name: "Marta Okafor".to_string(),
                email: "marta.okafor@example.org".to_string(),
                phone: "+15155550188".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(2007, 11, 2).expect("valid date"),
                city: "Des Moines".to_string(),
            },
            responses: ResponseSet::new(),
            scores: None,
            created_at: Utc
                .with_ymd_and_hms(2026, 8, 20, 15, 30, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(SubmissionFilter::default().matches(&record()));
    }

    #[test]
    fn search_matches_name_or_email_case_insensitively() {
        let by_name = SubmissionFilter {
            search: Some("MARTA".to_string()),
            date: None,
        };
        let by_email = SubmissionFilter {
            search: Some("okafor@example".to_string()),
            date: None,
        };
        let miss = SubmissionFilter {
            search: Some("nobody".to_string()),
            date: None,
        };
        assert!(by_name.matches(&record()));
        assert!(by_email.matches(&record()));
        assert!(!miss.matches(&record()));
    }

    #[test]
    fn date_prefix_matches_creation_day() {
        let hit = SubmissionFilter {
            search: None,
            date: Some("2026-08-20".to_string()),
        };
        let miss = SubmissionFilter {
            search: None,
            date: Some("2026-08-21".to_string()),
        };
        assert!(hit.matches(&record()));
        assert!(!miss.matches(&record()));
    }
}
