use chrono::{DateTime, Utc};
use serde::Serialize;

use super::catalog::Intelligence;
use super::domain::{ParticipantProfile, SubmissionId, SubmissionRecord};
use super::insights::{insight, tips};
use super::scoring::DomainScore;

/// How many top-ranked domains get an expanded insight block.
pub const HIGHLIGHT_COUNT: usize = 2;

/// Expanded copy for one top-ranked domain.
#[derive(Debug, Clone, Serialize)]
pub struct DomainHighlight {
    pub rank: usize,
    pub domain: Intelligence,
    pub label: &'static str,
    pub percent: f64,
    pub insight: &'static str,
    pub tips: [&'static str; 3],
}

/// Assembled report: ranked bars for all eight domains plus highlights for
/// the top two. Identical shape backs both the JSON view and the printable
/// document.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub submission_id: SubmissionId,
    pub participant: ParticipantProfile,
    pub completed_on: DateTime<Utc>,
    pub scores: Vec<DomainScore>,
    pub highlights: Vec<DomainHighlight>,
}

impl AssessmentReport {
    pub fn assemble(record: &SubmissionRecord, scores: Vec<DomainScore>) -> Self {
        let highlights = scores
            .iter()
            .take(HIGHLIGHT_COUNT)
            .enumerate()
            .map(|(index, entry)| DomainHighlight {
                rank: index + 1,
                domain: entry.domain,
                label: entry.domain.label(),
                percent: entry.percent,
                insight: insight(entry.domain),
                tips: tips(entry.domain),
            })
            .collect();

        Self {
            submission_id: record.id.clone(),
            participant: record.profile.clone(),
            completed_on: record.created_at,
            scores,
            highlights,
        }
    }
}
