#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use mi_profile::assessment::{
    catalog, DomainScore, Intelligence, RepositoryError, ResponseSet, SubmissionFilter,
    SubmissionForm, SubmissionId, SubmissionRecord, SubmissionRepository,
};

/// Test double for the submission store with switchable failure modes so the
/// service's error paths can be driven from the outside.
#[derive(Default)]
pub struct InMemorySubmissionRepository {
    records: Mutex<HashMap<SubmissionId, SubmissionRecord>>,
    fail_inserts: AtomicBool,
    fail_updates: AtomicBool,
}

impl InMemorySubmissionRepository {
    pub fn fail_inserts(&self) {
        self.fail_inserts.store(true, Ordering::Relaxed);
    }

    pub fn fail_updates(&self) {
        self.fail_updates.store(true, Ordering::Relaxed);
    }

    pub fn stored(&self, id: &SubmissionId) -> Option<SubmissionRecord> {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .get(id)
            .cloned()
    }

    pub fn seed(&self, record: SubmissionRecord) {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .insert(record.id.clone(), record);
    }
}

impl SubmissionRepository for InMemorySubmissionRepository {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        if self.fail_inserts.load(Ordering::Relaxed) {
            return Err(RepositoryError::Unavailable("store offline".to_string()));
        }
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn update_scores(
        &self,
        id: &SubmissionId,
        scores: &[DomainScore],
    ) -> Result<(), RepositoryError> {
        if self.fail_updates.load(Ordering::Relaxed) {
            return Err(RepositoryError::Unavailable("store offline".to_string()));
        }
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.get_mut(id) {
            Some(record) => {
                record.scores = Some(scores.to_vec());
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn list(&self, filter: &SubmissionFilter) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<SubmissionRecord> = guard
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

/// Every question answered with the same value.
pub fn uniform_responses(value: u8) -> ResponseSet {
    catalog::questions()
        .iter()
        .map(|question| (question.id, value))
        .collect()
}

/// Complete response set where one domain stands out at the top.
pub fn responses_favoring(favorite: Intelligence) -> ResponseSet {
    catalog::questions()
        .iter()
        .map(|question| {
            let value = if question.domain == favorite { 4 } else { 2 };
            (question.id, value)
        })
        .collect()
}

pub fn complete_form() -> SubmissionForm {
    SubmissionForm {
        name: "Asha Patel".to_string(),
        email: "asha@example.com".to_string(),
        phone: "+15155550123".to_string(),
        date_of_birth: "2008-03-14".to_string(),
        city: "Ames".to_string(),
        responses: uniform_responses(3),
    }
}
