use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::{self, Intelligence, MAX_RESPONSE};

/// A participant's answers keyed by question id.
///
/// The map may be partial or even empty; [`score`] treats a missing id as 0.
/// Completeness is a submission-time contract enforced by the validator, not
/// by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet(BTreeMap<u16, u8>);

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: u16, value: u8) {
        self.0.insert(question_id, value);
    }

    pub fn remove(&mut self, question_id: u16) {
        self.0.remove(&question_id);
    }

    /// The recorded answer, or 0 when the question was never answered.
    pub fn value(&self, question_id: u16) -> u8 {
        self.0.get(&question_id).copied().unwrap_or(0)
    }

    pub fn contains(&self, question_id: u16) -> bool {
        self.0.contains_key(&question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u16, u8)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (u16, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Derived average and percent-of-maximum for one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainScore {
    pub domain: Intelligence,
    pub average: f64,
    pub percent: f64,
}

/// Score a response set into a ranked list of domain scores.
///
/// Pure and total: any mapping produces exactly one entry per domain, sorted
/// descending by percent. The sort is stable and domains are generated in
/// catalog order, so equal percents rank in catalog order.
pub fn score(responses: &ResponseSet) -> Vec<DomainScore> {
    let mut scores: Vec<DomainScore> = Intelligence::ALL
        .iter()
        .map(|&domain| {
            let mut sum: u32 = 0;
            let mut count: u32 = 0;
            for id in catalog::question_ids(domain) {
                sum += u32::from(responses.value(id));
                count += 1;
            }
            // count >= 1 by catalog invariant
            let average = f64::from(sum) / f64::from(count);
            let percent = average / f64::from(MAX_RESPONSE) * 100.0;
            DomainScore {
                domain,
                average,
                percent,
            }
        })
        .collect();

    scores.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(value: u8) -> ResponseSet {
        catalog::questions()
            .iter()
            .map(|question| (question.id, value))
            .collect()
    }

    #[test]
    fn linguistic_worked_example() {
        let mut responses = ResponseSet::new();
        for id in catalog::question_ids(Intelligence::Linguistic) {
            responses.insert(id, 4);
        }
        responses.insert(6, 1);

        let scores = score(&responses);
        let linguistic = scores
            .iter()
            .find(|entry| entry.domain == Intelligence::Linguistic)
            .expect("linguistic present");
        assert_eq!(linguistic.average, 3.5);
        assert_eq!(linguistic.percent, 87.5);
    }

    #[test]
    fn uniform_extremes_hit_scale_bounds() {
        let top = score(&uniform(4));
        assert!(top.iter().all(|entry| entry.percent == 100.0));

        let bottom = score(&uniform(1));
        assert!(bottom.iter().all(|entry| entry.percent == 25.0));
    }

    #[test]
    fn empty_input_scores_every_domain_at_zero() {
        let scores = score(&ResponseSet::new());
        assert_eq!(scores.len(), 8);
        assert!(scores.iter().all(|entry| entry.percent == 0.0));
    }

    #[test]
    fn ties_keep_catalog_order() {
        let scores = score(&uniform(3));
        let ranked: Vec<Intelligence> = scores.iter().map(|entry| entry.domain).collect();
        assert_eq!(ranked, Intelligence::ALL.to_vec());
    }

    #[test]
    fn missing_answer_matches_explicit_zero() {
        let mut with_hole = uniform(3);
        with_hole.remove(20);

        let mut with_zero = uniform(3);
        with_zero.insert(20, 0);

        assert_eq!(score(&with_hole), score(&with_zero));
    }
}
