use chrono::NaiveDate;

use super::catalog::{self, MAX_RESPONSE, MIN_RESPONSE, QUESTION_COUNT};
use super::domain::{ParticipantProfile, SubmissionForm};

/// Pre-submit rejection reasons, checked in a fixed order. The first failing
/// check short-circuits so the participant sees a single message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("please fill in all personal information fields ({field} is missing)")]
    MissingField { field: &'static str },
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("please enter the date of birth as YYYY-MM-DD")]
    InvalidDateOfBirth,
    #[error("please answer all {expected} questions ({answered}/{expected} answered)")]
    IncompleteResponses { answered: usize, expected: usize },
    #[error("invalid response for question {question_id}")]
    ResponseOutOfRange { question_id: u16 },
}

/// Gate a submission before it reaches the store, returning the trimmed,
/// typed identity profile on success.
///
/// Check order: blank identity fields (name, email, phone, date of birth,
/// city), email shape, date-of-birth format, response completeness,
/// per-question range. Incomplete response sets are rejected here even though
/// the scoring engine would accept them via its zero-fallback; the two
/// contracts are intentionally separate.
pub fn validate(form: &SubmissionForm) -> Result<ParticipantProfile, ValidationError> {
    let identity_fields = [
        ("name", form.name.as_str()),
        ("email", form.email.as_str()),
        ("phone", form.phone.as_str()),
        ("date_of_birth", form.date_of_birth.as_str()),
        ("city", form.city.as_str()),
    ];
    for (field, value) in identity_fields {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField { field });
        }
    }

    if !has_email_shape(form.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }

    let date_of_birth = NaiveDate::parse_from_str(form.date_of_birth.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDateOfBirth)?;

    let answered = catalog::questions()
        .iter()
        .filter(|question| form.responses.contains(question.id))
        .count();
    if answered != QUESTION_COUNT || form.responses.len() != QUESTION_COUNT {
        return Err(ValidationError::IncompleteResponses {
            answered,
            expected: QUESTION_COUNT,
        });
    }

    for question in catalog::questions() {
        let value = form.responses.value(question.id);
        if !(MIN_RESPONSE..=MAX_RESPONSE).contains(&value) {
            return Err(ValidationError::ResponseOutOfRange {
                question_id: question.id,
            });
        }
    }

    Ok(ParticipantProfile {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        date_of_birth,
        city: form.city.trim().to_string(),
    })
}

/// Basic `local@domain.tld` shape: one `@`, a dot after it with non-empty
/// segments, and no embedded whitespace.
fn has_email_shape(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
