use std::sync::LazyLock;

use regex::Regex;
use validator::Validate;

use crate::domain::submission::{
    entities::{Category, SubmissionDraft},
    helpers::non_blank,
    value_objects::FieldErrors,
};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Trimmed view of a draft that the validation rules run against.
#[derive(Debug, Validate)]
pub struct DraftValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(required(message = "category is required"))]
    pub category: Option<Category>,

    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,

    #[validate(regex(
        path = *EMAIL_PATTERN,
        message = "submitter_email must be a valid email address"
    ))]
    pub submitter_email: Option<String>,
}

impl From<&SubmissionDraft> for DraftValidator {
    fn from(draft: &SubmissionDraft) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            category: draft.category,
            location: draft.location.trim().to_string(),
            submitter_email: non_blank(&draft.submitter_email),
        }
    }
}

/// Runs every field rule against the draft. An empty map means submittable.
pub fn validate_draft(draft: &SubmissionDraft) -> FieldErrors {
    let Err(errors) = DraftValidator::from(draft).validate() else {
        return FieldErrors::new();
    };

    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, field_errors)| {
            let error = field_errors.first()?;
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid ({})", error.code));
            Some((field.to_string(), message))
        })
        .collect()
}
