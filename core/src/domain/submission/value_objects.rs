use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    submission::{
        entities::{Category, Field, SubmissionDraft},
        helpers::{non_blank, split_recommended_menu},
    },
};

pub const RESTAURANTS_PATH: &str = "/api/restaurants";

/// Field name to error message, for every invalid field.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitterPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Server-shaped body for `POST /api/restaurants`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPayload {
    pub name: String,
    pub category: Category,
    pub location: String,
    pub price_range: Option<String>,
    pub recommended_menu: Vec<String>,
    pub review: Option<String>,
    pub submitter: SubmitterPayload,
}

impl TryFrom<&SubmissionDraft> for RestaurantPayload {
    type Error = CoreError;

    fn try_from(draft: &SubmissionDraft) -> Result<Self, Self::Error> {
        let category = draft.category.ok_or_else(|| {
            CoreError::Validation(FieldErrors::from([(
                Field::Category.to_string(),
                "category is required".to_string(),
            )]))
        })?;

        Ok(Self {
            name: draft.name.trim().to_string(),
            category,
            location: draft.location.trim().to_string(),
            price_range: non_blank(&draft.price_range),
            recommended_menu: split_recommended_menu(&draft.recommended_menu),
            review: non_blank(&draft.review),
            submitter: SubmitterPayload {
                name: non_blank(&draft.submitter_name),
                email: non_blank(&draft.submitter_email),
            },
        })
    }
}
