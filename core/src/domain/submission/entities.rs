use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::common::entities::app_errors::CoreError;

pub const SUCCESS_MESSAGE: &str = "맛집이 성공적으로 제보되었습니다! 🎉";

/// Closed set of cuisine categories accepted by the food map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "한식")]
    Korean,
    #[serde(rename = "중식")]
    Chinese,
    #[serde(rename = "일식")]
    Japanese,
    #[serde(rename = "양식")]
    Western,
    #[serde(rename = "분식")]
    Snack,
    #[serde(rename = "카페")]
    Cafe,
    #[serde(rename = "기타")]
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Korean,
        Category::Chinese,
        Category::Japanese,
        Category::Western,
        Category::Snack,
        Category::Cafe,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Korean => "한식",
            Category::Chinese => "중식",
            Category::Japanese => "일식",
            Category::Western => "양식",
            Category::Snack => "분식",
            Category::Cafe => "카페",
            Category::Other => "기타",
        }
    }

    fn alias(&self) -> &'static str {
        match self {
            Category::Korean => "korean",
            Category::Chinese => "chinese",
            Category::Japanese => "japanese",
            Category::Western => "western",
            Category::Snack => "snack",
            Category::Cafe => "cafe",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == value || c.alias().eq_ignore_ascii_case(value))
            .ok_or_else(|| CoreError::UnknownCategory(value.to_string()))
    }
}

/// Form fields, keyed by the names used in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Category,
    Location,
    PriceRange,
    RecommendedMenu,
    Review,
    SubmitterName,
    SubmitterEmail,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Category,
        Field::Location,
        Field::PriceRange,
        Field::RecommendedMenu,
        Field::Review,
        Field::SubmitterName,
        Field::SubmitterEmail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Location => "location",
            Field::PriceRange => "price_range",
            Field::RecommendedMenu => "recommended_menu",
            Field::Review => "review",
            Field::SubmitterName => "submitter_name",
            Field::SubmitterEmail => "submitter_email",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Field::Name | Field::Category | Field::Location)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory form data that has not been submitted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub name: String,
    pub category: Option<Category>,
    pub location: String,
    pub price_range: String,
    pub recommended_menu: String,
    pub review: String,
    pub submitter_name: String,
    pub submitter_email: String,
}

impl SubmissionDraft {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Writes one field from raw input. A blank category clears it.
    pub fn set(&mut self, field: Field, value: &str) -> Result<(), CoreError> {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Category => {
                self.category = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            Field::Location => self.location = value.to_string(),
            Field::PriceRange => self.price_range = value.to_string(),
            Field::RecommendedMenu => self.recommended_menu = value.to_string(),
            Field::Review => self.review = value.to_string(),
            Field::SubmitterName => self.submitter_name = value.to_string(),
            Field::SubmitterEmail => self.submitter_email = value.to_string(),
        }
        Ok(())
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Category => self.category.as_ref().map(Category::as_str).unwrap_or(""),
            Field::Location => &self.location,
            Field::PriceRange => &self.price_range,
            Field::RecommendedMenu => &self.recommended_menu,
            Field::Review => &self.review,
            Field::SubmitterName => &self.submitter_name,
            Field::SubmitterEmail => &self.submitter_email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}
