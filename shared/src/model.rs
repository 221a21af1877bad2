use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};
use uuid::Uuid;

use crate::confidence::ConfidenceBar;
use crate::error::SubmitError;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Product categories the classification model was trained on. The wire
/// form is the dataset name, e.g. `Electronics_5`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
    strum_macros::Display,
)]
#[serde(try_from = "String", into = "String")]
pub enum ProductCategory {
    #[strum(serialize = "Books_5")]
    Books,
    #[strum(serialize = "Clothing_Shoes_and_Jewelry_5")]
    ClothingShoesAndJewelry,
    #[default]
    #[strum(serialize = "Electronics_5")]
    Electronics,
    #[strum(serialize = "Home_and_Kitchen_5")]
    HomeAndKitchen,
    #[strum(serialize = "Kindle_Store_5")]
    KindleStore,
    #[strum(serialize = "Movies_and_TV_5")]
    MoviesAndTv,
    #[strum(serialize = "Pet_Supplies_5")]
    PetSupplies,
    #[strum(serialize = "Sports_and_Outdoors_5")]
    SportsAndOutdoors,
    #[strum(serialize = "Tools_and_Home_Improvement_5")]
    ToolsAndHomeImprovement,
    #[strum(serialize = "Toys_and_Games_5")]
    ToysAndGames,
}

impl ProductCategory {
    pub fn all() -> impl Iterator<Item = ProductCategory> {
        ProductCategory::iter()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Books => "Books",
            ProductCategory::ClothingShoesAndJewelry => "Clothing, Shoes & Jewelry",
            ProductCategory::Electronics => "Electronics",
            ProductCategory::HomeAndKitchen => "Home & Kitchen",
            ProductCategory::KindleStore => "Kindle Store",
            ProductCategory::MoviesAndTv => "Movies & TV",
            ProductCategory::PetSupplies => "Pet Supplies",
            ProductCategory::SportsAndOutdoors => "Sports & Outdoors",
            ProductCategory::ToolsAndHomeImprovement => "Tools & Home Improvement",
            ProductCategory::ToysAndGames => "Toys & Games",
        }
    }
}

impl From<ProductCategory> for String {
    fn from(category: ProductCategory) -> Self {
        category.as_ref().to_string()
    }
}

impl TryFrom<String> for ProductCategory {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Star rating in `[1.0, 5.0]`.
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, derive_more::Display, derive_more::Into,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    pub fn new(value: f64) -> Result<Self, SubmitError> {
        if (MIN_RATING..=MAX_RATING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SubmitError::RatingOutOfRange(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(MAX_RATING)
    }
}

impl TryFrom<f64> for Rating {
    type Error = SubmitError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

/// What the user typed, plus the optional metadata sent alongside it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewInput {
    pub category: ProductCategory,
    pub rating: Rating,
    pub text: String,
}

impl ReviewInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: ProductCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    pub fn to_request(&self) -> PredictRequest {
        PredictRequest {
            category: Some(self.category),
            rating: Some(self.rating.value()),
            review: self.text.clone(),
        }
    }
}

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProductCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub review: String,
}

/// Well-formed success body, `{ is_fake, confidence?, predicted_label? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub is_fake: bool,
    pub confidence: Option<f64>,
    pub predicted_label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Verdict {
    Fake,
    Genuine,
    Failed,
}

/// Outcome of one analysis. Exactly one variant per completed submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisResult {
    Success {
        is_fake: bool,
        confidence: Option<f64>,
        predicted_label: Option<String>,
        /// An `error` string the service put in its own body.
        service_error: Option<String>,
    },
    Failure {
        error_message: String,
    },
}

impl AnalysisResult {
    pub fn failure(message: impl Into<String>) -> Self {
        AnalysisResult::Failure {
            error_message: message.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, AnalysisResult::Failure { .. })
    }

    /// `None` for failures.
    pub fn is_fake(&self) -> Option<bool> {
        match self {
            AnalysisResult::Success { is_fake, .. } => Some(*is_fake),
            AnalysisResult::Failure { .. } => None,
        }
    }

    pub fn confidence(&self) -> Option<f64> {
        match self {
            AnalysisResult::Success { confidence, .. } => *confidence,
            AnalysisResult::Failure { .. } => None,
        }
    }

    pub fn predicted_label(&self) -> Option<&str> {
        match self {
            AnalysisResult::Success {
                predicted_label, ..
            } => predicted_label.as_deref(),
            AnalysisResult::Failure { .. } => None,
        }
    }

    /// Message to show instead of a verdict, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            AnalysisResult::Success { service_error, .. } => service_error.as_deref(),
            AnalysisResult::Failure { error_message } => Some(error_message),
        }
    }

    /// Only defined when a numeric confidence is present.
    pub fn confidence_bar(&self) -> Option<ConfidenceBar> {
        self.confidence().map(ConfidenceBar::from_confidence)
    }

    pub fn verdict(&self) -> Verdict {
        match self.is_fake() {
            Some(true) => Verdict::Fake,
            Some(false) => Verdict::Genuine,
            None => Verdict::Failed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: EntryId,
    pub input: ReviewInput,
    pub result: AnalysisResult,
    pub submitted_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(input: ReviewInput, result: AnalysisResult, submitted_at: DateTime<Utc>) -> Self {
        Self::with_id(EntryId::new(), input, result, submitted_at)
    }

    pub fn with_id(
        id: EntryId,
        input: ReviewInput,
        result: AnalysisResult,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            input,
            result,
            submitted_at,
        }
    }
}
