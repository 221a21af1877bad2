pub mod client;
pub mod confidence;
pub mod config;
pub mod controller;
pub mod error;
pub mod history;
pub mod model;

pub use client::ClassificationClient;
pub use confidence::{ConfidenceBar, ConfidenceTier};
pub use config::DashboardConfig;
pub use controller::{ApplicationState, ResponsePolicy, Submission, SubmissionController};
pub use error::{ClientError, ConfigError, SubmitError};
pub use history::{DashboardAggregate, HISTORY_CAPACITY, HistoryStore};
pub use model::{
    AnalysisResult, EntryId, HistoryEntry, PredictRequest, PredictResponse, ProductCategory,
    Rating, ReviewInput, Verdict,
};
