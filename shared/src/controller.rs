use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::ClassificationClient;
use crate::config::DashboardConfig;
use crate::error::{ClientError, SubmitError};
use crate::history::{DashboardAggregate, HistoryStore};
use crate::model::{
    AnalysisResult, EntryId, HistoryEntry, PredictRequest, PredictResponse, ReviewInput,
};

/// How much of the response body is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponsePolicy {
    /// Any JSON body is a success. `is_fake` is read by truthiness (`1`,
    /// `"yes"`, `{}` are fake; `0`, `""`, `null` or missing are genuine) and a
    /// numeric string `confidence` is parsed. Anything else reads as absent.
    #[default]
    Lenient,
    /// The body must be an object with a boolean `is_fake`.
    Strict,
}

impl ResponsePolicy {
    pub fn interpret(&self, body: Value) -> Result<AnalysisResult, serde_json::Error> {
        let service_error = body
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_owned);

        match self {
            ResponsePolicy::Lenient => Ok(AnalysisResult::Success {
                is_fake: body.get("is_fake").is_some_and(is_truthy),
                confidence: body.get("confidence").and_then(lenient_number),
                predicted_label: body
                    .get("predicted_label")
                    .and_then(Value::as_str)
                    .map(str::to_owned),
                service_error,
            }),
            ResponsePolicy::Strict => {
                let response: PredictResponse = serde_json::from_value(body)?;
                Ok(AnalysisResult::Success {
                    is_fake: response.is_fake,
                    confidence: response.confidence,
                    predicted_label: response.predicted_label,
                    service_error,
                })
            }
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn lenient_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Everything the dashboard renders from.
#[derive(Debug, Clone, Default)]
pub struct ApplicationState {
    pub pending_input: Option<ReviewInput>,
    pub last_result: Option<AnalysisResult>,
    pub history: HistoryStore,
    pub busy: bool,
}

/// Ticket for the one in-flight submission. Not `Clone`: it is consumed by
/// [`SubmissionController::complete`], so each submission resolves once.
#[derive(Debug)]
pub struct Submission {
    id: EntryId,
    request: PredictRequest,
}

impl Submission {
    /// Also the id of the history entry this submission produces.
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn request(&self) -> &PredictRequest {
        &self.request
    }
}

/// Drives reviews through analysis, one at a time, and owns the state the
/// dashboard is rendered from.
///
/// A UI event loop calls [`begin`](Self::begin), performs the request
/// itself, then calls [`complete`](Self::complete). Callers that can hold
/// the controller across the await use [`submit`](Self::submit).
#[derive(Debug)]
pub struct SubmissionController {
    state: ApplicationState,
    policy: ResponsePolicy,
    failure_message: String,
    in_flight: Option<EntryId>,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

impl SubmissionController {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            state: ApplicationState::default(),
            policy: config.response_policy,
            failure_message: config.failure_message.clone(),
            in_flight: None,
        }
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.busy
    }

    /// Whether the submit control should be enabled for `text`.
    pub fn can_submit(&self, text: &str) -> bool {
        !self.state.busy && !text.is_empty()
    }

    pub fn history(&self) -> &HistoryStore {
        &self.state.history
    }

    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.state.last_result.as_ref()
    }

    pub fn aggregate(&self) -> DashboardAggregate {
        self.state.history.aggregate()
    }

    pub fn begin(&mut self, input: ReviewInput) -> Result<Submission, SubmitError> {
        if self.state.busy {
            return Err(SubmitError::Busy);
        }
        if input.text.is_empty() {
            return Err(SubmitError::EmptyReview);
        }

        let id = EntryId::new();

        let request = input.to_request();
        self.state.pending_input = Some(input);
        self.state.last_result = None;
        self.state.busy = true;
        self.in_flight = Some(id);

        log::debug!("Dispatching submission {}", id);
        Ok(Submission { id, request })
    }

    /// Turns the transport outcome into a result and records it. Transport
    /// errors become [`AnalysisResult::Failure`] carrying the configured
    /// message, never an `Err`.
    pub fn complete(
        &mut self,
        submission: Submission,
        outcome: Result<Value, ClientError>,
    ) -> Result<AnalysisResult, SubmitError> {
        let id = submission.id;
        if self.in_flight != Some(id) {
            log::warn!("Ignoring completion of submission {}", id);
            return Err(SubmitError::StaleSubmission(id));
        }
        let input = self
            .state
            .pending_input
            .take()
            .ok_or(SubmitError::StaleSubmission(id))?;

        let result = match outcome {
            Ok(body) => self.policy.interpret(body).unwrap_or_else(|e| {
                log::warn!("Submission {} returned a malformed response: {}", id, e);
                AnalysisResult::failure(format!("Malformed response: {}", e))
            }),
            Err(e) => {
                log::warn!("Submission {} failed: {}", id, e);
                AnalysisResult::failure(self.failure_message.clone())
            }
        };

        log::info!("Submission {} completed: {}", id, result.verdict());
        self.state
            .history
            .record(HistoryEntry::with_id(id, input, result.clone(), chrono::Utc::now()));
        self.state.last_result = Some(result.clone());
        self.state.busy = false;
        self.in_flight = None;

        Ok(result)
    }

    /// One request, no retry.
    pub async fn submit<C: ClassificationClient>(
        &mut self,
        client: &C,
        input: ReviewInput,
    ) -> Result<AnalysisResult, SubmitError> {
        let submission = self.begin(input)?;
        let outcome = client.predict(submission.request()).await;
        self.complete(submission, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok(body: Value) -> Result<Value, ClientError> {
        Ok(body)
    }

    #[test]
    fn lenient_passes_fields_through() {
        let result = ResponsePolicy::Lenient
            .interpret(json!({ "is_fake": true, "confidence": 0.93, "predicted_label": "CG" }))
            .unwrap();
        assert_eq!(
            result,
            AnalysisResult::Success {
                is_fake: true,
                confidence: Some(0.93),
                predicted_label: Some("CG".into()),
                service_error: None,
            }
        );
    }

    #[test]
    fn lenient_accepts_any_shape() {
        let result = ResponsePolicy::Lenient
            .interpret(json!({ "error": "model not loaded" }))
            .unwrap();
        assert_eq!(result.is_fake(), Some(false));
        assert_eq!(result.confidence(), None);
        assert_eq!(result.error_message(), Some("model not loaded"));

        let result = ResponsePolicy::Lenient.interpret(json!([1, 2, 3])).unwrap();
        assert!(!result.is_failure());
    }

    #[test]
    fn strict_requires_boolean_is_fake() {
        assert!(ResponsePolicy::Strict.interpret(json!({ "confidence": 0.4 })).is_err());
        assert!(ResponsePolicy::Strict.interpret(json!({ "is_fake": "yes" })).is_err());

        let result = ResponsePolicy::Strict
            .interpret(json!({ "is_fake": false }))
            .unwrap();
        assert_eq!(result.is_fake(), Some(false));
        assert_eq!(result.confidence(), None);
    }

    #[test]
    fn begin_sets_busy_and_rejects_reentry() {
        let mut controller = SubmissionController::default();
        let submission = controller.begin(ReviewInput::new("first")).unwrap();

        assert!(controller.is_busy());
        assert!(!controller.can_submit("second"));
        assert_eq!(
            controller.state().pending_input.as_ref().map(|i| i.text.as_str()),
            Some("first")
        );
        assert_eq!(
            controller.begin(ReviewInput::new("second")).unwrap_err(),
            SubmitError::Busy
        );

        controller.complete(submission, ok(json!({ "is_fake": false }))).unwrap();
        assert!(!controller.is_busy());
        assert!(controller.can_submit("second"));
        assert_eq!(controller.state().pending_input, None);
    }

    #[test]
    fn begin_rejects_empty_text() {
        let mut controller = SubmissionController::default();
        assert!(!controller.can_submit(""));
        assert_eq!(
            controller.begin(ReviewInput::new("")).unwrap_err(),
            SubmitError::EmptyReview
        );
        assert!(!controller.is_busy());
        assert!(controller.history().is_empty());
    }

    #[test]
    fn begin_clears_previous_result() {
        let mut controller = SubmissionController::default();
        let first = controller.begin(ReviewInput::new("one")).unwrap();
        controller.complete(first, ok(json!({ "is_fake": true }))).unwrap();
        assert!(controller.last_result().is_some());

        let _second = controller.begin(ReviewInput::new("two")).unwrap();
        assert_eq!(controller.last_result(), None);
    }

    #[test]
    fn stale_ticket_changes_nothing() {
        let mut controller = SubmissionController::default();
        let first = controller.begin(ReviewInput::new("one")).unwrap();
        let first_id = first.id();
        controller.complete(first, ok(json!({ "is_fake": true }))).unwrap();
        assert_eq!(controller.history().latest().map(|e| e.id), Some(first_id));

        let stale = Submission {
            id: first_id,
            request: ReviewInput::new("one").to_request(),
        };
        let _current = controller.begin(ReviewInput::new("two")).unwrap();
        assert_eq!(
            controller.complete(stale, ok(json!({}))).unwrap_err(),
            SubmitError::StaleSubmission(first_id)
        );
        assert!(controller.is_busy());
        assert_eq!(controller.history().len(), 1);
    }

    #[test]
    fn ticket_from_another_controller_is_rejected() {
        let mut ours = SubmissionController::default();
        let mut theirs = SubmissionController::default();
        let _current = ours.begin(ReviewInput::new("ours")).unwrap();
        let foreign = theirs.begin(ReviewInput::new("theirs")).unwrap();
        let foreign_id = foreign.id();

        assert_eq!(
            ours.complete(foreign, ok(json!({ "is_fake": true }))).unwrap_err(),
            SubmitError::StaleSubmission(foreign_id)
        );
        assert!(ours.is_busy());
        assert!(ours.history().is_empty());
        assert!(theirs.is_busy());
    }

    #[test]
    fn lenient_uses_truthiness() {
        let fake = |body: Value| ResponsePolicy::Lenient.interpret(body).unwrap().is_fake();

        assert_eq!(fake(json!({ "is_fake": 1 })), Some(true));
        assert_eq!(fake(json!({ "is_fake": -0.5 })), Some(true));
        assert_eq!(fake(json!({ "is_fake": "true" })), Some(true));
        assert_eq!(fake(json!({ "is_fake": "false" })), Some(true));
        assert_eq!(fake(json!({ "is_fake": [] })), Some(true));
        assert_eq!(fake(json!({ "is_fake": {} })), Some(true));

        assert_eq!(fake(json!({ "is_fake": 0 })), Some(false));
        assert_eq!(fake(json!({ "is_fake": 0.0 })), Some(false));
        assert_eq!(fake(json!({ "is_fake": "" })), Some(false));
        assert_eq!(fake(json!({ "is_fake": null })), Some(false));
        assert_eq!(fake(json!({})), Some(false));
    }

    #[test]
    fn lenient_parses_numeric_string_confidence() {
        let confidence =
            |body: Value| ResponsePolicy::Lenient.interpret(body).unwrap().confidence();

        assert_eq!(confidence(json!({ "confidence": "0.87" })), Some(0.87));
        assert_eq!(confidence(json!({ "confidence": " 0.5 " })), Some(0.5));
        assert_eq!(confidence(json!({ "confidence": 0.25 })), Some(0.25));
        assert_eq!(confidence(json!({ "confidence": "high" })), None);
        assert_eq!(confidence(json!({ "confidence": "NaN" })), None);
        assert_eq!(confidence(json!({ "confidence": true })), None);
    }

    #[test]
    fn transport_error_becomes_configured_failure() {
        let config = DashboardConfig {
            failure_message: "Could not reach the review classifier".into(),
            ..DashboardConfig::default()
        };
        let mut controller = SubmissionController::new(&config);
        let submission = controller.begin(ReviewInput::new("hello")).unwrap();
        let result = controller
            .complete(submission, Err(ClientError::Timeout(15_000)))
            .unwrap();

        assert_eq!(
            result,
            AnalysisResult::failure("Could not reach the review classifier")
        );
        assert_eq!(controller.last_result(), Some(&result));
        assert_eq!(controller.history().len(), 1);
    }

    #[test]
    fn strict_policy_turns_malformed_body_into_failure() {
        let config = DashboardConfig {
            response_policy: ResponsePolicy::Strict,
            ..DashboardConfig::default()
        };
        let mut controller = SubmissionController::new(&config);
        let submission = controller.begin(ReviewInput::new("hello")).unwrap();
        let result = controller
            .complete(submission, ok(json!({ "error": "boom" })))
            .unwrap();

        assert!(result.is_failure());
        assert!(
            result
                .error_message()
                .is_some_and(|m| m.starts_with("Malformed response"))
        );
        assert_eq!(controller.aggregate().failed, 1);
    }
}
