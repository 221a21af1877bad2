use serde_json::Value;

use crate::error::ClientError;
use crate::model::PredictRequest;

/// The single wire boundary to the classification service.
///
/// Implementations make exactly one attempt per call and hand back whatever
/// JSON the service answered with. Interpreting the body is the
/// controller's job.
#[allow(async_fn_in_trait)]
pub trait ClassificationClient {
    async fn predict(&self, request: &PredictRequest) -> Result<Value, ClientError>;
}
