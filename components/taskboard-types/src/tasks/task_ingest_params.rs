use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Parameters of a task-creation request submitted to the ingestion endpoint.
///
/// Every field is optional at the decoding stage: the endpoint validates field by field, in a
/// fixed order, so that the response pinpoints the first missing or invalid one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, ToSchema)]
pub struct TaskIngestParams {
    /// Id of the application record the task belongs to.
    pub application_id: Option<String>,
    /// Kind of the reminder, one of `call`, `email`, or `review`.
    pub task_type: Option<String>,
    /// The time the task is due, as an RFC 3339 timestamp. Must be in the future.
    pub due_at: Option<String>,
}
