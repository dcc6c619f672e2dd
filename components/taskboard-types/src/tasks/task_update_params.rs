use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Parameters for updating an existing task. Only the kind text is mutable through this path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct TaskUpdateParams {
    /// New kind text for the task.
    #[serde(rename = "type")]
    pub kind: String,
}
