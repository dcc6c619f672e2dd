use crate::tasks::TaskStatus;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// A reminder tied to an application record.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, ToSchema)]
pub struct Task {
    /// Unique id of the task, assigned by the store on insert.
    pub id: Uuid,
    /// Id of the application record the task belongs to. Referential integrity is delegated to
    /// the store.
    pub application_id: String,
    /// Kind of the reminder. Free-form text: tasks submitted through the ingestion endpoint are
    /// restricted to the closed `TaskKind` set, manually composed ones are not.
    #[serde(rename = "type")]
    pub kind: String,
    /// The time the task is due.
    #[serde(with = "time::serde::rfc3339")]
    pub due_at: OffsetDateTime,
    /// Completion status of the task.
    pub status: TaskStatus,
    /// Id of the tenant the task is scoped to, if any.
    pub tenant_id: Option<Uuid>,
}
