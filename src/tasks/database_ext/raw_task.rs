use anyhow::anyhow;
use sqlx::FromRow;
use taskboard_types::tasks::{Task, TaskStatus};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(FromRow, Debug, Eq, PartialEq, Clone)]
pub(super) struct RawTask {
    pub id: Uuid,
    pub application_id: String,
    pub kind: String,
    pub due_at: OffsetDateTime,
    pub status: String,
    pub tenant_id: Option<Uuid>,
}

impl TryFrom<RawTask> for Task {
    type Error = anyhow::Error;

    fn try_from(raw_task: RawTask) -> Result<Self, Self::Error> {
        let status = raw_task.status.parse::<TaskStatus>().map_err(|_| {
            anyhow!(
                "Task ('{}') has unexpected status: {}",
                raw_task.id,
                raw_task.status
            )
        })?;

        Ok(Task {
            id: raw_task.id,
            application_id: raw_task.application_id,
            kind: raw_task.kind,
            due_at: raw_task.due_at,
            status,
            tenant_id: raw_task.tenant_id,
        })
    }
}
