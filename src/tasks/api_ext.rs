use crate::{
    api::Api, database::Database, error::Error as TaskboardError, tasks::TasksDatabaseExt,
};
use anyhow::bail;
use taskboard_types::tasks::{
    Task, TaskCreateParams, TaskIngestParams, TaskKind, TaskUpdateParams,
};
use time::{format_description::well_known::Rfc3339, macros::time, OffsetDateTime, Time};
use tracing::debug;
use uuid::Uuid;

/// Defines the application id assigned to manually composed tasks with no application context.
pub const UNASSIGNED_APPLICATION_ID: &str = "N/A";

/// Defines the maximum length of the free-form task kind text.
pub const MAX_TASK_KIND_LENGTH: usize = 100;

pub struct TasksApiExt<'a> {
    tasks: TasksDatabaseExt<'a>,
}

impl<'a> TasksApiExt<'a> {
    /// Creates Tasks API.
    pub fn new(api: &'a Api) -> Self {
        Self {
            tasks: api.db.tasks(),
        }
    }

    /// Validates a task-creation request submitted by an external caller and inserts the task.
    /// A single insert attempt is authoritative, store rejections aren't retried.
    pub async fn ingest_task(&self, params: TaskIngestParams) -> anyhow::Result<Task> {
        let (application_id, kind, due_at) =
            Self::validate_ingest_params(params, Database::utc_now()?)?;

        // TODO: derive the tenant from the authenticated caller identity once the auth context
        // is plumbed through to the ingestion endpoint.
        let tenant_id = Uuid::new_v4();

        let task = self
            .tasks
            .insert_task(&application_id, kind.as_str(), due_at, Some(tenant_id))
            .await?;

        debug!(task.id = %task.id, "Successfully ingested task.");

        Ok(task)
    }

    /// Creates a manually composed task. The kind text is free-form and isn't restricted to the
    /// ingestion kind set, the due time defaults to the end of the current day, and tasks
    /// composed outside of an application context are attributed to the unassigned application
    /// placeholder.
    pub async fn create_task(&self, params: TaskCreateParams) -> anyhow::Result<Task> {
        let kind = Self::validate_task_kind(&params.kind)?;

        let due_at = match params.due_at {
            Some(due_at) => due_at,
            None => day_bounds(Database::utc_now()?).1,
        };
        let application_id = params
            .application_id
            .unwrap_or_else(|| UNASSIGNED_APPLICATION_ID.to_string());

        let task = self
            .tasks
            .insert_task(&application_id, kind, due_at, None)
            .await?;

        debug!(task.id = %task.id, "Successfully created task.");

        Ok(task)
    }

    /// Returns all non-completed tasks that are due within the day `now` falls in.
    pub async fn list_due_today(&self, now: OffsetDateTime) -> anyhow::Result<Vec<Task>> {
        let (start, end) = day_bounds(now);
        self.tasks.get_pending_tasks_due_between(start, end).await
    }

    /// Returns task by its ID.
    pub async fn get_task(&self, id: Uuid) -> anyhow::Result<Option<Task>> {
        self.tasks.get_task(id).await
    }

    /// Replaces the kind text of the existing task. No other field is mutable through this path.
    pub async fn update_task(&self, id: Uuid, params: TaskUpdateParams) -> anyhow::Result<Task> {
        let kind = Self::validate_task_kind(&params.kind)?;

        let Some(existing_task) = self.tasks.get_task(id).await? else {
            bail!(TaskboardError::client(format!(
                "Task ('{id}') is not found."
            )));
        };

        self.tasks.update_task_kind(id, kind).await?;

        debug!(task.id = %id, "Successfully updated task.");

        Ok(Task {
            kind: kind.to_string(),
            ..existing_task
        })
    }

    /// Marks the existing task as completed. Completed tasks no longer satisfy the dashboard
    /// list predicate and drop out of the "due today" view.
    pub async fn complete_task(&self, id: Uuid) -> anyhow::Result<()> {
        if !self.tasks.complete_task(id).await? {
            bail!(TaskboardError::client(format!(
                "Task ('{id}') is not found."
            )));
        }

        debug!(task.id = %id, "Successfully completed task.");

        Ok(())
    }

    /// Permanently removes the existing task. Removal of an unknown task is a no-op.
    pub async fn remove_task(&self, id: Uuid) -> anyhow::Result<()> {
        self.tasks.remove_task(id).await?;

        debug!(task.id = %id, "Successfully removed task.");

        Ok(())
    }

    /// Validates the ingestion parameters field by field. The order is fixed and short-circuits
    /// on the first failing field, and no store call is attempted until every field passed.
    fn validate_ingest_params(
        params: TaskIngestParams,
        now: OffsetDateTime,
    ) -> anyhow::Result<(String, TaskKind, OffsetDateTime)> {
        let Some(application_id) = params.application_id.filter(|id| !id.is_empty()) else {
            bail!(TaskboardError::client("application_id is required"));
        };

        let Some(kind) = params
            .task_type
            .and_then(|kind| kind.parse::<TaskKind>().ok())
        else {
            bail!(TaskboardError::client(
                "task_type must be one of: call, email, review"
            ));
        };

        let Some(due_at) = params.due_at else {
            bail!(TaskboardError::client("due_at is required"));
        };

        let Ok(due_at) = OffsetDateTime::parse(&due_at, &Rfc3339) else {
            bail!(TaskboardError::client("invalid due_at timestamp"));
        };

        if due_at <= now {
            bail!(TaskboardError::client("due_at must be in the future"));
        }

        Ok((application_id, kind, due_at))
    }

    /// Validates the free-form kind text used by the manual create and update paths.
    fn validate_task_kind(kind: &str) -> anyhow::Result<&str> {
        let kind = kind.trim();
        if kind.is_empty() {
            bail!(TaskboardError::client("Task type cannot be empty."));
        }

        if kind.len() > MAX_TASK_KIND_LENGTH {
            bail!(TaskboardError::client(format!(
                "Task type cannot be longer than {MAX_TASK_KIND_LENGTH} characters."
            )));
        }

        Ok(kind)
    }
}

/// Returns the inclusive bounds of the calendar day `now` falls in, from the very first to the
/// very last millisecond of the day.
pub fn day_bounds(now: OffsetDateTime) -> (OffsetDateTime, OffsetDateTime) {
    (
        now.replace_time(Time::MIDNIGHT),
        now.replace_time(time!(23:59:59.999)),
    )
}

impl Api {
    /// Returns an API to work with tasks.
    pub fn tasks(&self) -> TasksApiExt<'_> {
        TasksApiExt::new(self)
    }
}
