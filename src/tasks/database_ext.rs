mod raw_task;

use crate::{database::Database, error::Error as TaskboardError};
use anyhow::{anyhow, bail};
use raw_task::RawTask;
use sqlx::{query, query_as, Pool, Postgres};
use taskboard_types::tasks::{Task, TaskStatus};
use time::OffsetDateTime;
use uuid::Uuid;

/// A database extension for the tasks-related operations.
pub struct TasksDatabaseExt<'pool> {
    pool: &'pool Pool<Postgres>,
}

impl<'pool> TasksDatabaseExt<'pool> {
    pub fn new(pool: &'pool Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Retrieves task with the specified ID.
    pub async fn get_task(&self, id: Uuid) -> anyhow::Result<Option<Task>> {
        query_as::<_, RawTask>(
            r#"
SELECT id, application_id, type AS kind, due_at, status, tenant_id
FROM tasks
WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .map(Task::try_from)
        .transpose()
    }

    /// Retrieves all non-completed tasks that are due within the specified time range, inclusive
    /// on both ends. Rows are returned in insertion order, no explicit ordering is applied.
    pub async fn get_pending_tasks_due_between(
        &self,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> anyhow::Result<Vec<Task>> {
        let raw_tasks = query_as::<_, RawTask>(
            r#"
SELECT id, application_id, type AS kind, due_at, status, tenant_id
FROM tasks
WHERE due_at >= $1 AND due_at <= $2 AND status <> $3
            "#,
        )
        .bind(start)
        .bind(end)
        .bind(TaskStatus::Completed.as_str())
        .fetch_all(self.pool)
        .await?;

        let mut tasks = vec![];
        for raw_task in raw_tasks {
            tasks.push(Task::try_from(raw_task)?);
        }

        Ok(tasks)
    }

    /// Inserts a new pending task, deferring id generation to the store, and returns the
    /// inserted row.
    pub async fn insert_task(
        &self,
        application_id: &str,
        kind: &str,
        due_at: OffsetDateTime,
        tenant_id: Option<Uuid>,
    ) -> anyhow::Result<Task> {
        let result = query_as::<_, RawTask>(
            r#"
INSERT INTO tasks (application_id, type, due_at, status, tenant_id)
VALUES ( $1, $2, $3, $4, $5 )
RETURNING id, application_id, type AS kind, due_at, status, tenant_id
            "#,
        )
        .bind(application_id)
        .bind(kind)
        .bind(due_at)
        .bind(TaskStatus::Pending.as_str())
        .bind(tenant_id)
        .fetch_one(self.pool)
        .await;

        match result {
            Ok(raw_task) => Task::try_from(raw_task),
            Err(err) => bail!(TaskboardError::store(anyhow!(err))),
        }
    }

    /// Replaces the kind text of the task with the specified ID. Returns `false` if there is no
    /// such task.
    pub async fn update_task_kind(&self, id: Uuid, kind: &str) -> anyhow::Result<bool> {
        let result = query(r#"UPDATE tasks SET type = $2 WHERE id = $1"#)
            .bind(id)
            .bind(kind)
            .execute(self.pool)
            .await;

        match result {
            Ok(result) => Ok(result.rows_affected() > 0),
            Err(err) => bail!(TaskboardError::store(anyhow!(err))),
        }
    }

    /// Marks the task with the specified ID as completed. Returns `false` if there is no such
    /// task.
    pub async fn complete_task(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = query(r#"UPDATE tasks SET status = $2 WHERE id = $1"#)
            .bind(id)
            .bind(TaskStatus::Completed.as_str())
            .execute(self.pool)
            .await;

        match result {
            Ok(result) => Ok(result.rows_affected() > 0),
            Err(err) => bail!(TaskboardError::store(anyhow!(err))),
        }
    }

    /// Removes task with the specified ID. Returns `false` if there is no such task.
    pub async fn remove_task(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = query(r#"DELETE FROM tasks WHERE id = $1"#)
            .bind(id)
            .execute(self.pool)
            .await;

        match result {
            Ok(result) => Ok(result.rows_affected() > 0),
            Err(err) => bail!(TaskboardError::store(anyhow!(err))),
        }
    }
}

impl Database {
    /// Returns a database extension for the tasks-related operations.
    pub fn tasks(&self) -> TasksDatabaseExt<'_> {
        TasksDatabaseExt::new(&self.pool)
    }
}
