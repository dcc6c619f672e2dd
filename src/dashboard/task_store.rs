use crate::database::Database;
use async_trait::async_trait;
use taskboard_types::tasks::Task;
use time::OffsetDateTime;
use uuid::Uuid;

/// The store operations the dashboard client issues directly, one per mutation round trip it
/// suspends on. Consistency guarantees are delegated to the store: concurrent mutations of the
/// same task race with last-write-wins semantics and no conflict detection.
#[async_trait]
pub trait TaskStore {
    /// Returns all non-completed tasks due within the specified inclusive time range.
    async fn pending_tasks_due_between(
        &self,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> anyhow::Result<Vec<Task>>;

    /// Inserts a new pending task and returns the stored record.
    async fn insert_task(
        &self,
        kind: &str,
        due_at: OffsetDateTime,
        application_id: &str,
    ) -> anyhow::Result<Task>;

    /// Replaces the kind text of the specified task.
    async fn update_task_kind(&self, id: Uuid, kind: &str) -> anyhow::Result<()>;

    /// Marks the specified task as completed.
    async fn complete_task(&self, id: Uuid) -> anyhow::Result<()>;

    /// Permanently removes the specified task.
    async fn remove_task(&self, id: Uuid) -> anyhow::Result<()>;
}

#[async_trait]
impl TaskStore for Database {
    async fn pending_tasks_due_between(
        &self,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> anyhow::Result<Vec<Task>> {
        self.tasks().get_pending_tasks_due_between(start, end).await
    }

    async fn insert_task(
        &self,
        kind: &str,
        due_at: OffsetDateTime,
        application_id: &str,
    ) -> anyhow::Result<Task> {
        self.tasks()
            .insert_task(application_id, kind, due_at, None)
            .await
    }

    // Mutations of unknown tasks settle silently: the dashboard doesn't distinguish a row that
    // never existed from one another session already mutated.
    async fn update_task_kind(&self, id: Uuid, kind: &str) -> anyhow::Result<()> {
        self.tasks().update_task_kind(id, kind).await.map(|_| ())
    }

    async fn complete_task(&self, id: Uuid) -> anyhow::Result<()> {
        self.tasks().complete_task(id).await.map(|_| ())
    }

    async fn remove_task(&self, id: Uuid) -> anyhow::Result<()> {
        self.tasks().remove_task(id).await.map(|_| ())
    }
}
