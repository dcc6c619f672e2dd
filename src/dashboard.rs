mod mutation_state;
mod task_store;
mod today_query;

pub use self::{
    mutation_state::MutationState,
    task_store::TaskStore,
    today_query::{TodayQuery, TODAY_TASKS_QUERY},
};
use crate::tasks::{day_bounds, UNASSIGNED_APPLICATION_ID};
use taskboard_types::tasks::Task;
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

/// Edit mode state for a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEdit {
    /// Id of the task being edited.
    pub task_id: Uuid,
    /// Current content of the edit input, prefilled with the kind text of the task.
    pub input: String,
}

/// Embeddable model of the "today's tasks" dashboard view.
///
/// The client talks straight to the task store and reconciles its local view with the store
/// after every mutation through cache invalidation: a mutation suspends at the store round
/// trip, and only a settled, successful round trip invalidates the cached list query. Nothing
/// is applied optimistically, so a failed mutation leaves the already-rendered state untouched
/// and only surfaces the store error.
pub struct DashboardClient<S: TaskStore> {
    store: S,
    today: TodayQuery,
    create: MutationState,
    update: MutationState,
    complete: MutationState,
    remove: MutationState,
    compose_input: String,
    edit: Option<TaskEdit>,
}

impl<S: TaskStore> DashboardClient<S> {
    /// Creates a dashboard client on top of the specified task store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            today: TodayQuery::default(),
            create: MutationState::default(),
            update: MutationState::default(),
            complete: MutationState::default(),
            remove: MutationState::default(),
            compose_input: String::new(),
            edit: None,
        }
    }

    /// Returns today's pending tasks, re-running the list query first if the cache is stale.
    /// `now` determines the day bounds and is supplied by the embedder, which knows the local
    /// time of the viewer.
    pub async fn tasks(&mut self, now: OffsetDateTime) -> anyhow::Result<&[Task]> {
        if self.today.is_stale() {
            let (start, end) = day_bounds(now);
            let tasks = self.store.pending_tasks_due_between(start, end).await?;
            debug!(
                query = TODAY_TASKS_QUERY,
                count = tasks.len(),
                "Fetched today's tasks."
            );
            self.today.fill(tasks);
        }

        Ok(self.today.tasks())
    }

    /// Returns the current content of the compose input.
    pub fn compose_input(&self) -> &str {
        &self.compose_input
    }

    /// Replaces the content of the compose input.
    pub fn set_compose_input<T: Into<String>>(&mut self, input: T) {
        self.compose_input = input.into();
    }

    /// Submits the compose input as a new task due by the end of the current day. A blank input
    /// or an already in-flight create is a no-op, mirroring the disabled submit control.
    pub async fn submit_new_task(&mut self, now: OffsetDateTime) -> anyhow::Result<()> {
        let kind = self.compose_input.trim().to_string();
        if kind.is_empty() || self.create.is_pending() {
            return Ok(());
        }

        self.create.begin();
        let (_, end_of_day) = day_bounds(now);
        match self
            .store
            .insert_task(&kind, end_of_day, UNASSIGNED_APPLICATION_ID)
            .await
        {
            Ok(task) => {
                debug!(
                    task.id = %task.id,
                    query = TODAY_TASKS_QUERY,
                    "Created task, invalidating list query."
                );
                self.create.succeed();
                self.today.invalidate();
                self.compose_input.clear();
                Ok(())
            }
            Err(err) => {
                self.create.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Enters edit mode for the specified task, prefilling the edit input with its current kind
    /// text. Returns `false` if the task isn't part of the rendered list.
    pub fn start_edit(&mut self, task_id: Uuid) -> bool {
        match self.today.tasks().iter().find(|task| task.id == task_id) {
            Some(task) => {
                self.edit = Some(TaskEdit {
                    task_id,
                    input: task.kind.clone(),
                });
                true
            }
            None => false,
        }
    }

    /// Returns the active edit state, if any.
    pub fn edit(&self) -> Option<&TaskEdit> {
        self.edit.as_ref()
    }

    /// Replaces the content of the edit input. A no-op outside of edit mode.
    pub fn set_edit_input<T: Into<String>>(&mut self, input: T) {
        if let Some(ref mut edit) = self.edit {
            edit.input = input.into();
        }
    }

    /// Leaves edit mode without a store round trip.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Saves the active edit, replacing the kind text of the edited task. A blank input or an
    /// already in-flight update is a no-op.
    pub async fn save_edit(&mut self) -> anyhow::Result<()> {
        let Some(ref edit) = self.edit else {
            return Ok(());
        };

        let kind = edit.input.trim().to_string();
        if kind.is_empty() || self.update.is_pending() {
            return Ok(());
        }
        let task_id = edit.task_id;

        self.update.begin();
        match self.store.update_task_kind(task_id, &kind).await {
            Ok(()) => {
                debug!(
                    task.id = %task_id,
                    query = TODAY_TASKS_QUERY,
                    "Updated task, invalidating list query."
                );
                self.update.succeed();
                self.today.invalidate();
                self.edit = None;
                Ok(())
            }
            Err(err) => {
                self.update.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Marks the specified task as completed. On success the task no longer satisfies the list
    /// predicate and drops out of the re-fetched view.
    pub async fn complete_task(&mut self, task_id: Uuid) -> anyhow::Result<()> {
        if self.complete.is_pending() {
            return Ok(());
        }

        self.complete.begin();
        match self.store.complete_task(task_id).await {
            Ok(()) => {
                debug!(
                    task.id = %task_id,
                    query = TODAY_TASKS_QUERY,
                    "Completed task, invalidating list query."
                );
                self.complete.succeed();
                self.today.invalidate();
                Ok(())
            }
            Err(err) => {
                self.complete.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Permanently removes the specified task.
    pub async fn delete_task(&mut self, task_id: Uuid) -> anyhow::Result<()> {
        if self.remove.is_pending() {
            return Ok(());
        }

        self.remove.begin();
        match self.store.remove_task(task_id).await {
            Ok(()) => {
                debug!(
                    task.id = %task_id,
                    query = TODAY_TASKS_QUERY,
                    "Removed task, invalidating list query."
                );
                self.remove.succeed();
                self.today.invalidate();
                Ok(())
            }
            Err(err) => {
                self.remove.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Returns the state of the create mutation.
    pub fn create_state(&self) -> &MutationState {
        &self.create
    }

    /// Returns the state of the update mutation.
    pub fn update_state(&self) -> &MutationState {
        &self.update
    }

    /// Returns the state of the complete mutation.
    pub fn complete_state(&self) -> &MutationState {
        &self.complete
    }

    /// Returns the state of the remove mutation.
    pub fn remove_state(&self) -> &MutationState {
        &self.remove
    }
}

#[cfg(test)]
mod tests {
    use crate::dashboard::{DashboardClient, TaskStore};
    use async_trait::async_trait;
    use std::sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex,
    };
    use taskboard_types::tasks::{Task, TaskStatus};
    use time::{macros::datetime, OffsetDateTime};
    use uuid::Uuid;

    const NOW: OffsetDateTime = datetime!(2026-01-15 10:00 UTC);

    /// In-memory task store with the same list predicate as the real one.
    #[derive(Default)]
    struct MockTaskStore {
        tasks: Mutex<Vec<Task>>,
        fail_mutations: AtomicBool,
        list_queries: AtomicUsize,
    }

    impl MockTaskStore {
        fn with_tasks(tasks: Vec<Task>) -> Self {
            Self {
                tasks: Mutex::new(tasks),
                ..Default::default()
            }
        }

        fn fail_mutations(&self) {
            self.fail_mutations.store(true, Ordering::SeqCst);
        }

        fn check_available(&self) -> anyhow::Result<()> {
            if self.fail_mutations.load(Ordering::SeqCst) {
                anyhow::bail!("store rejected the operation");
            }
            Ok(())
        }
    }

    #[async_trait]
    impl TaskStore for &MockTaskStore {
        async fn pending_tasks_due_between(
            &self,
            start: OffsetDateTime,
            end: OffsetDateTime,
        ) -> anyhow::Result<Vec<Task>> {
            self.list_queries.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .tasks
                .lock()
                .unwrap()
                .iter()
                .filter(|task| {
                    task.due_at >= start
                        && task.due_at <= end
                        && task.status != TaskStatus::Completed
                })
                .cloned()
                .collect())
        }

        async fn insert_task(
            &self,
            kind: &str,
            due_at: OffsetDateTime,
            application_id: &str,
        ) -> anyhow::Result<Task> {
            self.check_available()?;
            let task = Task {
                id: Uuid::new_v4(),
                application_id: application_id.to_string(),
                kind: kind.to_string(),
                due_at,
                status: TaskStatus::Pending,
                tenant_id: None,
            };
            self.tasks.lock().unwrap().push(task.clone());
            Ok(task)
        }

        async fn update_task_kind(&self, id: Uuid, kind: &str) -> anyhow::Result<()> {
            self.check_available()?;
            for task in self.tasks.lock().unwrap().iter_mut() {
                if task.id == id {
                    task.kind = kind.to_string();
                }
            }
            Ok(())
        }

        async fn complete_task(&self, id: Uuid) -> anyhow::Result<()> {
            self.check_available()?;
            for task in self.tasks.lock().unwrap().iter_mut() {
                if task.id == id {
                    task.status = TaskStatus::Completed;
                }
            }
            Ok(())
        }

        async fn remove_task(&self, id: Uuid) -> anyhow::Result<()> {
            self.check_available()?;
            self.tasks.lock().unwrap().retain(|task| task.id != id);
            Ok(())
        }
    }

    fn mock_task(kind: &str, due_at: OffsetDateTime, status: TaskStatus) -> Task {
        Task {
            id: Uuid::new_v4(),
            application_id: "app-00000001".to_string(),
            kind: kind.to_string(),
            due_at,
            status,
            tenant_id: None,
        }
    }

    #[tokio::test]
    async fn list_query_excludes_completed_and_out_of_day_tasks() -> anyhow::Result<()> {
        let due_today = mock_task("call", datetime!(2026-01-15 12:00 UTC), TaskStatus::Pending);
        let at_day_start = mock_task(
            "email",
            datetime!(2026-01-15 00:00:00.000 UTC),
            TaskStatus::Pending,
        );
        let at_day_end = mock_task(
            "review",
            datetime!(2026-01-15 23:59:59.999 UTC),
            TaskStatus::Pending,
        );
        let completed = mock_task("call", datetime!(2026-01-15 12:00 UTC), TaskStatus::Completed);
        let due_yesterday = mock_task(
            "call",
            datetime!(2026-01-14 23:59:59.999 UTC),
            TaskStatus::Pending,
        );
        let due_tomorrow = mock_task(
            "call",
            datetime!(2026-01-16 00:00:00.000 UTC),
            TaskStatus::Pending,
        );

        let store = MockTaskStore::with_tasks(vec![
            due_today.clone(),
            at_day_start.clone(),
            at_day_end.clone(),
            completed,
            due_yesterday,
            due_tomorrow,
        ]);
        let mut client = DashboardClient::new(&store);

        assert_eq!(
            client.tasks(NOW).await?,
            [due_today, at_day_start, at_day_end]
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_query_is_cached_until_invalidated() -> anyhow::Result<()> {
        let task = mock_task("call", datetime!(2026-01-15 12:00 UTC), TaskStatus::Pending);
        let store = MockTaskStore::with_tasks(vec![task]);
        let mut client = DashboardClient::new(&store);

        client.tasks(NOW).await?;
        client.tasks(NOW).await?;
        assert_eq!(store.list_queries.load(Ordering::SeqCst), 1);

        // A cancelled edit doesn't invalidate anything either.
        client.cancel_edit();
        client.tasks(NOW).await?;
        assert_eq!(store.list_queries.load(Ordering::SeqCst), 1);

        Ok(())
    }

    #[tokio::test]
    async fn create_invalidates_query_and_clears_input() -> anyhow::Result<()> {
        let store = MockTaskStore::default();
        let mut client = DashboardClient::new(&store);
        assert!(client.tasks(NOW).await?.is_empty());

        client.set_compose_input("  Call client about invoice  ");
        client.submit_new_task(NOW).await?;

        assert_eq!(client.compose_input(), "");
        assert!(!client.create_state().is_pending());
        assert!(client.create_state().error().is_none());

        let tasks = client.tasks(NOW).await?;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].kind, "Call client about invoice");
        assert_eq!(tasks[0].application_id, "N/A");
        assert_eq!(tasks[0].due_at, datetime!(2026-01-15 23:59:59.999 UTC));
        assert_eq!(tasks[0].status, TaskStatus::Pending);
        assert_eq!(store.list_queries.load(Ordering::SeqCst), 2);

        Ok(())
    }

    #[tokio::test]
    async fn blank_compose_input_is_a_noop() -> anyhow::Result<()> {
        let store = MockTaskStore::default();
        let mut client = DashboardClient::new(&store);

        client.set_compose_input("   ");
        client.submit_new_task(NOW).await?;

        assert!(store.tasks.lock().unwrap().is_empty());
        assert!(!client.create_state().is_pending());

        Ok(())
    }

    #[tokio::test]
    async fn edit_flow_replaces_kind_only() -> anyhow::Result<()> {
        let task = mock_task("call", datetime!(2026-01-15 12:00 UTC), TaskStatus::Pending);
        let store = MockTaskStore::with_tasks(vec![task.clone()]);
        let mut client = DashboardClient::new(&store);
        client.tasks(NOW).await?;

        // Editing an unknown task is rejected, editing a rendered one prefills the input.
        assert!(!client.start_edit(Uuid::new_v4()));
        assert!(client.start_edit(task.id));
        assert_eq!(client.edit().unwrap().input, "call");

        client.set_edit_input("Call client about invoice");
        client.save_edit().await?;

        assert!(client.edit().is_none());
        assert!(!client.update_state().is_pending());

        let tasks = client.tasks(NOW).await?;
        assert_eq!(tasks[0].kind, "Call client about invoice");
        assert_eq!(tasks[0].id, task.id);
        assert_eq!(tasks[0].due_at, task.due_at);

        Ok(())
    }

    #[tokio::test]
    async fn cancel_edit_skips_the_round_trip() -> anyhow::Result<()> {
        let task = mock_task("call", datetime!(2026-01-15 12:00 UTC), TaskStatus::Pending);
        let store = MockTaskStore::with_tasks(vec![task.clone()]);
        let mut client = DashboardClient::new(&store);
        client.tasks(NOW).await?;

        assert!(client.start_edit(task.id));
        client.set_edit_input("review");
        client.cancel_edit();
        assert!(client.edit().is_none());

        // Saving without an active edit is a no-op.
        client.save_edit().await?;
        assert_eq!(client.tasks(NOW).await?[0].kind, "call");

        Ok(())
    }

    #[tokio::test]
    async fn complete_drops_task_from_the_view() -> anyhow::Result<()> {
        let task = mock_task("call", datetime!(2026-01-15 12:00 UTC), TaskStatus::Pending);
        let store = MockTaskStore::with_tasks(vec![task.clone()]);
        let mut client = DashboardClient::new(&store);
        assert_eq!(client.tasks(NOW).await?.len(), 1);

        client.complete_task(task.id).await?;

        assert!(!client.complete_state().is_pending());
        assert!(client.tasks(NOW).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_task_permanently() -> anyhow::Result<()> {
        let task = mock_task("call", datetime!(2026-01-15 12:00 UTC), TaskStatus::Pending);
        let store = MockTaskStore::with_tasks(vec![task.clone()]);
        let mut client = DashboardClient::new(&store);
        assert_eq!(client.tasks(NOW).await?.len(), 1);

        client.delete_task(task.id).await?;

        assert!(!client.remove_state().is_pending());
        assert!(client.tasks(NOW).await?.is_empty());
        assert!(store.tasks.lock().unwrap().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn failed_mutation_leaves_rendered_state_untouched() -> anyhow::Result<()> {
        let task = mock_task("call", datetime!(2026-01-15 12:00 UTC), TaskStatus::Pending);
        let store = MockTaskStore::with_tasks(vec![task.clone()]);
        let mut client = DashboardClient::new(&store);
        assert_eq!(client.tasks(NOW).await?.len(), 1);

        store.fail_mutations();
        assert!(client.complete_task(task.id).await.is_err());

        // The error surfaces inline, but the cached list is still rendered as-is and no
        // re-fetch was triggered.
        assert_eq!(
            client.complete_state().error(),
            Some("store rejected the operation")
        );
        assert_eq!(client.tasks(NOW).await?.len(), 1);
        assert_eq!(store.list_queries.load(Ordering::SeqCst), 1);

        client.set_compose_input("email");
        assert!(client.submit_new_task(NOW).await.is_err());
        assert_eq!(
            client.create_state().error(),
            Some("store rejected the operation")
        );
        // The compose input isn't cleared on failure.
        assert_eq!(client.compose_input(), "email");

        Ok(())
    }
}
