use taskboard_types::tasks::Task;

/// Identity of the dashboard list query the cached result is keyed under.
pub const TODAY_TASKS_QUERY: &str = "tasks-today";

/// Cached result of the "today's tasks" list query.
///
/// The cache starts out stale, gets filled by running the query, and is invalidated by every
/// successful mutation so that the next read re-runs the query against the store.
#[derive(Debug, Default, Clone)]
pub struct TodayQuery {
    cached: Option<Vec<Task>>,
}

impl TodayQuery {
    /// Returns `true` if the cached result must be re-fetched before use.
    pub fn is_stale(&self) -> bool {
        self.cached.is_none()
    }

    /// Replaces the cached result with a freshly fetched one.
    pub fn fill(&mut self, tasks: Vec<Task>) {
        self.cached = Some(tasks);
    }

    /// Drops the cached result so that the next read re-runs the query.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Returns the cached tasks, empty if the query has never been run.
    pub fn tasks(&self) -> &[Task] {
        self.cached.as_deref().unwrap_or_default()
    }
}
