use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use thiserror::Error;
use utoipa::ToSchema;

/// Completion status of a task. The only transition the system exposes is `pending` to
/// `completed`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// The task still awaits completion.
    #[default]
    Pending,
    /// The task has been completed and no longer shows up in the dashboard view.
    Completed,
}

impl TaskStatus {
    /// Returns the status as it is stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(ParseTaskStatusError),
        }
    }
}

/// An error returned when a string isn't a member of the task status set.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("string isn't a valid task status")]
pub struct ParseTaskStatusError;
