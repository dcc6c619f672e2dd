use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use thiserror::Error;
use utoipa::ToSchema;

/// The closed set of reminder kinds accepted by the ingestion endpoint.
///
/// Only the ingestion contract is restricted to this set. The dashboard's manual-create path
/// stores arbitrary text in the same column, so the `Task` record itself carries a string.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// A reminder to call the applicant.
    Call,
    /// A reminder to email the applicant.
    Email,
    /// A reminder to review the application.
    Review,
}

impl TaskKind {
    /// Returns the kind as it is stored in the `type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Call => "call",
            TaskKind::Email => "email",
            TaskKind::Review => "review",
        }
    }
}

impl Display for TaskKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = ParseTaskKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "call" => Ok(TaskKind::Call),
            "email" => Ok(TaskKind::Email),
            "review" => Ok(TaskKind::Review),
            _ => Err(ParseTaskKindError),
        }
    }
}

/// An error returned when a string isn't a member of the closed task kind set.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("string isn't a valid task kind")]
pub struct ParseTaskKindError;
