use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Parameters for manually composing a task from the dashboard.
///
/// Unlike the ingestion contract, the kind text isn't restricted to the closed `TaskKind` set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct TaskCreateParams {
    /// Free-form kind text of the task.
    #[serde(rename = "type")]
    pub kind: String,
    /// The time the task is due. Defaults to the end of the current day.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub due_at: Option<OffsetDateTime>,
    /// Id of the application record the task belongs to, when composed from an application
    /// context.
    #[serde(default)]
    pub application_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use crate::tasks::TaskCreateParams;
    use time::macros::datetime;

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::from_str::<TaskCreateParams>(r#"{ "type": "Call client about invoice" }"#)?,
            TaskCreateParams {
                kind: "Call client about invoice".to_string(),
                due_at: None,
                application_id: None,
            }
        );

        assert_eq!(
            serde_json::from_str::<TaskCreateParams>(
                r#"
        {
            "type": "review",
            "due_at": "2026-01-15T23:59:59.999Z",
            "application_id": "app-00000001"
        }
                  "#
            )?,
            TaskCreateParams {
                kind: "review".to_string(),
                due_at: Some(datetime!(2026-01-15 23:59:59.999 UTC)),
                application_id: Some("app-00000001".to_string()),
            }
        );

        Ok(())
    }
}
