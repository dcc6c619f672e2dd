use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// The receipt returned for a successfully ingested task.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, ToSchema)]
pub struct TaskIngestResult {
    /// Always `true`; failures are reported through the error object instead.
    pub success: bool,
    /// Id the store assigned to the newly inserted task.
    pub task_id: Uuid,
}

#[cfg(test)]
mod tests {
    use crate::tasks::TaskIngestResult;
    use insta::assert_json_snapshot;
    use uuid::uuid;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        assert_json_snapshot!(TaskIngestResult {
            success: true,
            task_id: uuid!("00000000-0000-0000-0000-000000000001"),
        }, @r###"
        {
          "success": true,
          "task_id": "00000000-0000-0000-0000-000000000001"
        }
        "###);

        Ok(())
    }
}
