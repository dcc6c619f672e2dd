mod task;
mod task_create_params;
mod task_ingest_params;
mod task_ingest_result;
mod task_kind;
mod task_status;
mod task_update_params;

pub use self::{
    task::Task,
    task_create_params::TaskCreateParams,
    task_ingest_params::TaskIngestParams,
    task_ingest_result::TaskIngestResult,
    task_kind::{ParseTaskKindError, TaskKind},
    task_status::{ParseTaskStatusError, TaskStatus},
    task_update_params::TaskUpdateParams,
};
