pub mod status_get;
pub mod tasks_complete;
pub mod tasks_create;
pub mod tasks_get;
pub mod tasks_ingest;
pub mod tasks_list;
pub mod tasks_remove;
pub mod tasks_update;

use crate::server::Status;
use taskboard_types::tasks::{
    Task, TaskCreateParams, TaskIngestParams, TaskIngestResult, TaskKind, TaskStatus,
    TaskUpdateParams,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Taskboard"),
    paths(
        status_get::status_get,
        tasks_list::tasks_list,
        tasks_get::tasks_get,
        tasks_create::tasks_create,
        tasks_ingest::tasks_ingest,
        tasks_update::tasks_update,
        tasks_complete::tasks_complete,
        tasks_remove::tasks_remove
    ),
    components(schemas(
        Status,
        Task,
        TaskCreateParams,
        TaskIngestParams,
        TaskIngestResult,
        TaskKind,
        TaskStatus,
        TaskUpdateParams
    ))
)]
pub(super) struct TaskboardOpenApi;
