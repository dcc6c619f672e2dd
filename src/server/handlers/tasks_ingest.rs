use crate::{error::Error as TaskboardError, server::ServerState};
use actix_web::{web, HttpResponse};
use anyhow::anyhow;
use taskboard_types::tasks::{TaskIngestParams, TaskIngestResult};
use tracing::error;

/// Validates a task-creation request submitted by an external caller and inserts the task.
#[utoipa::path(
    post,
    path = "/ingest",
    tags = ["tasks"],
    request_body = TaskIngestParams,
    responses(
        (status = 200, description = "Task was successfully ingested.", body = TaskIngestResult),
        (status = BAD_REQUEST, description = "Cannot ingest a task with the specified properties."),
        (status = METHOD_NOT_ALLOWED, description = "The request used a method other than `POST`.")
    )
)]
pub async fn tasks_ingest(
    state: web::Data<ServerState>,
    body: web::Bytes,
) -> Result<HttpResponse, TaskboardError> {
    // The body is decoded inside the handler boundary: a body that doesn't decode at all is
    // reported as an internal fault rather than a validation failure.
    let params = match serde_json::from_slice::<TaskIngestParams>(&body) {
        Ok(params) => params,
        Err(err) => {
            error!("Failed to decode task ingest request body: {err:?}");
            return Err(TaskboardError::from(anyhow!(err)));
        }
    };

    match state.api.tasks().ingest_task(params).await {
        Ok(task) => Ok(HttpResponse::Ok().json(TaskIngestResult {
            success: true,
            task_id: task.id,
        })),
        Err(err) => {
            error!("Failed to ingest task: {err:?}");
            Err(err.into())
        }
    }
}

/// Rejects `/ingest` requests that use any method other than `POST`.
pub async fn tasks_ingest_unsupported_method() -> Result<HttpResponse, TaskboardError> {
    Err(TaskboardError::method_not_allowed())
}
