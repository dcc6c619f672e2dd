use crate::{error::Error as TaskboardError, server::ServerState};
use actix_web::{post, web, HttpResponse};
use tracing::error;
use uuid::Uuid;

/// Marks a task with the specified ID as completed.
#[utoipa::path(
    tags = ["tasks"],
    params(
        ("task_id" = Uuid, Path, description = "A unique task ID."),
    ),
    responses(
        (status = NO_CONTENT, description = "Task with the specified ID was successfully completed."),
        (status = BAD_REQUEST, description = "A task with the specified ID doesn't exist.")
    )
)]
#[post("/api/tasks/{task_id}/complete")]
pub async fn tasks_complete(
    state: web::Data<ServerState>,
    task_id: web::Path<Uuid>,
) -> Result<HttpResponse, TaskboardError> {
    match state.api.tasks().complete_task(*task_id).await {
        Ok(_) => Ok(HttpResponse::NoContent().finish()),
        Err(err) => {
            error!("Failed to complete task: {err:?}");
            Err(err.into())
        }
    }
}
