use crate::{error::Error as TaskboardError, server::ServerState};
use actix_web::{delete, web, HttpResponse};
use tracing::error;
use uuid::Uuid;

/// Removes a task with the specified ID.
#[utoipa::path(
    tags = ["tasks"],
    params(
        ("task_id" = Uuid, Path, description = "A unique task ID."),
    ),
    responses(
        (status = NO_CONTENT, description = "Task with the specified ID was successfully removed.")
    )
)]
#[delete("/api/tasks/{task_id}")]
pub async fn tasks_remove(
    state: web::Data<ServerState>,
    task_id: web::Path<Uuid>,
) -> Result<HttpResponse, TaskboardError> {
    match state.api.tasks().remove_task(*task_id).await {
        Ok(_) => Ok(HttpResponse::NoContent().finish()),
        Err(err) => {
            error!("Failed to remove task: {err:?}");
            Err(err.into())
        }
    }
}
