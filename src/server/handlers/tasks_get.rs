use crate::{error::Error as TaskboardError, server::ServerState};
use actix_web::{get, web, HttpResponse};
use taskboard_types::tasks::Task;
use tracing::error;
use uuid::Uuid;

/// Gets a task with the specified ID.
#[utoipa::path(
    tags = ["tasks"],
    params(
        ("task_id" = Uuid, Path, description = "A unique task ID."),
    ),
    responses(
        (status = 200, description = "A task with the specified ID.", body = Task),
        (status = NOT_FOUND, description = "A task with the specified ID doesn't exist.")
    )
)]
#[get("/api/tasks/{task_id}")]
pub async fn tasks_get(
    state: web::Data<ServerState>,
    task_id: web::Path<Uuid>,
) -> Result<HttpResponse, TaskboardError> {
    match state.api.tasks().get_task(*task_id).await {
        Ok(Some(task)) => Ok(HttpResponse::Ok().json(task)),
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(err) => {
            error!("Failed to retrieve task: {err:?}");
            Err(err.into())
        }
    }
}
