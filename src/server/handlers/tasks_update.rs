use crate::{error::Error as TaskboardError, server::ServerState};
use actix_web::{put, web, HttpResponse};
use taskboard_types::tasks::{Task, TaskUpdateParams};
use tracing::error;
use uuid::Uuid;

/// Updates the kind text of an existing task. No other task property is mutable.
#[utoipa::path(
    tags = ["tasks"],
    params(
        ("task_id" = Uuid, Path, description = "A unique task ID."),
    ),
    request_body = TaskUpdateParams,
    responses(
        (status = 200, description = "Task was successfully updated.", body = Task),
        (status = BAD_REQUEST, description = "Cannot update a task with the specified properties.")
    )
)]
#[put("/api/tasks/{task_id}")]
pub async fn tasks_update(
    state: web::Data<ServerState>,
    task_id: web::Path<Uuid>,
    params: web::Json<TaskUpdateParams>,
) -> Result<HttpResponse, TaskboardError> {
    match state
        .api
        .tasks()
        .update_task(*task_id, params.into_inner())
        .await
    {
        Ok(task) => Ok(HttpResponse::Ok().json(task)),
        Err(err) => {
            error!("Failed to update task: {err:?}");
            Err(err.into())
        }
    }
}
