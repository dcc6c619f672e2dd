use crate::{error::Error as TaskboardError, server::ServerState};
use actix_web::{post, web, HttpResponse};
use taskboard_types::tasks::{Task, TaskCreateParams};
use tracing::error;

/// Creates a new manually composed task with the specified parameters.
#[utoipa::path(
    tags = ["tasks"],
    request_body = TaskCreateParams,
    responses(
        (status = 201, description = "Task was successfully created.", body = Task),
        (status = BAD_REQUEST, description = "Cannot create a task with the specified properties.")
    )
)]
#[post("/api/tasks")]
pub async fn tasks_create(
    state: web::Data<ServerState>,
    params: web::Json<TaskCreateParams>,
) -> Result<HttpResponse, TaskboardError> {
    match state.api.tasks().create_task(params.into_inner()).await {
        Ok(task) => Ok(HttpResponse::Created().json(task)),
        Err(err) => {
            error!("Failed to create task: {err:?}");
            Err(err.into())
        }
    }
}
