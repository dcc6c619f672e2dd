use crate::{database::Database, error::Error as TaskboardError, server::ServerState};
use actix_web::{get, web, HttpResponse};
use taskboard_types::tasks::Task;
use tracing::error;

/// Gets a list of tasks that are due today and not yet completed.
#[utoipa::path(
    tags = ["tasks"],
    responses(
        (status = 200, description = "A list of tasks that are due today and still pending.", body = [Task])
    )
)]
#[get("/api/tasks")]
pub async fn tasks_list(state: web::Data<ServerState>) -> Result<HttpResponse, TaskboardError> {
    match state.api.tasks().list_due_today(Database::utc_now()?).await {
        Ok(tasks) => Ok(HttpResponse::Ok().json(tasks)),
        Err(err) => {
            error!("Failed to retrieve tasks: {err:?}");
            Err(err.into())
        }
    }
}
