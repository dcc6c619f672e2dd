mod api_ext;
mod database_ext;

pub use self::{
    api_ext::{day_bounds, TasksApiExt, MAX_TASK_KIND_LENGTH, UNASSIGNED_APPLICATION_ID},
    database_ext::TasksDatabaseExt,
};
