use bingo_shared::{CompleteTaskRequest, CompleteTaskResponse, TaskDto};
use log::debug;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;

pub const TASKS_PATH: &str = "/tasks/";
pub const COMPLETE_TASK_PATH: &str = "/complete_task/";

pub async fn fetch_tasks(client: &ApiClient) -> Result<Vec<TaskDto>, ApiError> {
    debug!("Fetching tasks");

    let tasks = client.get_json::<Vec<TaskDto>>(TASKS_PATH).await?;

    debug!("Successfully fetched {} tasks", tasks.len());
    Ok(tasks)
}

pub async fn complete_task(client: &ApiClient, task_id: i64) -> Result<CompleteTaskResponse, ApiError> {
    debug!("Completing task {}", task_id);

    let response = client
        .post_json::<_, CompleteTaskResponse>(COMPLETE_TASK_PATH, &CompleteTaskRequest { task_id })
        .await?;

    debug!("Task {} completed: {}", task_id, response.message);
    Ok(response)
}
