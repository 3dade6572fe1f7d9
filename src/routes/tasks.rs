use crate::{
    error::AppError,
    models::{TaskInput, TaskUpdate},
    tasks::TaskService,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;

/// Lists all tasks owned by the user in the path.
///
/// ## Responses:
/// - `200 OK`: JSON array of task records, in storage order.
/// - `404 Not Found`: no user with that id.
#[get("/{user_id}")]
pub async fn get_tasks(
    service: web::Data<TaskService>,
    user_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let tasks = service.list(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a task owned by the user in the path.
///
/// The body carries `title` and `description`; the task always starts with
/// `completed = false`.
///
/// ## Responses:
/// - `200 OK`: the persisted task record, including its assigned id.
/// - `404 Not Found`: no user with that id.
#[post("/{user_id}")]
pub async fn create_task(
    service: web::Data<TaskService>,
    user_id: web::Path<i64>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    let task = service.create(user_id.into_inner(), &task_data).await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Updates the task in the path wholesale.
///
/// This is not a patch: `title`, `description`, and `completed` are
/// overwritten with the body's values, with absent fields falling back to
/// their defaults. The task's owner is never changed.
///
/// ## Responses:
/// - `200 OK`: the updated task record.
/// - `404 Not Found`: no task with that id.
#[put("/{task_id}")]
pub async fn update_task(
    service: web::Data<TaskService>,
    task_id: web::Path<i64>,
    task_data: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    let task = service.update(task_id.into_inner(), &task_data).await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Deletes the task in the path.
///
/// ## Responses:
/// - `200 OK`: `{"message": "Task deleted successfully"}`.
/// - `404 Not Found`: no task with that id (a second delete of the same id
///   lands here).
#[delete("/{task_id}")]
pub async fn delete_task(
    service: web::Data<TaskService>,
    task_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    service.delete(task_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task deleted successfully"
    })))
}
