//! Task CRUD, resolving ownership through the user store.

use crate::error::AppError;
use crate::models::{Task, TaskInput, TaskUpdate};
use crate::store::{TaskStore, UserStore};

/// Orchestrates task CRUD against the task store.
///
/// Listing and creation resolve the owner through the user store first, so a
/// missing user surfaces as a typed `UserNotFound` on both paths. Update and
/// delete are keyed by task id alone and do not consult the owner.
pub struct TaskService {
    users: UserStore,
    tasks: TaskStore,
}

impl TaskService {
    pub fn new(users: UserStore, tasks: TaskStore) -> Self {
        Self { users, tasks }
    }

    /// All tasks owned by the given user, in storage order.
    pub async fn list(&self, user_id: i64) -> Result<Vec<Task>, AppError> {
        self.resolve_user(user_id).await?;
        Ok(self.tasks.for_user(user_id).await?)
    }

    /// Creates a task owned by the given user. New tasks always start with
    /// `completed = false`, whatever the caller sends.
    pub async fn create(&self, user_id: i64, input: &TaskInput) -> Result<Task, AppError> {
        self.resolve_user(user_id).await?;
        Ok(self
            .tasks
            .insert(user_id, &input.title, input.description.as_deref())
            .await?)
    }

    /// Overwrites the task's title, description, and completed flag
    /// unconditionally and returns the updated record. Ownership is neither
    /// re-verified nor changed.
    pub async fn update(&self, task_id: i64, update: &TaskUpdate) -> Result<Task, AppError> {
        self.tasks
            .update(
                task_id,
                &update.title,
                update.description.as_deref(),
                update.completed,
            )
            .await?
            .ok_or(AppError::TaskNotFound)
    }

    /// Removes the task with the given id.
    pub async fn delete(&self, task_id: i64) -> Result<(), AppError> {
        let deleted = self.tasks.delete(task_id).await?;
        if deleted == 0 {
            return Err(AppError::TaskNotFound);
        }
        Ok(())
    }

    async fn resolve_user(&self, user_id: i64) -> Result<(), AppError> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or(AppError::UserNotFound)
    }
}
