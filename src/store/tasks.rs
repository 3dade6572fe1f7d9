use crate::models::Task;
use sqlx::PgPool;

#[derive(Clone)]
pub struct TaskStore {
    pool: PgPool,
}

impl TaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All tasks owned by the given user, in storage order. No semantic
    /// ordering is promised to callers.
    pub async fn for_user(&self, user_id: i64) -> Result<Vec<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            "SELECT id, title, description, completed, user_id \
             FROM tasks WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Inserts a new, uncompleted task for the given owner and returns the
    /// persisted record including its assigned id.
    pub async fn insert(
        &self,
        user_id: i64,
        title: &str,
        description: Option<&str>,
    ) -> Result<Task, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (title, description, completed, user_id) \
             VALUES ($1, $2, FALSE, $3) \
             RETURNING id, title, description, completed, user_id",
        )
        .bind(title)
        .bind(description)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
    }

    /// Overwrites title, description, and completed for the given task.
    /// Returns `None` when no task has that id. The owner is left untouched.
    pub async fn update(
        &self,
        id: i64,
        title: &str,
        description: Option<&str>,
        completed: bool,
    ) -> Result<Option<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            "UPDATE tasks SET title = $1, description = $2, completed = $3 \
             WHERE id = $4 \
             RETURNING id, title, description, completed, user_id",
        )
        .bind(title)
        .bind(description)
        .bind(completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Deletes the task with the given id, returning the number of rows
    /// removed (0 when the id does not exist).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
