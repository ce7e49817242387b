//! タスク管理ユースケース

use std::sync::Arc;

use todoapp_domain::{
    clock::Clock,
    todo::{NewTodo, Todo, TodoId, TodoTitle},
};
use todoapp_infra::repository::TodoRepository;

use crate::error::ApiError;

/// タスク更新の入力
///
/// - `title`: 変更なしは `None`
/// - `completed`: 変更なしは `None`
pub struct UpdateTodoInput {
    pub id:        TodoId,
    pub title:     Option<String>,
    pub completed: Option<bool>,
}

/// タスク管理ユースケース
pub struct TodoUseCaseImpl {
    todo_repository: Arc<dyn TodoRepository>,
    clock: Arc<dyn Clock>,
}

impl TodoUseCaseImpl {
    pub fn new(todo_repository: Arc<dyn TodoRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            todo_repository,
            clock,
        }
    }

    /// タスク一覧を取得する（作成の新しい順）
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let todos = self.todo_repository.find_all().await?;
        Ok(todos)
    }

    /// タスクを作成する
    ///
    /// 1. タイトルをトリミング
    /// 2. `completed = false`、`created_at` = 現在時刻で挿入
    /// 3. 採番された ID で再取得して返す
    pub async fn create_todo(&self, title: String) -> Result<Todo, ApiError> {
        let new_todo = NewTodo::new(TodoTitle::new(title), self.clock.now());

        let id = self.todo_repository.insert(&new_todo).await?;

        let todo = self.todo_repository.find_by_id(id).await?.ok_or_else(|| {
            ApiError::Internal(format!("作成直後のタスクを再取得できません: id={id}"))
        })?;

        Ok(todo)
    }

    /// タスクを部分更新する
    ///
    /// 省略されたフィールドは既存の値を保持する。
    /// 指定 ID のタスクが存在しない場合は `NotFound` を返す。
    pub async fn update_todo(&self, input: UpdateTodoInput) -> Result<Todo, ApiError> {
        let existing = self
            .todo_repository
            .find_by_id(input.id)
            .await?
            .ok_or_else(|| ApiError::NotFound("タスクが見つかりません".to_string()))?;

        let merged = existing.merge(input.title.map(TodoTitle::new), input.completed);
        self.todo_repository.update(&merged).await?;

        let todo = self
            .todo_repository
            .find_by_id(input.id)
            .await?
            .ok_or_else(|| ApiError::NotFound("タスクが見つかりません".to_string()))?;

        Ok(todo)
    }

    /// タスクを削除する
    ///
    /// 存在確認は行わない。該当行が無くても成功として扱う（冪等）。
    pub async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError> {
        self.todo_repository.delete(id).await?;
        Ok(())
    }
}
