//! # TodoRepository
//!
//! タスクの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID はストア採番**: 挿入は [`NewTodo`] を受け取り、
//!   `last_insert_rowid()` で採番された ID を返す
//! - **タイムスタンプはテキスト保存**: `created_at` は ISO 8601
//!   （ミリ秒精度、UTC）の文字列として格納し、読み出し時にパースする

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use todoapp_domain::todo::{self, NewTodo, Todo, TodoId, TodoTitle};

use crate::error::InfraError;

/// タスクリポジトリトレイト
///
/// タスクの CRUD 操作を定義する。
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 全タスクを id の降順（作成の新しい順）で取得する
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID でタスクを検索する
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

    /// タスクを挿入し、採番された ID を返す
    async fn insert(&self, new_todo: &NewTodo) -> Result<TodoId, InfraError>;

    /// タスクを更新する（`title` と `completed` を反映）
    async fn update(&self, todo: &Todo) -> Result<(), InfraError>;

    /// タスクを削除する
    ///
    /// 該当行が存在しなくてもエラーにはならない（冪等）。
    async fn delete(&self, id: TodoId) -> Result<(), InfraError>;
}

/// DB 行とドメインエンティティの中間表現
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id:         i64,
    title:      String,
    completed:  bool,
    created_at: String,
}

impl TodoRow {
    /// 行をエンティティに復元する
    ///
    /// `created_at` がパースできない場合は `Corrupt` エラーを返す。
    fn into_todo(self) -> Result<Todo, InfraError> {
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| {
                InfraError::corrupt(format!(
                    "created_at のパースに失敗しました (id={}): {e}",
                    self.id
                ))
            })?
            .with_timezone(&Utc);

        Ok(Todo::from_db(
            TodoId::from_i64(self.id),
            TodoTitle::new(self.title),
            self.completed,
            created_at,
        ))
    }
}

/// SQLite 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let rows: Vec<TodoRow> = sqlx::query_as(
            r#"
            SELECT id, title, completed, created_at
            FROM todos
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TodoRow::into_todo).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        let row: Option<TodoRow> = sqlx::query_as(
            r#"
            SELECT id, title, completed, created_at
            FROM todos
            WHERE id = ?1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(row.into_todo()?))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, new_todo: &NewTodo) -> Result<TodoId, InfraError> {
        let result = sqlx::query(
            r#"
            INSERT INTO todos (title, completed, created_at)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(new_todo.title.as_str())
        .bind(new_todo.completed)
        .bind(todo::to_iso8601(new_todo.created_at))
        .execute(&self.pool)
        .await?;

        Ok(TodoId::from_i64(result.last_insert_rowid()))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %todo.id()))]
    async fn update(&self, todo: &Todo) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            UPDATE todos
            SET title = ?2, completed = ?3
            WHERE id = ?1
            "#,
        )
        .bind(todo.id().as_i64())
        .bind(todo.title().as_str())
        .bind(todo.completed())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: TodoId) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = ?1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
