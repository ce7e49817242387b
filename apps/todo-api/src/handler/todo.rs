//! # タスクハンドラ
//!
//! タスク管理 API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/todos` - タスク一覧（作成の新しい順）
//! - `POST /api/todos` - タスク作成
//! - `PUT /api/todos/{id}` - タスク更新（部分更新）
//! - `DELETE /api/todos/{id}` - タスク削除（冪等）

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use todoapp_domain::todo::{self, Todo, TodoId};

use crate::{
    error::ApiError,
    usecase::todo::{TodoUseCaseImpl, UpdateTodoInput},
};

/// タスク API の共有状態
pub struct TodoState {
    pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// タスク作成リクエスト
///
/// `title` が欠落している、または文字列でないボディはデシリアライズに
/// 失敗し、ハンドラで 400 に変換される。
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
}

/// タスク更新リクエスト
///
/// 省略したフィールドは変更されない。
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title:     Option<String>,
    pub completed: Option<bool>,
}

/// タスク DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TodoDto {
    pub id:        i64,
    pub title:     String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl TodoDto {
    fn from_entity(entity: &Todo) -> Self {
        Self {
            id:        entity.id().as_i64(),
            title:     entity.title().as_str().to_string(),
            completed: entity.completed(),
            created_at: todo::to_iso8601(entity.created_at()),
        }
    }
}

// --- ハンドラ ---

/// GET /api/todos
///
/// タスク一覧を作成の新しい順（id 降順）で取得する。
///
/// ## レスポンス
///
/// - `200 OK`: タスク DTO の配列（存在しない場合は空配列）
/// - `500 Internal Server Error`: ストア障害
#[tracing::instrument(skip_all)]
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, ApiError> {
    let todos = state.usecase.list_todos().await?;

    let items: Vec<TodoDto> = todos.iter().map(TodoDto::from_entity).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// POST /api/todos
///
/// タスクを作成する。
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたタスク
/// - `400 Bad Request`: `title` の欠落・型不一致
/// - `500 Internal Server Error`: ストア障害
#[tracing::instrument(skip_all)]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) =
        payload.map_err(|_| ApiError::InvalidInput("title は必須です".to_string()))?;

    let created = state.usecase.create_todo(req.title).await?;

    Ok((StatusCode::CREATED, Json(TodoDto::from_entity(&created))))
}

/// PUT /api/todos/{id}
///
/// タスクを部分更新する。省略したフィールドは変更されない。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のタスク
/// - `400 Bad Request`: フィールドの型不一致
/// - `404 Not Found`: タスクが見つからない
/// - `500 Internal Server Error`: ストア障害
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) =
        payload.map_err(|_| ApiError::InvalidInput("リクエストボディが不正です".to_string()))?;

    let input = UpdateTodoInput {
        id:        TodoId::from_i64(id),
        title:     req.title,
        completed: req.completed,
    };

    let updated = state.usecase.update_todo(input).await?;

    Ok((StatusCode::OK, Json(TodoDto::from_entity(&updated))))
}

/// DELETE /api/todos/{id}
///
/// タスクを削除する。存在確認は行わず、該当行が無くても 204 を返す（冪等）。
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功（行が存在しなかった場合を含む）
/// - `500 Internal Server Error`: ストア障害
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.usecase.delete_todo(TodoId::from_i64(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
