//! # Todo API エラー定義
//!
//! Todo API で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `InvalidInput` | 400 Bad Request | 必須フィールドの欠落、型不一致 |
//! | `NotFound` | 404 Not Found | 指定 ID のタスクが存在しない |
//! | `Database` / `Internal` | 500 Internal Server Error | ストア障害など |
//!
//! レスポンスボディは `{"message": "..."}` の単純な形式とし、
//! HTTP ステータス以外の構造化エラーコードは持たない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// エラーレスポンスボディ
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Todo API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 不正なリクエスト
    #[error("不正なリクエスト: {0}")]
    InvalidInput(String),

    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] todoapp_infra::InfraError),

    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Database(e) => {
                tracing::error!("データベースエラー: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "内部エラーが発生しました".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("内部エラー: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "内部エラーが発生しました".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_inputは400に変換される() {
        let response = ApiError::InvalidInput("title は必須です".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_foundは404に変換される() {
        let response = ApiError::NotFound("タスクが見つかりません".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internalは500に変換される() {
        let response = ApiError::Internal("想定外の状態".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
