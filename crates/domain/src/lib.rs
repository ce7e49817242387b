//! # TodoApp ドメイン層
//!
//! タスク（Todo）エンティティと、その生成・更新ルールを定義する。
//!
//! ## 設計方針
//!
//! - **永続化非依存**: このクレートは sqlx や axum に依存しない
//! - **不変更新**: エンティティの更新メソッドは新しいインスタンスを返す
//! - **時刻の注入**: `Utc::now()` を直接呼ばず [`clock::Clock`] 経由で取得する

pub mod clock;
pub mod todo;

pub use todo::{NewTodo, Todo, TodoId, TodoTitle};
