//! # タスク（Todo）
//!
//! 単一のタスクレコードを表現するドメインモデル。
//!
//! ## ID の採番
//!
//! `TodoId` はストア（SQLite の `INTEGER PRIMARY KEY AUTOINCREMENT`）が
//! 挿入時に採番する。UUID をクライアント側で生成する方式と異なり、
//! 挿入前のエンティティは ID を持たないため、挿入入力は [`NewTodo`] として
//! 分離する。
//!
//! ## 使用例
//!
//! ```rust
//! use todoapp_domain::todo::{NewTodo, Todo, TodoId, TodoTitle};
//!
//! let title = TodoTitle::new("  牛乳を買う  ");
//! assert_eq!(title.as_str(), "牛乳を買う");
//!
//! let new_todo = NewTodo::new(title, chrono::Utc::now());
//! assert!(!new_todo.completed);
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// タスクの一意識別子
///
/// ストアが採番する正の整数をラップする。採番後は不変で、再利用されない。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Serialize, Deserialize,
    derive_more::Display,
)]
#[display("{_0}")]
pub struct TodoId(i64);

impl TodoId {
    /// ストアが採番した値から ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

// =========================================================================
// TodoTitle（タスク名）
// =========================================================================

/// タスク名（値オブジェクト）
///
/// 構築時に前後の空白をトリミングする。存在と型のチェックは HTTP 境界で
/// 行われるため、トリミング後に空になる値もここでは受け入れる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// 前後の空白を取り除いたタスク名を作成する
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// Todo（タスクエンティティ）
// =========================================================================

/// 挿入前のタスク
///
/// ID はストアが採番するため持たない。リポジトリの挿入メソッドが
/// このデータを受け取り、採番された [`TodoId`] を返す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title:      TodoTitle,
    pub completed:  bool,
    pub created_at: DateTime<Utc>,
}

impl NewTodo {
    /// 新規作成の既定値（`completed = false`）でタスクを組み立てる
    pub fn new(title: TodoTitle, now: DateTime<Utc>) -> Self {
        Self {
            title,
            completed: false,
            created_at: now,
        }
    }
}

/// タスクエンティティ
///
/// # 不変条件
///
/// - `id` は採番後に変更されない
/// - `created_at` は作成時に一度だけ設定される
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:         TodoId,
    title:      TodoTitle,
    completed:  bool,
    created_at: DateTime<Utc>,
}

impl Todo {
    /// データベースからタスクを復元する
    pub fn from_db(
        id: TodoId,
        title: TodoTitle,
        completed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            completed,
            created_at,
        }
    }

    /// 部分更新をマージした新インスタンスを返す
    ///
    /// `None` のフィールドは現在の値を保持する。`id` と `created_at` は
    /// 常に引き継がれる。
    pub fn merge(&self, title: Option<TodoTitle>, completed: Option<bool>) -> Self {
        Self {
            id:         self.id,
            title:      title.unwrap_or_else(|| self.title.clone()),
            completed:  completed.unwrap_or(self.completed),
            created_at: self.created_at,
        }
    }

    // --- ゲッター ---

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// タイムスタンプの永続化・API 表現（ISO 8601、ミリ秒精度、`Z` 付き）
///
/// 例: `2023-11-14T22:13:20.000Z`
pub fn to_iso8601(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
