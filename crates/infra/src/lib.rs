//! # TodoApp インフラ層
//!
//! SQLite への永続化を担当する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: リポジトリトレイトを定義し、ユースケース層は
//!   トレイト経由でアクセスする
//! - **明示的な接続ハンドル**: 接続プールはプロセス起動時に一度だけ構築し、
//!   リポジトリに注入する（グローバルな接続状態を持たない）

pub mod db;
pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
