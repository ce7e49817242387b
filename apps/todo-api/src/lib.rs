//! # Todo API ライブラリ
//!
//! Todo API のユースケースとハンドラを公開する。
//! 統合テストから内部モジュールへのアクセスを提供する。

pub mod error;
pub mod handler;
pub mod usecase;
