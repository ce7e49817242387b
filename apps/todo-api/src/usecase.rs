//! # ユースケース
//!
//! ハンドラから呼び出されるアプリケーションロジックを定義する。
//! ハンドラは薄く保ち、トリミング・マージ・再取得の流れはここに置く。

pub mod todo;

pub use todo::{TodoUseCaseImpl, UpdateTodoInput};
