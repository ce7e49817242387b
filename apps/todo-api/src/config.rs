//! # Todo API 設定
//!
//! 環境変数から Todo API サーバーの設定を読み込む。

use std::env;

/// Todo API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// データベース接続 URL
    pub database_url: String,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    ///
    /// すべての変数にデフォルト値があるため、未設定でも起動できる。
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .expect("PORT は有効なポート番号である必要があります"),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:data/todos.db".to_string()),
        }
    }
}
