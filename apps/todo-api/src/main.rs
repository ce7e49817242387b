//! # Todo API サーバー
//!
//! タスク（Todo）の一覧・作成・更新・削除を提供する HTTP API。
//!
//! ## 役割
//!
//! - **HTTP API**: `/api/todos` 配下の CRUD エンドポイント
//! - **データ永続化**: SQLite へのタスク保存
//!
//! リクエストごとにストアへ往復し、プロセス内にキャッシュや
//! セッション状態は持たない。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `3001`） |
//! | `DATABASE_URL` | No | SQLite 接続 URL（デフォルト: `sqlite:data/todos.db`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,todoapp=debug`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p todoapp-api
//!
//! # 本番環境
//! PORT=3001 DATABASE_URL=sqlite:/var/lib/todoapp/todos.db \
//!     LOG_FORMAT=json cargo run -p todoapp-api --release
//! ```

mod config;
mod error;
mod handler;
mod usecase;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use config::ApiConfig;
use handler::{TodoState, create_todo, delete_todo, health_check, list_todos, update_todo};
use todoapp_domain::clock::{Clock, SystemClock};
use todoapp_infra::{
    db,
    repository::{SqliteTodoRepository, TodoRepository},
};
use todoapp_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use usecase::TodoUseCaseImpl;

/// Todo API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    init_tracing(TracingConfig::from_env("todo-api"));

    // 設定読み込み
    let config = ApiConfig::from_env();

    tracing::info!(
        "Todo API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成し、マイグレーションを適用
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("データベース接続に失敗しました");
    db::run_migrations(&pool)
        .await
        .expect("マイグレーションの適用に失敗しました");
    tracing::info!("データベースに接続しました");

    // 依存コンポーネントを初期化
    let todo_repository = Arc::new(SqliteTodoRepository::new(pool)) as Arc<dyn TodoRepository>;
    let clock = Arc::new(SystemClock) as Arc<dyn Clock>;
    let usecase = TodoUseCaseImpl::new(todo_repository, clock);
    let state = Arc::new(TodoState { usecase });

    // ルーター構築
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            axum::routing::put(update_todo).delete(delete_todo),
        )
        .with_state(state)
        // すべてのオリジンからのクロスオリジンリクエストを許可する
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Todo API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
