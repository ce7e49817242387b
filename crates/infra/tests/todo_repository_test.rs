//! SqliteTodoRepository の統合テスト
//!
//! インメモリ SQLite（`sqlite::memory:`）に対して実際の SQL を実行する。
//! インメモリ DB はコネクションごとに独立するため、プールは
//! `max_connections(1)` で作成する。

use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use todoapp_domain::todo::{NewTodo, Todo, TodoId, TodoTitle};
use todoapp_infra::{
    db,
    repository::{SqliteTodoRepository, TodoRepository},
};

/// テスト用の固定日時
fn test_now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

/// マイグレーション適用済みのインメモリ DB プールを作成する
async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("インメモリ DB への接続に失敗");
    db::run_migrations(&pool).await.expect("マイグレーション適用に失敗");
    pool
}

fn new_todo(title: &str) -> NewTodo {
    NewTodo::new(TodoTitle::new(title), test_now())
}

#[tokio::test]
async fn test_insertは単調増加のidを採番する() {
    let sut = SqliteTodoRepository::new(setup_pool().await);

    let first = sut.insert(&new_todo("first")).await.unwrap();
    let second = sut.insert(&new_todo("second")).await.unwrap();

    assert!(second > first);
}

#[tokio::test]
async fn test_insertしたタスクをfind_by_idで取得できる() {
    let sut = SqliteTodoRepository::new(setup_pool().await);

    let id = sut.insert(&new_todo("牛乳を買う")).await.unwrap();
    let found = sut.find_by_id(id).await.unwrap().expect("挿入した行が存在すること");

    assert_eq!(found.id(), id);
    assert_eq!(found.title().as_str(), "牛乳を買う");
    assert!(!found.completed());
    assert_eq!(found.created_at(), test_now());
}

#[tokio::test]
async fn test_created_atはミリ秒精度で往復する() {
    let sut = SqliteTodoRepository::new(setup_pool().await);
    let at = DateTime::from_timestamp(1_700_000_000, 123_000_000).unwrap();

    let id = sut
        .insert(&NewTodo::new(TodoTitle::new("timestamp"), at))
        .await
        .unwrap();
    let found = sut.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(found.created_at(), at);
}

#[tokio::test]
async fn test_find_allはidの降順で返す() {
    let sut = SqliteTodoRepository::new(setup_pool().await);

    let a = sut.insert(&new_todo("A")).await.unwrap();
    let b = sut.insert(&new_todo("B")).await.unwrap();
    let c = sut.insert(&new_todo("C")).await.unwrap();

    let todos = sut.find_all().await.unwrap();

    let ids: Vec<TodoId> = todos.iter().map(Todo::id).collect();
    assert_eq!(ids, vec![c, b, a]);
}

#[tokio::test]
async fn test_find_allは空のとき空のベクタを返す() {
    let sut = SqliteTodoRepository::new(setup_pool().await);

    let todos = sut.find_all().await.unwrap();

    assert!(todos.is_empty());
}

#[tokio::test]
async fn test_find_by_idは存在しないidでnoneを返す() {
    let sut = SqliteTodoRepository::new(setup_pool().await);

    let found = sut.find_by_id(TodoId::from_i64(999)).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_updateはtitleとcompletedを反映しcreated_atを保持する() {
    let sut = SqliteTodoRepository::new(setup_pool().await);
    let id = sut.insert(&new_todo("before")).await.unwrap();
    let stored = sut.find_by_id(id).await.unwrap().unwrap();

    let merged = stored.merge(Some(TodoTitle::new("after")), Some(true));
    sut.update(&merged).await.unwrap();

    let found = sut.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.title().as_str(), "after");
    assert!(found.completed());
    assert_eq!(found.created_at(), test_now());
}

#[tokio::test]
async fn test_deleteで行が削除される() {
    let sut = SqliteTodoRepository::new(setup_pool().await);
    let id = sut.insert(&new_todo("to delete")).await.unwrap();

    sut.delete(id).await.unwrap();

    assert!(sut.find_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_deleteは存在しないidでも成功する() {
    let sut = SqliteTodoRepository::new(setup_pool().await);

    let result = sut.delete(TodoId::from_i64(999)).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_削除後もidは再利用されない() {
    let sut = SqliteTodoRepository::new(setup_pool().await);
    let first = sut.insert(&new_todo("first")).await.unwrap();
    sut.delete(first).await.unwrap();

    let second = sut.insert(&new_todo("second")).await.unwrap();

    // AUTOINCREMENT により削除済みの最大 id より大きい値が採番される
    assert!(second > first);
}
