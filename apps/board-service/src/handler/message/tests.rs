use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request},
    routing::get,
};
use fusen_domain::message::{MessageContent, TopicId};
use fusen_infra::mock::MockMessageRepository;
use tower::ServiceExt;

use super::*;

fn create_test_app(repo: MockMessageRepository) -> Router {
    let usecase = MessageUseCaseImpl::new(Arc::new(repo));
    let state = Arc::new(MessageState { usecase });

    Router::new()
        .route(
            "/api/v1.0/messages",
            get(list_messages).post(create_message).put(update_message),
        )
        .route(
            "/api/v1.0/messages/{id}",
            get(get_message).delete(delete_message),
        )
        .with_state(state)
}

fn stored_message(id: i64, topic_id: i64, content: &str) -> Message {
    Message::from_db(
        MessageId::from_i64(id),
        TopicId::from_i64(topic_id),
        MessageContent::new(content).unwrap(),
    )
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

// テストケース

#[tokio::test]
async fn test_list_messages_一覧をid昇順で返す() {
    // Given
    let repo = MockMessageRepository::new();
    repo.add_message(stored_message(2, 1, "2件目"));
    repo.add_message(stored_message(1, 1, "1件目"));
    let sut = create_test_app(repo);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/v1.0/messages")
        .body(Body::empty())
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"][0]["id"], 1);
    assert_eq!(json["data"][1]["id"], 2);
}

#[tokio::test]
async fn test_list_messages_0件で空配列を返す() {
    // Given
    let sut = create_test_app(MockMessageRepository::new());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/v1.0/messages")
        .body(Body::empty())
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_get_message_取得できる() {
    // Given
    let repo = MockMessageRepository::new();
    repo.add_message(stored_message(1, 3, "こんにちは"));
    let sut = create_test_app(repo);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/v1.0/messages/1")
        .body(Body::empty())
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["data"]["id"], 1);
    assert_eq!(json["data"]["topic_id"], 3);
    assert_eq!(json["data"]["content"], "こんにちは");
}

#[tokio::test]
async fn test_get_message_存在しないidで404() {
    // Given
    let sut = create_test_app(MockMessageRepository::new());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/v1.0/messages/99")
        .body(Body::empty())
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = response_json(response).await;
    assert!(
        json["type"]
            .as_str()
            .unwrap()
            .ends_with("/message-not-found")
    );
    assert!(json["detail"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn test_create_message_201と採番されたidを返す() {
    // Given
    let repo = MockMessageRepository::new();
    let sut = create_test_app(repo.clone());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1.0/messages")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"topic_id": 1, "content": "こんにちは"}"#))
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = response_json(response).await;
    assert_eq!(json["data"]["id"], 1);
    assert_eq!(json["data"]["content"], "こんにちは");
    assert_eq!(repo.stored_count(), 1);
}

#[tokio::test]
async fn test_create_message_空本文で400とrequired違反() {
    // Given
    let repo = MockMessageRepository::new();
    let sut = create_test_app(repo.clone());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1.0/messages")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"topic_id": 1, "content": ""}"#))
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then: 違反は 1 件だけで、ストレージには何も書かれない
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    let violations = json["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["field"], "content");
    assert_eq!(violations[0]["code"], "required");
    assert_eq!(repo.stored_count(), 0);
}

#[tokio::test]
async fn test_create_message_空ボディで全違反をまとめて返す() {
    // Given
    let sut = create_test_app(MockMessageRepository::new());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1.0/messages")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then: topic_id と content の違反が 1 回のレスポンスに揃う
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["violations"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_message_更新後のメッセージを返す() {
    // Given
    let repo = MockMessageRepository::new();
    repo.add_message(stored_message(1, 1, "変更前"));
    let sut = create_test_app(repo);

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/v1.0/messages")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"id": 1, "topic_id": 1, "content": "変更後"}"#,
        ))
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["data"]["id"], 1);
    assert_eq!(json["data"]["content"], "変更後");
}

#[tokio::test]
async fn test_update_message_id欠落で400() {
    // Given
    let sut = create_test_app(MockMessageRepository::new());

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/v1.0/messages")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"topic_id": 1, "content": "更新内容"}"#))
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    let violations = json["violations"].as_array().unwrap();
    assert_eq!(violations[0]["field"], "id");
    assert_eq!(violations[0]["code"], "required");
}

#[tokio::test]
async fn test_update_message_存在しないidで404() {
    // Given
    let sut = create_test_app(MockMessageRepository::new());

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/v1.0/messages")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"id": 99, "topic_id": 1, "content": "更新内容"}"#,
        ))
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = response_json(response).await;
    assert!(
        json["type"]
            .as_str()
            .unwrap()
            .ends_with("/message-not-found")
    );
}

#[tokio::test]
async fn test_delete_message_204を返す() {
    // Given
    let repo = MockMessageRepository::new();
    repo.add_message(stored_message(1, 1, "削除対象"));
    let sut = create_test_app(repo.clone());

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/v1.0/messages/1")
        .body(Body::empty())
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(repo.stored_count(), 0);
}

#[tokio::test]
async fn test_delete_message_2回目は404() {
    // Given
    let repo = MockMessageRepository::new();
    repo.add_message(stored_message(1, 1, "削除対象"));
    let sut = create_test_app(repo);

    let first = Request::builder()
        .method(Method::DELETE)
        .uri("/api/v1.0/messages/1")
        .body(Body::empty())
        .unwrap();
    let second = Request::builder()
        .method(Method::DELETE)
        .uri("/api/v1.0/messages/1")
        .body(Body::empty())
        .unwrap();

    // When
    let first_response = sut.clone().oneshot(first).await.unwrap();
    let second_response = sut.oneshot(second).await.unwrap();

    // Then
    assert_eq!(first_response.status(), StatusCode::NO_CONTENT);
    assert_eq!(second_response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_dtoからエンティティを復元すると元に戻る() {
    // Given
    let original = stored_message(1, 3, "こんにちは");

    // When
    let dto = MessageDto::from(&original);
    let restored = Message::parse(
        MessageId::from_i64(dto.id),
        Some(dto.topic_id),
        &dto.content,
    )
    .unwrap();

    // Then
    assert_eq!(restored, original);
}
