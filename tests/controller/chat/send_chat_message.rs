use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::EntityTrait;
use velvet::{
    model::chat::SendMessageDto,
    server::{controller::chat::send_chat_message, model::session::user::SessionUserId},
};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 201 created, a stored message and a realtime event on the chat topic
async fn returns_created_and_publishes_message() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let ada = test.user().insert_user("ada@example.com").await?;
    let eve = test.user().insert_user("eve@example.com").await?;
    let chat = test.chat().insert_direct_chat(ada.id, eve.id).await?;
    let publish = test
        .integrations()
        .publish_endpoint(&format!("chat:{}", chat.id), 1);

    SessionUserId::insert(&test.session, ada.id).await.unwrap();

    let result = send_chat_message(
        State(test.state()),
        test.session,
        Path(chat.id),
        Json(SendMessageDto {
            body: "Still on for tonight?".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let messages = entity::prelude::ChatMessage::find()
        .all(&test.state.db)
        .await?;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender_id, ada.id);

    publish.assert();

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a sender outside the chat
async fn returns_not_found_for_outsider() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let ada = test.user().insert_user("ada@example.com").await?;
    let eve = test.user().insert_user("eve@example.com").await?;
    let mallory = test.user().insert_user("mallory@example.com").await?;
    let chat = test.chat().insert_direct_chat(ada.id, eve.id).await?;

    SessionUserId::insert(&test.session, mallory.id)
        .await
        .unwrap();

    let result = send_chat_message(
        State(test.state()),
        test.session,
        Path(chat.id),
        Json(SendMessageDto {
            body: "Let me in".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for an empty message body
async fn returns_bad_request_for_empty_body() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let ada = test.user().insert_user("ada@example.com").await?;
    let eve = test.user().insert_user("eve@example.com").await?;
    let chat = test.chat().insert_direct_chat(ada.id, eve.id).await?;

    SessionUserId::insert(&test.session, ada.id).await.unwrap();

    let result = send_chat_message(
        State(test.state()),
        test.session,
        Path(chat.id),
        Json(SendMessageDto {
            body: String::new(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
