use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::EntityTrait;
use velvet::{
    model::chat::OpenChatDto,
    server::{controller::chat::open_chat, model::session::user::SessionUserId},
};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 201 created for the first chat between a pair
async fn returns_created_for_new_chat() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let ada = test.user().insert_user("ada@example.com").await?;
    let eve = test.user().insert_user("eve@example.com").await?;

    SessionUserId::insert(&test.session, ada.id).await.unwrap();

    let result = open_chat(
        State(test.state()),
        test.session.clone(),
        Json(OpenChatDto { recipient_id: eve.id }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let chats = entity::prelude::Chat::find().all(&test.state.db).await?;
    assert_eq!(chats.len(), 1);

    Ok(())
}

#[tokio::test]
/// Expect 200 ok and no second row when the pair already has a chat
async fn returns_success_for_existing_chat() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let ada = test.user().insert_user("ada@example.com").await?;
    let eve = test.user().insert_user("eve@example.com").await?;
    test.chat().insert_direct_chat(ada.id, eve.id).await?;

    SessionUserId::insert(&test.session, ada.id).await.unwrap();

    let result = open_chat(
        State(test.state()),
        test.session.clone(),
        Json(OpenChatDto { recipient_id: eve.id }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let chats = entity::prelude::Chat::find().all(&test.state.db).await?;
    assert_eq!(chats.len(), 1);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when a user opens a chat with themselves
async fn returns_bad_request_for_self_chat() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let ada = test.user().insert_user("ada@example.com").await?;

    SessionUserId::insert(&test.session, ada.id).await.unwrap();

    let result = open_chat(
        State(test.state()),
        test.session.clone(),
        Json(OpenChatDto { recipient_id: ada.id }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a recipient that does not exist
async fn returns_not_found_for_unknown_recipient() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let ada = test.user().insert_user("ada@example.com").await?;

    SessionUserId::insert(&test.session, ada.id).await.unwrap();

    let result = open_chat(
        State(test.state()),
        test.session.clone(),
        Json(OpenChatDto { recipient_id: 999 }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
