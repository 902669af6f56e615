use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use velvet::{
    model::live::UpsertLiveStreamPageDto,
    server::{controller::live::upsert_live_page, model::session::user::SessionUserId},
};
use velvet_test_utils::prelude::*;

fn channel() -> UpsertLiveStreamPageDto {
    UpsertLiveStreamPageDto {
        title: "Night lounge".to_string(),
        description: "Live sets every Friday.".to_string(),
    }
}

#[tokio::test]
/// Expect 201 created the first time a user submits a channel page
async fn returns_created_for_first_page() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("mara@example.com").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = upsert_live_page(State(test.state()), test.session.clone(), Json(channel())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let stored = entity::prelude::LiveStreamPage::find()
        .filter(entity::live_stream_page::Column::OwnerId.eq(user.id))
        .one(&test.state.db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 200 ok and the stored page replaced on a second submit
async fn returns_success_for_existing_page() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("mara@example.com").await?;
    let page = test.live().insert_page(user.id).await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = upsert_live_page(State(test.state()), test.session.clone(), Json(channel())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated = entity::prelude::LiveStreamPage::find_by_id(page.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(updated.title, "Night lounge");

    Ok(())
}
