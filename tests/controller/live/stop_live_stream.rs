use axum::{extract::State, http::StatusCode, response::IntoResponse};
use velvet::server::{controller::live::stop_live_stream, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok with the broadcast closed in the database
async fn returns_success_and_ends_stream() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let owner = test.user().insert_user("mara@example.com").await?;
    let page = test.live().insert_page(owner.id).await?;
    let stream = test.live().insert_stream(page.id, "open-room").await?;

    SessionUserId::insert(&test.session, owner.id).await.unwrap();

    let result = stop_live_stream(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let ended = test.live().get_stream(stream.id).await?;
    assert!(ended.ended_at.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when the channel has no running broadcast
async fn returns_conflict_when_not_live() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let owner = test.user().insert_user("mara@example.com").await?;
    test.live().insert_page(owner.id).await?;

    SessionUserId::insert(&test.session, owner.id).await.unwrap();

    let result = stop_live_stream(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
