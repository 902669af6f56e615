use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use velvet::server::{controller::live::join_live_stream, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok with a viewer token minted by the SFU
async fn returns_success_for_live_stream() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let owner = test.user().insert_user("mara@example.com").await?;
    let viewer = test.user().insert_user("noah@example.com").await?;
    let page = test.live().insert_page(owner.id).await?;
    let stream = test.live().insert_stream(page.id, "open-room").await?;
    let issue_token = test.integrations().issue_token_endpoint("viewer-token", 1);

    SessionUserId::insert(&test.session, viewer.id).await.unwrap();

    let result = join_live_stream(State(test.state()), test.session.clone(), Path(stream.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    issue_token.assert();

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a broadcast that already ended
async fn returns_not_found_for_ended_stream() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let owner = test.user().insert_user("mara@example.com").await?;
    let viewer = test.user().insert_user("noah@example.com").await?;
    let page = test.live().insert_page(owner.id).await?;
    let stream = test.live().insert_stream(page.id, "closed-room").await?;
    test.live().end_stream(stream.id).await?;

    SessionUserId::insert(&test.session, viewer.id).await.unwrap();

    let result = join_live_stream(State(test.state()), test.session.clone(), Path(stream.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
