use axum::{extract::State, http::StatusCode, response::IntoResponse};
use velvet::server::{controller::live::list_live_now, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok with running broadcasts listed
async fn returns_success_with_live_streams() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let owner = test.user().insert_user("mara@example.com").await?;
    let viewer = test.user().insert_user("noah@example.com").await?;
    let page = test.live().insert_page(owner.id).await?;
    test.live().insert_stream(page.id, "open-room").await?;

    SessionUserId::insert(&test.session, viewer.id).await.unwrap();

    let result = list_live_now(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when no user is logged in
async fn returns_not_found_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_marketplace_tables!()?;

    let result = list_live_now(State(test.state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
