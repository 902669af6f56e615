use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use velvet::server::{controller::live::get_live_page, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok for an existing channel page
async fn returns_success_for_existing_page() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let owner = test.user().insert_user("mara@example.com").await?;
    let viewer = test.user().insert_user("noah@example.com").await?;
    let page = test.live().insert_page(owner.id).await?;

    SessionUserId::insert(&test.session, viewer.id).await.unwrap();

    let result = get_live_page(State(test.state()), test.session.clone(), Path(page.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for an unknown channel page
async fn returns_not_found_for_unknown_page() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let viewer = test.user().insert_user("noah@example.com").await?;

    SessionUserId::insert(&test.session, viewer.id).await.unwrap();

    let result = get_live_page(State(test.state()), test.session.clone(), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
