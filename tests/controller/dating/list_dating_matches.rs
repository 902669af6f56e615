use axum::{extract::State, http::StatusCode, response::IntoResponse};
use velvet::server::{controller::dating::list_dating_matches, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok for a member with a dating profile
async fn returns_success_for_member() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("mara@example.com").await?;
    test.dating().insert_page(user.id, "Berlin").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = list_dating_matches(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a user who never created a profile
async fn returns_not_found_without_own_page() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("mara@example.com").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = list_dating_matches(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
