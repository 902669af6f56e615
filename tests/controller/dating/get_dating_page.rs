use axum::{extract::State, http::StatusCode, response::IntoResponse};
use velvet::server::{controller::dating::get_dating_page, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok with the user's own profile
async fn returns_success_with_own_page() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("mara@example.com").await?;
    test.dating().insert_page(user.id, "Berlin").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_dating_page(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found before a profile was ever created
async fn returns_not_found_without_page() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("mara@example.com").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_dating_page(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
