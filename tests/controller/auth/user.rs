use axum::{extract::State, http::StatusCode, response::IntoResponse};
use velvet::server::{controller::auth::get_auth_user, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok with the logged in user's information
async fn returns_success_for_logged_in_user() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let user = test.user().insert_user("ada@example.com").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_auth_user(State(test.state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when no user is logged in
async fn returns_not_found_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = get_auth_user(State(test.state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 404 and a cleared session when the session user no longer exists
async fn returns_not_found_and_clears_stale_session() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let non_existent_user_id = 999;
    SessionUserId::insert(&test.session, non_existent_user_id)
        .await
        .unwrap();

    let result = get_auth_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}
