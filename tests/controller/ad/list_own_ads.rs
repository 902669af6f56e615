use axum::{extract::State, http::StatusCode, response::IntoResponse};
use velvet::server::{controller::ad::list_own_ads, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok with the user's own listings, inactive ones included
async fn returns_success_for_logged_in_user() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("ada@example.com").await?;
    let ad = test.ads().insert_ad(user.id, "Berlin", "escort").await?;
    test.ads().deactivate_ad(ad.id).await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = list_own_ads(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when no user is logged in
async fn returns_not_found_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_marketplace_tables!()?;

    let result = list_own_ads(State(test.state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
