use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use velvet::server::{controller::ad::get_ad, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok for an active listing
async fn returns_success_for_active_ad() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let owner = test.user().insert_user("owner@example.com").await?;
    let viewer = test.user().insert_user("viewer@example.com").await?;
    let ad = test.ads().insert_ad(owner.id, "Berlin", "escort").await?;

    SessionUserId::insert(&test.session, viewer.id).await.unwrap();

    let result = get_ad(State(test.state()), test.session.clone(), Path(ad.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when a non-owner requests an inactive listing
async fn returns_not_found_for_inactive_ad() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let owner = test.user().insert_user("owner@example.com").await?;
    let viewer = test.user().insert_user("viewer@example.com").await?;
    let ad = test.ads().insert_ad(owner.id, "Berlin", "escort").await?;
    test.ads().deactivate_ad(ad.id).await?;

    SessionUserId::insert(&test.session, viewer.id).await.unwrap();

    let result = get_ad(State(test.state()), test.session.clone(), Path(ad.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for an unknown ad ID
async fn returns_not_found_for_missing_ad() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("ada@example.com").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_ad(State(test.state()), test.session.clone(), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
