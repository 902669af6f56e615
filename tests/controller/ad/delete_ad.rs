use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;
use velvet::server::{controller::ad::delete_ad, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 204 no content and the listing gone from the database
async fn returns_no_content_and_deletes_ad() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let owner = test.user().insert_user("owner@example.com").await?;
    let ad = test.ads().insert_ad(owner.id, "Berlin", "escort").await?;

    SessionUserId::insert(&test.session, owner.id).await.unwrap();

    let result = delete_ad(State(test.state()), test.session.clone(), Path(ad.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let remaining = entity::prelude::PrivateAd::find_by_id(ad.id)
        .one(&test.state.db)
        .await?;
    assert!(remaining.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict while the listing still has offers in flight
async fn returns_conflict_with_open_offers() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let owner = test.user().insert_user("owner@example.com").await?;
    let client = test.user().insert_user("client@example.com").await?;
    let ad = test.ads().insert_ad(owner.id, "Berlin", "escort").await?;
    test.offers().insert_offer(ad.id, client.id).await?;

    SessionUserId::insert(&test.session, owner.id).await.unwrap();

    let result = delete_ad(State(test.state()), test.session.clone(), Path(ad.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when someone else's ad is deleted
async fn returns_not_found_for_non_owner() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let owner = test.user().insert_user("owner@example.com").await?;
    let stranger = test.user().insert_user("stranger@example.com").await?;
    let ad = test.ads().insert_ad(owner.id, "Berlin", "escort").await?;

    SessionUserId::insert(&test.session, stranger.id)
        .await
        .unwrap();

    let result = delete_ad(State(test.state()), test.session.clone(), Path(ad.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
