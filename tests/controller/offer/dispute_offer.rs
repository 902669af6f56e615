use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use entity::private_offer::OfferStatus;
use velvet::server::{controller::offer::dispute_offer, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok while the 48 hour dispute window is still open
async fn returns_success_inside_dispute_window() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let provider = test.user().insert_user("provider@example.com").await?;
    let client = test.user().insert_user("client@example.com").await?;
    let ad = test.ads().insert_ad(provider.id, "Berlin", "escort").await?;
    let offer = test.offers().insert_offer(ad.id, client.id).await?;
    test.offers()
        .confirm_offer(offer.id, Utc::now().naive_utc())
        .await?;

    SessionUserId::insert(&test.session, client.id).await.unwrap();

    let result = dispute_offer(State(test.state()), test.session.clone(), Path(offer.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let disputed = test.offers().get_offer(offer.id).await?;
    assert_eq!(disputed.status, OfferStatus::Disputed);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict once the completion is older than 48 hours
async fn returns_conflict_after_window_closes() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let provider = test.user().insert_user("provider@example.com").await?;
    let client = test.user().insert_user("client@example.com").await?;
    let ad = test.ads().insert_ad(provider.id, "Berlin", "escort").await?;
    let offer = test.offers().insert_offer(ad.id, client.id).await?;
    test.offers()
        .confirm_offer(offer.id, Utc::now().naive_utc() - Duration::hours(49))
        .await?;

    SessionUserId::insert(&test.session, client.id).await.unwrap();

    let result = dispute_offer(State(test.state()), test.session.clone(), Path(offer.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when the provider tries to open a dispute
async fn returns_conflict_for_provider() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let provider = test.user().insert_user("provider@example.com").await?;
    let client = test.user().insert_user("client@example.com").await?;
    let ad = test.ads().insert_ad(provider.id, "Berlin", "escort").await?;
    let offer = test.offers().insert_offer(ad.id, client.id).await?;
    test.offers()
        .confirm_offer(offer.id, Utc::now().naive_utc())
        .await?;

    SessionUserId::insert(&test.session, provider.id)
        .await
        .unwrap();

    let result = dispute_offer(State(test.state()), test.session.clone(), Path(offer.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
