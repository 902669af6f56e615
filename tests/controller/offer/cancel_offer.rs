use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::private_offer::OfferStatus;
use velvet::server::{
    controller::offer::{accept_offer, cancel_offer},
    model::session::user::SessionUserId,
};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok when the client backs out of a pending booking
async fn returns_success_for_pending_offer() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let provider = test.user().insert_user("provider@example.com").await?;
    let client = test.user().insert_user("client@example.com").await?;
    let ad = test.ads().insert_ad(provider.id, "Berlin", "escort").await?;
    let offer = test.offers().insert_offer(ad.id, client.id).await?;

    SessionUserId::insert(&test.session, provider.id)
        .await
        .unwrap();
    accept_offer(State(test.state()), test.session.clone(), Path(offer.id))
        .await
        .unwrap();

    SessionUserId::insert(&test.session, client.id).await.unwrap();

    let result = cancel_offer(State(test.state()), test.session.clone(), Path(offer.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let cancelled = test.offers().get_offer(offer.id).await?;
    assert_eq!(cancelled.status, OfferStatus::Cancelled);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when the provider tries to cancel for the client
async fn returns_conflict_for_provider() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let provider = test.user().insert_user("provider@example.com").await?;
    let client = test.user().insert_user("client@example.com").await?;
    let ad = test.ads().insert_ad(provider.id, "Berlin", "escort").await?;
    let offer = test.offers().insert_offer(ad.id, client.id).await?;

    SessionUserId::insert(&test.session, provider.id)
        .await
        .unwrap();

    let result = cancel_offer(State(test.state()), test.session.clone(), Path(offer.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
