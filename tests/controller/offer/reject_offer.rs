use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::private_offer::OfferStatus;
use velvet::server::{
    controller::offer::{accept_offer, reject_offer},
    model::session::user::SessionUserId,
};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok and the offer marked rejected when the provider declines
async fn returns_success_and_marks_offer_rejected() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let provider = test.user().insert_user("provider@example.com").await?;
    let client = test.user().insert_user("client@example.com").await?;
    let ad = test.ads().insert_ad(provider.id, "Berlin", "escort").await?;
    let offer = test.offers().insert_offer(ad.id, client.id).await?;

    SessionUserId::insert(&test.session, provider.id)
        .await
        .unwrap();

    let result = reject_offer(State(test.state()), test.session.clone(), Path(offer.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let rejected = test.offers().get_offer(offer.id).await?;
    assert_eq!(rejected.status, OfferStatus::Rejected);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when rejecting an offer that was already accepted
async fn returns_conflict_for_accepted_offer() -> Result<(), TestError> {
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

    let result = reject_offer(State(test.state()), test.session.clone(), Path(offer.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
