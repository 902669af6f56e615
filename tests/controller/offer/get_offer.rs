use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use velvet::server::{controller::offer::get_offer, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok for the offer's client
async fn returns_success_for_client() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let provider = test.user().insert_user("provider@example.com").await?;
    let client = test.user().insert_user("client@example.com").await?;
    let ad = test.ads().insert_ad(provider.id, "Berlin", "escort").await?;
    let offer = test.offers().insert_offer(ad.id, client.id).await?;

    SessionUserId::insert(&test.session, client.id).await.unwrap();

    let result = get_offer(State(test.state()), test.session.clone(), Path(offer.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a user who is neither client nor provider
async fn returns_not_found_for_outsider() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let provider = test.user().insert_user("provider@example.com").await?;
    let client = test.user().insert_user("client@example.com").await?;
    let outsider = test.user().insert_user("outsider@example.com").await?;
    let ad = test.ads().insert_ad(provider.id, "Berlin", "escort").await?;
    let offer = test.offers().insert_offer(ad.id, client.id).await?;

    SessionUserId::insert(&test.session, outsider.id)
        .await
        .unwrap();

    let result = get_offer(State(test.state()), test.session.clone(), Path(offer.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
