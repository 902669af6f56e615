use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, Utc};
use velvet::{
    model::ad::UpdatePrivateAdDto,
    server::{controller::ad::update_ad, model::session::user::SessionUserId},
};
use velvet_test_utils::prelude::*;

fn edit() -> UpdatePrivateAdDto {
    UpdatePrivateAdDto {
        title: Some("Weekend companionship".to_string()),
        description: None,
        category: None,
        city: None,
        price_hour_cents: None,
        cover_url: None,
        active: None,
    }
}

#[tokio::test]
/// Expect 200 ok with the edit applied and the expiry clock restarted
async fn returns_success_and_renews_expiry() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let owner = test.user().insert_user("owner@example.com").await?;
    let ad = test.ads().insert_ad(owner.id, "Berlin", "escort").await?;
    test.ads()
        .backdate_ad_expiry(ad.id, Utc::now().naive_utc() - Duration::days(1))
        .await?;

    SessionUserId::insert(&test.session, owner.id).await.unwrap();

    let result = update_ad(
        State(test.state()),
        test.session.clone(),
        Path(ad.id),
        Json(edit()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated = test.ads().get_ad(ad.id).await?;
    assert_eq!(updated.title, "Weekend companionship");
    assert!(updated.expires_at > Utc::now().naive_utc());

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when someone else's ad is edited
async fn returns_not_found_for_non_owner() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let owner = test.user().insert_user("owner@example.com").await?;
    let stranger = test.user().insert_user("stranger@example.com").await?;
    let ad = test.ads().insert_ad(owner.id, "Berlin", "escort").await?;

    SessionUserId::insert(&test.session, stranger.id)
        .await
        .unwrap();

    let result = update_ad(
        State(test.state()),
        test.session.clone(),
        Path(ad.id),
        Json(edit()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when the edit sets a non-positive price
async fn returns_bad_request_for_zero_price() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let owner = test.user().insert_user("owner@example.com").await?;
    let ad = test.ads().insert_ad(owner.id, "Berlin", "escort").await?;

    SessionUserId::insert(&test.session, owner.id).await.unwrap();

    let mut update = edit();
    update.price_hour_cents = Some(0);

    let result = update_ad(
        State(test.state()),
        test.session.clone(),
        Path(ad.id),
        Json(update),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
