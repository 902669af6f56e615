use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::EntityTrait;
use velvet::{
    model::ad::CreatePrivateAdDto,
    server::{controller::ad::create_ad, model::session::user::SessionUserId},
};
use velvet_test_utils::prelude::*;

fn listing() -> CreatePrivateAdDto {
    CreatePrivateAdDto {
        title: "Evening companionship".to_string(),
        description: "Available for dinner dates and private events.".to_string(),
        category: "escort".to_string(),
        city: "Berlin".to_string(),
        price_hour_cents: 25_000,
        cover_url: None,
    }
}

#[tokio::test]
/// Expect 201 created and the listing stored for the logged in user
async fn returns_created_and_stores_listing() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("ada@example.com").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = create_ad(State(test.state()), test.session.clone(), Json(listing())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let stored = entity::prelude::PrivateAd::find()
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(stored.owner_id, user.id);
    assert!(stored.active);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a title under three characters
async fn returns_bad_request_for_short_title() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("ada@example.com").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let mut ad = listing();
    ad.title = "Ad".to_string();

    let result = create_ad(State(test.state()), test.session.clone(), Json(ad)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a non-positive hourly price
async fn returns_bad_request_for_zero_price() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("ada@example.com").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let mut ad = listing();
    ad.price_hour_cents = 0;

    let result = create_ad(State(test.state()), test.session.clone(), Json(ad)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
