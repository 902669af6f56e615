use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::vip_subscription::SubscriptionStatus;
use velvet::server::{controller::vip::unsubscribe_vip_page, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok with the subscription cancelled but the period kept
async fn returns_success_and_cancels_subscription() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let creator = test.user().insert_user("mara@example.com").await?;
    let fan = test.user().insert_user("noah@example.com").await?;
    let page = test.vip().insert_page(creator.id, "mara_backstage").await?;
    let subscription = test.vip().insert_subscription(page.id, fan.id).await?;

    SessionUserId::insert(&test.session, fan.id).await.unwrap();

    let result = unsubscribe_vip_page(
        State(test.state()),
        test.session.clone(),
        Path("mara_backstage".to_string()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let cancelled = test.vip().get_subscription(subscription.id).await?;
    assert_eq!(cancelled.status, SubscriptionStatus::Cancelled);
    // The paid period is untouched so access runs to its end
    assert_eq!(cancelled.current_period_end, subscription.current_period_end);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a fan who never subscribed
async fn returns_not_found_without_subscription() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let creator = test.user().insert_user("mara@example.com").await?;
    let fan = test.user().insert_user("noah@example.com").await?;
    test.vip().insert_page(creator.id, "mara_backstage").await?;

    SessionUserId::insert(&test.session, fan.id).await.unwrap();

    let result = unsubscribe_vip_page(
        State(test.state()),
        test.session.clone(),
        Path("mara_backstage".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when the subscription already expired
async fn returns_conflict_for_expired_subscription() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let creator = test.user().insert_user("mara@example.com").await?;
    let fan = test.user().insert_user("noah@example.com").await?;
    let page = test.vip().insert_page(creator.id, "mara_backstage").await?;
    let subscription = test.vip().insert_subscription(page.id, fan.id).await?;
    test.vip().expire_subscription(subscription.id).await?;

    SessionUserId::insert(&test.session, fan.id).await.unwrap();

    let result = unsubscribe_vip_page(
        State(test.state()),
        test.session.clone(),
        Path("mara_backstage".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
