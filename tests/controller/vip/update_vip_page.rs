use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::EntityTrait;
use velvet::{
    model::vip::UpdateVipPageDto,
    server::{controller::vip::update_vip_page, model::session::user::SessionUserId},
};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok with the edit applied to the stored page
async fn returns_success_and_applies_edit() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("mara@example.com").await?;
    let page = test.vip().insert_page(user.id, "mara_backstage").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = update_vip_page(
        State(test.state()),
        test.session.clone(),
        Json(UpdateVipPageDto {
            title: Some("After hours".to_string()),
            description: None,
            monthly_price_cents: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated = entity::prelude::VipPage::find_by_id(page.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(updated.title, "After hours");
    // The handle never changes
    assert_eq!(updated.handle, "mara_backstage");

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when the edit sets a non-positive price
async fn returns_bad_request_for_zero_price() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("mara@example.com").await?;
    test.vip().insert_page(user.id, "mara_backstage").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = update_vip_page(
        State(test.state()),
        test.session.clone(),
        Json(UpdateVipPageDto {
            title: None,
            description: None,
            monthly_price_cents: Some(0),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a user without a VIP page
async fn returns_not_found_without_page() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("mara@example.com").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = update_vip_page(
        State(test.state()),
        test.session.clone(),
        Json(UpdateVipPageDto {
            title: Some("After hours".to_string()),
            description: None,
            monthly_price_cents: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
