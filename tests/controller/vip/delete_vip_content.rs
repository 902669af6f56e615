use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;
use velvet::server::{controller::vip::delete_vip_content, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 204 no content and the item gone from the database
async fn returns_no_content_and_deletes_item() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let creator = test.user().insert_user("mara@example.com").await?;
    let page = test.vip().insert_page(creator.id, "mara_backstage").await?;
    let content = test.vip().insert_content(page.id, false).await?;

    SessionUserId::insert(&test.session, creator.id).await.unwrap();

    let result = delete_vip_content(State(test.state()), test.session.clone(), Path(content.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let remaining = entity::prelude::VipContent::find_by_id(content.id)
        .one(&test.state.db)
        .await?;
    assert!(remaining.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when deleting another creator's content
async fn returns_not_found_for_foreign_content() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let creator = test.user().insert_user("mara@example.com").await?;
    let other = test.user().insert_user("eve@example.com").await?;
    let page = test.vip().insert_page(creator.id, "mara_backstage").await?;
    let content = test.vip().insert_content(page.id, false).await?;
    test.vip().insert_page(other.id, "eve_backstage").await?;

    SessionUserId::insert(&test.session, other.id).await.unwrap();

    let result = delete_vip_content(State(test.state()), test.session.clone(), Path(content.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
