use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use velvet::server::{controller::vip::get_vip_page, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok for any logged in viewer of an existing page
async fn returns_success_for_viewer() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let creator = test.user().insert_user("mara@example.com").await?;
    let viewer = test.user().insert_user("noah@example.com").await?;
    test.vip().insert_page(creator.id, "mara_backstage").await?;

    SessionUserId::insert(&test.session, viewer.id).await.unwrap();

    let result = get_vip_page(
        State(test.state()),
        test.session.clone(),
        Path("mara_backstage".to_string()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for an unknown handle
async fn returns_not_found_for_unknown_handle() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let viewer = test.user().insert_user("noah@example.com").await?;

    SessionUserId::insert(&test.session, viewer.id).await.unwrap();

    let result = get_vip_page(
        State(test.state()),
        test.session.clone(),
        Path("nobody_here".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
