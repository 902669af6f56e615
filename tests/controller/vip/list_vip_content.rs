use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use velvet::{
    model::vip::ContentListQuery,
    server::{controller::vip::list_vip_content, model::session::user::SessionUserId},
};
use velvet_test_utils::prelude::*;

fn first_page() -> ContentListQuery {
    ContentListQuery {
        page: None,
        per_page: None,
    }
}

#[tokio::test]
/// Expect 200 ok for a non-subscriber browsing the preview feed
async fn returns_success_for_non_subscriber() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let creator = test.user().insert_user("mara@example.com").await?;
    let viewer = test.user().insert_user("noah@example.com").await?;
    let page = test.vip().insert_page(creator.id, "mara_backstage").await?;
    test.vip().insert_content(page.id, true).await?;
    test.vip().insert_content(page.id, false).await?;

    SessionUserId::insert(&test.session, viewer.id).await.unwrap();

    let result = list_vip_content(
        State(test.state()),
        test.session.clone(),
        Path("mara_backstage".to_string()),
        Query(first_page()),
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

    let result = list_vip_content(
        State(test.state()),
        test.session.clone(),
        Path("nobody_here".to_string()),
        Query(first_page()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
