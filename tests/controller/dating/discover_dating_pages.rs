use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use velvet::{
    model::dating::DiscoverQuery,
    server::{controller::dating::discover_dating_pages, model::session::user::SessionUserId},
};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok for a member with a dating profile
async fn returns_success_for_member() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let member = test.user().insert_user("mara@example.com").await?;
    let candidate = test.user().insert_user("noah@example.com").await?;
    test.dating().insert_page(member.id, "Berlin").await?;
    test.dating().insert_page(candidate.id, "Berlin").await?;

    SessionUserId::insert(&test.session, member.id).await.unwrap();

    let result = discover_dating_pages(
        State(test.state()),
        test.session.clone(),
        Query(DiscoverQuery {
            city: Some("Berlin".to_string()),
            limit: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a user who never created a profile
async fn returns_not_found_without_own_page() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("mara@example.com").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = discover_dating_pages(
        State(test.state()),
        test.session.clone(),
        Query(DiscoverQuery {
            city: None,
            limit: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
