use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use velvet::{
    model::event::EventListQuery,
    server::{controller::event::list_events, model::session::user::SessionUserId},
};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 ok for a logged in user browsing upcoming events
async fn returns_success_for_logged_in_user() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let user = test.user().insert_user("mara@example.com").await?;
    let now = Utc::now().naive_utc();
    test.events()
        .insert_event(user.id, "Berlin", now + Duration::days(3), now + Duration::days(3) + Duration::hours(5))
        .await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = list_events(
        State(test.state()),
        test.session.clone(),
        Query(EventListQuery {
            city: Some("Berlin".to_string()),
            page: None,
            per_page: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when no user is logged in
async fn returns_not_found_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_marketplace_tables!()?;

    let result = list_events(
        State(test.state()),
        test.session,
        Query(EventListQuery {
            city: None,
            page: None,
            per_page: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
