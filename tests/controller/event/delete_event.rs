use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use velvet::server::{controller::event::delete_event, model::session::user::SessionUserId};
use velvet_test_utils::prelude::*;

#[tokio::test]
/// Expect 204 no content and the event gone from the database
async fn returns_no_content_and_deletes_event() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let organizer = test.user().insert_user("mara@example.com").await?;
    let now = Utc::now().naive_utc();
    let event = test
        .events()
        .insert_event(organizer.id, "Berlin", now + Duration::days(3), now + Duration::days(4))
        .await?;

    SessionUserId::insert(&test.session, organizer.id)
        .await
        .unwrap();

    let result = delete_event(State(test.state()), test.session.clone(), Path(event.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let remaining = entity::prelude::Event::find_by_id(event.id)
        .one(&test.state.db)
        .await?;
    assert!(remaining.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when someone else's event is deleted
async fn returns_not_found_for_non_organizer() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let organizer = test.user().insert_user("mara@example.com").await?;
    let stranger = test.user().insert_user("noah@example.com").await?;
    let now = Utc::now().naive_utc();
    let event = test
        .events()
        .insert_event(organizer.id, "Berlin", now + Duration::days(3), now + Duration::days(4))
        .await?;

    SessionUserId::insert(&test.session, stranger.id)
        .await
        .unwrap();

    let result = delete_event(State(test.state()), test.session.clone(), Path(event.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
