use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use velvet::{
    model::event::UpdateEventDto,
    server::{controller::event::update_event, model::session::user::SessionUserId},
};
use velvet_test_utils::prelude::*;

fn edit() -> UpdateEventDto {
    UpdateEventDto {
        title: Some("Masquerade night, round two".to_string()),
        description: None,
        venue: None,
        city: None,
        starts_at: None,
        ends_at: None,
    }
}

#[tokio::test]
/// Expect 200 ok with the edit applied to the stored event
async fn returns_success_and_applies_edit() -> Result<(), TestError> {
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

    let result = update_event(
        State(test.state()),
        test.session.clone(),
        Path(event.id),
        Json(edit()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated = entity::prelude::Event::find_by_id(event.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(updated.title, "Masquerade night, round two");

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when the edit moves the start past the end
async fn returns_bad_request_for_backwards_schedule() -> Result<(), TestError> {
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

    let mut update = edit();
    update.starts_at = Some(now + Duration::days(5));

    let result = update_event(
        State(test.state()),
        test.session.clone(),
        Path(event.id),
        Json(update),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when someone else's event is edited
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

    let result = update_event(
        State(test.state()),
        test.session.clone(),
        Path(event.id),
        Json(edit()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
