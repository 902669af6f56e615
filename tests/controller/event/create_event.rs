use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use velvet::{
    model::event::CreateEventDto,
    server::{controller::event::create_event, model::session::user::SessionUserId},
};
use velvet_test_utils::prelude::*;

fn posting() -> CreateEventDto {
    let now = Utc::now().naive_utc();
    CreateEventDto {
        title: "Masquerade night".to_string(),
        description: "Doors at ten, masks required.".to_string(),
        venue: "Club Aurora".to_string(),
        city: "Berlin".to_string(),
        starts_at: now + Duration::days(7),
        ends_at: now + Duration::days(7) + Duration::hours(6),
    }
}

#[tokio::test]
/// Expect 201 created with the event stored under the organizer
async fn returns_created_and_stores_event() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let organizer = test.user().insert_user("mara@example.com").await?;

    SessionUserId::insert(&test.session, organizer.id)
        .await
        .unwrap();

    let result = create_event(State(test.state()), test.session.clone(), Json(posting())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let stored = entity::prelude::Event::find()
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(stored.organizer_id, organizer.id);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when the event ends before it starts
async fn returns_bad_request_for_backwards_schedule() -> Result<(), TestError> {
    let mut test = test_setup_with_marketplace_tables!()?;
    let organizer = test.user().insert_user("mara@example.com").await?;

    SessionUserId::insert(&test.session, organizer.id)
        .await
        .unwrap();

    let mut event = posting();
    event.ends_at = event.starts_at - Duration::hours(1);

    let result = create_event(State(test.state()), test.session.clone(), Json(event)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
