use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::EntityTrait;
use velvet::{
    model::user::UpdateProfileDto,
    server::{controller::user::update_profile, model::session::user::SessionUserId},
};
use velvet_test_utils::prelude::*;

fn profile_update() -> UpdateProfileDto {
    UpdateProfileDto {
        display_name: Some("Grace".to_string()),
        city: Some("Berlin".to_string()),
        bio: None,
        avatar_url: None,
    }
}

#[tokio::test]
/// Expect 200 ok and only the submitted fields changed in the database
async fn returns_success_and_updates_submitted_fields() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let user = test.user().insert_user("ada@example.com").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = update_profile(
        State(test.state()),
        test.session.clone(),
        Json(profile_update()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated = entity::prelude::VelvetUser::find_by_id(user.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(updated.display_name, "Grace");
    assert_eq!(updated.city.as_deref(), Some("Berlin"));
    // Fields absent from the request keep their stored value
    assert_eq!(updated.email, "ada@example.com");

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a one character display name
async fn returns_bad_request_for_short_display_name() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let user = test.user().insert_user("ada@example.com").await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let mut update = profile_update();
    update.display_name = Some("A".to_string());

    let result = update_profile(State(test.state()), test.session.clone(), Json(update)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when no user is logged in
async fn returns_not_found_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = update_profile(State(test.state()), test.session, Json(profile_update())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
